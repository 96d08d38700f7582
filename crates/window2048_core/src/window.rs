use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Position;
use crate::direction::Direction;

/// Rectangle covered by the window, right and bottom exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowBounds {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl WindowBounds {
    pub const fn contains(&self, pos: Position) -> bool {
        pos.col >= self.left && pos.col < self.right && pos.row >= self.top && pos.row < self.bottom
    }
}

/// Square sub-rectangle that pans over the grid one cell at a time.
///
/// The offset is clamped so that the window never leaves the grid. It only
/// highlights cells; slides always act on the whole board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    grid_size: usize,
    size: usize,
    x: usize,
    y: usize,
}

impl Window {
    /// Window at the top-left corner. A window larger than the grid is
    /// shrunk to the grid.
    pub fn new(grid_size: usize, size: usize) -> Self {
        Self {
            grid_size,
            size: size.min(grid_size),
            x: 0,
            y: 0,
        }
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    pub const fn offset(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Largest value either offset coordinate can take.
    pub const fn max_offset(&self) -> usize {
        self.grid_size - self.size
    }

    /// Moves the window one cell towards `direction`, staying inside the
    /// grid. Returns the new offset.
    pub fn pan(&mut self, direction: Direction) -> (usize, usize) {
        let max = self.max_offset();
        match direction {
            Direction::Up => self.y = self.y.saturating_sub(1),
            Direction::Left => self.x = self.x.saturating_sub(1),
            Direction::Down => self.y = (self.y + 1).min(max),
            Direction::Right => self.x = (self.x + 1).min(max),
        }
        debug!("Window moved to: x={}, y={}", self.x, self.y);
        self.offset()
    }

    pub const fn bounds(&self) -> WindowBounds {
        WindowBounds {
            left: self.x,
            top: self.y,
            right: self.x + self.size,
            bottom: self.y + self.size,
        }
    }

    pub const fn contains(&self, pos: Position) -> bool {
        self.bounds().contains(pos)
    }

    pub const fn reset(&mut self) {
        self.x = 0;
        self.y = 0;
    }
}
