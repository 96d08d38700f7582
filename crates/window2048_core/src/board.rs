use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use crate::direction::Direction;
use crate::rng::TileRng;

/// Tiles placed by [`Board::initialize`].
pub const INITIAL_TILES: usize = 2;

/// Value of the opening tiles and of most spawns.
pub const BASE_TILE: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board must have at least one row")]
    Empty,

    #[error("row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("invalid tile value {value} at row {row}, column {col}")]
    InvalidTile { row: usize, col: usize, value: u32 },
}

/// Empty cells hold 0, tiles hold a power of two starting at 2.
pub const fn is_valid_tile(value: u32) -> bool {
    value == 0 || (value >= BASE_TILE && value.is_power_of_two())
}

/// Square grid of tile values, stored row-major.
///
/// The size is fixed at construction. All cell access is bounds-checked, so
/// traversal never indexes outside the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<u32>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Builds a board from explicit rows, rejecting ragged input and values
    /// that are not tiles.
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self, BoardError> {
        let size = rows.len();
        if size == 0 {
            return Err(BoardError::Empty);
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(BoardError::InvalidTile { row, col, value });
                }
            }
            cells.extend_from_slice(values);
        }
        Ok(Self { size, cells })
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    const fn index(&self, pos: Position) -> Option<usize> {
        if pos.row < self.size && pos.col < self.size {
            Some(pos.col + pos.row * self.size)
        } else {
            None
        }
    }

    pub fn get(&self, pos: Position) -> Option<u32> {
        self.index(pos).and_then(|i| self.cells.get(i)).copied()
    }

    fn set(&mut self, pos: Position, value: u32) {
        if let Some(cell) = self.index(pos).and_then(|i| self.cells.get_mut(i)) {
            *cell = value;
        }
    }

    /// Row-major snapshot of every cell.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.size.max(1))
    }

    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(<[u32]>::to_vec).collect()
    }

    pub fn empty_positions(&self) -> Vec<Position> {
        self.positions()
            .filter(|&pos| self.get(pos) == Some(0))
            .collect()
    }

    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Clears the grid and places the opening tiles.
    pub fn initialize<R: TileRng + ?Sized>(&mut self, rng: &mut R) {
        self.initialize_with(INITIAL_TILES, rng);
    }

    pub fn initialize_with<R: TileRng + ?Sized>(&mut self, tiles: usize, rng: &mut R) {
        self.cells.fill(0);
        for _ in 0..tiles {
            self.spawn_random_tile(BASE_TILE, rng);
        }
    }

    /// Places `value` on a uniformly chosen empty cell.
    ///
    /// A full board is left untouched and `None` is returned.
    pub fn spawn_random_tile<R: TileRng + ?Sized>(
        &mut self,
        value: u32,
        rng: &mut R,
    ) -> Option<Position> {
        let empty = self.empty_positions();
        if empty.is_empty() {
            debug!("Board full, no tile spawned");
            return None;
        }
        let pos = *empty.get(rng.pick(empty.len()))?;
        self.set(pos, value);
        debug!("Spawned {value} at row {}, column {}", pos.row, pos.col);
        Some(pos)
    }

    /// Cells in processing order for a slide: the edge being moved towards
    /// comes first on the travel axis.
    fn traversal(&self, direction: Direction) -> Vec<Position> {
        let (dx, dy) = direction.vector();
        let ordered = |reverse: bool| -> Vec<usize> {
            if reverse {
                (0..self.size).rev().collect()
            } else {
                (0..self.size).collect()
            }
        };
        let rows = ordered(dy == 1);
        let cols = ordered(dx == 1);
        rows.iter()
            .flat_map(|&row| cols.iter().map(move |&col| Position::new(row, col)))
            .collect()
    }

    fn step(&self, pos: Position, dx: i32, dy: i32) -> Option<Position> {
        let row = pos.row.checked_add_signed(dy as isize)?;
        let col = pos.col.checked_add_signed(dx as isize)?;
        let next = Position::new(row, col);
        self.index(next).map(|_| next)
    }

    /// Slides every tile on the board towards `direction`, merging equal
    /// neighbours at most once per cell.
    ///
    /// Returns whether any tile moved or merged.
    pub fn slide(&mut self, direction: Direction) -> bool {
        let mut merged = vec![false; self.cells.len()];
        let (dx, dy) = direction.vector();
        let mut moved = false;

        for origin in self.traversal(direction) {
            let value = match self.get(origin) {
                Some(0) | None => continue,
                Some(value) => value,
            };

            let mut farthest = origin;
            let mut next = self.step(origin, dx, dy);
            while let Some(candidate) = next {
                if self.get(candidate) != Some(0) {
                    break;
                }
                farthest = candidate;
                next = self.step(candidate, dx, dy);
            }

            // The largest u32 power of two has nothing to merge into
            let merge_target = value.checked_mul(2).and_then(|doubled| {
                next.filter(|&target| {
                    self.get(target) == Some(value)
                        && self
                            .index(target)
                            .and_then(|i| merged.get(i))
                            .is_some_and(|&done| !done)
                })
                .map(|target| (target, doubled))
            });

            if let Some((target, doubled)) = merge_target {
                self.set(target, doubled);
                self.set(origin, 0);
                if let Some(mark) = self.index(target).and_then(|i| merged.get_mut(i)) {
                    *mark = true;
                }
                moved = true;
            } else if farthest != origin {
                self.set(farthest, value);
                self.set(origin, 0);
                moved = true;
            }
        }

        trace!("Slide {direction}: moved = {moved}");
        moved
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &value in row {
                if value == 0 {
                    write!(f, "    .")?;
                } else {
                    write!(f, "{value:>5}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
