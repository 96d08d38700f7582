use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{BASE_TILE, Board, Position};
use crate::config::{ConfigError, SessionConfig};
use crate::direction::Direction;
use crate::rng::{TileRng, rng_from_seed};
use crate::window::{Window, WindowBounds};

/// Input accepted by a [`Session`]. Adapters translate keys, swipes or
/// buttons into one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Pan(Direction),
    Slide(Direction),
}

impl Command {
    /// Key bindings of the browser version: WASD pans the window, arrow keys
    /// slide the tiles. Any other key maps to `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        let command = match key {
            "w" | "W" => Self::Pan(Direction::Up),
            "a" | "A" => Self::Pan(Direction::Left),
            "s" | "S" => Self::Pan(Direction::Down),
            "d" | "D" => Self::Pan(Direction::Right),
            "ArrowUp" => Self::Slide(Direction::Up),
            "ArrowDown" => Self::Slide(Direction::Down),
            "ArrowLeft" => Self::Slide(Direction::Left),
            "ArrowRight" => Self::Slide(Direction::Right),
            _ => return None,
        };
        Some(command)
    }
}

/// What a command changed, so adapters know whether to redraw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOutcome {
    Panned { offset: (usize, usize) },
    Slid { moved: bool, spawned: Vec<Position> },
}

impl CommandOutcome {
    pub const fn changed(&self) -> bool {
        match self {
            Self::Panned { .. } => true,
            Self::Slid { moved, .. } => *moved,
        }
    }
}

/// One game: the board, the window and the random source feeding spawns.
#[derive(Debug, Clone)]
pub struct Session<R: TileRng = fastrand::Rng> {
    config: SessionConfig,
    board: Board,
    window: Window,
    rng: R,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        let rng = rng_from_seed(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: TileRng> Session<R> {
    pub fn with_rng(config: SessionConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut session = Self {
            board: Board::new(config.grid_size),
            window: Window::new(config.grid_size, config.window_size),
            config,
            rng,
        };
        session.restart();
        Ok(session)
    }

    /// Clears the board, places the opening tiles and moves the window back
    /// to the top-left corner.
    pub fn restart(&mut self) {
        self.board
            .initialize_with(self.config.initial_tiles, &mut self.rng);
        self.window.reset();
        info!("New game on a {0}x{0} grid", self.config.grid_size);
        debug!("\n{}", self.board);
    }

    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        match command {
            Command::Pan(direction) => CommandOutcome::Panned {
                offset: self.window.pan(direction),
            },
            Command::Slide(direction) => {
                let moved = self.board.slide(direction);
                let spawned = if moved {
                    self.spawn_after_move()
                } else {
                    Vec::new()
                };
                CommandOutcome::Slid { moved, spawned }
            }
        }
    }

    pub fn pan(&mut self, direction: Direction) -> (usize, usize) {
        self.window.pan(direction)
    }

    pub fn slide(&mut self, direction: Direction) -> bool {
        self.apply(Command::Slide(direction)).changed()
    }

    fn spawn_after_move(&mut self) -> Vec<Position> {
        let policy = &self.config.spawn;
        let mut spawned = Vec::with_capacity(policy.tiles_per_move);
        for _ in 0..policy.tiles_per_move {
            let value = if self.rng.chance(policy.four_probability) {
                BASE_TILE * 2
            } else {
                BASE_TILE
            };
            if let Some(pos) = self.board.spawn_random_tile(value, &mut self.rng) {
                spawned.push(pos);
            }
        }
        spawned
    }

    /// Row-major snapshot of the whole grid.
    pub fn grid(&self) -> Vec<u32> {
        self.board.cells().to_vec()
    }

    pub const fn window_bounds(&self) -> WindowBounds {
        self.window.bounds()
    }

    pub const fn board(&self) -> &Board {
        &self.board
    }

    pub const fn window(&self) -> &Window {
        &self.window
    }

    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpawnPolicy;

    /// Always picks the first candidate and never rolls a 4.
    struct FirstCell;

    impl TileRng for FirstCell {
        fn pick(&mut self, _len: usize) -> usize {
            0
        }

        fn chance(&mut self, _p: f64) -> bool {
            false
        }
    }

    #[test]
    fn starts_with_two_tiles_and_window_at_origin() {
        let session = Session::new(SessionConfig::with_seed(5)).unwrap();
        assert_eq!(session.board().tile_count(), 2);
        assert_eq!(session.grid().len(), 256);
        assert_eq!(
            session.window_bounds(),
            WindowBounds {
                left: 0,
                top: 0,
                right: 4,
                bottom: 4
            }
        );
    }

    #[test]
    fn seeded_sessions_are_reproducible() {
        let moves = [
            Direction::Left,
            Direction::Down,
            Direction::Right,
            Direction::Up,
            Direction::Left,
        ];
        let mut a = Session::new(SessionConfig::with_seed(1234)).unwrap();
        let mut b = Session::new(SessionConfig::with_seed(1234)).unwrap();
        for dir in moves {
            assert_eq!(
                a.apply(Command::Slide(dir)),
                b.apply(Command::Slide(dir))
            );
        }
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn successful_slide_spawns_per_policy() {
        let config = SessionConfig {
            grid_size: 4,
            ..SessionConfig::default()
        };
        let mut session = Session::with_rng(config, FirstCell).unwrap();
        // FirstCell fills (0,0) then (0,1).
        assert_eq!(session.board().to_rows()[0], vec![2, 2, 0, 0]);

        let outcome = session.apply(Command::Slide(Direction::Right));
        assert_eq!(
            outcome,
            CommandOutcome::Slid {
                moved: true,
                spawned: vec![Position::new(0, 0), Position::new(0, 1)],
            }
        );
        assert_eq!(session.board().to_rows()[0], vec![2, 2, 0, 4]);
    }

    #[test]
    fn blocked_slide_spawns_nothing() {
        let config = SessionConfig {
            grid_size: 4,
            initial_tiles: 1,
            ..SessionConfig::default()
        };
        let mut session = Session::with_rng(config, FirstCell).unwrap();
        let before = session.grid();
        let outcome = session.apply(Command::Slide(Direction::Up));
        assert!(!outcome.changed());
        assert_eq!(
            outcome,
            CommandOutcome::Slid {
                moved: false,
                spawned: Vec::new()
            }
        );
        assert_eq!(session.grid(), before);
    }

    #[test]
    fn four_probability_one_spawns_fours() {
        let config = SessionConfig {
            seed: Some(8),
            initial_tiles: 1,
            spawn: SpawnPolicy {
                tiles_per_move: 3,
                four_probability: 1.0,
            },
            ..SessionConfig::default()
        };
        let mut session = Session::new(config).unwrap();
        let moved = [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ]
        .into_iter()
        .find(|&dir| session.slide(dir));
        assert!(moved.is_some(), "a lone tile can always move somewhere");
        assert_eq!(session.board().tile_count(), 4);
        assert_eq!(
            session.grid().iter().filter(|&&v| v == 4).count(),
            3,
            "every spawned tile is a 4"
        );
    }

    #[test]
    fn pan_does_not_touch_the_board() {
        let mut session = Session::new(SessionConfig::with_seed(77)).unwrap();
        let grid = session.grid();
        assert_eq!(
            session.apply(Command::Pan(Direction::Right)),
            CommandOutcome::Panned { offset: (1, 0) }
        );
        assert_eq!(session.pan(Direction::Down), (1, 1));
        assert_eq!(session.grid(), grid);
    }

    #[test]
    fn restart_resets_board_and_window() {
        let mut session = Session::new(SessionConfig::with_seed(3)).unwrap();
        for dir in [Direction::Down, Direction::Right, Direction::Down] {
            session.pan(dir);
            session.slide(dir);
        }
        session.restart();
        assert_eq!(session.window().offset(), (0, 0));
        assert_eq!(session.board().tile_count(), 2);
    }

    #[test]
    fn key_bindings() {
        assert_eq!(Command::from_key("w"), Some(Command::Pan(Direction::Up)));
        assert_eq!(Command::from_key("D"), Some(Command::Pan(Direction::Right)));
        assert_eq!(
            Command::from_key("ArrowLeft"),
            Some(Command::Slide(Direction::Left))
        );
        assert_eq!(Command::from_key("Enter"), None);
        assert_eq!(Command::from_key(""), None);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SessionConfig {
            window_size: 32,
            ..SessionConfig::default()
        };
        assert!(Session::new(config).is_err());
    }
}
