use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const GRID_SIZE: usize = 16;
pub const WINDOW_SIZE: usize = 4;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid size must be at least 1")]
    EmptyGrid,

    #[error("window size {window} must be between 1 and the grid size {grid}")]
    WindowSize { window: usize, grid: usize },

    #[error("four probability {0} is outside [0, 1]")]
    Probability(f64),
}

/// Tiles added after every slide that changed the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnPolicy {
    pub tiles_per_move: usize,
    /// Chance that a spawned tile is a 4 instead of a 2.
    pub four_probability: f64,
}

impl Default for SpawnPolicy {
    fn default() -> Self {
        Self {
            tiles_per_move: 2,
            four_probability: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub grid_size: usize,
    pub window_size: usize,
    pub initial_tiles: usize,
    pub spawn: SpawnPolicy,
    /// Fixed seed for reproducible games. A random seed is used when unset.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            window_size: WINDOW_SIZE,
            initial_tiles: crate::board::INITIAL_TILES,
            spawn: SpawnPolicy::default(),
            seed: None,
        }
    }
}

impl SessionConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.window_size == 0 || self.window_size > self.grid_size {
            return Err(ConfigError::WindowSize {
                window: self.window_size,
                grid: self.grid_size,
            });
        }
        let p = self.spawn.four_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::Probability(p));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_classic_layout() {
        let config = SessionConfig::default();
        assert_eq!(config.grid_size, 16);
        assert_eq!(config.window_size, 4);
        assert_eq!(config.initial_tiles, 2);
        assert_eq!(config.spawn.tiles_per_move, 2);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_sizes() {
        let config = SessionConfig {
            grid_size: 0,
            ..SessionConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyGrid));

        let config = SessionConfig {
            grid_size: 3,
            ..SessionConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::WindowSize { window: 4, grid: 3 })
        );

        let config = SessionConfig {
            window_size: 0,
            ..SessionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_bad_probability() {
        let mut config = SessionConfig::default();
        config.spawn.four_probability = 1.5;
        assert_eq!(config.validate(), Err(ConfigError::Probability(1.5)));
        config.spawn.four_probability = f64::NAN;
        assert!(config.validate().is_err());
    }
}
