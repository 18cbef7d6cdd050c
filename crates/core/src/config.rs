//! Session configuration, fixed at construction.

use crate::error::ConfigError;
use crate::types::{
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_GRAVITY_INTERVAL_NS, MIN_BOARD_SIDE,
};

/// Constructor-time settings of a [`Game`](crate::game::Game)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board_width: usize,
    pub board_height: usize,
    /// Nanoseconds between gravity steps
    pub gravity_interval_ns: u64,
    pub ghost_enabled: bool,
    /// Seed of the piece sequencer
    pub seed: u32,
}

impl GameConfig {
    pub fn with_board(mut self, width: usize, height: usize) -> Self {
        self.board_width = width;
        self.board_height = height;
        self
    }

    pub fn with_gravity_interval_ns(mut self, interval_ns: u64) -> Self {
        self.gravity_interval_ns = interval_ns;
        self
    }

    pub fn with_ghost(mut self, enabled: bool) -> Self {
        self.ghost_enabled = enabled;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Reject sizes that cannot hold a spawned piece and a zero interval
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_width < MIN_BOARD_SIDE {
            return Err(ConfigError::WidthTooSmall(self.board_width));
        }
        if self.board_height < MIN_BOARD_SIDE {
            return Err(ConfigError::HeightTooSmall(self.board_height));
        }
        if self.gravity_interval_ns == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            gravity_interval_ns: DEFAULT_GRAVITY_INTERVAL_NS,
            ghost_enabled: true,
            seed: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        assert_eq!(config.board_width, 10);
        assert_eq!(config.board_height, 24);
        assert_eq!(config.gravity_interval_ns, 400_000_000);
        assert!(config.ghost_enabled);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_degenerate_settings() {
        let base = GameConfig::default();
        assert_eq!(
            base.with_board(3, 24).validate(),
            Err(ConfigError::WidthTooSmall(3))
        );
        assert_eq!(
            base.with_board(10, 2).validate(),
            Err(ConfigError::HeightTooSmall(2))
        );
        assert_eq!(
            base.with_gravity_interval_ns(0).validate(),
            Err(ConfigError::ZeroInterval)
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ConfigError::WidthTooSmall(2).to_string(),
            "board width 2 is below the minimum of 4"
        );
    }
}
