//! Configuration errors.
//!
//! Game rules never fail; illegal moves are reported as `false`.

use thiserror::Error;

use crate::types::MIN_BOARD_SIDE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board width {0} is below the minimum of {}", MIN_BOARD_SIDE)]
    WidthTooSmall(usize),
    #[error("board height {0} is below the minimum of {}", MIN_BOARD_SIDE)]
    HeightTooSmall(usize),
    #[error("gravity interval must be greater than zero")]
    ZeroInterval,
}
