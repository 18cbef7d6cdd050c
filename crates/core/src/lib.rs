//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game: the settled grid,
//! the current piece and its ghost, collision and rotation with wall kicks,
//! row clearing, 7-bag sequencing and the gravity/lock-delay state machine.
//! It performs no I/O and never reads a clock, making it:
//!
//! - **Deterministic**: Same seed and input script produce identical games
//! - **Testable**: Time is injected as nanosecond deltas
//! - **Portable**: Any front end can drive it through [`Game`]
//!
//! # Module Structure
//!
//! - [`catalog`]: Geometry, colors and spawn offsets of the seven pieces
//! - [`piece`]: Movable, rotatable rigid body of cells
//! - [`board`]: Grid, occupancy counts, collision, wall kicks, ghost, clears
//! - [`kicks`]: Wall kick offset tables
//! - [`rng`]: Seedable LCG and the 7-bag sequencer
//! - [`game`]: Gravity, lock delay, actions, top-out and reset
//! - [`timer`]: Elapsed-time sources
//! - [`config`]: Constructor-time settings
//!
//! # Coordinates
//!
//! 1-based, `x` in `1..=width` left to right, `y` in `1..=height` from the
//! floor upwards.
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Game, GameConfig};
//! use blockfall_core::types::Action;
//!
//! let mut game = Game::new(GameConfig::default().with_seed(12345)).unwrap();
//!
//! game.apply_action(Action::MoveRight);
//! game.apply_action(Action::RotateCw);
//! game.apply_action(Action::HardDrop);
//!
//! // The dropped piece is now part of the grid.
//! let settled: usize = game.board().occupancy().0.iter().sum();
//! assert_eq!(settled, 4);
//!
//! // 400ms of gravity moves the new piece one row down.
//! game.update(400_000_000);
//! ```

pub mod board;
pub mod catalog;
pub mod config;
pub mod error;
pub mod game;
pub mod kicks;
pub mod piece;
pub mod rng;
pub mod timer;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use error::ConfigError;
pub use game::Game;
pub use piece::{Cell, HalfPoint, Piece, Point};
pub use rng::{PieceBag, SimpleRng};
pub use timer::{ManualTimer, MonotonicTimer, TimeSource};
