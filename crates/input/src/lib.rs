//! Terminal input module.
//!
//! Maps `crossterm` key events into [`Command`]s: either a game
//! [`Action`](crate::types::Action) or one of the session commands that are
//! not actions (ghost toggle, restart).

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit, Command};
