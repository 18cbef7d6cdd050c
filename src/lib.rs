//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under `blockfall::{core,input,types}` so the
//! binary, tests and benches share one import path.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_types as types;
