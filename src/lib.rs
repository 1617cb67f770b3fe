//! Two-player hot-seat Battleship for the terminal.
//!
//! The crate splits into a rules core (`board`, `ship`, `coord`,
//! `common`), a pure text renderer (`render`) and the interactive
//! orchestrator (`game`), which is driven through the line-based
//! [`Console`] boundary so full matches can be played from a script.

mod board;
mod common;
mod config;
mod console;
mod coord;
mod game;
mod logging;
mod render;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use console::*;
pub use coord::*;
pub use game::*;
pub use logging::init_logging;
pub use render::*;
pub use ship::*;
