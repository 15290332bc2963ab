//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct and pane focus
//! - `refresh`: session event draining
//! - `input`: Key event handling
//! - `render`: UI rendering

mod input;
mod refresh;
mod render;
mod state;

pub use state::{App, Pane};
