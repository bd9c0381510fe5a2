//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, InputMode, ViewState, run_tui};
