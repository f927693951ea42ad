//! TUI (Text User Interface) module for derelict
//!
//! Runs screens in the real terminal using ratatui/crossterm.

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;

pub use app::run;
pub use theme::{current_theme, Theme};
