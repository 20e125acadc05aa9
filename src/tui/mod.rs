// ABOUTME: TUI module — ratatui full-screen interface for shanti.
// ABOUTME: Four views (home, jaap, assistant, stats), input handling, widgets.

pub mod input;
pub mod state;
pub mod ui;
pub mod widgets;

pub use state::*;
