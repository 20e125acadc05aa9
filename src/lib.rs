// ABOUTME: Library root for shanti — re-exports all modules for integration testing.
// ABOUTME: The binary entry point is in main.rs, which uses this crate as a library.

pub mod app;
pub mod assistant;
pub mod catalog;
pub mod config;
pub mod counter;
pub mod prompt;
pub mod session;
pub mod stats;
pub mod tui;
