// ABOUTME: Widget modules for the shanti TUI.
// ABOUTME: One renderer per view plus the shared navigation/status bars.

pub mod chat;
pub mod counter;
pub mod home;
pub mod stats;
pub mod status;
