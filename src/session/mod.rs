// ABOUTME: Session module — persistence of completed jaap sessions to disk.
// ABOUTME: A single JSON slot holding the 100 most recent sessions.

pub mod store;

pub use store::{MAX_SESSIONS, Session, SessionStore};
