// ABOUTME: Session file management for kitty sessions
// Provides the on-disk store, template rendering, and storage errors

pub mod error;
pub mod store;
pub mod template;

pub use error::SessionError;
pub use store::{session_name, EnsuredSession, SessionStore, SESSION_EXTENSION};
pub use template::TemplateSource;
