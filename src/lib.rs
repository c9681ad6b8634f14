// ABOUTME: Library crate for kitty-zoxide-sessions exposing the launcher for testing and reuse

pub mod cleanup;
pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod operations;
pub mod reconcile;
pub mod session;
pub mod text;
