// Public API for integration tests and potential library usage

pub mod api;
pub mod bank;
pub mod config;
pub mod error;
pub mod pick;
pub mod state;
