//! HTTP handlers.

pub mod albums;
pub mod commands;
pub mod health;

pub use health::health;
