//! Configuration management for SubScout.
//!
//! Provides XDG-compliant settings storage.

mod settings;

pub use settings::{AppSettings, Paths};
