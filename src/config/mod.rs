//! Configuration module for Kasa
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (company details, currency table)

pub mod paths;
pub mod settings;

pub use paths::KasaPaths;
pub use settings::Settings;
