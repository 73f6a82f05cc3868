//! Configuration management for wiquery

mod settings;

// Re-export main types
pub use settings::Settings;
