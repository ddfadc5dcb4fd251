//! Configuration for spendlens
//!
//! Path resolution for the data directory and persisted user settings.

pub mod paths;
pub mod settings;

pub use paths::SpendlensPaths;
pub use settings::Settings;
