#[cfg(feature = "cli")]
pub mod cli;
pub mod document;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use document::{load_radar, RadarDocument};
