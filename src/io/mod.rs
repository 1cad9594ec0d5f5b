/// Command-line parsing and run orchestration
pub mod cli;
/// Defaults, limits and presets
pub mod configuration;
/// Error types and helpers
pub mod error;
/// PNG rendering of generated fractals
pub mod image;
/// Progress bars for generation runs
pub mod progress;
