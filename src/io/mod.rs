/// Command-line interface and batch processing
pub mod cli;
/// Collision data parsing and grid loading
pub mod collision;
/// Constants, defaults and engine configuration
pub mod configuration;
/// Error types for map construction, loading and export
pub mod error;
/// PNG overlay rendering
pub mod image;
/// Progress display for batch surveys
pub mod progress;
/// Plain-text survey reports
pub mod report;
