//! Track Chart Library
//!
//! This library provides the pieces needed to chart an artist's track catalog:
//! fetching tracks and audio features from a catalog service, sorting them by
//! a selectable attribute, assigning album colours and assembling a chart
//! request that a bar-chart renderer can draw.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints served to a browser chart widget
//! - `catalog` - Catalog service and artist search client
//! - `chart` - Attribute registry, track transform, colours and chart requests
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Domain error type
//! - `management` - Artist chart session state
//! - `server` - Local HTTP server wiring
//! - `types` - Data structures and type definitions
//! - `utils` - Formatting helpers
//!
//! # Example
//!
//! ```
//! use trackchart::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> trackchart::Res<()> {
//!     config::load_env().await?;
//!     // Use CLI functions...
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used at the outer edges of the application (CLI, server start-up) where
/// errors of different origins meet. Domain operations return
/// [`error::ChartError`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Loading tracks for {}", artist_id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal errors where recovery is not possible; code after this
/// macro does not execute.
///
/// # Example
///
/// ```
/// error!("Cannot load environment. Err: {}", e);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// This is the operator-facing channel for recoverable failures such as a
/// catalog fetch that could not complete.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
