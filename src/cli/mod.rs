//! # CLI Module
//!
//! User-facing commands of trackchart. Each command wires the catalog client,
//! the session manager and the chart module together and takes care of
//! console feedback.
//!
//! ## Commands
//!
//! - [`search`] - Autocomplete-style artist search
//! - [`chart`] - Load an artist and chart its tracks by one or more attributes
//! - [`attributes`] - List every attribute a chart can be sorted by
//! - [`serve`] - Run the HTTP surface for a browser chart widget
//!
//! ## Usage Patterns
//!
//! ```bash
//! trackchart search "daft"
//! trackchart chart --artist "Daft Punk" --attribute duration --attribute energy
//! trackchart chart --artist-id 4tZwfgrHOc3mvqYlEYSvVi --attribute tempo --json
//! trackchart serve --open
//! ```
//!
//! Any in-flight catalog request shows a spinner that is cleared whether the
//! request succeeds or fails. Failures are reported as warnings and leave
//! nothing half-rendered.

mod attributes;
mod chart;
mod search;
mod serve;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub use attributes::attributes;
pub use chart::chart;
pub use search::search;
pub use serve::serve;

pub(crate) fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
