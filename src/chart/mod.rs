//! # Chart Module
//!
//! The data side of a track chart: which attributes exist and how each one is
//! extracted and displayed, how tracks are sorted for plotting, how albums are
//! coloured and how the final chart request is assembled.
//!
//! ```text
//! tracks ──► transform (sort + plot values) ──► ChartRequestBuilder ──► renderer
//!   │                                               ▲
//!   └──────► AlbumPalette (fetch order) ────────────┘
//! ```
//!
//! Colours are derived from the fetch order, never from the sorted order, so
//! switching the sort attribute does not reshuffle album hues.

mod attribute;
mod color;
mod request;
mod transform;

pub use attribute::{Attribute, AttributeDescriptor, PITCH_CLASSES, describe};
pub use color::{AlbumPalette, Color, assign_colors};
pub use request::{Axis, ChartRequest, ChartRequestBuilder, Dataset};
pub use transform::{TransformedTracks, transform};
