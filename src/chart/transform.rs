use std::cmp::Ordering;

use crate::{chart::Attribute, types::Track};

#[derive(Debug, Clone, PartialEq)]
pub struct TransformedTracks {
    pub sorted_tracks: Vec<Track>,
    pub plot_values: Vec<f64>,
}

/// Sorts `tracks` ascending by `attribute` and extracts the plotted values.
///
/// The sort is stable, so tracks with equal values keep their fetch order.
/// Tracks without the field sort and plot as 0. The input is left untouched.
pub fn transform(tracks: &[Track], attribute: Attribute) -> TransformedTracks {
    let descriptor = attribute.descriptor();

    let mut keyed: Vec<(f64, &Track)> = tracks
        .iter()
        .map(|t| (descriptor.value_of(t), t))
        .collect();
    keyed.sort_by(|a, b| compare_values(a.0, b.0));

    let (plot_values, sorted_tracks): (Vec<f64>, Vec<Track>) = keyed
        .into_iter()
        .map(|(value, track)| (value, track.clone()))
        .unzip();

    TransformedTracks {
        sorted_tracks,
        plot_values,
    }
}

// NaN never leaves decoding, total_cmp keeps the order total regardless.
fn compare_values(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}
