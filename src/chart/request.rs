use serde::Serialize;

use crate::{
    chart::{AlbumPalette, Attribute, Color, transform},
    types::{Track, TrackTableRow},
    utils::chart_width,
};

/// Everything a bar-chart renderer needs to draw one sorted track chart.
///
/// Formatter functions are kept for in-process renderers; serialised
/// consumers get the same text pre-rendered in `tick_labels` and
/// `tooltip_labels`.
#[derive(Debug, Clone, Serialize)]
pub struct ChartRequest {
    pub attribute: Attribute,
    pub description: &'static str,
    pub labels: Vec<String>,
    /// Album of each bar, parallel to `labels`.
    pub albums: Vec<String>,
    pub dataset: Dataset,
    pub axis: Axis,
    pub tick_labels: Vec<String>,
    pub tooltip_labels: Vec<String>,
    #[serde(skip)]
    pub tooltip_formatter: fn(f64) -> String,
    pub legend: bool,
    pub width_hint: usize,
}

impl ChartRequest {
    /// One console table row per bar, in plotting order.
    pub fn table_rows(&self) -> Vec<TrackTableRow> {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, label)| TrackTableRow {
                position: i + 1,
                track: label.clone(),
                album: self.albums.get(i).cloned().unwrap_or_default(),
                value: self.tick_labels.get(i).cloned().unwrap_or_default(),
                tooltip: self.tooltip_labels.get(i).cloned().unwrap_or_default(),
                color: self
                    .dataset
                    .colors
                    .get(i)
                    .map(|c| c.to_string())
                    .unwrap_or_default(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    pub label: String,
    pub values: Vec<f64>,
    pub colors: Vec<Color>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step_size: f64,
    #[serde(skip)]
    pub tick_formatter: fn(f64) -> String,
}

#[derive(Debug, Clone, Copy)]
pub struct ChartRequestBuilder {
    attribute: Attribute,
    album_in_labels: bool,
}

impl ChartRequestBuilder {
    pub fn new(attribute: Attribute) -> Self {
        Self {
            attribute,
            album_in_labels: false,
        }
    }

    /// Label bars as `track (album)` instead of the bare track name.
    pub fn album_in_labels(mut self, enabled: bool) -> Self {
        self.album_in_labels = enabled;
        self
    }

    /// Assembles the request from already sorted tracks and their parallel
    /// plot values and colours.
    pub fn build(&self, sorted_tracks: &[Track], plot_values: &[f64], colors: &[Color]) -> ChartRequest {
        let descriptor = self.attribute.descriptor();

        let labels = sorted_tracks
            .iter()
            .map(|t| {
                if self.album_in_labels {
                    format!("{} ({})", t.track_name, t.album_name)
                } else {
                    t.track_name.clone()
                }
            })
            .collect();

        ChartRequest {
            attribute: self.attribute,
            description: descriptor.description,
            labels,
            albums: sorted_tracks.iter().map(|t| t.album_name.clone()).collect(),
            dataset: Dataset {
                label: format!("Tracks sorted by {}", self.attribute),
                values: plot_values.to_vec(),
                colors: colors.to_vec(),
            },
            axis: Axis {
                min: descriptor.min,
                max: descriptor.max,
                step_size: descriptor.step_size,
                tick_formatter: descriptor.format_tick,
            },
            tick_labels: plot_values.iter().map(|v| descriptor.tick(*v)).collect(),
            tooltip_labels: plot_values.iter().map(|v| descriptor.tooltip(*v)).collect(),
            tooltip_formatter: descriptor.format_tooltip,
            legend: false,
            width_hint: chart_width(sorted_tracks.len()),
        }
    }

    /// Sorts `tracks`, colours them through `palette` and builds the request.
    pub fn build_from(&self, tracks: &[Track], palette: &AlbumPalette) -> ChartRequest {
        let transformed = transform(tracks, self.attribute);
        let colors = palette.colors_for(&transformed.sorted_tracks);
        self.build(&transformed.sorted_tracks, &transformed.plot_values, &colors)
    }
}
