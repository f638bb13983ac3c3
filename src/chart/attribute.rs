use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::ChartError,
    types::Track,
    utils::{format_number, millis_to_minutes_and_seconds, percent, round_to},
};

pub const PITCH_CLASSES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Every attribute a chart can be sorted by.
///
/// Discriminants index into the descriptor table, keep both in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Duration,
    Energy,
    Speechiness,
    Acousticness,
    Danceability,
    Tempo,
    Instrumentalness,
    Key,
    Liveness,
    Mode,
    TimeSignature,
    Loudness,
    Valence,
}

impl Attribute {
    pub const ALL: [Attribute; 13] = [
        Attribute::Duration,
        Attribute::Energy,
        Attribute::Speechiness,
        Attribute::Acousticness,
        Attribute::Danceability,
        Attribute::Tempo,
        Attribute::Instrumentalness,
        Attribute::Key,
        Attribute::Liveness,
        Attribute::Mode,
        Attribute::TimeSignature,
        Attribute::Loudness,
        Attribute::Valence,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Attribute::Duration => "duration",
            Attribute::Energy => "energy",
            Attribute::Speechiness => "speechiness",
            Attribute::Acousticness => "acousticness",
            Attribute::Danceability => "danceability",
            Attribute::Tempo => "tempo",
            Attribute::Instrumentalness => "instrumentalness",
            Attribute::Key => "key",
            Attribute::Liveness => "liveness",
            Attribute::Mode => "mode",
            Attribute::TimeSignature => "time_signature",
            Attribute::Loudness => "loudness",
            Attribute::Valence => "valence",
        }
    }

    pub fn descriptor(self) -> &'static AttributeDescriptor {
        &DESCRIPTORS[self as usize]
    }

    /// Whether the field only arrives from the audio-features endpoint.
    pub fn is_audio_feature(self) -> bool {
        self != Attribute::Duration
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Attribute::ALL
            .into_iter()
            .find(|a| a.name() == wanted)
            .ok_or_else(|| ChartError::UnknownAttribute(s.to_string()))
    }
}

/// Looks up the descriptor registered under `name`.
pub fn describe(name: &str) -> Result<&'static AttributeDescriptor, ChartError> {
    name.parse::<Attribute>().map(Attribute::descriptor)
}

/// Static extraction and display rules for one attribute.
#[derive(Debug)]
pub struct AttributeDescriptor {
    pub attribute: Attribute,
    /// Added to a present raw value so that a stored 0 differs from a missing field.
    pub shift: f64,
    pub format_tooltip: fn(f64) -> String,
    pub format_tick: fn(f64) -> String,
    pub step_size: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub description: &'static str,
}

impl AttributeDescriptor {
    /// Numeric value used for sorting and plotting. Missing fields count as 0.
    pub fn value_of(&self, track: &Track) -> f64 {
        track
            .value(self.attribute)
            .map(|v| v + self.shift)
            .unwrap_or(0.0)
    }

    pub fn tooltip(&self, value: f64) -> String {
        (self.format_tooltip)(value)
    }

    pub fn tick(&self, value: f64) -> String {
        (self.format_tick)(value)
    }
}

fn ratio_tick(value: f64) -> String {
    percent(value, 1)
}

fn ratio_tooltip(value: f64) -> String {
    percent(value, 2)
}

fn duration_label(value: f64) -> String {
    millis_to_minutes_and_seconds(value)
}

fn raw_tick(value: f64) -> String {
    format_number(value)
}

fn tempo_tooltip(value: f64) -> String {
    format!("{} bpm", format_number(round_to(value, 1)))
}

fn loudness_tooltip(value: f64) -> String {
    format!("{} db", format_number(round_to(value, 1)))
}

// Values arrive shifted by one, 0 means the track had no key.
fn key_label(value: f64) -> String {
    let index = value.round() as i64 - 1;
    usize::try_from(index)
        .ok()
        .and_then(|i| PITCH_CLASSES.get(i))
        .map_or_else(|| "-".to_string(), |pitch| pitch.to_string())
}

fn mode_label(value: f64) -> String {
    if value == 1.0 {
        "Minor".to_string()
    } else {
        "Major".to_string()
    }
}

fn time_signature_label(value: f64) -> String {
    format!("{}/4", format_number(value))
}

const fn ratio(attribute: Attribute, description: &'static str) -> AttributeDescriptor {
    AttributeDescriptor {
        attribute,
        shift: 0.0,
        format_tooltip: ratio_tooltip,
        format_tick: ratio_tick,
        step_size: 0.1,
        min: Some(0.0),
        max: Some(1.0),
        description,
    }
}

static DESCRIPTORS: [AttributeDescriptor; 13] = [
    AttributeDescriptor {
        attribute: Attribute::Duration,
        shift: 0.0,
        format_tooltip: duration_label,
        format_tick: duration_label,
        step_size: 60_000.0,
        min: Some(0.0),
        max: None,
        description: "Length of the track.",
    },
    ratio(
        Attribute::Energy,
        "Perceived intensity and activity. Energetic tracks feel fast, loud and noisy.",
    ),
    ratio(
        Attribute::Speechiness,
        "Presence of spoken words. Talk-like recordings score close to 100%.",
    ),
    ratio(
        Attribute::Acousticness,
        "Confidence that the track is acoustic.",
    ),
    ratio(
        Attribute::Danceability,
        "How suitable the track is for dancing, based on tempo, rhythm stability and beat strength.",
    ),
    AttributeDescriptor {
        attribute: Attribute::Tempo,
        shift: 0.0,
        format_tooltip: tempo_tooltip,
        format_tick: raw_tick,
        step_size: 10.0,
        min: Some(0.0),
        max: Some(210.0),
        description: "Estimated tempo in beats per minute.",
    },
    ratio(
        Attribute::Instrumentalness,
        "Likelihood that the track contains no vocals.",
    ),
    AttributeDescriptor {
        attribute: Attribute::Key,
        shift: 1.0,
        format_tooltip: key_label,
        format_tick: key_label,
        step_size: 1.0,
        min: Some(0.0),
        max: Some(12.0),
        description: "Estimated key of the track in pitch class notation.",
    },
    ratio(
        Attribute::Liveness,
        "Presence of an audience in the recording. High values suggest a live performance.",
    ),
    AttributeDescriptor {
        attribute: Attribute::Mode,
        shift: 1.0,
        format_tooltip: mode_label,
        format_tick: mode_label,
        step_size: 1.0,
        min: Some(0.0),
        max: Some(2.0),
        description: "Modality of the track, major or minor.",
    },
    AttributeDescriptor {
        attribute: Attribute::TimeSignature,
        shift: 0.0,
        format_tooltip: time_signature_label,
        format_tick: time_signature_label,
        step_size: 1.0,
        min: Some(0.0),
        max: None,
        description: "Estimated number of beats in each bar.",
    },
    AttributeDescriptor {
        attribute: Attribute::Loudness,
        shift: 0.0,
        format_tooltip: loudness_tooltip,
        format_tick: raw_tick,
        step_size: 10.0,
        min: None,
        max: None,
        description: "Overall loudness in decibels, averaged across the track.",
    },
    ratio(
        Attribute::Valence,
        "Musical positiveness. High valence sounds happy, low valence sounds sad or angry.",
    ),
];
