use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tabled::Tabled;

use crate::chart::Attribute;

/// One track as returned by the catalog service.
///
/// Audio features are optional: the basic artist endpoint only returns
/// name, album and duration, the features endpoint adds the rest. The catalog
/// stores numbers as strings, so every numeric field accepts either form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub track_name: String,
    #[serde(default)]
    pub album_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_art: Option<String>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub energy: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub speechiness: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub acousticness: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub danceability: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub tempo: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub instrumentalness: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub key: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub liveness: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub mode: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub time_signature: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub loudness: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub valence: Option<f64>,
}

impl Track {
    pub fn new(track_name: impl Into<String>, album_name: impl Into<String>) -> Self {
        Self {
            track_name: track_name.into(),
            album_name: album_name.into(),
            ..Self::default()
        }
    }

    /// Sets one attribute field, returning the track for chaining.
    pub fn with(mut self, attribute: Attribute, value: f64) -> Self {
        *self.field_mut(attribute) = Some(value);
        self
    }

    /// The stored value of `attribute`, `None` when the field was never sent.
    pub fn value(&self, attribute: Attribute) -> Option<f64> {
        match attribute {
            Attribute::Duration => self.duration,
            Attribute::Energy => self.energy,
            Attribute::Speechiness => self.speechiness,
            Attribute::Acousticness => self.acousticness,
            Attribute::Danceability => self.danceability,
            Attribute::Tempo => self.tempo,
            Attribute::Instrumentalness => self.instrumentalness,
            Attribute::Key => self.key,
            Attribute::Liveness => self.liveness,
            Attribute::Mode => self.mode,
            Attribute::TimeSignature => self.time_signature,
            Attribute::Loudness => self.loudness,
            Attribute::Valence => self.valence,
        }
    }

    pub fn has(&self, attribute: Attribute) -> bool {
        self.value(attribute).is_some()
    }

    fn field_mut(&mut self, attribute: Attribute) -> &mut Option<f64> {
        match attribute {
            Attribute::Duration => &mut self.duration,
            Attribute::Energy => &mut self.energy,
            Attribute::Speechiness => &mut self.speechiness,
            Attribute::Acousticness => &mut self.acousticness,
            Attribute::Danceability => &mut self.danceability,
            Attribute::Tempo => &mut self.tempo,
            Attribute::Instrumentalness => &mut self.instrumentalness,
            Attribute::Key => &mut self.key,
            Attribute::Liveness => &mut self.liveness,
            Attribute::Mode => &mut self.mode,
            Attribute::TimeSignature => &mut self.time_signature,
            Attribute::Loudness => &mut self.loudness,
            Attribute::Valence => &mut self.valence,
        }
    }
}

// Present-but-unreadable values coerce to 0, an absent or null key stays None.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .unwrap_or(0.0),
        Value::Bool(b) => {
            if b {
                1.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    }))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TracksResponse {
    #[serde(default)]
    pub tracks: Vec<Track>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistCandidate {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistSearchResponse {
    pub artists: ArtistsContainer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistsContainer {
    pub items: Vec<ArtistCandidate>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub name: String,
    pub id: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub track: String,
    pub album: String,
    pub value: String,
    pub tooltip: String,
    pub color: String,
}

#[derive(Tabled)]
pub struct AttributeTableRow {
    pub name: String,
    pub step: String,
    pub min: String,
    pub max: String,
    pub description: String,
}
