use std::{
    collections::{HashMap, HashSet},
    fmt,
};

use serde::{Serialize, Serializer};

use crate::types::Track;

/// A fully saturated HSL colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Color {
    pub fn from_hue(hue: u16) -> Self {
        Self {
            hue,
            saturation: 100,
            lightness: 50,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Album name to colour, spread evenly around the hue wheel in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlbumPalette {
    colors: HashMap<String, Color>,
    order: Vec<String>,
}

impl AlbumPalette {
    pub fn from_tracks(tracks: &[Track]) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut order: Vec<String> = Vec::new();
        for track in tracks {
            if seen.insert(track.album_name.as_str()) {
                order.push(track.album_name.clone());
            }
        }

        let count = order.len();
        let colors = order
            .iter()
            .enumerate()
            .map(|(index, album)| (album.clone(), Color::from_hue((360 * index / count) as u16)))
            .collect();

        Self { colors, order }
    }

    pub fn color_of(&self, album_name: &str) -> Option<Color> {
        self.colors.get(album_name).copied()
    }

    /// Whether every album in `tracks` already has a colour.
    pub fn covers(&self, tracks: &[Track]) -> bool {
        tracks.iter().all(|t| self.colors.contains_key(&t.album_name))
    }

    /// One colour per track, in the order given.
    ///
    /// Albums the palette has never seen fall back to hue 0, the same colour
    /// as the first album. Check [`AlbumPalette::covers`] first, or rebuild
    /// the palette, when the tracks may bring new albums.
    pub fn colors_for(&self, tracks: &[Track]) -> Vec<Color> {
        tracks
            .iter()
            .map(|t| self.color_of(&t.album_name).unwrap_or(Color::from_hue(0)))
            .collect()
    }

    pub fn albums(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Colours each track by its album. An empty list yields an empty list.
pub fn assign_colors(tracks: &[Track]) -> Vec<Color> {
    AlbumPalette::from_tracks(tracks).colors_for(tracks)
}
