use std::collections::HashMap;
use std::path::Path;

use crossterm::style::Color;
use dt_core::{Palette, TextureId};
use strum::IntoEnumIterator;
use thiserror::Error;
use tracing::debug;

use crate::mapping::{TileDefinition, Tileset};

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("No tile defined for texture {0}")]
    Missing(TextureId),
    #[error("Texture {0} is defined more than once")]
    Duplicate(TextureId),
}

/// A registry that maps texture ids to their sprites and terminal glyphs.
pub struct TilesetRegistry {
    tileset: Tileset,
    index: HashMap<TextureId, usize>,
}

impl TilesetRegistry {
    /// Create a registry from a tileset, rejecting duplicate textures.
    ///
    /// Missing textures are allowed here; see [`Self::validate_coverage`].
    pub fn new(tileset: Tileset) -> Result<Self, RegistryError> {
        let mut index = HashMap::with_capacity(tileset.tiles.len());
        for (position, tile) in tileset.tiles.iter().enumerate() {
            if index.insert(tile.texture, position).is_some() {
                return Err(RegistryError::Duplicate(tile.texture));
            }
        }
        Ok(Self { tileset, index })
    }

    /// Parse a tileset from JSON text and validate coverage.
    pub fn from_json(content: &str) -> Result<Self, RegistryError> {
        let tileset: Tileset = serde_json::from_str(content)?;
        let registry = Self::new(tileset)?;
        registry.validate_coverage()?;
        Ok(registry)
    }

    /// Load the registry from a JSON file and validate coverage.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let registry = Self::from_json(&content)?;
        debug!(path = %path.display(), tiles = registry.len(), "loaded tileset");
        Ok(registry)
    }

    /// Validate that every texture id has a tile.
    pub fn validate_coverage(&self) -> Result<(), RegistryError> {
        match TextureId::iter().find(|texture| !self.index.contains_key(texture)) {
            Some(texture) => Err(RegistryError::Missing(texture)),
            None => Ok(()),
        }
    }

    /// Find the tile for a texture.
    pub fn get(&self, texture: TextureId) -> Result<&TileDefinition, RegistryError> {
        self.index
            .get(&texture)
            .map(|&position| &self.tileset.tiles[position])
            .ok_or(RegistryError::Missing(texture))
    }

    pub fn palette(&self) -> &Palette {
        &self.tileset.palette
    }

    pub fn tileset(&self) -> &Tileset {
        &self.tileset
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Helper to convert a color string to a terminal color.
    pub fn parse_color(color_name: &str) -> Option<Color> {
        match color_name.to_lowercase().as_str() {
            "black" => Some(Color::Black),
            "red" => Some(Color::DarkRed),
            "green" => Some(Color::DarkGreen),
            "yellow" => Some(Color::DarkYellow),
            "blue" => Some(Color::DarkBlue),
            "magenta" => Some(Color::DarkMagenta),
            "cyan" => Some(Color::DarkCyan),
            "gray" | "grey" => Some(Color::Grey),
            "darkgray" | "dark_gray" | "darkgrey" | "dark_grey" => Some(Color::DarkGrey),
            "lightred" | "light_red" => Some(Color::Red),
            "lightgreen" | "light_green" => Some(Color::Green),
            "lightyellow" | "light_yellow" => Some(Color::Yellow),
            "lightblue" | "light_blue" => Some(Color::Blue),
            "lightmagenta" | "light_magenta" => Some(Color::Magenta),
            "lightcyan" | "light_cyan" => Some(Color::Cyan),
            "white" => Some(Color::White),
            hex => parse_hex(hex),
        }
    }
}

/// `#rrggbb`
fn parse_hex(value: &str) -> Option<Color> {
    let digits = value.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();
    Some(Color::Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}
