use dt_core::{Palette, TextureId};
use serde::{Deserialize, Serialize};

/// Defines the visual representation of a texture for different frontends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TileDefinition {
    /// The texture this entry draws.
    pub texture: TextureId,
    /// Sprite file, relative to the tileset's asset directory.
    pub sprite: String,
    /// Character used by terminal previews.
    pub tui_char: char,
    /// Color name for terminal previews (e.g., "gray", "dark_gray").
    pub tui_color: String,
}

/// The root structure for the tileset configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tileset {
    #[serde(default = "default_sprite_size")]
    pub sprite_width: u32,
    #[serde(default = "default_sprite_size")]
    pub sprite_height: u32,
    /// Integer upscaling applied when drawing.
    #[serde(default = "default_scale")]
    pub scale: u32,
    /// Lit/unlit tints; the built-in palette when omitted.
    #[serde(default)]
    pub palette: Palette,
    pub tiles: Vec<TileDefinition>,
}

fn default_sprite_size() -> u32 {
    16
}

fn default_scale() -> u32 {
    2
}

impl Tileset {
    /// On-screen size of one cell in pixels
    pub fn cell_size(&self) -> (u32, u32) {
        (
            self.sprite_width * self.scale,
            self.sprite_height * self.scale,
        )
    }
}
