//! Texture vocabulary and static rendering attributes

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use thiserror::Error;

/// Visual asset selected for a cell.
///
/// Discriminants are the numeric texture ids the renderer indexes its
/// texture list with. Entity textures share the same id space.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum TextureId {
    Floor = 0,
    Player = 1,
    Orc = 2,
    Troll = 3,
    Wall = 4,
    Potion = 5,
    Scroll = 6,
    DeadBody = 7,
    StairsDown = 8,
    DoorNsClosed = 9,
    DoorNsOpen = 10,
    VisibleWall = 11,
    FloorShadowed = 12,
    WallRight = 13,
    WallLeft = 14,
    WallMid = 15,
    WallBottom = 16,
    WallBottomRight = 17,
    WallBottomLeft = 18,
    WallShort = 19,
    WallNarrow = 20,
    WallRightCorner = 21,
    TopCap = 22,
    LeftShortWall = 23,
    CenterWallCross = 24,
    BottomLeftCornerFilled = 25,
    BottomLeftCornerHollow = 26,
    WallShortRight = 27,
    BottomEndCap = 28,
    TopWall = 29,
    TopWallRightCorner = 30,
    TopWallLeftCorner = 31,
    LeftEdgeWall = 32,
    RightEdgeWall = 33,
    FloorVariation1 = 34,
    FloorVariation2 = 35,
    ShadowVariation = 36,
}

/// Numeric id outside the texture vocabulary
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown texture id {0}")]
pub struct UnknownTextureId(pub u8);

impl TextureId {
    /// Numeric texture id
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Check if this is one of the wall variants
    pub const fn is_wall(self) -> bool {
        matches!(self, TextureId::Wall | TextureId::VisibleWall)
            || (self as u8 >= TextureId::WallRight as u8
                && self as u8 <= TextureId::RightEdgeWall as u8)
    }

    /// Check if this is one of the ground variants
    pub const fn is_floor(self) -> bool {
        matches!(
            self,
            TextureId::Floor
                | TextureId::FloorShadowed
                | TextureId::FloorVariation1
                | TextureId::FloorVariation2
                | TextureId::ShadowVariation
        )
    }
}

impl TryFrom<u8> for TextureId {
    type Error = UnknownTextureId;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        TextureId::iter()
            .find(|texture| texture.id() == value)
            .ok_or(UnknownTextureId(value))
    }
}

impl From<TextureId> for u8 {
    fn from(texture: TextureId) -> Self {
        texture.id()
    }
}

/// Human-readable category of a materialized cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum CellKind {
    Door,
    Wall,
    Ground,
    #[strum(serialize = "Stairs Down")]
    #[serde(rename = "Stairs Down")]
    StairsDown,
}

impl CellKind {
    /// Closed doors are walkable as encoded; only walls stop movement.
    pub const fn blocks_movement(self) -> bool {
        matches!(self, CellKind::Wall)
    }

    /// Check if this kind blocks line of sight
    pub const fn blocks_sight(self) -> bool {
        matches!(self, CellKind::Door | CellKind::Wall)
    }

    /// Doors and walls are tinted with the wall pair, the rest with the ground pair
    const fn wall_toned(self) -> bool {
        matches!(self, CellKind::Door | CellKind::Wall)
    }
}

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const LIGHT: Rgba = Rgba(255, 255, 255, 255);
    pub const DARK: Rgba = Rgba(127, 127, 127, 255);
}

/// Two-tone tints for lit and unlit cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub light_wall: Rgba,
    pub dark_wall: Rgba,
    pub light_ground: Rgba,
    pub dark_ground: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            light_wall: Rgba::LIGHT,
            dark_wall: Rgba::DARK,
            light_ground: Rgba::LIGHT,
            dark_ground: Rgba::DARK,
        }
    }
}

impl Palette {
    /// (visible, not visible) tint pair for a cell kind
    pub const fn tints(&self, kind: CellKind) -> (Rgba, Rgba) {
        if kind.wall_toned() {
            (self.light_wall, self.dark_wall)
        } else {
            (self.light_ground, self.dark_ground)
        }
    }
}
