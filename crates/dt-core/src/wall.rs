//! Wall variant autotiling
//!
//! A solid cell picks its wall texture from the openness of its eight
//! neighbors. Rules are tried in table order and the first match wins.
//! Several rules overlap, so the order decides ambiguous neighborhoods and
//! must not be rearranged.

use crate::neighborhood::{NeighborhoodPattern, Openness};
use crate::tile::TextureId;

/// Texture used when no rule matches
pub const DEFAULT_WALL: TextureId = TextureId::Wall;

/// One row of the wall table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallRule {
    /// Every one of these must be open
    pub open: Openness,
    /// Every one of these must be closed
    pub closed: Openness,
    /// At least one of these must be open (ignored when empty)
    pub any_open: Openness,
    pub texture: TextureId,
}

impl WallRule {
    const fn new(open: Openness, closed: Openness, texture: TextureId) -> Self {
        Self {
            open,
            closed,
            any_open: Openness::empty(),
            texture,
        }
    }

    const fn with_any_open(mut self, any_open: Openness) -> Self {
        self.any_open = any_open;
        self
    }

    pub fn matches(&self, pattern: NeighborhoodPattern) -> bool {
        let flags = pattern.flags();
        flags.contains(self.open)
            && !flags.intersects(self.closed)
            && (self.any_open.is_empty() || flags.intersects(self.any_open))
    }
}

macro_rules! mask {
    () => {
        Openness::empty()
    };
    ($($dir:ident),+) => {
        Openness::empty()$(.union(Openness::$dir))+
    };
}

/// The wall table, in priority order.
pub const WALL_RULES: &[WallRule] = &[
    WallRule::new(mask!(SW, SE, NE, NW), mask!(W, E, N), TextureId::CenterWallCross),
    WallRule::new(mask!(W, E, SW, SE, N), mask!(S), TextureId::TopCap),
    WallRule::new(mask!(NW, NE, E, S), mask!(N, W), TextureId::WallRightCorner),
    WallRule::new(mask!(W, N, S), mask!(E), TextureId::LeftShortWall),
    WallRule::new(mask!(S, N), mask!(E, W), TextureId::WallShort),
    WallRule::new(mask!(N, SW, SE), mask!(S, E, W), TextureId::WallShort),
    // No rule produces BottomLeftCornerFilled.
    WallRule::new(mask!(S, W, NE), mask!(E, N), TextureId::BottomLeftCornerHollow),
    WallRule::new(mask!(W, NW, NE, SE), mask!(E, N), TextureId::BottomLeftCornerHollow),
    WallRule::new(mask!(S, E, N), mask!(W), TextureId::WallShortRight),
    WallRule::new(mask!(W, E), mask!(S, N), TextureId::WallMid),
    WallRule::new(mask!(E, NW, SW), mask!(S, N, W), TextureId::WallRightCorner),
    WallRule::new(mask!(W, N, SE), mask!(), TextureId::LeftShortWall),
    WallRule::new(mask!(N, E), mask!(W), TextureId::WallShortRight).with_any_open(mask!(S, SW)),
    WallRule::new(mask!(W, E, S, NE, NW), mask!(N), TextureId::BottomEndCap),
    WallRule::new(mask!(N), mask!(S, W, E, SE, SW), TextureId::TopWall),
    WallRule::new(mask!(N, E), mask!(S, W), TextureId::TopWallRightCorner),
    WallRule::new(mask!(N, W), mask!(S, E), TextureId::TopWallLeftCorner),
    WallRule::new(mask!(W), mask!(N, E), TextureId::LeftEdgeWall),
    WallRule::new(mask!(NW, SW), mask!(W, E, NE), TextureId::LeftEdgeWall),
    WallRule::new(mask!(E), mask!(N, W), TextureId::RightEdgeWall),
    WallRule::new(mask!(NE, SE), mask!(N, E, W), TextureId::RightEdgeWall),
];

/// Pick the wall texture for a solid cell
pub fn classify(pattern: NeighborhoodPattern) -> TextureId {
    classify_with_rule(pattern).1
}

/// Like [`classify`], also returning the index of the rule that fired
/// (`None` when the default was used).
pub fn classify_with_rule(pattern: NeighborhoodPattern) -> (Option<usize>, TextureId) {
    WALL_RULES
        .iter()
        .position(|rule| rule.matches(pattern))
        .map_or((None, DEFAULT_WALL), |index| {
            (Some(index), WALL_RULES[index].texture)
        })
}

/// Indices of every rule the pattern satisfies, in table order
pub fn matching_rules(pattern: NeighborhoodPattern) -> Vec<usize> {
    WALL_RULES
        .iter()
        .enumerate()
        .filter(|(_, rule)| rule.matches(pattern))
        .map(|(index, _)| index)
        .collect()
}
