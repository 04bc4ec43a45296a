//! Floor variant selection
//!
//! Floor directly under a wall (or the top edge of the map) is drawn in
//! shadow. Elsewhere the plain floor is sprinkled with two rarer variants.

use crate::neighborhood::{Direction, NeighborhoodPattern};
use crate::rng::TileRng;
use crate::tile::TextureId;

/// 1 in N shadowed floors use the shadow variation
pub const SHADOW_VARIATION_ONE_IN: u32 = 10;
/// 1 in N lit floors use the first variation
pub const FLOOR_VARIATION_1_ONE_IN: u32 = 15;
/// 1 in N of the remaining lit floors use the second variation
pub const FLOOR_VARIATION_2_ONE_IN: u32 = 35;

/// Pick the texture for an open cell
pub fn select<R: TileRng + ?Sized>(pattern: NeighborhoodPattern, rng: &mut R) -> TextureId {
    if !pattern.open(Direction::N) {
        if rng.one_in(SHADOW_VARIATION_ONE_IN) {
            TextureId::ShadowVariation
        } else {
            TextureId::FloorShadowed
        }
    } else if rng.one_in(FLOOR_VARIATION_1_ONE_IN) {
        TextureId::FloorVariation1
    } else if rng.one_in(FLOOR_VARIATION_2_ONE_IN) {
        TextureId::FloorVariation2
    } else {
        TextureId::Floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighborhood::Openness;
    use crate::rng::GameRng;
    use std::collections::VecDeque;

    /// Replays fixed draws and records the bounds it was asked for
    struct Scripted {
        draws: VecDeque<u32>,
        asked: Vec<u32>,
    }

    impl Scripted {
        fn new(draws: &[u32]) -> Self {
            Self {
                draws: draws.iter().copied().collect(),
                asked: Vec::new(),
            }
        }
    }

    impl TileRng for Scripted {
        fn rn2(&mut self, n: u32) -> u32 {
            self.asked.push(n);
            self.draws.pop_front().expect("script exhausted")
        }
    }

    fn north_closed() -> NeighborhoodPattern {
        NeighborhoodPattern::from_flags(Openness::CENTER | Openness::S)
    }

    fn north_open() -> NeighborhoodPattern {
        NeighborhoodPattern::from_flags(Openness::CENTER | Openness::N)
    }

    #[test]
    fn test_shadow_branch_thresholds() {
        let mut rng = Scripted::new(&[0]);
        assert_eq!(select(north_closed(), &mut rng), TextureId::ShadowVariation);
        assert_eq!(rng.asked, vec![10]);

        let mut rng = Scripted::new(&[1]);
        assert_eq!(select(north_closed(), &mut rng), TextureId::FloorShadowed);

        let mut rng = Scripted::new(&[9]);
        assert_eq!(select(north_closed(), &mut rng), TextureId::FloorShadowed);
        assert!(rng.draws.is_empty());
    }

    #[test]
    fn test_open_branch_thresholds() {
        let mut rng = Scripted::new(&[0]);
        assert_eq!(select(north_open(), &mut rng), TextureId::FloorVariation1);
        assert_eq!(rng.asked, vec![15]);

        let mut rng = Scripted::new(&[1, 0]);
        assert_eq!(select(north_open(), &mut rng), TextureId::FloorVariation2);
        assert_eq!(rng.asked, vec![15, 35]);

        let mut rng = Scripted::new(&[14, 34]);
        assert_eq!(select(north_open(), &mut rng), TextureId::Floor);
        assert_eq!(rng.asked, vec![15, 35]);
    }

    #[test]
    fn test_shadow_frequencies() {
        const DRAWS: usize = 100_000;
        let mut rng = GameRng::new(1234);
        let shadow = (0..DRAWS)
            .filter(|_| select(north_closed(), &mut rng) == TextureId::ShadowVariation)
            .count();
        let ratio = shadow as f64 / DRAWS as f64;
        assert!((ratio - 0.1).abs() < 0.005, "shadow variation ratio {ratio}");
    }

    #[test]
    fn test_open_frequencies() {
        const DRAWS: usize = 100_000;
        let mut rng = GameRng::new(99);
        let mut var1 = 0usize;
        let mut var2 = 0usize;
        let mut plain = 0usize;
        for _ in 0..DRAWS {
            match select(north_open(), &mut rng) {
                TextureId::FloorVariation1 => var1 += 1,
                TextureId::FloorVariation2 => var2 += 1,
                TextureId::Floor => plain += 1,
                other => panic!("unexpected texture {other}"),
            }
        }
        let n = DRAWS as f64;
        let expected_var1 = 1.0 / 15.0;
        // second draw only happens when the first misses
        let expected_var2 = (14.0 / 15.0) / 35.0;
        assert!((var1 as f64 / n - expected_var1).abs() < 0.004, "var1 {var1}");
        assert!((var2 as f64 / n - expected_var2).abs() < 0.003, "var2 {var2}");
        assert_eq!(var1 + var2 + plain, DRAWS);
    }
}
