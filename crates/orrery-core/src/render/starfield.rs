use glam::Vec2;

use crate::color::Color;
use crate::render::draw::DrawList;

/// Deterministic integer hash (no rand dependency). Same seed, same sky.
pub fn hash32(seed: u32) -> u32 {
    let mut n = seed;
    n = n.wrapping_mul(2654435761);
    n ^= n >> 16;
    n = n.wrapping_mul(2246822519);
    n ^= n >> 13;
    n
}

#[derive(Debug, Clone, Copy)]
struct Star {
    /// Position as unit fractions of the canvas, so resizes re-scale for free.
    x: f32,
    y: f32,
    size: f32,
    alpha: f32,
}

/// Fixed background star layer. Generated once; unaffected by pan/zoom
/// (the sky is effectively at infinity).
#[derive(Debug)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    pub fn new(count: usize, seed: u32) -> Self {
        let frac = |h: u32| (h as f32) / (u32::MAX as f32);
        let mut stars = Vec::with_capacity(count);
        for i in 0..count {
            let h1 = hash32(i as u32 * 7 + seed);
            let h2 = hash32(i as u32 * 13 + seed + 97);
            let h3 = hash32(i as u32 * 19 + seed + 151);
            let h4 = hash32(i as u32 * 23 + seed + 211);
            stars.push(Star {
                x: frac(h1),
                y: frac(h2),
                size: 0.4 + frac(h3) * 1.4,
                alpha: 0.3 + frac(h4) * 0.5,
            });
        }
        Self { stars }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn draw(&self, list: &mut DrawList, width: f32, height: f32) {
        for star in &self.stars {
            list.fill_circle(
                Vec2::new(star.x * width, star.y * height),
                star.size,
                Color::WHITE.with_alpha(star.alpha),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::draw::DrawCmd;

    #[test]
    fn hash_is_deterministic_and_spreads() {
        assert_eq!(hash32(42), hash32(42));
        assert_ne!(hash32(0), hash32(1));
    }

    #[test]
    fn same_seed_same_sky() {
        let a = Starfield::new(50, 7);
        let b = Starfield::new(50, 7);
        let mut list_a = DrawList::new();
        let mut list_b = DrawList::new();
        a.draw(&mut list_a, 800.0, 600.0);
        b.draw(&mut list_b, 800.0, 600.0);
        let cmds_a: Vec<&DrawCmd> = list_a.iter().collect();
        let cmds_b: Vec<&DrawCmd> = list_b.iter().collect();
        assert_eq!(cmds_a, cmds_b);
    }

    #[test]
    fn stars_cover_the_canvas() {
        let field = Starfield::new(200, 42);
        let mut list = DrawList::new();
        field.draw(&mut list, 1000.0, 500.0);
        assert_eq!(list.len(), 200);
        for cmd in list.iter() {
            if let DrawCmd::FillCircle { center, .. } = cmd {
                assert!((0.0..=1000.0).contains(&center.x));
                assert!((0.0..=500.0).contains(&center.y));
            }
        }
    }
}
