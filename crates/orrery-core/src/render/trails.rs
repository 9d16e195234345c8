use std::collections::HashMap;
use std::collections::VecDeque;

use glam::Vec2;

use crate::color::Color;
use crate::render::draw::DrawList;

/// Recent orbital positions per planet, drawn as fading polylines.
///
/// Points are stored in base space (offset from the star, before pan and
/// zoom) so an already-recorded trail pans and zooms with the scene. A
/// scale-mode switch invalidates the base-space radii; callers clear.
#[derive(Debug)]
pub struct TrailSet {
    capacity: usize,
    trails: HashMap<String, VecDeque<Vec2>>,
}

impl TrailSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            trails: HashMap::new(),
        }
    }

    /// Append a base-space point to a planet's trail, evicting the oldest
    /// once the ring is full.
    pub fn push(&mut self, id: &str, base_pos: Vec2) {
        let trail = self
            .trails
            .entry(id.to_owned())
            .or_insert_with(|| VecDeque::with_capacity(self.capacity));
        if trail.len() == self.capacity {
            trail.pop_front();
        }
        trail.push_back(base_pos);
    }

    pub fn clear(&mut self) {
        self.trails.clear();
    }

    pub fn len(&self, id: &str) -> usize {
        self.trails.get(id).map_or(0, VecDeque::len)
    }

    /// Draw one planet's trail as segments fading toward the tail.
    pub fn draw(&self, list: &mut DrawList, id: &str, color: Color, origin: Vec2, zoom: f64) {
        let Some(trail) = self.trails.get(id) else {
            return;
        };
        let count = trail.len();
        if count < 2 {
            return;
        }
        let to_screen = |p: &Vec2| origin + *p * zoom as f32;
        for (i, pair) in trail.iter().zip(trail.iter().skip(1)).enumerate() {
            // Oldest segments are faintest.
            let alpha = 0.5 * (i + 1) as f32 / count as f32;
            list.line(to_screen(pair.0), to_screen(pair.1), 1.0, color.with_alpha(alpha));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_buffer_caps_length() {
        let mut trails = TrailSet::new(3);
        for i in 0..10 {
            trails.push("earth", Vec2::new(i as f32, 0.0));
        }
        assert_eq!(trails.len("earth"), 3);
    }

    #[test]
    fn oldest_points_are_evicted_first() {
        let mut trails = TrailSet::new(2);
        trails.push("earth", Vec2::new(1.0, 0.0));
        trails.push("earth", Vec2::new(2.0, 0.0));
        trails.push("earth", Vec2::new(3.0, 0.0));
        let mut list = DrawList::new();
        trails.draw(&mut list, "earth", Color::WHITE, Vec2::ZERO, 1.0);
        // One segment between the two surviving points (2,0) → (3,0).
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn single_point_draws_nothing() {
        let mut trails = TrailSet::new(8);
        trails.push("mars", Vec2::ZERO);
        let mut list = DrawList::new();
        trails.draw(&mut list, "mars", Color::WHITE, Vec2::ZERO, 1.0);
        assert!(list.is_empty());
    }

    #[test]
    fn trail_points_follow_pan_and_zoom() {
        use crate::render::draw::DrawCmd;
        let mut trails = TrailSet::new(8);
        trails.push("earth", Vec2::new(10.0, 0.0));
        trails.push("earth", Vec2::new(0.0, 10.0));
        let mut list = DrawList::new();
        trails.draw(&mut list, "earth", Color::WHITE, Vec2::new(100.0, 100.0), 2.0);
        match list.iter().next().unwrap() {
            DrawCmd::Line { from, to, .. } => {
                assert_eq!(*from, Vec2::new(120.0, 100.0));
                assert_eq!(*to, Vec2::new(100.0, 120.0));
            }
            other => panic!("expected Line, got {other:?}"),
        };
    }

    #[test]
    fn clear_removes_all_trails() {
        let mut trails = TrailSet::new(4);
        trails.push("earth", Vec2::ZERO);
        trails.clear();
        assert_eq!(trails.len("earth"), 0);
    }
}
