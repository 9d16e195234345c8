use glam::Vec2;

/// Where a body landed on screen this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub center: Vec2,
    pub radius: f32,
}

impl ScreenRect {
    /// Whether `point` falls within the disc plus `tolerance` pixels.
    pub fn contains(&self, point: Vec2, tolerance: f32) -> bool {
        point.distance(self.center) <= self.radius + tolerance
    }
}

/// Per-frame side table of body id → screen rect, rebuilt by the render
/// loop each frame and read by the viewport controller for hit-testing.
/// Ephemeral render output, never stored on the catalog itself.
#[derive(Debug, Default)]
pub struct FrameGeometry {
    entries: Vec<(String, ScreenRect)>,
}

impl FrameGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Record a body's rect. Insertion order is hit-test order.
    pub fn insert(&mut self, id: &str, rect: ScreenRect) {
        self.entries.push((id.to_owned(), rect));
    }

    pub fn get(&self, id: &str) -> Option<ScreenRect> {
        self.entries
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map(|(_, rect)| *rect)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ScreenRect)> {
        self.entries.iter().map(|(id, rect)| (id.as_str(), *rect))
    }

    /// First recorded body containing `point`, excluding `skip_id`.
    /// Before any frame has been drawn the table is empty and this
    /// safely reports no match.
    pub fn hit_test(&self, point: Vec2, tolerance: f32, skip_id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(id, rect)| id != skip_id && rect.contains(point, tolerance))
            .map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, radius: f32) -> ScreenRect {
        ScreenRect {
            center: Vec2::new(x, y),
            radius,
        }
    }

    #[test]
    fn empty_table_reports_no_match() {
        let geometry = FrameGeometry::new();
        assert!(geometry.hit_test(Vec2::new(100.0, 100.0), 5.0, "sun").is_none());
    }

    #[test]
    fn exact_center_always_hits() {
        let mut geometry = FrameGeometry::new();
        geometry.insert("earth", rect(200.0, 150.0, 8.0));
        assert_eq!(
            geometry.hit_test(Vec2::new(200.0, 150.0), 5.0, "sun"),
            Some("earth")
        );
    }

    #[test]
    fn tolerance_extends_the_disc() {
        let mut geometry = FrameGeometry::new();
        geometry.insert("mercury", rect(100.0, 100.0, 3.0));
        assert_eq!(
            geometry.hit_test(Vec2::new(107.5, 100.0), 5.0, "sun"),
            Some("mercury")
        );
        assert!(geometry.hit_test(Vec2::new(109.0, 100.0), 5.0, "sun").is_none());
    }

    #[test]
    fn first_inserted_wins_on_overlap() {
        let mut geometry = FrameGeometry::new();
        geometry.insert("venus", rect(50.0, 50.0, 10.0));
        geometry.insert("earth", rect(52.0, 50.0, 10.0));
        assert_eq!(
            geometry.hit_test(Vec2::new(51.0, 50.0), 0.0, "sun"),
            Some("venus")
        );
    }

    #[test]
    fn skip_id_is_excluded() {
        let mut geometry = FrameGeometry::new();
        geometry.insert("sun", rect(400.0, 300.0, 30.0));
        assert!(geometry.hit_test(Vec2::new(400.0, 300.0), 5.0, "sun").is_none());
    }

    #[test]
    fn clear_resets_between_frames() {
        let mut geometry = FrameGeometry::new();
        geometry.insert("earth", rect(1.0, 1.0, 1.0));
        geometry.clear();
        assert!(geometry.is_empty());
        assert!(geometry.get("earth").is_none());
    }
}
