/// Tuning knobs for the visualizer, injected into the render loop and
/// viewport controller so both stay testable with custom values.
#[derive(Debug, Clone)]
pub struct VizConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Model years added per fixed tick at speed 1.0.
    /// 0.002 puts a full Earth orbit at ~17 s of wall clock at the
    /// default 0.5x speed, slow enough to watch.
    pub years_per_tick: f64,
    /// Default speed multiplier.
    pub default_speed: f64,
    /// Zoom clamp range.
    pub zoom_min: f64,
    pub zoom_max: f64,
    /// Multiplicative zoom per wheel notch (in / out).
    pub zoom_step_in: f64,
    pub zoom_step_out: f64,
    /// Margin kept between the outermost orbit and the canvas edge.
    pub orbit_margin_px: f32,
    /// Extra pixels around a planet disc that still count as a hit.
    pub hit_tolerance_px: f32,
    /// Fixed hit radius for the star.
    pub star_hit_radius_px: f32,
    /// Screen-pixel drag distance before a press becomes a pan.
    pub drag_threshold_px: f32,
    /// Number of background stars.
    pub star_count: usize,
    /// Seed for the deterministic starfield.
    pub star_seed: u32,
    /// Maximum trail points retained per planet.
    pub trail_capacity: usize,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            years_per_tick: 0.002,
            default_speed: 0.5,
            zoom_min: 0.1,
            zoom_max: 5.0,
            zoom_step_in: 1.1,
            zoom_step_out: 0.9,
            orbit_margin_px: 50.0,
            hit_tolerance_px: 5.0,
            star_hit_radius_px: 20.0,
            drag_threshold_px: 5.0,
            star_count: 200,
            star_seed: 42,
            trail_capacity: 120,
        }
    }
}
