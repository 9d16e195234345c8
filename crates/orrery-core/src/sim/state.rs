use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::VizConfig;

/// Whether orbits and planet sizes are exaggerated for legibility or
/// compressed logarithmically toward true proportions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    Visual,
    Realistic,
}

/// Canned camera framings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPreset {
    /// Whole system at zoom 1.
    Overview,
    /// Inner planets, zoom 2.
    Inner,
    /// Outer planets, zoom 0.5.
    Outer,
}

/// Speed multipliers offered as one-click presets next to the slider.
pub const SPEED_PRESETS: [f64; 5] = [0.1, 0.5, 1.0, 2.0, 5.0];

/// All mutable per-view state of the visualizer. Created once per page
/// view, mutated only by input handlers and the render loop, discarded
/// on navigation. References bodies by id and owns none of the catalog.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Simulated time in model years. Advances only while playing.
    pub time: f64,
    /// Gates time advancement and frame rescheduling.
    pub playing: bool,
    /// Speed multiplier, >= 0.
    pub speed: f64,
    /// Zoom factor, clamped to the configured range.
    pub zoom: f64,
    /// Screen-space translation applied to the whole scene.
    pub pan: Vec2,
    pub scale_mode: ScaleMode,
    /// Selected body id. May go stale across catalog reloads; lookups
    /// tolerate that by returning None.
    pub selected: Option<String>,
    pub show_orbits: bool,
    pub show_labels: bool,
    pub show_trails: bool,
}

impl SimulationState {
    pub fn new(cfg: &VizConfig) -> Self {
        Self {
            time: 0.0,
            playing: false,
            speed: cfg.default_speed,
            zoom: 1.0,
            pan: Vec2::ZERO,
            scale_mode: ScaleMode::Visual,
            selected: None,
            show_orbits: true,
            show_labels: true,
            show_trails: false,
        }
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Toggle play/pause. Returns the new playing state.
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// Back to the initial view: time 0, centered, zoom 1, nothing
    /// selected, stopped. Speed and display toggles survive.
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.pan = Vec2::ZERO;
        self.zoom = 1.0;
        self.selected = None;
        self.playing = false;
    }

    /// Jump simulated time by a fixed number of model years, in either
    /// direction. Play/pause state is untouched.
    pub fn time_jump(&mut self, years: f64) {
        self.time += years;
    }

    /// Snap simulated time back to the epoch without touching the camera.
    pub fn time_today(&mut self) {
        self.time = 0.0;
    }

    /// Set the speed multiplier. Negative input clamps to zero.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed.max(0.0);
    }

    /// Apply one of [`SPEED_PRESETS`]. Out-of-range indices are ignored.
    pub fn speed_preset(&mut self, index: usize) {
        if let Some(&speed) = SPEED_PRESETS.get(index) {
            self.speed = speed;
        }
    }

    /// Multiply zoom by `factor` and clamp to the configured range.
    pub fn zoom_by(&mut self, factor: f64, cfg: &VizConfig) {
        self.zoom = (self.zoom * factor).clamp(cfg.zoom_min, cfg.zoom_max);
    }

    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    pub fn set_scale_mode(&mut self, mode: ScaleMode) {
        self.scale_mode = mode;
    }

    pub fn apply_view_preset(&mut self, preset: ViewPreset, cfg: &VizConfig) {
        let zoom: f64 = match preset {
            ViewPreset::Overview => 1.0,
            ViewPreset::Inner => 2.0,
            ViewPreset::Outer => 0.5,
        };
        self.zoom = zoom.clamp(cfg.zoom_min, cfg.zoom_max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> (SimulationState, VizConfig) {
        let cfg = VizConfig::default();
        (SimulationState::new(&cfg), cfg)
    }

    #[test]
    fn starts_stopped_at_epoch() {
        let (s, _) = state();
        assert!(!s.playing);
        assert_eq!(s.time, 0.0);
        assert_eq!(s.zoom, 1.0);
        assert_eq!(s.pan, Vec2::ZERO);
        assert!(s.selected.is_none());
    }

    #[test]
    fn reset_restores_defaults_regardless_of_prior_state() {
        let (mut s, cfg) = state();
        s.play();
        s.time = 12.5;
        s.pan = Vec2::new(40.0, -3.0);
        s.zoom_by(100.0, &cfg);
        s.selected = Some("mars".into());

        s.reset();
        assert_eq!(s.time, 0.0);
        assert_eq!(s.pan, Vec2::ZERO);
        assert_eq!(s.zoom, 1.0);
        assert!(s.selected.is_none());
        assert!(!s.playing);
    }

    #[test]
    fn reset_keeps_speed_and_toggles() {
        let (mut s, _) = state();
        s.set_speed(2.0);
        s.show_trails = true;
        s.reset();
        assert_eq!(s.speed, 2.0);
        assert!(s.show_trails);
    }

    #[test]
    fn time_jump_preserves_play_state() {
        let (mut s, _) = state();
        s.play();
        s.time_jump(1.0);
        assert!(s.playing);
        assert_eq!(s.time, 1.0);
        s.time_jump(-2.0);
        assert_eq!(s.time, -1.0);
        s.pause();
        s.time_jump(1.0);
        assert!(!s.playing);
    }

    #[test]
    fn zoom_saturates_at_the_clamp() {
        let (mut s, cfg) = state();
        for _ in 0..100 {
            s.zoom_by(cfg.zoom_step_in, &cfg);
        }
        assert_eq!(s.zoom, cfg.zoom_max);
        for _ in 0..100 {
            s.zoom_by(cfg.zoom_step_out, &cfg);
        }
        assert_eq!(s.zoom, cfg.zoom_min);
    }

    #[test]
    fn speed_never_goes_negative() {
        let (mut s, _) = state();
        s.set_speed(-3.0);
        assert_eq!(s.speed, 0.0);
    }

    #[test]
    fn speed_presets_apply_in_range_only() {
        let (mut s, _) = state();
        s.speed_preset(4);
        assert_eq!(s.speed, 5.0);
        s.speed_preset(99);
        assert_eq!(s.speed, 5.0);
    }

    #[test]
    fn view_presets_map_to_zoom() {
        let (mut s, cfg) = state();
        s.apply_view_preset(ViewPreset::Inner, &cfg);
        assert_eq!(s.zoom, 2.0);
        s.apply_view_preset(ViewPreset::Outer, &cfg);
        assert_eq!(s.zoom, 0.5);
        s.apply_view_preset(ViewPreset::Overview, &cfg);
        assert_eq!(s.zoom, 1.0);
    }
}
