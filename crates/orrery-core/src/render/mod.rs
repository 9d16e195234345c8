pub mod draw;
pub mod frame;
pub mod starfield;
pub mod trails;

pub use draw::{DrawCmd, DrawList};
pub use frame::{FrameGeometry, ScreenRect};
pub use starfield::Starfield;
pub use trails::TrailSet;

use glam::Vec2;

use crate::catalog::Catalog;
use crate::color::Color;
use crate::config::VizConfig;
use crate::orbit;
use crate::sim::clock::FixedTimestep;
use crate::sim::state::{ScaleMode, SimulationState};

const ORBIT_GUIDE_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.2);
const SELECTION_RING_COLOR: Color = Color::WHITE;
const SELECTION_RING_PAD: f32 = 3.0;
const LABEL_OFFSET_PX: f32 = 15.0;
/// Star disc radius per scale mode, before zoom.
const STAR_RADIUS_VISUAL: f64 = 15.0;
const STAR_RADIUS_REALISTIC: f64 = 20.0;

/// Owns simulated-time advancement and produces one draw list plus one
/// frame-geometry table per frame. Play/pause only gates time; a paused
/// loop still redraws, so pan/zoom stay live while stopped.
pub struct RenderLoop {
    cfg: VizConfig,
    clock: FixedTimestep,
    width: f32,
    height: f32,
    starfield: Starfield,
    trails: TrailSet,
    list: DrawList,
    geometry: FrameGeometry,
}

impl RenderLoop {
    pub fn new(cfg: VizConfig, width: f32, height: f32) -> Self {
        let clock = FixedTimestep::new(cfg.fixed_dt);
        let starfield = Starfield::new(cfg.star_count, cfg.star_seed);
        let trails = TrailSet::new(cfg.trail_capacity);
        Self {
            cfg,
            clock,
            width: width.max(0.0),
            height: height.max(0.0),
            starfield,
            trails,
            list: DrawList::new(),
            geometry: FrameGeometry::new(),
        }
    }

    /// Refit to a resized surface. Zero-area sizes are ignored; simulated
    /// time, pan, and zoom are untouched either way.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.width = width;
        self.height = height;
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// The star's unpanned screen position, the canvas midpoint.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Run one frame: advance simulated time (only while playing), then
    /// rebuild the draw list and geometry table.
    pub fn frame(&mut self, state: &mut SimulationState, catalog: &Catalog, dt: f32) {
        if state.playing {
            let steps = self.clock.accumulate(dt);
            state.time += steps as f64 * state.speed * self.cfg.years_per_tick;
        } else {
            self.clock.clear();
        }
        self.rebuild(state, catalog);
    }

    /// Reset view and time, stop playback, and wipe trails.
    pub fn reset(&mut self, state: &mut SimulationState) {
        state.reset();
        self.trails.clear();
        self.clock.clear();
    }

    /// Switch scale modes. Recorded trail points are in base-space radii
    /// of the old mode, so they are dropped.
    pub fn set_scale_mode(&mut self, state: &mut SimulationState, mode: ScaleMode) {
        if state.scale_mode != mode {
            state.set_scale_mode(mode);
            self.trails.clear();
        }
    }

    pub fn clear_trails(&mut self) {
        self.trails.clear();
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.list
    }

    pub fn geometry(&self) -> &FrameGeometry {
        &self.geometry
    }

    /// Rebuild the frame, background to foreground: starfield, star,
    /// orbit guides, planet discs (recording geometry), labels, trails.
    fn rebuild(&mut self, state: &SimulationState, catalog: &Catalog) {
        self.list.clear();
        self.geometry.clear();

        self.list.background(Color::BACKGROUND);
        self.starfield.draw(&mut self.list, self.width, self.height);

        let origin = self.center() + state.pan;
        let half_extent = (self.width / 2.0) as f64;
        let zoom = state.zoom;
        let mode = state.scale_mode;

        // Central star with its glow.
        let star = catalog.star();
        let star_radius = (match mode {
            ScaleMode::Visual => STAR_RADIUS_VISUAL,
            ScaleMode::Realistic => STAR_RADIUS_REALISTIC,
        } * zoom) as f32;
        self.list.glow_circle(
            origin,
            star_radius * 2.0,
            star_radius * 2.0,
            star.color.with_alpha(0.8),
        );
        self.list.fill_circle(origin, star_radius, star.color);

        if state.show_orbits {
            for planet in catalog.planets() {
                let radius = orbit::orbit_radius_px(
                    planet.semi_major_axis_au,
                    mode,
                    half_extent,
                    self.cfg.orbit_margin_px as f64,
                    zoom,
                );
                self.list.stroke_circle(origin, radius as f32, 1.0, ORBIT_GUIDE_COLOR);
            }
        }

        // Planet discs. Geometry is recorded in catalog order so the
        // innermost entries win overlapping hit-tests.
        for planet in catalog.planets() {
            let orbit_radius = orbit::orbit_radius_px(
                planet.semi_major_axis_au,
                mode,
                half_extent,
                self.cfg.orbit_margin_px as f64,
                zoom,
            );
            let angle = orbit::angle_rad(state.time, planet.orbital_period_days);
            let pos = orbit::position(self.center(), state.pan, angle, orbit_radius);
            let radius = orbit::planet_radius_px(planet.radius_km, mode, zoom) as f32;

            self.list
                .glow_circle(pos, radius * 1.5, radius * 2.0, planet.color);
            self.list.fill_circle(pos, radius, planet.color);
            if state.selected.as_deref() == Some(planet.id.as_str()) {
                self.list.stroke_circle(
                    pos,
                    radius + SELECTION_RING_PAD,
                    2.0,
                    SELECTION_RING_COLOR,
                );
            }
            self.geometry.insert(&planet.id, ScreenRect { center: pos, radius });

            if state.show_trails && state.playing {
                let base = Vec2::new(
                    (angle.cos() * orbit_radius / zoom) as f32,
                    (angle.sin() * orbit_radius / zoom) as f32,
                );
                self.trails.push(&planet.id, base);
            }
        }

        // The star hit-tests against a fixed radius; its entry still
        // records the drawn rect, inserted last so planets take priority.
        self.geometry.insert(
            &star.id,
            ScreenRect {
                center: origin,
                radius: star_radius,
            },
        );

        if state.show_labels {
            for (id, rect) in self.geometry.iter() {
                if id == star.id {
                    continue;
                }
                if let Some(body) = catalog.get(id) {
                    self.list.label(
                        body.name.clone(),
                        rect.center + Vec2::new(0.0, rect.radius + LABEL_OFFSET_PX),
                        Color::WHITE,
                    );
                }
            }
        }

        if state.show_trails {
            for planet in catalog.planets() {
                self.trails
                    .draw(&mut self.list, &planet.id, planet.color, origin, zoom);
            }
        }
    }
}
