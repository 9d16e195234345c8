use glam::Vec2;

use crate::catalog::{Catalog, DetailStore, SelectedBody};
use crate::config::VizConfig;
use crate::events::ViewerEvent;
use crate::input::{InputEvent, InputQueue};
use crate::render::FrameGeometry;
use crate::sim::state::SimulationState;

/// Translates drained pointer/wheel events into pan, zoom, and selection
/// changes, hit-testing clicks against the previous frame's geometry.
pub struct ViewportController {
    cfg: VizConfig,
    dragging: bool,
    drag_moved: bool,
    press_pos: Vec2,
    last_pos: Vec2,
}

impl ViewportController {
    pub fn new(cfg: VizConfig) -> Self {
        Self {
            cfg,
            dragging: false,
            drag_moved: false,
            press_pos: Vec2::ZERO,
            last_pos: Vec2::ZERO,
        }
    }

    /// Drain the input queue and apply it. Selection changes push a
    /// [`ViewerEvent::BodySelected`] into `events`.
    pub fn process(
        &mut self,
        state: &mut SimulationState,
        input: &mut InputQueue,
        geometry: &FrameGeometry,
        catalog: &Catalog,
        details: &DetailStore,
        events: &mut Vec<ViewerEvent>,
    ) {
        for event in input.drain() {
            match event {
                InputEvent::PointerDown { x, y } => {
                    self.dragging = true;
                    self.drag_moved = false;
                    self.press_pos = Vec2::new(x, y);
                    self.last_pos = self.press_pos;
                }
                InputEvent::PointerMove { x, y } => {
                    if !self.dragging {
                        continue;
                    }
                    let pos = Vec2::new(x, y);
                    if !self.drag_moved {
                        if pos.distance(self.press_pos) > self.cfg.drag_threshold_px {
                            self.drag_moved = true;
                            // Catch up on the distance covered before the
                            // press was promoted to a drag.
                            state.pan_by(pos - self.press_pos);
                        }
                    } else {
                        state.pan_by(pos - self.last_pos);
                    }
                    self.last_pos = pos;
                }
                InputEvent::PointerUp { x, y } => {
                    if self.dragging && !self.drag_moved {
                        self.click(Vec2::new(x, y), state, geometry, catalog, details, events);
                    }
                    self.dragging = false;
                    self.drag_moved = false;
                }
                InputEvent::PointerLeave => {
                    self.dragging = false;
                    self.drag_moved = false;
                }
                InputEvent::Wheel { delta_y } => {
                    let factor = if delta_y > 0.0 {
                        self.cfg.zoom_step_out
                    } else {
                        self.cfg.zoom_step_in
                    };
                    state.zoom_by(factor, &self.cfg);
                }
            }
        }
    }

    /// Re-emit the current selection with whatever detail is now cached
    /// (called after a detail record arrives). Stale ids emit nothing.
    pub fn refresh_selection(
        &self,
        state: &SimulationState,
        catalog: &Catalog,
        details: &DetailStore,
        events: &mut Vec<ViewerEvent>,
    ) {
        if let Some(id) = state.selected.as_deref() {
            if let Some(body) = catalog.get(id) {
                events.push(ViewerEvent::BodySelected(SelectedBody::merge(
                    body,
                    details.get(id),
                )));
            }
        }
    }

    /// Hit-test a click: planets in catalog order first, then the star
    /// against its fixed hit radius. A miss leaves the selection alone.
    fn click(
        &self,
        pos: Vec2,
        state: &mut SimulationState,
        geometry: &FrameGeometry,
        catalog: &Catalog,
        details: &DetailStore,
        events: &mut Vec<ViewerEvent>,
    ) {
        let star_id = catalog.star().id.as_str();
        let hit = geometry
            .hit_test(pos, self.cfg.hit_tolerance_px, star_id)
            .map(|id| id.to_owned())
            .or_else(|| {
                let rect = geometry.get(star_id)?;
                (pos.distance(rect.center) <= self.cfg.star_hit_radius_px)
                    .then(|| star_id.to_owned())
            });
        if let Some(id) = hit {
            if let Some(body) = catalog.get(&id) {
                state.selected = Some(id.clone());
                events.push(ViewerEvent::BodySelected(SelectedBody::merge(
                    body,
                    details.get(&id),
                )));
            }
        }
    }
}
