use glam::Vec2;

use crate::color::Color;

/// One drawing primitive, in canvas pixel coordinates. The web bridge
/// replays these onto a 2D context; tests inspect them directly.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Fill the whole surface.
    Clear { color: Color },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Disc filled with a radial gradient from `color` at the center to
    /// transparent at `halo`: the glow behind the star and each planet.
    GlowCircle {
        center: Vec2,
        radius: f32,
        halo: f32,
        color: Color,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        width: f32,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    /// Centered text, drawn in the UI label font.
    Label {
        text: String,
        pos: Vec2,
        color: Color,
    },
}

/// The ordered list of primitives for one frame, background first.
/// Rebuilt from scratch every frame.
#[derive(Debug, Default)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            cmds: Vec::with_capacity(256),
        }
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn background(&mut self, color: Color) {
        self.cmds.push(DrawCmd::Clear { color });
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.cmds.push(DrawCmd::FillCircle {
            center,
            radius,
            color,
        });
    }

    pub fn glow_circle(&mut self, center: Vec2, radius: f32, halo: f32, color: Color) {
        self.cmds.push(DrawCmd::GlowCircle {
            center,
            radius,
            halo,
            color,
        });
    }

    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color) {
        self.cmds.push(DrawCmd::StrokeCircle {
            center,
            radius,
            width,
            color,
        });
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.cmds.push(DrawCmd::Line {
            from,
            to,
            width,
            color,
        });
    }

    pub fn label(&mut self, text: impl Into<String>, pos: Vec2, color: Color) {
        self.cmds.push(DrawCmd::Label {
            text: text.into(),
            pos,
            color,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCmd> {
        self.cmds.iter()
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }
}
