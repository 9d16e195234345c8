use orrery_core::{Color, DrawCmd, DrawList};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

const LABEL_FONT: &str = "12px Inter, sans-serif";
const TAU: f64 = std::f64::consts::TAU;

/// Replays a core draw list onto a canvas 2D context. Stateless between
/// frames; every frame repaints from scratch.
pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

fn css(color: Color) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        (color.r * 255.0).round() as u8,
        (color.g * 255.0).round() as u8,
        (color.b * 255.0).round() as u8,
        color.a
    )
}

impl CanvasPainter {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    pub fn paint(&self, list: &DrawList, width: f64, height: f64) -> Result<(), JsValue> {
        for cmd in list.iter() {
            match cmd {
                DrawCmd::Clear { color } => {
                    self.ctx.set_fill_style_str(&css(*color));
                    self.ctx.fill_rect(0.0, 0.0, width, height);
                }
                DrawCmd::FillCircle {
                    center,
                    radius,
                    color,
                } => {
                    self.ctx.set_fill_style_str(&css(*color));
                    self.ctx.begin_path();
                    self.ctx
                        .arc(center.x as f64, center.y as f64, (*radius as f64).max(0.0), 0.0, TAU)?;
                    self.ctx.fill();
                }
                DrawCmd::GlowCircle {
                    center,
                    radius,
                    halo,
                    color,
                } => {
                    let (x, y) = (center.x as f64, center.y as f64);
                    let gradient = self
                        .ctx
                        .create_radial_gradient(x, y, 0.0, x, y, (*halo as f64).max(0.1))?;
                    gradient.add_color_stop(0.0, &css(*color))?;
                    gradient.add_color_stop(0.5, &css(color.with_alpha(color.a * 0.5)))?;
                    gradient.add_color_stop(1.0, &css(color.with_alpha(0.0)))?;
                    self.ctx.set_fill_style_canvas_gradient(&gradient);
                    self.ctx.begin_path();
                    self.ctx.arc(x, y, (*radius as f64).max(0.0), 0.0, TAU)?;
                    self.ctx.fill();
                }
                DrawCmd::StrokeCircle {
                    center,
                    radius,
                    width: line_width,
                    color,
                } => {
                    self.ctx.set_stroke_style_str(&css(*color));
                    self.ctx.set_line_width(*line_width as f64);
                    self.ctx.begin_path();
                    self.ctx
                        .arc(center.x as f64, center.y as f64, (*radius as f64).max(0.0), 0.0, TAU)?;
                    self.ctx.stroke();
                }
                DrawCmd::Line {
                    from,
                    to,
                    width: line_width,
                    color,
                } => {
                    self.ctx.set_stroke_style_str(&css(*color));
                    self.ctx.set_line_width(*line_width as f64);
                    self.ctx.begin_path();
                    self.ctx.move_to(from.x as f64, from.y as f64);
                    self.ctx.line_to(to.x as f64, to.y as f64);
                    self.ctx.stroke();
                }
                DrawCmd::Label { text, pos, color } => {
                    self.ctx.set_fill_style_str(&css(*color));
                    self.ctx.set_font(LABEL_FONT);
                    self.ctx.set_text_align("center");
                    self.ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
                }
            }
        }
        Ok(())
    }
}
