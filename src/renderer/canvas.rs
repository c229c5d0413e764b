//! Canvas2D renderer

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{COLOR_DANGER, COLOR_HEAD, COLOR_PRIMARY, COLOR_SECONDARY};
use crate::sim::{ColorTag, GameState, GridDimensions};

/// Particle dot radius in pixels
const PARTICLE_RADIUS: f64 = 3.0;
/// Glow around food and the snake head
const GLOW_BLUR: f64 = 15.0;
/// Rounded corner radius of snake segments
const SEGMENT_CORNER: f64 = 4.0;

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    tile_size: f64,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement, tile_size: f32) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            canvas,
            ctx,
            tile_size: tile_size as f64,
        })
    }

    /// Size the canvas to `grid` and centre it in a `window_w` x `window_h` window
    pub fn fit(&self, grid: GridDimensions, window_w: f64, window_h: f64) -> Result<(), JsValue> {
        let width = grid.width as f64 * self.tile_size;
        let height = grid.height as f64 * self.tile_size;
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);

        let style = self.canvas.style();
        style.set_property("position", "absolute")?;
        style.set_property("top", &format!("{}px", (window_h - height) / 2.0))?;
        style.set_property("left", &format!("{}px", (window_w - width) / 2.0))?;
        Ok(())
    }

    /// Draw one frame. `time` is milliseconds, used only for the food pulse.
    pub fn render(&self, state: &GameState, time: f64) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );

        for p in &state.particles {
            ctx.set_global_alpha(p.alpha() as f64);
            ctx.set_fill_style_str(particle_color(p.color));
            ctx.begin_path();
            ctx.arc(p.pos.x as f64, p.pos.y as f64, PARTICLE_RADIUS, 0.0, TAU)?;
            ctx.fill();
        }
        ctx.set_global_alpha(1.0);

        let tile = self.tile_size;

        if let Some(food) = state.food {
            let cx = food.x as f64 * tile + tile / 2.0;
            let cy = food.y as f64 * tile + tile / 2.0;
            // Breathing effect
            let pulse = (time / 200.0).sin() * 3.0;

            ctx.set_shadow_blur(GLOW_BLUR);
            ctx.set_shadow_color(COLOR_SECONDARY);
            ctx.set_fill_style_str(COLOR_SECONDARY);
            ctx.begin_path();
            ctx.arc(cx, cy, (tile / 2.0 - 2.0) + pulse * 0.5, 0.0, TAU)?;
            ctx.fill();
            ctx.set_shadow_blur(0.0);
        }

        let size = tile - 2.0;
        for (index, part) in state.snake.iter().enumerate() {
            if index == 0 {
                ctx.set_shadow_blur(GLOW_BLUR);
                ctx.set_shadow_color(COLOR_PRIMARY);
                ctx.set_fill_style_str(COLOR_HEAD);
            } else {
                ctx.set_shadow_blur(0.0);
                ctx.set_fill_style_str(COLOR_PRIMARY);
            }
            let x = part.x as f64 * tile + 1.0;
            let y = part.y as f64 * tile + 1.0;
            self.rounded_square(x, y, size, SEGMENT_CORNER)?;
            ctx.fill();
        }
        ctx.set_shadow_blur(0.0);

        Ok(())
    }

    fn rounded_square(&self, x: f64, y: f64, size: f64, r: f64) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let r = r.min(size / 2.0);
        ctx.begin_path();
        ctx.move_to(x + r, y);
        ctx.arc_to(x + size, y, x + size, y + size, r)?;
        ctx.arc_to(x + size, y + size, x, y + size, r)?;
        ctx.arc_to(x, y + size, x, y, r)?;
        ctx.arc_to(x, y, x + size, y, r)?;
        ctx.close_path();
        Ok(())
    }
}

fn particle_color(tag: ColorTag) -> &'static str {
    match tag {
        ColorTag::Food => COLOR_SECONDARY,
        ColorTag::Danger => COLOR_DANGER,
    }
}
