use crate::constants::*;
use portfolio_core::{ClearMode, Link, ParticleField, ThreadField};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A canvas together with its 2D context.
pub struct Surface {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
}

impl Surface {
    pub fn acquire(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext(2d) threw: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { canvas, ctx })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.canvas.height() as f64
    }
}

pub fn clear(s: &Surface, mode: ClearMode) {
    match mode {
        ClearMode::Full => s.ctx.clear_rect(0.0, 0.0, s.width(), s.height()),
        ClearMode::Trail(alpha) => {
            s.ctx.set_fill_style_str(&format!("rgba(0, 0, 0, {})", alpha));
            s.ctx.fill_rect(0.0, 0.0, s.width(), s.height());
        }
    }
}

fn circle(ctx: &web::CanvasRenderingContext2d, x: f64, y: f64, r: f64) {
    ctx.begin_path();
    _ = ctx.arc(x, y, r.max(0.0), 0.0, TAU);
    ctx.fill();
}

pub fn draw_particles(s: &Surface, field: &ParticleField) {
    let ctx = &s.ctx;
    let glow = field.config().glow;
    for p in field.particles() {
        let (x, y) = (p.position.x as f64, p.position.y as f64);
        let size = p.size as f64;
        let alpha = p.alpha as f64;
        let color = field.color(p);

        ctx.save();
        ctx.set_global_alpha(alpha);
        ctx.set_fill_style_str(color);
        if glow {
            ctx.set_shadow_blur(GLOW_BLUR_PX);
            ctx.set_shadow_color(color);
            circle(ctx, x, y, size);
            ctx.set_shadow_blur(0.0);
            ctx.set_global_alpha((alpha + CORE_ALPHA_BOOST).min(1.0));
            circle(ctx, x, y, size * CORE_SIZE_RATIO);
        } else {
            circle(ctx, x, y, size);
        }
        ctx.restore();
    }
}

pub fn draw_links(s: &Surface, field: &ParticleField, links: &[Link]) {
    let Some(conn) = field.config().connections else {
        return;
    };
    let [r, g, b] = conn.rgb;
    let ctx = &s.ctx;
    let particles = field.particles();
    ctx.set_line_width(LINK_WIDTH_PX);
    for link in links {
        let (pa, pb) = (particles[link.a].position, particles[link.b].position);
        ctx.set_stroke_style_str(&format!("rgba({}, {}, {}, {})", r, g, b, link.opacity));
        ctx.begin_path();
        ctx.move_to(pa.x as f64, pa.y as f64);
        ctx.line_to(pb.x as f64, pb.y as f64);
        ctx.stroke();
    }
}

pub fn draw_vignette(s: &Surface) {
    let (w, h) = (s.width(), s.height());
    let (cx, cy) = (w / 2.0, h / 2.0);
    let Ok(gradient) =
        s.ctx
            .create_radial_gradient(cx, cy, 0.0, cx, cy, w * VIGNETTE_RADIUS_RATIO)
    else {
        return;
    };
    _ = gradient.add_color_stop(0.0, "rgba(0, 0, 0, 0)");
    _ = gradient.add_color_stop(0.5, "rgba(0, 0, 0, 0)");
    _ = gradient.add_color_stop(1.0, &format!("rgba(0, 0, 0, {})", VIGNETTE_EDGE_ALPHA));
    s.ctx.set_fill_style_canvas_gradient(&gradient);
    s.ctx.fill_rect(0.0, 0.0, w, h);
}

pub fn draw_threads(s: &Surface, field: &ThreadField) {
    let ctx = &s.ctx;
    let [r, g, b] = field.config().rgb;
    for t in field.threads() {
        ctx.set_stroke_style_str(&format!("rgba({}, {}, {}, {})", r, g, b, t.opacity));
        ctx.set_line_width(t.width as f64);
        ctx.begin_path();
        ctx.move_to(t.x as f64, t.last_y as f64);
        ctx.line_to(t.x as f64, t.y as f64);
        ctx.stroke();
    }
}
