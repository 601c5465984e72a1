use folio_core::{draw_style, ParticleField, Shape};
use std::f64::consts::TAU;
use web_sys as web;

/// Clear the canvas and paint every particle of the field.
pub fn draw_particles(ctx: &web::CanvasRenderingContext2d, field: &ParticleField) {
    let (w, h) = field.size();
    ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
    let theme = field.theme();
    for p in field.particles() {
        let style = draw_style(p, theme);
        ctx.save();
        ctx.set_global_alpha(style.alpha as f64);
        // Shadow state must be set before the fill it applies to.
        match style.glow {
            Some(glow) => {
                ctx.set_shadow_color(glow.color);
                ctx.set_shadow_blur(glow.blur as f64);
            }
            None => ctx.set_shadow_blur(0.0),
        }
        ctx.set_fill_style_str(style.fill);
        ctx.begin_path();
        let (x, y) = (p.position.x as f64, p.position.y as f64);
        let traced = match style.shape {
            Shape::Ellipse { rx, ry, rotation } => {
                ctx.ellipse(x, y, rx as f64, ry as f64, rotation as f64, 0.0, TAU)
            }
            Shape::Circle { radius } => ctx.arc(x, y, radius as f64, 0.0, TAU),
        };
        if traced.is_ok() {
            ctx.fill();
        }
        ctx.restore();
    }
}
