//! Canvas drawing for the particle field.
//!
//! One pass per frame: wipe the surface, then draw every particle through a
//! translate/rotate transform with its own alpha. No background fill - the
//! layer stays transparent and sits behind the page content.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::config::ShapeKind;
use super::field::FieldState;

/// Renders the complete field to the canvas.
pub fn render(state: &FieldState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);

	for p in &state.particles {
		ctx.save();
		let _ = ctx.translate(p.x, p.y);
		ctx.set_global_alpha(p.opacity);

		match state.config.shape {
			ShapeKind::Dash => {
				let _ = ctx.rotate(p.rotation);
				// Round caps give the dash its rounded-rectangle look.
				ctx.set_stroke_style_str(&p.color.to_css());
				ctx.set_line_width(p.width);
				ctx.set_line_cap("round");
				ctx.begin_path();
				ctx.move_to(-p.length / 2.0, 0.0);
				ctx.line_to(p.length / 2.0, 0.0);
				ctx.stroke();
			}
			ShapeKind::Disc => {
				ctx.set_fill_style_str(&p.color.to_css());
				ctx.begin_path();
				let _ = ctx.arc(0.0, 0.0, p.radius, 0.0, PI * 2.0);
				ctx.fill();
			}
		}

		ctx.restore();
	}
}
