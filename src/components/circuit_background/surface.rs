use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

/// The handful of 2d drawing primitives the circuit renderer needs.
pub trait DrawTarget {
	fn fill_background(&self, color: &str, width: f64, height: f64);
	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), color: &str, width: f64);
	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: &str);
	/// Blurred halo applied to subsequent fills until `clear_glow`.
	fn set_glow(&self, blur: f64, color: &str);
	fn clear_glow(&self);
}

impl DrawTarget for CanvasRenderingContext2d {
	fn fill_background(&self, color: &str, width: f64, height: f64) {
		self.set_fill_style_str(color);
		self.fill_rect(0.0, 0.0, width, height);
	}

	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), color: &str, width: f64) {
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.set_stroke_style_str(color);
		self.set_line_width(width);
		self.stroke();
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: &str) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, TAU);
		self.set_fill_style_str(color);
		self.fill();
	}

	fn set_glow(&self, blur: f64, color: &str) {
		self.set_shadow_blur(blur);
		self.set_shadow_color(color);
	}

	fn clear_glow(&self) {
		self.set_shadow_blur(0.0);
	}
}
