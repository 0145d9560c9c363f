//! Deterministic collaborators for the circuit background tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use rand::RngCore;

use super::surface::DrawTarget;

pub fn approx(a: f64, b: f64) -> bool {
	(a - b).abs() < 1e-9
}

/// Yields a fixed sequence of unit draws through `Rng::gen::<f64>()`.
///
/// Values must be multiples of 2^-53 to round-trip exactly; panics when the
/// script runs out so tests also pin down how many draws were made.
pub struct ScriptedRng {
	draws: VecDeque<u64>,
}

impl ScriptedRng {
	pub fn new(values: &[f64]) -> Self {
		let draws = values
			.iter()
			.map(|&v| {
				assert!((0.0..1.0).contains(&v), "draw {v} outside [0, 1)");
				((v * (1u64 << 53) as f64) as u64) << 11
			})
			.collect();
		Self { draws }
	}

	pub fn is_exhausted(&self) -> bool {
		self.draws.is_empty()
	}
}

impl RngCore for ScriptedRng {
	fn next_u32(&mut self) -> u32 {
		(self.next_u64() >> 32) as u32
	}

	fn next_u64(&mut self) -> u64 {
		self.draws.pop_front().expect("scripted draws exhausted")
	}

	fn fill_bytes(&mut self, dest: &mut [u8]) {
		for chunk in dest.chunks_mut(8) {
			let bytes = self.next_u64().to_le_bytes();
			chunk.copy_from_slice(&bytes[..chunk.len()]);
		}
	}

	fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
		self.fill_bytes(dest);
		Ok(())
	}
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
	Background {
		color: String,
		width: f64,
		height: f64,
	},
	Line {
		from: (f64, f64),
		to: (f64, f64),
		color: String,
		width: f64,
	},
	Circle {
		x: f64,
		y: f64,
		radius: f64,
		color: String,
	},
	Glow {
		blur: f64,
		color: String,
	},
	ClearGlow,
}

/// Records every draw call instead of painting.
#[derive(Default)]
pub struct RecordingTarget {
	pub ops: RefCell<Vec<DrawOp>>,
}

impl RecordingTarget {
	pub fn take(&self) -> Vec<DrawOp> {
		std::mem::take(&mut *self.ops.borrow_mut())
	}
}

impl DrawTarget for RecordingTarget {
	fn fill_background(&self, color: &str, width: f64, height: f64) {
		self.ops.borrow_mut().push(DrawOp::Background {
			color: color.into(),
			width,
			height,
		});
	}

	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), color: &str, width: f64) {
		self.ops.borrow_mut().push(DrawOp::Line {
			from,
			to,
			color: color.into(),
			width,
		});
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: &str) {
		self.ops.borrow_mut().push(DrawOp::Circle {
			x,
			y,
			radius,
			color: color.into(),
		});
	}

	fn set_glow(&self, blur: f64, color: &str) {
		self.ops.borrow_mut().push(DrawOp::Glow {
			blur,
			color: color.into(),
		});
	}

	fn clear_glow(&self) {
		self.ops.borrow_mut().push(DrawOp::ClearGlow);
	}
}
