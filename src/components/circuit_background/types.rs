/// A point in the animated circuit graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Base radius, fixed at creation.
	pub size: f64,
	/// Oscillation angle driving the idle pulse.
	pub phase: f64,
	/// Indices of undirected edge partners.
	pub connections: Vec<usize>,
}

impl Node {
	pub fn distance_to(&self, x: f64, y: f64) -> f64 {
		((self.x - x).powi(2) + (self.y - y).powi(2)).sqrt()
	}
}

/// Last known pointer position relative to the canvas origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
	pub x: f64,
	pub y: f64,
}

/// Drawing surface dimensions in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

impl Viewport {
	pub fn new(width: u32, height: u32) -> Self {
		Self {
			width: width as f64,
			height: height as f64,
		}
	}

	pub fn area(&self) -> f64 {
		self.width * self.height
	}
}
