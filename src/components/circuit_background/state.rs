use rand::Rng;

use super::builder::build_nodes;
use super::config::CircuitConfig;
use super::types::{Node, PointerState, Viewport};

/// Advance one node by a frame: move, bounce off the viewport edges, clamp,
/// then advance the pulse phase.
pub fn step_node(node: &mut Node, viewport: Viewport, phase_step: f64) {
	node.x += node.vx;
	node.y += node.vy;

	// Reflect on the unclamped position so an overshoot flips exactly once.
	if node.x < 0.0 || node.x > viewport.width {
		node.vx = -node.vx;
	}
	if node.y < 0.0 || node.y > viewport.height {
		node.vy = -node.vy;
	}

	node.x = node.x.clamp(0.0, viewport.width.max(0.0));
	node.y = node.y.clamp(0.0, viewport.height.max(0.0));

	node.phase += phase_step;
}

pub struct CircuitState {
	pub nodes: Vec<Node>,
	pub pointer: PointerState,
	pub viewport: Viewport,
	pub config: CircuitConfig,
}

impl CircuitState {
	pub fn new<R: Rng + ?Sized>(viewport: Viewport, config: CircuitConfig, rng: &mut R) -> Self {
		let nodes = build_nodes(viewport, &config, rng);
		Self {
			nodes,
			pointer: PointerState::default(),
			viewport,
			config,
		}
	}

	pub fn tick(&mut self) {
		let (viewport, step) = (self.viewport, self.config.phase_step);
		for node in &mut self.nodes {
			step_node(node, viewport, step);
		}
	}

	/// Only the bounds change; nodes keep their coordinates and are pulled
	/// back in by the next `tick`.
	pub fn resize(&mut self, viewport: Viewport) {
		self.viewport = viewport;
	}

	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer = PointerState { x, y };
	}

	pub fn edge_count(&self) -> usize {
		self.nodes.iter().map(|n| n.connections.len()).sum::<usize>() / 2
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;
	use crate::components::circuit_background::testing::approx;

	fn node(x: f64, y: f64, vx: f64, vy: f64) -> Node {
		Node {
			x,
			y,
			vx,
			vy,
			size: 1.0,
			phase: 0.0,
			connections: Vec::new(),
		}
	}

	fn seeded(width: u32, height: u32, seed: u64) -> CircuitState {
		CircuitState::new(
			Viewport::new(width, height),
			CircuitConfig::default(),
			&mut SmallRng::seed_from_u64(seed),
		)
	}

	#[test]
	fn moves_by_velocity_inside_bounds() {
		let mut n = node(10.0, 20.0, 0.1, -0.1);
		step_node(&mut n, Viewport::new(100, 100), 0.02);
		assert!(approx(n.x, 10.1) && approx(n.y, 19.9));
		assert!(approx(n.vx, 0.1) && approx(n.vy, -0.1));
		assert!(approx(n.phase, 0.02));
	}

	#[test]
	fn overshoot_flips_once_and_clamps() {
		let viewport = Viewport::new(100, 50);
		let mut n = node(99.95, 0.05, 0.1, -0.1);
		step_node(&mut n, viewport, 0.02);
		assert_eq!((n.x, n.y), (100.0, 0.0));
		assert!(approx(n.vx, -0.1) && approx(n.vy, 0.1));

		// Sitting exactly on the edge is inside; no second flip.
		step_node(&mut n, viewport, 0.02);
		assert!(approx(n.vx, -0.1) && approx(n.vy, 0.1));
		assert!(approx(n.x, 99.9) && approx(n.y, 0.1));
	}

	#[test]
	fn phase_advances_by_fixed_step() {
		let mut state = seeded(800, 600, 3);
		state.set_pointer(400.0, 300.0);
		let before: Vec<f64> = state.nodes.iter().map(|n| n.phase).collect();
		for frame in 1..=50 {
			state.tick();
			if frame == 20 {
				state.set_pointer(0.0, 0.0);
				state.resize(Viewport::new(200, 200));
			}
		}
		for (n, start) in state.nodes.iter().zip(before) {
			assert!(approx(n.phase, start + 50.0 * 0.02));
		}
	}

	#[test]
	fn nodes_stay_in_bounds_over_many_frames() {
		let mut state = seeded(640, 480, 11);
		assert_eq!(state.nodes.len(), 12);
		for _ in 0..5_000 {
			state.tick();
			for n in &state.nodes {
				assert!((0.0..=640.0).contains(&n.x) && (0.0..=480.0).contains(&n.y));
			}
		}
	}

	#[test]
	fn resize_keeps_graph_and_reclamps_on_next_tick() {
		let mut state = seeded(1000, 1000, 5);
		let count = state.nodes.len();
		let edges = state.edge_count();

		state.resize(Viewport::new(300, 200));
		assert_eq!(state.nodes.len(), count);
		assert_eq!(state.edge_count(), edges);

		state.tick();
		for n in &state.nodes {
			assert!((0.0..=300.0).contains(&n.x) && (0.0..=200.0).contains(&n.y));
		}
	}

	#[test]
	fn pointer_is_last_write_wins() {
		let mut state = seeded(100, 100, 0);
		assert_eq!(state.pointer, PointerState::default());
		state.set_pointer(5.0, 6.0);
		state.set_pointer(7.0, 8.0);
		assert_eq!(state.pointer, PointerState { x: 7.0, y: 8.0 });
	}
}
