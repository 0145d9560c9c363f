use std::f64::consts::TAU;

use rand::Rng;

use super::config::CircuitConfig;
use super::types::{Node, Viewport};

/// Number of nodes for a viewport, scaled by screen area.
pub fn node_count(viewport: Viewport, config: &CircuitConfig) -> usize {
	let positive = |v: f64| v > 0.0;
	if !(positive(viewport.width) && positive(viewport.height) && positive(config.area_per_node)) {
		return 0;
	}
	(viewport.area() / config.area_per_node).floor() as usize
}

/// Scatter nodes over the viewport and link nearby pairs.
///
/// Every draw comes from `rng` in a fixed order (x, y, vx, vy, size, phase,
/// then one link draw per in-range earlier node), so a seeded generator
/// always produces the same graph. Each new node is only compared with nodes
/// created before it; links are recorded on both ends.
pub fn build_nodes<R: Rng + ?Sized>(
	viewport: Viewport,
	config: &CircuitConfig,
	rng: &mut R,
) -> Vec<Node> {
	let count = node_count(viewport, config);
	let mut nodes: Vec<Node> = Vec::with_capacity(count);

	for i in 0..count {
		let mut node = Node {
			x: rng.r#gen::<f64>() * viewport.width,
			y: rng.r#gen::<f64>() * viewport.height,
			vx: (rng.r#gen::<f64>() - 0.5) * config.velocity_spread,
			vy: (rng.r#gen::<f64>() - 0.5) * config.velocity_spread,
			size: rng.r#gen::<f64>() * config.size_spread + config.size_min,
			phase: rng.r#gen::<f64>() * TAU,
			connections: Vec::new(),
		};

		for (j, other) in nodes.iter_mut().enumerate() {
			// The link draw only happens for pairs in range.
			if other.distance_to(node.x, node.y) < config.link_distance
				&& rng.r#gen::<f64>() > config.link_chance_threshold
			{
				node.connections.push(j);
				other.connections.push(i);
			}
		}

		nodes.push(node);
	}

	nodes
}
