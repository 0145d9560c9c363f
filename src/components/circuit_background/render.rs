use super::color::Hsla;
use super::state::CircuitState;
use super::surface::DrawTarget;

/// Pointer closeness in `[0, 1]`: 1 at the pointer, 0 at `falloff` and beyond.
/// A non-positive falloff never highlights.
pub fn proximity(distance: f64, falloff: f64) -> f64 {
	if !(falloff > 0.0) {
		return 0.0;
	}
	(1.0 - distance / falloff).clamp(0.0, 1.0)
}

/// Idle pulse in `[0, 1]` from an oscillation phase.
pub fn pulse(phase: f64) -> f64 {
	(phase.sin() + 1.0) / 2.0
}

pub fn render<D: DrawTarget + ?Sized>(state: &CircuitState, target: &D) {
	target.fill_background(
		&state.config.background,
		state.viewport.width,
		state.viewport.height,
	);
	draw_edges(state, target);
	draw_nodes(state, target);
}

fn edge_color(closeness: f64, pulse: f64, threshold: f64) -> Hsla {
	let lit = closeness > threshold;
	Hsla {
		hue: if lit { 212.0 } else { 0.0 },
		saturation: if lit { 100.0 } else { 0.0 },
		lightness: 25.0 + closeness * 25.0,
		// Deliberately unclamped; canvas saturates alpha above 1.
		alpha: 0.3 + pulse * 0.3 + closeness * 0.4,
	}
}

fn node_color(approach: f64, pulse: f64, threshold: f64) -> Hsla {
	let active = approach > threshold;
	Hsla {
		hue: if active { 151.0 } else { 212.0 },
		saturation: if active { 64.0 } else { 100.0 },
		lightness: 47.0 + approach * 25.0,
		alpha: 0.4 + pulse * 0.4 + approach * 0.6,
	}
}

// Each edge is listed on both endpoints and therefore stroked twice.
fn draw_edges<D: DrawTarget + ?Sized>(state: &CircuitState, target: &D) {
	let (config, pointer) = (&state.config, state.pointer);

	for node in &state.nodes {
		let closeness = proximity(node.distance_to(pointer.x, pointer.y), config.edge_falloff);
		let pulse = pulse(node.phase);
		let color = edge_color(closeness, pulse, config.highlight_threshold).to_string();
		let width = 1.0 + closeness * 2.0;

		for &idx in &node.connections {
			let Some(other) = state.nodes.get(idx) else {
				continue;
			};
			target.stroke_line((node.x, node.y), (other.x, other.y), &color, width);
		}
	}
}

fn draw_nodes<D: DrawTarget + ?Sized>(state: &CircuitState, target: &D) {
	let (config, pointer) = (&state.config, state.pointer);

	for node in &state.nodes {
		let approach = proximity(node.distance_to(pointer.x, pointer.y), config.node_falloff);
		let color = node_color(approach, pulse(node.phase), config.highlight_threshold);
		let radius = node.size + approach * 3.0;
		let fill = color.to_string();

		target.fill_circle(node.x, node.y, radius, &fill);

		if approach > config.glow_threshold {
			target.set_glow(config.glow_blur, &color.opaque().to_string());
			target.fill_circle(node.x, node.y, radius, &fill);
			target.clear_glow();
		}
	}
}
