/// Tuning constants for the circuit background.
///
/// Defaults give the stock look: one node per 25000 px² of screen,
/// links between nodes closer than 150 px with a 30% chance, and pointer
/// highlighting that fades out over 200 px for edges and 100 px for nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct CircuitConfig {
	/// Screen area (px²) backing each node.
	pub area_per_node: f64,
	/// Maximum distance for two nodes to be linked at build time.
	pub link_distance: f64,
	/// A link forms when a uniform draw exceeds this value.
	pub link_chance_threshold: f64,
	/// Velocity components are drawn from `[-spread/2, spread/2]`.
	pub velocity_spread: f64,
	/// Smallest base node radius.
	pub size_min: f64,
	/// Base radii are drawn from `[size_min, size_min + size_spread)`.
	pub size_spread: f64,
	/// Radians added to each node's phase per frame.
	pub phase_step: f64,
	/// Pointer distance at which edge highlighting reaches zero.
	pub edge_falloff: f64,
	/// Pointer distance at which node highlighting reaches zero.
	pub node_falloff: f64,
	/// Proximity above which edges and nodes switch to their highlight hue.
	pub highlight_threshold: f64,
	/// Node approach above which a glow halo is drawn.
	pub glow_threshold: f64,
	/// Blur radius of the glow halo, in pixels.
	pub glow_blur: f64,
	/// CSS color painted behind the graph every frame.
	pub background: String,
}

impl Default for CircuitConfig {
	fn default() -> Self {
		Self {
			area_per_node: 25_000.0,
			link_distance: 150.0,
			link_chance_threshold: 0.7,
			velocity_spread: 0.3,
			size_min: 1.0,
			size_spread: 2.0,
			phase_step: 0.02,
			edge_falloff: 200.0,
			node_falloff: 100.0,
			highlight_threshold: 0.1,
			glow_threshold: 0.2,
			glow_blur: 20.0,
			background: "hsl(8, 8%, 7%)".into(),
		}
	}
}
