use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::graph::MentionGraph;

/// Side of the square the initial random placement spreads nodes over.
const INITIAL_EXTENT: f32 = 400.0;

/// Control surface of a force-directed layout.
pub trait LayoutEngine {
	/// Scatter every node pseudo-randomly, deterministically for a given seed.
	fn assign_initial_positions(&mut self, seed: u64);
	/// Resume stepping.
	fn start(&mut self);
	/// Stop stepping; positions stay where they are.
	fn stop(&mut self);
	/// Whether [`LayoutEngine::step`] currently moves nodes.
	fn is_running(&self) -> bool;
	/// Advance the simulation by `dt` seconds, if running.
	fn step(&mut self, dt: f32);
	/// Current positions, indexed like the graph's nodes.
	fn positions(&self) -> Vec<(f64, f64)>;
}

/// Tuning knobs, named after the ForceAtlas2 settings they stand in for.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutSettings {
	pub gravity: f32,
	pub scaling_ratio: f32,
	pub slow_down: f32,
	pub strong_gravity: bool,
}

impl LayoutSettings {
	/// Defaults for a graph of `order` nodes; bigger graphs move slower.
	pub fn for_order(order: usize) -> Self {
		Self {
			gravity: 0.05,
			scaling_ratio: 10.0,
			slow_down: 1.0 + (order.max(1) as f32).ln(),
			strong_gravity: true,
		}
	}

	fn simulation_parameters(&self) -> SimulationParameters {
		SimulationParameters {
			force_charge: 15.0 * self.scaling_ratio,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0 / self.slow_down,
			damping_factor: 0.9,
		}
	}
}

/// [`LayoutEngine`] backed by the `force_graph` simulation, plus a pull
/// toward the origin.
pub struct ForceLayout {
	graph: ForceGraph<usize, ()>,
	indices: Vec<DefaultNodeIdx>,
	settings: LayoutSettings,
	running: bool,
}

impl ForceLayout {
	pub fn new(graph: &MentionGraph, settings: LayoutSettings) -> Self {
		let mut sim = ForceGraph::new(settings.simulation_parameters());

		let indices: Vec<DefaultNodeIdx> = (0..graph.order())
			.map(|idx| {
				sim.add_node(NodeData {
					x: 0.0,
					y: 0.0,
					mass: graph.degree(idx) as f32 + 1.0,
					is_anchor: false,
					user_data: idx,
				})
			})
			.collect();

		// Self-loops exert no force and a zero-length spring is degenerate.
		for edge in graph.edges().iter().filter(|e| e.source != e.target) {
			sim.add_edge(
				indices[edge.source],
				indices[edge.target],
				EdgeData::default(),
			);
		}

		Self {
			graph: sim,
			indices,
			settings,
			running: false,
		}
	}

	/// Number of simulated nodes.
	pub fn node_count(&self) -> usize {
		self.indices.len()
	}

	fn apply_gravity(&mut self, dt: f32) {
		let LayoutSettings {
			gravity,
			strong_gravity,
			..
		} = self.settings;

		self.graph.visit_nodes_mut(|node| {
			if node.data.is_anchor {
				return;
			}
			let (x, y) = (node.data.x, node.data.y);
			if strong_gravity {
				// Proportional to distance, so far-flung components come back.
				let pull = (gravity * dt * 10.0).min(1.0);
				node.data.x -= x * pull;
				node.data.y -= y * pull;
			} else {
				let dist = (x * x + y * y).sqrt();
				if dist > 0.0 {
					let step = (gravity * dt * 100.0).min(dist);
					node.data.x -= x / dist * step;
					node.data.y -= y / dist * step;
				}
			}
		});
	}
}

impl LayoutEngine for ForceLayout {
	fn assign_initial_positions(&mut self, seed: u64) {
		self.graph.visit_nodes_mut(|node| {
			let idx = node.data.user_data as u64;
			node.data.x = (unit_random(seed, 2 * idx) - 0.5) * INITIAL_EXTENT;
			node.data.y = (unit_random(seed, 2 * idx + 1) - 0.5) * INITIAL_EXTENT;
		});
	}

	fn start(&mut self) {
		if !self.running {
			log::debug!("layout started ({} nodes)", self.node_count());
		}
		self.running = true;
	}

	fn stop(&mut self) {
		if self.running {
			log::debug!("layout stopped");
		}
		self.running = false;
	}

	fn is_running(&self) -> bool {
		self.running
	}

	fn step(&mut self, dt: f32) {
		if !self.running {
			return;
		}
		self.graph.update(dt);
		self.apply_gravity(dt);
	}

	fn positions(&self) -> Vec<(f64, f64)> {
		let mut positions = vec![(0.0, 0.0); self.indices.len()];
		self.graph.visit_nodes(|node| {
			positions[node.data.user_data] = (node.x() as f64, node.y() as f64);
		});
		positions
	}
}

/// splitmix64 of `seed + stream`, scaled into `[0, 1)`.
fn unit_random(seed: u64, stream: u64) -> f32 {
	let mut z = seed
		.wrapping_add(stream.wrapping_mul(0x9e37_79b9_7f4a_7c15))
		.wrapping_add(0x9e37_79b9_7f4a_7c15);
	z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
	z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
	z ^= z >> 31;
	(z >> 40) as f32 / (1u64 << 24) as f32
}
