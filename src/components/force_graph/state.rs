use std::collections::HashSet;

use super::layout::{ForceLayout, LayoutEngine, LayoutSettings};
use crate::graph::MentionGraph;

/// Extra screen-space pixels around a node that still count as a hit.
pub const HIT_SLOP: f64 = 4.0;
/// Nodes at least this big always show their label.
pub const LABEL_SIZE_THRESHOLD: f64 = 7.0;
pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 10.0;

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<usize>,
	pub neighbors: HashSet<usize>,
}

pub struct ForceGraphState {
	pub graph: MentionGraph,
	pub layout: ForceLayout,
	pub positions: Vec<(f64, f64)>,
	pub transform: ViewTransform,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
}

impl ForceGraphState {
	/// Place the graph randomly from `seed` and start the layout.
	pub fn new(graph: MentionGraph, width: f64, height: f64, seed: u64) -> Self {
		let mut layout = ForceLayout::new(&graph, LayoutSettings::for_order(graph.order()));
		layout.assign_initial_positions(seed);
		layout.start();
		let positions = layout.positions();

		Self {
			graph,
			layout,
			positions,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Topmost node under a screen position. Later nodes are drawn on top.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let slop = HIT_SLOP / self.transform.k;
		self.graph
			.nodes()
			.iter()
			.zip(&self.positions)
			.enumerate()
			.rev()
			.find(|(_, (node, (x, y)))| {
				let (dx, dy) = (x - gx, y - gy);
				(dx * dx + dy * dy).sqrt() < node.attributes.size + slop
			})
			.map(|(idx, _)| idx)
	}

	pub fn set_hover(&mut self, node: Option<usize>) {
		if self.hover.node == node {
			return;
		}
		self.hover.node = node;
		self.hover.neighbors = match node {
			Some(idx) => self.graph.neighbors(idx).collect(),
			None => HashSet::new(),
		};
	}

	pub fn is_highlighted(&self, idx: usize) -> bool {
		self.hover.node == Some(idx) || self.hover.neighbors.contains(&idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some()
	}

	/// Follow the externally owned running flag.
	pub fn set_running(&mut self, running: bool) {
		match (running, self.layout.is_running()) {
			(true, false) => self.layout.start(),
			(false, true) => self.layout.stop(),
			_ => {}
		}
	}

	pub fn tick(&mut self, dt: f32) {
		if !self.layout.is_running() {
			return;
		}
		self.layout.step(dt);
		self.positions = self.layout.positions();
	}

	/// Zoom by `factor` around the screen point `(x, y)`.
	pub fn zoom_at(&mut self, x: f64, y: f64, factor: f64) {
		let new_k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::{MentionRecord, MentionsMap, build_graph};

	fn state() -> ForceGraphState {
		let mut mentions = MentionsMap::new();
		mentions.insert(
			"@alice".into(),
			MentionRecord::new([("#general", 3.0), ("@bob", 1.0)]),
		);
		mentions.insert("&notes.md".into(), MentionRecord::new([("%7", 1.0)]));
		let graph = build_graph(&mentions).unwrap().graph;
		ForceGraphState::new(graph, 800.0, 600.0, 3)
	}

	#[test]
	fn starts_running_with_a_position_per_node() {
		let s = state();
		assert!(s.layout.is_running());
		assert_eq!(s.positions.len(), s.graph.order());
	}

	#[test]
	fn hit_test_finds_node_under_cursor() {
		let s = state();
		let idx = s.graph.node_index("#general").unwrap();
		let (x, y) = s.positions[idx];
		let (sx, sy) = (x * s.transform.k + s.transform.x, y * s.transform.k + s.transform.y);
		let hit = s.node_at_position(sx, sy).unwrap();
		let (hx, hy) = s.positions[hit];
		let radius = s.graph.nodes()[hit].attributes.size + HIT_SLOP;
		assert!(((hx - x).powi(2) + (hy - y).powi(2)).sqrt() < radius);

		assert_eq!(s.node_at_position(-1.0e6, -1.0e6), None);
	}

	#[test]
	fn hover_highlights_neighbors_in_both_directions() {
		let mut s = state();
		let bob = s.graph.node_index("@bob").unwrap();
		let alice = s.graph.node_index("@alice").unwrap();
		let general = s.graph.node_index("#general").unwrap();

		s.set_hover(Some(bob));
		assert!(s.has_active_highlight());
		assert!(s.is_highlighted(bob));
		assert!(s.is_highlighted(alice));
		assert!(!s.is_highlighted(general));

		s.set_hover(None);
		assert!(!s.has_active_highlight());
		assert!(!s.is_highlighted(alice));
	}

	#[test]
	fn stopped_layout_freezes_positions() {
		let mut s = state();
		s.set_running(false);
		let before = s.positions.clone();
		s.tick(0.016);
		assert_eq!(s.positions, before);

		s.set_running(true);
		s.tick(0.016);
		assert_ne!(s.positions, before);
	}

	#[test]
	fn zoom_is_clamped_and_keeps_anchor_point() {
		let mut s = state();
		let anchor = s.screen_to_graph(100.0, 50.0);
		s.zoom_at(100.0, 50.0, 1.1);
		let after = s.screen_to_graph(100.0, 50.0);
		assert!((anchor.0 - after.0).abs() < 1e-9);
		assert!((anchor.1 - after.1).abs() < 1e-9);

		for _ in 0..100 {
			s.zoom_at(0.0, 0.0, 0.5);
		}
		assert_eq!(s.transform.k, MIN_ZOOM);
	}
}
