//! Builds a sized mention graph from a [`MentionsMap`].

use super::category::Category;
use super::error::GraphError;
use super::input::MentionsMap;
use super::model::MentionGraph;
use super::scale::LinearScale;

/// Node radius range, mapped from out-degree.
pub const NODE_SIZE_RANGE: (f64, f64) = (2.0, 10.0);
/// Edge width range, mapped from weight.
pub const EDGE_SIZE_RANGE: (f64, f64) = (0.5, 5.0);

const MIN_DEGREE: f64 = 0.0;
const MIN_WEIGHT: f64 = 1.0;

/// Maxima observed while building.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GraphStats {
	/// Largest mention weight, `None` when there are no mentions.
	pub max_weight: Option<f64>,
	/// Largest out-degree of any source.
	pub max_degree: usize,
}

/// A finished graph and the scales used to size it.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphBuild {
	/// The graph with sizes written.
	pub graph: MentionGraph,
	/// Observed maxima.
	pub stats: GraphStats,
	/// Out-degree to node radius.
	pub node_scale: LinearScale,
	/// Weight to edge width.
	pub edge_scale: LinearScale,
}

/// Build the typed, sized graph for `mentions`.
///
/// Fails on the first identifier with no known category, or on a weight that
/// is not finite.
pub fn build_graph(mentions: &MentionsMap) -> Result<GraphBuild, GraphError> {
	let mut graph = MentionGraph::new();
	let mut stats = GraphStats::default();

	for (source, record) in mentions {
		let source_idx = graph.merge_node(source, Category::of(source)?);

		for (target, &weight) in &record.mentions {
			if !weight.is_finite() {
				return Err(GraphError::invalid_weight(source, target));
			}
			let target_idx = graph.merge_node(target, Category::of(target)?);
			graph.merge_edge(source_idx, target_idx, weight);

			if stats.max_weight.is_none_or(|max| weight > max) {
				stats.max_weight = Some(weight);
			}
		}

		stats.max_degree = stats.max_degree.max(record.mentions.len());
	}

	let node_scale = LinearScale::new((MIN_DEGREE, stats.max_degree as f64), NODE_SIZE_RANGE);
	let max_weight = stats.max_weight.map_or(MIN_WEIGHT, |max| max.max(MIN_WEIGHT));
	let edge_scale = LinearScale::new((MIN_WEIGHT, max_weight), EDGE_SIZE_RANGE);

	let out_degrees: Vec<usize> = (0..graph.order()).map(|idx| graph.out_degree(idx)).collect();
	for (node, degree) in graph.nodes_mut().zip(out_degrees) {
		node.attributes.size = node_scale.apply(degree as f64);
	}
	for edge in graph.edges_mut() {
		edge.attributes.size = edge_scale.apply(edge.attributes.weight);
	}

	Ok(GraphBuild {
		graph,
		stats,
		node_scale,
		edge_scale,
	})
}
