//! Directed mention graph with attribute bags on nodes and edges.

use std::collections::HashMap;

use super::category::Category;

/// Colour shared by every edge.
pub const EDGE_COLOR: &str = "#ccc";

/// Visual attributes of a node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeAttributes {
	/// Category derived from the identifier's sigil.
	pub category: Category,
	/// Display label, the identifier itself.
	pub label: String,
	/// Palette colour of the category.
	pub color: &'static str,
	/// Render radius.
	pub size: f64,
}

/// Attributes of a directed mention edge.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeAttributes {
	/// Raw mention count.
	pub weight: f64,
	/// Render width.
	pub size: f64,
	/// Stroke colour.
	pub color: &'static str,
}

/// A node and its identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	/// Identifier, unique within the graph.
	pub id: String,
	/// Attribute bag.
	pub attributes: NodeAttributes,
}

/// A directed edge between two node indices.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	/// Index of the mentioning node.
	pub source: usize,
	/// Index of the mentioned node.
	pub target: usize,
	/// Attribute bag.
	pub attributes: EdgeAttributes,
}

/// Directed graph keyed by identifier, at most one edge per ordered pair.
///
/// Nodes and edges keep insertion order, and are addressed by their index in
/// that order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MentionGraph {
	nodes: Vec<Node>,
	node_index: HashMap<String, usize>,
	edges: Vec<Edge>,
	edge_index: HashMap<(usize, usize), usize>,
	out_degrees: Vec<usize>,
	in_degrees: Vec<usize>,
}

impl MentionGraph {
	/// Create an empty graph.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of nodes.
	pub fn order(&self) -> usize {
		self.nodes.len()
	}

	/// Number of edges.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// True when the graph has no nodes.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Insert the node if missing, otherwise refresh its category, label and
	/// colour. The size is left untouched. Returns the node index.
	pub fn merge_node(&mut self, id: &str, category: Category) -> usize {
		if let Some(&idx) = self.node_index.get(id) {
			let attributes = &mut self.nodes[idx].attributes;
			attributes.category = category;
			attributes.label = id.to_owned();
			attributes.color = category.color();
			return idx;
		}

		let idx = self.nodes.len();
		self.nodes.push(Node {
			id: id.to_owned(),
			attributes: NodeAttributes {
				category,
				label: id.to_owned(),
				color: category.color(),
				size: 0.0,
			},
		});
		self.node_index.insert(id.to_owned(), idx);
		self.out_degrees.push(0);
		self.in_degrees.push(0);
		idx
	}

	/// Insert the edge `source -> target`, or overwrite the weight of an
	/// existing one. Returns the edge index.
	///
	/// # Panics
	///
	/// If either index is not a node of this graph.
	pub fn merge_edge(&mut self, source: usize, target: usize, weight: f64) -> usize {
		assert!(
			source < self.nodes.len() && target < self.nodes.len(),
			"edge endpoint out of bounds"
		);
		if let Some(&idx) = self.edge_index.get(&(source, target)) {
			let attributes = &mut self.edges[idx].attributes;
			attributes.weight = weight;
			attributes.size = weight;
			return idx;
		}

		let idx = self.edges.len();
		self.edges.push(Edge {
			source,
			target,
			attributes: EdgeAttributes {
				weight,
				size: weight,
				color: EDGE_COLOR,
			},
		});
		self.edge_index.insert((source, target), idx);
		self.out_degrees[source] += 1;
		self.in_degrees[target] += 1;
		idx
	}

	/// Index of the node with this identifier.
	pub fn node_index(&self, id: &str) -> Option<usize> {
		self.node_index.get(id).copied()
	}

	/// Node with this identifier.
	pub fn node(&self, id: &str) -> Option<&Node> {
		self.node_index(id).map(|idx| &self.nodes[idx])
	}

	/// Edge from `source` to `target`, by identifier.
	pub fn edge(&self, source: &str, target: &str) -> Option<&Edge> {
		let key = (self.node_index(source)?, self.node_index(target)?);
		self.edge_index.get(&key).map(|&idx| &self.edges[idx])
	}

	/// All nodes, in insertion order.
	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	/// Mutable access to node attribute bags.
	pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> {
		self.nodes.iter_mut()
	}

	/// All edges, in insertion order.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Mutable access to edge attribute bags.
	pub fn edges_mut(&mut self) -> impl Iterator<Item = &mut Edge> {
		self.edges.iter_mut()
	}

	/// Number of distinct outgoing edges of node `idx`.
	pub fn out_degree(&self, idx: usize) -> usize {
		self.out_degrees[idx]
	}

	/// Number of distinct incoming edges of node `idx`.
	pub fn in_degree(&self, idx: usize) -> usize {
		self.in_degrees[idx]
	}

	/// In-degree plus out-degree. A self-loop counts twice.
	pub fn degree(&self, idx: usize) -> usize {
		self.out_degrees[idx] + self.in_degrees[idx]
	}

	/// Indices of nodes sharing an edge with `idx`, in either direction.
	pub fn neighbors(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
		self.edges.iter().filter_map(move |edge| {
			if edge.source == idx {
				Some(edge.target)
			} else if edge.target == idx {
				Some(edge.source)
			} else {
				None
			}
		})
	}
}
