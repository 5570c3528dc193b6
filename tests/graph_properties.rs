//! Properties of graph construction that hold for any valid mentions map.

use std::collections::BTreeSet;

use mention_graph::graph::{
	Category, EDGE_SIZE_RANGE, MentionRecord, MentionsMap, NODE_SIZE_RANGE, build_graph,
	parse_snapshot,
};
use proptest::prelude::*;

fn identifier() -> impl Strategy<Value = String> {
	("[@#&%]", "[a-z]{1,3}").prop_map(|(sigil, name)| format!("{sigil}{name}"))
}

fn mentions_map() -> impl Strategy<Value = MentionsMap> {
	prop::collection::btree_map(
		identifier(),
		prop::collection::btree_map(identifier(), 0.0f64..50.0, 0..6),
		0..12,
	)
	.prop_map(|map| {
		map.into_iter()
			.map(|(source, mentions)| (source, MentionRecord { mentions }))
			.collect()
	})
}

proptest! {
	#[test]
	fn one_node_per_identifier(map in mentions_map()) {
		let build = build_graph(&map).unwrap();
		let expected: BTreeSet<&str> = map
			.iter()
			.flat_map(|(source, record)| {
				std::iter::once(source.as_str()).chain(record.mentions.keys().map(String::as_str))
			})
			.collect();
		let actual: BTreeSet<&str> = build.graph.nodes().iter().map(|n| n.id.as_str()).collect();

		prop_assert_eq!(build.graph.order(), expected.len());
		prop_assert_eq!(actual, expected);
	}

	#[test]
	fn edge_weights_match_records(map in mentions_map()) {
		let build = build_graph(&map).unwrap();
		let mention_count: usize = map.values().map(|r| r.mentions.len()).sum();
		prop_assert_eq!(build.graph.edge_count(), mention_count);

		for (source, record) in &map {
			for (target, &weight) in &record.mentions {
				let edge = build.graph.edge(source, target).unwrap();
				prop_assert_eq!(edge.attributes.weight, weight);
			}
		}
	}

	#[test]
	fn categories_follow_sigils(map in mentions_map()) {
		let build = build_graph(&map).unwrap();
		for node in build.graph.nodes() {
			prop_assert_eq!(Some(node.attributes.category), Category::from_sigil(node.id.chars().next().unwrap()));
			prop_assert_eq!(&node.attributes.label, &node.id);
			prop_assert_eq!(node.attributes.color, node.attributes.category.color());
		}
	}

	#[test]
	fn sizes_stay_in_range_and_are_monotonic(map in mentions_map()) {
		let build = build_graph(&map).unwrap();
		let graph = &build.graph;

		for (idx, node) in graph.nodes().iter().enumerate() {
			let size = node.attributes.size;
			prop_assert!(size.is_finite());
			prop_assert!((NODE_SIZE_RANGE.0..=NODE_SIZE_RANGE.1).contains(&size));
			prop_assert_eq!(size, build.node_scale.apply(graph.out_degree(idx) as f64));
		}
		for edge in graph.edges() {
			let size = edge.attributes.size;
			prop_assert!(size.is_finite());
			prop_assert!((EDGE_SIZE_RANGE.0..=EDGE_SIZE_RANGE.1).contains(&size));
		}

		let mut by_degree: Vec<(usize, f64)> = graph
			.nodes()
			.iter()
			.enumerate()
			.map(|(idx, node)| (graph.out_degree(idx), node.attributes.size))
			.collect();
		by_degree.sort_by_key(|&(degree, _)| degree);
		prop_assert!(by_degree.windows(2).all(|w| w[0].1 <= w[1].1));

		let mut by_weight: Vec<(f64, f64)> = graph
			.edges()
			.iter()
			.map(|edge| (edge.attributes.weight, edge.attributes.size))
			.collect();
		by_weight.sort_by(|a, b| a.0.total_cmp(&b.0));
		prop_assert!(by_weight.windows(2).all(|w| w[0].1 <= w[1].1));
	}

	#[test]
	fn building_is_deterministic(map in mentions_map()) {
		prop_assert_eq!(build_graph(&map).unwrap(), build_graph(&map).unwrap());
	}
}

#[test]
fn snapshot_example_from_json() {
	let map = parse_snapshot(
		r#"{"value": {
			"@A": {"mentions": {"@B": 3}, "@B": 3},
			"@C": {"mentions": {"@B": 1, "@A": 2}, "@B": 1, "@A": 2}
		}}"#,
	)
	.unwrap();
	let build = build_graph(&map).unwrap();

	assert_eq!(build.graph.order(), 3);
	assert_eq!(build.graph.edge_count(), 3);
	assert_eq!(build.stats.max_weight, Some(3.0));
	assert_eq!(build.stats.max_degree, 2);
	assert_eq!(build.graph.edge("@C", "@A").unwrap().attributes.weight, 2.0);
}

#[test]
fn empty_snapshot_builds_empty_graph() {
	let build = build_graph(&parse_snapshot(r#"{"value": {}}"#).unwrap()).unwrap();
	assert!(build.graph.is_empty());
	assert_eq!(build.graph.edge_count(), 0);
}
