use leptos::prelude::*;
use log::info;

use crate::components::force_graph::ForceGraphCanvas;
use crate::components::layout_toggle::LayoutToggle;
use crate::components::legend::Legend;
use crate::graph::{GraphError, MentionGraph, build_graph, parse_snapshot};

/// Mentions snapshot bundled with the app.
const SNAPSHOT: &str = include_str!("../../data/mentions.json");

fn load_graph(snapshot: &str) -> Result<MentionGraph, GraphError> {
	let mentions = parse_snapshot(snapshot)?;
	let build = build_graph(&mentions)?;
	info!(
		"Built mention graph: {} nodes, {} edges, max weight {:?}, max degree {}",
		build.graph.order(),
		build.graph.edge_count(),
		build.stats.max_weight,
		build.stats.max_degree,
	);
	Ok(build.graph)
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let running = RwSignal::new(true);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			{load_graph(SNAPSHOT)
				.map(|graph| {
					view! {
						<div class="fullscreen-graph">
							<ForceGraphCanvas graph=graph running=running fullscreen=true />
							<div class="graph-overlay">
								<h1>"Mentions"</h1>
								<p class="subtitle">"Scroll to zoom. Drag to pan. Hover a node to see its neighbours."</p>
								<LayoutToggle running=running />
								<Legend />
							</div>
						</div>
					}
				})}
		</ErrorBoundary>
	}
}
