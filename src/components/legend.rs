use leptos::prelude::*;

use crate::graph::Category;

/// One entry per node category, with its palette swatch.
#[component]
pub fn Legend() -> impl IntoView {
	let entries = Category::ALL
		.into_iter()
		.map(|category| {
			view! {
				<li>
					<span style=format!("color: {};", category.color())>"█"</span>
					" "
					{category.name()}
				</li>
			}
		})
		.collect_view();

	view! {
		<div class="legend">
			<ul>{entries}</ul>
		</div>
	}
}
