use leptos::prelude::*;

/// Button label for the given layout state.
fn toggle_label(running: bool) -> &'static str {
	if running { "Stop layout" } else { "Start layout" }
}

/// Starts or stops the force layout by flipping `running`.
#[component]
pub fn LayoutToggle(running: RwSignal<bool>) -> impl IntoView {
	view! {
		<button class="layout-button" on:click=move |_| running.update(|r| *r = !*r)>
			{move || toggle_label(running.get())}
		</button>
	}
}
