use leptos::prelude::*;
use leptos_router::components::A;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<main class="not-found">
			<h1>"404"</h1>
			<p>"This page drifted out of orbit."</p>
			<A href="/portfolio" attr:class="button primary">"Back to the portfolio"</A>
		</main>
	}
}
