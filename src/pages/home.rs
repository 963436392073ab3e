use leptos::prelude::*;

use super::sections::{About, Contact, Hero, Projects, Skills};
use crate::components::layout::{Footer, Navbar, ScrollChrome};
use crate::content::SECTIONS;

/// Single-page portfolio with every section in order.
#[component]
pub fn Home() -> impl IntoView {
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
			<Navbar />
			<ScrollChrome sections=SECTIONS />
			<main class="page">
				<Hero />
				<About />
				<Projects />
				<Skills />
				<Contact />
			</main>
			<Footer />
		</ErrorBoundary>
	}
}
