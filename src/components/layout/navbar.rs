use leptos::prelude::*;

use super::scroll::scroll_to_section;
use crate::components::theme::ThemeToggle;
use crate::content::OWNER;

const LINKS: &[(&str, &str)] = &[
	("About", "about"),
	("Projects", "projects"),
	("Skills", "skills"),
	("Contact", "contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
	let links = LINKS
		.iter()
		.map(|&(label, id)| {
			view! {
				<a
					href=format!("#{id}")
					class="nav-link"
					on:click=move |ev| {
						ev.prevent_default();
						scroll_to_section(id);
					}
				>
					{label}
				</a>
			}
		})
		.collect_view();

	view! {
		<header class="navbar">
			<div class="navbar-inner">
				<a href="/portfolio" class="brand">
					<span class="brand-icon">"💻"</span>
					<span>{OWNER.name}</span>
				</a>
				<nav class="nav-links">
					<a href="/portfolio" class="nav-link">"Home"</a>
					{links}
				</nav>
				<ThemeToggle />
			</div>
		</header>
	}
}
