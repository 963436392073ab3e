use leptos::prelude::*;

use crate::content::OWNER;

#[component]
pub fn Footer() -> impl IntoView {
	let year = js_sys::Date::new_0().get_full_year();
	view! {
		<footer class="footer">
			<div class="footer-inner">
				<div>
					<p class="footer-copy">{format!("© {year} {}. All rights reserved.", OWNER.name)}</p>
					<p class="footer-stack">"Built with Rust, Leptos and WebAssembly."</p>
				</div>
				<div class="footer-links">
					<a href=OWNER.github target="_blank" rel="noopener noreferrer" aria-label="GitHub profile">
						"GitHub"
					</a>
					<a href=format!("mailto:{}", OWNER.email) aria-label="Email">
						"Email"
					</a>
				</div>
			</div>
		</footer>
	}
}
