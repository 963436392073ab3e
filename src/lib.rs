//! Leptos client-side portfolio: app wiring and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

mod components;
mod config;
mod content;
mod motion;
mod pages;

use crate::components::theme::ThemeProvider;
use crate::content::OWNER;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// Router for the portfolio page; `/` redirects and anything else is a 404.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />

		<Title text=format!("{} | {}", OWNER.name, OWNER.title) />

		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta name="description" content=OWNER.tagline />

		<ThemeProvider>
			<Router>
				<Routes fallback=|| view! { <NotFound /> }>
					<Route path=path!("/") view=|| view! { <Redirect path="/portfolio" /> } />
					<Route path=path!("/portfolio") view=Home />
				</Routes>
			</Router>
		</ThemeProvider>
	}
}
