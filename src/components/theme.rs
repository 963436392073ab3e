//! Light/dark theme with a persisted preference.

use leptos::prelude::*;
use log::{info, warn};

pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
	#[default]
	Light,
	Dark,
}

impl Theme {
	pub fn toggle(self) -> Self {
		match self {
			Theme::Light => Theme::Dark,
			Theme::Dark => Theme::Light,
		}
	}

	pub fn as_attr(self) -> &'static str {
		match self {
			Theme::Light => "light",
			Theme::Dark => "dark",
		}
	}

	pub fn from_attr(value: &str) -> Option<Self> {
		match value {
			"light" => Some(Theme::Light),
			"dark" => Some(Theme::Dark),
			_ => None,
		}
	}

	pub fn is_dark(self) -> bool {
		self == Theme::Dark
	}

	/// Glyph of the theme the toggle switches to.
	pub fn toggle_icon(self) -> &'static str {
		match self {
			Theme::Light => "🌙",
			Theme::Dark => "☀️",
		}
	}
}

/// A saved preference wins; otherwise follow the system setting.
pub fn resolve_initial(saved: Option<&str>, prefers_dark: bool) -> Theme {
	saved.and_then(Theme::from_attr).unwrap_or(if prefers_dark {
		Theme::Dark
	} else {
		Theme::Light
	})
}

fn local_storage() -> Option<web_sys::Storage> {
	web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn load_saved_theme() -> Option<String> {
	local_storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten())
}

fn save_theme(theme: Theme) {
	match local_storage() {
		Some(storage) => {
			if storage.set_item(THEME_STORAGE_KEY, theme.as_attr()).is_err() {
				warn!("could not persist theme preference");
			}
		}
		None => warn!("localStorage unavailable, theme not persisted"),
	}
}

fn system_prefers_dark() -> bool {
	web_sys::window()
		.and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
		.is_some_and(|m| m.matches())
}

fn apply_to_document(theme: Theme) {
	let Some(root) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.document_element())
	else {
		return;
	};
	let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
	let _ = root.set_attribute("data-theme", theme.as_attr());
}

/// Theme signal shared through context.
#[derive(Clone, Copy)]
pub struct ThemeContext {
	pub theme: RwSignal<Theme>,
}

impl ThemeContext {
	pub fn toggle(&self) {
		let next = self.theme.get_untracked().toggle();
		self.theme.set(next);
		save_theme(next);
		info!("theme switched to {}", next.as_attr());
	}
}

pub fn use_theme() -> ThemeContext {
	expect_context::<ThemeContext>()
}

/// Resolves the initial theme, keeps the document in sync and exposes [`ThemeContext`].
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
	let initial = resolve_initial(load_saved_theme().as_deref(), system_prefers_dark());
	let theme = RwSignal::new(initial);
	provide_context(ThemeContext { theme });

	Effect::new(move |_| apply_to_document(theme.get()));

	children()
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
	let ctx = use_theme();
	view! {
		<button
			class="theme-toggle"
			title="Toggle theme"
			on:click=move |_| ctx.toggle()
		>
			{move || ctx.theme.get().toggle_icon()}
		</button>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn saved_preference_wins_over_system() {
		assert_eq!(resolve_initial(Some("light"), true), Theme::Light);
		assert_eq!(resolve_initial(Some("dark"), false), Theme::Dark);
	}

	#[test]
	fn falls_back_to_system_preference() {
		assert_eq!(resolve_initial(None, true), Theme::Dark);
		assert_eq!(resolve_initial(Some("sepia"), false), Theme::Light);
	}

	#[test]
	fn toggle_round_trips_through_attr() {
		let dark = Theme::Light.toggle();
		assert_eq!(dark, Theme::Dark);
		assert_eq!(Theme::from_attr(dark.as_attr()), Some(Theme::Dark));
		assert_eq!(dark.toggle(), Theme::Light);
	}
}
