//! Page-level scroll chrome: progress bar, section dots and a back-to-top button.

use leptos::ev;
use leptos::prelude::*;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

/// Fraction of the page scrolled, `0` when the page does not scroll.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
	let scrollable = scroll_height - client_height;
	if scrollable <= 0.0 || !scrollable.is_finite() || !scroll_top.is_finite() {
		return 0.0;
	}
	(scroll_top / scrollable).clamp(0.0, 1.0)
}

pub fn scroll_to_top_visible(scroll_y: f64, viewport_height: f64) -> bool {
	scroll_y > viewport_height * 0.2
}

/// Last section whose top has passed the middle of the viewport.
///
/// `offsets` holds each section's top, `None` for sections missing from the page.
pub fn active_section(offsets: &[Option<f64>], scroll_y: f64, viewport_height: f64) -> Option<usize> {
	offsets
		.iter()
		.enumerate()
		.rev()
		.find(|(_, top)| top.is_some_and(|top| scroll_y >= top - viewport_height / 2.0))
		.map(|(i, _)| i)
}

fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	chars
		.next()
		.map(|first| first.to_uppercase().chain(chars).collect())
		.unwrap_or_default()
}

fn section_element(id: &str) -> Option<HtmlElement> {
	web_sys::window()?
		.document()?
		.get_element_by_id(id)?
		.dyn_into::<HtmlElement>()
		.ok()
}

fn smooth_scroll(top: f64) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let options = ScrollToOptions::new();
	options.set_top(top);
	options.set_behavior(ScrollBehavior::Smooth);
	window.scroll_to_with_scroll_to_options(&options);
}

/// Smoothly scrolls the section with this id to the top of the viewport.
pub fn scroll_to_section(id: &str) {
	match section_element(id) {
		Some(el) => smooth_scroll(el.offset_top() as f64),
		None => debug!("no section #{id} to scroll to"),
	}
}

pub fn scroll_to_top() {
	smooth_scroll(0.0);
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct ScrollMetrics {
	scroll_y: f64,
	viewport_height: f64,
	scroll_height: f64,
	client_height: f64,
}

fn read_metrics() -> Option<ScrollMetrics> {
	let window = web_sys::window()?;
	let root = window.document()?.document_element()?;
	Some(ScrollMetrics {
		scroll_y: window.scroll_y().unwrap_or(0.0),
		viewport_height: window.inner_height().ok()?.as_f64()?,
		scroll_height: root.scroll_height() as f64,
		client_height: root.client_height() as f64,
	})
}

/// Fixed scroll widgets for a single-page layout with the given section anchors.
#[component]
pub fn ScrollChrome(sections: &'static [&'static str]) -> impl IntoView {
	let metrics = RwSignal::new(ScrollMetrics::default());
	let active = RwSignal::new(0usize);

	let refresh = move || {
		let Some(m) = read_metrics() else {
			return;
		};
		metrics.set(m);
		let offsets: Vec<Option<f64>> = sections
			.iter()
			.map(|id| section_element(id).map(|el| el.offset_top() as f64))
			.collect();
		if let Some(i) = active_section(&offsets, m.scroll_y, m.viewport_height) {
			if active.get_untracked() != i {
				active.set(i);
			}
		}
	};
	Effect::new(move |_| refresh());
	let listener = window_event_listener(ev::scroll, move |_| refresh());
	on_cleanup(move || listener.remove());

	let progress = move || {
		metrics.with(|m| scroll_progress(m.scroll_y, m.scroll_height, m.client_height))
	};
	let show_top = move || metrics.with(|m| scroll_to_top_visible(m.scroll_y, m.viewport_height));

	let dots = sections
		.iter()
		.enumerate()
		.map(|(i, &id)| {
			let title = capitalize(id);
			view! {
				<button
					class="section-dot"
					class:active=move || active.get() == i
					title=title
					on:click=move |_| scroll_to_section(id)
				/>
			}
		})
		.collect_view();

	view! {
		<div class="scroll-progress" style:transform=move || format!("scaleX({:.4})", progress()) />
		<nav class="section-indicator">{dots}</nav>
		<button
			class="scroll-top"
			class:visible=show_top
			aria-label="Scroll to top"
			on:click=move |_| scroll_to_top()
		>
			"↑"
		</button>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn progress_is_a_clamped_fraction() {
		assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
		assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
		assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 1.0);
	}

	#[test]
	fn section_titles_are_capitalized() {
		assert_eq!(capitalize("projects"), "Projects");
		assert_eq!(capitalize(""), "");
	}

	#[test]
	fn short_pages_have_no_progress() {
		assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
		assert_eq!(scroll_progress(10.0, 500.0, 800.0), 0.0);
	}

	#[test]
	fn back_to_top_appears_after_a_fifth_of_the_viewport() {
		assert!(!scroll_to_top_visible(160.0, 800.0));
		assert!(scroll_to_top_visible(161.0, 800.0));
	}

	#[test]
	fn active_section_is_the_last_one_past_mid_viewport() {
		let offsets = [Some(800.0), Some(1600.0), None, Some(3200.0)];
		assert_eq!(active_section(&offsets, 0.0, 800.0), None);
		assert_eq!(active_section(&offsets, 400.0, 800.0), Some(0));
		assert_eq!(active_section(&offsets, 1300.0, 800.0), Some(1));
		assert_eq!(active_section(&offsets, 2700.0, 800.0), Some(1));
		assert_eq!(active_section(&offsets, 2800.0, 800.0), Some(3));
	}
}
