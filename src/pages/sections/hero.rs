use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;
use log::warn;

use crate::components::layout::scroll_to_section;
use crate::components::terminal::{Profile, TerminalCard};
use crate::content::{HERO_PHRASES, OWNER, skill_categories, top_skills};
use crate::motion::map_range;
use crate::motion::noise::particle_field;

const PHRASE_INTERVAL: Duration = Duration::from_secs(5);
const TERMINAL_SKILLS: usize = 8;

/// Pixel offsets of the hero layers for a pointer position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeroOffsets {
	pub heading: (f64, f64),
	pub subtitle: (f64, f64),
	pub card: (f64, f64),
}

impl HeroOffsets {
	/// Deeper layers move further: heading ±10px, subtitle ±5px, card ±20px.
	pub fn for_pointer((x, y): (f64, f64), (width, height): (f64, f64)) -> Self {
		let layer = |reach: f64| {
			(
				map_range(x, (0.0, width), (-reach, reach)),
				map_range(y, (0.0, height), (-reach, reach)),
			)
		};
		Self {
			heading: layer(10.0),
			subtitle: layer(5.0),
			card: layer(20.0),
		}
	}
}

fn translate((x, y): (f64, f64)) -> String {
	format!("translate({x:.2}px, {y:.2}px)")
}

fn viewport() -> (f64, f64) {
	let Some(window) = web_sys::window() else {
		return (1000.0, 1000.0);
	};
	let dim = |v: Result<wasm_bindgen::JsValue, _>| v.ok().and_then(|v| v.as_f64()).unwrap_or(1000.0);
	(dim(window.inner_width()), dim(window.inner_height()))
}

/// Heading whose letters fade in one after another.
#[component]
fn AnimatedWord(#[prop(into)] text: String) -> impl IntoView {
	text.chars()
		.enumerate()
		.map(|(i, c)| {
			let style = format!("animation-delay: {:.2}s", 0.04 * i as f64);
			view! {
				<span class="hero-letter" class:space={c == ' '} style=style>
					{c.to_string()}
				</span>
			}
		})
		.collect_view()
}

#[component]
pub fn Hero() -> impl IntoView {
	let phrase = RwSignal::new(0usize);
	let offsets = RwSignal::new(HeroOffsets::default());

	match set_interval_with_handle(
		move || phrase.update(|p| *p = (*p + 1) % HERO_PHRASES.len()),
		PHRASE_INTERVAL,
	) {
		Ok(handle) => on_cleanup(move || handle.clear()),
		Err(e) => warn!("hero phrase rotation unavailable: {e:?}"),
	}

	let listener = window_event_listener(ev::mousemove, move |ev| {
		let pointer = (ev.client_x() as f64, ev.client_y() as f64);
		offsets.set(HeroOffsets::for_pointer(pointer, viewport()));
	});
	on_cleanup(move || listener.remove());

	let profile = Profile::new(
		&OWNER,
		top_skills(&skill_categories(), TERMINAL_SKILLS)
			.into_iter()
			.map(|s| s.name)
			.collect(),
	);

	let particles = particle_field(50, 1.0, 4.0)
		.into_iter()
		.map(|p| {
			let style = format!(
				"left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; \
				 animation-duration: {:.1}s; animation-delay: {:.1}s; \
				 --drift-x: {:.1}px; --drift-y: {:.1}px",
				p.x, p.y, p.size, p.size, p.duration, p.delay, p.drift_x, p.drift_y
			);
			view! { <div class="hero-particle" style=style /> }
		})
		.collect_view();

	view! {
		<section id="top" class="hero">
			<div class="hero-particles">{particles}</div>
			<div class="hero-inner">
				<div class="hero-copy">
					<h1
						class="hero-heading"
						style:transform=move || offsets.with(|o| translate(o.heading))
					>
						<span class="hero-greeting">"Hi, I'm "</span>
						<AnimatedWord text=OWNER.name />
					</h1>
					<p
						class="hero-phrase"
						style:transform=move || offsets.with(|o| translate(o.subtitle))
					>
						{move || HERO_PHRASES.get(phrase.get()).copied().unwrap_or_default()}
					</p>
					<p class="hero-tagline">{OWNER.tagline}</p>
					<div class="hero-actions">
						<button class="button primary" on:click=move |_| scroll_to_section("projects")>
							"View my work"
						</button>
						<button class="button ghost" on:click=move |_| scroll_to_section("contact")>
							"Get in touch"
						</button>
					</div>
				</div>
				<div
					class="hero-terminal"
					style:transform=move || offsets.with(|o| translate(o.card))
				>
					<TerminalCard profile=profile />
				</div>
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn centered_pointer_leaves_layers_in_place() {
		let o = HeroOffsets::for_pointer((500.0, 400.0), (1000.0, 800.0));
		assert_eq!(o, HeroOffsets::default());
	}

	#[test]
	fn corner_pointer_reaches_each_layer_limit() {
		let o = HeroOffsets::for_pointer((0.0, 800.0), (1000.0, 800.0));
		assert_eq!(o.heading, (-10.0, 10.0));
		assert_eq!(o.subtitle, (-5.0, 5.0));
		assert_eq!(o.card, (-20.0, 20.0));
	}

	#[test]
	fn pointer_outside_the_window_is_clamped() {
		let o = HeroOffsets::for_pointer((5000.0, -300.0), (1000.0, 800.0));
		assert_eq!(o.card, (20.0, -20.0));
	}
}
