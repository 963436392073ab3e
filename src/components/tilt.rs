//! Pointer-reactive wrappers: a tilting card and a magnetic link button.

use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::config::{ParallaxConfig, SpringConfig};
use crate::motion::parallax::{Bounds, MagnetSpring, TiltSpring};

const FRAME_DT: f64 = 1.0 / 60.0;

const MAGNET_SPRING: SpringConfig = SpringConfig {
	stiffness: 150.0,
	mass: 0.1,
	rest_delta: 0.01,
};

/// Spring-like state stepped once per animation frame.
pub trait Animated {
	fn advance(&mut self, dt: f64);
	fn settled(&self) -> bool;
}

impl Animated for TiltSpring {
	fn advance(&mut self, dt: f64) {
		self.step(dt);
	}

	fn settled(&self) -> bool {
		self.is_at_rest()
	}
}

impl Animated for MagnetSpring {
	fn advance(&mut self, dt: f64) {
		self.step(dt);
	}

	fn settled(&self) -> bool {
		self.is_at_rest()
	}
}

/// Steps `value` on every animation frame until it settles.
///
/// At most one loop runs per value; `running` tracks it.
pub fn drive<T>(value: RwSignal<T>, running: StoredValue<bool>)
where
	T: Animated + Send + Sync + 'static,
{
	if running.try_get_value().unwrap_or(true) {
		return;
	}
	running.set_value(true);
	next_frame(value, running);
}

fn next_frame<T>(value: RwSignal<T>, running: StoredValue<bool>)
where
	T: Animated + Send + Sync + 'static,
{
	request_animation_frame(move || {
		let settled = value.try_update(|v| {
			v.advance(FRAME_DT);
			v.settled()
		});
		if settled == Some(false) {
			next_frame(value, running);
		} else {
			running.try_update_value(|r| *r = false);
		}
	});
}

pub(crate) fn element_bounds(el: &web_sys::Element) -> Bounds {
	let rect = el.get_bounding_client_rect();
	Bounds::new(rect.left(), rect.top(), rect.width(), rect.height())
}

pub(crate) fn client_point(ev: &MouseEvent) -> (f64, f64) {
	(ev.client_x() as f64, ev.client_y() as f64)
}

/// Card that leans toward the pointer and eases back flat when it leaves.
#[component]
pub fn TiltCard(
	#[prop(optional)] max_tilt: Option<f64>,
	#[prop(optional, into)] class: String,
	children: Children,
) -> impl IntoView {
	let config = max_tilt.map_or_else(ParallaxConfig::default, ParallaxConfig::with_max_tilt);
	let tilt = RwSignal::new(TiltSpring::new(config));
	let running = StoredValue::new(false);
	let hovered = RwSignal::new(false);
	let card_ref = NodeRef::<leptos::html::Div>::new();

	let on_mousemove = move |ev: MouseEvent| {
		let Some(el) = card_ref.get_untracked() else {
			return;
		};
		let bounds = element_bounds(&el);
		tilt.update(|t| t.pointer_move(client_point(&ev), &bounds));
		drive(tilt, running);
	};
	let on_mouseleave = move |_: MouseEvent| {
		hovered.set(false);
		tilt.update(TiltSpring::pointer_leave);
		drive(tilt, running);
	};

	let transform = move || tilt.with(|t| t.current().css(1000.0));
	let glare = move || {
		tilt.with(|t| {
			let c = t.current();
			format!("{}% {}%", 50.0 + c.rotate_y * 2.0, 50.0 + c.rotate_x * 2.0)
		})
	};

	view! {
		<div
			node_ref=card_ref
			class=format!("tilt-card {class}")
			class:hovered=move || hovered.get()
			style:transform=transform
			on:mouseenter=move |_| hovered.set(true)
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
		>
			<div class="tilt-card-glare" style:background-position=glare />
			<div class="tilt-card-content">{children()}</div>
		</div>
	}
}

/// `target` for a link: same tab for mail and phone links, new tab otherwise.
pub fn link_target(href: &str) -> &'static str {
	if href.starts_with("mailto:") || href.starts_with("tel:") {
		"_self"
	} else {
		"_blank"
	}
}

/// Link that drifts toward the pointer while hovered.
#[component]
pub fn MagneticButton(
	#[prop(into)] href: String,
	#[prop(optional)] icon: Option<&'static str>,
	#[prop(optional, into)] class: String,
	children: Children,
) -> impl IntoView {
	let magnet = RwSignal::new(MagnetSpring::new(0.3, MAGNET_SPRING));
	let running = StoredValue::new(false);
	let hovered = RwSignal::new(false);
	let button_ref = NodeRef::<leptos::html::A>::new();
	let target = link_target(&href);

	let on_mousemove = move |ev: MouseEvent| {
		let Some(el) = button_ref.get_untracked() else {
			return;
		};
		let bounds = element_bounds(&el);
		magnet.update(|m| m.pointer_move(client_point(&ev), &bounds));
		drive(magnet, running);
	};
	let on_mouseleave = move |_: MouseEvent| {
		hovered.set(false);
		magnet.update(MagnetSpring::pointer_leave);
		drive(magnet, running);
	};
	let transform = move || {
		magnet.with(|m| {
			let (x, y) = m.offset();
			format!("translate({x:.2}px, {y:.2}px)")
		})
	};

	view! {
		<a
			node_ref=button_ref
			href=href
			target=target
			rel="noopener noreferrer"
			class=format!("magnetic-button {class}")
			class:hovered=move || hovered.get()
			style:transform=transform
			on:mouseenter=move |_| hovered.set(true)
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
		>
			{icon.map(|i| view! { <span class="magnetic-icon">{i}</span> })}
			<span>{children()}</span>
		</a>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn mail_and_phone_links_stay_in_the_tab() {
		assert_eq!(link_target("mailto:hi@example.com"), "_self");
		assert_eq!(link_target("tel:+1555"), "_self");
		assert_eq!(link_target("https://github.com/example"), "_blank");
	}

	#[test]
	fn animated_springs_report_settling() {
		let mut tilt = TiltSpring::new(ParallaxConfig::default());
		assert!(tilt.settled());
		tilt.pointer_move((10.0, 10.0), &Bounds::new(0.0, 0.0, 100.0, 100.0));
		assert!(!tilt.settled());
		for _ in 0..600 {
			tilt.advance(FRAME_DT);
		}
		assert!(tilt.settled());
	}
}
