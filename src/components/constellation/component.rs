use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, MouseEvent};

use super::render::{self, Palette};
use super::state::ConstellationState;
use crate::components::theme::{Theme, ThemeContext};
use crate::config::ConstellationConfig;
use crate::content::Category;
use crate::motion::parallax::Bounds;

const FRAME_DT: f64 = 0.016;

type SharedState = Rc<RefCell<Option<ConstellationState>>>;
type SharedClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Animation frame loop and resize listener owned by one canvas.
#[derive(Clone, Default)]
struct CanvasLoop {
	animate: SharedClosure,
	resize: SharedClosure,
	frame: Rc<Cell<Option<i32>>>,
}

impl CanvasLoop {
	fn is_running(&self) -> bool {
		self.animate.borrow().is_some()
	}

	fn request_frame(&self) {
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Some(ref cb) = *self.animate.borrow() {
			self.frame
				.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		}
	}

	fn stop(&self) {
		if let Some(window) = web_sys::window() {
			if let Some(id) = self.frame.take() {
				let _ = window.cancel_animation_frame(id);
			}
			if let Some(ref cb) = *self.resize.borrow() {
				let _ =
					window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
		self.animate.borrow_mut().take();
		self.resize.borrow_mut().take();
		debug!("constellation loop stopped");
	}
}

fn container_size(container: &HtmlElement) -> (f64, f64) {
	let (w, h) = (container.client_width() as f64, container.client_height() as f64);
	(
		if w > 0.0 { w } else { 800.0 },
		if h > 0.0 { h } else { 600.0 },
	)
}

fn local_position(container: &HtmlElement, ev: &MouseEvent) -> ((f64, f64), Bounds) {
	let rect = container.get_bounding_client_rect();
	let bounds = Bounds::new(rect.left(), rect.top(), rect.width(), rect.height());
	let client = (ev.client_x() as f64, ev.client_y() as f64);
	((client.0 - bounds.left, client.1 - bounds.top), bounds)
}

/// Skill categories drawn as a hoverable, pointer-tilted constellation.
#[component]
pub fn SkillConstellation(
	#[prop(into)] categories: Signal<Vec<Category>>,
	#[prop(optional)] config: Option<ConstellationConfig>,
	#[prop(default = 600.0)] height: f64,
) -> impl IntoView {
	let config = config.unwrap_or_default();
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let canvas_loop = CanvasLoop::default();
	let theme = use_context::<ThemeContext>().map(|c| c.theme);
	let hovering = RwSignal::new(false);

	let teardown = StoredValue::new_local(canvas_loop.clone());
	on_cleanup(move || {
		teardown.try_with_value(CanvasLoop::stop);
	});

	let (state_init, loop_init) = (state.clone(), canvas_loop.clone());
	Effect::new(move |_| {
		let categories = categories.get();
		let (Some(container), Some(canvas)) = (container_ref.get(), canvas_ref.get()) else {
			return;
		};
		let container: HtmlElement = container.into();
		let canvas: HtmlCanvasElement = canvas.into();
		let (w, h) = container_size(&container);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		match ConstellationState::new(categories, w, h, config.clone()) {
			Ok(s) => *state_init.borrow_mut() = Some(s),
			Err(e) => {
				warn!("skill constellation disabled: {e}");
				return;
			}
		}
		if loop_init.is_running() {
			return;
		}

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("canvas 2d context unavailable");
			return;
		};

		let (state_resize, canvas_resize, container_resize) =
			(state_init.clone(), canvas.clone(), container.clone());
		*loop_init.resize.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = container_size(&container_resize);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				match s.resize(nw, nh) {
					Ok(()) => {
						canvas_resize.set_width(nw as u32);
						canvas_resize.set_height(nh as u32);
					}
					Err(e) => warn!("ignoring resize: {e}"),
				}
			}
		}));
		if let (Some(window), Some(cb)) = (web_sys::window(), loop_init.resize.borrow().as_ref()) {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, loop_anim) = (state_init.clone(), loop_init.clone());
		*loop_init.animate.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(FRAME_DT);
				let dark = theme.map(|t| t.get_untracked()) == Some(Theme::Dark);
				render::render(s, &ctx, &Palette::for_theme(dark));
				let _ = HtmlElement::style(&canvas)
					.set_property("transform", &s.tilt.current().css(1000.0));
			}
			loop_anim.request_frame();
		}));
		loop_init.request_frame();
	});

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(container) = container_ref.get() else {
			return;
		};
		let container: HtmlElement = container.into();
		let ((x, y), bounds) = local_position(&container, &ev);
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			let hovered = s.node_at_position(x, y);
			s.set_hover(hovered);
			if hovering.get_untracked() != hovered.is_some() {
				hovering.set(hovered.is_some());
			}
			s.pointer_move((ev.client_x() as f64, ev.client_y() as f64), &bounds);
		}
	};

	let state_ml = state;
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.pointer_leave();
		}
		hovering.set(false);
	};

	let cursor = move || if hovering.get() { "pointer" } else { "default" };

	view! {
		<div
			node_ref=container_ref
			class="constellation"
			style:height=format!("{height}px")
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
		>
			<canvas
				node_ref=canvas_ref
				class="constellation-canvas"
				style:cursor=cursor
			/>
		</div>
	}
}
