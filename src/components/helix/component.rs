use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;
use log::{debug, warn};
use web_sys::MouseEvent;

use super::geometry::{HelixInput, HelixPoint, Strand, helix_position, strand_points};
use super::state::RotationController;
use crate::components::tilt::client_point;
use crate::config::HelixConfig;
use crate::content::Skill;
use crate::motion::noise::depth_particles;

/// Skills drawn as base pairs of a slowly rotating double helix.
///
/// Dragging rotates the helix; auto-rotation resumes a few seconds after
/// the last drag, or immediately once the pointer leaves.
#[component]
pub fn DnaHelix(
	#[prop(into)] skills: Signal<Vec<Skill>>,
	#[prop(optional)] config: Option<HelixConfig>,
	#[prop(default = 500.0)] height: f64,
) -> impl IntoView {
	let config = config.unwrap_or_default();
	let tick = Duration::from_millis(config.tick_ms);
	let particles = depth_particles(config.particles);
	let controller = RwSignal::new(RotationController::new(config));
	let size = RwSignal::new((300.0, height));
	let count = Signal::derive(move || skills.with(Vec::len));
	let container_ref = NodeRef::<leptos::html::Div>::new();

	let measure = move || {
		if let Some(el) = container_ref.get_untracked() {
			size.set((el.offset_width() as f64, el.offset_height() as f64));
		}
	};
	Effect::new(move |_| {
		if container_ref.get().is_some() {
			measure();
		}
	});

	match set_interval_with_handle(
		move || {
			let now = js_sys::Date::now();
			controller.maybe_update(|c| c.tick(now));
		},
		tick,
	) {
		Ok(handle) => on_cleanup(move || handle.clear()),
		Err(e) => warn!("helix auto-rotation unavailable: {e:?}"),
	}

	let resize = window_event_listener(ev::resize, move |_| measure());
	// Releases outside the container still end the drag.
	let release = window_event_listener(ev::mouseup, move |_| {
		controller.maybe_update(|c| c.drag_end(js_sys::Date::now()));
	});
	on_cleanup(move || {
		resize.remove();
		release.remove();
		debug!("helix listeners removed");
	});

	let on_mousemove = move |ev: MouseEvent| {
		let Some(el) = container_ref.get_untracked() else {
			return;
		};
		let rect = el.get_bounding_client_rect();
		let (x, y) = client_point(&ev);
		let fraction = ((x - rect.left()) / rect.width(), (y - rect.top()) / rect.height());
		controller.update(|c| {
			c.pointer_move(fraction);
			c.drag_move((x, y), js_sys::Date::now());
		});
	};
	let on_mousedown = move |ev: MouseEvent| {
		ev.prevent_default();
		controller.update(|c| c.drag_start(client_point(&ev)));
	};
	let on_mouseup = move |_: MouseEvent| {
		controller.maybe_update(|c| c.drag_end(js_sys::Date::now()));
	};
	let on_mouseleave = move |_: MouseEvent| controller.update(RotationController::pointer_leave);

	let cursor = move || {
		if controller.with(RotationController::is_dragging) {
			"grabbing"
		} else {
			"grab"
		}
	};
	let rotation = move || {
		controller.with(|c| format!("rotateX({}deg) rotateY({}deg)", c.tilt, c.angle))
	};

	let strands = Strand::BOTH.into_iter().map(|strand| {
		let dots = move || {
			let width = size.get().0;
			controller
				.with(|c| strand_points(strand, c.angle, width, c.config()))
				.into_iter()
				.map(|p| {
					view! {
						<div
							class="helix-dot"
							style=format!(
								"left: calc(50% + {}px); top: {}%; transform: translateX(-50%) translateZ({}px); background: rgba(var(--primary-rgb), {});",
								p.x,
								p.top_pct,
								p.z,
								p.alpha,
							)
						/>
					}
				})
				.collect_view()
		};
		view! {
			<div class="helix-strand" style=format!("transform: rotateY({}deg);", strand.phase())>
				{dots}
			</div>
		}
	})
	.collect_view();

	let particles = particles
		.into_iter()
		.map(|p| {
			view! {
				<div
					class="helix-particle"
					style:width=format!("{}px", p.width)
					style:height=format!("{}px", p.width)
					style:opacity=p.scale.to_string()
					style:left=move || format!("{}px", p.x_seed * size.get().0)
					style:top=move || format!("{}px", p.y_seed * size.get().1)
				/>
			}
		})
		.collect_view();

	view! {
		<div
			node_ref=container_ref
			class="helix"
			style:height=format!("{height}px")
			style:cursor=cursor
			on:mousemove=on_mousemove
			on:mousedown=on_mousedown
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
		>
			<div class="helix-hint">"Drag to rotate in any direction"</div>
			<div class="helix-scene">
				<div class="helix-body" style:transform=rotation>
					<div class="helix-axis" />
					{strands}
					<For
						each=move || skills.get().into_iter().enumerate()
						key=|(i, skill)| (*i, skill.name.clone())
						children=move |(index, skill)| {
							view! {
								<BasePair index=index skill=skill count=count controller=controller size=size />
							}
						}
					/>
				</div>
			</div>
			<SkillDetail skills=skills controller=controller />
			{particles}
		</div>
	}
}

#[component]
fn BasePair(
	index: usize,
	skill: Skill,
	count: Signal<usize>,
	controller: RwSignal<RotationController>,
	size: RwSignal<(f64, f64)>,
) -> impl IntoView {
	let position = move |strand| {
		let (width, height) = size.get();
		let count = count.get();
		controller.with(|c| {
			let input = HelixInput {
				index,
				count,
				strand,
				angle: c.angle,
				width,
				height,
				pointer: c.pointer,
			};
			helix_position(&input, c.config())
		})
	};
	let left = Memo::new(move |_| position(Strand::Left));
	let right = Memo::new(move |_| position(Strand::Right));
	let active = Memo::new(move |_| controller.with(|c| c.active_skill == Some(index)));
	let node_size = controller.with_untracked(|c| c.config().node_size);

	let node = move |point: Memo<HelixPoint>, color: String| {
		let style = move || {
			let p = point.get();
			let diameter = (node_size * p.scale).max(1.0);
			let emphasis = if active.get() { 1.3 } else { 1.0 };
			format!(
				"left: {}px; top: {}px; width: {diameter}px; height: {diameter}px; opacity: {}; z-index: {}; \
				 background-color: {color}; \
				 transform: translateZ({}px) translate(-50%, -50%) rotateX({}deg) rotateY({}deg) scale({emphasis});",
				p.x, p.y, p.opacity, p.z_index, p.z, p.rotate_x, p.rotate_y,
			)
		};
		view! {
			<div
				class="helix-node"
				class:active=move || active.get()
				style=style
				on:click=move |ev: MouseEvent| {
					ev.stop_propagation();
					controller.update(|c| c.toggle_skill(index));
				}
			>
				<span>{index + 1}</span>
			</div>
		}
	};

	let color = skill.color;
	let rung_color = color.clone();
	let rung = move || {
		let (l, r) = (left.get(), right.get());
		let opacity = if active.get() { 1.0 } else { (l.opacity + r.opacity) / 2.0 };
		format!(
			"top: {}px; left: {}px; width: {}px; opacity: {opacity}; z-index: {}; transform: translateY(-50%) translateZ({}px); \
			 background: linear-gradient(to right, {rung_color}, rgba(var(--primary-rgb), 0.5), {rung_color});",
			(l.y + r.y) / 2.0,
			l.x.min(r.x),
			(r.x - l.x).abs(),
			((l.z + r.z) / 2.0 + 990.0).round() as i32,
			(l.z + r.z) / 2.0,
		)
	};

	view! {
		{node(left, color.clone())}
		{node(right, color)}
		<div class="helix-rung" class:active=move || active.get() style=rung />
	}
}

#[component]
fn SkillDetail(skills: Signal<Vec<Skill>>, controller: RwSignal<RotationController>) -> impl IntoView {
	move || {
		let index = controller.with(|c| c.active_skill)?;
		let skill = skills.with(|s| s.get(index).cloned())?;
		Some(view! {
			<div class="helix-detail">
				<div
					class="helix-detail-badge"
					style:background-color=skill.color.clone()
					style:box-shadow=format!("0 0 20px {}", skill.color)
				>
					{index + 1}
				</div>
				<h4>{skill.name}</h4>
				<div class="level-track">
					<div
						class="level-fill"
						style:background-color=skill.color
						style:width=format!("{}%", skill.level)
					/>
				</div>
				<div class="helix-detail-level">"Proficiency: " {skill.level} "%"</div>
				<button on:click=move |_| controller.update(RotationController::close_skill)>
					"Close"
				</button>
			</div>
		})
	}
}
