use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{ConstellationState, EdgeState, NodeState};

/// Theme-dependent stroke and text colors.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
	pub edge: &'static str,
	pub edge_related: &'static str,
	pub outline: &'static str,
	pub label: &'static str,
	pub label_halo: &'static str,
}

impl Palette {
	pub fn for_theme(dark: bool) -> Self {
		if dark {
			Self {
				edge: "rgba(226, 232, 240, 0.15)",
				edge_related: "rgba(129, 140, 248, 0.6)",
				outline: "rgba(226, 232, 240, 0.1)",
				label: "rgba(241, 245, 249, 0.9)",
				label_halo: "rgba(15, 23, 42, 0.7)",
			}
		} else {
			Self {
				edge: "rgba(15, 23, 42, 0.15)",
				edge_related: "rgba(79, 70, 229, 0.6)",
				outline: "rgba(15, 23, 42, 0.1)",
				label: "rgba(15, 23, 42, 0.9)",
				label_halo: "rgba(240, 240, 240, 0.7)",
			}
		}
	}
}

pub fn render(state: &ConstellationState, ctx: &CanvasRenderingContext2d, palette: &Palette) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	draw_edges(state, ctx, palette);
	draw_nodes(state, ctx, palette);
}

fn draw_edges(state: &ConstellationState, ctx: &CanvasRenderingContext2d, palette: &Palette) {
	let (dash, gap) = (6.0, 4.0);
	let dash_offset = -(state.flow_time * 20.0) % (dash + gap);
	let nodes = &state.layout.nodes;

	for (edge, edge_state) in state.layout.edges.iter().zip(&state.edge_states) {
		let (Some(src), Some(tgt)) = (
			nodes.iter().find(|n| n.id == edge.source),
			nodes.iter().find(|n| n.id == edge.target),
		) else {
			continue;
		};

		let (alpha, color, width) = match edge_state {
			EdgeState::Related => (0.6, palette.edge_related, 1.5),
			EdgeState::Dimmed => (0.05, palette.edge, 1.0),
			EdgeState::Default => (1.0, palette.edge, 1.0),
		};

		ctx.set_global_alpha(alpha);
		ctx.set_stroke_style_str(color);
		ctx.set_line_width(width);
		if *edge_state == EdgeState::Related {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(dash),
				&JsValue::from_f64(gap),
			));
			ctx.set_line_dash_offset(dash_offset);
		}
		ctx.begin_path();
		ctx.move_to(src.x, src.y);
		ctx.line_to(tgt.x, tgt.y);
		ctx.stroke();
		let _ = ctx.set_line_dash(&js_sys::Array::new());
	}
	ctx.set_global_alpha(1.0);
}

fn draw_nodes(state: &ConstellationState, ctx: &CanvasRenderingContext2d, palette: &Palette) {
	let nodes = &state.layout.nodes;

	for (i, node) in nodes.iter().enumerate() {
		let Some(anim) = state.anims.get(i) else {
			continue;
		};
		let radius = node.radius * anim.scale.value;
		let hovered = state.states.get(i) == Some(&NodeState::Hovered);

		ctx.set_global_alpha(anim.opacity.value.clamp(0.0, 1.0));
		if hovered {
			draw_glow(ctx, node.x, node.y, radius, &node.color);
		}

		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, radius, 0.0, TAU);
		ctx.set_fill_style_str(&node.color);
		ctx.fill();
		ctx.set_stroke_style_str(palette.outline);
		ctx.set_line_width(1.0);
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);

	// Label last so it sits above neighbouring nodes.
	if let Some((i, node)) = state.hovered.and_then(|i| nodes.get(i).map(|n| (i, n))) {
		let scale = state.anims.get(i).map_or(1.0, |a| a.scale.value);
		let y = node.y - node.radius * scale - 8.0;
		ctx.set_font("500 12px sans-serif");
		ctx.set_text_align("center");
		ctx.set_line_width(4.0);
		ctx.set_stroke_style_str(palette.label_halo);
		let _ = ctx.stroke_text(&node.name, node.x, y);
		ctx.set_fill_style_str(palette.label);
		let _ = ctx.fill_text(&node.name, node.x, y);
	}
}

fn draw_glow(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64, color: &str) {
	let Ok(gradient) = ctx.create_radial_gradient(x, y, radius * 0.5, x, y, radius + 8.0) else {
		return;
	};
	if gradient.add_color_stop(0.0, color).is_err()
		|| gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)").is_err()
	{
		return;
	}
	ctx.begin_path();
	let _ = ctx.arc(x, y, radius + 8.0, 0.0, TAU);
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill();
}
