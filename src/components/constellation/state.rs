use log::debug;

use crate::config::{ConstellationConfig, ParallaxConfig, SpringConfig};
use crate::content::Category;
use crate::motion::parallax::{Bounds, TiltSpring};
use crate::motion::spring::Spring;

use super::layout::compute_layout;
use super::types::{Edge, Layout, LayoutError, Node, NodeKind};

/// Extra pick distance around a node, in canvas pixels.
pub const HIT_PADDING: f64 = 4.0;

const NODE_SPRING: SpringConfig = SpringConfig {
	stiffness: 300.0,
	mass: 1.0,
	rest_delta: 0.001,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeState {
	Default,
	Hovered,
	Related,
	Dimmed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeState {
	Default,
	Related,
	Dimmed,
}

/// Target appearance of a node in a given state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeVisual {
	pub scale: f64,
	pub opacity: f64,
	pub glow: bool,
}

impl NodeState {
	pub fn visual(self, kind: NodeKind) -> NodeVisual {
		let category = kind == NodeKind::Category;
		match self {
			Self::Hovered => NodeVisual {
				scale: if category { 1.2 } else { 1.4 },
				opacity: 1.0,
				glow: true,
			},
			Self::Related => NodeVisual {
				scale: if category { 1.05 } else { 1.15 },
				opacity: 1.0,
				glow: false,
			},
			Self::Dimmed => NodeVisual {
				scale: 0.8,
				opacity: 0.4,
				glow: false,
			},
			Self::Default => NodeVisual {
				scale: 1.0,
				opacity: 1.0,
				glow: false,
			},
		}
	}
}

/// State of `node` while `hovered` has focus.
pub fn node_state(nodes: &[Node], hovered: Option<&str>, node: &Node) -> NodeState {
	let Some(hovered_id) = hovered else {
		return NodeState::Default;
	};
	if node.id == hovered_id {
		return NodeState::Hovered;
	}
	let Some(focus) = nodes.iter().find(|n| n.id == hovered_id) else {
		return NodeState::Dimmed;
	};
	let related = match focus.kind {
		NodeKind::Category => node.parent_id.as_deref() == Some(hovered_id),
		NodeKind::Skill => focus.parent_id.as_deref() == Some(node.id.as_str()),
	};
	if related { NodeState::Related } else { NodeState::Dimmed }
}

/// States of every node, in layout order.
pub fn node_states(nodes: &[Node], hovered: Option<&str>) -> Vec<NodeState> {
	nodes.iter().map(|n| node_state(nodes, hovered, n)).collect()
}

pub fn edge_state(nodes: &[Node], hovered: Option<&str>, edge: &Edge) -> EdgeState {
	if hovered.is_none() {
		return EdgeState::Default;
	}
	let state_of = |id: &str| {
		nodes
			.iter()
			.find(|n| n.id == id)
			.map(|n| node_state(nodes, hovered, n))
			.unwrap_or(NodeState::Dimmed)
	};
	let (source, target) = (state_of(&edge.source), state_of(&edge.target));
	let touches_focus = source == NodeState::Hovered || target == NodeState::Hovered;
	if touches_focus || (source == NodeState::Related && target == NodeState::Related) {
		EdgeState::Related
	} else {
		EdgeState::Dimmed
	}
}

/// Animated scale and opacity of one node.
#[derive(Clone, Copy, Debug)]
pub struct NodeAnim {
	pub scale: Spring,
	pub opacity: Spring,
}

impl NodeAnim {
	fn at_rest() -> Self {
		Self {
			scale: Spring::new(1.0, NODE_SPRING),
			opacity: Spring::new(1.0, NODE_SPRING),
		}
	}
}

pub struct ConstellationState {
	pub layout: Layout,
	pub hovered: Option<usize>,
	pub states: Vec<NodeState>,
	pub edge_states: Vec<EdgeState>,
	pub anims: Vec<NodeAnim>,
	pub tilt: TiltSpring,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
	categories: Vec<Category>,
	config: ConstellationConfig,
}

impl ConstellationState {
	pub fn new(
		categories: Vec<Category>,
		width: f64,
		height: f64,
		config: ConstellationConfig,
	) -> Result<Self, LayoutError> {
		let layout = compute_layout(&categories, width, height, &config)?;
		debug!(
			"constellation layout: {} nodes, {} edges",
			layout.nodes.len(),
			layout.edges.len()
		);
		let tilt = TiltSpring::new(ParallaxConfig {
			max_tilt: config.max_tilt,
			spring: SpringConfig {
				stiffness: 50.0,
				mass: 0.5,
				rest_delta: 0.001,
			},
		});
		let mut state = Self {
			anims: vec![NodeAnim::at_rest(); layout.nodes.len()],
			layout,
			hovered: None,
			states: Vec::new(),
			edge_states: Vec::new(),
			tilt,
			width,
			height,
			flow_time: 0.0,
			categories,
			config,
		};
		state.refresh_states();
		Ok(state)
	}

	/// Recomputes the layout for new dimensions. Hover focus is dropped.
	pub fn resize(&mut self, width: f64, height: f64) -> Result<(), LayoutError> {
		if width == self.width && height == self.height {
			return Ok(());
		}
		self.layout = compute_layout(&self.categories, width, height, &self.config)?;
		self.width = width;
		self.height = height;
		self.hovered = None;
		self.anims = vec![NodeAnim::at_rest(); self.layout.nodes.len()];
		self.refresh_states();
		Ok(())
	}

	pub fn hovered_id(&self) -> Option<&str> {
		self.hovered
			.and_then(|i| self.layout.nodes.get(i))
			.map(|n| n.id.as_str())
	}

	/// Topmost node under a canvas position, taking the drawn scale into account.
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<usize> {
		self.layout
			.nodes
			.iter()
			.enumerate()
			.rev()
			.find(|(i, node)| {
				let scale = self.anims.get(*i).map_or(1.0, |a| a.scale.value);
				let (dx, dy) = (node.x - x, node.y - y);
				(dx * dx + dy * dy).sqrt() <= node.radius * scale + HIT_PADDING
			})
			.map(|(i, _)| i)
	}

	pub fn set_hover(&mut self, node: Option<usize>) {
		if self.hovered == node {
			return;
		}
		self.hovered = node;
		self.refresh_states();
	}

	pub fn pointer_move(&mut self, client: (f64, f64), bounds: &Bounds) {
		self.tilt.pointer_move(client, bounds);
	}

	pub fn pointer_leave(&mut self) {
		self.set_hover(None);
		self.tilt.pointer_leave();
	}

	pub fn tick(&mut self, dt: f64) {
		self.flow_time += dt;
		self.tilt.step(dt);
		for anim in &mut self.anims {
			anim.scale.step(dt);
			anim.opacity.step(dt);
		}
	}

	fn refresh_states(&mut self) {
		let hovered = self
			.hovered
			.and_then(|i| self.layout.nodes.get(i))
			.map(|n| n.id.clone());
		let nodes = &self.layout.nodes;
		self.states = node_states(nodes, hovered.as_deref());
		self.edge_states = self
			.layout
			.edges
			.iter()
			.map(|e| edge_state(nodes, hovered.as_deref(), e))
			.collect();
		for ((anim, state), node) in self.anims.iter_mut().zip(&self.states).zip(nodes) {
			let visual = state.visual(node.kind);
			anim.scale.set_target(visual.scale);
			anim.opacity.set_target(visual.opacity);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn state() -> ConstellationState {
		let categories = vec![
			Category::new("Languages", "", "")
				.with_skill("Rust", 90, "#f00")
				.with_skill("Go", 80, "#0f0"),
			Category::new("Tools", "", "").with_skill("Git", 85, "#00f"),
		];
		ConstellationState::new(categories, 800.0, 600.0, ConstellationConfig::default()).unwrap()
	}

	#[test]
	fn no_focus_means_default_everywhere() {
		let s = state();
		assert!(s.states.iter().all(|&st| st == NodeState::Default));
		assert!(s.edge_states.iter().all(|&st| st == EdgeState::Default));
	}

	#[test]
	fn hovering_a_category_relates_its_skills_and_dims_the_rest() {
		let mut s = state();
		let languages = s.layout.index_of("cat-Languages").unwrap();
		s.set_hover(Some(languages));

		let by_id = |id: &str| s.states[s.layout.index_of(id).unwrap()];
		assert_eq!(by_id("cat-Languages"), NodeState::Hovered);
		assert_eq!(by_id("skill-Languages-Rust"), NodeState::Related);
		assert_eq!(by_id("skill-Languages-Go"), NodeState::Related);
		assert_eq!(by_id("cat-Tools"), NodeState::Dimmed);
		assert_eq!(by_id("skill-Tools-Git"), NodeState::Dimmed);

		assert_eq!(
			s.edge_states,
			[EdgeState::Related, EdgeState::Related, EdgeState::Dimmed]
		);
	}

	#[test]
	fn hovering_a_skill_relates_only_its_parent() {
		let mut s = state();
		let rust = s.layout.index_of("skill-Languages-Rust").unwrap();
		s.set_hover(Some(rust));

		let by_id = |id: &str| s.states[s.layout.index_of(id).unwrap()];
		assert_eq!(by_id("skill-Languages-Rust"), NodeState::Hovered);
		assert_eq!(by_id("cat-Languages"), NodeState::Related);
		assert_eq!(by_id("skill-Languages-Go"), NodeState::Dimmed);
		assert_eq!(by_id("cat-Tools"), NodeState::Dimmed);
	}

	#[test]
	fn unknown_focus_dims_everything() {
		let s = state();
		let states = node_states(&s.layout.nodes, Some("missing"));
		assert!(states.iter().all(|&st| st == NodeState::Dimmed));
	}

	#[test]
	fn hit_test_finds_nodes_and_misses_background() {
		let s = state();
		let category = &s.layout.nodes[0];
		assert_eq!(s.node_at_position(category.x + 5.0, category.y), Some(0));
		assert_eq!(s.node_at_position(400.0, 300.0), None);
	}

	#[test]
	fn node_visuals_ease_toward_their_state() {
		let mut s = state();
		s.set_hover(Some(0));
		s.tick(1.0 / 60.0);
		let dimmed = s.layout.index_of("cat-Tools").unwrap();
		let opacity = s.anims[dimmed].opacity.value;
		assert!(opacity < 1.0 && opacity > 0.4);

		for _ in 0..300 {
			s.tick(1.0 / 60.0);
		}
		assert_eq!(s.anims[dimmed].opacity.value, 0.4);
		assert_eq!(s.anims[0].scale.value, 1.2);

		s.pointer_leave();
		for _ in 0..300 {
			s.tick(1.0 / 60.0);
		}
		assert_eq!(s.anims[dimmed].opacity.value, 1.0);
	}

	#[test]
	fn resize_recomputes_and_rejects_bad_dimensions() {
		let mut s = state();
		s.resize(400.0, 300.0).unwrap();
		assert_eq!(s.layout.nodes[0].x, 360.0);
		assert!(s.resize(0.0, 300.0).is_err());
		assert_eq!(s.width, 400.0);
	}
}
