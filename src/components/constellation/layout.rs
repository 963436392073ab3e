//! Radial layout of categories on an ellipse with skills orbiting each category.

use std::collections::{HashMap, HashSet};
use std::f64::consts::TAU;

use crate::config::ConstellationConfig;
use crate::content::Category;
use crate::content::types::slug;
use crate::motion::round3;

use super::types::{Edge, Layout, LayoutError, Node, NodeKind};

/// Orbit offset for the `j`-th skill, cycling `[0, +v/2, -v/2]`.
pub fn orbit_variance(j: usize, variance: f64) -> f64 {
	match j % 3 {
		0 => 0.0,
		1 => variance / 2.0,
		_ => -variance / 2.0,
	}
}

/// Hands out unique ids, suffixing repeats with `-2`, `-3`, ...
///
/// A suffixed candidate that is already taken, e.g. by a category literally
/// named `Tools-2`, is skipped.
#[derive(Default)]
struct IdAllocator {
	issued: HashSet<String>,
	next_suffix: HashMap<String, usize>,
}

impl IdAllocator {
	fn allocate(&mut self, base: String) -> String {
		if self.issued.insert(base.clone()) {
			return base;
		}
		let suffix = self.next_suffix.entry(base.clone()).or_insert(2);
		loop {
			let candidate = format!("{base}-{suffix}");
			*suffix += 1;
			if self.issued.insert(candidate.clone()) {
				return candidate;
			}
		}
	}
}

/// Places every category and skill. Pure: identical input gives identical output.
pub fn compute_layout(
	categories: &[Category],
	width: f64,
	height: f64,
	config: &ConstellationConfig,
) -> Result<Layout, LayoutError> {
	if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
		return Err(LayoutError::InvalidDimensions { width, height });
	}

	let mut layout = Layout::default();
	let mut ids = IdAllocator::default();
	let (cx, cy) = (width / 2.0, height / 2.0);
	let (rx, ry) = (
		width * config.ellipse_x_factor,
		height * config.ellipse_y_factor,
	);
	let count = categories.len();

	for (i, category) in categories.iter().enumerate() {
		let angle = (i as f64 / count as f64) * TAU;
		let category_id = ids.allocate(category.id());
		let (cat_x, cat_y) = (round3(cx + rx * angle.cos()), round3(cy + ry * angle.sin()));

		layout.nodes.push(Node {
			id: category_id.clone(),
			kind: NodeKind::Category,
			name: category.name.clone(),
			x: cat_x,
			y: cat_y,
			radius: config.category_radius,
			color: category
				.color
				.clone()
				.unwrap_or_else(|| config.default_category_color.into()),
			parent_id: None,
		});

		let skill_count = category.skills.len();
		let category_slug = slug(&category.name, &['&', '.']);
		for (j, skill) in category.skills.iter().enumerate() {
			let angle = (j as f64 / skill_count as f64) * TAU;
			let orbit = config.orbit_base + orbit_variance(j, config.orbit_variance);
			let skill_id = ids.allocate(format!(
				"skill-{category_slug}-{}",
				slug(&skill.name, &['&', '.'])
			));
			let color = if skill.color.is_empty() {
				config.default_skill_color.to_string()
			} else {
				skill.color.clone()
			};

			layout.nodes.push(Node {
				id: skill_id.clone(),
				kind: NodeKind::Skill,
				name: skill.name.clone(),
				x: round3(cat_x + orbit * angle.cos()),
				y: round3(cat_y + orbit * angle.sin()),
				radius: config.skill_radius,
				color,
				parent_id: Some(category_id.clone()),
			});
			layout.edges.push(Edge {
				id: format!("edge-{category_id}-{skill_id}"),
				source: category_id.clone(),
				target: skill_id,
			});
		}
	}

	Ok(layout)
}

impl Layout {
	/// Adds a connector between two category nodes.
	pub fn link_categories(&mut self, a: &str, b: &str) -> Result<(), LayoutError> {
		for id in [a, b] {
			match self.node(id) {
				Some(node) if node.kind == NodeKind::Category => {}
				_ => return Err(LayoutError::UnknownNode(id.to_string())),
			}
		}
		self.edges.push(Edge {
			id: format!("edge-{a}-{b}"),
			source: a.to_string(),
			target: b.to_string(),
		});
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn languages() -> Vec<Category> {
		vec![Category::new("Languages", "", "").with_skill("TypeScript", 95, "#3b82f6")]
	}

	fn generated(skill_counts: &[usize]) -> Vec<Category> {
		skill_counts
			.iter()
			.enumerate()
			.map(|(i, &n)| {
				(0..n).fold(Category::new(&format!("Cat {i}"), "", ""), |c, j| {
					c.with_skill(&format!("Skill {j}"), 50, "#fff")
				})
			})
			.collect()
	}

	#[test]
	fn single_category_scenario() {
		let layout = compute_layout(&languages(), 800.0, 600.0, &ConstellationConfig::default())
			.unwrap();
		assert_eq!(layout.nodes.len(), 2);
		assert_eq!(layout.edges.len(), 1);

		let category = &layout.nodes[0];
		assert_eq!(category.kind, NodeKind::Category);
		assert_eq!((category.x, category.y), (720.0, 300.0));

		let skill = &layout.nodes[1];
		assert_eq!(skill.parent_id.as_deref(), Some(category.id.as_str()));
		assert_eq!((skill.x, skill.y), (795.0, 300.0));
		let orbit = ((skill.x - category.x).powi(2) + (skill.y - category.y).powi(2)).sqrt();
		assert!((orbit - 75.0).abs() < 1e-9);

		assert_eq!(layout.edges[0].source, category.id);
		assert_eq!(layout.edges[0].target, skill.id);
	}

	#[test]
	fn empty_input_is_not_an_error() {
		let layout = compute_layout(&[], 800.0, 600.0, &ConstellationConfig::default()).unwrap();
		assert!(layout.nodes.is_empty());
		assert!(layout.edges.is_empty());
	}

	#[test]
	fn category_without_skills_has_no_edges() {
		let categories = vec![Category::new("Empty", "", "")];
		let layout =
			compute_layout(&categories, 400.0, 300.0, &ConstellationConfig::default()).unwrap();
		assert_eq!(layout.nodes.len(), 1);
		assert!(layout.edges.is_empty());
	}

	#[test]
	fn rejects_non_positive_dimensions() {
		let config = ConstellationConfig::default();
		for (w, h) in [(0.0, 600.0), (800.0, -1.0), (f64::NAN, 10.0)] {
			assert!(matches!(
				compute_layout(&languages(), w, h, &config),
				Err(LayoutError::InvalidDimensions { .. })
			));
		}
	}

	#[test]
	fn orbit_variance_cycles_through_three_offsets() {
		let offsets: Vec<_> = (0..6).map(|j| orbit_variance(j, 25.0)).collect();
		assert_eq!(offsets, [0.0, 12.5, -12.5, 0.0, 12.5, -12.5]);
	}

	#[test]
	fn repeated_names_get_unique_ids() {
		let categories = vec![
			Category::new("Tools", "", "")
				.with_skill("Git", 1, "#fff")
				.with_skill("Git", 2, "#fff"),
			Category::new("Tools", "", ""),
		];
		let layout =
			compute_layout(&categories, 400.0, 300.0, &ConstellationConfig::default()).unwrap();
		let ids: Vec<_> = layout.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, ["cat-Tools", "skill-Tools-Git", "skill-Tools-Git-2", "cat-Tools-2"]);
	}

	#[test]
	fn suffixed_ids_never_shadow_literal_names() {
		let categories = vec![
			Category::new("Tools", "", ""),
			Category::new("Tools", "", ""),
			Category::new("Tools-2", "", ""),
			Category::new("Tools", "", ""),
		];
		let layout =
			compute_layout(&categories, 400.0, 300.0, &ConstellationConfig::default()).unwrap();
		let ids: Vec<_> = layout.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, ["cat-Tools", "cat-Tools-2", "cat-Tools-2-2", "cat-Tools-3"]);
	}

	#[test]
	fn category_links_require_existing_categories() {
		let mut layout = compute_layout(
			&generated(&[1, 1]),
			800.0,
			600.0,
			&ConstellationConfig::default(),
		)
		.unwrap();
		layout.link_categories("cat-Cat0", "cat-Cat1").unwrap();
		assert_eq!(layout.edges.len(), 3);
		assert_eq!(
			layout.link_categories("cat-Cat0", "skill-Cat0-Skill0"),
			Err(LayoutError::UnknownNode("skill-Cat0-Skill0".into()))
		);
	}

	proptest! {
		#[test]
		fn counts_ids_and_determinism(
			counts in prop::collection::vec(0usize..8, 0..8),
			width in 1.0f64..2000.0,
			height in 1.0f64..2000.0,
		) {
			let categories = generated(&counts);
			let config = ConstellationConfig::default();
			let layout = compute_layout(&categories, width, height, &config).unwrap();
			let total: usize = counts.iter().sum();

			let category_nodes = layout.nodes.iter().filter(|n| n.kind == NodeKind::Category).count();
			prop_assert_eq!(category_nodes, counts.len());
			prop_assert_eq!(layout.nodes.len() - category_nodes, total);
			prop_assert_eq!(layout.edges.len(), total);

			let mut ids: Vec<_> = layout.nodes.iter().map(|n| n.id.clone()).collect();
			ids.sort();
			ids.dedup();
			prop_assert_eq!(ids.len(), layout.nodes.len());

			for edge in &layout.edges {
				prop_assert!(layout.node(&edge.source).is_some());
				prop_assert!(layout.node(&edge.target).is_some());
			}
			for node in layout.nodes.iter().filter(|n| n.kind == NodeKind::Skill) {
				let parent = node.parent_id.as_deref().and_then(|p| layout.node(p));
				prop_assert!(matches!(parent, Some(p) if p.kind == NodeKind::Category));
			}

			for node in &layout.nodes {
				prop_assert_eq!(round3(node.x), node.x);
				prop_assert_eq!(round3(node.y), node.y);
			}

			let again = compute_layout(&categories, width, height, &config).unwrap();
			prop_assert_eq!(layout, again);
		}
	}
}
