//! Positions of skill nodes on a rotating double helix.
//!
//! Everything here is a pure function of its inputs so that a frame can be
//! recomputed from the rotation angle alone.

use crate::config::HelixConfig;
use crate::motion::{clamp01_or, round3};

/// One of the two counter-phased strands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strand {
	Left,
	Right,
}

impl Strand {
	pub const BOTH: [Strand; 2] = [Strand::Left, Strand::Right];

	/// Phase shift of the strand in degrees.
	pub fn phase(self) -> f64 {
		match self {
			Strand::Left => 0.0,
			Strand::Right => 180.0,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HelixInput {
	pub index: usize,
	pub count: usize,
	pub strand: Strand,
	/// Current rotation in degrees.
	pub angle: f64,
	pub width: f64,
	pub height: f64,
	/// Pointer position relative to the container center, each axis in `[-0.5, 0.5]`.
	pub pointer: (f64, f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HelixPoint {
	pub x: f64,
	pub y: f64,
	pub z: f64,
	pub scale: f64,
	pub opacity: f64,
	pub rotate_x: f64,
	pub rotate_y: f64,
	pub z_index: i32,
}

pub fn helix_radius(width: f64, config: &HelixConfig) -> f64 {
	(width * config.radius_factor).max(config.min_radius)
}

pub fn helix_position(input: &HelixInput, config: &HelixConfig) -> HelixPoint {
	let count = input.count.max(1) as f64;
	let angle_step = 360.0 / count;
	let node_angle = (input.index as f64 * angle_step + input.angle) % 360.0;
	let radians = (node_angle + input.strand.phase()).to_radians();

	let radius = helix_radius(input.width, config);
	let x = radians.sin() * radius + input.width / 2.0;
	let z = radians.cos() * radius;
	let y = config.vertical_margin + input.index as f64 * (input.height / (count + 1.0));

	let depth = (z + radius) / (2.0 * radius);
	let scale = clamp01_or(depth, 0.5);
	let opacity = clamp01_or(depth * 0.8 + 0.2, 0.5);

	let (px, py) = input.pointer;
	HelixPoint {
		x,
		y,
		z,
		scale,
		opacity,
		rotate_x: py * config.pointer_bias,
		rotate_y: px * config.pointer_bias,
		z_index: if z.is_finite() {
			(z + 1000.0).round() as i32
		} else {
			1000
		},
	}
}

/// A backbone dot of one strand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrandPoint {
	pub x: f64,
	pub z: f64,
	/// Vertical position as a percentage of the container height.
	pub top_pct: f64,
	pub alpha: f64,
}

pub fn strand_points(strand: Strand, angle: f64, width: f64, config: &HelixConfig) -> Vec<StrandPoint> {
	let total = config.strand_points.max(1);
	(0..total)
		.map(|k| {
			let radians = (strand.phase() + angle + k as f64 * 12.0).to_radians();
			StrandPoint {
				x: round3(radians.sin() * width * config.radius_factor),
				z: round3(radians.cos() * width * 0.08),
				top_pct: (k as f64 / total as f64 * 100.0 * 100.0).round() / 100.0,
				alpha: 0.2 + (k % 5) as f64 * 0.1,
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	fn input(index: usize, count: usize, strand: Strand, angle: f64, width: f64) -> HelixInput {
		HelixInput {
			index,
			count,
			strand,
			angle,
			width,
			height: 500.0,
			pointer: (0.0, 0.0),
		}
	}

	#[test]
	fn first_left_node_faces_the_viewer() {
		let p = helix_position(&input(0, 4, Strand::Left, 0.0, 400.0), &HelixConfig::default());
		assert!((p.x - 200.0).abs() < 1e-9);
		assert!((p.z - 72.0).abs() < 1e-9);
		assert_eq!(p.y, 80.0);
		assert_eq!(p.scale, 1.0);
		assert_eq!(p.opacity, 1.0);
		assert_eq!(p.z_index, 1072);
	}

	#[test]
	fn strands_are_mirrored() {
		let config = HelixConfig::default();
		let left = helix_position(&input(1, 5, Strand::Left, 33.0, 400.0), &config);
		let right = helix_position(&input(1, 5, Strand::Right, 33.0, 400.0), &config);
		assert!((left.z + right.z).abs() < 1e-9);
		assert!((left.x - 200.0 + right.x - 200.0).abs() < 1e-9);
		assert!((left.scale + right.scale - 1.0).abs() < 1e-9);
	}

	#[test]
	fn narrow_container_keeps_minimum_radius() {
		let config = HelixConfig::default();
		assert_eq!(helix_radius(0.0, &config), 20.0);
		let p = helix_position(&input(0, 3, Strand::Left, 90.0, 0.0), &config);
		assert!((p.x - 20.0).abs() < 1e-9);
		assert!(p.scale.is_finite() && p.opacity.is_finite());
	}

	#[test]
	fn zero_skills_is_treated_as_one() {
		let p = helix_position(&input(0, 0, Strand::Left, 0.0, 300.0), &HelixConfig::default());
		assert_eq!(p.y, 80.0);
		assert!(p.x.is_finite());
	}

	#[test]
	fn non_finite_geometry_falls_back_to_half() {
		let config = HelixConfig {
			min_radius: 0.0,
			..HelixConfig::default()
		};
		let p = helix_position(&input(0, 2, Strand::Left, 0.0, 0.0), &config);
		assert_eq!(p.scale, 0.5);
		assert_eq!(p.opacity, 0.5);
	}

	#[test]
	fn pointer_only_biases_rotation() {
		let config = HelixConfig::default();
		let still = helix_position(&input(2, 6, Strand::Right, 10.0, 400.0), &config);
		let mut moved = input(2, 6, Strand::Right, 10.0, 400.0);
		moved.pointer = (0.5, -0.25);
		let moved = helix_position(&moved, &config);
		assert_eq!((moved.x, moved.y, moved.z), (still.x, still.y, still.z));
		assert_eq!(moved.rotate_y, 10.0);
		assert_eq!(moved.rotate_x, -5.0);
	}

	#[test]
	fn vertical_spacing_is_even() {
		let config = HelixConfig::default();
		let ys: Vec<f64> = (0..4)
			.map(|i| helix_position(&input(i, 4, Strand::Left, 0.0, 400.0), &config).y)
			.collect();
		assert_eq!(ys, [80.0, 180.0, 280.0, 380.0]);
	}

	#[test]
	fn strand_backbone_has_fixed_layout() {
		let config = HelixConfig::default();
		let points = strand_points(Strand::Left, 0.0, 500.0, &config);
		assert_eq!(points.len(), 30);
		assert_eq!(points[0].x, 0.0);
		assert_eq!(points[0].z, 40.0);
		assert_eq!(points[15].top_pct, 50.0);
		assert!((points[4].alpha - 0.6).abs() < 1e-9);
		assert!((points[5].alpha - 0.2).abs() < 1e-9);

		let right = strand_points(Strand::Right, 0.0, 500.0, &config);
		assert_eq!(right[0].z, -40.0);
	}

	/// Angle of a left-strand node around the axis, recovered from `x` and `z`.
	fn node_angle(index: usize, count: usize, angle: f64) -> f64 {
		let p = helix_position(&input(index, count, Strand::Left, angle, 400.0), &HelixConfig::default());
		(p.x - 200.0).atan2(p.z).to_degrees()
	}

	proptest! {
		#[test]
		fn adding_an_item_keeps_even_angular_spacing(
			count in 2usize..40,
			angle in -720.0f64..720.0,
		) {
			for n in [count, count + 1] {
				let step = 360.0 / n as f64;
				for i in 0..n - 1 {
					let gap = (node_angle(i + 1, n, angle) - node_angle(i, n, angle)).rem_euclid(360.0);
					prop_assert!((gap - step).abs() < 1e-6, "gap {} != {} for count {}", gap, step, n);
				}
			}
		}

		#[test]
		fn outputs_are_bounded_and_reproducible(
			index in 0usize..50,
			count in 0usize..50,
			angle in -720.0f64..720.0,
			width in 0.0f64..2000.0,
			px in -0.5f64..0.5,
			py in -0.5f64..0.5,
			right in any::<bool>(),
		) {
			let config = HelixConfig::default();
			let strand = if right { Strand::Right } else { Strand::Left };
			let mut i = input(index, count, strand, angle, width);
			i.pointer = (px, py);
			let a = helix_position(&i, &config);
			let b = helix_position(&i, &config);
			prop_assert_eq!(a, b);
			prop_assert!((0.0..=1.0).contains(&a.scale));
			prop_assert!((0.2..=1.0).contains(&a.opacity));
			prop_assert!(a.rotate_x.abs() <= 10.0 && a.rotate_y.abs() <= 10.0);
			let radius = helix_radius(width, &config);
			prop_assert!(a.z.abs() <= radius + 1e-9);
		}
	}
}
