//! Pointer-driven tilt shared by the constellation, the cards and the hero terminal.

use crate::config::{ParallaxConfig, SpringConfig};

use super::spring::Spring;

/// Container rectangle in client coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
	pub left: f64,
	pub top: f64,
	pub width: f64,
	pub height: f64,
}

impl Bounds {
	pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
		Self {
			left,
			top,
			width,
			height,
		}
	}

	pub fn center(&self) -> (f64, f64) {
		(self.left + self.width / 2.0, self.top + self.height / 2.0)
	}

	/// Pointer position as a fraction of the box, `0..1` inside it.
	pub fn relative(&self, (px, py): (f64, f64)) -> (f64, f64) {
		let fx = if self.width > 0.0 { (px - self.left) / self.width } else { 0.5 };
		let fy = if self.height > 0.0 { (py - self.top) / self.height } else { 0.5 };
		(fx, fy)
	}
}

/// Rotation in degrees around the X and Y axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
	pub rotate_x: f64,
	pub rotate_y: f64,
}

impl Tilt {
	pub fn css(&self, perspective: f64) -> String {
		format!(
			"perspective({perspective}px) rotateX({:.3}deg) rotateY({:.3}deg)",
			self.rotate_x, self.rotate_y
		)
	}
}

/// Offset of the pointer from the box center, each axis clamped to `[-1, 1]`.
pub fn normalized_offset(pointer: (f64, f64), bounds: &Bounds) -> (f64, f64) {
	let (cx, cy) = bounds.center();
	let axis = |delta: f64, half: f64| {
		if half > 0.0 && delta.is_finite() {
			(delta / half).clamp(-1.0, 1.0)
		} else {
			0.0
		}
	};
	(
		axis(pointer.0 - cx, bounds.width / 2.0),
		axis(pointer.1 - cy, bounds.height / 2.0),
	)
}

/// Maps a normalized offset to a tilt bounded by `max_deg`.
///
/// The vertical axis is inverted so the surface leans toward the pointer.
pub fn tilt_target((ox, oy): (f64, f64), max_deg: f64) -> Tilt {
	Tilt {
		rotate_x: -oy * max_deg,
		rotate_y: ox * max_deg,
	}
}

/// Translation that pulls an element toward the pointer.
pub fn magnetic_offset(pointer: (f64, f64), bounds: &Bounds, strength: f64) -> (f64, f64) {
	let (cx, cy) = bounds.center();
	((pointer.0 - cx) * strength, (pointer.1 - cy) * strength)
}

/// Smoothed tilt following the pointer and easing back to flat on leave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltSpring {
	x: Spring,
	y: Spring,
	max_deg: f64,
}

impl TiltSpring {
	pub fn new(config: ParallaxConfig) -> Self {
		Self {
			x: Spring::new(0.0, config.spring),
			y: Spring::new(0.0, config.spring),
			max_deg: config.max_tilt,
		}
	}

	pub fn pointer_move(&mut self, pointer: (f64, f64), bounds: &Bounds) {
		let target = tilt_target(normalized_offset(pointer, bounds), self.max_deg);
		self.x.set_target(target.rotate_x);
		self.y.set_target(target.rotate_y);
	}

	pub fn pointer_leave(&mut self) {
		self.x.set_target(0.0);
		self.y.set_target(0.0);
	}

	pub fn step(&mut self, dt: f64) {
		self.x.step(dt);
		self.y.step(dt);
	}

	pub fn current(&self) -> Tilt {
		Tilt {
			rotate_x: self.x.value,
			rotate_y: self.y.value,
		}
	}

	pub fn target(&self) -> Tilt {
		Tilt {
			rotate_x: self.x.target,
			rotate_y: self.y.target,
		}
	}

	pub fn is_at_rest(&self) -> bool {
		self.x.is_at_rest() && self.y.is_at_rest()
	}
}

/// Smoothed translation of a magnetic element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagnetSpring {
	x: Spring,
	y: Spring,
	strength: f64,
}

impl MagnetSpring {
	pub fn new(strength: f64, spring: SpringConfig) -> Self {
		Self {
			x: Spring::new(0.0, spring),
			y: Spring::new(0.0, spring),
			strength,
		}
	}

	pub fn pointer_move(&mut self, pointer: (f64, f64), bounds: &Bounds) {
		let (dx, dy) = magnetic_offset(pointer, bounds, self.strength);
		self.x.set_target(dx);
		self.y.set_target(dy);
	}

	pub fn pointer_leave(&mut self) {
		self.x.set_target(0.0);
		self.y.set_target(0.0);
	}

	pub fn step(&mut self, dt: f64) {
		self.x.step(dt);
		self.y.step(dt);
	}

	pub fn offset(&self) -> (f64, f64) {
		(self.x.value, self.y.value)
	}

	pub fn is_at_rest(&self) -> bool {
		self.x.is_at_rest() && self.y.is_at_rest()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn card() -> Bounds {
		Bounds::new(100.0, 50.0, 400.0, 200.0)
	}

	#[test]
	fn tilt_renders_as_a_css_transform() {
		let tilt = Tilt {
			rotate_x: 2.5,
			rotate_y: -4.0,
		};
		assert_eq!(tilt.css(1000.0), "perspective(1000px) rotateX(2.500deg) rotateY(-4.000deg)");
		let resting = TiltSpring::new(ParallaxConfig::default()).current();
		assert_eq!(resting.css(800.0), "perspective(800px) rotateX(0.000deg) rotateY(0.000deg)");
	}

	#[test]
	fn center_pointer_is_flat() {
		let tilt = tilt_target(normalized_offset((300.0, 150.0), &card()), 8.0);
		assert!(tilt.rotate_x.abs() < 1e-9);
		assert!(tilt.rotate_y.abs() < 1e-9);
	}

	#[test]
	fn corner_pointer_hits_the_maximum() {
		let tilt = tilt_target(normalized_offset((500.0, 50.0), &card()), 8.0);
		assert_eq!(tilt.rotate_y, 8.0);
		// Pointer at the top edge leans the top away from the viewer.
		assert_eq!(tilt.rotate_x, 8.0);
	}

	#[test]
	fn zero_sized_bounds_do_not_tilt() {
		let offset = normalized_offset((10.0, 10.0), &Bounds::default());
		assert_eq!(offset, (0.0, 0.0));
	}

	#[test]
	fn tilt_spring_lags_then_returns_to_zero_on_leave() {
		let mut tilt = TiltSpring::new(ParallaxConfig::with_max_tilt(10.0));
		tilt.pointer_move((500.0, 250.0), &card());
		tilt.step(1.0 / 60.0);
		let first = tilt.current();
		assert!(first.rotate_y > 0.0 && first.rotate_y < 10.0);

		tilt.pointer_leave();
		tilt.step(1.0 / 60.0);
		assert!(tilt.current().rotate_y > 0.0, "leave eases instead of snapping");

		for _ in 0..600 {
			tilt.step(1.0 / 60.0);
		}
		assert_eq!(tilt.current(), Tilt::default());
		assert!(tilt.is_at_rest());
	}

	#[test]
	fn magnetic_offset_scales_distance_from_center() {
		assert_eq!(magnetic_offset((400.0, 150.0), &card(), 0.3), (30.0, 0.0));
	}

	#[test]
	fn magnet_follows_pointer_and_springs_back() {
		let spring = SpringConfig {
			stiffness: 150.0,
			mass: 0.1,
			rest_delta: 0.001,
		};
		let mut magnet = MagnetSpring::new(0.3, spring);
		magnet.pointer_move((400.0, 150.0), &card());
		for _ in 0..120 {
			magnet.step(1.0 / 60.0);
		}
		assert_eq!(magnet.offset(), (30.0, 0.0));

		magnet.pointer_leave();
		for _ in 0..120 {
			magnet.step(1.0 / 60.0);
		}
		assert_eq!(magnet.offset(), (0.0, 0.0));
		assert!(magnet.is_at_rest());
	}

	proptest! {
		#[test]
		fn tilt_never_exceeds_maximum(px in -2000.0f64..2000.0, py in -2000.0f64..2000.0, max in 0.0f64..15.0) {
			let bounds = card();
			let tilt = tilt_target(normalized_offset((px, py), &bounds), max);
			prop_assert!(tilt.rotate_x.abs() <= max + 1e-9);
			prop_assert!(tilt.rotate_y.abs() <= max + 1e-9);

			let mut spring = TiltSpring::new(ParallaxConfig::with_max_tilt(max));
			spring.pointer_move((px, py), &bounds);
			for _ in 0..120 {
				spring.step(1.0 / 60.0);
				let current = spring.current();
				prop_assert!(current.rotate_x.abs() <= max + 1e-9);
				prop_assert!(current.rotate_y.abs() <= max + 1e-9);
			}
		}
	}
}
