//! Tuning constants for the animated widgets.
//!
//! Every widget takes its config as a prop and falls back to these defaults.

/// Radial layout and rendering parameters for the skill constellation.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstellationConfig {
	/// Horizontal ellipse radius as a fraction of the canvas width.
	pub ellipse_x_factor: f64,
	/// Vertical ellipse radius as a fraction of the canvas height.
	pub ellipse_y_factor: f64,
	pub category_radius: f64,
	pub skill_radius: f64,
	/// Distance between a category and its orbiting skills.
	pub orbit_base: f64,
	/// Spread of the orbit distance, applied as `[0, +v/2, -v/2]`.
	pub orbit_variance: f64,
	/// Maximum parallax tilt in degrees.
	pub max_tilt: f64,
	pub default_category_color: &'static str,
	pub default_skill_color: &'static str,
}

impl Default for ConstellationConfig {
	fn default() -> Self {
		Self {
			ellipse_x_factor: 0.4,
			ellipse_y_factor: 0.4,
			category_radius: 20.0,
			skill_radius: 8.0,
			orbit_base: 75.0,
			orbit_variance: 25.0,
			max_tilt: 8.0,
			default_category_color: "rgba(99, 102, 241, 0.7)",
			default_skill_color: "rgba(148, 163, 184, 0.8)",
		}
	}
}

/// Double helix geometry and rotation behaviour.
#[derive(Clone, Debug, PartialEq)]
pub struct HelixConfig {
	pub radius_factor: f64,
	pub min_radius: f64,
	pub vertical_margin: f64,
	/// Degrees added per auto-rotation tick.
	pub auto_step: f64,
	pub tick_ms: u64,
	/// Degrees of rotation per pixel dragged.
	pub drag_sensitivity: f64,
	pub max_drag_tilt: f64,
	pub max_auto_tilt: f64,
	/// Idle time after the last drag before auto-rotation resumes.
	pub resume_after_ms: f64,
	/// Degrees of node tilt per unit of normalized pointer offset.
	pub pointer_bias: f64,
	pub node_size: f64,
	pub strand_points: usize,
	pub particles: usize,
}

impl Default for HelixConfig {
	fn default() -> Self {
		Self {
			radius_factor: 0.18,
			min_radius: 20.0,
			vertical_margin: 80.0,
			auto_step: 0.2,
			tick_ms: 30,
			drag_sensitivity: 0.5,
			max_drag_tilt: 60.0,
			max_auto_tilt: 15.0,
			resume_after_ms: 5000.0,
			pointer_bias: 20.0,
			node_size: 40.0,
			strand_points: 30,
			particles: 30,
		}
	}
}

/// Spring constants in the framer-motion convention.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
	pub stiffness: f64,
	pub mass: f64,
	/// Distance and speed under which the spring snaps to its target.
	pub rest_delta: f64,
}

impl Default for SpringConfig {
	fn default() -> Self {
		Self {
			stiffness: 100.0,
			mass: 0.5,
			rest_delta: 0.001,
		}
	}
}

/// Pointer tilt parameters shared by the 3D cards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxConfig {
	pub max_tilt: f64,
	pub spring: SpringConfig,
}

impl Default for ParallaxConfig {
	fn default() -> Self {
		Self {
			max_tilt: 5.0,
			spring: SpringConfig::default(),
		}
	}
}

impl ParallaxConfig {
	/// Same spring, different tilt bound.
	pub fn with_max_tilt(max_tilt: f64) -> Self {
		Self {
			max_tilt,
			..Self::default()
		}
	}
}

/// Contact form behaviour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactConfig {
	/// Delay of the simulated submission.
	pub submit_delay_ms: u64,
	/// Characters that fill an input's progress bar.
	pub input_progress_chars: usize,
	/// Characters that fill the text area's progress bar.
	pub textarea_progress_chars: usize,
}

impl Default for ContactConfig {
	fn default() -> Self {
		Self {
			submit_delay_ms: 1500,
			input_progress_chars: 20,
			textarea_progress_chars: 100,
		}
	}
}
