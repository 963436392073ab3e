use log::debug;

use crate::config::HelixConfig;

/// Rotation of the helix, driven by a timer and by pointer drags.
///
/// Times are milliseconds on any monotonic clock; the caller passes `now`
/// so the controller never reads a clock itself.
#[derive(Clone, Debug, PartialEq)]
pub struct RotationController {
	/// Rotation around the vertical axis in degrees, within `[0, 360)`.
	pub angle: f64,
	/// Tilt around the horizontal axis in degrees.
	pub tilt: f64,
	/// Pointer offset from the container center, each axis in `[-0.5, 0.5]`.
	pub pointer: (f64, f64),
	pub active_skill: Option<usize>,
	dragging: bool,
	last_drag: (f64, f64),
	resume_at: Option<f64>,
	config: HelixConfig,
}

impl RotationController {
	pub fn new(config: HelixConfig) -> Self {
		Self {
			angle: 0.0,
			tilt: 0.0,
			pointer: (0.0, 0.0),
			active_skill: None,
			dragging: false,
			last_drag: (0.0, 0.0),
			resume_at: None,
			config,
		}
	}

	pub fn config(&self) -> &HelixConfig {
		&self.config
	}

	pub fn is_dragging(&self) -> bool {
		self.dragging
	}

	pub fn auto_active(&self, now: f64) -> bool {
		!self.dragging && self.resume_at.is_none_or(|at| now >= at)
	}

	/// Advances the automatic rotation. Returns whether anything moved.
	pub fn tick(&mut self, now: f64) -> bool {
		if !self.auto_active(now) {
			return false;
		}
		if self.resume_at.take().is_some() {
			debug!("helix auto-rotation resumed");
		}
		let limit = self.config.max_auto_tilt;
		self.angle = (self.angle + self.config.auto_step).rem_euclid(360.0);
		self.tilt = (self.tilt + (now / 2000.0).sin() * 0.1).clamp(-limit, limit);
		true
	}

	pub fn drag_start(&mut self, client: (f64, f64)) {
		self.dragging = true;
		self.last_drag = client;
	}

	/// Rotates by the pointer delta since the previous drag event.
	pub fn drag_move(&mut self, client: (f64, f64), now: f64) -> bool {
		if !self.dragging {
			return false;
		}
		let (dx, dy) = (client.0 - self.last_drag.0, client.1 - self.last_drag.1);
		let limit = self.config.max_drag_tilt;
		self.angle = (self.angle + dx * self.config.drag_sensitivity).rem_euclid(360.0);
		self.tilt = (self.tilt + dy * self.config.drag_sensitivity).clamp(-limit, limit);
		self.last_drag = client;
		self.resume_at = Some(now + self.config.resume_after_ms);
		true
	}

	pub fn drag_end(&mut self, now: f64) -> bool {
		if !self.dragging {
			return false;
		}
		self.dragging = false;
		self.resume_at = Some(now + self.config.resume_after_ms);
		true
	}

	/// Leaving the container ends any drag and resumes rotation at once.
	pub fn pointer_leave(&mut self) {
		self.dragging = false;
		self.resume_at = None;
		self.pointer = (0.0, 0.0);
	}

	/// Records the pointer as a fraction of the container, `(0, 0)` being the top-left corner.
	pub fn pointer_move(&mut self, fraction: (f64, f64)) {
		let center = |v: f64| if v.is_finite() { (v - 0.5).clamp(-0.5, 0.5) } else { 0.0 };
		self.pointer = (center(fraction.0), center(fraction.1));
	}

	pub fn toggle_skill(&mut self, index: usize) {
		self.active_skill = if self.active_skill == Some(index) {
			None
		} else {
			Some(index)
		};
	}

	pub fn close_skill(&mut self) {
		self.active_skill = None;
	}
}
