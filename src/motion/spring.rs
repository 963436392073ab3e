//! Critically damped springs.
//!
//! The step uses the closed-form solution of `x'' = -k/m (x - target) - 2ω x'`
//! with `ω = sqrt(k/m)`, so it stays stable for any frame delta and never
//! oscillates around the target.

use crate::config::SpringConfig;

/// One-dimensional critically damped spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
	pub value: f64,
	pub velocity: f64,
	pub target: f64,
	omega: f64,
	rest_delta: f64,
}

impl Spring {
	pub fn new(value: f64, config: SpringConfig) -> Self {
		let omega = if config.mass > 0.0 && config.stiffness > 0.0 {
			(config.stiffness / config.mass).sqrt()
		} else {
			0.0
		};
		Self {
			value,
			velocity: 0.0,
			target: value,
			omega,
			rest_delta: config.rest_delta,
		}
	}

	pub fn set_target(&mut self, target: f64) {
		self.target = target;
	}

	pub fn is_at_rest(&self) -> bool {
		self.value == self.target && self.velocity == 0.0
	}

	/// Advances the spring by `dt` seconds.
	pub fn step(&mut self, dt: f64) {
		if self.is_at_rest() || dt <= 0.0 || !dt.is_finite() {
			return;
		}
		if self.omega == 0.0 {
			self.value = self.target;
			self.velocity = 0.0;
			return;
		}

		let displacement = self.value - self.target;
		let c = self.velocity + self.omega * displacement;
		let decay = (-self.omega * dt).exp();
		self.value = self.target + (displacement + c * dt) * decay;
		self.velocity = (self.velocity - self.omega * c * dt) * decay;

		if (self.value - self.target).abs() < self.rest_delta && self.velocity.abs() < self.rest_delta
		{
			self.value = self.target;
			self.velocity = 0.0;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn spring() -> Spring {
		Spring::new(0.0, SpringConfig::default())
	}

	#[test]
	fn lags_behind_then_settles_on_target() {
		let mut s = spring();
		s.set_target(10.0);
		s.step(1.0 / 60.0);
		assert!(s.value > 0.0 && s.value < 10.0);

		for _ in 0..600 {
			s.step(1.0 / 60.0);
		}
		assert_eq!(s.value, 10.0);
		assert!(s.is_at_rest());
	}

	#[test]
	fn never_overshoots_from_rest() {
		let mut s = spring();
		s.set_target(8.0);
		for _ in 0..300 {
			s.step(1.0 / 60.0);
			assert!(s.value <= 8.0);
		}
	}

	#[test]
	fn large_steps_stay_finite() {
		let mut s = spring();
		s.set_target(-5.0);
		s.step(10.0);
		assert!(s.value.is_finite());
		assert!((s.value + 5.0).abs() < 0.01);
	}

	#[test]
	fn ignores_invalid_deltas() {
		let mut s = spring();
		s.set_target(1.0);
		s.step(f64::NAN);
		s.step(-1.0);
		assert_eq!(s.value, 0.0);
	}
}
