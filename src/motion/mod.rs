//! Frame-independent motion math shared by the animated widgets.

pub mod noise;
pub mod parallax;
pub mod spring;

/// Rounds to three decimal places.
pub fn round3(value: f64) -> f64 {
	(value * 1000.0).round() / 1000.0
}

/// Clamps to `[0, 1]`, substituting `fallback` for non-finite input.
pub fn clamp01_or(value: f64, fallback: f64) -> f64 {
	if value.is_finite() {
		value.clamp(0.0, 1.0)
	} else {
		fallback
	}
}

/// Linearly maps `value` from `[in_min, in_max]` onto `[out_min, out_max]`, clamped.
pub fn map_range(value: f64, (in_min, in_max): (f64, f64), (out_min, out_max): (f64, f64)) -> f64 {
	let span = in_max - in_min;
	if span.abs() < f64::EPSILON {
		return (out_min + out_max) / 2.0;
	}
	let t = ((value - in_min) / span).clamp(0.0, 1.0);
	out_min + (out_max - out_min) * t
}
