//! Index-derived pseudo-random values.
//!
//! Decorative particles are seeded from their index so every render of the
//! same page produces the same field.

/// Linear congruential value in `[0, 1)` for `seed`.
pub fn rand_simple(seed: usize) -> f64 {
	let x = ((seed as u64 + 1) * 9301 + 49297) % 233_280;
	(x as f64) / 233_280.0
}

/// `rand_simple` for the `channel`-th value of particle `index`.
pub fn rand_channel(index: usize, channel: usize) -> f64 {
	rand_simple(index * 7 + channel * 104_729)
}

/// Floating dot in a particle field. Positions are percentages of the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
	pub id: usize,
	pub x: f64,
	pub y: f64,
	pub size: f64,
	pub duration: f64,
	pub delay: f64,
	pub drift_x: f64,
	pub drift_y: f64,
}

/// Deterministic particle field for background decoration.
pub fn particle_field(count: usize, min_size: f64, max_size: f64) -> Vec<Particle> {
	(0..count)
		.map(|i| Particle {
			id: i,
			x: rand_channel(i, 0) * 100.0,
			y: rand_channel(i, 1) * 100.0,
			size: min_size + rand_channel(i, 2) * (max_size - min_size),
			duration: 10.0 + rand_channel(i, 3) * 30.0,
			delay: rand_channel(i, 4) * 20.0,
			drift_x: rand_channel(i, 5) * 10.0 - 5.0,
			drift_y: rand_channel(i, 6) * 10.0 - 5.0,
		})
		.collect()
}

/// Static depth-shaded speck used behind the helix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthParticle {
	pub id: usize,
	/// Depth in `[-100, 100)`.
	pub depth: f64,
	/// Opacity derived from depth, `[0.2, 1.0)`.
	pub scale: f64,
	pub width: f64,
	/// Horizontal position as a fraction of the container.
	pub x_seed: f64,
	pub y_seed: f64,
	pub duration: f64,
}

pub fn depth_particles(count: usize) -> Vec<DepthParticle> {
	(0..count)
		.map(|i| {
			let depth = ((i * 7919) % 200) as f64 - 100.0;
			let scale = (depth + 100.0) / 200.0 * 0.8 + 0.2;
			let width = ((i * 3929) % 6 + 2) as f64;
			DepthParticle {
				id: i,
				depth,
				scale,
				width: width * scale,
				x_seed: ((i * 104_729) % 100) as f64 / 100.0,
				y_seed: ((i * 15_649) % 100) as f64 / 100.0,
				duration: (10 + i % 10) as f64,
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rand_simple_is_deterministic_and_in_range() {
		for seed in 0..1000 {
			let v = rand_simple(seed);
			assert_eq!(v, rand_simple(seed));
			assert!((0.0..1.0).contains(&v));
		}
	}

	#[test]
	fn particle_fields_repeat_exactly() {
		assert_eq!(particle_field(50, 1.0, 4.0), particle_field(50, 1.0, 4.0));
		for p in particle_field(50, 1.0, 4.0) {
			assert!((0.0..100.0).contains(&p.x));
			assert!((1.0..4.0).contains(&p.size));
		}
	}

	#[test]
	fn depth_particles_match_their_seed_formulas() {
		let particles = depth_particles(30);
		assert_eq!(particles[0].depth, -100.0);
		assert_eq!(particles[0].scale, 0.2);
		assert_eq!(particles[1].depth, (7919 % 200) as f64 - 100.0);
		assert!(particles.iter().all(|p| (0.2..1.0).contains(&p.scale)));
	}
}
