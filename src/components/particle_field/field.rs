//! Particle pool state and the per-tick simulation step.
//!
//! Created once when the component mounts, then mutated each frame by the
//! animation loop. The pool is fixed-size: drifting off-screen re-randomizes
//! a particle in place, it is never removed or replaced. The pointer is the
//! only state shared with the event handlers; handlers write it between
//! ticks and the tick reads it, so no synchronization is needed on the
//! single-threaded wasm event loop.

use super::config::FieldConfig;
use super::particle::Particle;
use super::rng::FieldRng;

/// Fixed per-frame time increment for the tick clock. Wall-clock deltas are
/// deliberately not measured, so simulation speed follows the display
/// refresh rate.
pub const TICK_DT: f64 = 0.016;

/// The complete animation state: pool, pointer, bounds, and clock.
pub struct FieldState {
	pub particles: Vec<Particle>,
	/// Latest pointer position in canvas coordinates, `None` while the
	/// pointer is outside the page.
	pub pointer: Option<(f64, f64)>,
	pub config: FieldConfig,
	pub width: f64,
	pub height: f64,
	/// Monotonic tick clock driving the sinusoidal drift.
	pub time: f64,
	rng: FieldRng,
}

impl FieldState {
	pub fn new(config: FieldConfig, width: f64, height: f64, seed: u64) -> Self {
		let mut rng = FieldRng::new(seed);
		let particles = (0..config.particle_count)
			.map(|_| Particle::spawn(&mut rng, &config, width, height))
			.collect();

		Self {
			particles,
			pointer: None,
			config,
			width,
			height,
			time: 0.0,
			rng,
		}
	}

	/// Advance every particle by one simulation step, respawning those that
	/// drifted past the vertical margin.
	pub fn tick(&mut self) {
		self.time += TICK_DT;
		let Self {
			particles,
			pointer,
			config,
			width,
			height,
			time,
			rng,
		} = self;

		for particle in particles.iter_mut() {
			if particle.update(config, *pointer, *time, *width, *height) {
				particle.respawn(rng, config, *width, *height);
			}
		}
	}

	/// Record the pointer position for the next tick. Raw coordinates, no
	/// smoothing.
	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer = Some((x, y));
	}

	/// Forget the pointer; proximity forces are skipped until it returns.
	pub fn clear_pointer(&mut self) {
		self.pointer = None;
	}

	/// Record new viewport bounds. Particles are not clamped or rescaled;
	/// any now out-of-bounds particle wraps or respawns at its next natural
	/// boundary check.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::config::WrapMode;
	use crate::components::particle_field::particle::EDGE_MARGIN;

	const W: f64 = 1920.0;
	const H: f64 = 1080.0;

	fn field(config: FieldConfig) -> FieldState {
		FieldState::new(config, W, H, 0xfeed)
	}

	fn assert_contained(state: &FieldState) {
		for p in &state.particles {
			assert!(
				(-EDGE_MARGIN..=state.width + EDGE_MARGIN).contains(&p.x),
				"x out of margin: {}",
				p.x
			);
			assert!(
				(-EDGE_MARGIN..=state.height + EDGE_MARGIN).contains(&p.y),
				"y out of margin: {}",
				p.y
			);
		}
	}

	#[test]
	fn test_pool_size_is_fixed() {
		let mut state = field(FieldConfig::dashes());
		assert_eq!(state.particles.len(), 60);
		for _ in 0..500 {
			state.tick();
		}
		assert_eq!(state.particles.len(), 60);
	}

	#[test]
	fn test_boundary_containment_over_many_ticks() {
		for config in [
			FieldConfig::dashes(),
			FieldConfig::motes(),
			FieldConfig::streaks(),
		] {
			let mut state = field(config);
			for _ in 0..2000 {
				state.tick();
				assert_contained(&state);
			}
		}
	}

	#[test]
	fn test_containment_holds_with_pointer_pressure() {
		let mut state = field(FieldConfig::streaks());
		for i in 0..2000 {
			// Sweep the pointer across the viewport to exercise the force
			// near particles and edges alike.
			let t = i as f64 / 2000.0;
			state.set_pointer(t * W, (1.0 - t) * H);
			state.tick();
			assert_contained(&state);
		}
	}

	#[test]
	fn test_tick_clock_is_monotonic() {
		let mut state = field(FieldConfig::motes());
		let mut last = state.time;
		for _ in 0..10 {
			state.tick();
			assert!(state.time > last);
			last = state.time;
		}
	}

	#[test]
	fn test_pointer_set_and_clear() {
		let mut state = field(FieldConfig::dashes());
		assert_eq!(state.pointer, None);
		state.set_pointer(10.0, 20.0);
		assert_eq!(state.pointer, Some((10.0, 20.0)));
		state.clear_pointer();
		assert_eq!(state.pointer, None);
	}

	#[test]
	fn test_resize_does_not_clamp_particles() {
		let mut state = field(FieldConfig::dashes());
		// Park a particle far outside the new, smaller bounds.
		state.particles[0].x = 1500.0;
		state.particles[0].y = 900.0;

		state.resize(800.0, 600.0);
		assert_eq!((state.width, state.height), (800.0, 600.0));
		assert_eq!(state.particles[0].x, 1500.0);
		assert_eq!(state.particles[0].y, 900.0);
	}

	#[test]
	fn test_out_of_bounds_after_resize_respawns_on_next_tick() {
		let mut state = field(FieldConfig::dashes());
		assert_eq!(state.config.wrap_mode, WrapMode::Respawn);
		state.particles[0].x = 400.0;
		state.particles[0].y = 900.0;
		state.resize(800.0, 600.0);

		// 900 > 600 + 50, so the first tick after the resize respawns it
		// just below the new bottom edge.
		state.tick();
		let p = &state.particles[0];
		assert!((p.y - 620.0).abs() < 1e-9);
		assert!((0.0..800.0).contains(&p.x));
	}

	#[test]
	fn test_upward_emission_eventually_respawns() {
		let mut state = field(FieldConfig::dashes());
		// vy is at most -0.5/tick, so every particle crosses the top margin
		// well within this budget and comes back from the bottom.
		let mut seen_respawn = false;
		for _ in 0..10_000 {
			state.tick();
			if state
				.particles
				.iter()
				.any(|p| (p.y - (H + 20.0)).abs() < 1e-9)
			{
				seen_respawn = true;
				break;
			}
		}
		assert!(seen_respawn);
	}
}
