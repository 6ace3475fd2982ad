//! A single animated particle and its per-tick physics step.
//!
//! Particles are plain data records mutated in place. Position is
//! real-valued and unbounded during a step; boundary handling at the end of
//! each step keeps it within an extended viewport margin, either by
//! wrapping to the opposite edge or by signaling the caller to respawn.

use std::f64::consts::TAU;

use super::config::{FieldConfig, ForceDirection, ShapeKind, WrapMode};
use super::rng::FieldRng;
use super::theme::Color;

/// Extended viewport margin; particles live within `[-50, extent + 50]`.
pub const EDGE_MARGIN: f64 = 50.0;
/// Respawned particles appear this far below the bottom edge.
pub const RESPAWN_OFFSET: f64 = 20.0;

/// Below this pointer distance the push direction is geometrically
/// undefined; the force degenerates to a full-strength vertical shove.
const MIN_POINTER_DISTANCE: f64 = 1e-6;
/// Extra rotation applied to dashes caught inside the force threshold.
const POINTER_SPIN: f64 = 0.1;

/// One independently animated decorative shape.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Dash length along its axis, in pixels.
	pub length: f64,
	/// Dash stroke width, in pixels.
	pub width: f64,
	/// Disc radius, in pixels.
	pub radius: f64,
	pub rotation: f64,
	pub rotation_speed: f64,
	/// Phase offset for the sinusoidal drift.
	pub phase: f64,
	pub color: Color,
	pub opacity: f64,
}

impl Particle {
	/// Create a particle at a uniformly random point in the viewport.
	pub fn spawn(rng: &mut FieldRng, config: &FieldConfig, width: f64, height: f64) -> Self {
		let mut particle = Self {
			x: 0.0,
			y: 0.0,
			vx: 0.0,
			vy: 0.0,
			length: 0.0,
			width: 0.0,
			radius: 0.0,
			rotation: 0.0,
			rotation_speed: 0.0,
			phase: 0.0,
			color: config.palette.get(0),
			opacity: 1.0,
		};
		particle.randomize(rng, config, width, height, true);
		particle
	}

	/// Re-randomize every field after the particle drifted off-screen.
	///
	/// Placement is a random `x` just below the bottom edge, modeling
	/// continuous upward emission rather than destroying the object.
	pub fn respawn(&mut self, rng: &mut FieldRng, config: &FieldConfig, width: f64, height: f64) {
		self.randomize(rng, config, width, height, false);
	}

	fn randomize(
		&mut self,
		rng: &mut FieldRng,
		config: &FieldConfig,
		width: f64,
		height: f64,
		initial: bool,
	) {
		self.x = rng.range(0.0, width);
		self.y = if initial {
			rng.range(0.0, height)
		} else {
			height + RESPAWN_OFFSET
		};

		self.length = rng.range(5.0, 20.0);
		self.width = rng.range(1.0, 4.0);
		self.radius = rng.range(0.5, 2.5);

		// Slow sideways drift, steady upward trend.
		self.vx = rng.range(-0.5, 0.5);
		self.vy = -rng.range(0.5, 2.5);

		self.rotation = rng.range(0.0, TAU);
		self.rotation_speed = rng.range(-0.025, 0.025);
		self.phase = rng.range(0.0, TAU);

		self.color = config.palette.get(rng.index(config.palette.colors.len()));
		self.opacity = rng.range(0.2, 0.8);
	}

	/// Advance the particle by one simulation step.
	///
	/// Returns `true` when the particle left the vertical margin under
	/// [`WrapMode::Respawn`] and the caller must respawn it.
	pub fn update(
		&mut self,
		config: &FieldConfig,
		pointer: Option<(f64, f64)>,
		time: f64,
		width: f64,
		height: f64,
	) -> bool {
		match config.wave {
			Some(wave) => {
				self.x += (time * wave.frequency + self.phase).sin() * wave.amplitude;
				self.y += self.vy;
			}
			None => {
				self.x += self.vx;
				self.y += self.vy;
			}
		}

		if config.shape == ShapeKind::Dash {
			self.rotation += self.rotation_speed;
		}

		if let Some((px, py)) = pointer {
			self.apply_pointer_force(config, px, py);
		}

		if self.x < -EDGE_MARGIN {
			self.x = width + EDGE_MARGIN;
		} else if self.x > width + EDGE_MARGIN {
			self.x = -EDGE_MARGIN;
		}

		match config.wrap_mode {
			WrapMode::Wrap => {
				if self.y < -EDGE_MARGIN {
					self.y = height + EDGE_MARGIN;
				} else if self.y > height + EDGE_MARGIN {
					self.y = -EDGE_MARGIN;
				}
				false
			}
			WrapMode::Respawn => self.y < -EDGE_MARGIN || self.y > height + EDGE_MARGIN,
		}
	}

	/// Distance-based push or pull towards the pointer, applied directly to
	/// position. Linear falloff: full strength at the pointer, zero at the
	/// threshold. No velocity integration, so the effect vanishes the moment
	/// the pointer leaves the radius.
	fn apply_pointer_force(&mut self, config: &FieldConfig, px: f64, py: f64) {
		let (dx, dy) = (px - self.x, py - self.y);
		let distance = (dx * dx + dy * dy).sqrt();
		if distance >= config.force_threshold {
			return;
		}

		let falloff = (config.force_threshold - distance) / config.force_threshold;
		let (ux, uy) = if distance < MIN_POINTER_DISTANCE {
			(0.0, -1.0)
		} else {
			(dx / distance, dy / distance)
		};
		let sign = match config.force_direction {
			ForceDirection::Repel => -1.0,
			ForceDirection::Attract => 1.0,
		};

		self.x += ux * falloff * config.force_scale * sign;
		self.y += uy * falloff * config.force_scale * sign;

		if config.shape == ShapeKind::Dash {
			self.rotation += POINTER_SPIN;
		}
	}
}
