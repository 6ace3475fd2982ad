//! Field configuration and the three visual presets.
//!
//! Three presets ship: slow blue dashes, a denser multi-color mote drift,
//! and fast wide-radius streaks. Every difference between them is a field
//! here, so one simulation covers all of them.

use log::warn;
use serde::Deserialize;

use super::theme::Palette;

/// Shape drawn for each particle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
	/// Rounded dash with per-particle rotation.
	Dash,
	/// Filled circle.
	Disc,
}

/// Direction of the pointer proximity force.
///
/// The dash presets push particles away from the pointer while the disc
/// preset pulls them in. The sign is an explicit knob so either look can be
/// combined with any shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForceDirection {
	/// Push particles away from the pointer.
	Repel,
	/// Pull particles towards the pointer.
	Attract,
}

/// Vertical boundary behavior. Horizontal edges always wrap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapMode {
	/// Re-randomize the particle just below the bottom edge, modeling
	/// continuous upward emission.
	Respawn,
	/// Carry the particle to the opposite vertical edge.
	Wrap,
}

/// Sinusoidal horizontal drift layered on top of the upward trend.
///
/// Magnitudes are aesthetic tuning values, not load-bearing constants.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct WaveConfig {
	/// Horizontal displacement per tick at the sine peaks, in pixels.
	pub amplitude: f64,
	/// Angular frequency applied to the field's tick clock.
	pub frequency: f64,
}

/// Complete particle field configuration.
#[derive(Clone, Debug)]
pub struct FieldConfig {
	/// Fixed pool size; never changes after mount.
	pub particle_count: usize,
	pub shape: ShapeKind,
	/// Pointer distance below which the proximity force applies, in pixels.
	pub force_threshold: f64,
	/// Maximum positional displacement per tick from the proximity force.
	pub force_scale: f64,
	pub force_direction: ForceDirection,
	pub wrap_mode: WrapMode,
	/// Sinusoidal drift; `None` means plain velocity integration.
	pub wave: Option<WaveConfig>,
	pub palette: Palette,
}

impl FieldConfig {
	/// Sparse blue dashes repelled by the pointer (the default look).
	pub fn dashes() -> Self {
		Self {
			particle_count: 60,
			shape: ShapeKind::Dash,
			force_threshold: 200.0,
			force_scale: 3.0,
			force_direction: ForceDirection::Repel,
			wrap_mode: WrapMode::Respawn,
			wave: None,
			palette: Palette::solid_blue(),
		}
	}

	/// Dense multi-color discs with sinusoidal drift, drawn to the pointer.
	pub fn motes() -> Self {
		Self {
			particle_count: 100,
			shape: ShapeKind::Disc,
			force_threshold: 150.0,
			force_scale: 1.0,
			force_direction: ForceDirection::Attract,
			wrap_mode: WrapMode::Wrap,
			wave: Some(WaveConfig {
				amplitude: 0.6,
				frequency: 1.5,
			}),
			palette: Palette::brand(),
		}
	}

	/// Wide-radius, strongly repelled dashes in a blue-biased palette.
	pub fn streaks() -> Self {
		Self {
			particle_count: 70,
			shape: ShapeKind::Dash,
			force_threshold: 250.0,
			force_scale: 5.0,
			force_direction: ForceDirection::Repel,
			wrap_mode: WrapMode::Respawn,
			wave: None,
			palette: Palette::blue_biased(),
		}
	}
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self::dashes()
	}
}

/// Optional JSON overrides read from the host page.
///
/// The page embeds `<script type="application/json" id="field-config">` with
/// any subset of these fields; missing fields keep the preset's values.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FieldOverrides {
	/// Preset name: "dashes", "motes", or "streaks".
	pub preset: Option<String>,
	pub particle_count: Option<usize>,
	pub force_threshold: Option<f64>,
	pub force_scale: Option<f64>,
	pub force_direction: Option<ForceDirection>,
}

impl FieldOverrides {
	/// Resolve onto a preset, applying any field-level overrides.
	pub fn resolve(&self) -> FieldConfig {
		let mut config = match self.preset.as_deref() {
			None | Some("dashes") => FieldConfig::dashes(),
			Some("motes") => FieldConfig::motes(),
			Some("streaks") => FieldConfig::streaks(),
			Some(other) => {
				warn!("particle-field: unknown preset {other:?}, using default");
				FieldConfig::default()
			}
		};
		if let Some(count) = self.particle_count {
			config.particle_count = count;
		}
		if let Some(threshold) = self.force_threshold {
			config.force_threshold = threshold;
		}
		if let Some(scale) = self.force_scale {
			config.force_scale = scale;
		}
		if let Some(direction) = self.force_direction {
			config.force_direction = direction;
		}
		config
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_preset_table() {
		let dashes = FieldConfig::dashes();
		assert_eq!(dashes.particle_count, 60);
		assert_eq!(dashes.shape, ShapeKind::Dash);
		assert_eq!(dashes.force_threshold, 200.0);
		assert_eq!(dashes.force_scale, 3.0);
		assert_eq!(dashes.force_direction, ForceDirection::Repel);

		let motes = FieldConfig::motes();
		assert_eq!(motes.particle_count, 100);
		assert_eq!(motes.shape, ShapeKind::Disc);
		assert_eq!(motes.force_threshold, 150.0);
		assert_eq!(motes.force_scale, 1.0);
		assert_eq!(motes.wrap_mode, WrapMode::Wrap);
		assert!(motes.wave.is_some());

		let streaks = FieldConfig::streaks();
		assert_eq!(streaks.particle_count, 70);
		assert_eq!(streaks.force_threshold, 250.0);
		assert_eq!(streaks.force_scale, 5.0);
		assert_eq!(streaks.palette.colors.len(), 6);
	}

	#[test]
	fn test_overrides_from_json() {
		let overrides: FieldOverrides = serde_json::from_str(
			r#"{ "preset": "motes", "particle_count": 40, "force_direction": "repel" }"#,
		)
		.unwrap();
		let config = overrides.resolve();
		assert_eq!(config.particle_count, 40);
		assert_eq!(config.shape, ShapeKind::Disc);
		assert_eq!(config.force_direction, ForceDirection::Repel);
		// Untouched fields keep the preset's values.
		assert_eq!(config.force_threshold, 150.0);
	}

	#[test]
	fn test_unknown_preset_falls_back() {
		let overrides = FieldOverrides {
			preset: Some("sparkles".into()),
			..Default::default()
		};
		let config = overrides.resolve();
		assert_eq!(config.particle_count, FieldConfig::dashes().particle_count);
	}

	#[test]
	fn test_empty_overrides_are_default() {
		let overrides: FieldOverrides = serde_json::from_str("{}").unwrap();
		let config = overrides.resolve();
		assert_eq!(config.particle_count, 60);
	}
}
