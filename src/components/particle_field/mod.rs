//! Ambient particle field background component.
//!
//! Renders a decorative, full-viewport particle animation on an HTML canvas:
//! - Fixed-size pool of dashes or discs drifting upward
//! - Pointer proximity force (repel or attract) with linear falloff
//! - Horizontal wraparound, vertical wrap-or-respawn boundary handling
//! - Three compiled-in visual presets, overridable from the host page
//!
//! # Example
//!
//! ```ignore
//! use particle_field::{FieldConfig, ParticleField};
//!
//! view! { <ParticleField config=FieldConfig::motes() fullscreen=true /> }
//! ```

mod component;
pub mod config;
mod field;
mod particle;
mod render;
mod rng;
pub mod theme;

pub use component::ParticleField;
pub use config::{FieldConfig, FieldOverrides, ForceDirection, ShapeKind, WaveConfig, WrapMode};
pub use theme::{Color, Palette};
