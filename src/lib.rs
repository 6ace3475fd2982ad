//! particle-field: ambient canvas particle background for Leptos sites.
//!
//! This crate provides a WASM-based decorative animation component that
//! renders a full-viewport particle field behind the page content, with
//! pointer-proximity forces and configurable visual presets.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_field::{
	FieldConfig, FieldOverrides, ForceDirection, ParticleField, ShapeKind, WrapMode,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-field: logging initialized");
}

/// Load field configuration from a script element with id="field-config".
/// Expected format: JSON with { preset, particle_count, ... }, all optional.
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("field-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<FieldOverrides>(&json_text) {
		Ok(overrides) => {
			let config = overrides.resolve();
			info!(
				"particle-field: configured {} {:?} particles",
				config.particle_count, config.shape
			);
			Some(config)
		}
		Err(e) => {
			warn!("particle-field: failed to parse field config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads any page-provided config and renders the particle field behind a
/// minimal hero overlay.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="hero">
			<ParticleField config=config fullscreen=true />
			<div class="hero-overlay">
				<h1>"Hi, I build things."</h1>
				<p class="subtitle">"Move the pointer to stir the background."</p>
			</div>
		</div>
	}
}
