//! starfield-canvas: the interactive starfield background for the agency site.
//!
//! This crate provides a WASM-based canvas component that paints an animated
//! star field behind the page: pointer-reactive constellation lines, a
//! velocity-derived comet trail, and independently scheduled shooting stars.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::starfield::{StarfieldCanvas, StarfieldConfig, Theme};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("starfield: logging initialized");
}

/// Load engine configuration from a script element with id="starfield-config".
/// Expected format: JSON like { "theme": "aurora", "reduced_motion": false }
fn load_config() -> Option<StarfieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("starfield-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<StarfieldConfig>(&json_text) {
		Ok(config) => {
			info!(
				"starfield: loaded config (theme: {:?}, reduced_motion: {})",
				config.theme, config.reduced_motion
			);
			Some(config)
		}
		Err(e) => {
			warn!("starfield: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads page config from the DOM and renders the starfield behind a demo hero.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Starfield" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="starfield-hero">
			<StarfieldCanvas config=config />
			<div class="starfield-overlay">
				<h1>"Starfield"</h1>
				<p class="subtitle">"Move the pointer to sketch constellations. Keep an eye out for shooting stars."</p>
			</div>
		</div>
	}
}
