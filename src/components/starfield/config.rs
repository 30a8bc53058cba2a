//! Page-embedded configuration for the starfield component.

use serde::Deserialize;

/// Optional engine configuration the host page embeds as JSON.
///
/// Every field has a default, so an empty object (or no config element at
/// all) yields the stock behavior.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
	/// Named theme preset: `"indigo"`, `"aurora"`, or `"ember"`.
	pub theme: Option<String>,
	/// Disable shooting stars and twinkle for motion-sensitive visitors.
	/// The hosting site's accessibility panel re-renders with this set.
	pub reduced_motion: bool,
}
