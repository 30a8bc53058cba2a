//! The background star field: generation, regeneration, and pointer proximity.

use rand::Rng;

/// Pointer proximity radius in percent-of-viewport units. A star closer than
/// this to the pointer is highlighted (strictly less-than).
pub const NEAR_RADIUS: f64 = 18.0;

/// Viewport-width breakpoints (px) for the population table.
const BREAKPOINT_SM: f64 = 640.0;
const BREAKPOINT_LG: f64 = 1024.0;

/// Star population for a given viewport width.
///
/// The count is a pure function of the width bucket, so repeated
/// regeneration at the same width always yields the same population.
pub fn star_count(viewport_width: f64) -> usize {
	if viewport_width < BREAKPOINT_SM {
		60
	} else if viewport_width < BREAKPOINT_LG {
		100
	} else {
		150
	}
}

/// A single background star.
///
/// Position is normalized to `[0, 100]` percent-of-viewport space so the
/// field survives resizes without per-star rescaling; `size` and `opacity`
/// derive deterministically from `depth`, which also drives parallax.
#[derive(Clone, Debug)]
pub struct Star {
	/// Index into the current generation. Stable until the next regeneration.
	pub id: usize,
	pub x: f64,
	pub y: f64,
	/// Depth factor in `(0.1, 1.0)`; deeper stars are larger and brighter.
	pub depth: f64,
	/// Render diameter in px, `depth * 3 + 1`.
	pub size: f64,
	/// Base opacity, `depth * 0.5 + 0.3`.
	pub opacity: f64,
	/// Twinkle period in seconds, drawn once from `[2, 5]`.
	pub twinkle_speed: f64,
	/// Twinkle phase offset in seconds, drawn once from `[0, 5]`.
	pub twinkle_delay: f64,
	/// Recomputed on every pointer update; never persisted across frames.
	pub near_pointer: bool,
}

impl Star {
	/// Twinkle-modulated opacity at `time` seconds on the engine clock.
	///
	/// Oscillates between 60% and 100% of the base opacity. Highlighted
	/// stars skip this and render at full strength.
	pub fn twinkle(&self, time: f64) -> f64 {
		let phase = std::f64::consts::TAU * (time - self.twinkle_delay) / self.twinkle_speed;
		self.opacity * ((phase.sin() * 0.5 + 0.5) * 0.4 + 0.6)
	}
}

/// Owns the canonical star set for one generation.
///
/// The field is the sole mutator of its stars: consumers read the slice and
/// may cache per-id derived values safely until the next [`StarField::regenerate`].
pub struct StarField {
	pub stars: Vec<Star>,
}

impl StarField {
	/// Generate a fresh field sized for `viewport_width`.
	pub fn new<R: Rng>(viewport_width: f64, rng: &mut R) -> Self {
		Self {
			stars: generate(star_count(viewport_width), rng),
		}
	}

	/// Discard and recreate the whole set for a new viewport width.
	///
	/// Star identities do not survive a regeneration; the replacement is
	/// complete before this returns, so the next proximity or edge pass
	/// always reads a consistent generation.
	pub fn regenerate<R: Rng>(&mut self, viewport_width: f64, rng: &mut R) {
		self.stars = generate(star_count(viewport_width), rng);
	}

	/// Refresh every star's `near_pointer` flag against the pointer at
	/// `(px, py)` percent coordinates.
	///
	/// An O(n) scan over at most 150 stars. The off-stage sentinel sits far
	/// outside `[0, 100]`, so it naturally clears every flag.
	pub fn update_proximity(&mut self, px: f64, py: f64) {
		for star in &mut self.stars {
			let (dx, dy) = (star.x - px, star.y - py);
			star.near_pointer = (dx * dx + dy * dy).sqrt() < NEAR_RADIUS;
		}
	}
}

fn generate<R: Rng>(count: usize, rng: &mut R) -> Vec<Star> {
	(0..count)
		.map(|id| {
			let depth = rng.gen_range(0.1..1.0);
			Star {
				id,
				x: rng.gen_range(0.0..100.0),
				y: rng.gen_range(0.0..100.0),
				depth,
				size: depth * 3.0 + 1.0,
				opacity: depth * 0.5 + 0.3,
				twinkle_speed: rng.gen_range(2.0..5.0),
				twinkle_delay: rng.gen_range(0.0..5.0),
				near_pointer: false,
			}
		})
		.collect()
}
