//! Aggregate engine state: the single writer behind the canvas.
//!
//! Created once when the component mounts, then mutated only by the
//! component's event handlers and timers. Pointer, scroll, and resize
//! events call the entrypoints here; proximity flags and constellation
//! edges are recomputed eagerly inside those calls, never lazily.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::constellation::{self, Edge};
use super::field::StarField;
use super::pointer::PointerTracker;
use super::shooting::{self, ShootingField, ShootingStar};

/// Everything the renderer reads, owned in one place.
pub struct StarfieldState {
	pub field: StarField,
	pub pointer: PointerTracker,
	/// Current constellation edges; fully replaced on every recomputation.
	pub edges: Vec<Edge>,
	pub shooting: ShootingField,
	/// Viewport size in px.
	pub width: f64,
	pub height: f64,
	/// Page scroll offset in px, for the parallax term.
	pub scroll_y: f64,
	/// Engine clock in seconds, advanced by the animation loop.
	pub flow_time: f64,
	rng: SmallRng,
}

impl StarfieldState {
	/// Build the initial state for a viewport, seeding the RNG once.
	pub fn new(width: f64, height: f64, seed: u64) -> Self {
		let mut rng = SmallRng::seed_from_u64(seed);
		let field = StarField::new(width, &mut rng);
		Self {
			field,
			pointer: PointerTracker::default(),
			edges: Vec::new(),
			shooting: ShootingField::new(),
			width,
			height,
			scroll_y: 0.0,
			flow_time: 0.0,
			rng,
		}
	}

	/// Pointer or touch moved to `(x, y)` percent coordinates.
	pub fn pointer_moved(&mut self, x: f64, y: f64) {
		self.pointer.sample(x, y);
		self.field.update_proximity(self.pointer.x, self.pointer.y);
		self.edges = constellation::recompute_edges(&self.field.stars, &self.pointer);
	}

	/// Pointer left the surface (mouse-leave or touch end).
	pub fn pointer_left(&mut self) {
		self.pointer.leave();
		self.field.update_proximity(self.pointer.x, self.pointer.y);
		self.edges.clear();
	}

	/// Page scrolled; the offset feeds the per-star parallax term.
	pub fn scrolled(&mut self, scroll_y: f64) {
		self.scroll_y = scroll_y;
	}

	/// Viewport resized: regenerate the field wholesale for the new width.
	///
	/// The replacement set is consistent before this returns: proximity
	/// flags and edges are recomputed against the new generation so no
	/// later read can pair stale edge ids with fresh stars.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.field.regenerate(width, &mut self.rng);
		self.field.update_proximity(self.pointer.x, self.pointer.y);
		self.edges = constellation::recompute_edges(&self.field.stars, &self.pointer);
	}

	/// Advance the engine clock.
	pub fn tick(&mut self, dt: f64) {
		self.flow_time += dt;
	}

	/// Spawn a shooting star unconditionally (the initial one-shot timer).
	pub fn spawn_shooting_star(&mut self) -> ShootingStar {
		self.shooting.spawn(self.flow_time, &mut self.rng)
	}

	/// Periodic-tick spawn: rolls the 70% gate first.
	pub fn try_spawn_shooting_star(&mut self) -> Option<ShootingStar> {
		if shooting::roll_spawn(&mut self.rng) {
			Some(self.spawn_shooting_star())
		} else {
			None
		}
	}

	/// Retire a shooting star by identity.
	pub fn retire_shooting_star(&mut self, id: u64) -> bool {
		self.shooting.retire(id)
	}
}
