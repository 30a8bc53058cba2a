//! Shooting-star events: randomized draws and the live set.
//!
//! Timer plumbing lives in the scheduler; this module owns the event data
//! and the spawn/retire bookkeeping so the cadence stays testable off the
//! browser.

use rand::Rng;

/// Delay before the first, unconditional spawn (ms).
pub const INITIAL_DELAY_MS: i32 = 2_000;

/// Period of the repeating spawn timer (ms).
pub const SPAWN_PERIOD_MS: i32 = 4_000;

/// Probability that a periodic tick spawns an event; skipped ticks keep
/// the cadence irregular.
pub const SPAWN_CHANCE: f64 = 0.7;

/// Extra seconds past `duration` before an event is retired.
pub const RETIRE_GRACE_SECS: f64 = 0.5;

/// One time-boxed diagonal streak, unrelated to pointer input.
#[derive(Clone, Debug)]
pub struct ShootingStar {
	pub id: u64,
	/// Spawn abscissa in percent space, drawn from `[20, 80]`.
	pub start_x: f64,
	/// Spawn ordinate in percent space, drawn from `[0, 30]` (upper-middle).
	pub start_y: f64,
	/// Travel heading in degrees, drawn from `[30, 60]`.
	pub angle: f64,
	/// Streak length in px, drawn from `[80, 180]`.
	pub length: f64,
	/// Active lifetime in seconds, drawn from `[0.8, 1.8]`.
	pub duration: f64,
	/// Engine-clock stamp taken at spawn; drives render progress.
	pub spawned_at: f64,
}

impl ShootingStar {
	/// Seconds after spawn at which the retirement timer fires.
	pub fn retire_after(&self) -> f64 {
		self.duration + RETIRE_GRACE_SECS
	}

	/// Normalized travel progress at `time`, clamped to `[0, 1]`.
	pub fn progress(&self, time: f64) -> f64 {
		((time - self.spawned_at) / self.duration).clamp(0.0, 1.0)
	}
}

/// Decide whether a periodic tick spawns.
pub fn roll_spawn<R: Rng>(rng: &mut R) -> bool {
	rng.gen_bool(SPAWN_CHANCE)
}

/// The live shooting-star set. Spawning and retiring are the only mutations.
#[derive(Default)]
pub struct ShootingField {
	stars: Vec<ShootingStar>,
	next_id: u64,
}

impl ShootingField {
	/// Empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Draw a new event, add it to the live set, and return a copy for the
	/// caller to schedule retirement against.
	pub fn spawn<R: Rng>(&mut self, now: f64, rng: &mut R) -> ShootingStar {
		let star = ShootingStar {
			id: self.next_id,
			start_x: rng.gen_range(20.0..80.0),
			start_y: rng.gen_range(0.0..30.0),
			angle: rng.gen_range(30.0..60.0),
			length: rng.gen_range(80.0..180.0),
			duration: rng.gen_range(0.8..1.8),
			spawned_at: now,
		};
		self.next_id += 1;
		self.stars.push(star.clone());
		star
	}

	/// Remove an event by identity. Returns whether it was still live.
	pub fn retire(&mut self, id: u64) -> bool {
		let before = self.stars.len();
		self.stars.retain(|star| star.id != id);
		self.stars.len() != before
	}

	/// Events currently rendering.
	pub fn stars(&self) -> &[ShootingStar] {
		&self.stars
	}

	/// Number of live events.
	pub fn len(&self) -> usize {
		self.stars.len()
	}

	/// True when nothing is live.
	pub fn is_empty(&self) -> bool {
		self.stars.is_empty()
	}
}
