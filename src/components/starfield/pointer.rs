//! Pointer kinematics: converts raw samples into the comet-trail state.

/// Off-stage sentinel position, far outside the `[0, 100]` percent space.
pub const OFF_STAGE: (f64, f64) = (-100.0, -100.0);

/// Minimum per-sample velocity (percent units) that activates the trail.
pub const TRAIL_MIN_VELOCITY: f64 = 0.5;

/// Hard clamp on the stored velocity. Large jumps (tab switches, a
/// teleporting cursor) must not produce runaway trail lengths.
pub const TRAIL_MAX_VELOCITY: f64 = 30.0;

/// Live pointer position plus the velocity and heading derived for the trail.
#[derive(Clone, Debug)]
pub struct PointerTracker {
	pub x: f64,
	pub y: f64,
	pub prev_x: f64,
	pub prev_y: f64,
	/// Clamped magnitude of the last qualifying move, percent units per sample.
	pub velocity: f64,
	/// Heading of the last qualifying move, degrees.
	pub angle: f64,
	/// Whether the comet trail renders. Sticky: a stationary on-stage
	/// pointer keeps its last state; only an off-stage event clears it.
	pub trail_active: bool,
}

impl Default for PointerTracker {
	fn default() -> Self {
		Self {
			x: OFF_STAGE.0,
			y: OFF_STAGE.1,
			prev_x: OFF_STAGE.0,
			prev_y: OFF_STAGE.1,
			velocity: 0.0,
			angle: 0.0,
			trail_active: false,
		}
	}
}

impl PointerTracker {
	/// True while the pointer is on the interactive surface.
	pub fn on_stage(&self) -> bool {
		self.x > 0.0
	}

	/// Feed one pointer sample in percent coordinates.
	///
	/// The first sample after the sentinel only re-bases the position
	/// caches: a velocity derived against the sentinel would clamp a huge
	/// spurious magnitude into a one-frame trail flash.
	pub fn sample(&mut self, x: f64, y: f64) {
		if !self.on_stage() {
			(self.prev_x, self.prev_y) = (x, y);
			(self.x, self.y) = (x, y);
			return;
		}

		let (dx, dy) = (x - self.x, y - self.y);
		let velocity = (dx * dx + dy * dy).sqrt();
		if x > 0.0 && velocity > TRAIL_MIN_VELOCITY {
			self.trail_active = true;
			self.velocity = velocity.min(TRAIL_MAX_VELOCITY);
			self.angle = dy.atan2(dx).to_degrees();
		}

		(self.prev_x, self.prev_y) = (self.x, self.y);
		(self.x, self.y) = (x, y);
	}

	/// Pointer left the surface (mouse-leave or touch end).
	pub fn leave(&mut self) {
		(self.x, self.y) = OFF_STAGE;
		(self.prev_x, self.prev_y) = OFF_STAGE;
		self.velocity = 0.0;
		self.trail_active = false;
	}
}
