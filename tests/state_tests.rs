// Host-side end-to-end tests over the aggregate engine state. The crate
// itself only runs in a browser, so the pure engine modules are included
// directly.

#![allow(dead_code)]
// Test target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

#[path = "../src/components/starfield/field.rs"]
mod field;
#[path = "../src/components/starfield/pointer.rs"]
mod pointer;
#[path = "../src/components/starfield/constellation.rs"]
mod constellation;
#[path = "../src/components/starfield/shooting.rs"]
mod shooting;
#[path = "../src/components/starfield/state.rs"]
mod state;

use state::StarfieldState;

#[test]
fn viewport_width_picks_the_population() {
	assert_eq!(StarfieldState::new(500.0, 800.0, 1).field.stars.len(), 60);
	assert_eq!(StarfieldState::new(800.0, 600.0, 1).field.stars.len(), 100);
	assert_eq!(StarfieldState::new(1440.0, 900.0, 1).field.stars.len(), 150);
}

#[test]
fn pointer_move_drives_kinematics_proximity_and_edges() {
	let mut engine = StarfieldState::new(500.0, 800.0, 2);
	engine.pointer_moved(50.0, 50.0);
	engine.pointer_moved(52.0, 51.0);

	assert!(engine.pointer.trail_active);
	assert!((engine.pointer.velocity - 5.0_f64.sqrt()).abs() < 1e-9);
	assert!((engine.pointer.angle - 26.565051).abs() < 1e-3);

	// Proximity flags and the edge set were both refreshed in the same call.
	for star in &engine.field.stars {
		let (dx, dy) = (star.x - 52.0, star.y - 51.0);
		assert_eq!(star.near_pointer, (dx * dx + dy * dy).sqrt() < field::NEAR_RADIUS);
	}
	let fresh = constellation::recompute_edges(&engine.field.stars, &engine.pointer);
	assert_eq!(engine.edges, fresh);
}

#[test]
fn pointer_left_clears_trail_flags_and_edges() {
	let mut engine = StarfieldState::new(500.0, 800.0, 3);
	engine.pointer_moved(50.0, 50.0);
	engine.pointer_moved(55.0, 52.0);
	engine.pointer_left();

	assert!(!engine.pointer.on_stage());
	assert!(!engine.pointer.trail_active);
	assert_eq!(engine.pointer.velocity, 0.0);
	assert!(engine.edges.is_empty());
	assert!(engine.field.stars.iter().all(|star| !star.near_pointer));
}

#[test]
fn resize_regenerates_the_field_atomically() {
	let mut engine = StarfieldState::new(500.0, 800.0, 4);
	engine.pointer_moved(50.0, 50.0);
	engine.resize(1280.0, 720.0);

	assert_eq!((engine.width, engine.height), (1280.0, 720.0));
	assert_eq!(engine.field.stars.len(), 150);

	// Edges were recomputed against the new generation: every id resolves
	// and the set matches a fresh recomputation.
	let count = engine.field.stars.len();
	for edge in &engine.edges {
		assert!(edge.a < count && edge.b < count);
	}
	let fresh = constellation::recompute_edges(&engine.field.stars, &engine.pointer);
	assert_eq!(engine.edges, fresh);
}

#[test]
fn scroll_offset_is_captured() {
	let mut engine = StarfieldState::new(500.0, 800.0, 5);
	engine.scrolled(240.0);
	assert_eq!(engine.scroll_y, 240.0);
	engine.scrolled(0.0);
	assert_eq!(engine.scroll_y, 0.0);
}

#[test]
fn clock_accumulates_ticks() {
	let mut engine = StarfieldState::new(500.0, 800.0, 6);
	for _ in 0..3 {
		engine.tick(0.016);
	}
	assert!((engine.flow_time - 0.048).abs() < 1e-12);
}

#[test]
fn shooting_star_lifecycle_round_trip() {
	let mut engine = StarfieldState::new(500.0, 800.0, 7);
	engine.tick(2.0);

	let star = engine.spawn_shooting_star();
	assert_eq!(engine.shooting.len(), 1);
	assert_eq!(star.spawned_at, engine.flow_time);

	assert!(engine.retire_shooting_star(star.id));
	assert!(engine.shooting.is_empty());
	assert!(!engine.retire_shooting_star(star.id));
}

#[test]
fn probabilistic_spawn_skips_some_ticks() {
	let mut engine = StarfieldState::new(500.0, 800.0, 8);
	let spawned = (0..200)
		.filter(|_| engine.try_spawn_shooting_star().is_some())
		.count();

	assert!(spawned > 0 && spawned < 200, "implausible spawn count: {spawned}");
	assert_eq!(engine.shooting.len(), spawned);
}
