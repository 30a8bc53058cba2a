// Host-side tests for the particle store. The crate itself only runs in a
// browser, so the pure engine modules are included directly.

#![allow(dead_code)]
// Test target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

#[path = "../src/components/starfield/field.rs"]
mod field;

use field::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn star_at(id: usize, x: f64, y: f64) -> Star {
	Star {
		id,
		x,
		y,
		depth: 0.5,
		size: 2.5,
		opacity: 0.55,
		twinkle_speed: 3.0,
		twinkle_delay: 1.0,
		near_pointer: false,
	}
}

#[test]
fn star_count_matches_breakpoints() {
	assert_eq!(star_count(0.0), 60);
	assert_eq!(star_count(500.0), 60);
	assert_eq!(star_count(639.9), 60);
	assert_eq!(star_count(640.0), 100);
	assert_eq!(star_count(1023.9), 100);
	assert_eq!(star_count(1024.0), 150);
	assert_eq!(star_count(2560.0), 150);
}

#[test]
fn population_is_stable_across_regeneration() {
	let mut rng = SmallRng::seed_from_u64(1);
	let mut field = StarField::new(500.0, &mut rng);
	assert_eq!(field.stars.len(), 60);

	for _ in 0..5 {
		field.regenerate(500.0, &mut rng);
		assert_eq!(field.stars.len(), 60);
	}

	field.regenerate(1280.0, &mut rng);
	assert_eq!(field.stars.len(), 150);
}

#[test]
fn attributes_derive_from_depth() {
	let mut rng = SmallRng::seed_from_u64(2);
	let field = StarField::new(1920.0, &mut rng);
	assert_eq!(field.stars.len(), 150);

	for (i, star) in field.stars.iter().enumerate() {
		assert_eq!(star.id, i);
		assert!((0.0..100.0).contains(&star.x));
		assert!((0.0..100.0).contains(&star.y));
		assert!((0.1..1.0).contains(&star.depth));
		assert!((star.size - (star.depth * 3.0 + 1.0)).abs() < 1e-12);
		assert!((star.opacity - (star.depth * 0.5 + 0.3)).abs() < 1e-12);
		assert!((2.0..5.0).contains(&star.twinkle_speed));
		assert!((0.0..5.0).contains(&star.twinkle_delay));
		assert!(!star.near_pointer);
	}
}

#[test]
fn proximity_boundary_is_exclusive_at_radius() {
	let mut field = StarField {
		stars: vec![
			// exactly NEAR_RADIUS away from the pointer
			star_at(0, 50.0 + NEAR_RADIUS, 50.0),
			// just inside
			star_at(1, 50.0 + NEAR_RADIUS - 0.01, 50.0),
			// on the pointer
			star_at(2, 50.0, 50.0),
		],
	};
	field.update_proximity(50.0, 50.0);

	assert!(!field.stars[0].near_pointer);
	assert!(field.stars[1].near_pointer);
	assert!(field.stars[2].near_pointer);
}

#[test]
fn off_stage_sentinel_clears_every_flag() {
	let mut rng = SmallRng::seed_from_u64(3);
	let mut field = StarField::new(800.0, &mut rng);
	field.update_proximity(50.0, 50.0);
	field.update_proximity(-100.0, -100.0);
	assert!(field.stars.iter().all(|star| !star.near_pointer));
}

#[test]
fn twinkle_stays_within_the_opacity_band() {
	let star = star_at(0, 10.0, 10.0);
	for step in 0..100 {
		let alpha = star.twinkle(step as f64 * 0.1);
		assert!(alpha >= star.opacity * 0.6 - 1e-12);
		assert!(alpha <= star.opacity + 1e-12);
	}
}
