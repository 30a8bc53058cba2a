// Host-side tests for the constellation edge builder. The crate itself only
// runs in a browser, so the pure engine modules are included directly.

#![allow(dead_code)]
// Test target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

#[path = "../src/components/starfield/field.rs"]
mod field;
#[path = "../src/components/starfield/pointer.rs"]
mod pointer;
#[path = "../src/components/starfield/constellation.rs"]
mod constellation;

use constellation::*;
use field::Star;
use pointer::PointerTracker;

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

fn pointer_at(x: f64, y: f64) -> PointerTracker {
	let mut tracker = PointerTracker::default();
	tracker.sample(x, y);
	tracker
}

#[test]
fn off_stage_pointer_yields_no_edges() {
	let stars = vec![
		star_at(0, 50.0, 50.0),
		star_at(1, 51.0, 51.0),
		star_at(2, 52.0, 50.0),
	];
	let edges = recompute_edges(&stars, &PointerTracker::default());
	assert!(edges.is_empty());
}

#[test]
fn clustered_triple_links_every_pair() {
	let stars = vec![
		star_at(0, 50.0, 50.0),
		star_at(1, 51.0, 51.0),
		star_at(2, 52.0, 50.0),
	];
	let edges = recompute_edges(&stars, &pointer_at(50.0, 50.0));
	assert_eq!(edges.len(), 3);
	for edge in &edges {
		assert!(edge.opacity > 0.0 && edge.opacity <= 0.6);
	}
}

#[test]
fn edge_count_is_capped() {
	// C(6, 2) = 15 candidate pairs, truncated at the cap.
	let stars: Vec<Star> = (0..6)
		.map(|i| star_at(i, 50.0 + (i % 3) as f64 * 0.5, 50.0 + (i / 3) as f64 * 0.5))
		.collect();
	let edges = recompute_edges(&stars, &pointer_at(50.0, 50.0));
	assert_eq!(edges.len(), MAX_EDGES);
}

#[test]
fn opacity_follows_inverse_distance() {
	// Pair distance 4.8 is half of LINK_RANGE: opacity = 0.5 * 0.6.
	let stars = vec![star_at(0, 50.0, 50.0), star_at(1, 54.8, 50.0)];
	let edges = recompute_edges(&stars, &pointer_at(50.0, 50.0));
	assert_eq!(edges.len(), 1);
	assert_eq!((edges[0].a, edges[0].b), (0, 1));
	assert!((edges[0].opacity - 0.3).abs() < 1e-9);
}

#[test]
fn distant_pair_inside_the_disc_does_not_link() {
	// Both stars are 5 units from the pointer, but 10 apart (> LINK_RANGE).
	let stars = vec![star_at(0, 45.0, 50.0), star_at(1, 55.0, 50.0)];
	let edges = recompute_edges(&stars, &pointer_at(50.0, 50.0));
	assert!(edges.is_empty());
}

#[test]
fn stars_outside_the_disc_are_not_candidates() {
	// The second star is 20 units from the pointer; a lone candidate has
	// nothing to pair with.
	let stars = vec![star_at(0, 50.0, 50.0), star_at(1, 70.0, 50.0)];
	let edges = recompute_edges(&stars, &pointer_at(50.0, 50.0));
	assert!(edges.is_empty());
}

#[test]
fn out_of_range_pointer_coordinates_are_tolerated() {
	let stars = vec![star_at(0, 50.0, 50.0), star_at(1, 51.0, 50.0)];
	assert!(recompute_edges(&stars, &pointer_at(500.0, 300.0)).is_empty());
	assert!(recompute_edges(&stars, &pointer_at(-5.0, 50.0)).is_empty());
}
