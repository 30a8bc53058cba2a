//! Constellation edges: transient connections between stars near the pointer.

use super::field::Star;
use super::pointer::PointerTracker;

/// Radius (percent units) of the candidate disc around the pointer.
pub const CONNECTION_RADIUS: f64 = 12.0;

/// Maximum pair distance that still links two candidates.
pub const LINK_RANGE: f64 = CONNECTION_RADIUS * 0.8;

/// Hard cap on emitted edges per recomputation.
pub const MAX_EDGES: usize = 8;

/// A frame-scoped connection between two stars, by id.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
	pub a: usize,
	pub b: usize,
	/// Inverse-distance opacity in `[0, 0.6]`.
	pub opacity: f64,
}

/// Recompute the edge set for the current pointer position.
///
/// An explicit pure function: callers invoke it after every pointer or
/// field update, nothing is memoized. An off-stage pointer produces an
/// empty set without scanning the field. Candidates are the stars within
/// [`CONNECTION_RADIUS`] of the pointer, so pointer movement never inflates
/// the pair scan beyond the local disc; every unordered candidate pair
/// closer than [`LINK_RANGE`] emits an edge until [`MAX_EDGES`] is reached.
/// The cap truncates in candidate iteration order, not by distance rank.
pub fn recompute_edges(stars: &[Star], pointer: &PointerTracker) -> Vec<Edge> {
	if !pointer.on_stage() {
		return Vec::new();
	}

	let nearby: Vec<&Star> = stars
		.iter()
		.filter(|star| {
			let (dx, dy) = (star.x - pointer.x, star.y - pointer.y);
			(dx * dx + dy * dy).sqrt() < CONNECTION_RADIUS
		})
		.collect();

	let mut edges = Vec::new();
	'scan: for (i, a) in nearby.iter().enumerate() {
		for b in &nearby[i + 1..] {
			let (dx, dy) = (a.x - b.x, a.y - b.y);
			let dist = (dx * dx + dy * dy).sqrt();
			if dist < LINK_RANGE {
				edges.push(Edge {
					a: a.id,
					b: b.id,
					opacity: (1.0 - dist / LINK_RANGE).max(0.0) * 0.6,
				});
				if edges.len() >= MAX_EDGES {
					break 'scan;
				}
			}
		}
	}
	edges
}
