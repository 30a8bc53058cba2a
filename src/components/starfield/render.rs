//! Canvas painting for the starfield.
//!
//! Layers back to front: constellation edges, the star field, the comet
//! trail, the cursor glow, then shooting-star streaks. The canvas is
//! cleared each frame; the page supplies its own background.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::shooting::ShootingStar;
use super::state::StarfieldState;
use super::theme::Theme;

/// Scroll parallax factor; render offset is `scroll_y * depth * PARALLAX`.
const PARALLAX: f64 = 0.15;

/// Paints the complete scene for one frame.
pub fn render(
	state: &StarfieldState,
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
	reduced_motion: bool,
) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);

	draw_edges(state, ctx, theme);
	draw_stars(state, ctx, theme, reduced_motion);
	draw_trail(state, ctx, theme);
	draw_cursor_glow(state, ctx, theme);

	for star in state.shooting.stars() {
		draw_shooting_star(state, ctx, theme, star);
	}
}

fn draw_edges(state: &StarfieldState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	if state.edges.is_empty() {
		return;
	}
	let stars = &state.field.stars;

	for edge in &state.edges {
		// Ids index the generation the edges were computed against; a
		// mismatch can only mean a torn update, so skip rather than panic.
		let (Some(a), Some(b)) = (stars.get(edge.a), stars.get(edge.b)) else {
			continue;
		};
		let (x1, y1) = (
			a.x / 100.0 * state.width,
			a.y / 100.0 * state.height + state.scroll_y * a.depth * PARALLAX,
		);
		let (x2, y2) = (
			b.x / 100.0 * state.width,
			b.y / 100.0 * state.height + state.scroll_y * b.depth * PARALLAX,
		);

		ctx.set_stroke_style_str(
			&theme
				.edge
				.glow_color
				.with_alpha(theme.edge.glow_color.a * edge.opacity)
				.to_css(),
		);
		ctx.set_line_width(theme.edge.glow_width);
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();

		let gradient = ctx.create_linear_gradient(x1, y1, x2, y2);
		gradient
			.add_color_stop(0.0, &theme.edge.color_a.with_alpha(edge.opacity).to_css())
			.unwrap();
		gradient
			.add_color_stop(1.0, &theme.edge.color_b.with_alpha(edge.opacity).to_css())
			.unwrap();
		#[allow(deprecated)]
		ctx.set_stroke_style(&gradient);
		ctx.set_line_width(theme.edge.width);
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
	}
}

fn draw_stars(
	state: &StarfieldState,
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
	reduced_motion: bool,
) {
	for star in &state.field.stars {
		let x = star.x / 100.0 * state.width;
		let y = star.y / 100.0 * state.height + state.scroll_y * star.depth * PARALLAX;

		if star.near_pointer {
			// Palette swap, scale up, twinkle suppressed while highlighted.
			let radius = star.size / 2.0 * theme.star.near_scale;
			let glow_radius = radius * 4.0;
			let gradient = ctx
				.create_radial_gradient(x, y, 0.0, x, y, glow_radius)
				.unwrap();
			gradient
				.add_color_stop(0.0, &theme.star.glow_color.to_css())
				.unwrap();
			gradient.add_color_stop(1.0, "rgba(0, 0, 0, 0)").unwrap();
			ctx.begin_path();
			let _ = ctx.arc(x, y, glow_radius, 0.0, PI * 2.0);
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
			ctx.fill();

			ctx.set_fill_style_str(&theme.star.near_color.to_css());
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius, 0.0, PI * 2.0);
			ctx.fill();
		} else {
			let alpha = if reduced_motion {
				star.opacity
			} else {
				star.twinkle(state.flow_time)
			};
			ctx.set_fill_style_str(&theme.star.color.with_alpha(alpha).to_css());
			ctx.begin_path();
			let _ = ctx.arc(x, y, star.size / 2.0, 0.0, PI * 2.0);
			ctx.fill();
		}
	}
}

fn draw_trail(state: &StarfieldState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let pointer = &state.pointer;
	if !pointer.trail_active {
		return;
	}

	let (x, y) = (
		pointer.x / 100.0 * state.width,
		pointer.y / 100.0 * state.height,
	);
	let heading = pointer.angle.to_radians();
	let length = pointer.velocity * theme.trail.length_per_velocity;
	let (tail_x, tail_y) = (x - heading.cos() * length, y - heading.sin() * length);

	let gradient = ctx.create_linear_gradient(x, y, tail_x, tail_y);
	gradient
		.add_color_stop(0.0, &theme.trail.color.to_css())
		.unwrap();
	gradient
		.add_color_stop(1.0, &theme.trail.color.with_alpha(0.0).to_css())
		.unwrap();
	#[allow(deprecated)]
	ctx.set_stroke_style(&gradient);
	ctx.set_line_width(theme.trail.width);
	ctx.set_line_cap("round");
	ctx.begin_path();
	ctx.move_to(x, y);
	ctx.line_to(tail_x, tail_y);
	ctx.stroke();
}

fn draw_cursor_glow(state: &StarfieldState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let pointer = &state.pointer;
	if !pointer.on_stage() {
		return;
	}

	let (x, y) = (
		pointer.x / 100.0 * state.width,
		pointer.y / 100.0 * state.height,
	);
	let alpha = if pointer.trail_active {
		theme.cursor.active_alpha
	} else {
		theme.cursor.idle_alpha
	};

	let gradient = ctx
		.create_radial_gradient(x, y, 0.0, x, y, theme.cursor.radius)
		.unwrap();
	gradient
		.add_color_stop(0.0, &theme.cursor.color.with_alpha(alpha).to_css())
		.unwrap();
	gradient
		.add_color_stop(1.0, &theme.cursor.color.with_alpha(0.0).to_css())
		.unwrap();
	ctx.begin_path();
	let _ = ctx.arc(x, y, theme.cursor.radius, 0.0, PI * 2.0);
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill();
}

fn draw_shooting_star(
	state: &StarfieldState,
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
	star: &ShootingStar,
) {
	let progress = star.progress(state.flow_time);
	// Ease in over the first half of the flight, out over the second. The
	// retirement grace period renders at zero alpha and is skipped here.
	let alpha = (progress * PI).sin();
	if alpha <= 0.0 {
		return;
	}

	let heading = star.angle.to_radians();
	let travel = star.length * 2.0;
	let head_x = star.start_x / 100.0 * state.width + heading.cos() * travel * progress;
	let head_y = star.start_y / 100.0 * state.height + heading.sin() * travel * progress;
	let (tail_x, tail_y) = (
		head_x - heading.cos() * star.length,
		head_y - heading.sin() * star.length,
	);

	let gradient = ctx.create_linear_gradient(head_x, head_y, tail_x, tail_y);
	gradient
		.add_color_stop(0.0, &theme.shooting.color.with_alpha(alpha).to_css())
		.unwrap();
	gradient
		.add_color_stop(1.0, &theme.shooting.color.with_alpha(0.0).to_css())
		.unwrap();
	#[allow(deprecated)]
	ctx.set_stroke_style(&gradient);
	ctx.set_line_width(theme.shooting.width);
	ctx.set_line_cap("round");
	ctx.begin_path();
	ctx.move_to(head_x, head_y);
	ctx.line_to(tail_x, tail_y);
	ctx.stroke();

	ctx.set_fill_style_str(&theme.shooting.color.with_alpha(alpha).to_css());
	ctx.begin_path();
	let _ = ctx.arc(head_x, head_y, theme.shooting.width * 0.75, 0.0, PI * 2.0);
	ctx.fill();
}
