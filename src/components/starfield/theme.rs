//! Visual theming for the starfield.

/// RGBA color representation.
#[derive(Clone, Copy, Debug)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Linear interpolation between two colors
	pub fn lerp(self, other: Color, t: f64) -> Self {
		let t = t.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * (1.0 - t) + other.r as f64 * t) as u8,
			g: (self.g as f64 * (1.0 - t) + other.g as f64 * t) as u8,
			b: (self.b as f64 * (1.0 - t) + other.b as f64 * t) as u8,
			a: self.a * (1.0 - t) + other.a * t,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Star dot styling.
#[derive(Clone, Debug)]
pub struct StarStyle {
	/// Base dot color; per-star opacity and twinkle modulate its alpha.
	pub color: Color,
	/// Replacement color while the star is near the pointer.
	pub near_color: Color,
	/// Glow gradient center for highlighted stars.
	pub glow_color: Color,
	/// Radius multiplier applied while highlighted.
	pub near_scale: f64,
}

/// Constellation line styling. The stroke is a gradient from `color_a`
/// to `color_b`; the glow pass uses a wider, fainter stroke.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	pub color_a: Color,
	pub color_b: Color,
	pub glow_color: Color,
	pub width: f64,
	pub glow_width: f64,
}

/// Comet trail styling.
#[derive(Clone, Debug)]
pub struct TrailStyle {
	pub color: Color,
	pub width: f64,
	/// Px of streak per percent-unit of pointer velocity.
	pub length_per_velocity: f64,
}

/// Cursor glow styling.
#[derive(Clone, Debug)]
pub struct CursorStyle {
	pub color: Color,
	/// Glow radius in px.
	pub radius: f64,
	/// Alpha while the trail is inactive.
	pub idle_alpha: f64,
	/// Alpha while the trail is active.
	pub active_alpha: f64,
}

/// Shooting-star streak styling.
#[derive(Clone, Debug)]
pub struct ShootingStyle {
	pub color: Color,
	pub width: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub star: StarStyle,
	pub edge: EdgeStyle,
	pub trail: TrailStyle,
	pub cursor: CursorStyle,
	pub shooting: ShootingStyle,
}

impl Theme {
	/// Cool indigo-and-cyan night sky (default).
	pub fn indigo() -> Self {
		Self {
			name: "indigo",
			star: StarStyle {
				color: Color::rgb(226, 232, 240),
				near_color: Color::rgb(103, 232, 249),
				glow_color: Color::rgba(103, 232, 249, 0.5),
				near_scale: 1.5,
			},
			edge: EdgeStyle {
				color_a: Color::rgb(129, 140, 248),
				color_b: Color::rgb(103, 232, 249),
				glow_color: Color::rgba(129, 140, 248, 0.35),
				width: 1.0,
				glow_width: 3.0,
			},
			trail: TrailStyle {
				color: Color::rgba(165, 180, 252, 0.8),
				width: 2.5,
				length_per_velocity: 4.0,
			},
			cursor: CursorStyle {
				color: Color::rgb(129, 140, 248),
				radius: 40.0,
				idle_alpha: 0.2,
				active_alpha: 0.45,
			},
			shooting: ShootingStyle {
				color: Color::rgb(240, 249, 255),
				width: 2.0,
			},
		}
	}

	/// Teal-and-violet northern lights.
	pub fn aurora() -> Self {
		Self {
			name: "aurora",
			star: StarStyle {
				color: Color::rgb(220, 240, 235),
				near_color: Color::rgb(134, 239, 172),
				glow_color: Color::rgba(134, 239, 172, 0.5),
				near_scale: 1.5,
			},
			edge: EdgeStyle {
				color_a: Color::rgb(94, 234, 212),
				color_b: Color::rgb(167, 139, 250),
				glow_color: Color::rgba(94, 234, 212, 0.3),
				width: 1.0,
				glow_width: 3.0,
			},
			trail: TrailStyle {
				color: Color::rgba(153, 246, 228, 0.8),
				width: 2.5,
				length_per_velocity: 4.0,
			},
			cursor: CursorStyle {
				color: Color::rgb(94, 234, 212),
				radius: 40.0,
				idle_alpha: 0.2,
				active_alpha: 0.45,
			},
			shooting: ShootingStyle {
				color: Color::rgb(236, 253, 245),
				width: 2.0,
			},
		}
	}

	/// Warm amber dusk.
	pub fn ember() -> Self {
		Self {
			name: "ember",
			star: StarStyle {
				color: Color::rgb(254, 243, 199),
				near_color: Color::rgb(251, 191, 36),
				glow_color: Color::rgba(251, 191, 36, 0.5),
				near_scale: 1.5,
			},
			edge: EdgeStyle {
				color_a: Color::rgb(251, 146, 60),
				color_b: Color::rgb(251, 191, 36),
				glow_color: Color::rgba(251, 146, 60, 0.3),
				width: 1.0,
				glow_width: 3.0,
			},
			trail: TrailStyle {
				color: Color::rgba(253, 186, 116, 0.8),
				width: 2.5,
				length_per_velocity: 4.0,
			},
			cursor: CursorStyle {
				color: Color::rgb(251, 146, 60),
				radius: 40.0,
				idle_alpha: 0.2,
				active_alpha: 0.45,
			},
			shooting: ShootingStyle {
				color: Color::rgb(255, 251, 235),
				width: 2.0,
			},
		}
	}

	/// Look up a preset by config name.
	pub fn by_name(name: &str) -> Option<Self> {
		match name {
			"indigo" => Some(Self::indigo()),
			"aurora" => Some(Self::aurora()),
			"ember" => Some(Self::ember()),
			_ => None,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::indigo()
	}
}
