//! Visual theming for the topology diagram.
//!
//! One fixed light theme matching the published page. Concept and category
//! colors travel with the dataset; everything else lives here.

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

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
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

/// Boxed label styling: a rounded rectangle behind centered text.
#[derive(Clone, Debug)]
pub struct LabelBoxStyle {
	/// Estimated glyph width; the box spans `text.len() * char_width`.
	pub char_width: f64,
	pub height: f64,
	pub corner_radius: f64,
	pub fill: Color,
	pub stroke: Color,
	pub font: &'static str,
	pub text_color: Color,
}

/// Background reference grid.
#[derive(Clone, Debug)]
pub struct GridStyle {
	pub color: Color,
	pub line_width: f64,
}

/// Radial "embedding field" backdrop shown in continuous mode.
#[derive(Clone, Debug)]
pub struct BackdropStyle {
	pub center_color: Color,
	pub edge_color: Color,
}

/// Faint pairwise interpolation paths in continuous mode.
#[derive(Clone, Debug)]
pub struct AmbientStyle {
	pub color: Color,
	pub line_width: f64,
}

/// Highlighted hallucination paths: red, dashed, pulsing.
#[derive(Clone, Debug)]
pub struct HallucinationStyle {
	pub color: Color,
	pub line_width: f64,
	pub dash: (f64, f64),
	/// Seconds for one full 0.8 -> 0.3 -> 0.8 opacity cycle.
	pub pulse_period: f64,
	pub pulse_max: f64,
	pub pulse_min: f64,
	pub label: LabelBoxStyle,
}

/// Solid in-category connections in discrete mode.
#[derive(Clone, Debug)]
pub struct ValidEdgeStyle {
	pub color: Color,
	pub line_width: f64,
	pub alpha: f64,
	pub label_color: Color,
	pub label_font: &'static str,
	/// Label sits this far above the edge midpoint.
	pub label_lift: f64,
}

/// Dashed category boundary polygons.
#[derive(Clone, Debug)]
pub struct BoundaryStyle {
	pub line_width: f64,
	pub dash: (f64, f64),
	/// Gradient fill alphas, top to bottom of the polygon.
	pub fill_alpha_top: f64,
	pub fill_alpha_bottom: f64,
	pub label_font: &'static str,
	pub label_alpha: f64,
	/// Label sits this far above the hull center...
	pub label_lift: f64,
	/// ...but never below this y, keeping it inside the top margin.
	pub label_max_y: f64,
}

/// Barrier glyphs over blocked hallucination paths.
#[derive(Clone, Debug)]
pub struct BarrierStyle {
	pub size: f64,
	pub fill: Color,
	pub stroke: Color,
	pub line_width: f64,
	pub corner_radius: f64,
	/// Opacity of the blocked path drawn underneath the glyph.
	pub blocked_alpha: f64,
	pub blocked_line_width: f64,
	pub blocked_dash: (f64, f64),
	pub icon: &'static str,
	pub icon_font: &'static str,
	pub caption: &'static str,
	pub caption_font: &'static str,
	pub caption_alpha: f64,
	/// Vertical distance of the caption from the glyph center.
	pub caption_offset: f64,
	/// Vertical distance of the relation label from the glyph center.
	pub label_offset: f64,
	pub label: LabelBoxStyle,
}

/// Concept nodes and their pill labels.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	pub radius: f64,
	/// Radius while hovered; the transition is smoothed over ~200ms.
	pub hover_radius: f64,
	pub outline: Color,
	pub outline_width: f64,
	pub hover_outline_width: f64,
	pub label: LabelBoxStyle,
	/// Gap between the node center and the top of the label box.
	pub label_drop: f64,
}

/// The drifting "reasoning" marker.
#[derive(Clone, Debug)]
pub struct MarkerStyle {
	pub radius: f64,
	pub fill: Color,
	pub stroke: Color,
	pub stroke_width: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub grid: GridStyle,
	pub backdrop: BackdropStyle,
	pub ambient: AmbientStyle,
	pub hallucination: HallucinationStyle,
	pub valid: ValidEdgeStyle,
	pub boundary: BoundaryStyle,
	pub barrier: BarrierStyle,
	pub node: NodeStyle,
	pub marker: MarkerStyle,
}

impl Theme {
	/// The published light theme.
	pub fn light() -> Self {
		Self {
			name: "light",
			grid: GridStyle {
				color: Color::rgb(241, 245, 249),
				line_width: 1.0,
			},
			backdrop: BackdropStyle {
				center_color: Color::rgba(221, 214, 254, 0.3),
				edge_color: Color::rgba(224, 231, 255, 0.1),
			},
			ambient: AmbientStyle {
				color: Color::rgb(148, 163, 184),
				line_width: 1.0,
			},
			hallucination: HallucinationStyle {
				color: Color::rgb(220, 38, 38),
				line_width: 3.0,
				dash: (8.0, 4.0),
				pulse_period: 2.0,
				pulse_max: 0.8,
				pulse_min: 0.3,
				label: LabelBoxStyle {
					char_width: 7.0,
					height: 16.0,
					corner_radius: 3.0,
					fill: Color::rgba(254, 242, 242, 0.95),
					stroke: Color::rgb(220, 38, 38),
					font: "bold 11px sans-serif",
					text_color: Color::rgb(220, 38, 38),
				},
			},
			valid: ValidEdgeStyle {
				color: Color::rgb(16, 185, 129),
				line_width: 3.0,
				alpha: 0.8,
				label_color: Color::rgb(5, 150, 105),
				label_font: "500 10px sans-serif",
				label_lift: 8.0,
			},
			boundary: BoundaryStyle {
				line_width: 3.0,
				dash: (5.0, 3.0),
				fill_alpha_top: 0.2,
				fill_alpha_bottom: 0.05,
				label_font: "bold 13px sans-serif",
				label_alpha: 0.8,
				label_lift: 40.0,
				label_max_y: 25.0,
			},
			barrier: BarrierStyle {
				size: 35.0,
				fill: Color::rgb(254, 242, 242),
				stroke: Color::rgb(220, 38, 38),
				line_width: 2.0,
				corner_radius: 8.0,
				blocked_alpha: 0.2,
				blocked_line_width: 2.0,
				blocked_dash: (5.0, 5.0),
				icon: "\u{26a1}",
				icon_font: "bold 18px sans-serif",
				caption: "BLOCKED",
				caption_font: "bold 10px sans-serif",
				caption_alpha: 0.8,
				caption_offset: 45.0,
				label_offset: 35.0,
				label: LabelBoxStyle {
					char_width: 6.0,
					height: 16.0,
					corner_radius: 3.0,
					fill: Color::rgba(254, 242, 242, 0.9),
					stroke: Color::rgb(220, 38, 38),
					font: "600 10px sans-serif",
					text_color: Color::rgb(220, 38, 38),
				},
			},
			node: NodeStyle {
				radius: 15.0,
				hover_radius: 18.0,
				outline: Color::rgb(255, 255, 255),
				outline_width: 2.0,
				hover_outline_width: 3.0,
				label: LabelBoxStyle {
					char_width: 7.0,
					height: 16.0,
					corner_radius: 3.0,
					fill: Color::rgba(255, 255, 255, 0.9),
					stroke: Color::rgb(229, 231, 235),
					font: "600 12px sans-serif",
					text_color: Color::rgb(31, 41, 55),
				},
				label_drop: 20.0,
			},
			marker: MarkerStyle {
				radius: 6.0,
				fill: Color::rgb(251, 191, 36),
				stroke: Color::rgb(245, 158, 11),
				stroke_width: 2.0,
			},
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::light()
	}
}
