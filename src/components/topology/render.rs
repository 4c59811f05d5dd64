//! Canvas rendering for the topology diagram.
//!
//! Paints the declarative scene to a 2D context in list order, then the
//! paint-time overlays: hover growth on nodes, the pulsing opacity of
//! hallucination paths, and the drift marker. The whole canvas is cleared
//! and redrawn every frame, so the painted output is exactly the scene and
//! nothing accumulates.

use std::f64::consts::{PI, TAU};

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::geometry::{self, Point};
use super::scene::{CANVAS_HEIGHT, CANVAS_WIDTH, Scene, Shape};
use super::state::VizState;
use super::theme::{Color, LabelBoxStyle, Theme};

/// Renders the complete diagram for the current frame.
pub fn render(state: &VizState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	ctx.clear_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);
	ctx.set_text_align("center");

	draw_scene(&state.scene, state, ctx, theme);

	if let Some(marker) = state.marker() {
		draw_marker(ctx, theme, marker);
	}
}

fn draw_scene(scene: &Scene, state: &VizState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	for shape in &scene.shapes {
		match shape {
			Shape::GridLine { from, to } => draw_grid_line(ctx, theme, *from, *to),
			Shape::Backdrop { center, radius } => draw_backdrop(ctx, theme, *center, *radius),
			Shape::AmbientPath { from, to, opacity } => {
				draw_ambient_path(ctx, theme, *from, *to, *opacity)
			}
			Shape::HallucinationPath {
				from,
				to,
				connection,
				label_at,
			} => draw_hallucination_path(
				ctx,
				theme,
				*from,
				*to,
				connection,
				*label_at,
				state.flow_time,
			),
			Shape::Boundary {
				polygon,
				center,
				title,
				color,
			} => draw_boundary(ctx, theme, polygon, *center, title, color),
			Shape::ValidEdge {
				from,
				to,
				connection,
			} => draw_valid_edge(ctx, theme, *from, *to, connection),
			Shape::BlockedPath { from, to } => draw_blocked_path(ctx, theme, *from, *to),
			Shape::Barrier {
				center,
				connection,
				caption_above,
			} => draw_barrier(ctx, theme, *center, connection, *caption_above),
			Shape::Node {
				id,
				center,
				color,
				label,
			} => {
				let hover_t = state.hover.intensity(id);
				draw_node(ctx, theme, *center, color, label, hover_t);
			}
		}
	}
}

fn draw_grid_line(ctx: &CanvasRenderingContext2d, theme: &Theme, from: Point, to: Point) {
	ctx.set_stroke_style_str(&theme.grid.color.to_css());
	ctx.set_line_width(theme.grid.line_width);
	ctx.begin_path();
	ctx.move_to(from.x, from.y);
	ctx.line_to(to.x, to.y);
	ctx.stroke();
}

fn draw_backdrop(ctx: &CanvasRenderingContext2d, theme: &Theme, center: Point, radius: f64) {
	let gradient = ctx
		.create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius)
		.unwrap();
	gradient
		.add_color_stop(0.0, &theme.backdrop.center_color.to_css())
		.unwrap();
	gradient
		.add_color_stop(1.0, &theme.backdrop.edge_color.to_css())
		.unwrap();

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);
}

fn draw_ambient_path(
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
	from: Point,
	to: Point,
	opacity: f64,
) {
	ctx.set_stroke_style_str(&theme.ambient.color.with_alpha(opacity).to_css());
	ctx.set_line_width(theme.ambient.line_width);
	ctx.begin_path();
	ctx.move_to(from.x, from.y);
	ctx.line_to(to.x, to.y);
	ctx.stroke();
}

/// Oscillates max -> min -> max over one pulse period.
fn pulse_alpha(theme: &Theme, flow_time: f64) -> f64 {
	let style = &theme.hallucination;
	let phase = (TAU * flow_time / style.pulse_period).cos();
	style.pulse_min + (style.pulse_max - style.pulse_min) * (0.5 + 0.5 * phase)
}

#[allow(clippy::too_many_arguments)]
fn draw_hallucination_path(
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
	from: Point,
	to: Point,
	connection: &str,
	label_at: Point,
	flow_time: f64,
) {
	let style = &theme.hallucination;
	ctx.set_stroke_style_str(&style.color.with_alpha(pulse_alpha(theme, flow_time)).to_css());
	ctx.set_line_width(style.line_width);
	set_dash(ctx, Some(style.dash));
	ctx.begin_path();
	ctx.move_to(from.x, from.y);
	ctx.line_to(to.x, to.y);
	ctx.stroke();
	set_dash(ctx, None);

	draw_label_box(ctx, &style.label, label_at, connection, true);
}

fn draw_boundary(
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
	polygon: &[Point],
	center: Point,
	title: &str,
	color: &str,
) {
	let style = &theme.boundary;
	let base = parse_color(color);

	// Vertical fade across the polygon's extent.
	let (min_y, max_y) = polygon.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
		(lo.min(p.y), hi.max(p.y))
	});
	let gradient = ctx.create_linear_gradient(center.x, min_y, center.x, max_y);
	gradient
		.add_color_stop(0.0, &base.with_alpha(style.fill_alpha_top).to_css())
		.unwrap();
	gradient
		.add_color_stop(1.0, &base.with_alpha(style.fill_alpha_bottom).to_css())
		.unwrap();

	ctx.begin_path();
	if let Some(first) = polygon.first() {
		ctx.move_to(first.x, first.y);
		for p in &polygon[1..] {
			ctx.line_to(p.x, p.y);
		}
	}
	ctx.close_path();

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill();

	ctx.set_stroke_style_str(color);
	ctx.set_line_width(style.line_width);
	set_dash(ctx, Some(style.dash));
	ctx.stroke();
	set_dash(ctx, None);

	// Category title, clamped into the visible top margin.
	let label_y = (center.y - style.label_lift).min(style.label_max_y);
	ctx.set_fill_style_str(&base.with_alpha(style.label_alpha).to_css());
	ctx.set_font(style.label_font);
	let _ = ctx.fill_text(title, center.x, label_y);
}

fn draw_valid_edge(
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
	from: Point,
	to: Point,
	connection: &str,
) {
	let style = &theme.valid;
	ctx.set_stroke_style_str(&style.color.with_alpha(style.alpha).to_css());
	ctx.set_line_width(style.line_width);
	ctx.begin_path();
	ctx.move_to(from.x, from.y);
	ctx.line_to(to.x, to.y);
	ctx.stroke();

	let mid = geometry::midpoint(from, to);
	ctx.set_fill_style_str(&style.label_color.to_css());
	ctx.set_font(style.label_font);
	let _ = ctx.fill_text(connection, mid.x, mid.y - style.label_lift);
}

fn draw_blocked_path(ctx: &CanvasRenderingContext2d, theme: &Theme, from: Point, to: Point) {
	let style = &theme.barrier;
	ctx.set_stroke_style_str(&style.stroke.with_alpha(style.blocked_alpha).to_css());
	ctx.set_line_width(style.blocked_line_width);
	set_dash(ctx, Some(style.blocked_dash));
	ctx.begin_path();
	ctx.move_to(from.x, from.y);
	ctx.line_to(to.x, to.y);
	ctx.stroke();
	set_dash(ctx, None);
}

fn draw_barrier(
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
	center: Point,
	connection: &str,
	caption_above: bool,
) {
	let style = &theme.barrier;
	let half = style.size / 2.0;

	rounded_rect_path(
		ctx,
		center.x - half,
		center.y - half,
		style.size,
		style.size,
		style.corner_radius,
	);
	ctx.set_fill_style_str(&style.fill.to_css());
	ctx.fill();
	ctx.set_stroke_style_str(&style.stroke.to_css());
	ctx.set_line_width(style.line_width);
	ctx.stroke();

	ctx.set_fill_style_str(&style.stroke.to_css());
	ctx.set_font(style.icon_font);
	let _ = ctx.fill_text(style.icon, center.x, center.y + 6.0);

	// Caption flips sides per edge so neighbors do not collide; the
	// relation label takes the opposite side.
	let caption_y = if caption_above {
		center.y - style.caption_offset
	} else {
		center.y + style.caption_offset
	};
	ctx.set_fill_style_str(&style.stroke.with_alpha(style.caption_alpha).to_css());
	ctx.set_font(style.caption_font);
	let _ = ctx.fill_text(style.caption, center.x, caption_y);

	let label_y = if caption_above {
		center.y + style.label_offset
	} else {
		center.y - style.label_offset
	};
	draw_label_box(
		ctx,
		&style.label,
		Point::new(center.x, label_y),
		connection,
		true,
	);
}

fn draw_node(
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
	center: Point,
	color: &str,
	label: &str,
	hover_t: f64,
) {
	let style = &theme.node;
	let radius = style.radius + (style.hover_radius - style.radius) * hover_t;
	let outline = style.outline_width + (style.hover_outline_width - style.outline_width) * hover_t;
	let base = parse_color(color);

	let gradient = ctx
		.create_radial_gradient(
			center.x - radius * 0.3,
			center.y - radius * 0.3,
			0.0,
			center.x,
			center.y,
			radius,
		)
		.unwrap();
	gradient
		.add_color_stop(0.0, &base.lighten(0.5).to_css())
		.unwrap();
	gradient.add_color_stop(1.0, &base.to_css()).unwrap();

	ctx.begin_path();
	let _ = ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill();

	ctx.set_stroke_style_str(&style.outline.to_css());
	ctx.set_line_width(outline);
	ctx.stroke();

	let anchor = Point::new(
		center.x,
		center.y + style.label_drop + style.label.height / 2.0,
	);
	draw_label_box(ctx, &style.label, anchor, label, false);
}

fn draw_marker(ctx: &CanvasRenderingContext2d, theme: &Theme, at: Point) {
	let style = &theme.marker;
	ctx.begin_path();
	let _ = ctx.arc(at.x, at.y, style.radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(&style.fill.to_css());
	ctx.fill();
	ctx.set_stroke_style_str(&style.stroke.to_css());
	ctx.set_line_width(style.stroke_width);
	ctx.stroke();
}

/// A rounded rectangle behind centered text. The box width scales with the
/// text length so long relation labels stay legible.
fn draw_label_box(
	ctx: &CanvasRenderingContext2d,
	style: &LabelBoxStyle,
	center: Point,
	text: &str,
	quoted: bool,
) {
	let width = text.len() as f64 * style.char_width;
	rounded_rect_path(
		ctx,
		center.x - width / 2.0,
		center.y - style.height / 2.0,
		width,
		style.height,
		style.corner_radius,
	);
	ctx.set_fill_style_str(&style.fill.to_css());
	ctx.fill();
	ctx.set_stroke_style_str(&style.stroke.to_css());
	ctx.set_line_width(1.0);
	ctx.stroke();

	ctx.set_fill_style_str(&style.text_color.to_css());
	ctx.set_font(style.font);
	let display = if quoted {
		format!("\"{}\"", text)
	} else {
		text.to_string()
	};
	let _ = ctx.fill_text(&display, center.x, center.y + 3.0);
}

fn rounded_rect_path(
	ctx: &CanvasRenderingContext2d,
	x: f64,
	y: f64,
	w: f64,
	h: f64,
	r: f64,
) {
	let r = r.min(w / 2.0).min(h / 2.0);
	ctx.begin_path();
	ctx.move_to(x + r, y);
	let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
	let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
	let _ = ctx.arc_to(x, y + h, x, y, r);
	let _ = ctx.arc_to(x, y, x + w, y, r);
	ctx.close_path();
}

fn set_dash(ctx: &CanvasRenderingContext2d, dash: Option<(f64, f64)>) {
	let _ = match dash {
		Some((on, off)) => ctx.set_line_dash(&js_sys::Array::of2(
			&JsValue::from_f64(on),
			&JsValue::from_f64(off),
		)),
		None => ctx.set_line_dash(&js_sys::Array::new()),
	};
}

/// Parses a `#RRGGBB` CSS color. Dataset colors are always hex; anything
/// else falls back to neutral gray.
fn parse_color(color_str: &str) -> Color {
	if color_str.starts_with('#') && color_str.len() == 7 {
		let r = u8::from_str_radix(&color_str[1..3], 16).unwrap_or(128);
		let g = u8::from_str_radix(&color_str[3..5], 16).unwrap_or(128);
		let b = u8::from_str_radix(&color_str[5..7], 16).unwrap_or(128);
		Color::rgb(r, g, b)
	} else {
		Color::rgb(128, 128, 128)
	}
}
