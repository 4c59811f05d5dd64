//! Declarative scene construction.
//!
//! [`Scene::build`] maps the static dataset plus the current mode to an
//! ordered list of semantic shapes. It is a pure function: building twice
//! with the same inputs yields the same list, and callers replace the
//! previous scene wholesale instead of appending to it. Paint order:
//! 1. Reference grid
//! 2. Mode field: backdrop + ambient paths (continuous), or category
//!    boundaries (discrete)
//! 3. Highlighted edges, valid connections, barriers
//! 4. Concept nodes on top
//!
//! Dynamic effects (pulse phase, hover radius, the drift marker) are
//! paint-time overlays and never stored here.

use super::geometry::{self, Point};
use super::types::{Category, Dataset, Mode};

/// Logical canvas width. The rendering surface scales to its container but
/// all layout happens in this space.
pub const CANVAS_WIDTH: f64 = 600.0;
/// Logical canvas height.
pub const CANVAS_HEIGHT: f64 = 400.0;

const GRID_STEP: f64 = 40.0;
const HULL_PADDING: f64 = 35.0;

/// A drawable primitive, tagged with what it depicts.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
	/// One line of the background reference grid.
	GridLine { from: Point, to: Point },
	/// Radial embedding-field gradient behind everything (continuous mode).
	Backdrop { center: Point, radius: f64 },
	/// Faint interpolation path between one unordered concept pair.
	AmbientPath {
		from: Point,
		to: Point,
		opacity: f64,
	},
	/// A highlighted hallucinated association with its boxed relation label.
	HallucinationPath {
		from: Point,
		to: Point,
		connection: String,
		label_at: Point,
	},
	/// Dashed, padded convex boundary around one category.
	Boundary {
		polygon: Vec<Point>,
		center: Point,
		title: &'static str,
		color: String,
	},
	/// A factually correct association (discrete mode).
	ValidEdge {
		from: Point,
		to: Point,
		connection: String,
	},
	/// The faded remnant of a hallucination path under its barrier.
	BlockedPath { from: Point, to: Point },
	/// Barrier glyph marking a blocked association.
	Barrier {
		center: Point,
		connection: String,
		/// Caption above the glyph for even edge indices, below for odd,
		/// so adjacent barriers do not stack their captions.
		caption_above: bool,
	},
	/// A concept node with its pill label.
	Node {
		id: String,
		center: Point,
		color: String,
		label: String,
	},
}

/// A complete frame description, ready for any renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
	pub mode: Mode,
	pub shapes: Vec<Shape>,
}

impl Scene {
	/// Build the full scene for `mode`.
	///
	/// Edges whose endpoints do not resolve in the dataset are skipped
	/// individually; nothing here fails.
	pub fn build(data: &Dataset, mode: Mode) -> Self {
		let mut shapes = Vec::new();

		push_grid(&mut shapes);

		match mode {
			Mode::Continuous => {
				shapes.push(Shape::Backdrop {
					center: Point::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0),
					radius: CANVAS_WIDTH / 2.0,
				});
				push_ambient_paths(data, &mut shapes);
				push_hallucination_paths(data, &mut shapes);
			}
			Mode::Discrete => {
				push_boundaries(data, &mut shapes);
				push_valid_edges(data, &mut shapes);
				push_barriers(data, &mut shapes);
			}
		}

		push_nodes(data, &mut shapes);

		Self { mode, shapes }
	}
}

fn push_grid(shapes: &mut Vec<Shape>) {
	let mut x = 0.0;
	while x < CANVAS_WIDTH {
		shapes.push(Shape::GridLine {
			from: Point::new(x, 0.0),
			to: Point::new(x, CANVAS_HEIGHT),
		});
		x += GRID_STEP;
	}
	let mut y = 0.0;
	while y < CANVAS_HEIGHT {
		shapes.push(Shape::GridLine {
			from: Point::new(0.0, y),
			to: Point::new(CANVAS_WIDTH, y),
		});
		y += GRID_STEP;
	}
}

fn position(data: &Dataset, id: &str) -> Option<Point> {
	data.concept(id).map(|c| Point::new(c.x, c.y))
}

fn endpoints(data: &Dataset, from: &str, to: &str) -> Option<(Point, Point)> {
	Some((position(data, from)?, position(data, to)?))
}

/// One faint path per unordered concept pair, nearer pairs more visible.
fn push_ambient_paths(data: &Dataset, shapes: &mut Vec<Shape>) {
	for (i, a) in data.concepts.iter().enumerate() {
		for b in data.concepts.iter().skip(i + 1) {
			let (from, to) = (Point::new(a.x, a.y), Point::new(b.x, b.y));
			shapes.push(Shape::AmbientPath {
				from,
				to,
				opacity: geometry::interpolation_opacity(geometry::distance(from, to)),
			});
		}
	}
}

fn push_hallucination_paths(data: &Dataset, shapes: &mut Vec<Shape>) {
	for (idx, edge) in data.hallucinations.iter().enumerate() {
		let Some((from, to)) = endpoints(data, &edge.from, &edge.to) else {
			continue;
		};
		// Per-edge offset when supplied, index spread otherwise.
		let offset = if edge.offset == 0.0 {
			geometry::default_label_offset(idx)
		} else {
			edge.offset
		};
		let mid = geometry::midpoint(from, to);
		shapes.push(Shape::HallucinationPath {
			from,
			to,
			connection: edge.connection.clone(),
			label_at: Point::new(mid.x, mid.y + offset),
		});
	}
}

/// Padded boundary per category. Categories whose members admit no
/// enclosing polygon simply get no boundary.
fn push_boundaries(data: &Dataset, shapes: &mut Vec<Shape>) {
	for category in Category::ALL {
		let members = data.category_members(category);
		if members.len() < 2 {
			continue;
		}
		let points: Vec<Point> = members.iter().map(|c| Point::new(c.x, c.y)).collect();
		let Some(polygon) = geometry::category_boundary(&points, HULL_PADDING) else {
			continue;
		};
		let center = geometry::centroid(&polygon);
		shapes.push(Shape::Boundary {
			polygon,
			center,
			title: category.title(),
			color: members[0].color.clone(),
		});
	}
}

fn push_valid_edges(data: &Dataset, shapes: &mut Vec<Shape>) {
	for conn in &data.valid_connections {
		let Some((from, to)) = endpoints(data, &conn.from, &conn.to) else {
			continue;
		};
		shapes.push(Shape::ValidEdge {
			from,
			to,
			connection: conn.connection.clone(),
		});
	}
}

fn push_barriers(data: &Dataset, shapes: &mut Vec<Shape>) {
	for (idx, edge) in data.hallucinations.iter().enumerate() {
		let Some((from, to)) = endpoints(data, &edge.from, &edge.to) else {
			continue;
		};
		let mid = geometry::midpoint(from, to);
		shapes.push(Shape::BlockedPath { from, to });
		shapes.push(Shape::Barrier {
			center: Point::new(mid.x, mid.y + edge.offset),
			connection: edge.connection.clone(),
			caption_above: idx % 2 == 0,
		});
	}
}

fn push_nodes(data: &Dataset, shapes: &mut Vec<Shape>) {
	for concept in &data.concepts {
		shapes.push(Shape::Node {
			id: concept.id.clone(),
			center: Point::new(concept.x, concept.y),
			color: concept.color.clone(),
			label: concept.label.clone(),
		});
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::topology::dataset;
	use crate::components::topology::types::{HallucinationEdge, Severity};

	fn count(scene: &Scene, pred: fn(&Shape) -> bool) -> usize {
		scene.shapes.iter().filter(|s| pred(s)).count()
	}

	#[test]
	fn continuous_scene_has_expected_counts() {
		let data = dataset::builtin();
		let scene = Scene::build(&data, Mode::Continuous);

		// 15 vertical + 10 horizontal grid lines at the 40-unit stride.
		assert_eq!(count(&scene, |s| matches!(s, Shape::GridLine { .. })), 25);
		assert_eq!(count(&scene, |s| matches!(s, Shape::Backdrop { .. })), 1);
		// 11 concepts -> 11*10/2 unordered pairs.
		assert_eq!(count(&scene, |s| matches!(s, Shape::AmbientPath { .. })), 55);
		assert_eq!(
			count(&scene, |s| matches!(s, Shape::HallucinationPath { .. })),
			3
		);
		assert_eq!(count(&scene, |s| matches!(s, Shape::Node { .. })), 11);
		assert_eq!(count(&scene, |s| matches!(s, Shape::Boundary { .. })), 0);
	}

	#[test]
	fn discrete_scene_has_expected_counts() {
		let data = dataset::builtin();
		let scene = Scene::build(&data, Mode::Discrete);

		// cities:3, countries:2, planets:3, concepts:3 -- every category
		// qualifies for a boundary (countries via the segment rectangle).
		assert_eq!(count(&scene, |s| matches!(s, Shape::Boundary { .. })), 4);
		assert_eq!(count(&scene, |s| matches!(s, Shape::ValidEdge { .. })), 4);
		assert_eq!(count(&scene, |s| matches!(s, Shape::BlockedPath { .. })), 3);
		assert_eq!(count(&scene, |s| matches!(s, Shape::Barrier { .. })), 3);
		assert_eq!(count(&scene, |s| matches!(s, Shape::AmbientPath { .. })), 0);
		assert_eq!(count(&scene, |s| matches!(s, Shape::Node { .. })), 11);
	}

	#[test]
	fn building_twice_is_idempotent() {
		let data = dataset::builtin();
		assert_eq!(
			Scene::build(&data, Mode::Continuous),
			Scene::build(&data, Mode::Continuous)
		);
		assert_eq!(
			Scene::build(&data, Mode::Discrete),
			Scene::build(&data, Mode::Discrete)
		);
	}

	#[test]
	fn mode_round_trip_restores_the_scene_exactly() {
		let data = dataset::builtin();
		let before = Scene::build(&data, Mode::Continuous);
		let _detour = Scene::build(&data, Mode::Discrete);
		let after = Scene::build(&data, Mode::Continuous);
		assert_eq!(before, after);
	}

	#[test]
	fn dangling_edge_ids_are_skipped_shape_by_shape() {
		let mut data = dataset::builtin();
		data.hallucinations.push(HallucinationEdge {
			from: "paris".to_string(),
			to: "atlantis".to_string(),
			connection: "twinned with".to_string(),
			severity: Severity::Absurd,
			offset: 0.0,
		});

		let continuous = Scene::build(&data, Mode::Continuous);
		assert_eq!(
			count(&continuous, |s| matches!(s, Shape::HallucinationPath { .. })),
			3
		);

		let discrete = Scene::build(&data, Mode::Discrete);
		assert_eq!(count(&discrete, |s| matches!(s, Shape::Barrier { .. })), 3);
		assert_eq!(count(&discrete, |s| matches!(s, Shape::ValidEdge { .. })), 4);
		assert_eq!(count(&discrete, |s| matches!(s, Shape::Node { .. })), 11);
	}

	#[test]
	fn hallucination_labels_use_edge_offset_or_index_spread() {
		let data = dataset::builtin();
		let scene = Scene::build(&data, Mode::Continuous);
		let labels: Vec<&Point> = scene
			.shapes
			.iter()
			.filter_map(|s| match s {
				Shape::HallucinationPath { label_at, .. } => Some(label_at),
				_ => None,
			})
			.collect();
		assert_eq!(labels.len(), 3);

		// paris->jupiter carries no offset: index spread gives -25.
		let mid0 = geometry::midpoint(Point::new(100.0, 120.0), Point::new(480.0, 120.0));
		assert_eq!(labels[0].y, mid0.y - 25.0);
		// tokyo->mars carries its own +30.
		let mid1 = geometry::midpoint(Point::new(150.0, 160.0), Point::new(450.0, 180.0));
		assert_eq!(labels[1].y, mid1.y + 30.0);
	}

	#[test]
	fn barrier_captions_alternate_sides() {
		let data = dataset::builtin();
		let scene = Scene::build(&data, Mode::Discrete);
		let sides: Vec<bool> = scene
			.shapes
			.iter()
			.filter_map(|s| match s {
				Shape::Barrier { caption_above, .. } => Some(*caption_above),
				_ => None,
			})
			.collect();
		assert_eq!(sides, vec![true, false, true]);
	}

	#[test]
	fn boundaries_enclose_their_members() {
		let data = dataset::builtin();
		let scene = Scene::build(&data, Mode::Discrete);
		for shape in &scene.shapes {
			let Shape::Boundary { polygon, center, .. } = shape else {
				continue;
			};
			assert!(polygon.len() >= 3);
			// Padding pushes every vertex outward, so the polygon's own
			// centroid-to-vertex distances all exceed the hull padding.
			for v in polygon {
				assert!(geometry::distance(*center, *v) > HULL_PADDING);
			}
		}
	}
}
