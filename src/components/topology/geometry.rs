//! Pure 2D geometry over the fixed concept layout.
//!
//! Everything here is a total function of its inputs: pairwise distances,
//! the distance-to-opacity mapping for ambient interpolation paths, convex
//! category hulls with radial padding, and midpoint/label placement. Nothing
//! touches the canvas.

/// A point in the 600x400 logical canvas space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
	let (dx, dy) = (b.x - a.x, b.y - a.y);
	(dx * dx + dy * dy).sqrt()
}

/// Linear interpolation from `a` to `b`, `t` in [0, 1].
pub fn lerp(a: Point, b: Point, t: f64) -> Point {
	Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

/// Segment midpoint.
pub fn midpoint(a: Point, b: Point) -> Point {
	Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Maps a pairwise distance to the opacity of an ambient interpolation path.
///
/// Monotonically non-increasing, floored at 0.05 so distant pairs stay
/// faintly visible.
pub fn interpolation_opacity(distance: f64) -> f64 {
	(0.3 - distance / 500.0).max(0.05)
}

/// Vertical label offset for edge `idx` when the edge carries none of its
/// own: spreads labels at -25, 0, 25, 50, ... to reduce collisions.
pub fn default_label_offset(idx: usize) -> f64 {
	idx as f64 * 25.0 - 25.0
}

/// Convex hull via monotone chain, counter-clockwise.
///
/// Returns `None` when the input has fewer than 3 distinct points or is
/// collinear, i.e. whenever no polygon exists. Callers treat that as "omit
/// the boundary", never as an error.
pub fn convex_hull(points: &[Point]) -> Option<Vec<Point>> {
	let mut sorted: Vec<Point> = points.to_vec();
	sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
	sorted.dedup_by(|a, b| a.x == b.x && a.y == b.y);

	if sorted.len() < 3 {
		return None;
	}

	fn cross(o: Point, a: Point, b: Point) -> f64 {
		(a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
	}

	let mut hull: Vec<Point> = Vec::with_capacity(sorted.len() * 2);

	for &p in &sorted {
		while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
			hull.pop();
		}
		hull.push(p);
	}

	let lower_len = hull.len() + 1;
	for &p in sorted.iter().rev().skip(1) {
		while hull.len() >= lower_len && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0
		{
			hull.pop();
		}
		hull.push(p);
	}

	hull.pop(); // last point repeats the first

	if hull.len() < 3 { None } else { Some(hull) }
}

/// Vertex average of a polygon.
pub fn centroid(polygon: &[Point]) -> Point {
	let n = polygon.len().max(1) as f64;
	let (sx, sy) = polygon
		.iter()
		.fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
	Point::new(sx / n, sy / n)
}

/// Boundary polygon for a category's member positions.
///
/// The padded convex hull when one exists; a padded rectangle around the
/// segment when there are exactly two distinct members (two points span no
/// polygon, but the category still deserves a visible boundary). `None` when
/// no enclosing polygon makes sense: fewer than two distinct points, or
/// three-plus collinear ones.
pub fn category_boundary(points: &[Point], padding: f64) -> Option<Vec<Point>> {
	let mut distinct: Vec<Point> = points.to_vec();
	distinct.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
	distinct.dedup_by(|a, b| a.x == b.x && a.y == b.y);

	match distinct.len() {
		0 | 1 => None,
		2 => Some(segment_rect(distinct[0], distinct[1], padding)),
		_ => convex_hull(&distinct).map(|hull| expand_hull(&hull, padding)),
	}
}

/// Rectangle enclosing the segment `a`-`b` with `padding` margin on all
/// sides. `a` and `b` must be distinct.
fn segment_rect(a: Point, b: Point, padding: f64) -> Vec<Point> {
	let len = distance(a, b);
	let (ux, uy) = ((b.x - a.x) / len, (b.y - a.y) / len);
	let (px, py) = (-uy, ux);
	vec![
		Point::new(
			a.x - (ux - px) * padding,
			a.y - (uy - py) * padding,
		),
		Point::new(
			a.x - (ux + px) * padding,
			a.y - (uy + py) * padding,
		),
		Point::new(
			b.x + (ux - px) * padding,
			b.y + (uy - py) * padding,
		),
		Point::new(
			b.x + (ux + px) * padding,
			b.y + (uy + py) * padding,
		),
	]
}

/// Pushes each hull vertex radially outward from the centroid by `padding`,
/// so the boundary encloses its nodes with margin instead of touching them.
pub fn expand_hull(hull: &[Point], padding: f64) -> Vec<Point> {
	let center = centroid(hull);
	hull.iter()
		.map(|&p| {
			let (dx, dy) = (p.x - center.x, p.y - center.y);
			let len = (dx * dx + dy * dy).sqrt();
			if len < f64::EPSILON {
				return p;
			}
			Point::new(
				center.x + (dx / len) * (len + padding),
				center.y + (dy / len) * (len + padding),
			)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn distance_is_euclidean() {
		let d = distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
		assert!((d - 5.0).abs() < 1e-9);
	}

	#[test]
	fn opacity_is_monotone_and_floored() {
		let mut prev = f64::INFINITY;
		for step in 0..100 {
			let o = interpolation_opacity(step as f64 * 10.0);
			assert!(o <= prev, "opacity increased at distance {}", step * 10);
			assert!(o >= 0.05);
			prev = o;
		}
		assert!((interpolation_opacity(0.0) - 0.3).abs() < 1e-9);
		assert!((interpolation_opacity(1000.0) - 0.05).abs() < 1e-9);
	}

	#[test]
	fn label_offsets_spread_vertically() {
		assert_eq!(default_label_offset(0), -25.0);
		assert_eq!(default_label_offset(1), 0.0);
		assert_eq!(default_label_offset(2), 25.0);
	}

	#[test]
	fn hull_of_square_keeps_corners_and_drops_interior() {
		let points = [
			Point::new(0.0, 0.0),
			Point::new(10.0, 0.0),
			Point::new(10.0, 10.0),
			Point::new(0.0, 10.0),
			Point::new(5.0, 5.0),
		];
		let hull = convex_hull(&points).unwrap();
		assert_eq!(hull.len(), 4);
		assert!(!hull.contains(&Point::new(5.0, 5.0)));
	}

	#[test]
	fn degenerate_inputs_have_no_hull() {
		assert!(convex_hull(&[]).is_none());
		assert!(convex_hull(&[Point::new(1.0, 1.0)]).is_none());
		assert!(convex_hull(&[Point::new(1.0, 1.0), Point::new(2.0, 2.0)]).is_none());
		// Collinear: three points on one line form no polygon.
		let collinear = [
			Point::new(0.0, 0.0),
			Point::new(5.0, 5.0),
			Point::new(10.0, 10.0),
		];
		assert!(convex_hull(&collinear).is_none());
		// Duplicates of two distinct points still have no area.
		let duplicated = [
			Point::new(1.0, 2.0),
			Point::new(1.0, 2.0),
			Point::new(3.0, 4.0),
		];
		assert!(convex_hull(&duplicated).is_none());
	}

	#[test]
	fn expansion_strictly_grows_vertex_distances() {
		let triangle = [
			Point::new(0.0, 0.0),
			Point::new(40.0, 0.0),
			Point::new(20.0, 30.0),
		];
		let hull = convex_hull(&triangle).unwrap();
		let expanded = expand_hull(&hull, 35.0);
		assert_eq!(expanded.len(), hull.len());

		let center = centroid(&hull);
		for (orig, grown) in hull.iter().zip(&expanded) {
			let before = distance(center, *orig);
			let after = distance(center, *grown);
			assert!(after > before, "vertex did not move outward");
			assert!((after - before - 35.0).abs() < 1e-9);
		}
	}

	#[test]
	fn two_member_categories_get_a_rectangle_boundary() {
		let pair = [Point::new(70.0, 280.0), Point::new(180.0, 280.0)];
		let boundary = category_boundary(&pair, 35.0).unwrap();
		assert_eq!(boundary.len(), 4);
		// Every member sits at least the padding away from every edge;
		// cheap proxy: the polygon spans beyond both endpoints.
		let xs: Vec<f64> = boundary.iter().map(|p| p.x).collect();
		let ys: Vec<f64> = boundary.iter().map(|p| p.y).collect();
		assert!(xs.iter().cloned().fold(f64::INFINITY, f64::min) <= 35.0);
		assert!(xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max) >= 215.0);
		assert!(ys.iter().cloned().fold(f64::INFINITY, f64::min) <= 245.0);
		assert!(ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max) >= 315.0);
	}

	#[test]
	fn boundary_matches_padded_hull_for_three_plus_members() {
		let triangle = [
			Point::new(0.0, 0.0),
			Point::new(40.0, 0.0),
			Point::new(20.0, 30.0),
		];
		let via_boundary = category_boundary(&triangle, 35.0).unwrap();
		let via_hull = expand_hull(&convex_hull(&triangle).unwrap(), 35.0);
		assert_eq!(via_boundary, via_hull);

		let collinear = [
			Point::new(0.0, 0.0),
			Point::new(5.0, 5.0),
			Point::new(10.0, 10.0),
		];
		assert!(category_boundary(&collinear, 35.0).is_none());
		assert!(category_boundary(&[Point::new(1.0, 1.0)], 35.0).is_none());
	}

	#[test]
	fn lerp_endpoints_and_midpoint() {
		let (a, b) = (Point::new(100.0, 120.0), Point::new(480.0, 120.0));
		assert_eq!(lerp(a, b, 0.0), a);
		assert_eq!(lerp(a, b, 1.0), b);
		assert_eq!(lerp(a, b, 0.5), midpoint(a, b));
	}
}
