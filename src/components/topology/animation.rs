//! Drift animation: a marker tracing hallucination paths.
//!
//! A tick-driven state machine advanced by the render loop, mirroring how an
//! AI's reasoning drifts from one concept to an unrelated one. One traversal
//! takes two seconds, followed by a one second hold, then the next edge in
//! the cycle. Stopping is a single state flip: any later tick observes
//! [`Phase::Idle`], so no marker survives and no follow-up cycle fires.

use super::geometry::{self, Point};
use super::types::{AnimationKind, Dataset};

/// Seconds for one marker traversal along an edge.
const TWEEN_SECS: f64 = 2.0;
/// Pause between traversals.
const HOLD_SECS: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
	Idle,
	/// Tween in progress, `t` seconds into the traversal.
	Running { t: f64 },
	/// Between traversals, counting down the hold.
	Holding { remaining: f64 },
}

/// Cancellable, self-cycling marker animation over the hallucination list.
///
/// At most one marker exists at any time: [`DriftAnimator::start`] replaces
/// the current tween rather than stacking a second one.
#[derive(Clone, Debug)]
pub struct DriftAnimator {
	phase: Phase,
	/// Index into the hallucination list for the current traversal.
	cursor: usize,
}

impl Default for DriftAnimator {
	fn default() -> Self {
		Self::new()
	}
}

impl DriftAnimator {
	pub fn new() -> Self {
		Self {
			phase: Phase::Idle,
			cursor: 0,
		}
	}

	/// Begin cycling, seeded from the current example index.
	///
	/// Only [`AnimationKind::Hallucination`] animates; anything else (or an
	/// empty edge list) leaves the driver idle.
	pub fn start(&mut self, kind: AnimationKind, example: usize, data: &Dataset) {
		if kind != AnimationKind::Hallucination || data.hallucinations.is_empty() {
			self.phase = Phase::Idle;
			return;
		}
		self.cursor = example % data.hallucinations.len();
		self.phase = Phase::Running { t: 0.0 };
	}

	/// Cancel immediately. The marker disappears and no further traversal
	/// is scheduled.
	pub fn stop(&mut self) {
		self.phase = Phase::Idle;
	}

	/// Back to idle with the cycle position cleared.
	pub fn reset(&mut self) {
		self.phase = Phase::Idle;
		self.cursor = 0;
	}

	pub fn is_active(&self) -> bool {
		self.phase != Phase::Idle
	}

	/// Advance by `dt` seconds.
	pub fn tick(&mut self, dt: f64, data: &Dataset) {
		if data.hallucinations.is_empty() {
			self.phase = Phase::Idle;
			return;
		}
		match self.phase {
			Phase::Idle => {}
			Phase::Running { t } => {
				let t = t + dt;
				self.phase = if t >= TWEEN_SECS {
					Phase::Holding {
						remaining: HOLD_SECS,
					}
				} else {
					Phase::Running { t }
				};
			}
			Phase::Holding { remaining } => {
				let remaining = remaining - dt;
				if remaining <= 0.0 {
					self.cursor = (self.cursor + 1) % data.hallucinations.len();
					self.phase = Phase::Running { t: 0.0 };
				} else {
					self.phase = Phase::Holding { remaining };
				}
			}
		}
	}

	/// Current marker position, if a traversal is in flight.
	///
	/// `None` between traversals, when idle, and when the current edge does
	/// not resolve in the dataset.
	pub fn marker(&self, data: &Dataset) -> Option<Point> {
		let Phase::Running { t } = self.phase else {
			return None;
		};
		let edge = data.hallucinations.get(self.cursor)?;
		let from = data.concept(&edge.from)?;
		let to = data.concept(&edge.to)?;
		Some(geometry::lerp(
			Point::new(from.x, from.y),
			Point::new(to.x, to.y),
			(t / TWEEN_SECS).clamp(0.0, 1.0),
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::topology::dataset;

	#[test]
	fn stop_mid_tween_leaves_no_marker_and_no_cycle() {
		let data = dataset::builtin();
		let mut anim = DriftAnimator::new();
		anim.start(AnimationKind::Hallucination, 0, &data);
		anim.tick(0.5, &data);
		assert!(anim.marker(&data).is_some());

		anim.stop();
		assert!(anim.marker(&data).is_none());
		assert!(!anim.is_active());

		// Late ticks (a stale scheduled callback) must be no-ops.
		anim.tick(10.0, &data);
		assert!(anim.marker(&data).is_none());
		assert!(!anim.is_active());
	}

	#[test]
	fn marker_tweens_linearly_from_source_to_target() {
		let data = dataset::builtin();
		let mut anim = DriftAnimator::new();
		anim.start(AnimationKind::Hallucination, 0, &data);

		// paris (100,120) -> jupiter (480,120)
		let start = anim.marker(&data).unwrap();
		assert_eq!((start.x, start.y), (100.0, 120.0));

		anim.tick(1.0, &data);
		let mid = anim.marker(&data).unwrap();
		assert_eq!((mid.x, mid.y), (290.0, 120.0));
	}

	#[test]
	fn completed_tween_holds_then_advances_to_the_next_edge() {
		let data = dataset::builtin();
		let mut anim = DriftAnimator::new();
		anim.start(AnimationKind::Hallucination, 0, &data);

		anim.tick(2.0, &data);
		assert!(anim.is_active());
		assert!(anim.marker(&data).is_none(), "marker removed during hold");

		anim.tick(0.5, &data);
		assert!(anim.marker(&data).is_none(), "still holding");

		anim.tick(0.5, &data);
		// tokyo (150,160) -> mars: next edge, fresh tween.
		let next = anim.marker(&data).unwrap();
		assert_eq!((next.x, next.y), (150.0, 160.0));
	}

	#[test]
	fn cursor_wraps_modulo_edge_count() {
		let data = dataset::builtin();
		let mut anim = DriftAnimator::new();
		// Example index past the end seeds modulo the list length.
		anim.start(AnimationKind::Hallucination, 5, &data);
		// 5 % 3 = 2: london (80,180) -> earth.
		let start = anim.marker(&data).unwrap();
		assert_eq!((start.x, start.y), (80.0, 180.0));

		// Finish the traversal and the hold: wraps back to edge 0.
		anim.tick(2.0, &data);
		anim.tick(1.0, &data);
		let wrapped = anim.marker(&data).unwrap();
		assert_eq!((wrapped.x, wrapped.y), (100.0, 120.0));
	}

	#[test]
	fn restart_replaces_the_tween_instead_of_stacking() {
		let data = dataset::builtin();
		let mut anim = DriftAnimator::new();
		anim.start(AnimationKind::Hallucination, 0, &data);
		anim.tick(1.5, &data);

		anim.start(AnimationKind::Hallucination, 1, &data);
		// A single marker, back at the start of edge 1.
		let m = anim.marker(&data).unwrap();
		assert_eq!((m.x, m.y), (150.0, 160.0));
	}

	#[test]
	fn only_hallucination_kind_animates() {
		let data = dataset::builtin();
		let mut anim = DriftAnimator::new();
		anim.start(AnimationKind::Idle, 0, &data);
		assert!(!anim.is_active());
		anim.tick(1.0, &data);
		assert!(anim.marker(&data).is_none());
	}

	#[test]
	fn reset_returns_to_idle_and_clears_the_cursor() {
		let data = dataset::builtin();
		let mut anim = DriftAnimator::new();
		anim.start(AnimationKind::Hallucination, 2, &data);
		anim.tick(0.25, &data);
		anim.reset();
		assert!(!anim.is_active());

		anim.start(AnimationKind::Hallucination, 0, &data);
		let m = anim.marker(&data).unwrap();
		assert_eq!((m.x, m.y), (100.0, 120.0));
	}

	#[test]
	fn empty_edge_list_never_activates() {
		let data = Dataset::default();
		let mut anim = DriftAnimator::new();
		anim.start(AnimationKind::Hallucination, 0, &data);
		assert!(!anim.is_active());
		assert!(anim.marker(&data).is_none());
	}
}
