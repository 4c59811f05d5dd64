//! Mutable visualization state and interaction tracking.
//!
//! [`VizState`] owns the only mutable pieces of the diagram: the view
//! parameters driven by the UI shell, smoothed hover intensities, the drift
//! animator, and the cached scene. The scene is rebuilt wholesale whenever
//! mode or example change; everything else is a paint-time overlay.

use std::collections::HashMap;

use super::animation::DriftAnimator;
use super::geometry::Point;
use super::scene::Scene;
use super::types::{AnimationKind, Concept, Dataset, Example, Mode};

/// Hit detection radius around a node center, in canvas units.
const HIT_RADIUS: f64 = 18.0;

/// The view parameters the UI shell may change. Everything else derives
/// from these plus the static dataset.
#[derive(Clone, Debug)]
pub struct ViewState {
	pub mode: Mode,
	/// Currently selected concept id. Weak: resolved on output, never owned.
	pub selected: Option<String>,
	pub animating: bool,
	/// Current educational example, stored modulo the example count.
	pub example: usize,
	pub animation: AnimationKind,
}

impl Default for ViewState {
	fn default() -> Self {
		Self {
			mode: Mode::Continuous,
			selected: None,
			animating: false,
			example: 0,
			animation: AnimationKind::Idle,
		}
	}
}

/// Smoothed per-concept hover intensity (0 = rest, 1 = fully hovered).
///
/// Exponential smoothing so the 15px -> 18px node growth eases in and back
/// out over roughly 200ms instead of snapping.
#[derive(Clone, Debug, Default)]
pub struct HoverState {
	hovered: Option<String>,
	intensity: HashMap<String, f64>,
}

/// Settles to ~95% of the target in 0.2s: 1 - e^(-15 * 0.2) = 0.95.
const HOVER_SPEED: f64 = 15.0;

impl HoverState {
	pub fn set_hover(&mut self, id: Option<String>) {
		self.hovered = id;
	}

	pub fn hovered(&self) -> Option<&str> {
		self.hovered.as_deref()
	}

	/// Animate intensities towards their targets.
	pub fn tick(&mut self, dt: f64) {
		let fade = 1.0 - (-HOVER_SPEED * dt).exp();
		let decay = (-HOVER_SPEED * dt).exp();

		if let Some(id) = &self.hovered {
			let intensity = self.intensity.entry(id.clone()).or_insert(0.0);
			*intensity += (1.0 - *intensity) * fade;
		}

		let hovered = self.hovered.clone();
		self.intensity.retain(|id, intensity| {
			if hovered.as_deref() == Some(id.as_str()) {
				return true;
			}
			*intensity *= decay;
			*intensity > 0.005
		});
	}

	/// Smoothed intensity for one concept.
	pub fn intensity(&self, id: &str) -> f64 {
		self.intensity.get(id).copied().unwrap_or(0.0)
	}
}

/// Core state combining the static dataset with view parameters, hover
/// tracking, the drift animator, and the cached scene.
///
/// Created once when the component mounts, then mutated by UI events and
/// ticked each frame by the animation loop.
pub struct VizState {
	pub data: Dataset,
	pub view: ViewState,
	pub scene: Scene,
	pub hover: HoverState,
	pub animator: DriftAnimator,
	/// Elapsed wall time, drives the hallucination pulse phase.
	pub flow_time: f64,
}

impl VizState {
	pub fn new(data: Dataset) -> Self {
		let view = ViewState::default();
		let scene = Scene::build(&data, view.mode);
		Self {
			data,
			view,
			scene,
			hover: HoverState::default(),
			animator: DriftAnimator::new(),
			flow_time: 0.0,
		}
	}

	fn rebuild_scene(&mut self) {
		// Replace, never append: the previous scene is dropped wholesale.
		self.scene = Scene::build(&self.data, self.view.mode);
	}

	/// Switch depiction mode and rebuild the scene.
	pub fn set_mode(&mut self, mode: Mode) {
		if self.view.mode != mode {
			self.view.mode = mode;
			self.rebuild_scene();
		}
	}

	/// Select an educational example; indices wrap around the example list.
	pub fn set_example(&mut self, index: usize) {
		let len = self.data.examples.len().max(1);
		self.view.example = index % len;
		self.rebuild_scene();
	}

	/// Toggle the drift animation. Stopping removes the marker immediately.
	pub fn set_animating(&mut self, animating: bool) {
		self.view.animating = animating;
		if animating {
			self.animator
				.start(self.view.animation, self.view.example, &self.data);
		} else {
			self.animator.stop();
		}
	}

	/// Change what the animation traces; restarts the cycle if running.
	pub fn set_animation_kind(&mut self, kind: AnimationKind) {
		self.view.animation = kind;
		if self.view.animating {
			self.animator.start(kind, self.view.example, &self.data);
		}
	}

	/// Select a concept (or clear). Single selection, last write wins.
	pub fn select(&mut self, id: Option<String>) {
		self.view.selected = id;
	}

	/// Back to the initial presentation: animation off, first example, no
	/// selection. The mode toggle is left where the user put it.
	pub fn reset_all(&mut self) {
		self.view.animating = false;
		self.view.animation = AnimationKind::Idle;
		self.view.selected = None;
		self.view.example = 0;
		self.animator.reset();
		self.rebuild_scene();
	}

	/// Advance time-driven pieces by `dt` seconds.
	pub fn tick(&mut self, dt: f64) {
		self.flow_time += dt;
		self.hover.tick(dt);
		if self.view.animating {
			self.animator.tick(dt, &self.data);
		}
	}

	/// Topmost concept under the given canvas-space position.
	pub fn concept_at(&self, x: f64, y: f64) -> Option<&Concept> {
		let mut found = None;
		for concept in &self.data.concepts {
			let (dx, dy) = (concept.x - x, concept.y - y);
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(concept);
			}
		}
		found
	}

	/// Resolved selected concept, for the detail panel.
	pub fn selected_concept(&self) -> Option<&Concept> {
		self.view
			.selected
			.as_deref()
			.and_then(|id| self.data.concept(id))
	}

	/// The example the educational panel is showing.
	pub fn current_example(&self) -> Option<&Example> {
		self.data.examples.get(self.view.example)
	}

	/// Marker position if a drift traversal is in flight.
	pub fn marker(&self) -> Option<Point> {
		self.animator.marker(&self.data)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::topology::dataset;
	use crate::components::topology::scene::Shape;

	fn state() -> VizState {
		VizState::new(dataset::builtin())
	}

	#[test]
	fn selection_is_last_write_wins() {
		let mut s = state();
		s.select(Some("paris".to_string()));
		assert_eq!(s.selected_concept().unwrap().id, "paris");

		s.select(Some("jupiter".to_string()));
		assert_eq!(s.selected_concept().unwrap().id, "jupiter");

		s.select(None);
		assert!(s.selected_concept().is_none());
	}

	#[test]
	fn example_index_wraps_modulo_count() {
		let mut s = state();
		s.set_example(2);
		assert_eq!(s.view.example, 2);
		s.set_example(3);
		assert_eq!(s.view.example, 0);
		s.set_example(7);
		assert_eq!(s.view.example, 1);
	}

	#[test]
	fn mode_round_trip_restores_edge_counts() {
		let mut s = state();
		let ambient = |s: &VizState| {
			s.scene
				.shapes
				.iter()
				.filter(|sh| matches!(sh, Shape::AmbientPath { .. }))
				.count()
		};
		let halluc = |s: &VizState| {
			s.scene
				.shapes
				.iter()
				.filter(|sh| matches!(sh, Shape::HallucinationPath { .. }))
				.count()
		};
		assert_eq!((ambient(&s), halluc(&s)), (55, 3));

		s.set_mode(Mode::Discrete);
		assert_eq!((ambient(&s), halluc(&s)), (0, 0));

		s.set_mode(Mode::Continuous);
		assert_eq!((ambient(&s), halluc(&s)), (55, 3));
	}

	#[test]
	fn stopping_animation_removes_the_marker() {
		let mut s = state();
		s.set_animation_kind(AnimationKind::Hallucination);
		s.set_animating(true);
		s.tick(0.5);
		assert!(s.marker().is_some());

		s.set_animating(false);
		assert!(s.marker().is_none());

		// A stale frame after the stop must not resurrect anything.
		s.tick(5.0);
		assert!(s.marker().is_none());
	}

	#[test]
	fn reset_clears_animation_selection_and_example() {
		let mut s = state();
		s.set_mode(Mode::Discrete);
		s.set_example(2);
		s.select(Some("mars".to_string()));
		s.set_animation_kind(AnimationKind::Hallucination);
		s.set_animating(true);
		s.tick(0.5);

		s.reset_all();
		assert!(!s.view.animating);
		assert!(s.marker().is_none());
		assert!(s.selected_concept().is_none());
		assert_eq!(s.view.example, 0);
		// Mode is a presentation toggle, not part of the walkthrough.
		assert_eq!(s.view.mode, Mode::Discrete);
	}

	#[test]
	fn hover_intensity_eases_in_and_out() {
		let mut s = state();
		s.hover.set_hover(Some("paris".to_string()));
		for _ in 0..20 {
			s.tick(0.016);
		}
		assert!(s.hover.intensity("paris") > 0.9, "eased in after ~320ms");
		assert_eq!(s.hover.intensity("tokyo"), 0.0);

		s.hover.set_hover(None);
		for _ in 0..40 {
			s.tick(0.016);
		}
		assert!(s.hover.intensity("paris") < 0.05, "eased back out");
	}

	#[test]
	fn hit_testing_finds_the_node_under_the_cursor() {
		let s = state();
		assert_eq!(s.concept_at(102.0, 118.0).unwrap().id, "paris");
		assert_eq!(s.concept_at(300.0, 395.0).map(|c| c.id.as_str()), None);
	}
}
