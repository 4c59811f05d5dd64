//! Data model for the topology visualization: concepts, edges, examples.

use serde::Deserialize;

/// Which depiction of concept space is being rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
	/// Smooth embedding space: every concept can interpolate to every other.
	Continuous,
	/// Partitioned space: category boundaries block cross-category paths.
	Discrete,
}

/// What the drift animation is currently tracing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationKind {
	/// Nothing to animate.
	#[default]
	Idle,
	/// A marker drifting along hallucination edges.
	Hallucination,
}

/// Closed set of concept categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
	Cities,
	Countries,
	Planets,
	Concepts,
}

impl Category {
	/// Every category, in display order.
	pub const ALL: [Category; 4] = [
		Category::Cities,
		Category::Countries,
		Category::Planets,
		Category::Concepts,
	];

	/// Capitalized display title.
	pub fn title(self) -> &'static str {
		match self {
			Category::Cities => "Cities",
			Category::Countries => "Countries",
			Category::Planets => "Planets",
			Category::Concepts => "Concepts",
		}
	}
}

/// A labeled concept node with a fixed position in the 600x400 canvas space.
#[derive(Clone, Debug, Deserialize)]
pub struct Concept {
	/// Unique identifier, referenced by edges.
	pub id: String,
	/// Display label drawn beneath the node.
	pub label: String,
	pub x: f64,
	pub y: f64,
	pub category: Category,
	/// CSS hex color (e.g. "#3b82f6").
	pub color: String,
	/// Short facts shown in the detail panel when selected.
	pub facts: Vec<String>,
}

/// How wrong a hallucinated association is. Informational only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
	Absurd,
	Impossible,
	CategoryError,
}

/// A depicted false association between two concepts.
#[derive(Clone, Debug, Deserialize)]
pub struct HallucinationEdge {
	pub from: String,
	pub to: String,
	/// Relation label, e.g. "capital of".
	pub connection: String,
	pub severity: Severity,
	/// Vertical label offset in pixels. Zero means "use the index-based
	/// default spread".
	#[serde(default)]
	pub offset: f64,
}

/// A depicted factually correct association.
#[derive(Clone, Debug, Deserialize)]
pub struct ValidConnection {
	pub from: String,
	pub to: String,
	pub connection: String,
	/// Association strength in [0, 1]. Reserved for future visual
	/// weighting; not consumed by any rendering rule.
	pub strength: f64,
}

/// What an educational example points the viewer at.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Highlight {
	/// A specific from/to concept pair.
	Pair { from: String, to: String },
	/// The "all-paths" sentinel. Reserved; not consumed by rendering.
	Sentinel(String),
}

/// A guided walkthrough entry shown in the educational panel.
#[derive(Clone, Debug, Deserialize)]
pub struct Example {
	pub title: String,
	pub description: String,
	pub highlight: Highlight,
	pub explanation: String,
}

/// Complete static dataset: concepts plus the edges and examples over them.
///
/// Defined once at startup and never mutated. Edge endpoints are expected to
/// resolve through [`Dataset::concept`]; a dangling id skips that edge only.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Dataset {
	pub concepts: Vec<Concept>,
	pub hallucinations: Vec<HallucinationEdge>,
	pub valid_connections: Vec<ValidConnection>,
	pub examples: Vec<Example>,
}

impl Dataset {
	/// Look up a concept by id.
	pub fn concept(&self, id: &str) -> Option<&Concept> {
		self.concepts.iter().find(|c| c.id == id)
	}

	/// All concepts in a category, in dataset order.
	pub fn category_members(&self, category: Category) -> Vec<&Concept> {
		self.concepts
			.iter()
			.filter(|c| c.category == category)
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn highlight_deserializes_pair_and_sentinel() {
		let pair: Highlight =
			serde_json::from_str(r#"{ "from": "paris", "to": "jupiter" }"#).unwrap();
		assert_eq!(
			pair,
			Highlight::Pair {
				from: "paris".into(),
				to: "jupiter".into()
			}
		);

		let sentinel: Highlight = serde_json::from_str(r#""all-paths""#).unwrap();
		assert_eq!(sentinel, Highlight::Sentinel("all-paths".into()));
	}

	#[test]
	fn severity_uses_kebab_case() {
		let s: Severity = serde_json::from_str(r#""category-error""#).unwrap();
		assert_eq!(s, Severity::CategoryError);
	}

	#[test]
	fn dataset_lookup_by_id() {
		let data = crate::components::topology::dataset::builtin();
		assert_eq!(data.concept("paris").unwrap().label, "Paris");
		assert!(data.concept("atlantis").is_none());
	}
}
