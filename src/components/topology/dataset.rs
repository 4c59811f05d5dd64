//! Built-in dataset: the concepts, edges, and examples the diagram ships with.

use super::types::{
	Category, Concept, Dataset, Example, HallucinationEdge, Highlight, Severity, ValidConnection,
};

/// Shown in the educational panel regardless of mode or selection.
pub const RESEARCH_STATUS: &str = "The topological explanation is theoretically interesting but \
	lacks peer-reviewed validation. Current hallucination research focuses on statistical and \
	training-based solutions.";

fn concept(
	id: &str,
	label: &str,
	x: f64,
	y: f64,
	category: Category,
	color: &str,
	facts: [&str; 3],
) -> Concept {
	Concept {
		id: id.to_string(),
		label: label.to_string(),
		x,
		y,
		category,
		color: color.to_string(),
		facts: facts.iter().map(|f| f.to_string()).collect(),
	}
}

/// The normative dataset, matching the published diagram.
///
/// Clustered so that each category forms a spatially coherent group: cities
/// upper left, countries lower left, planets right, abstract concepts center.
pub fn builtin() -> Dataset {
	let concepts = vec![
		concept(
			"paris",
			"Paris",
			100.0,
			120.0,
			Category::Cities,
			"#3b82f6",
			["Capital of France", "City of Light", "Population: 2.1M"],
		),
		concept(
			"london",
			"London",
			80.0,
			180.0,
			Category::Cities,
			"#3b82f6",
			["Capital of UK", "Thames River", "Population: 9M"],
		),
		concept(
			"tokyo",
			"Tokyo",
			150.0,
			160.0,
			Category::Cities,
			"#3b82f6",
			["Capital of Japan", "Largest metro area", "Population: 37M"],
		),
		concept(
			"france",
			"France",
			70.0,
			280.0,
			Category::Countries,
			"#1d4ed8",
			["European country", "67M population", "Republic"],
		),
		concept(
			"japan",
			"Japan",
			180.0,
			280.0,
			Category::Countries,
			"#1d4ed8",
			["Island nation", "125M population", "Constitutional monarchy"],
		),
		concept(
			"jupiter",
			"Jupiter",
			480.0,
			120.0,
			Category::Planets,
			"#ef4444",
			["Gas giant", "Largest planet", "79 moons"],
		),
		concept(
			"mars",
			"Mars",
			450.0,
			180.0,
			Category::Planets,
			"#ef4444",
			["Red planet", "Fourth from sun", "Two moons"],
		),
		concept(
			"earth",
			"Earth",
			520.0,
			170.0,
			Category::Planets,
			"#ef4444",
			["Our home", "Blue planet", "One moon"],
		),
		concept(
			"capital",
			"Capital",
			280.0,
			120.0,
			Category::Concepts,
			"#10b981",
			["Administrative center", "Seat of government", "Political hub"],
		),
		concept(
			"planet",
			"Planet",
			380.0,
			120.0,
			Category::Concepts,
			"#10b981",
			["Celestial body", "Orbits star", "Cleared orbit"],
		),
		concept(
			"city",
			"City",
			230.0,
			180.0,
			Category::Concepts,
			"#10b981",
			["Urban area", "Dense population", "Infrastructure"],
		),
	];

	let hallucinations = vec![
		HallucinationEdge {
			from: "paris".to_string(),
			to: "jupiter".to_string(),
			connection: "capital of".to_string(),
			severity: Severity::Absurd,
			offset: 0.0,
		},
		HallucinationEdge {
			from: "tokyo".to_string(),
			to: "mars".to_string(),
			connection: "located on".to_string(),
			severity: Severity::Impossible,
			offset: 30.0,
		},
		HallucinationEdge {
			from: "london".to_string(),
			to: "earth".to_string(),
			connection: "moon of".to_string(),
			severity: Severity::CategoryError,
			offset: -20.0,
		},
	];

	let valid_connections = vec![
		ValidConnection {
			from: "paris".to_string(),
			to: "france".to_string(),
			connection: "capital of".to_string(),
			strength: 1.0,
		},
		ValidConnection {
			from: "tokyo".to_string(),
			to: "japan".to_string(),
			connection: "capital of".to_string(),
			strength: 1.0,
		},
		ValidConnection {
			from: "paris".to_string(),
			to: "city".to_string(),
			connection: "is a".to_string(),
			strength: 0.9,
		},
		ValidConnection {
			from: "jupiter".to_string(),
			to: "planet".to_string(),
			connection: "is a".to_string(),
			strength: 0.9,
		},
	];

	let examples = vec![
		Example {
			title: "The Classic Hallucination".to_string(),
			description: "Why does AI sometimes say 'Paris is the capital of Jupiter'?".to_string(),
			highlight: Highlight::Pair {
				from: "paris".to_string(),
				to: "jupiter".to_string(),
			},
			explanation: "In continuous space, the AI finds a path: Paris \u{2192} Capital \u{2192} \
				(some mathematical interpolation) \u{2192} Planet \u{2192} Jupiter. There's no hard \
				boundary preventing this impossible connection."
				.to_string(),
		},
		Example {
			title: "Continuous Interpolation Problem".to_string(),
			description: "Everything connects to everything else".to_string(),
			highlight: Highlight::Sentinel("all-paths".to_string()),
			explanation: "Current transformers operate in continuous vector spaces where any \
				concept can theoretically reach any other through smooth mathematical \
				transformations."
				.to_string(),
		},
		Example {
			title: "Proposed Solution: Discrete Boundaries".to_string(),
			description: "Topological barriers prevent impossible connections".to_string(),
			highlight: Highlight::Pair {
				from: "tokyo".to_string(),
				to: "mars".to_string(),
			},
			explanation: "With torsion and discrete boundaries, incompatible concept categories \
				would have unbridgeable gaps, making hallucinations mathematically impossible."
				.to_string(),
		},
	];

	Dataset {
		concepts,
		hallucinations,
		valid_connections,
		examples,
	}
}
