//! Interactive concept-topology visualization component.
//!
//! Contrasts two depictions of the same concept space on an HTML canvas:
//! - Continuous mode: a smooth embedding field where every concept pair is
//!   connected by a faint interpolation path and hallucinated associations
//!   pulse across it unimpeded
//! - Discrete mode: padded category boundaries with in-category connections
//!   and barrier glyphs where the hallucinated paths are blocked
//!
//! A drift animation moves a marker along the hallucination paths to
//! visualize reasoning wandering between unrelated concepts.
//!
//! # Example
//!
//! ```ignore
//! use concept_topology::{TopologyCanvas, Mode, AnimationKind, dataset};
//!
//! let (mode, _) = signal(Mode::Continuous);
//! let (animating, _) = signal(false);
//!
//! view! {
//!     <TopologyCanvas
//!         data=dataset::builtin()
//!         mode=mode
//!         animating=animating
//!         ..
//!     />
//! }
//! ```

mod animation;
mod component;
pub mod dataset;
pub mod geometry;
mod render;
pub mod scene;
mod state;
pub mod theme;
pub mod types;

pub use component::TopologyCanvas;
pub use theme::Theme;
pub use types::{AnimationKind, Category, Concept, Dataset, Example, Mode};
