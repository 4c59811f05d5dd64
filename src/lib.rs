//! concept-topology: interactive exploration of why continuous embedding
//! spaces permit hallucinated associations and discrete category topologies
//! would block them.
//!
//! This crate provides a WASM-based diagram that renders a fixed concept
//! space in two contrasting modes, plus the page chrome around it: mode
//! toggles, animation controls, and an educational panel.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::topology::{AnimationKind, Dataset, Mode, TopologyCanvas};

use components::topology::dataset;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("concept-topology: logging initialized");
}

/// Load a dataset override from a script element with id="concept-data".
/// Expected format: JSON with { concepts, hallucinations, valid_connections,
/// examples }. Falls back to the built-in dataset.
fn load_dataset() -> Dataset {
	match embedded_dataset() {
		Some(data) => data,
		None => dataset::builtin(),
	}
}

fn embedded_dataset() -> Option<Dataset> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("concept-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<Dataset>(&json_text) {
		Ok(data) => {
			info!(
				"concept-topology: loaded {} concepts, {} hallucinations",
				data.concepts.len(),
				data.hallucinations.len()
			);
			Some(data)
		}
		Err(e) => {
			warn!("concept-topology: failed to parse dataset override: {}", e);
			None
		}
	}
}

/// Main application component: the diagram plus its control panel and the
/// educational side panel.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let data = load_dataset();
	let examples = data.examples.clone();
	let lookup = data.clone();

	let (mode, set_mode) = signal(Mode::Continuous);
	let (animating, set_animating) = signal(false);
	let (animation, set_animation) = signal(AnimationKind::Idle);
	let (example, set_example) = signal(0usize);
	let (selected, set_selected) = signal(None::<String>);
	let (show_panel, set_show_panel) = signal(false);

	let toggle_animation = move |_| {
		if animating.get() {
			set_animating.set(false);
		} else {
			set_animation.set(AnimationKind::Hallucination);
			set_animating.set(true);
		}
	};

	let reset_all = move |_| {
		set_animating.set(false);
		set_animation.set(AnimationKind::Idle);
		set_example.set(0);
		set_selected.set(None);
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="AI Hallucination Deep Dive" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="page">
			<header class="page-header">
				<h1>"AI Hallucination Deep Dive"</h1>
				<p>
					"Interactive exploration of topological vs. statistical explanations for AI hallucinations"
				</p>
			</header>

			<div class="controls">
				<div class="mode-buttons">
					<button
						class:active=move || mode.get() == Mode::Continuous
						on:click=move |_| set_mode.set(Mode::Continuous)
					>
						"Current AI (Continuous)"
					</button>
					<button
						class:active=move || mode.get() == Mode::Discrete
						on:click=move |_| set_mode.set(Mode::Discrete)
					>
						"With Torsion (Discrete)"
					</button>
				</div>
				<div class="action-buttons">
					<button class:stop=move || animating.get() on:click=toggle_animation>
						{move || if animating.get() { "Stop" } else { "Animate" }}
					</button>
					<button on:click=reset_all>"Reset"</button>
					<button on:click=move |_| set_show_panel.update(|p| *p = !*p)>"Learn"</button>
				</div>
			</div>

			<div class="content">
				<div class="diagram">
					<TopologyCanvas
						data=data
						mode=mode
						animating=animating
						animation=animation
						example=example
						selected=selected
						on_select=Callback::new(move |id: String| set_selected.set(Some(id)))
					/>

					<div class="mode-cards">
						<div class="mode-card" class:active=move || mode.get() == Mode::Continuous>
							<h3>"Current AI Architecture"</h3>
							<ul>
								<li><strong>"Continuous embedding space"</strong>" - concepts exist as vectors"</li>
								<li><strong>"Smooth interpolation"</strong>" - any concept can reach any other"</li>
								<li><strong>"No logical boundaries"</strong>" - mathematical freedom enables errors"</li>
								<li><strong>"Statistical learning"</strong>" - patterns from training data only"</li>
							</ul>
						</div>
						<div class="mode-card" class:active=move || mode.get() == Mode::Discrete>
							<h3>"Proposed Topological Solution"</h3>
							<ul>
								<li><strong>"Discrete concept categories"</strong>" - hard mathematical boundaries"</li>
								<li><strong>"Topological constraints"</strong>" - torsion prevents impossible paths"</li>
								<li><strong>"Sheaf cohomology"</strong>" - formal obstruction theory"</li>
								<li><strong>"Semantic rings"</strong>" - algebraic structure for meaning"</li>
							</ul>
						</div>
					</div>
				</div>

				<Show when=move || show_panel.get()>
					{
						let examples = examples.clone();
						let lookup = lookup.clone();
						move || {
							let cards = examples
								.iter()
								.enumerate()
								.map(|(i, ex)| {
									let title = ex.title.clone();
									let description = ex.description.clone();
									let explanation = ex.explanation.clone();
									view! {
										<div
											class="example-card"
											class:active=move || example.get() == i
											on:click=move |_| set_example.set(i)
										>
											<h4>{title}</h4>
											<p class="example-description">{description}</p>
											<Show when=move || example.get() == i>
												<p class="example-explanation">{explanation.clone()}</p>
											</Show>
										</div>
									}
								})
								.collect_view();

							let lookup = lookup.clone();
							let detail = move || {
								selected
									.get()
									.and_then(|id| lookup.concept(&id).cloned())
									.map(|concept| {
										view! {
											<div class="concept-detail">
												<h4>"Selected: " {concept.label.clone()}</h4>
												<p>"Category: " {concept.category.title()}</p>
												<ul>
													{concept
														.facts
														.iter()
														.map(|fact| view! { <li>{fact.clone()}</li> })
														.collect_view()}
												</ul>
											</div>
										}
									})
							};

							view! {
								<aside class="learning-panel">
									<h3>"Learning Center"</h3>
									<div class="example-list">{cards}</div>
									{detail}
									<div class="research-note">
										<h4>"Research Status"</h4>
										<p>{dataset::RESEARCH_STATUS}</p>
									</div>
								</aside>
							}
						}
					}
				</Show>
			</div>
		</div>
	}
}
