//! Leptos component wrapping the topology canvas.
//!
//! The component creates the canvas element, wires up click/hover handlers,
//! and runs the animation loop via `requestAnimationFrame`. Each frame it
//! reconciles the UI shell's signals into the visualization state, ticks the
//! time-driven pieces, and repaints. The shell owns every control; the canvas
//! only reports node clicks back through `on_select`.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::render;
use super::scene::{CANVAS_HEIGHT, CANVAS_WIDTH};
use super::state::VizState;
use super::theme::Theme;
use super::types::{AnimationKind, Dataset, Mode};

/// Bundles the visualization state with its theme.
struct CanvasContext {
	state: VizState,
	theme: Theme,
}

/// Map a mouse event into the 600x400 logical canvas space. The canvas
/// scales to its container width, so positions come via the bounding rect.
fn canvas_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	let sx = if rect.width() > 0.0 {
		CANVAS_WIDTH / rect.width()
	} else {
		1.0
	};
	let sy = if rect.height() > 0.0 {
		CANVAS_HEIGHT / rect.height()
	} else {
		1.0
	};
	(
		(ev.client_x() as f64 - rect.left()) * sx,
		(ev.client_y() as f64 - rect.top()) * sy,
	)
}

/// Renders the interactive topology diagram on a canvas element.
///
/// All view parameters arrive as read-only signals owned by the surrounding
/// shell; the component never mutates them. Node clicks are reported through
/// `on_select` and it is the shell's decision what to do with them.
#[component]
pub fn TopologyCanvas(
	data: Dataset,
	#[prop(into)] mode: Signal<Mode>,
	#[prop(into)] animating: Signal<bool>,
	#[prop(into)] animation: Signal<AnimationKind>,
	#[prop(into)] example: Signal<usize>,
	#[prop(into)] selected: Signal<Option<String>>,
	#[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<CanvasContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init) = (context.clone(), animate.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		canvas.set_width(CANVAS_WIDTH as u32);
		canvas.set_height(CANVAS_HEIGHT as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		*context_init.borrow_mut() = Some(CanvasContext {
			state: VizState::new(data.clone()),
			theme: Theme::default(),
		});

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				let dt = 0.016;

				// Reconcile the shell's signals before ticking, so a
				// cleared animating flag cancels ahead of this frame's
				// animation step.
				let mode = mode.get_untracked();
				if c.state.view.mode != mode {
					c.state.set_mode(mode);
				}
				let example = example.get_untracked();
				if c.state.view.example != example {
					c.state.set_example(example);
				}
				let kind = animation.get_untracked();
				if c.state.view.animation != kind {
					c.state.set_animation_kind(kind);
				}
				let animating = animating.get_untracked();
				if c.state.view.animating != animating {
					c.state.set_animating(animating);
				}
				let selected = selected.get_untracked();
				if c.state.view.selected != selected {
					c.state.select(selected);
				}

				c.state.tick(dt);
				render::render(&c.state, &ctx, &c.theme);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_click = context.clone();
	let on_click = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = canvas_position(&canvas, &ev);

		if let Some(ref mut c) = *context_click.borrow_mut() {
			if let Some(concept) = c.state.concept_at(x, y) {
				let id = concept.id.clone();
				c.state.select(Some(id.clone()));
				on_select.run(id);
			}
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = canvas_position(&canvas, &ev);

		if let Some(ref mut c) = *context_mm.borrow_mut() {
			let hovered = c.state.concept_at(x, y).map(|concept| concept.id.clone());
			c.state.hover.set_hover(hovered);
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.state.hover.set_hover(None);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="topology-canvas"
			on:click=on_click
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style="display: block; width: 100%; max-height: 400px; cursor: pointer;"
		/>
	}
}
