use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::config::LayoutConfig;
use super::render;
use super::state::ForceGraphState;
use super::types::GraphData;

const FALLBACK_WIDTH: f64 = 800.0;
const FALLBACK_HEIGHT: f64 = 500.0;

/// Canvas chart that lays out `data` once per change and animates drags.
///
/// Without an explicit size the canvas fills its parent.
#[component]
pub fn ForceGraphCanvas(
	/// Graph to draw; every new value starts a fresh layout pass.
	#[prop(into)]
	data: Signal<GraphData>,
	/// Chart preset, e.g. [`LayoutConfig::TIGHT`].
	config: &'static LayoutConfig,
	/// Width in CSS pixels.
	#[prop(default = None)]
	width: Option<f64>,
	/// Height in CSS pixels.
	#[prop(default = None)]
	height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let layout_error = RwSignal::new(None::<String>);
	let state: Rc<RefCell<Option<ForceGraphState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let disposed = Arc::new(AtomicBool::new(false));
	let (state_init, animate_init, disposed_init) =
		(state.clone(), animate.clone(), disposed.clone());

	Effect::new(move |_| {
		let data = data.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = (
			width.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_width() as f64)
					.filter(|w| *w > 0.0)
					.unwrap_or(FALLBACK_WIDTH)
			}),
			height.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_height() as f64)
					.filter(|h| *h > 0.0)
					.unwrap_or(FALLBACK_HEIGHT)
			}),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			error!("canvas 2d context unavailable");
			return;
		};

		// Every new input starts from nothing; the old layout is dropped here.
		let next = match ForceGraphState::new(&data, config, w, h) {
			Ok(next) => {
				layout_error.set(None);
				next
			}
			Err(e) => {
				error!("layout failed: {e}");
				layout_error.set(Some(e.to_string()));
				None
			}
		};
		if next.is_none() {
			ctx.clear_rect(0.0, 0.0, w, h);
		} else {
			info!("laid out {} nodes, {} links", data.nodes().len(), data.links().len());
		}
		*state_init.borrow_mut() = next;

		if animate_init.borrow().is_some() {
			return;
		}
		let (state_anim, animate_inner, disposed_anim) =
			(state_init.clone(), animate_init.clone(), disposed_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if disposed_anim.load(Ordering::Relaxed) {
				state_anim.borrow_mut().take();
				animate_inner.borrow_mut().take();
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick();
				render::render(s, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	// Releases the drag pin and any pending cool-down on the next frame.
	on_cleanup(move || disposed.store(true, Ordering::Relaxed));

	let pointer = move |ev: &MouseEvent| -> Option<(f64, f64)> {
		let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
		let rect = canvas.get_bounding_client_rect();
		Some((
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		))
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(&ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			if s.begin_drag(x, y) {
				ev.prevent_default();
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(&ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.drag.is_dragging() {
				s.drag_to(x, y);
			} else {
				let hovered = s.node_at_position(x, y);
				s.set_hover(hovered);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.end_drag();
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.end_drag();
			s.set_hover(None);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			style="display: block; cursor: grab;"
		/>
		{move || {
			layout_error
				.get()
				.map(|e| view! { <p class="graph-error">"Cannot draw graph: " {e}</p> })
		}}
	}
}
