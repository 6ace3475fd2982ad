//! Leptos component wrapping the particle field canvas.
//!
//! The component creates an HTML canvas element sized to the viewport and
//! drives the simulation via a self-rescheduling `requestAnimationFrame`
//! loop. The canvas is purely decorative (`pointer-events: none`), so the
//! resize and pointer listeners attach to the window rather than the canvas.
//! Everything registered at mount is torn down in `on_cleanup`: the pending
//! frame is cancelled and every listener removed, so no tick ever runs
//! against a disposed surface.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::config::FieldConfig;
use super::field::FieldState;
use super::render;

/// Renders a full-viewport ambient particle animation on a canvas element.
///
/// The component sizes itself to the viewport by default and resizes with
/// the window; set `fullscreen = false` to size to the parent container
/// instead. Explicit `width`/`height` override automatic sizing. The visual
/// preset and force behavior come from [`FieldConfig`].
#[component]
pub fn ParticleField(
	#[prop(default = FieldConfig::default())] config: FieldConfig,
	#[prop(default = true)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let field: Rc<RefCell<Option<FieldState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let mousemove_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(None));
	let mouseleave_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(None));
	let frame_handle: Rc<Cell<i32>> = Rc::new(Cell::new(0));
	let disposed: Rc<Cell<bool>> = Rc::new(Cell::new(false));

	let (field_init, animate_init, resize_cb_init, mousemove_cb_init, mouseleave_cb_init) = (
		field.clone(),
		animate.clone(),
		resize_cb.clone(),
		mousemove_cb.clone(),
		mouseleave_cb.clone(),
	);
	let (frame_init, disposed_init) = (frame_handle.clone(), disposed.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = if fullscreen {
			(
				window
					.inner_width()
					.ok()
					.and_then(|v| v.as_f64())
					.unwrap_or(800.0),
				window
					.inner_height()
					.ok()
					.and_then(|v| v.as_f64())
					.unwrap_or(600.0),
			)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		// A missing 2d context degrades to "no animation", not a failure.
		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(obj)) => match obj.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => return,
			},
			_ => {
				warn!("particle-field: 2d context unavailable, skipping animation");
				return;
			}
		};

		let seed = js_sys::Date::now() as u64;
		*field_init.borrow_mut() = Some(FieldState::new(config.clone(), w, h, seed));

		if fullscreen {
			let (field_resize, canvas_resize) = (field_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some(win) = web_sys::window() else {
					return;
				};
				let (nw, nh) = (
					win.inner_width()
						.ok()
						.and_then(|v| v.as_f64())
						.unwrap_or(800.0),
					win.inner_height()
						.ok()
						.and_then(|v| v.as_f64())
						.unwrap_or(600.0),
				);
				// Resizing the backing bitmap clears it; the next frame
				// repaints everything anyway.
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut f) = *field_resize.borrow_mut() {
					f.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (field_mm, canvas_mm) = (field_init.clone(), canvas.clone());
		*mousemove_cb_init.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			let rect = canvas_mm.get_bounding_client_rect();
			if let Some(ref mut f) = *field_mm.borrow_mut() {
				f.set_pointer(
					ev.client_x() as f64 - rect.left(),
					ev.client_y() as f64 - rect.top(),
				);
			}
		}));
		if let Some(ref cb) = *mousemove_cb_init.borrow() {
			let _ =
				window.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}

		let field_ml = field_init.clone();
		*mouseleave_cb_init.borrow_mut() = Some(Closure::new(move |_: MouseEvent| {
			if let Some(ref mut f) = *field_ml.borrow_mut() {
				f.clear_pointer();
			}
		}));
		if let Some(ref cb) = *mouseleave_cb_init.borrow() {
			let _ =
				window.add_event_listener_with_callback("mouseleave", cb.as_ref().unchecked_ref());
		}

		let (field_anim, animate_inner) = (field_init.clone(), animate_init.clone());
		let (frame_anim, disposed_anim) = (frame_init.clone(), disposed_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if disposed_anim.get() {
				return;
			}
			if let Some(ref mut f) = *field_anim.borrow_mut() {
				f.tick();
				render::render(f, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					if let Ok(handle) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
						frame_anim.set(handle);
					}
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(handle) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				frame_init.set(handle);
			}
		}
	});

	// `on_cleanup` requires `Send + Sync`; the captured `Rc`s are single-thread
	// only, so wrap the closure in `SendWrapper` (safe in CSR/wasm, one thread).
	let cleanup = leptos::__reexports::send_wrapper::SendWrapper::new(move || {
		disposed.set(true);
		if let Some(window) = web_sys::window() {
			let _ = window.cancel_animation_frame(frame_handle.get());
			if let Some(cb) = resize_cb.borrow_mut().take() {
				let _ = window
					.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
			if let Some(cb) = mousemove_cb.borrow_mut().take() {
				let _ = window
					.remove_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
			}
			if let Some(cb) = mouseleave_cb.borrow_mut().take() {
				let _ = window
					.remove_event_listener_with_callback("mouseleave", cb.as_ref().unchecked_ref());
			}
		}
		animate.borrow_mut().take();
		field.borrow_mut().take();
	});
	on_cleanup(move || cleanup.take()());

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			style="display: block; position: fixed; inset: 0; pointer-events: none; z-index: 0;"
		/>
	}
}
