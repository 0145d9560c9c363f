use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::config::CircuitConfig;
use super::frame_loop::{Animator, CancelToken};
use super::state::CircuitState;
use super::types::Viewport;

/// Reasons the background declines to start. Nothing is registered when
/// mounting fails.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MountError {
	#[error("no browser window")]
	NoWindow,
	#[error("window size unavailable")]
	NoViewport,
	#[error("2d drawing context unavailable")]
	NoContext,
	#[error("canvas returned a non-2d context")]
	WrongContext,
}

fn window_viewport(window: &Window) -> Result<Viewport, MountError> {
	let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64());
	match (dim(window.inner_width()), dim(window.inner_height())) {
		(Some(w), Some(h)) => Ok(Viewport::new(w as u32, h as u32)),
		_ => Err(MountError::NoViewport),
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, MountError> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.ok_or(MountError::NoContext)?
		.dyn_into()
		.map_err(|_| MountError::WrongContext)
}

fn random_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

/// Everything registered with the browser while the background is live.
struct Mounted {
	window: Window,
	canvas: HtmlCanvasElement,
	token: CancelToken,
	frame_id: Rc<Cell<Option<i32>>>,
	animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
	on_resize: Closure<dyn FnMut()>,
	on_pointer: Closure<dyn FnMut(MouseEvent)>,
}

impl Mounted {
	fn teardown(self) {
		self.token.cancel();
		if let Some(id) = self.frame_id.take() {
			let _ = self.window.cancel_animation_frame(id);
		}
		let _ = self
			.window
			.remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
		let _ = self.canvas.remove_event_listener_with_callback(
			"mousemove",
			self.on_pointer.as_ref().unchecked_ref(),
		);
		// The frame closure holds a handle to its own slot.
		self.animate.borrow_mut().take();
		info!("Circuit background stopped");
	}
}

fn mount(
	canvas: HtmlCanvasElement,
	config: CircuitConfig,
	seed: u64,
	state: Rc<RefCell<Option<CircuitState>>>,
) -> Result<Mounted, MountError> {
	let window = web_sys::window().ok_or(MountError::NoWindow)?;
	let viewport = window_viewport(&window)?;
	let ctx = context_2d(&canvas)?;

	canvas.set_width(viewport.width as u32);
	canvas.set_height(viewport.height as u32);

	let circuit = CircuitState::new(viewport, config, &mut SmallRng::seed_from_u64(seed));
	info!(
		"Circuit background started: {}x{}, {} nodes, {} edges (seed {})",
		viewport.width,
		viewport.height,
		circuit.nodes.len(),
		circuit.edge_count(),
		seed
	);
	*state.borrow_mut() = Some(circuit);

	let (state_resize, canvas_resize) = (state.clone(), canvas.clone());
	let on_resize = Closure::<dyn FnMut()>::new(move || {
		let Some(viewport) = web_sys::window().and_then(|w| window_viewport(&w).ok()) else {
			return;
		};
		canvas_resize.set_width(viewport.width as u32);
		canvas_resize.set_height(viewport.height as u32);
		if let Some(ref mut s) = *state_resize.borrow_mut() {
			s.resize(viewport);
		}
		debug!("Circuit surface resized to {}x{}", viewport.width, viewport.height);
	});
	let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());

	let (state_pointer, canvas_pointer) = (state.clone(), canvas.clone());
	let on_pointer = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
		let rect = canvas_pointer.get_bounding_client_rect();
		if let Some(ref mut s) = *state_pointer.borrow_mut() {
			s.set_pointer(
				ev.client_x() as f64 - rect.left(),
				ev.client_y() as f64 - rect.top(),
			);
		}
	});
	let _ =
		canvas.add_event_listener_with_callback("mousemove", on_pointer.as_ref().unchecked_ref());

	let token = CancelToken::default();
	let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let animator = Animator::new(state, token.clone());
	let (animate_inner, frame_id_inner) = (animate.clone(), frame_id.clone());
	*animate.borrow_mut() = Some(Closure::new(move || {
		frame_id_inner.set(None);
		if !animator.frame(&ctx) {
			return;
		}
		if let Some(ref cb) = *animate_inner.borrow() {
			if let Some(win) = web_sys::window() {
				if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
					frame_id_inner.set(Some(id));
				}
			}
		}
	}));
	if let Some(ref cb) = *animate.borrow() {
		if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
			frame_id.set(Some(id));
		}
	}

	Ok(Mounted {
		window,
		canvas,
		token,
		frame_id,
		animate,
		on_resize,
		on_pointer,
	})
}

/// Full-viewport animated circuit graph, meant to sit beneath page content.
///
/// The graph is built once on mount; window resizes only resize the canvas.
#[component]
pub fn CircuitBackground(
	/// Tuning constants; defaults reproduce the stock look.
	#[prop(optional)]
	config: Option<CircuitConfig>,
	/// Fixed seed for a reproducible layout; random when absent.
	#[prop(optional)]
	seed: Option<u64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<CircuitState>>> = Rc::new(RefCell::new(None));
	let mounted: Rc<RefCell<Option<Mounted>>> = Rc::new(RefCell::new(None));

	let mounted_cleanup = SendWrapper::new(mounted.clone());
	on_cleanup(move || {
		let slot: &Rc<RefCell<Option<Mounted>>> = &mounted_cleanup;
		if let Some(m) = slot.borrow_mut().take() {
			m.teardown();
		}
	});

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		if let Some(previous) = mounted.borrow_mut().take() {
			previous.teardown();
		}

		let config = config.clone().unwrap_or_default();
		match mount(canvas, config, seed.unwrap_or_else(random_seed), state.clone()) {
			Ok(m) => *mounted.borrow_mut() = Some(m),
			Err(err) => warn!("Circuit background disabled: {err}"),
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="circuit-background"
			style="position: fixed; inset: 0; width: 100%; height: 100%; display: block; z-index: 1;"
		/>
	}
}
