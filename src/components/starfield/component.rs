//! Leptos component wrapping the starfield canvas.
//!
//! The component creates a fixed, full-viewport canvas behind the page
//! content and wires window-level pointer, touch, scroll, and resize
//! handlers (the canvas itself is `pointer-events: none`, so input passes
//! through to the page). An animation loop runs via `requestAnimationFrame`;
//! the shooting-star scheduler runs on its own timers. Every listener,
//! timer, and the animation frame are released again on unmount.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, Event, EventTarget, HtmlCanvasElement, MouseEvent, TouchEvent,
	Window,
};

use super::config::StarfieldConfig;
use super::render;
use super::scheduler::Scheduler;
use super::state::StarfieldState;
use super::theme::Theme;

/// Owns registered window/document listeners so unmount can detach them.
///
/// Each entry keeps the JS function for removal and the closure itself so
/// the callback stays alive while registered.
#[derive(Default)]
struct ListenerRegistry {
	entries: Vec<(EventTarget, &'static str, js_sys::Function, Box<dyn Any>)>,
}

impl ListenerRegistry {
	fn add<T: ?Sized + 'static>(
		&mut self,
		target: &EventTarget,
		event: &'static str,
		closure: Closure<T>,
	) {
		let function: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
		let _ = target.add_event_listener_with_callback(event, &function);
		self.entries.push((target.clone(), event, function, Box::new(closure)));
	}

	fn clear(&mut self) {
		for (target, event, function, _closure) in self.entries.drain(..) {
			let _ = target.remove_event_listener_with_callback(event, &function);
		}
	}
}

/// Renders the animated starfield background on a canvas element.
///
/// Mount it once, high in the tree; it sizes itself to the viewport and
/// follows resizes. Pass a [`StarfieldConfig`] to pick a theme preset or
/// honor a reduced-motion preference.
#[component]
pub fn StarfieldCanvas(#[prop(optional)] config: StarfieldConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<StarfieldState>>> = Rc::new(RefCell::new(None));
	let listeners: Rc<RefCell<ListenerRegistry>> = Rc::new(RefCell::new(ListenerRegistry::default()));
	let scheduler = Rc::new(Scheduler::new(state.clone()));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let running: Rc<Cell<bool>> = Rc::new(Cell::new(true));

	let theme = Rc::new(match config.theme.as_deref() {
		Some(name) => Theme::by_name(name).unwrap_or_else(|| {
			warn!("starfield: unknown theme {name:?}, using default");
			Theme::default()
		}),
		None => Theme::default(),
	});
	let reduced_motion = config.reduced_motion;

	let (state_init, listeners_init, scheduler_init, animate_init, raf_init, running_init) = (
		state.clone(),
		listeners.clone(),
		scheduler.clone(),
		animate.clone(),
		raf_id.clone(),
		running.clone(),
	);
	let theme_init = theme.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if state_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = (
			window.inner_width().unwrap().as_f64().unwrap(),
			window.inner_height().unwrap().as_f64().unwrap(),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		*state_init.borrow_mut() = Some(StarfieldState::new(w, h, js_sys::Date::now() as u64));

		let state_mm = state_init.clone();
		let on_mousemove = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			if let Some(ref mut engine) = *state_mm.borrow_mut() {
				let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
				engine.pointer_moved(x / engine.width * 100.0, y / engine.height * 100.0);
			}
		});
		listeners_init.borrow_mut().add(&window, "mousemove", on_mousemove);

		let state_ts = state_init.clone();
		let on_touchstart = Closure::<dyn FnMut(TouchEvent)>::new(move |ev: TouchEvent| {
			let Some(touch) = ev.touches().get(0) else {
				return;
			};
			if let Some(ref mut engine) = *state_ts.borrow_mut() {
				let (x, y) = (touch.client_x() as f64, touch.client_y() as f64);
				engine.pointer_moved(x / engine.width * 100.0, y / engine.height * 100.0);
			}
		});
		listeners_init.borrow_mut().add(&window, "touchstart", on_touchstart);

		let state_tm = state_init.clone();
		let on_touchmove = Closure::<dyn FnMut(TouchEvent)>::new(move |ev: TouchEvent| {
			let Some(touch) = ev.touches().get(0) else {
				return;
			};
			if let Some(ref mut engine) = *state_tm.borrow_mut() {
				let (x, y) = (touch.client_x() as f64, touch.client_y() as f64);
				engine.pointer_moved(x / engine.width * 100.0, y / engine.height * 100.0);
			}
		});
		listeners_init.borrow_mut().add(&window, "touchmove", on_touchmove);

		let state_te = state_init.clone();
		let on_touchend = Closure::<dyn FnMut(TouchEvent)>::new(move |_: TouchEvent| {
			if let Some(ref mut engine) = *state_te.borrow_mut() {
				engine.pointer_left();
			}
		});
		listeners_init.borrow_mut().add(&window, "touchend", on_touchend);

		if let Some(root) = window.document().and_then(|doc| doc.document_element()) {
			let state_ml = state_init.clone();
			let on_mouseleave = Closure::<dyn FnMut(MouseEvent)>::new(move |_: MouseEvent| {
				if let Some(ref mut engine) = *state_ml.borrow_mut() {
					engine.pointer_left();
				}
			});
			listeners_init.borrow_mut().add(&root, "mouseleave", on_mouseleave);
		}

		let state_sc = state_init.clone();
		let on_scroll = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
			let win: Window = web_sys::window().unwrap();
			if let Some(ref mut engine) = *state_sc.borrow_mut() {
				engine.scrolled(win.scroll_y().unwrap_or(0.0));
			}
		});
		listeners_init.borrow_mut().add(&window, "scroll", on_scroll);

		let (state_rs, canvas_rs) = (state_init.clone(), canvas.clone());
		let on_resize = Closure::<dyn FnMut()>::new(move || {
			let win: Window = web_sys::window().unwrap();
			let (nw, nh) = (
				win.inner_width().unwrap().as_f64().unwrap(),
				win.inner_height().unwrap().as_f64().unwrap(),
			);
			canvas_rs.set_width(nw as u32);
			canvas_rs.set_height(nh as u32);
			if let Some(ref mut engine) = *state_rs.borrow_mut() {
				engine.resize(nw, nh);
			}
		});
		listeners_init.borrow_mut().add(&window, "resize", on_resize);

		if !reduced_motion {
			scheduler_init.start();
		}

		let (state_anim, theme_anim, animate_inner, raf_inner, running_inner) = (
			state_init.clone(),
			theme_init.clone(),
			animate_init.clone(),
			raf_init.clone(),
			running_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if !running_inner.get() {
				return;
			}
			if let Some(ref mut engine) = *state_anim.borrow_mut() {
				let dt = 0.016;
				engine.tick(dt);
				render::render(engine, &ctx, &theme_anim, reduced_motion);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Ok(id) = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref())
				{
					raf_inner.set(Some(id));
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				raf_init.set(Some(id));
			}
		}
	});

	// The cleanup closure captures `!Send`/`!Sync` `Rc` handles, but leptos's
	// `on_cleanup` requires `Send + Sync`. In the single-threaded wasm target
	// this is safe; wrap the handles in a `SendWrapper` (re-exported by leptos)
	// so the closure satisfies the bound without changing behavior.
	let cleanup = leptos::__reexports::send_wrapper::SendWrapper::new((
		running, scheduler, listeners, raf_id, animate, state,
	));
	on_cleanup(move || {
		let (running, scheduler, listeners, raf_id, animate, state) = &*cleanup;
		running.set(false);
		scheduler.stop();
		listeners.borrow_mut().clear();
		if let Some(window) = web_sys::window() {
			if let Some(id) = raf_id.take() {
				let _ = window.cancel_animation_frame(id);
			}
		}
		animate.borrow_mut().take();
		state.borrow_mut().take();
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="starfield-canvas"
			style="position: fixed; inset: 0; z-index: -1; display: block; pointer-events: none;"
		/>
	}
}
