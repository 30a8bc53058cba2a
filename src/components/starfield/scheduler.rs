//! Browser timer plumbing for the shooting-star cadence.
//!
//! The scheduler owns every handle it creates: the 2s one-shot, the 4s
//! repeating interval, and one retirement timeout per live event. `stop`
//! clears them all and is safe to call any number of times, so unmount
//! cannot leave a timer behind to mutate torn-down state.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use super::shooting::{INITIAL_DELAY_MS, SPAWN_PERIOD_MS};
use super::state::StarfieldState;

type SharedState = Rc<RefCell<Option<StarfieldState>>>;
type Retirements = Rc<RefCell<HashMap<u64, Retirement>>>;

struct Retirement {
	handle: i32,
	_closure: Closure<dyn FnMut()>,
}

/// Owns the spawn timers and every pending retirement timer.
pub struct Scheduler {
	state: SharedState,
	initial: Cell<Option<i32>>,
	interval: Cell<Option<i32>>,
	initial_cb: RefCell<Option<Closure<dyn FnMut()>>>,
	interval_cb: RefCell<Option<Closure<dyn FnMut()>>>,
	retirements: Retirements,
}

impl Scheduler {
	/// A stopped scheduler bound to the shared engine state.
	pub fn new(state: SharedState) -> Self {
		Self {
			state,
			initial: Cell::new(None),
			interval: Cell::new(None),
			initial_cb: RefCell::new(None),
			interval_cb: RefCell::new(None),
			retirements: Rc::new(RefCell::new(HashMap::new())),
		}
	}

	/// Register the one-shot and the repeating interval. Calling again
	/// while running is a no-op.
	pub fn start(&self) {
		if self.initial.get().is_some() || self.interval.get().is_some() {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};

		let (state, retirements) = (self.state.clone(), self.retirements.clone());
		let initial = Closure::<dyn FnMut()>::new(move || {
			spawn_one(&state, &retirements, true);
		});
		if let Ok(handle) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
			initial.as_ref().unchecked_ref(),
			INITIAL_DELAY_MS,
		) {
			self.initial.set(Some(handle));
			*self.initial_cb.borrow_mut() = Some(initial);
		}

		let (state, retirements) = (self.state.clone(), self.retirements.clone());
		let tick = Closure::<dyn FnMut()>::new(move || {
			spawn_one(&state, &retirements, false);
		});
		if let Ok(handle) = window.set_interval_with_callback_and_timeout_and_arguments_0(
			tick.as_ref().unchecked_ref(),
			SPAWN_PERIOD_MS,
		) {
			self.interval.set(Some(handle));
			*self.interval_cb.borrow_mut() = Some(tick);
		}
	}

	/// Clear both spawn timers and every pending retirement. Idempotent.
	pub fn stop(&self) {
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Some(handle) = self.initial.take() {
			window.clear_timeout_with_handle(handle);
		}
		if let Some(handle) = self.interval.take() {
			window.clear_interval_with_handle(handle);
		}
		self.initial_cb.borrow_mut().take();
		self.interval_cb.borrow_mut().take();
		for (_, retirement) in self.retirements.borrow_mut().drain() {
			window.clear_timeout_with_handle(retirement.handle);
		}
	}
}

/// Run one spawn attempt and, if an event was born, schedule its
/// retirement at `duration + 0.5` seconds.
fn spawn_one(state: &SharedState, retirements: &Retirements, force: bool) {
	let spawned = {
		let mut guard = state.borrow_mut();
		let Some(engine) = guard.as_mut() else {
			return;
		};
		if force {
			Some(engine.spawn_shooting_star())
		} else {
			engine.try_spawn_shooting_star()
		}
	};
	let Some(star) = spawned else {
		return;
	};

	let (state_retire, retirements_retire, id) = (state.clone(), retirements.clone(), star.id);
	let retire = Closure::<dyn FnMut()>::new(move || {
		if let Some(ref mut engine) = *state_retire.borrow_mut() {
			engine.retire_shooting_star(id);
		}
		retirements_retire.borrow_mut().remove(&id);
	});

	let Some(window) = web_sys::window() else {
		return;
	};
	if let Ok(handle) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
		retire.as_ref().unchecked_ref(),
		(star.retire_after() * 1000.0) as i32,
	) {
		retirements
			.borrow_mut()
			.insert(id, Retirement { handle, _closure: retire });
	}
}
