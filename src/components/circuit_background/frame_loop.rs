use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::render;
use super::state::CircuitState;
use super::surface::DrawTarget;

/// Shared stop flag for the frame loop, checked before every frame.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
	pub fn cancel(&self) {
		self.0.set(true);
	}

	pub fn is_cancelled(&self) -> bool {
		self.0.get()
	}
}

/// One animation frame: step the simulation, then paint it.
pub struct Animator {
	state: Rc<RefCell<Option<CircuitState>>>,
	token: CancelToken,
}

impl Animator {
	pub fn new(state: Rc<RefCell<Option<CircuitState>>>, token: CancelToken) -> Self {
		Self { state, token }
	}

	/// Runs a frame and reports whether another should be scheduled.
	/// Once the token is cancelled nothing is stepped or drawn.
	pub fn frame<D: DrawTarget + ?Sized>(&self, target: &D) -> bool {
		if self.token.is_cancelled() {
			return false;
		}
		if let Some(ref mut s) = *self.state.borrow_mut() {
			s.tick();
			render::render(s, target);
		}
		true
	}
}
