/// Re-entrancy guard for click handling
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Busy,
}

/// Shared idle/busy token; clones observe the same state
#[derive(Debug, Clone)]
pub struct RunGuard {
    state: Rc<Cell<RunState>>,
}

impl RunGuard {
    pub fn new() -> Self {
        RunGuard {
            state: Rc::new(Cell::new(RunState::Idle)),
        }
    }

    pub fn state(&self) -> RunState {
        self.state.get()
    }

    pub fn is_busy(&self) -> bool {
        self.state() == RunState::Busy
    }

    /// Flip Idle to Busy, or return `None` if a run is already in flight.
    ///
    /// The state goes back to Idle when the returned permit is dropped,
    /// whichever way the run ends.
    pub fn try_acquire(&self) -> Option<RunPermit> {
        if self.is_busy() {
            return None;
        }
        self.state.set(RunState::Busy);
        Some(RunPermit {
            state: Rc::clone(&self.state),
        })
    }
}

impl Default for RunGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct RunPermit {
    state: Rc<Cell<RunState>>,
}

impl Drop for RunPermit {
    fn drop(&mut self) {
        self.state.set(RunState::Idle);
    }
}
