//! Single-owner dispatch loop around [`reduce`].

use flowview_core::ViewConfig;

use crate::actions::Action;
use crate::reducer::reduce;
use crate::state::FlowViewState;

/// Holds the current view state and applies actions strictly in dispatch
/// order. `&mut self` on [`Store::dispatch`] makes it the only writer.
#[derive(Debug, Default)]
pub struct Store {
    state: FlowViewState,
    dispatched: usize,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(cfg: &ViewConfig) -> Self {
        Self::with_state(FlowViewState::with_config(cfg))
    }

    #[must_use]
    pub fn with_state(state: FlowViewState) -> Self {
        Self {
            state,
            dispatched: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &FlowViewState {
        &self.state
    }

    /// Number of actions dispatched so far.
    #[must_use]
    pub fn dispatched(&self) -> usize {
        self.dispatched
    }

    pub fn dispatch(&mut self, action: Action) -> &FlowViewState {
        tracing::trace!(seq = self.dispatched, kind = action.kind(), "dispatch");
        let previous = std::mem::take(&mut self.state);
        self.state = reduce(previous, action);
        self.dispatched += 1;
        &self.state
    }

    pub fn dispatch_all<I>(&mut self, actions: I) -> &FlowViewState
    where
        I: IntoIterator<Item = Action>,
    {
        for action in actions {
            self.dispatch(action);
        }
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> FlowViewState {
        self.state
    }
}
