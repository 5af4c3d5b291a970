//! flowview-tui: view state for the flow detail pane.
//!
//! The state is an immutable value replaced on every dispatched action by
//! [`reduce`]. [`Store`] is the single owner that serializes dispatch.

pub mod actions;
pub mod content;
pub mod reducer;
pub mod script;
pub mod state;
pub mod store;

pub use actions::{stop_edit, Action, FlowViewAction};
pub use content::{ContentLine, ContentSpan};
pub use reducer::reduce;
pub use script::{parse_action_script, ScriptError};
pub use state::FlowViewState;
pub use store::Store;

/// Stable crate label used by bootstrap smoke tests.
pub fn crate_label() -> &'static str {
    "flowview-tui"
}
