//! State transitions for the flow detail pane.

use flowview_core::config::{CONTENT_VIEW_AUTO, CONTENT_VIEW_EDIT, DEFAULT_TAB};
use flowview_core::FlowsAction;

use crate::actions::{Action, FlowViewAction};
use crate::state::FlowViewState;

/// Apply `action` to `state` and return the next state.
///
/// Total over every action: unknown kinds, malformed payloads, and
/// flow-list actions the view does not react to return `state` untouched.
#[must_use]
pub fn reduce(state: FlowViewState, action: Action) -> FlowViewState {
    match action {
        Action::FlowView(action) => reduce_flow_view(state, action),
        Action::Flows(action) => reduce_flows(state, action),
        Action::Unknown(_) | Action::Malformed(_) => state,
    }
}

fn reduce_flow_view(mut state: FlowViewState, action: FlowViewAction) -> FlowViewState {
    match action {
        FlowViewAction::SetContentView { content_view } => {
            let show_full_content = content_view == CONTENT_VIEW_EDIT;
            FlowViewState {
                content_view,
                show_full_content,
                ..state
            }
        }
        FlowViewAction::DisplayLarge => FlowViewState {
            display_large: true,
            ..state
        },
        FlowViewAction::SelectTab { tab } => {
            let show_full_content = state.in_edit_view();
            FlowViewState {
                tab: tab
                    .filter(|tab| !tab.is_empty())
                    .unwrap_or_else(|| DEFAULT_TAB.to_owned()),
                display_large: false,
                show_full_content,
                ..state
            }
        }
        FlowViewAction::StartEdit { flow } => FlowViewState {
            modified_flow: Some(flow),
            content_view: CONTENT_VIEW_EDIT.to_owned(),
            show_full_content: true,
            ..state
        },
        FlowViewAction::UpdateEdit { update } => {
            let Some(flow) = state.modified_flow.take() else {
                tracing::debug!("ignoring edit update: no edit session active");
                return state;
            };
            FlowViewState {
                modified_flow: Some(flow.merged(&update)),
                ..state
            }
        }
        FlowViewAction::AbortEdit => FlowViewState {
            modified_flow: None,
            ..state
        },
        FlowViewAction::SetContentViewDescription { description } => FlowViewState {
            view_description: description,
            ..state
        },
        FlowViewAction::SetShowFullContent => FlowViewState {
            show_full_content: true,
            ..state
        },
        FlowViewAction::SetContent { content } => {
            let show_full_content = content.len() <= state.max_content_lines;
            FlowViewState {
                content,
                show_full_content,
                ..state
            }
        }
    }
}

fn reduce_flows(state: FlowViewState, action: FlowsAction) -> FlowViewState {
    match action {
        FlowsAction::Select { .. } => {
            let show_full_content = state.content_fits();
            end_edit_session(state, show_full_content)
        }
        // There is no dedicated "edit finished" event: the session ends when
        // the server confirms an update of the flow being edited.
        FlowsAction::Update { data } => {
            let edited = state
                .modified_flow
                .as_ref()
                .is_some_and(|flow| flow.id == data.id);
            if !edited {
                return state;
            }
            tracing::debug!(flow_id = %data.id, "edited flow confirmed by server; ending edit session");
            end_edit_session(state, false)
        }
        FlowsAction::CommitUpdate { .. } => state,
    }
}

fn end_edit_session(state: FlowViewState, show_full_content: bool) -> FlowViewState {
    let content_view = if state.is_editing() {
        CONTENT_VIEW_AUTO.to_owned()
    } else {
        state.content_view
    };
    FlowViewState {
        modified_flow: None,
        display_large: false,
        content_view,
        show_full_content,
        ..state
    }
}
