//! Flow view actions, the dispatch envelope and action constructors.

use flowview_core::{Flow, FlowPatch, FlowsAction};
use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::content::ContentLine;

pub const SET_CONTENT_VIEW: &str = "UI_FLOWVIEW_SET_CONTENT_VIEW";
pub const DISPLAY_LARGE: &str = "UI_FLOWVIEW_DISPLAY_LARGE";
pub const SET_TAB: &str = "UI_FLOWVIEW_SET_TAB";
pub const START_EDIT: &str = "UI_FLOWVIEW_START_EDIT";
pub const UPDATE_EDIT: &str = "UI_FLOWVIEW_UPDATE_EDIT";
pub const ABORT_EDIT: &str = "UI_FLOWVIEW_ABORT_EDIT";
pub const SET_SHOW_FULL_CONTENT: &str = "UI_SET_SHOW_FULL_CONTENT";
pub const SET_CONTENT_VIEW_DESCRIPTION: &str = "UI_SET_CONTENT_VIEW_DESCRIPTION";
pub const SET_CONTENT: &str = "UI_SET_CONTENT";

/// Actions owned by the flow view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FlowViewAction {
    #[serde(rename = "UI_FLOWVIEW_SET_CONTENT_VIEW")]
    SetContentView {
        #[serde(rename = "contentView")]
        content_view: String,
    },
    #[serde(rename = "UI_FLOWVIEW_DISPLAY_LARGE")]
    DisplayLarge,
    #[serde(rename = "UI_FLOWVIEW_SET_TAB")]
    SelectTab {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tab: Option<String>,
    },
    #[serde(rename = "UI_FLOWVIEW_START_EDIT")]
    StartEdit { flow: Flow },
    #[serde(rename = "UI_FLOWVIEW_UPDATE_EDIT")]
    UpdateEdit { update: FlowPatch },
    #[serde(rename = "UI_FLOWVIEW_ABORT_EDIT")]
    AbortEdit,
    #[serde(rename = "UI_SET_CONTENT_VIEW_DESCRIPTION")]
    SetContentViewDescription { description: String },
    #[serde(rename = "UI_SET_SHOW_FULL_CONTENT")]
    SetShowFullContent,
    #[serde(rename = "UI_SET_CONTENT")]
    SetContent { content: Vec<ContentLine> },
}

impl FlowViewAction {
    pub const KINDS: [&'static str; 9] = [
        SET_CONTENT_VIEW,
        DISPLAY_LARGE,
        SET_TAB,
        START_EDIT,
        UPDATE_EDIT,
        ABORT_EDIT,
        SET_SHOW_FULL_CONTENT,
        SET_CONTENT_VIEW_DESCRIPTION,
        SET_CONTENT,
    ];

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetContentView { .. } => SET_CONTENT_VIEW,
            Self::DisplayLarge => DISPLAY_LARGE,
            Self::SelectTab { .. } => SET_TAB,
            Self::StartEdit { .. } => START_EDIT,
            Self::UpdateEdit { .. } => UPDATE_EDIT,
            Self::AbortEdit => ABORT_EDIT,
            Self::SetContentViewDescription { .. } => SET_CONTENT_VIEW_DESCRIPTION,
            Self::SetShowFullContent => SET_SHOW_FULL_CONTENT,
            Self::SetContent { .. } => SET_CONTENT,
        }
    }
}

/// Everything the dispatch loop can deliver to the flow view reducer.
///
/// Action types outside both families decode to `Unknown` and carry
/// their type string. A known type whose payload does not decode becomes
/// `Malformed`; both reduce as identity.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    FlowView(FlowViewAction),
    Flows(FlowsAction),
    Unknown(String),
    Malformed(String),
}

impl Action {
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::FlowView(action) => action.kind(),
            Self::Flows(action) => action.kind(),
            Self::Unknown(kind) | Self::Malformed(kind) => kind.as_str(),
        }
    }
}

impl From<FlowViewAction> for Action {
    fn from(action: FlowViewAction) -> Self {
        Self::FlowView(action)
    }
}

impl From<FlowsAction> for Action {
    fn from(action: FlowsAction) -> Self {
        Self::Flows(action)
    }
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::FlowView(action) => action.serialize(serializer),
            Self::Flows(action) => action.serialize(serializer),
            Self::Unknown(kind) | Self::Malformed(kind) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", kind)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let kind = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| D::Error::missing_field("type"))?
            .to_owned();
        let decoded = if FlowViewAction::KINDS.contains(&kind.as_str()) {
            serde_json::from_value(value).map(Self::FlowView)
        } else if FlowsAction::KINDS.contains(&kind.as_str()) {
            serde_json::from_value(value).map(Self::Flows)
        } else {
            return Ok(Self::Unknown(kind));
        };
        Ok(decoded.unwrap_or_else(|err| {
            tracing::debug!(kind = %kind, error = %err, "malformed action payload");
            Self::Malformed(kind)
        }))
    }
}

#[must_use]
pub fn set_content_view(content_view: &str) -> Action {
    FlowViewAction::SetContentView {
        content_view: content_view.to_owned(),
    }
    .into()
}

#[must_use]
pub fn display_large() -> Action {
    FlowViewAction::DisplayLarge.into()
}

#[must_use]
pub fn select_tab(tab: Option<&str>) -> Action {
    FlowViewAction::SelectTab {
        tab: tab.map(str::to_owned),
    }
    .into()
}

#[must_use]
pub fn start_edit(flow: Flow) -> Action {
    FlowViewAction::StartEdit { flow }.into()
}

#[must_use]
pub fn update_edit(update: FlowPatch) -> Action {
    FlowViewAction::UpdateEdit { update }.into()
}

#[must_use]
pub fn abort_edit() -> Action {
    FlowViewAction::AbortEdit.into()
}

#[must_use]
pub fn set_content_view_description(description: &str) -> Action {
    FlowViewAction::SetContentViewDescription {
        description: description.to_owned(),
    }
    .into()
}

#[must_use]
pub fn set_show_full_content() -> Action {
    FlowViewAction::SetShowFullContent.into()
}

#[must_use]
pub fn set_content(content: Vec<ContentLine>) -> Action {
    FlowViewAction::SetContent { content }.into()
}

/// Finish an edit session.
///
/// Emits a commit for `flow` when the working copy actually differs from
/// it, otherwise aborts the session.
#[must_use]
pub fn stop_edit(flow: &Flow, modified_flow: &Flow) -> Action {
    let patch = FlowPatch::between(flow, modified_flow);
    if patch.is_empty() {
        abort_edit()
    } else {
        FlowsAction::commit_update(flow, patch).into()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use flowview_core::{Response, ResponsePatch};

    use super::*;
    use crate::content::plain_lines;

    fn flow_with_status(status: u16) -> Flow {
        Flow::new("f1").with_response(Response {
            status_code: status,
            ..Response::default()
        })
    }

    #[test]
    fn stop_edit_without_changes_aborts() {
        let action = stop_edit(&flow_with_status(200), &flow_with_status(200));
        assert_eq!(action, abort_edit());
    }

    #[test]
    fn stop_edit_with_changes_commits_diff() {
        let action = stop_edit(&flow_with_status(200), &flow_with_status(404));
        let expected_patch = FlowPatch {
            response: Some(ResponsePatch {
                status_code: Some(404),
                ..ResponsePatch::default()
            }),
            ..FlowPatch::default()
        };
        assert_eq!(
            action,
            Action::Flows(FlowsAction::CommitUpdate {
                flow_id: "f1".to_string(),
                patch: expected_patch,
            })
        );
    }

    #[test]
    fn every_constructor_round_trips_through_json() {
        let actions = vec![
            set_content_view("Raw"),
            display_large(),
            select_tab(Some("response")),
            select_tab(None),
            start_edit(flow_with_status(200)),
            update_edit(FlowPatch::default()),
            abort_edit(),
            set_content_view_description("JSON"),
            set_show_full_content(),
            set_content(plain_lines("a\nb")),
        ];
        for action in actions {
            let json = serde_json::to_string(&action).unwrap();
            let decoded: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, action, "json={json}");
        }
    }

    #[test]
    fn wire_payload_names_follow_ui_convention() {
        let json = serde_json::to_value(set_content_view("Hex")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "UI_FLOWVIEW_SET_CONTENT_VIEW", "contentView": "Hex"})
        );
        let json = serde_json::to_value(display_large()).unwrap();
        assert_eq!(json, serde_json::json!({"type": "UI_FLOWVIEW_DISPLAY_LARGE"}));
    }

    #[test]
    fn unrecognized_type_decodes_as_unknown() {
        let action: Action =
            serde_json::from_str(r#"{"type":"UI_FLOWVIEW_UPLOAD_CONTENT","file":"x"}"#).unwrap();
        assert_eq!(action, Action::Unknown("UI_FLOWVIEW_UPLOAD_CONTENT".to_string()));
        assert_eq!(action.kind(), "UI_FLOWVIEW_UPLOAD_CONTENT");
        assert_eq!(
            serde_json::to_string(&action).unwrap(),
            r#"{"type":"UI_FLOWVIEW_UPLOAD_CONTENT"}"#
        );
    }

    #[test]
    fn known_type_with_bad_payload_decodes_as_malformed() {
        let action: Action = serde_json::from_str(r#"{"type":"UI_FLOWVIEW_START_EDIT"}"#).unwrap();
        assert_eq!(action, Action::Malformed(START_EDIT.to_string()));
        assert_eq!(action.kind(), START_EDIT);

        let action: Action =
            serde_json::from_str(r#"{"type":"FLOWS_UPDATE","data":{"id":7}}"#).unwrap();
        assert_eq!(action, Action::Malformed("FLOWS_UPDATE".to_string()));
    }

    #[test]
    fn missing_type_is_error() {
        assert!(serde_json::from_str::<Action>(r#"{"tab":"request"}"#).is_err());
    }
}
