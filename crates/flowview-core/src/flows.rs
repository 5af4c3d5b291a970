//! Actions owned by the flow list store.
//!
//! The view-state reducer reacts to `Select` and `Update`; `CommitUpdate`
//! is emitted when an edit is finished and is handled by the flow list.

use serde::{Deserialize, Serialize};

use crate::flow::Flow;
use crate::patch::FlowPatch;

pub const SELECT: &str = "FLOWS_SELECT";
pub const UPDATE: &str = "FLOWS_UPDATE";
pub const COMMIT_UPDATE: &str = "FLOWS_COMMIT_UPDATE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FlowsAction {
    /// Selection in the flow list changed.
    #[serde(rename = "FLOWS_SELECT")]
    Select {
        #[serde(rename = "flowIds", default, skip_serializing_if = "Vec::is_empty")]
        flow_ids: Vec<String>,
    },
    /// Server-confirmed change to a flow.
    #[serde(rename = "FLOWS_UPDATE")]
    Update { data: Flow },
    /// Submit an edit upstream.
    #[serde(rename = "FLOWS_COMMIT_UPDATE")]
    CommitUpdate {
        #[serde(rename = "flowId")]
        flow_id: String,
        patch: FlowPatch,
    },
}

impl FlowsAction {
    pub const KINDS: [&'static str; 3] = [SELECT, UPDATE, COMMIT_UPDATE];

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Select { .. } => SELECT,
            Self::Update { .. } => UPDATE,
            Self::CommitUpdate { .. } => COMMIT_UPDATE,
        }
    }

    #[must_use]
    pub fn select(flow_ids: &[&str]) -> Self {
        Self::Select {
            flow_ids: flow_ids.iter().map(|id| (*id).to_owned()).collect(),
        }
    }

    #[must_use]
    pub fn update(data: Flow) -> Self {
        Self::Update { data }
    }

    /// Commit `patch` against `flow`.
    #[must_use]
    pub fn commit_update(flow: &Flow, patch: FlowPatch) -> Self {
        Self::CommitUpdate {
            flow_id: flow.id.clone(),
            patch,
        }
    }
}
