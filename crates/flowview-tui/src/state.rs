//! Flow view state snapshot, its defaults and derived selectors.

use flowview_core::config::{
    ViewConfig, CONTENT_VIEW_AUTO, CONTENT_VIEW_EDIT, DEFAULT_MAX_CONTENT_LINES, DEFAULT_TAB,
};
use flowview_core::Flow;
use serde::{Deserialize, Serialize};

use crate::content::ContentLine;

/// View state of the flow detail pane.
///
/// `modified_flow` is the only marker of an edit session: it is `Some`
/// exactly while the user edits a working copy of the selected flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowViewState {
    pub display_large: bool,
    pub view_description: String,
    pub show_full_content: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_flow: Option<Flow>,
    pub content_view: String,
    pub tab: String,
    pub content: Vec<ContentLine>,
    pub max_content_lines: usize,
}

impl Default for FlowViewState {
    fn default() -> Self {
        Self {
            display_large: false,
            view_description: String::new(),
            show_full_content: false,
            modified_flow: None,
            content_view: CONTENT_VIEW_AUTO.to_owned(),
            tab: DEFAULT_TAB.to_owned(),
            content: Vec::new(),
            max_content_lines: DEFAULT_MAX_CONTENT_LINES,
        }
    }
}

impl FlowViewState {
    /// Initial state seeded from configuration.
    #[must_use]
    pub fn with_config(cfg: &ViewConfig) -> Self {
        Self {
            content_view: cfg.default_content_view.clone(),
            tab: cfg.default_tab.clone(),
            max_content_lines: cfg.max_content_lines,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.modified_flow.is_some()
    }

    #[must_use]
    pub fn in_edit_view(&self) -> bool {
        self.content_view == CONTENT_VIEW_EDIT
    }

    /// Whether the current content fits without truncation.
    #[must_use]
    pub fn content_fits(&self) -> bool {
        self.content.len() <= self.max_content_lines
    }

    /// The working copy while editing, otherwise `selected`.
    #[must_use]
    pub fn displayed_flow<'a>(&'a self, selected: &'a Flow) -> &'a Flow {
        self.modified_flow.as_ref().unwrap_or(selected)
    }

    /// Lines to paint: everything when full content is shown, otherwise at
    /// most `max_content_lines`.
    #[must_use]
    pub fn visible_content(&self) -> &[ContentLine] {
        if self.show_full_content {
            return &self.content;
        }
        let end = self.content.len().min(self.max_content_lines);
        &self.content[..end]
    }

    #[must_use]
    pub fn hidden_line_count(&self) -> usize {
        self.content.len() - self.visible_content().len()
    }
}
