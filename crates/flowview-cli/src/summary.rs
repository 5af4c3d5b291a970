//! Plain-text rendering of a view state for terminal output.

use flowview_tui::FlowViewState;

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

#[must_use]
pub fn render_state_summary(state: &FlowViewState) -> String {
    let description = if state.view_description.is_empty() {
        "-"
    } else {
        state.view_description.as_str()
    };
    let editing = state
        .modified_flow
        .as_ref()
        .map_or("no", |flow| flow.id.as_str());
    let visible = state.visible_content().len();
    let truncated = if state.hidden_line_count() > 0 {
        " (truncated)"
    } else {
        ""
    };

    let mut out = String::new();
    out.push_str(&format!("tab: {}\n", state.tab));
    out.push_str(&format!("content view: {}\n", state.content_view));
    out.push_str(&format!("description: {description}\n"));
    out.push_str(&format!("editing: {editing}\n"));
    out.push_str(&format!("display large: {}\n", yes_no(state.display_large)));
    out.push_str(&format!(
        "content: {visible}/{} lines{truncated}\n",
        state.content.len()
    ));
    out
}

#[cfg(test)]
mod tests {
    use flowview_core::Flow;
    use flowview_tui::content::plain_lines;
    use flowview_tui::FlowViewState;

    use super::render_state_summary;

    #[test]
    fn default_state_summary() {
        assert_eq!(
            render_state_summary(&FlowViewState::default()),
            "tab: request\ncontent view: Auto\ndescription: -\nediting: no\ndisplay large: no\ncontent: 0/0 lines\n"
        );
    }

    #[test]
    fn editing_and_truncated_summary() {
        let state = FlowViewState {
            modified_flow: Some(Flow::new("f9")),
            content: plain_lines("a\nb\nc"),
            max_content_lines: 2,
            view_description: "JSON".to_string(),
            ..FlowViewState::default()
        };
        let out = render_state_summary(&state);
        assert!(out.contains("editing: f9\n"), "{out}");
        assert!(out.contains("description: JSON\n"), "{out}");
        assert!(out.contains("content: 2/3 lines (truncated)\n"), "{out}");
    }
}
