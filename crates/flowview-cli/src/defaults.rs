use flowview_tui::FlowViewState;

use crate::summary::render_state_summary;
use crate::{parse_args, CommandOutput, FlowviewBackend};

pub fn run_defaults_for_test(args: &[&str], backend: &dyn FlowviewBackend) -> CommandOutput {
    let parsed = match parse_args(args, true) {
        Ok(v) => v,
        Err(e) => return CommandOutput::usage_error(&e),
    };
    if !parsed.positional.is_empty() {
        return CommandOutput::usage_error("defaults takes no arguments");
    }

    let cfg = match backend.load_config(parsed.config.as_deref()) {
        Ok(v) => v,
        Err(e) => return CommandOutput::failure(&format!("load config: {e}")),
    };
    let state = FlowViewState::with_config(&cfg);

    if parsed.json {
        return match serde_json::to_string_pretty(&state) {
            Ok(payload) => CommandOutput::ok(format!("{payload}\n")),
            Err(e) => CommandOutput::failure(&format!("encode state: {e}")),
        };
    }
    CommandOutput::ok(render_state_summary(&state))
}
