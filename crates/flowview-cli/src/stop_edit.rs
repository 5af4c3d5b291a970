use flowview_core::{Flow, FlowsAction};
use flowview_tui::{stop_edit, Action};

use crate::{parse_args, CommandOutput, FlowviewBackend};

fn load_flow(backend: &dyn FlowviewBackend, path: &str) -> Result<Flow, String> {
    let raw = backend.read_input(path)?;
    serde_json::from_str(&raw).map_err(|err| format!("decode flow {path}: {err}"))
}

pub fn run_stop_edit_for_test(args: &[&str], backend: &dyn FlowviewBackend) -> CommandOutput {
    let parsed = match parse_args(args, false) {
        Ok(v) => v,
        Err(e) => return CommandOutput::usage_error(&e),
    };
    let [original, modified] = parsed.positional.as_slice() else {
        return CommandOutput::usage_error("expected ORIGINAL and MODIFIED flow files");
    };
    if original == "-" && modified == "-" {
        return CommandOutput::usage_error("only one flow can be read from stdin");
    }

    let original = match load_flow(backend, original) {
        Ok(v) => v,
        Err(e) => return CommandOutput::failure(&e),
    };
    let modified = match load_flow(backend, modified) {
        Ok(v) => v,
        Err(e) => return CommandOutput::failure(&e),
    };
    if original.id != modified.id {
        return CommandOutput::failure(&format!(
            "flow ids differ: {} vs {}",
            original.id, modified.id
        ));
    }

    let action = stop_edit(&original, &modified);
    if parsed.json {
        return match serde_json::to_string_pretty(&action) {
            Ok(payload) => CommandOutput::ok(format!("{payload}\n")),
            Err(e) => CommandOutput::failure(&format!("encode action: {e}")),
        };
    }

    match action {
        Action::Flows(FlowsAction::CommitUpdate { flow_id, patch }) => {
            match serde_json::to_string(&patch) {
                Ok(payload) => CommandOutput::ok(format!("commit {flow_id} {payload}\n")),
                Err(e) => CommandOutput::failure(&format!("encode patch: {e}")),
            }
        }
        _ => CommandOutput::ok("abort\n".to_string()),
    }
}
