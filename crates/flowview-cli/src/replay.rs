use flowview_tui::{parse_action_script, Store};

use crate::summary::render_state_summary;
use crate::{parse_args, CommandOutput, FlowviewBackend};

pub fn run_replay_for_test(args: &[&str], backend: &dyn FlowviewBackend) -> CommandOutput {
    let parsed = match parse_args(args, true) {
        Ok(v) => v,
        Err(e) => return CommandOutput::usage_error(&e),
    };
    let source = match parsed.positional.as_slice() {
        [] => "-",
        [one] => one.as_str(),
        _ => return CommandOutput::usage_error("expected at most 1 argument"),
    };

    let cfg = match backend.load_config(parsed.config.as_deref()) {
        Ok(v) => v,
        Err(e) => return CommandOutput::failure(&format!("load config: {e}")),
    };
    let raw = match backend.read_input(source) {
        Ok(v) => v,
        Err(e) => return CommandOutput::failure(&e),
    };
    let actions = match parse_action_script(&raw) {
        Ok(v) => v,
        Err(e) => return CommandOutput::failure(&format!("{source}: {e}")),
    };

    let mut store = Store::with_config(&cfg);
    store.dispatch_all(actions);
    tracing::debug!(source, actions = store.dispatched(), "replay finished");

    if parsed.json {
        return match serde_json::to_string_pretty(store.state()) {
            Ok(payload) => CommandOutput::ok(format!("{payload}\n")),
            Err(e) => CommandOutput::failure(&format!("encode state: {e}")),
        };
    }
    let mut out = format!("replayed {} actions\n", store.dispatched());
    out.push_str(&render_state_summary(store.state()));
    CommandOutput::ok(out)
}
