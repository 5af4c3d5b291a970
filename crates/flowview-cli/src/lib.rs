//! flowview-cli: command-line surface for replaying flow view actions.

use std::io::Read;
use std::path::Path;

use flowview_core::ViewConfig;

pub mod defaults;
pub mod replay;
pub mod stop_edit;
pub mod summary;

/// Environment variable holding the tracing filter for the binary.
pub const LOG_ENV: &str = "FLOWVIEW_LOG";

const USAGE: &str = "\
usage: flowview <command> [flags]

commands:
  replay [--json] [--config PATH] [SCRIPT|-]   apply a JSON-lines action script
  stop-edit [--json] ORIGINAL MODIFIED         derive the action ending an edit
  defaults [--json] [--config PATH]            print the initial view state
";

/// Stable crate label used by bootstrap smoke tests.
pub fn crate_label() -> &'static str {
    "flowview-cli"
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandOutput {
    pub(crate) fn ok(stdout: String) -> Self {
        Self {
            stdout,
            stderr: String::new(),
            exit_code: 0,
        }
    }

    pub(crate) fn usage_error(message: &str) -> Self {
        Self {
            stdout: String::new(),
            stderr: format!("{message}\n"),
            exit_code: 2,
        }
    }

    pub(crate) fn failure(message: &str) -> Self {
        Self {
            stdout: String::new(),
            stderr: format!("{message}\n"),
            exit_code: 1,
        }
    }
}

/// Filesystem and configuration access, swappable in tests.
pub trait FlowviewBackend {
    /// Read a named input; `-` means standard input.
    fn read_input(&self, path: &str) -> Result<String, String>;
    fn load_config(&self, path: Option<&str>) -> Result<ViewConfig, String>;
}

pub struct FilesystemBackend;

impl FlowviewBackend for FilesystemBackend {
    fn read_input(&self, path: &str) -> Result<String, String> {
        if path == "-" {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .map_err(|err| format!("read stdin: {err}"))?;
            return Ok(raw);
        }
        std::fs::read_to_string(path).map_err(|err| format!("read {path}: {err}"))
    }

    fn load_config(&self, path: Option<&str>) -> Result<ViewConfig, String> {
        ViewConfig::load(path.map(Path::new)).map_err(|err| err.to_string())
    }
}

pub fn run_cli_for_test(args: &[&str], backend: &dyn FlowviewBackend) -> CommandOutput {
    let Some((cmd, rest)) = args.split_first() else {
        return CommandOutput::usage_error(&format!("missing command\n{USAGE}"));
    };

    match *cmd {
        "replay" => replay::run_replay_for_test(rest, backend),
        "stop-edit" => stop_edit::run_stop_edit_for_test(rest, backend),
        "defaults" => defaults::run_defaults_for_test(rest, backend),
        "help" | "-h" | "--help" => CommandOutput::ok(USAGE.to_string()),
        _ => CommandOutput::usage_error(&format!("unknown command: {cmd}")),
    }
}

pub fn run_cli(args: &[String], backend: &dyn FlowviewBackend) -> CommandOutput {
    let refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    run_cli_for_test(&refs, backend)
}

/// Flags shared by commands: `--json` and `--config PATH`, plus positionals.
#[derive(Debug, Default)]
pub(crate) struct ParsedArgs {
    pub json: bool,
    pub config: Option<String>,
    pub positional: Vec<String>,
}

pub(crate) fn parse_args(args: &[&str], allow_config: bool) -> Result<ParsedArgs, String> {
    let mut parsed = ParsedArgs::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match *arg {
            "--json" => parsed.json = true,
            "--config" if allow_config => match iter.next() {
                Some(path) => parsed.config = Some((*path).to_string()),
                None => return Err("--config requires a path".to_string()),
            },
            "" => {}
            "-" => parsed.positional.push("-".to_string()),
            v if v.starts_with('-') => return Err(format!("unknown flag: {v}")),
            v => parsed.positional.push(v.to_string()),
        }
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::{crate_label, parse_args};

    #[test]
    fn crate_label_is_stable() {
        assert_eq!(crate_label(), "flowview-cli");
    }

    #[test]
    fn parse_args_collects_flags_and_positionals() {
        let parsed = parse_args(&["--json", "--config", "c.yaml", "script.jsonl"], true).unwrap();
        assert!(parsed.json);
        assert_eq!(parsed.config.as_deref(), Some("c.yaml"));
        assert_eq!(parsed.positional, vec!["script.jsonl".to_string()]);
    }

    #[test]
    fn parse_args_rejects_config_where_not_allowed() {
        let err = parse_args(&["--config", "c.yaml"], false).unwrap_err();
        assert_eq!(err, "unknown flag: --config");
        let err = parse_args(&["--config"], true).unwrap_err();
        assert_eq!(err, "--config requires a path");
    }
}
