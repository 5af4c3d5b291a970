//! JSON-lines action scripts, one action object per line.

use thiserror::Error;

use crate::actions::Action;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: decode action: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a script. Blank lines and lines starting with `#` are skipped;
/// line numbers in errors are 1-based. Only lines that are not JSON objects
/// with a `type` fail; a known type with a bad payload decodes as
/// [`Action::Malformed`].
pub fn parse_action_script(raw: &str) -> Result<Vec<Action>, ScriptError> {
    let mut actions = Vec::new();
    for (idx, line) in raw.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let action = serde_json::from_str(trimmed).map_err(|source| ScriptError::Decode {
            line: idx + 1,
            source,
        })?;
        actions.push(action);
    }
    Ok(actions)
}
