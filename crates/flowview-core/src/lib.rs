//! flowview-core: flow data model, partial updates and view configuration.

pub mod config;
pub mod flow;
pub mod flows;
pub mod patch;

pub use config::{ConfigError, ViewConfig};
pub use flow::{Flow, FlowError, Header, Headers, Request, Response};
pub use flows::FlowsAction;
pub use patch::{FlowPatch, RequestPatch, ResponsePatch};

/// Stable crate label used by bootstrap smoke tests.
pub fn crate_label() -> &'static str {
    "flowview-core"
}
