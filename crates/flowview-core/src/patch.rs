//! Partial flow updates: typed deep merge and field-level diff.
//!
//! `request` and `response` merge field by field. Every other field,
//! including whole header lists and bodies, is replaced when present.

use serde::{Deserialize, Serialize};

use crate::flow::{Flow, Headers, Request, Response};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Headers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Headers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Change set applied to an edit working copy or submitted upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intercepted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marked: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<RequestPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<ResponsePatch>,
}

fn replace<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

fn replace_opt<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
    if value.is_some() {
        target.clone_from(value);
    }
}

fn changed<T: PartialEq + Clone>(original: &T, modified: &T) -> Option<T> {
    (original != modified).then(|| modified.clone())
}

fn changed_opt<T: PartialEq + Clone>(original: &Option<T>, modified: &Option<T>) -> Option<T> {
    if original == modified {
        None
    } else {
        modified.clone()
    }
}

impl RequestPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn merge_into(&self, request: &mut Request) {
        replace(&mut request.method, &self.method);
        replace(&mut request.scheme, &self.scheme);
        replace(&mut request.host, &self.host);
        replace(&mut request.port, &self.port);
        replace(&mut request.path, &self.path);
        replace(&mut request.http_version, &self.http_version);
        replace(&mut request.headers, &self.headers);
        replace_opt(&mut request.content, &self.content);
    }

    #[must_use]
    pub fn between(original: &Request, modified: &Request) -> Self {
        Self {
            method: changed(&original.method, &modified.method),
            scheme: changed(&original.scheme, &modified.scheme),
            host: changed(&original.host, &modified.host),
            port: changed(&original.port, &modified.port),
            path: changed(&original.path, &modified.path),
            http_version: changed(&original.http_version, &modified.http_version),
            headers: changed(&original.headers, &modified.headers),
            content: changed_opt(&original.content, &modified.content),
        }
    }

    /// Patch carrying every patchable field of `request`.
    #[must_use]
    pub fn full(request: &Request) -> Self {
        Self {
            method: Some(request.method.clone()),
            scheme: Some(request.scheme.clone()),
            host: Some(request.host.clone()),
            port: Some(request.port),
            path: Some(request.path.clone()),
            http_version: Some(request.http_version.clone()),
            headers: Some(request.headers.clone()),
            content: request.content.clone(),
        }
    }
}

impl ResponsePatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn merge_into(&self, response: &mut Response) {
        replace(&mut response.http_version, &self.http_version);
        replace(&mut response.status_code, &self.status_code);
        replace(&mut response.reason, &self.reason);
        replace(&mut response.headers, &self.headers);
        replace_opt(&mut response.content, &self.content);
    }

    #[must_use]
    pub fn between(original: &Response, modified: &Response) -> Self {
        Self {
            http_version: changed(&original.http_version, &modified.http_version),
            status_code: changed(&original.status_code, &modified.status_code),
            reason: changed(&original.reason, &modified.reason),
            headers: changed(&original.headers, &modified.headers),
            content: changed_opt(&original.content, &modified.content),
        }
    }

    #[must_use]
    pub fn full(response: &Response) -> Self {
        Self {
            http_version: Some(response.http_version.clone()),
            status_code: Some(response.status_code),
            reason: Some(response.reason.clone()),
            headers: Some(response.headers.clone()),
            content: response.content.clone(),
        }
    }
}

impl FlowPatch {
    /// True when the patch sets no field at any depth.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intercepted.is_none()
            && self.marked.is_none()
            && self.comment.is_none()
            && self.request.as_ref().map_or(true, RequestPatch::is_empty)
            && self.response.as_ref().map_or(true, ResponsePatch::is_empty)
    }

    /// Deep-merge this patch into `flow`. A sub-patch for a missing
    /// request/response materializes a default one first.
    pub fn merge_into(&self, flow: &mut Flow) {
        replace(&mut flow.intercepted, &self.intercepted);
        replace(&mut flow.marked, &self.marked);
        replace(&mut flow.comment, &self.comment);
        if let Some(patch) = &self.request {
            patch.merge_into(flow.request.get_or_insert_with(Request::default));
        }
        if let Some(patch) = &self.response {
            patch.merge_into(flow.response.get_or_insert_with(Response::default));
        }
    }

    /// Field-level difference from `original` to `modified`.
    ///
    /// A response that exists only in `modified` is carried whole; a
    /// removed response has no patch representation and is dropped.
    #[must_use]
    pub fn between(original: &Flow, modified: &Flow) -> Self {
        let request = match (&original.request, &modified.request) {
            (Some(before), Some(after)) => Some(RequestPatch::between(before, after)),
            (None, Some(after)) => Some(RequestPatch::full(after)),
            (_, None) => None,
        };
        let response = match (&original.response, &modified.response) {
            (Some(before), Some(after)) => Some(ResponsePatch::between(before, after)),
            (None, Some(after)) => Some(ResponsePatch::full(after)),
            (_, None) => None,
        };
        Self {
            intercepted: changed(&original.intercepted, &modified.intercepted),
            marked: changed(&original.marked, &modified.marked),
            comment: changed(&original.comment, &modified.comment),
            request: request.filter(|patch| !patch.is_empty()),
            response: response.filter(|patch| !patch.is_empty()),
        }
    }
}

impl Flow {
    /// Consume the flow and return it with `patch` merged in.
    #[must_use]
    pub fn merged(mut self, patch: &FlowPatch) -> Self {
        patch.merge_into(&mut self);
        self
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn flow_with_status(id: &str, status: u16) -> Flow {
        Flow::new(id).with_response(Response {
            status_code: status,
            reason: "OK".to_string(),
            ..Response::default()
        })
    }

    #[test]
    fn merge_keeps_fields_absent_from_patch() {
        let flow = Flow::new("a").with_request(Request {
            method: "GET".to_string(),
            host: "example.com".to_string(),
            path: "/".to_string(),
            ..Request::default()
        });
        let patch = FlowPatch {
            request: Some(RequestPatch {
                path: Some("/login".to_string()),
                ..RequestPatch::default()
            }),
            ..FlowPatch::default()
        };
        let merged = flow.merged(&patch);
        let request = merged.request.unwrap();
        assert_eq!(request.path, "/login");
        assert_eq!(request.method, "GET");
        assert_eq!(request.host, "example.com");
    }

    #[test]
    fn merge_replaces_headers_wholesale() {
        let flow = Flow::new("a").with_request(Request {
            headers: Headers::from_pairs(&[("A", "1"), ("B", "2"), ("C", "3")]),
            ..Request::default()
        });
        let patch = FlowPatch {
            request: Some(RequestPatch {
                headers: Some(Headers::from_pairs(&[("X", "9")])),
                ..RequestPatch::default()
            }),
            ..FlowPatch::default()
        };
        let merged = flow.merged(&patch);
        assert_eq!(
            merged.request.unwrap().headers,
            Headers::from_pairs(&[("X", "9")])
        );
    }

    #[test]
    fn merge_materializes_missing_response() {
        let patch = FlowPatch {
            response: Some(ResponsePatch {
                status_code: Some(502),
                ..ResponsePatch::default()
            }),
            ..FlowPatch::default()
        };
        let merged = Flow::new("a").merged(&patch);
        assert_eq!(merged.status_code(), Some(502));
        assert_eq!(merged.response.unwrap().reason, "");
    }

    #[test]
    fn diff_of_identical_flows_is_empty() {
        let flow = flow_with_status("a", 200);
        let diff = FlowPatch::between(&flow, &flow.clone());
        assert!(diff.is_empty());
        assert_eq!(serde_json::to_string(&diff).unwrap(), "{}");
    }

    #[test]
    fn diff_carries_only_changed_status() {
        let diff = FlowPatch::between(&flow_with_status("a", 200), &flow_with_status("a", 404));
        assert!(!diff.is_empty());
        assert_eq!(
            serde_json::to_value(&diff).unwrap(),
            serde_json::json!({"response": {"status_code": 404}})
        );
    }

    #[test]
    fn diff_for_new_response_carries_all_fields() {
        let original = Flow::new("a");
        let modified = flow_with_status("a", 201);
        let diff = FlowPatch::between(&original, &modified);
        let response = diff.response.unwrap();
        assert_eq!(response.status_code, Some(201));
        assert_eq!(response.reason.as_deref(), Some("OK"));
        assert_eq!(response.headers, Some(Headers::default()));
    }

    #[test]
    fn diff_then_merge_reproduces_modified_flow() {
        let original = flow_with_status("a", 200).with_request(Request {
            method: "GET".to_string(),
            path: "/".to_string(),
            ..Request::default()
        });
        let mut modified = original.clone();
        modified.comment = "retry".to_string();
        if let Some(request) = modified.request.as_mut() {
            request.method = "POST".to_string();
            request.content = Some("a=1".to_string());
        }
        let diff = FlowPatch::between(&original, &modified);
        assert_eq!(original.merged(&diff), modified);
    }

    #[test]
    fn empty_nested_patch_counts_as_empty() {
        let patch = FlowPatch {
            request: Some(RequestPatch::default()),
            ..FlowPatch::default()
        };
        assert!(patch.is_empty());
    }
}
