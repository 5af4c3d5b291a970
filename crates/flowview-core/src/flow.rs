//! Captured flow model in the shape the inspection UI exchanges with its backend.

use serde::{Deserialize, Serialize};

pub const FLOW_TYPE_HTTP: &str = "http";

/// One `[name, value]` header pair. Order and duplicates are significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header(pub String, pub String);

impl Header {
    #[must_use]
    pub fn new(name: &str, value: &str) -> Self {
        Self(name.to_owned(), value.to_owned())
    }
}

/// Ordered header list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Headers(pub Vec<Header>);

impl Headers {
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(name, value)| Header::new(name, value))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub scheme: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub port: u16,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub http_version: String,
    #[serde(default)]
    pub headers: Headers,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(
        rename = "contentLength",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub content_length: Option<u64>,
    #[serde(
        rename = "contentHash",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub content_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_start: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_end: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub http_version: String,
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub headers: Headers,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(
        rename = "contentLength",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub content_length: Option<u64>,
    #[serde(
        rename = "contentHash",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub content_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_start: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_end: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowError {
    pub msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
}

/// A captured request/response exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    pub id: String,
    #[serde(rename = "type", default = "default_flow_type")]
    pub kind: String,
    #[serde(default)]
    pub intercepted: bool,
    #[serde(default)]
    pub modified: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub marked: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_replay: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<Request>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Response>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<FlowError>,
}

fn default_flow_type() -> String {
    FLOW_TYPE_HTTP.to_owned()
}

impl Flow {
    /// Bare HTTP flow with no request or response attached yet.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            kind: default_flow_type(),
            intercepted: false,
            modified: false,
            marked: String::new(),
            comment: String::new(),
            is_replay: None,
            request: None,
            response: None,
            error: None,
        }
    }

    #[must_use]
    pub fn with_request(mut self, request: Request) -> Self {
        self.request = Some(request);
        self
    }

    #[must_use]
    pub fn with_response(mut self, response: Response) -> Self {
        self.response = Some(response);
        self
    }

    /// Status code of the attached response, if any.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        self.response.as_ref().map(|response| response.status_code)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn headers_keep_order_and_duplicates() {
        let headers = Headers::from_pairs(&[
            ("Set-Cookie", "a=1"),
            ("Content-Type", "text/html"),
            ("set-cookie", "b=2"),
        ]);
        assert_eq!(
            serde_json::to_string(&headers).unwrap(),
            r#"[["Set-Cookie","a=1"],["Content-Type","text/html"],["set-cookie","b=2"]]"#
        );
    }

    #[test]
    fn minimal_flow_json_fills_defaults() {
        let flow: Flow = serde_json::from_str(r#"{"id":"f1","response":{"status_code":200}}"#)
            .unwrap();
        assert_eq!(flow.kind, "http");
        assert!(!flow.intercepted);
        assert!(flow.request.is_none());
        assert_eq!(flow.status_code(), Some(200));
        assert_eq!(flow.response.unwrap().headers, Headers::default());
    }

    #[test]
    fn headers_serialize_as_pairs_and_camel_case_content_fields() {
        let flow = Flow::new("f2").with_request(Request {
            method: "GET".to_string(),
            headers: Headers::from_pairs(&[("Host", "example.com")]),
            content_length: Some(0),
            ..Request::default()
        });
        let json = serde_json::to_value(&flow).unwrap();
        assert_eq!(
            json["request"]["headers"],
            serde_json::json!([["Host", "example.com"]])
        );
        assert_eq!(json["request"]["contentLength"], 0);
        assert!(json.get("response").is_none());
        assert!(json.get("marked").is_none());
    }
}
