//! Tokenized body content as produced by content views.

use serde::{Deserialize, Serialize};

pub const STYLE_TEXT: &str = "text";

/// One styled run of text, serialized as `[style, text]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSpan(pub String, pub String);

impl ContentSpan {
    #[must_use]
    pub fn new(style: &str, text: &str) -> Self {
        Self(style.to_owned(), text.to_owned())
    }
}

/// A rendered line: an ordered group of spans.
pub type ContentLine = Vec<ContentSpan>;

/// Split `body` into unstyled lines.
#[must_use]
pub fn plain_lines(body: &str) -> Vec<ContentLine> {
    body.lines()
        .map(|line| vec![ContentSpan::new(STYLE_TEXT, line)])
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn plain_lines_tags_each_line_as_text() {
        let lines = plain_lines("GET / HTTP/1.1\nHost: example.com");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], vec![ContentSpan::new("text", "Host: example.com")]);
    }

    #[test]
    fn spans_serialize_as_pairs() {
        let line = vec![
            ContentSpan::new("header", "Host"),
            ContentSpan::new("text", ": example.com"),
        ];
        assert_eq!(
            serde_json::to_string(&line).unwrap(),
            r#"[["header","Host"],["text",": example.com"]]"#
        );
    }
}
