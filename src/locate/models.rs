//! Locate result types and output normalization

use serde::Serialize;

/// Ordered list of paths returned by one locate invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultSet(Vec<String>);

impl ResultSet {
    pub fn new(paths: Vec<String>) -> Self {
        Self(paths)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn paths(&self) -> &[String] {
        &self.0
    }
}

/// Parse captured locate output into a [`ResultSet`].
///
/// NUL terminators are folded into newlines, so output is handled the same
/// whether or not the tool honoured `--null`. A single empty entry is
/// dropped from each end; empty entries in the middle are kept.
pub fn parse_output(stdout: &[u8]) -> ResultSet {
    let text = String::from_utf8_lossy(stdout).replace('\0', "\n");
    let entries: Vec<&str> = text.split('\n').collect();
    ResultSet(trim_empty_ends(&entries).iter().map(|s| s.to_string()).collect())
}

fn trim_empty_ends<'a>(entries: &'a [&'a str]) -> &'a [&'a str] {
    let mut slice = entries;
    if let [first, rest @ ..] = slice {
        if first.is_empty() {
            slice = rest;
        }
    }
    if let [rest @ .., last] = slice {
        if last.is_empty() {
            slice = rest;
        }
    }
    slice
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(set: &ResultSet) -> Vec<&str> {
        set.paths().iter().map(String::as_str).collect()
    }

    #[test]
    fn test_trailing_delimiter_stripped() {
        let set = parse_output(b"/a/b\n/c/d\n");
        assert_eq!(paths(&set), vec!["/a/b", "/c/d"]);
    }

    #[test]
    fn test_empty_output_is_empty_set() {
        assert!(parse_output(b"").is_empty());
        assert!(parse_output(b"\n").is_empty());
        assert!(parse_output(b"\0").is_empty());
    }

    #[test]
    fn test_nul_delimited_output() {
        let set = parse_output(b"/a/b\0/c/d\0");
        assert_eq!(paths(&set), vec!["/a/b", "/c/d"]);
    }

    #[test]
    fn test_only_one_empty_stripped_per_end() {
        let set = parse_output(b"\n\n/a\n\n/b\n\n");
        assert_eq!(paths(&set), vec!["", "/a", "", "/b", ""]);
    }

    #[test]
    fn test_no_delimiter_at_end() {
        let set = parse_output(b"/only");
        assert_eq!(paths(&set), vec!["/only"]);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let set = ResultSet::new(vec!["/x".into(), "/y \"q\"".into(), "/z".into()]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["/x","/y \"q\"","/z"]"#);

        let back: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set.paths());
    }
}
