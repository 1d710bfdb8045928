//! Query parsing module
//!
//! Turns the `/locate` query string into a [`LocateQuery`]:
//! - `search`: literal substring, trimmed, wins when `regex` is also given
//! - `regex`: regular expression, used verbatim, must compile
//! - `ci`: case-insensitive matching, only when exactly `true`

use regex::Regex;
use thiserror::Error;

/// Raw query parameters accepted by the locate endpoint
#[derive(Debug, Clone, Default)]
pub struct LocateParams {
    /// Literal search pattern
    pub search: Option<String>,
    /// Regular expression pattern
    pub regex: Option<String>,
    /// Case-insensitivity flag
    pub ci: Option<String>,
}

impl LocateParams {
    /// Build from decoded query pairs; the first occurrence of a key wins
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "search" => &mut params.search,
                "regex" => &mut params.regex,
                "ci" => &mut params.ci,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }
}

/// Pattern handed to the locate command
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Substring match
    Literal(String),
    /// Regular expression match
    Regex(Regex),
}

impl Pattern {
    /// Source text of the pattern
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(s) => s,
            Self::Regex(re) => re.as_str(),
        }
    }

    /// Mode name used in logs
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Literal(_) => "exact-search",
            Self::Regex(_) => "regex-search",
        }
    }
}

/// A validated locate query
#[derive(Debug, Clone)]
pub struct LocateQuery {
    pub pattern: Pattern,
    pub case_insensitive: bool,
}

/// Reasons a query string is rejected
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("neither search nor regex parameter supplied")]
    MissingPattern,
    #[error(transparent)]
    InvalidRegex(#[from] regex::Error),
}

impl LocateQuery {
    /// Literal query
    pub fn literal(pattern: impl Into<String>, case_insensitive: bool) -> Self {
        Self {
            pattern: Pattern::Literal(pattern.into()),
            case_insensitive,
        }
    }

    /// Regex query; fails if the expression does not compile
    pub fn regex(pattern: &str, case_insensitive: bool) -> Result<Self, QueryError> {
        Ok(Self {
            pattern: Pattern::Regex(Regex::new(pattern)?),
            case_insensitive,
        })
    }

    /// Validate raw parameters
    pub fn from_params(params: &LocateParams) -> Result<Self, QueryError> {
        let case_insensitive = params.ci.as_deref() == Some("true");

        if let Some(ref search) = params.search {
            return Ok(Self::literal(search.trim(), case_insensitive));
        }

        match params.regex {
            Some(ref regex) => Self::regex(regex, case_insensitive),
            None => Err(QueryError::MissingPattern),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(search: Option<&str>, regex: Option<&str>, ci: Option<&str>) -> LocateParams {
        LocateParams {
            search: search.map(String::from),
            regex: regex.map(String::from),
            ci: ci.map(String::from),
        }
    }

    #[test]
    fn test_search_is_trimmed() {
        let query = LocateQuery::from_params(&params(Some("  foo.txt \t"), None, None)).unwrap();
        assert!(matches!(query.pattern, Pattern::Literal(ref s) if s == "foo.txt"));
        assert!(!query.case_insensitive);
    }

    #[test]
    fn test_regex_is_verbatim() {
        let query =
            LocateQuery::from_params(&params(None, Some(" ^/etc/.*\\.conf$"), None)).unwrap();
        assert_eq!(query.pattern.as_str(), " ^/etc/.*\\.conf$");
        assert_eq!(query.pattern.mode(), "regex-search");
    }

    #[test]
    fn test_search_takes_precedence() {
        let query = LocateQuery::from_params(&params(Some("foo"), Some("("), None)).unwrap();
        assert_eq!(query.pattern.mode(), "exact-search");
        assert_eq!(query.pattern.as_str(), "foo");
    }

    #[test]
    fn test_missing_pattern() {
        let err = LocateQuery::from_params(&params(None, None, Some("true"))).unwrap_err();
        assert!(matches!(err, QueryError::MissingPattern));
    }

    #[test]
    fn test_invalid_regex_reports_compiler_text() {
        let err = LocateQuery::from_params(&params(None, Some("a(b"), None)).unwrap_err();
        let expected = Regex::new("a(b").unwrap_err().to_string();
        assert!(matches!(err, QueryError::InvalidRegex(_)));
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_case_insensitive_only_for_literal_true() {
        for (ci, expected) in [
            (Some("true"), true),
            (Some("TRUE"), false),
            (Some("1"), false),
            (Some(""), false),
            (None, false),
        ] {
            let query = LocateQuery::from_params(&params(Some("x"), None, ci)).unwrap();
            assert_eq!(query.case_insensitive, expected, "ci={:?}", ci);
        }
    }

    #[test]
    fn test_from_pairs_first_value_wins() {
        let params = LocateParams::from_pairs(vec![
            ("regex", "a.*"),
            ("other", "ignored"),
            ("ci", "true"),
            ("regex", "b.*"),
            ("ci", "false"),
        ]);
        assert_eq!(params.regex.as_deref(), Some("a.*"));
        assert_eq!(params.ci.as_deref(), Some("true"));
        assert!(params.search.is_none());
    }

    #[test]
    fn test_empty_search_is_still_a_search() {
        let query = LocateQuery::from_params(&params(Some("   "), None, None)).unwrap();
        assert_eq!(query.pattern.as_str(), "");
    }
}
