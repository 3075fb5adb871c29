/// A normalized search query: trimmed, case-folded once at construction.
///
/// The empty query matches everything, so callers never special-case a
/// cleared search box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring test against the haystack.
    pub fn matches(&self, haystack: &str) -> bool {
        self.0.is_empty() || haystack.to_lowercase().contains(&self.0)
    }

    /// True if the query matches any of the given fields.
    pub fn matches_any<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        if self.0.is_empty() {
            return true;
        }
        fields.into_iter().any(|field| self.matches(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_everything() {
        let query = SearchQuery::new("   ");
        assert!(query.is_empty());
        assert!(query.matches("anything"));
        assert!(query.matches(""));
    }

    #[test]
    fn match_is_case_insensitive() {
        let query = SearchQuery::new("  ENG ");
        assert!(query.matches("Civil Engineering"));
        assert!(query.matches("engineer"));
        assert!(!query.matches("Operations"));
    }

    #[test]
    fn matches_any_checks_all_fields() {
        let query = SearchQuery::new("controller");
        assert!(query.matches_any(["Lakshmi Das", "Train Controller"]));
        assert!(!query.matches_any(["Ravi Krishnan", "Station Master"]));
    }
}
