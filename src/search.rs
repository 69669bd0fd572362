//! Keyword search engine backing the forward filter.

/// An ordered set of search phrases with exact-match lookup.
///
/// Phrases are deduplicated on insert and kept in insertion order. The set
/// is built once at startup and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    queries: Vec<String>,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self {
            queries: Vec::new(),
        }
    }

    /// Add a phrase unless an equal one is already stored.
    pub fn add_query(&mut self, phrase: &str) {
        if !self.queries.iter().any(|q| q == phrase) {
            self.queries.push(phrase.to_string());
        }
    }

    /// True iff any stored phrase occurs in `text` as a case-sensitive
    /// substring. Empty `text` never matches, even when an empty phrase
    /// is stored.
    pub fn has_queries(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        self.queries.iter().any(|q| text.contains(q.as_str()))
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(phrases: &[&str]) -> SearchEngine {
        let mut engine = SearchEngine::new();
        for phrase in phrases {
            engine.add_query(phrase);
        }
        engine
    }

    #[test]
    fn test_distinct_phrases_are_retained() {
        let engine = engine_with(&["hello", "hey world"]);
        assert_eq!(engine.len(), 2);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut engine = engine_with(&["hello", "hey world"]);
        engine.add_query("hello");
        assert_eq!(engine.len(), 2);
    }

    #[test]
    fn test_matches_substring() {
        let engine = engine_with(&["hello", "hey world"]);
        assert!(engine.has_queries("say hello there"));
    }

    #[test]
    fn test_no_match_without_substring() {
        let engine = engine_with(&["hello", "hey world"]);
        assert!(!engine.has_queries("goodbye"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let engine = engine_with(&["hello", "hey world"]);
        assert!(!engine.has_queries("HEY WORLD"));
    }

    #[test]
    fn test_empty_engine_never_matches() {
        let engine = SearchEngine::new();
        assert!(engine.is_empty());
        assert!(!engine.has_queries("hello"));
    }

    #[test]
    fn test_empty_text_never_matches() {
        let mut engine = engine_with(&["hello"]);
        assert!(!engine.has_queries(""));

        // Not even when an empty phrase is stored.
        engine.add_query("");
        assert!(!engine.has_queries(""));
    }

    #[test]
    fn test_empty_phrase_is_stored() {
        let engine = engine_with(&["", ""]);
        assert_eq!(engine.len(), 1);
        assert!(engine.has_queries("anything"));
    }

    #[test]
    fn test_no_word_boundary_semantics() {
        let engine = engine_with(&["hey"]);
        assert!(engine.has_queries("sheyla"));
    }
}
