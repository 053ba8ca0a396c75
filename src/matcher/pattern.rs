//! Path patterns for URL matching.

use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// One segment of a compiled path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Matched by exact string equality.
    Literal(String),
    /// Matches any single segment and binds it under the given name.
    Parameter(String),
    /// Matches any single segment; the value is discarded.
    Wildcard,
}

impl Segment {
    fn classify(raw: &str) -> Self {
        if raw == "*" {
            Self::Wildcard
        } else if let Some(name) = raw.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            Self::Parameter(name.to_owned())
        } else {
            Self::Literal(raw.to_owned())
        }
    }
}

/// A path pattern for URL matching.
///
/// Compiled once at construction and reused for every match. Splitting is
/// on `/` with empty segments discarded, so leading and trailing slashes
/// are insignificant. A pattern with N segments only matches paths with
/// exactly N non-empty segments; there is no partial-path matching.
///
/// ```
/// use rudder::PathPattern;
///
/// let pattern = PathPattern::new("/my/{adjective}/string/{number}");
///
/// assert!(pattern.matches("/my/cool/string/1"));
/// assert!(pattern.matches("/my/awesome/string/2"));
/// assert!(!pattern.matches("/your/cool/string/3")); // literal mismatch
/// assert!(!pattern.matches("/my/cool/string"));     // segment count mismatch
/// ```
///
/// Two patterns are equal iff their source templates are equal, which makes
/// a pattern usable as a lookup key independent of its compiled structure.
#[derive(Debug, Clone)]
pub struct PathPattern {
    template: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compiles a pattern from its template string.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        let template = template.into();
        let segments = template
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(Segment::classify)
            .collect();
        Self { template, segments }
    }

    /// The source template string.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Whether `path` matches this pattern, ignoring bound parameters.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        self.match_segments(&segments).is_some()
    }

    /// Matches the pattern against already-split path segments, returning
    /// the bound path parameters on success.
    pub(crate) fn match_segments(&self, path: &[&str]) -> Option<HashMap<String, String>> {
        if path.len() != self.segments.len() {
            return None;
        }

        let mut parameters = HashMap::new();
        for (segment, observed) in self.segments.iter().zip(path) {
            match segment {
                Segment::Literal(literal) => {
                    if literal != observed {
                        return None;
                    }
                }
                Segment::Parameter(name) => {
                    parameters.insert(name.clone(), (*observed).to_owned());
                }
                Segment::Wildcard => {}
            }
        }
        Some(parameters)
    }
}

impl From<&str> for PathPattern {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}

impl From<String> for PathPattern {
    fn from(template: String) -> Self {
        Self::new(template)
    }
}

impl PartialEq for PathPattern {
    fn eq(&self, other: &Self) -> bool {
        self.template == other.template
    }
}

impl Eq for PathPattern {}

impl Hash for PathPattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.template.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slashes_are_insignificant() {
        let bare = PathPattern::new("products/{category}");
        assert!(bare.matches("/products/shoes"));
        assert!(bare.matches("products/shoes/"));
        assert!(bare.matches("//products//shoes"));
    }

    #[test]
    fn test_segment_count_must_match_exactly() {
        let pattern = PathPattern::new("/a/{x}/b");
        assert!(pattern.matches("/a/42/b"));
        assert!(!pattern.matches("/a/42"));
        assert!(!pattern.matches("/a/42/b/c"));
        assert!(!pattern.matches("/"));
    }

    #[test]
    fn test_wildcard_matches_any_single_segment_and_binds_nothing() {
        let pattern = PathPattern::new("/files/*/{name}");
        let parameters = pattern
            .match_segments(&["files", "anything", "report"])
            .unwrap();
        assert_eq!(parameters.len(), 1);
        assert_eq!(parameters["name"], "report");
        assert!(pattern.match_segments(&["files", "report"]).is_none());
    }

    #[test]
    fn test_parameters_bind_the_observed_segments() {
        let pattern = PathPattern::new("/a/{x}/b");
        let parameters = pattern.match_segments(&["a", "42", "b"]).unwrap();
        assert_eq!(parameters["x"], "42");
    }

    #[test]
    fn test_equality_is_on_the_template_string() {
        assert_eq!(PathPattern::new("/a/{x}"), PathPattern::new("/a/{x}"));
        // Structurally identical but textually different templates differ.
        assert_ne!(PathPattern::new("/a/{x}"), PathPattern::new("a/{x}"));
    }
}
