/// decides whether a business category satisfies a rule keyword.
///
/// categories and keywords are both lowercase by the time they arrive here.
/// any `Fn(&str, &str) -> bool` closure can be used as a matcher.
pub trait CategoryMatcher: Send + Sync {
    fn matches(&self, category: &str, keyword: &str) -> bool;

    /// true if the category matches any of the keywords. stops at the first match.
    fn matches_any(&self, category: &str, keywords: &[String]) -> bool {
        keywords.iter().any(|k| self.matches(category, k))
    }
}

/// plain substring containment, "primaria benito juarez" matches "primaria".
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl CategoryMatcher for SubstringMatcher {
    fn matches(&self, category: &str, keyword: &str) -> bool {
        category.contains(keyword)
    }
}

impl<F> CategoryMatcher for F
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    fn matches(&self, category: &str, keyword: &str) -> bool {
        self(category, keyword)
    }
}
