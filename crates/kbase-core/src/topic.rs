//! Keyword classification of user queries into topic buckets.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

/// The fixed categories a query can be classified into.
///
/// Variant order is classification priority: the first topic whose keywords
/// match wins, and `General` is the fallback.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Topic {
    Pto,
    RemoteWork,
    Security,
    Health,
    Expense,
    Performance,
    General,
}

impl Topic {
    /// Trigger substrings for this topic, lower case.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Topic::Pto => &["pto", "leave", "vacation"],
            Topic::RemoteWork => &["remote", "home", "office"],
            Topic::Security => &["password", "security", "access"],
            Topic::Health => &["health", "insurance", "benefit", "medical"],
            Topic::Expense => &["expense", "travel", "flight", "reimbursement"],
            Topic::Performance => &["performance", "review", "goal", "rating", "bonus"],
            Topic::General => &[],
        }
    }

    /// Whether `lower_query` contains any of this topic's keywords.
    fn matches(self, lower_query: &str) -> bool {
        self.keywords().iter().any(|k| lower_query.contains(k))
    }
}

/// Classifies a free-text query by case-insensitive substring match.
pub fn classify(query: &str) -> Topic {
    let lower = query.to_lowercase();
    Topic::iter()
        .find(|topic| topic.matches(&lower))
        .unwrap_or(Topic::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_keyword_selects_its_topic() {
        for topic in Topic::iter().filter(|t| *t != Topic::General) {
            for keyword in topic.keywords() {
                let query = format!("Tell me about {}", keyword.to_uppercase());
                let expected = Topic::iter()
                    .find(|t| t.matches(keyword))
                    .unwrap_or(Topic::General);
                assert_eq!(classify(&query), expected, "keyword {keyword}");
            }
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("What is the PTO policy?"), Topic::Pto);
        assert_eq!(classify("VACATION days"), Topic::Pto);
        assert_eq!(classify("Remote work guidelines?"), Topic::RemoteWork);
        assert_eq!(classify("IT Password requirements"), Topic::Security);
        assert_eq!(classify("Health benefits overview"), Topic::Health);
        assert_eq!(classify("Travel expense policy?"), Topic::Expense);
        assert_eq!(classify("Performance review process?"), Topic::Performance);
    }

    #[test]
    fn test_priority_order_first_match_wins() {
        // "leave" (PTO) beats "office" (remote work)
        assert_eq!(classify("Can I leave the office early?"), Topic::Pto);
        // "home" (remote work) beats "insurance" (health)
        assert_eq!(classify("home insurance"), Topic::RemoteWork);
        // "access" (security) beats "travel" (expense)
        assert_eq!(classify("travel system access"), Topic::Security);
    }

    #[test]
    fn test_substring_matching() {
        // "pto" inside another word still counts
        assert_eq!(classify("cryptography"), Topic::Pto);
        assert_eq!(classify("benefits"), Topic::Health);
    }

    #[test]
    fn test_no_match_is_general() {
        assert_eq!(classify("Hello there"), Topic::General);
        assert_eq!(classify(""), Topic::General);
    }

    #[test]
    fn test_display_is_snake_case() {
        assert_eq!(Topic::RemoteWork.to_string(), "remote_work");
        assert_eq!(Topic::Pto.as_ref(), "pto");
    }
}
