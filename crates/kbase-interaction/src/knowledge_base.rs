//! Static knowledge base backing the mock answering service.
//!
//! Each [`Topic`] is bound to one canned answer and at most one source
//! document.

use kbase_core::Topic;
use serde::Serialize;

/// Number of leading document characters used as a citation snippet.
pub const SNIPPET_CHARS: usize = 100;

/// A source document that answers can cite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Document {
    pub id: &'static str,
    pub title: &'static str,
    pub content: &'static str,
}

impl Document {
    /// The citation preview: first 100 characters followed by `...`.
    pub fn snippet(&self) -> String {
        let head: String = self.content.chars().take(SNIPPET_CHARS).collect();
        format!("{head}...")
    }
}

pub static DOCUMENTS: [Document; 6] = [
    Document {
        id: "doc-1",
        title: "Employee Handbook 2024",
        content: "All employees are entitled to 20 days of paid time off (PTO) per year. PTO requests must be submitted at least 2 weeks in advance via the HR portal. Unused PTO can be carried over up to 5 days into the next calendar year.",
    },
    Document {
        id: "doc-2",
        title: "Remote Work Policy",
        content: "The company adopts a hybrid work model. Employees are expected to be in the office at least 3 days a week. Remote work days should be coordinated with the team lead to ensure coverage during core business hours (10 AM - 4 PM).",
    },
    Document {
        id: "doc-3",
        title: "IT Security Guidelines",
        content: "Passwords must be at least 12 characters long and include a mix of uppercase letters, lowercase letters, numbers, and special symbols. Multi-factor authentication (MFA) is mandatory for accessing all internal systems.",
    },
    Document {
        id: "doc-4",
        title: "Health & Wellness Benefits 2024",
        content: "We offer comprehensive health insurance plans including medical, dental, and vision coverage. Employees also have access to a $500 annual wellness stipend for gym memberships or fitness equipment. Mental health support is available 24/7 via our EAP.",
    },
    Document {
        id: "doc-5",
        title: "Travel & Expense Policy",
        content: "Business class travel is approved for international flights over 8 hours. Daily meal allowance is capped at $75 per day. All expenses must be submitted within 30 days of incurring the cost with valid receipts attached.",
    },
    Document {
        id: "doc-6",
        title: "Annual Performance Review Guidelines",
        content: "Performance reviews are conducted annually in Q4. Employees must complete their self-assessment by October 15th. Managers will conduct review meetings in November. Ratings determine eligibility for annual bonuses and promotions.",
    },
];

/// Starter questions offered on an empty conversation.
pub const SUGGESTED_QUESTIONS: [&str; 6] = [
    "What is the PTO policy?",
    "Remote work guidelines?",
    "Travel expense policy?",
    "IT Password requirements",
    "Health benefits overview",
    "Performance review process?",
];

/// Canned response for a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CannedResponse {
    pub text: &'static str,
    pub document_ids: &'static [&'static str],
}

/// Returns the canned response bound to `topic`.
pub fn response_for(topic: Topic) -> CannedResponse {
    match topic {
        Topic::Pto => CannedResponse {
            text: "According to the Employee Handbook, you are entitled to 20 days of paid time off per year. You need to submit requests 2 weeks in advance.",
            document_ids: &["doc-1"],
        },
        Topic::RemoteWork => CannedResponse {
            text: "Our remote work policy is hybrid. You should be in the office 3 days a week and coordinate remote days with your team lead.",
            document_ids: &["doc-2"],
        },
        Topic::Security => CannedResponse {
            text: "For security, passwords must be 12+ characters with mixed case, numbers, and symbols. MFA is also required.",
            document_ids: &["doc-3"],
        },
        Topic::Health => CannedResponse {
            text: "Our benefits package includes medical, dental, and vision coverage, plus a $500 annual wellness stipend. Mental health support is also available.",
            document_ids: &["doc-4"],
        },
        Topic::Expense => CannedResponse {
            text: "For expenses, we cover business class for 8hr+ flights and provide a $75/day meal allowance. Please submit receipts within 30 days.",
            document_ids: &["doc-5"],
        },
        Topic::Performance => CannedResponse {
            text: "Performance reviews happen in Q4. Self-assessments are due Oct 15th, and manager reviews occur in November. These impact bonuses and promotions.",
            document_ids: &["doc-6"],
        },
        Topic::General => CannedResponse {
            text: "I can help you with questions about company policies, such as PTO, remote work, IT security, health benefits, expenses, or performance reviews. What would you like to know?",
            document_ids: &[],
        },
    }
}

pub fn find_document(document_id: &str) -> Option<&'static Document> {
    DOCUMENTS.iter().find(|d| d.id == document_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_cited_document_exists() {
        for topic in Topic::iter() {
            for id in response_for(topic).document_ids {
                assert!(find_document(id).is_some(), "{topic} cites missing {id}");
            }
        }
    }

    #[test]
    fn test_only_general_has_no_document() {
        for topic in Topic::iter() {
            let count = response_for(topic).document_ids.len();
            if topic == Topic::General {
                assert_eq!(count, 0);
            } else {
                assert_eq!(count, 1, "{topic}");
            }
        }
    }

    #[test]
    fn test_snippet_is_prefix_with_ellipsis() {
        let doc = find_document("doc-1").unwrap();
        let snippet = doc.snippet();
        assert!(snippet.ends_with("..."));
        assert_eq!(snippet.chars().count(), SNIPPET_CHARS + 3);
        assert!(doc.content.starts_with(snippet.trim_end_matches("...")));
    }
}
