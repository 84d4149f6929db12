//! Message Classifier — keyword triage of pasted client emails.
//!
//! Deterministic, case-insensitive substring matching against ordered rule tables:
//! 1. Priority rules: first match wins, `Medium` when nothing fires.
//! 2. Tag rules: evaluated independently, every match attaches its tag in table order.
//! 3. Summary: long-form sentence naming the first detected tag when the input
//!    exceeds `LONG_MESSAGE_THRESHOLD` UTF-16 code units (the length a browser
//!    reports for the textarea), a fixed short sentence otherwise.
//!
//! Total over all inputs: an unmatched message yields `Medium` + `["general"]`.

use serde::{Deserialize, Serialize};

/// Inputs longer than this (in characters) get the long-form summary.
pub const LONG_MESSAGE_THRESHOLD: usize = 100;

/// Tag used when no tag rule fires.
pub const GENERAL_TAG: &str = "general";

/// Subject used in the long-form summary when no tag rule fires.
const FALLBACK_SUBJECT: &str = "business matters";

const SHORT_SUMMARY: &str = "Brief client communication requiring attention.";

/// Urgency inferred from trigger phrases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// A rule fires when any of its trigger phrases occurs in the lower-cased text.
#[derive(Debug, Clone)]
pub struct TriggerRule<T> {
    /// Lower-case trigger phrases.
    pub triggers: Vec<String>,
    pub outcome: T,
}

impl<T> TriggerRule<T> {
    pub fn new(triggers: &[&str], outcome: T) -> Self {
        Self {
            triggers: triggers.iter().map(|t| t.to_lowercase()).collect(),
            outcome,
        }
    }

    /// `haystack` must already be lower-cased.
    fn matches(&self, haystack: &str) -> bool {
        self.triggers.iter().any(|t| haystack.contains(t.as_str()))
    }
}

/// Output of a single classification. Created fresh per call, owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub summary: String,
    /// Detection-ordered, deduplicated, never empty.
    pub tags: Vec<String>,
    pub priority: Priority,
}

/// Rule-table driven classifier. Tables are immutable after construction.
#[derive(Debug, Clone)]
pub struct MessageClassifier {
    priority_rules: Vec<TriggerRule<Priority>>,
    tag_rules: Vec<TriggerRule<String>>,
}

impl Default for MessageClassifier {
    fn default() -> Self {
        Self::default_rules()
    }
}

impl MessageClassifier {
    /// Builds a classifier over custom tables. Evaluation order is table order.
    pub fn new(
        priority_rules: Vec<TriggerRule<Priority>>,
        tag_rules: Vec<TriggerRule<String>>,
    ) -> Self {
        Self {
            priority_rules,
            tag_rules,
        }
    }

    /// The demo's canned tables.
    pub fn default_rules() -> Self {
        let priority_rules = vec![
            TriggerRule::new(&["urgent", "asap", "immediately"], Priority::High),
            TriggerRule::new(&["when you have time", "no rush"], Priority::Low),
        ];

        let tag_rules = vec![
            TriggerRule::new(&["renew", "contract", "expiring"], "renewal".to_string()),
            TriggerRule::new(&["expand", "additional", "more"], "expansion".to_string()),
            TriggerRule::new(&["concern", "issue", "problem"], "risk".to_string()),
            TriggerRule::new(&["ceo", "executive", "decision"], "executive".to_string()),
            TriggerRule::new(&["meeting", "call", "discuss"], "meeting-request".to_string()),
        ];

        Self::new(priority_rules, tag_rules)
    }

    pub fn classify(&self, text: &str) -> ClassificationResult {
        let lowered = text.to_lowercase();

        let priority = self
            .priority_rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.outcome)
            .unwrap_or_default();

        let mut tags: Vec<String> = Vec::new();
        for rule in &self.tag_rules {
            if rule.matches(&lowered) && !tags.contains(&rule.outcome) {
                tags.push(rule.outcome.clone());
            }
        }

        let summary = if text.encode_utf16().count() > LONG_MESSAGE_THRESHOLD {
            let subject = tags.first().map(String::as_str).unwrap_or(FALLBACK_SUBJECT);
            format!(
                "Client communication regarding {subject}. Key points identified for follow-up action."
            )
        } else {
            SHORT_SUMMARY.to_string()
        };

        if tags.is_empty() {
            tags.push(GENERAL_TAG.to_string());
        }

        ClassificationResult {
            summary,
            tags,
            priority,
        }
    }
}

/// Classifies `text` with the default rule tables.
pub fn classify(text: &str) -> ClassificationResult {
    MessageClassifier::default_rules().classify(text)
}
