//! Question Recommender — fixed discovery questions per industry.
//!
//! Exact, case-sensitive lookup of the category key. Unknown keys get the
//! generic default set, so the result is never empty.

use serde::{Deserialize, Serialize};

/// Labels offered by the industry selector, in display order.
/// Only some of them have a dedicated question set.
pub const INDUSTRIES: &[&str] = &[
    "Financial Services",
    "Technology",
    "Healthcare",
    "Manufacturing",
    "Retail",
    "Real Estate",
    "Professional Services",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub question: String,
    /// Short theme label for the question.
    pub category: String,
    pub rationale: String,
}

impl RecommendationEntry {
    fn new(question: &str, category: &str, rationale: &str) -> Self {
        Self {
            question: question.to_string(),
            category: category.to_string(),
            rationale: rationale.to_string(),
        }
    }
}

/// Ordered questions configured for one category key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryQuestionSet {
    pub category: String,
    pub entries: Vec<RecommendationEntry>,
}

#[derive(Debug, Clone)]
pub struct QuestionRecommender {
    sets: Vec<CategoryQuestionSet>,
    default_set: Vec<RecommendationEntry>,
}

impl Default for QuestionRecommender {
    fn default() -> Self {
        Self::default_sets()
    }
}

impl QuestionRecommender {
    pub fn new(sets: Vec<CategoryQuestionSet>, default_set: Vec<RecommendationEntry>) -> Self {
        Self { sets, default_set }
    }

    pub fn default_sets() -> Self {
        let sets = vec![
            CategoryQuestionSet {
                category: "Financial Services".to_string(),
                entries: vec![
                    RecommendationEntry::new(
                        "What regulatory requirements are driving your current technology initiatives?",
                        "Compliance",
                        "Financial services face unique regulatory pressures that often drive tech decisions",
                    ),
                    RecommendationEntry::new(
                        "How are you currently measuring and reporting on risk exposure across your portfolio?",
                        "Risk Management",
                        "Risk visibility is crucial for financial institutions and often requires specialized tools",
                    ),
                    RecommendationEntry::new(
                        "What challenges are you experiencing with real-time data processing for trading or client reporting?",
                        "Data & Analytics",
                        "Real-time processing capabilities are competitive advantages in financial services",
                    ),
                ],
            },
            CategoryQuestionSet {
                category: "Technology".to_string(),
                entries: vec![
                    RecommendationEntry::new(
                        "What percentage of your development resources are currently allocated to maintaining legacy systems?",
                        "Technical Debt",
                        "Tech companies often struggle with balancing innovation and maintenance",
                    ),
                    RecommendationEntry::new(
                        "How are you measuring developer productivity and identifying bottlenecks in your CI/CD pipeline?",
                        "DevOps Efficiency",
                        "Developer productivity directly impacts time-to-market for tech companies",
                    ),
                    RecommendationEntry::new(
                        "What strategies are you using to attract and retain top engineering talent in this competitive market?",
                        "Talent Management",
                        "Talent acquisition and retention are critical challenges for tech companies",
                    ),
                ],
            },
            CategoryQuestionSet {
                category: "Healthcare".to_string(),
                entries: vec![
                    RecommendationEntry::new(
                        "How are you ensuring patient data security while enabling interoperability between systems?",
                        "Data Security & Compliance",
                        "Healthcare organizations must balance security with data accessibility",
                    ),
                    RecommendationEntry::new(
                        "What metrics are you tracking to measure patient satisfaction and clinical outcomes?",
                        "Quality Metrics",
                        "Outcome measurement is increasingly important for healthcare organizations",
                    ),
                    RecommendationEntry::new(
                        "How are you leveraging AI or machine learning to improve diagnostic accuracy or operational efficiency?",
                        "AI & Innovation",
                        "Healthcare is rapidly adopting AI for both clinical and operational improvements",
                    ),
                ],
            },
        ];

        let default_set = vec![
            RecommendationEntry::new(
                "What are the top 3 business challenges keeping your leadership team up at night?",
                "Strategic Priorities",
                "Understanding strategic challenges helps identify solution fit",
            ),
            RecommendationEntry::new(
                "How do you currently measure success in this area, and what would improvement look like?",
                "Success Metrics",
                "Establishing baseline metrics is crucial for demonstrating value",
            ),
        ];

        Self::new(sets, default_set)
    }

    /// Returns the configured questions for `category_key`, or the default set on a miss.
    pub fn recommend(&self, category_key: &str) -> &[RecommendationEntry] {
        self.sets
            .iter()
            .find(|set| set.category == category_key)
            .map(|set| set.entries.as_slice())
            .unwrap_or(self.default_set.as_slice())
    }

    /// Configured category keys, in configuration order.
    pub fn categories(&self) -> Vec<&str> {
        self.sets.iter().map(|s| s.category.as_str()).collect()
    }

    pub fn default_set(&self) -> &[RecommendationEntry] {
        &self.default_set
    }

    /// Whether `category_key` has a dedicated set.
    pub fn is_configured(&self, category_key: &str) -> bool {
        self.sets.iter().any(|s| s.category == category_key)
    }
}
