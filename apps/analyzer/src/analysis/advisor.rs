//! Static Advisor — rule-based resume tips.
//!
//! Each rule pairs a keyword with a tip. The tip is emitted when the keyword
//! does not occur anywhere in the resume (case-insensitive substring test).
//! When no rule fires, the single fallback message is returned instead.
//! There is no inference here: the rule table is the whole behaviour.

const DEFAULT_RULES: &[(&str, &str)] = &[
    ("sql", "Highlight any SQL experience you have."),
    ("project", "Add more details about your projects."),
    ("python", "Mention your Python programming skills."),
];

const DEFAULT_FALLBACK: &str = "Your resume looks strong! Just tailor it to the job description.";

#[derive(Debug, Clone, PartialEq)]
pub struct AdviceRule {
    pub keyword: String,
    pub message: String,
}

impl AdviceRule {
    pub fn new(keyword: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into().to_lowercase(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Advisor {
    rules: Vec<AdviceRule>,
    fallback: String,
}

impl Default for Advisor {
    fn default() -> Self {
        Self::new(
            DEFAULT_RULES
                .iter()
                .map(|(keyword, message)| AdviceRule::new(*keyword, *message))
                .collect(),
            DEFAULT_FALLBACK,
        )
    }
}

impl Advisor {
    pub fn new(rules: Vec<AdviceRule>, fallback: impl Into<String>) -> Self {
        Self {
            rules,
            fallback: fallback.into(),
        }
    }

    pub fn rules(&self) -> &[AdviceRule] {
        &self.rules
    }

    /// Tips for every rule whose keyword is absent, in rule order, or the
    /// fallback message alone when the resume mentions every keyword.
    pub fn advise(&self, resume_text: &str) -> Vec<String> {
        let text_lower = resume_text.to_lowercase();

        let suggestions: Vec<String> = self
            .rules
            .iter()
            .filter(|rule| !text_lower.contains(&rule.keyword))
            .map(|rule| rule.message.clone())
            .collect();

        if suggestions.is_empty() {
            return vec![self.fallback.clone()];
        }
        suggestions
    }
}
