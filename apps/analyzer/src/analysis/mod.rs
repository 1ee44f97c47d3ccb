//! Resume vs job-description analysis.
//!
//! Pure functions only: tokenize both texts once, then derive the match
//! percentage and gap list from the two token sets. The static advisor works
//! on the resume text alone.

pub mod advisor;
pub mod gaps;
pub mod match_scorer;
pub mod tokenizer;

use crate::analysis::gaps::missing_tokens;
use crate::analysis::match_scorer::match_percentage;
use crate::analysis::tokenizer::tokenize;

/// Lexical comparison of one resume against one job description.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchReport {
    pub match_percentage: f64, // 0.0 – 100.0, two decimals
    pub missing_skills: Vec<String>,
    pub resume_token_count: usize,
    pub jd_token_count: usize,
}

/// Tokenizes both texts and computes the match percentage and the first
/// `gap_limit` gap tokens.
pub fn compare(resume_text: &str, jd_text: &str, gap_limit: usize) -> MatchReport {
    let resume_tokens = tokenize(resume_text);
    let jd_tokens = tokenize(jd_text);

    MatchReport {
        match_percentage: match_percentage(&resume_tokens, &jd_tokens),
        missing_skills: missing_tokens(&resume_tokens, &jd_tokens, gap_limit),
        resume_token_count: resume_tokens.len(),
        jd_token_count: jd_tokens.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::gaps::suggest_skills;
    use crate::analysis::match_scorer::calculate_match;

    #[test]
    fn test_compare_agrees_with_standalone_operations() {
        let resume = "Senior engineer: Rust, SQL, Kafka. Led 3 projects.";
        let jd = "We need Rust and Go engineers with Kafka and Kubernetes skills.";

        let report = compare(resume, jd, 10);
        assert_eq!(report.match_percentage, calculate_match(resume, jd));
        assert_eq!(report.missing_skills, suggest_skills(resume, jd));
    }

    #[test]
    fn test_compare_reports_token_counts() {
        let report = compare("I know Python and SQL", "Need Python and Java experience", 10);
        assert_eq!(report.resume_token_count, 5);
        assert_eq!(report.jd_token_count, 5);
        assert_eq!(report.match_percentage, 40.0);
        assert_eq!(report.missing_skills, vec!["experience", "java", "need"]);
    }

    #[test]
    fn test_compare_respects_gap_limit() {
        let report = compare("", "alpha bravo charlie delta echo", 2);
        assert_eq!(report.missing_skills, vec!["alpha", "bravo"]);
    }
}
