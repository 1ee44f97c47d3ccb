use crate::analysis::tokenizer::{tokenize, TokenSet};

/// Percentage of JD tokens that also appear in the resume, rounded to two
/// decimals. Defined as 0 when the JD has no tokens.
pub fn calculate_match(resume_text: &str, jd_text: &str) -> f64 {
    match_percentage(&tokenize(resume_text), &tokenize(jd_text))
}

pub fn match_percentage(resume_tokens: &TokenSet, jd_tokens: &TokenSet) -> f64 {
    if jd_tokens.is_empty() {
        return 0.0;
    }
    let common = jd_tokens.intersection(resume_tokens).count();
    round2(common as f64 / jd_tokens.len() as f64 * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_overlap() {
        assert_eq!(
            calculate_match("I know Python and SQL", "Need Python and Java experience"),
            40.0
        );
    }

    #[test]
    fn test_empty_jd_scores_zero() {
        assert_eq!(calculate_match("Python SQL projects", ""), 0.0);
        assert_eq!(calculate_match("", ""), 0.0);
        assert_eq!(calculate_match("anything", "!!! ---"), 0.0);
    }

    #[test]
    fn test_self_match_is_full() {
        let text = "Rust engineer with 5 years of distributed systems work";
        assert_eq!(calculate_match(text, text), 100.0);
    }

    #[test]
    fn test_case_invariant() {
        let lower = calculate_match("i know python", "python java sql");
        let upper = calculate_match("I KNOW PYTHON", "Python JAVA Sql");
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_idempotent() {
        let a = calculate_match("rust go", "rust java go kotlin swift");
        let b = calculate_match("rust go", "rust java go kotlin swift");
        assert_eq!(a, b);
        assert_eq!(a, 40.0);
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        // 1 of 3 JD tokens matched
        assert_eq!(calculate_match("rust", "rust go java"), 33.33);
        // 2 of 3
        assert_eq!(calculate_match("rust go", "rust go java"), 66.67);
    }

    #[test]
    fn test_exact_halves_round_to_even() {
        let jd: Vec<String> = (0..32).map(|i| format!("w{i:02}")).collect();
        let jd = jd.join(" ");

        // 1/32 = 3.125%, 5/32 = 15.625%
        assert_eq!(calculate_match("w00", &jd), 3.12);
        assert_eq!(calculate_match("w00 w01 w02 w03 w04", &jd), 15.62);
        // 3/32 = 9.375% rounds up to the even digit
        assert_eq!(calculate_match("w00 w01 w02", &jd), 9.38);
    }

    #[test]
    fn test_score_bounded_0_to_100() {
        let score = calculate_match("rust rust rust go go java python", "rust");
        assert!((0.0..=100.0).contains(&score));
        assert_eq!(score, 100.0);
        assert_eq!(calculate_match("", "rust"), 0.0);
    }
}
