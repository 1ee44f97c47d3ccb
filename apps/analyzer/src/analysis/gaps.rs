use crate::analysis::tokenizer::{tokenize, TokenSet};

/// Number of gap tokens returned by [`suggest_skills`].
pub const DEFAULT_GAP_LIMIT: usize = 10;

/// Gap tokens shorter than this many characters are dropped as noise.
const MIN_GAP_LEN: usize = 3;

/// JD tokens missing from the resume, longer than two characters, first ten
/// in lexicographic order.
pub fn suggest_skills(resume_text: &str, jd_text: &str) -> Vec<String> {
    missing_tokens(&tokenize(resume_text), &tokenize(jd_text), DEFAULT_GAP_LIMIT)
}

pub fn missing_tokens(resume_tokens: &TokenSet, jd_tokens: &TokenSet, limit: usize) -> Vec<String> {
    jd_tokens
        .difference(resume_tokens)
        .filter(|token| token.chars().count() >= MIN_GAP_LEN)
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaps_for_simple_pair() {
        assert_eq!(
            suggest_skills("I know Python and SQL", "Need Python and Java experience"),
            vec!["experience", "java", "need"]
        );
    }

    #[test]
    fn test_short_tokens_filtered() {
        // "go", "ci", "a" are too short; "aws" survives
        assert_eq!(suggest_skills("rust", "rust go ci a aws"), vec!["aws"]);
    }

    #[test]
    fn test_at_most_ten_and_all_longer_than_two() {
        let jd = "alpha bravo charlie delta echo foxtrot golf hotel india juliet \
                  kilo lima mike november oscar papa qa x y";
        let gaps = suggest_skills("", jd);
        assert_eq!(gaps.len(), 10);
        assert!(gaps.iter().all(|g| g.len() > 2));
        assert_eq!(gaps.first().map(String::as_str), Some("alpha"));
    }

    #[test]
    fn test_no_gaps_when_resume_covers_jd() {
        assert!(suggest_skills("Rust and Kafka and Kubernetes", "rust kafka kubernetes").is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        assert!(suggest_skills("", "").is_empty());
        assert!(suggest_skills("python", "").is_empty());
    }

    #[test]
    fn test_zero_limit_returns_nothing() {
        let resume = tokenize("rust");
        let jd = tokenize("kafka kubernetes");
        assert!(missing_tokens(&resume, &jd, 0).is_empty());
    }
}
