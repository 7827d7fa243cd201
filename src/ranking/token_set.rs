use rapidfuzz::distance::indel;
use std::collections::BTreeSet;

/// Token-set similarity between two names, 0-100.
///
/// Both sides are lowercased and split into a deduplicated set of
/// alphanumeric tokens, so word order, repeated tokens, and punctuation do
/// not matter. The score is the best normalized indel ratio among the sorted
/// token intersection and that intersection extended with each side's
/// leftover tokens; a query whose tokens are a subset of the candidate's
/// therefore scores 100.
pub fn token_set_ratio(query: &str, candidate: &str) -> u8 {
    let query_lower = query.to_lowercase();
    let candidate_lower = candidate.to_lowercase();

    let query_tokens = tokens(&query_lower);
    let candidate_tokens = tokens(&candidate_lower);
    if query_tokens.is_empty() || candidate_tokens.is_empty() {
        return 0;
    }

    let intersection: Vec<&str> = query_tokens
        .intersection(&candidate_tokens)
        .copied()
        .collect();
    let query_rest: Vec<&str> = query_tokens
        .difference(&candidate_tokens)
        .copied()
        .collect();
    let candidate_rest: Vec<&str> = candidate_tokens
        .difference(&query_tokens)
        .copied()
        .collect();

    let sect = intersection.join(" ");
    let combined_query = combine(&sect, &query_rest);
    let combined_candidate = combine(&sect, &candidate_rest);

    let best = [
        ratio(&sect, &combined_query),
        ratio(&sect, &combined_candidate),
        ratio(&combined_query, &combined_candidate),
    ]
    .into_iter()
    .fold(0.0_f64, f64::max);

    best.round() as u8
}

/// Lowercased alphanumeric tokens as an ordered set (duplicates removed)
fn tokens(text_lower: &str) -> BTreeSet<&str> {
    text_lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Intersection string extended with one side's sorted leftover tokens
fn combine(sect: &str, rest: &[&str]) -> String {
    let rest = rest.join(" ");
    if sect.is_empty() {
        rest
    } else if rest.is_empty() {
        sect.to_string()
    } else {
        format!("{} {}", sect, rest)
    }
}

/// Normalized indel similarity as a percentage (0.0 - 100.0)
fn ratio(a: &str, b: &str) -> f64 {
    indel::normalized_similarity(a.chars(), b.chars()) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert_eq!(token_set_ratio("JOHN SMITH", "JOHN SMITH"), 100);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(token_set_ratio("john smith", "JOHN SMITH"), 100);
        assert_eq!(
            token_set_ratio("John Smith", "stored name"),
            token_set_ratio("JOHN SMITH", "stored name")
        );
    }

    #[test]
    fn test_reordered_tokens() {
        assert_eq!(token_set_ratio("SMITH JOHN", "JOHN SMITH"), 100);
    }

    #[test]
    fn test_query_subset_of_candidate() {
        // Extra stored tokens do not hurt a full-query match
        assert_eq!(token_set_ratio("JOHN SMITH", "SMITH JOHN KUMAR"), 100);
        assert_eq!(token_set_ratio("JOHN SMITH", "KUMAR JOHN SMITH"), 100);
    }

    #[test]
    fn test_partial_name() {
        assert_eq!(token_set_ratio("ANJALI", "ANJALI SHARMA"), 100);
    }

    #[test]
    fn test_duplicate_tokens_removed() {
        assert_eq!(token_set_ratio("john john smith", "john smith"), 100);
    }

    #[test]
    fn test_misspelling_scores_high() {
        let score = token_set_ratio("JHON SMITH", "JOHN SMITH");
        assert!(score >= 85, "score was {}", score);
        assert!(score < 100, "score was {}", score);
    }

    #[test]
    fn test_punctuation_ignored() {
        assert_eq!(token_set_ratio("A. KUMAR", "A KUMAR"), 100);
        assert_eq!(token_set_ratio("MARY-JANE DSOUZA", "MARY JANE DSOUZA"), 100);
    }

    #[test]
    fn test_unrelated_names_score_low() {
        let score = token_set_ratio("RAHUL VERMA", "PRIYA PATEL");
        assert!(score < 70, "score was {}", score);
    }

    #[test]
    fn test_empty_sides() {
        assert_eq!(token_set_ratio("", "JOHN SMITH"), 0);
        assert_eq!(token_set_ratio("JOHN SMITH", ""), 0);
        assert_eq!(token_set_ratio("", ""), 0);
        assert_eq!(token_set_ratio("...", "JOHN"), 0);
    }

    #[test]
    fn test_score_bounds() {
        for candidate in ["JOHN", "J", "JOHN SMITH KUMAR SINGH", "XYZ"] {
            let score = token_set_ratio("JOHN SMITH", candidate);
            assert!(score <= 100);
        }
    }
}
