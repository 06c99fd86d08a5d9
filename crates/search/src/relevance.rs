//! Tiered relevance scoring for text fields.

use crate::fuzzy::{FuzzyParams, subsequence_ratio};

/// Fixed scores for the structural match tiers.
///
/// Structural tiers always outrank the fuzzy tier, which is capped at 50
/// by the ratio halving in [`score_text_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    /// No match
    None = 0,
    /// A whitespace-delimited word contains the query
    WordContains = 60,
    /// Text contains the query
    Contains = 70,
    /// A whitespace-delimited word starts with the query
    WordStartsWith = 80,
    /// Text starts with the query
    Prefix = 90,
    /// Case-insensitive equality
    Exact = 100,
}

/// Score `text` against `query` with the default fuzzy tuning.
///
/// Returns a relevance score in `[0, 100]`; `0` means no match.
pub fn score_text(text: &str, query: &str) -> u32 {
    score_text_with(text, query, &FuzzyParams::default())
}

/// Score `text` against `query` with explicit fuzzy tuning.
///
/// Tiers are evaluated in a fixed order and the first satisfied tier
/// wins: equality, prefix, substring, word boundaries, then the fuzzy
/// subsequence tier for queries of at least `fuzzy.min_query_chars`
/// characters. The whole-text substring check runs before the word
/// checks; the ordering is part of the ranking contract and must not be
/// rearranged.
pub fn score_text_with(text: &str, query: &str, fuzzy: &FuzzyParams) -> u32 {
    if text.is_empty() || query.is_empty() {
        return MatchTier::None as u32;
    }

    let text_lower = text.to_lowercase();
    let query_lower = query.to_lowercase();

    if text_lower == query_lower {
        return MatchTier::Exact as u32;
    }

    if text_lower.starts_with(&query_lower) {
        return MatchTier::Prefix as u32;
    }

    if text_lower.contains(&query_lower) {
        return MatchTier::Contains as u32;
    }

    for word in text_lower.split_whitespace() {
        if word.starts_with(&query_lower) {
            return MatchTier::WordStartsWith as u32;
        }
    }
    for word in text_lower.split_whitespace() {
        if word.contains(&query_lower) {
            return MatchTier::WordContains as u32;
        }
    }

    if query_lower.chars().count() >= fuzzy.min_query_chars {
        let ratio = subsequence_ratio(&text_lower, &query_lower);
        if ratio > fuzzy.min_ratio {
            return (ratio / fuzzy.score_divisor as f32).floor() as u32;
        }
    }

    MatchTier::None as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_never_matches() {
        assert_eq!(score_text("", "beirut"), 0);
        assert_eq!(score_text("Beirut", ""), 0);
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(score_text("Beirut", "beirut"), MatchTier::Exact as u32);
    }

    #[test]
    fn test_prefix_match() {
        assert_eq!(score_text("Beirut Port", "beirut"), MatchTier::Prefix as u32);
    }

    #[test]
    fn test_contains_match() {
        assert_eq!(score_text("GreaterBeirutArea", "beirut"), MatchTier::Contains as u32);
    }

    #[test]
    fn test_contains_wins_over_word_start() {
        // "hamra" starts a word, but the whole-text substring tier fires first
        assert_eq!(score_text("Rue Hamra", "hamra"), MatchTier::Contains as u32);
    }

    #[test]
    fn test_fuzzy_match_scores_at_most_50() {
        // Not a substring; all four characters appear in order
        let score = score_text("beirut", "biru");
        assert_eq!(score, 50);
    }

    #[test]
    fn test_fuzzy_partial_above_threshold() {
        // 3 of 4 characters found: ratio 75 -> floor(75 / 2)
        assert_eq!(score_text("beirut", "berx"), 37);
    }

    #[test]
    fn test_fuzzy_below_threshold() {
        assert_eq!(score_text("beirut", "wxyz"), 0);
    }

    #[test]
    fn test_short_query_skips_fuzzy() {
        // "bru" is a length-3 subsequence of "beirut" but below the minimum
        assert_eq!(score_text("beirut", "bru"), 0);
    }

    #[test]
    fn test_structural_tiers_outrank_fuzzy() {
        let exact = score_text("tripoli", "tripoli");
        let prefix = score_text("tripoli north", "tripoli");
        let contains = score_text("near tripoli", "tripoli");
        let fuzzy = score_text("tripoli", "tipl");
        assert!(exact > prefix);
        assert!(prefix > contains);
        assert!(contains > fuzzy);
        assert!(fuzzy <= 50);
    }

    #[test]
    fn test_custom_fuzzy_params() {
        let strict = FuzzyParams {
            min_query_chars: 4,
            min_ratio: 99.0,
            score_divisor: 2,
        };
        // Ratio 75 passes the default threshold but not the strict one
        assert_eq!(score_text_with("beirut", "berx", &strict), 0);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn equality_always_scores_100(s in "[a-zA-Z0-9 ]{1,24}") {
                prop_assume!(!s.trim().is_empty());
                prop_assert_eq!(score_text(&s, &s), 100);
            }

            #[test]
            fn score_never_exceeds_100(t in ".{0,32}", q in ".{0,16}") {
                prop_assert!(score_text(&t, &q) <= 100);
            }

            #[test]
            fn fuzzy_scores_stay_below_structural(t in "[a-z]{1,24}", q in "[a-z]{4,8}") {
                let score = score_text(&t, &q);
                // Any non-structural score comes from the fuzzy tier
                if score > 0 && score < 60 {
                    prop_assert!(score <= 50);
                    prop_assert!(score > 35);
                }
            }
        }
    }
}
