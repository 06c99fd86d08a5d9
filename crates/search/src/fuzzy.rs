//! Fuzzy subsequence matching.

/// Tuning for the fuzzy subsequence tier.
///
/// The constants are empirical and preserved as-is from the production
/// ranking behavior; change them only together with the dropdown's
/// expected ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyParams {
    /// Queries shorter than this many characters skip the fuzzy tier
    pub min_query_chars: usize,
    /// Minimum found-character ratio (0-100, exclusive) for a fuzzy hit
    pub min_ratio: f32,
    /// The ratio is divided by this to produce the final score
    pub score_divisor: u32,
}

impl Default for FuzzyParams {
    fn default() -> Self {
        Self {
            min_query_chars: 4,
            min_ratio: 70.0,
            score_divisor: 2,
        }
    }
}

/// Percentage of `query` characters found in `text`, in order, at
/// strictly increasing positions.
///
/// Each query character is searched from just past the previous hit;
/// characters that never appear are skipped without resetting the
/// position. Returns a value in `[0.0, 100.0]`.
///
/// # Example
/// ```
/// use wasel_search::subsequence_ratio;
///
/// assert_eq!(subsequence_ratio("beirut", "biru"), 100.0);
/// assert_eq!(subsequence_ratio("beirut", "berx"), 75.0);
/// ```
pub fn subsequence_ratio(text: &str, query: &str) -> f32 {
    let query_chars: Vec<char> = query.chars().collect();
    if query_chars.is_empty() {
        return 0.0;
    }

    let text_chars: Vec<char> = text.chars().collect();
    let mut pos = 0usize;
    let mut found = 0usize;

    for &query_char in &query_chars {
        if let Some(offset) = text_chars[pos..].iter().position(|&c| c == query_char) {
            found += 1;
            pos += offset + 1;
        }
    }

    found as f32 / query_chars.len() as f32 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_chars_found() {
        assert_eq!(subsequence_ratio("hello world", "hwo"), 100.0);
    }

    #[test]
    fn test_partial_match() {
        // b, e, r found; x is not
        assert_eq!(subsequence_ratio("beirut", "berx"), 75.0);
    }

    #[test]
    fn test_order_matters() {
        // l, h, e: h cannot be found after the first l
        assert!(subsequence_ratio("hello", "lhe") < 100.0);
    }

    #[test]
    fn test_positions_strictly_increase() {
        // The single 'l' in "hold" cannot match twice
        assert_eq!(subsequence_ratio("hold", "ll"), 50.0);
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(subsequence_ratio("hello", ""), 0.0);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(subsequence_ratio("", "abc"), 0.0);
    }

    #[test]
    fn test_default_params() {
        let params = FuzzyParams::default();
        assert_eq!(params.min_query_chars, 4);
        assert_eq!(params.min_ratio, 70.0);
        assert_eq!(params.score_divisor, 2);
    }
}
