//! Phone number canonicalization and matching.
//!
//! Lebanese numbers circulate in three shapes for the same subscriber:
//! with the international code (`96171123456`), with the domestic trunk
//! zero (`071123456`), and bare (`71123456`). Matching must treat all
//! three as the same number regardless of spacing or punctuation.

/// Lebanon's international dialing code.
pub const COUNTRY_CODE: &str = "961";

/// Domestic trunk prefix.
pub const TRUNK_PREFIX: &str = "0";

/// Strip everything but ASCII digits.
///
/// # Example
/// ```
/// use wasel_search::phone;
///
/// assert_eq!(phone::normalize("03 71-123 456"), "0371123456");
/// ```
pub fn normalize(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// All representations under which a number may be stored or typed.
///
/// The normalized form, plus the alternatives reachable by adding or
/// removing the `961` country code and the trunk `0`. Empty input yields
/// no variations.
pub fn variations(phone: &str) -> Vec<String> {
    let digits = normalize(phone);
    if digits.is_empty() {
        return Vec::new();
    }

    let mut out = vec![digits.clone()];
    if let Some(rest) = digits.strip_prefix(COUNTRY_CODE) {
        if !rest.is_empty() {
            out.push(rest.to_string());
            out.push(format!("{TRUNK_PREFIX}{rest}"));
        }
    } else if let Some(rest) = digits.strip_prefix(TRUNK_PREFIX) {
        if !rest.is_empty() {
            out.push(rest.to_string());
            out.push(format!("{COUNTRY_CODE}{rest}"));
        }
    } else {
        out.push(format!("{COUNTRY_CODE}{digits}"));
        out.push(format!("{TRUNK_PREFIX}{digits}"));
    }
    out
}

/// True when any variation of one side is a substring of any variation
/// of the other.
///
/// Matching is permissive so that a partially typed number still hits
/// the stored record; minimum-length gating belongs to the query
/// classifier, not here. Empty input never matches.
pub fn matches(a: &str, b: &str) -> bool {
    let variations_a = variations(a);
    let variations_b = variations(b);
    if variations_a.is_empty() || variations_b.is_empty() {
        return false;
    }

    variations_a.iter().any(|va| {
        variations_b
            .iter()
            .any(|vb| va.contains(vb.as_str()) || vb.contains(va.as_str()))
    })
}
