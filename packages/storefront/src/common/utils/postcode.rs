//! UK postcode normalisation and validation.
//!
//! The contact postcode is stored privately and never rendered on the
//! public advert, but it is validated before publish.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Outward code (1-2 letters, digit, optional letter/digit, digit) plus
    // inward code (two letters), matched against the normalised form.
    static ref UK_POSTCODE: Regex = Regex::new(r"^[A-Z]{1,2}\d[A-Z\d]?\d[A-Z]{2}$").unwrap();
}

/// Uppercase and strip all whitespace: `"sw1a 1aa"` becomes `"SW1A1AA"`.
pub fn normalize_postcode(raw: &str) -> String {
    raw.to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Whether the input normalises to a syntactically valid UK postcode.
pub fn looks_like_uk_postcode(raw: &str) -> bool {
    UK_POSTCODE.is_match(&normalize_postcode(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_uppercases_and_strips_whitespace() {
        assert_eq!(normalize_postcode("sw1a 1aa"), "SW1A1AA");
        assert_eq!(normalize_postcode("  m1  1ae "), "M11AE");
    }

    #[test]
    fn test_valid_postcodes_pass() {
        assert!(looks_like_uk_postcode("SW1A 1AA"));
        assert!(looks_like_uk_postcode("sw1a 1aa"));
        assert!(looks_like_uk_postcode("M1 1AE"));
        assert!(looks_like_uk_postcode("B11AA"));
    }

    #[test]
    fn test_invalid_postcodes_fail() {
        assert!(!looks_like_uk_postcode("12345"));
        assert!(!looks_like_uk_postcode(""));
        assert!(!looks_like_uk_postcode("SW1A 1A"));
        assert!(!looks_like_uk_postcode("AAA1 1AA"));
    }
}
