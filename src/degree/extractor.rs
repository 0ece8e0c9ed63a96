use std::sync::LazyLock;

use regex::Regex;

const SEPARATOR: &str = " - ";

static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((.*?)\)").expect("static regex"));

/// Extract the abbreviation a descriptor carries, if any.
///
/// - `"Doctor of Philosophy - PHD"` → `"PHD"` (text after the rightmost `" - "`, trimmed)
/// - `"Master of Business Administration (MBA)"` → `"MBA"` (first parenthesized group)
///
/// The separator form is checked first and wins when both are present. A blank
/// marker (`"()"`, `"( )"`, a trailing `" - "`) yields `None`.
pub fn extract_abbreviation(descriptor: &str) -> Option<&str> {
    let found = match descriptor.rfind(SEPARATOR) {
        Some(idx) => Some(descriptor[idx + SEPARATOR.len()..].trim()),
        None => PARENTHESIZED
            .captures(descriptor)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str()),
    };
    found.filter(|abbr| !abbr.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator() {
        assert_eq!(extract_abbreviation("Ph.D. - PHD"), Some("PHD"));
        assert_eq!(extract_abbreviation("Juris Doctor - J.D. "), Some("J.D."));
    }

    #[test]
    fn test_rightmost_separator() {
        assert_eq!(
            extract_abbreviation("Science - Engineering - M.Eng"),
            Some("M.Eng")
        );
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(
            extract_abbreviation("Master of Business Administration (MBA)"),
            Some("MBA")
        );
        assert_eq!(extract_abbreviation("Doctor (DO) (MD)"), Some("DO"));
    }

    #[test]
    fn test_separator_beats_parentheses() {
        assert_eq!(extract_abbreviation("Law (LLB) - JD"), Some("JD"));
    }

    #[test]
    fn test_no_marker() {
        assert_eq!(extract_abbreviation("some college"), None);
        assert_eq!(extract_abbreviation("high-school"), None);
        assert_eq!(extract_abbreviation("Bachelor ()"), None);
        assert_eq!(extract_abbreviation("Bachelor - "), None);
        assert_eq!(extract_abbreviation("Bachelor ( )"), None);
        assert_eq!(extract_abbreviation("Bachelor (\t)"), None);
    }
}
