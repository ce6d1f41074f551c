//! Text cleanup applied to a winning container's visible text.

use crate::constants::{BOILERPLATE_PATTERNS, REGEXPS};

/// Normalize whitespace: 3+ newlines become two, tabs become spaces, space
/// runs collapse to one, and the ends are trimmed.
pub fn normalize_whitespace(text: &str) -> String {
    let text = REGEXPS.excess_newlines.replace_all(text, "\n\n");
    let text = REGEXPS.tab.replace_all(&text, " ");
    let text = REGEXPS.space_run.replace_all(&text, " ");
    text.trim().to_string()
}

/// Remove every boilerplate pattern, in table order.
pub fn strip_boilerplate(text: &str) -> String {
    BOILERPLATE_PATTERNS
        .iter()
        .fold(text.to_string(), |acc, (pattern, replacement)| {
            pattern.replace_all(&acc, *replacement).into_owned()
        })
}

/// Full cleanup pass. Returns `None` when nothing survives.
pub fn clean_text(text: &str, strip: bool) -> Option<String> {
    let normalized = normalize_whitespace(text);
    let cleaned = if strip {
        strip_boilerplate(&normalized)
    } else {
        normalized
    };
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_newlines_collapse_to_two() {
        assert_eq!(normalize_whitespace("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(normalize_whitespace("a\n \n\t\n  \nb"), "a\n\nb");
        assert_eq!(normalize_whitespace("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_tabs_and_space_runs() {
        assert_eq!(normalize_whitespace("  a\tb    c  "), "a b c");
        assert_eq!(normalize_whitespace("a\t\tb"), "a b");
    }

    #[test]
    fn test_subscribe_newsletter_removed() {
        let text = "Breaking news today. Subscribe to our newsletter now. More body text.";
        let cleaned = strip_boilerplate(text);
        assert!(!cleaned.contains("Subscribe"));
        assert!(cleaned.contains("Breaking news today."));
        assert!(cleaned.contains("More body text."));
    }

    #[test]
    fn test_subscribe_is_non_greedy() {
        let cleaned = strip_boilerplate("Subscribe to the newsletter. Keep this newsletter line.");
        assert_eq!(cleaned, ". Keep this newsletter line.");
    }

    #[test]
    fn test_boilerplate_is_case_insensitive() {
        let text = "ADVERTISEMENT Body. sign up here. follow us on SHARE THIS ARTICLE \
                    read more: related Articles: related article: end";
        let cleaned = strip_boilerplate(text);
        let lower = cleaned.to_lowercase();
        for phrase in [
            "advertisement",
            "sign up here",
            "follow us on",
            "share this article",
            "read more:",
            "related article",
        ] {
            assert!(!lower.contains(phrase), "{phrase:?} survived in {cleaned:?}");
        }
        assert!(cleaned.contains("Body."));
        assert!(cleaned.contains("end"));
    }

    #[test]
    fn test_copyright_line_removed_to_end_of_line() {
        let cleaned = strip_boilerplate("Body text.\n© 2024 Example News Group. All rights reserved.\nTail.");
        assert_eq!(cleaned, "Body text.\n\nTail.");
    }

    #[test]
    fn test_clean_text_empty_after_removal() {
        assert_eq!(clean_text("  Advertisement \n\n\n\t ", true), None);
        assert_eq!(
            clean_text("  Advertisement ", false),
            Some("Advertisement".to_string())
        );
    }
}
