//! Markup stripping for free-text fields.

use once_cell::sync::Lazy;
use regex::Regex;

static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid markup regex"));

/// Strip markup tags and surrounding whitespace.
///
/// Total and idempotent: applying it twice yields the same string. Runs only
/// after validation, so rejection messages always refer to the raw input.
pub fn sanitize(text: &str) -> String {
    MARKUP_TAG.replace_all(text, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_embedded_markup() {
        assert_eq!(sanitize("<b>hi</b>"), "hi");
        assert_eq!(sanitize("<script>alert(1)</script>hello"), "alert(1)hello");
        assert_eq!(sanitize("plain text"), "plain text");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(sanitize("  ann  "), "ann");
        assert_eq!(sanitize(" <i> padded </i> "), "padded");
    }

    #[test]
    fn is_idempotent() {
        for input in ["<b>hi</b>", "  ann ", "a < b > c", "<><><>", ""] {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once);
        }
    }

    #[test]
    fn markup_only_input_becomes_empty() {
        assert_eq!(sanitize("<br/>"), "");
        assert_eq!(sanitize(" <b></b> "), "");
    }
}
