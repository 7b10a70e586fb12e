use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Built once on first use
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("static escape patterns are valid")
});

/// Escape the five XML special characters for use in text and attribute values.
///
/// # Examples
///
/// ```
/// use insight_deck::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<b>\"x\"</b>"), "&lt;b&gt;&quot;x&quot;&lt;/b&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(escape_xml("More samples → better ✅"), "More samples → better ✅");
    }

    #[test]
    fn test_ampersand_escaped_once() {
        assert_eq!(escape_xml("&lt;"), "&amp;lt;");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_escape_round_trips(s in "\\PC{0,64}") {
            let escaped = escape_xml(&s);
            let parsed = quick_xml::escape::unescape(&escaped).unwrap();
            prop_assert_eq!(parsed.as_ref(), s.as_str());
        }

        #[test]
        fn prop_escaped_has_no_markup(s in "\\PC{0,64}") {
            let escaped = escape_xml(&s);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
            prop_assert!(!escaped.contains('"'));
        }
    }
}
