//! Escaping for XML character data and attribute values.
//!
//! Both directions run over the same entity table. Input without anything to
//! replace is returned borrowed, which is the common case for slide text.

use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;
use std::borrow::Cow;

/// The predefined XML entities as (character, reference) pairs.
const ENTITIES: [(&str, &str); 5] = [
    ("&", "&amp;"),
    ("<", "&lt;"),
    (">", "&gt;"),
    ("\"", "&quot;"),
    ("'", "&apos;"),
];

static SPECIAL_CHARS: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::new(ENTITIES.map(|(c, _)| c)).expect("entity characters are valid patterns")
});

// LeftmostLongest so "&amp;lt;" decodes to "&lt;" rather than "<".
static ENTITY_REFS: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(ENTITIES.map(|(_, reference)| reference))
        .expect("entity references are valid patterns")
});

fn replace_entities<'a>(
    automaton: &AhoCorasick,
    s: &'a str,
    replacement: impl Fn(usize) -> &'static str,
) -> Cow<'a, str> {
    if !automaton.is_match(s) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    automaton.replace_all_with(s, &mut out, |m, _, dst| {
        dst.push_str(replacement(m.pattern().as_usize()));
        true
    });
    Cow::Owned(out)
}

/// Escape `&`, `<`, `>`, `"` and `'`.
///
/// # Examples
///
/// ```
/// use nokia_deck::common::xml::escape_xml;
/// assert_eq!(escape_xml("Q&A"), "Q&amp;A");
/// assert_eq!(escape_xml("<tag>\"hi\"</tag>"), "&lt;tag&gt;&quot;hi&quot;&lt;/tag&gt;");
/// ```
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    replace_entities(&SPECIAL_CHARS, s, |index| ENTITIES[index].1)
}

/// Unescape the predefined XML entities.
///
/// Unknown or malformed entities are left unchanged.
///
/// ```
/// use nokia_deck::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("R&amp;D &lt;15B"), "R&D <15B");
/// assert_eq!(unescape_xml("&amp;lt;"), "&lt;");
/// ```
pub fn unescape_xml(s: &str) -> Cow<'_, str> {
    replace_entities(&ENTITY_REFS, s, |index| ENTITIES[index].0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_borrowed() {
        let text = "📉 Decline: -86% over 7 years";
        assert!(matches!(escape_xml(text), Cow::Borrowed(t) if t == text));
        assert!(matches!(unescape_xml(text), Cow::Borrowed(_)));
    }

    #[test]
    fn test_slide_text() {
        assert_eq!(escape_xml("SWOT: Strengths & Weaknesses"), "SWOT: Strengths &amp; Weaknesses");
        assert_eq!(escape_xml("Apple's iPhone"), "Apple&apos;s iPhone");
        assert_eq!(unescape_xml("&invalid; &amp"), "&invalid; &amp");
    }

    #[test]
    fn test_escape_unescape() {
        let raw = "Research & Innovation <\"Bell Labs\">";
        assert_eq!(unescape_xml(&escape_xml(raw)), raw);
    }
}
