//! Character properties consumed by the casing engine.
//!
//! Simple mappings are unconditional one-to-one maps. Special mappings are
//! the conditional and multi-character rules of `SpecialCasing.txt` and
//! `CaseFolding.txt`; they return `None` when no rule applies, in which case
//! the simple mapping is used instead.

use crate::casing::{ForwardContext, LookaheadContext};
use crate::tables::{case_ignorable, soft_dotted, titlecase, upper_expansion};
use smallvec::{smallvec, SmallVec};
use std::{convert::Infallible, fmt, iter, str::FromStr};
use unicode_casefold::{Locale, UnicodeCaseFold, Variant};

/// The output of a special case mapping: zero to three codepoints.
pub type CaseMapping = SmallVec<[char; 3]>;

const COMBINING_DOT_ABOVE: char = '\u{0307}';
const COMBINING_GRAVE: char = '\u{0300}';
const COMBINING_ACUTE: char = '\u{0301}';
const COMBINING_TILDE: char = '\u{0303}';

/// Languages with tailored case mappings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// Language-independent mappings.
    #[default]
    Default,
    /// Turkish (`tr`) and Azeri (`az`).
    Turkic,
    /// Lithuanian (`lt`).
    Lithuanian,
}

impl Language {
    /// Picks the tailoring for a language tag such as `"tr"` or `"lt-LT"`.
    ///
    /// Only the primary subtag is considered, case-insensitively. Unknown
    /// or empty tags select [`Language::Default`].
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("tr") || primary.eq_ignore_ascii_case("az") {
            Language::Turkic
        } else if primary.eq_ignore_ascii_case("lt") {
            Language::Lithuanian
        } else {
            Language::Default
        }
    }
}

impl From<&str> for Language {
    fn from(tag: &str) -> Self {
        Language::from_tag(tag)
    }
}

impl FromStr for Language {
    type Err = Infallible;

    fn from_str(tag: &str) -> Result<Self, Infallible> {
        Ok(Language::from_tag(tag))
    }
}

/// Canonical combining class of a codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CombiningClass {
    /// Class 0: spacing and enclosing marks, and all base characters.
    NotReordered,
    /// Class 1.
    Overlay,
    /// Class 7.
    Nukta,
    /// Class 8.
    KanaVoicing,
    /// Class 9.
    Virama,
    /// Classes 10 through 199, assigned to individual marks.
    FixedPosition(u8),
    /// Class 200.
    AttachedBelowLeft,
    /// Class 202.
    AttachedBelow,
    /// Class 214.
    AttachedAbove,
    /// Class 216.
    AttachedAboveRight,
    /// Class 218.
    BelowLeft,
    /// Class 220.
    Below,
    /// Class 222.
    BelowRight,
    /// Class 224.
    Left,
    /// Class 226.
    Right,
    /// Class 228.
    AboveLeft,
    /// Class 230.
    Above,
    /// Class 232.
    AboveRight,
    /// Class 233.
    DoubleBelow,
    /// Class 234.
    DoubleAbove,
    /// Class 240.
    IotaSubscript,
    /// Any value not assigned by the Unicode Standard.
    Unassigned(u8),
}

impl CombiningClass {
    /// The numeric class value.
    pub const fn value(self) -> u8 {
        match self {
            CombiningClass::NotReordered => 0,
            CombiningClass::Overlay => 1,
            CombiningClass::Nukta => 7,
            CombiningClass::KanaVoicing => 8,
            CombiningClass::Virama => 9,
            CombiningClass::FixedPosition(v) | CombiningClass::Unassigned(v) => v,
            CombiningClass::AttachedBelowLeft => 200,
            CombiningClass::AttachedBelow => 202,
            CombiningClass::AttachedAbove => 214,
            CombiningClass::AttachedAboveRight => 216,
            CombiningClass::BelowLeft => 218,
            CombiningClass::Below => 220,
            CombiningClass::BelowRight => 222,
            CombiningClass::Left => 224,
            CombiningClass::Right => 226,
            CombiningClass::AboveLeft => 228,
            CombiningClass::Above => 230,
            CombiningClass::AboveRight => 232,
            CombiningClass::DoubleBelow => 233,
            CombiningClass::DoubleAbove => 234,
            CombiningClass::IotaSubscript => 240,
        }
    }

    /// Returns whether a codepoint of this class ends the combining sequence
    /// that the casing contexts look at.
    #[inline]
    pub const fn resets_casing_context(self) -> bool {
        matches!(self, CombiningClass::NotReordered | CombiningClass::Above)
    }
}

impl From<u8> for CombiningClass {
    fn from(v: u8) -> Self {
        match v {
            0 => CombiningClass::NotReordered,
            1 => CombiningClass::Overlay,
            7 => CombiningClass::Nukta,
            8 => CombiningClass::KanaVoicing,
            9 => CombiningClass::Virama,
            10..=199 => CombiningClass::FixedPosition(v),
            200 => CombiningClass::AttachedBelowLeft,
            202 => CombiningClass::AttachedBelow,
            214 => CombiningClass::AttachedAbove,
            216 => CombiningClass::AttachedAboveRight,
            218 => CombiningClass::BelowLeft,
            220 => CombiningClass::Below,
            222 => CombiningClass::BelowRight,
            224 => CombiningClass::Left,
            226 => CombiningClass::Right,
            228 => CombiningClass::AboveLeft,
            230 => CombiningClass::Above,
            232 => CombiningClass::AboveRight,
            233 => CombiningClass::DoubleBelow,
            234 => CombiningClass::DoubleAbove,
            240 => CombiningClass::IotaSubscript,
            _ => CombiningClass::Unassigned(v),
        }
    }
}

impl fmt::Display for CombiningClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Returns whether `c` has the White_Space property.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Returns the canonical combining class of `c`.
#[inline]
pub fn canonical_combining_class(c: char) -> CombiningClass {
    CombiningClass::from(unicode_normalization::char::canonical_combining_class(c))
}

/// Returns whether `c` is cased (lowercase, uppercase or titlecase).
#[inline]
pub fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase() || titlecase::is_titlecase(c)
}

/// Returns whether `c` is ignored when looking for cased neighbours.
#[inline]
pub fn is_case_ignorable(c: char) -> bool {
    case_ignorable::is_case_ignorable(c)
}

/// Returns whether `c` loses its dot when an accent is placed above it.
#[inline]
pub fn is_soft_dotted(c: char) -> bool {
    soft_dotted::is_soft_dotted(c)
}

/// Simple (one-to-one) lowercase mapping of `c`.
pub fn simple_lower(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        // U+0130 is the only character whose full lowercase expands.
        _ if c == '\u{0130}' => 'i',
        _ => c,
    }
}

/// Simple (one-to-one) uppercase mapping of `c`.
pub fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => upper_expansion::simple_mapping(c).unwrap_or(c),
    }
}

/// Simple (one-to-one) case folding of `c`.
pub fn simple_fold(c: char) -> char {
    iter::once(c)
        .case_fold_with(Variant::Simple, Locale::NonTurkic)
        .next()
        .unwrap_or(c)
}

fn full_mapping<I: ExactSizeIterator<Item = char>>(mapped: I) -> Option<CaseMapping> {
    if mapped.len() > 1 {
        Some(mapped.collect())
    } else {
        None
    }
}

/// Conditional or multi-character lowercase mapping of `c`.
pub fn special_lower(
    c: char,
    lang: Language,
    fwd: &ForwardContext,
    ahead: &LookaheadContext,
) -> Option<CaseMapping> {
    match (lang, c) {
        (_, '\u{03A3}') if fwd.preceded_by_cased && !ahead.followed_by_cased => {
            Some(smallvec!['\u{03C2}'])
        }
        (Language::Lithuanian, 'I') if ahead.more_above => {
            Some(smallvec!['i', COMBINING_DOT_ABOVE])
        }
        (Language::Lithuanian, 'J') if ahead.more_above => {
            Some(smallvec!['j', COMBINING_DOT_ABOVE])
        }
        (Language::Lithuanian, '\u{012E}') if ahead.more_above => {
            Some(smallvec!['\u{012F}', COMBINING_DOT_ABOVE])
        }
        (Language::Lithuanian, '\u{00CC}') => {
            Some(smallvec!['i', COMBINING_DOT_ABOVE, COMBINING_GRAVE])
        }
        (Language::Lithuanian, '\u{00CD}') => {
            Some(smallvec!['i', COMBINING_DOT_ABOVE, COMBINING_ACUTE])
        }
        (Language::Lithuanian, '\u{0128}') => {
            Some(smallvec!['i', COMBINING_DOT_ABOVE, COMBINING_TILDE])
        }
        (Language::Turkic, '\u{0130}') => Some(smallvec!['i']),
        (Language::Turkic, COMBINING_DOT_ABOVE) if fwd.after_i => Some(SmallVec::new()),
        (Language::Turkic, 'I') if !ahead.before_dot => Some(smallvec!['\u{0131}']),
        _ => full_mapping(c.to_lowercase()),
    }
}

/// Conditional or multi-character uppercase mapping of `c`.
pub fn special_upper(
    c: char,
    lang: Language,
    fwd: &ForwardContext,
    _ahead: &LookaheadContext,
) -> Option<CaseMapping> {
    match (lang, c) {
        (Language::Turkic, 'i') => Some(smallvec!['\u{0130}']),
        (Language::Lithuanian, COMBINING_DOT_ABOVE) if fwd.after_soft_dotted => {
            Some(SmallVec::new())
        }
        _ => full_mapping(c.to_uppercase()),
    }
}

/// Full case folding of `c` where it differs from [`simple_fold`].
pub fn special_fold(c: char, lang: Language) -> Option<CaseMapping> {
    let locale = match lang {
        Language::Turkic => Locale::Turkic,
        Language::Default | Language::Lithuanian => Locale::NonTurkic,
    };
    let folded = iter::once(c)
        .case_fold_with(Variant::Full, locale)
        .collect::<CaseMapping>();
    if folded.len() == 1 && folded[0] == simple_fold(c) {
        None
    } else {
        Some(folded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_whitespace() {
        for c in [' ', '\t', '\n', '\r', '\x0C', '\x0B'] {
            assert!(is_whitespace(c));
        }
        for cp in [
            0x00A0, 0x1680, 0x2000, 0x2001, 0x2002, 0x2003, 0x2004, 0x2005, 0x2006, 0x2007,
            0x2008, 0x2009, 0x200A, 0x202F, 0x205F, 0x3000, 0x2028, 0x2029, 0x0085,
        ] {
            assert!(is_whitespace(char::from_u32(cp).unwrap()), "{:#X}", cp);
        }
        for c in ['A', '0', '\0', '\u{167F}', '\u{1681}', '\u{200B}'] {
            assert!(!is_whitespace(c), "{:?}", c);
        }
    }

    #[test]
    fn test_combining_class() {
        assert_eq!(CombiningClass::NotReordered, canonical_combining_class('a'));
        assert_eq!(CombiningClass::Above, canonical_combining_class('\u{0307}'));
        assert_eq!(CombiningClass::Above, canonical_combining_class('\u{0300}'));
        assert_eq!(CombiningClass::Below, canonical_combining_class('\u{0323}'));
        assert_eq!(CombiningClass::IotaSubscript, canonical_combining_class('\u{0345}'));
        assert!(CombiningClass::Above.resets_casing_context());
        assert!(CombiningClass::NotReordered.resets_casing_context());
        assert!(!CombiningClass::Below.resets_casing_context());
        for v in 0..=u8::MAX {
            assert_eq!(v, CombiningClass::from(v).value());
        }
    }

    #[test]
    fn test_case_predicates() {
        assert!(is_cased('A') && is_cased('a') && is_cased('\u{01C5}'));
        assert!(!is_cased('1') && !is_cased('\''));
        assert!(is_case_ignorable('\'') && is_case_ignorable('.'));
        assert!(is_case_ignorable('\u{0307}'));
        assert!(!is_case_ignorable('a'));
        assert!(is_soft_dotted('i') && is_soft_dotted('\u{0456}'));
        assert!(!is_soft_dotted('l'));
    }

    #[rstest]
    #[case('A', 'a')]
    #[case('Z', 'z')]
    #[case('a', 'a')]
    #[case('1', '1')]
    #[case('\u{03A9}', '\u{03C9}')]
    #[case('\u{0130}', 'i')]
    #[case('\u{1E9E}', '\u{00DF}')]
    fn test_simple_lower(#[case] c: char, #[case] expected: char) {
        assert_eq!(expected, simple_lower(c));
    }

    #[rstest]
    #[case('a', 'A')]
    #[case('z', 'Z')]
    #[case('1', '1')]
    #[case('\u{03C9}', '\u{03A9}')]
    #[case('\u{00DF}', '\u{00DF}')]
    #[case('\u{1F80}', '\u{1F88}')]
    #[case('\u{1FB3}', '\u{1FBC}')]
    #[case('\u{FB01}', '\u{FB01}')]
    fn test_simple_upper(#[case] c: char, #[case] expected: char) {
        assert_eq!(expected, simple_upper(c));
    }

    #[rstest]
    #[case('A', 'a')]
    #[case('a', 'a')]
    #[case('\u{00B5}', '\u{03BC}')]
    #[case('\u{03A3}', '\u{03C3}')]
    #[case('\u{03C2}', '\u{03C3}')]
    fn test_simple_fold(#[case] c: char, #[case] expected: char) {
        assert_eq!(expected, simple_fold(c));
    }

    #[test]
    fn test_special_fold() {
        assert_eq!(Some(smallvec!['s', 's']), special_fold('\u{00DF}', Language::Default));
        assert_eq!(Some(smallvec!['s', 's']), special_fold('\u{1E9E}', Language::Default));
        assert_eq!(Some(smallvec!['f', 'i']), special_fold('\u{FB01}', Language::Default));
        assert_eq!(Some(smallvec!['\u{0131}']), special_fold('I', Language::Turkic));
        assert_eq!(Some(smallvec!['i']), special_fold('\u{0130}', Language::Turkic));
        assert_eq!(None, special_fold('A', Language::Default));
        assert_eq!(None, special_fold('I', Language::Lithuanian));
    }

    #[test]
    fn test_language_tags() {
        assert_eq!(Language::Turkic, Language::from_tag("tr"));
        assert_eq!(Language::Turkic, Language::from_tag("AZ"));
        assert_eq!(Language::Turkic, Language::from_tag("tr-TR"));
        assert_eq!(Language::Lithuanian, Language::from_tag("lt_LT"));
        assert_eq!(Language::Default, Language::from_tag(""));
        assert_eq!(Language::Default, Language::from_tag("en"));
        assert_eq!(Language::Default, Language::from_tag("trk"));
        assert_eq!(Ok(Language::Lithuanian), "lt".parse::<Language>());
    }

    #[test]
    fn test_unconditional_specials() {
        let fwd = ForwardContext::default();
        let ahead = LookaheadContext::default();
        assert_eq!(
            Some(smallvec!['S', 'S']),
            special_upper('\u{00DF}', Language::Default, &fwd, &ahead)
        );
        assert_eq!(
            Some(smallvec!['i', '\u{0307}']),
            special_lower('\u{0130}', Language::Default, &fwd, &ahead)
        );
        assert_eq!(None, special_lower('A', Language::Default, &fwd, &ahead));
        assert_eq!(None, special_upper('a', Language::Lithuanian, &fwd, &ahead));
    }
}
