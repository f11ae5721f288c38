use crate::{
    casing::{self, CaseMode},
    codec::{self, CodeUnit},
    codepoints::{CodepointIndices, Codepoints},
    error::{self, Result},
    props::{self, Language},
    unicode_string::UnicodeString,
};
use smallvec::{smallvec, SmallVec};
use std::{
    borrow, cmp, fmt, hash,
    fmt::Write as _,
    iter::FusedIterator,
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

/// A borrowed Unicode string slice stored as code units of type `U`.
///
/// This is the unsized counterpart of [`UnicodeString`], usually seen as
/// `&UnicodeStr<U>`. Any sequence of code units is accepted; malformed
/// units read as U+FFFD.
#[repr(transparent)]
pub struct UnicodeStr<U>([U]);

impl<U: CodeUnit> UnicodeStr<U> {
    /// Views a slice of code units as a string slice.
    #[inline]
    pub fn from_units(units: &[U]) -> &Self {
        // SAFETY: `UnicodeStr<U>` is a transparent wrapper around `[U]`.
        unsafe { &*(units as *const [U] as *const Self) }
    }

    /// Views a mutable slice of code units as a string slice.
    #[inline]
    pub fn from_units_mut(units: &mut [U]) -> &mut Self {
        // SAFETY: `UnicodeStr<U>` is a transparent wrapper around `[U]`.
        unsafe { &mut *(units as *mut [U] as *mut Self) }
    }

    /// The underlying code units.
    #[inline]
    pub const fn as_units(&self) -> &[U] {
        &self.0
    }

    /// The underlying code units, mutably.
    #[inline]
    pub fn as_units_mut(&mut self) -> &mut [U] {
        &mut self.0
    }

    /// Length in code units.
    #[inline]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the string holds no code units.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the codepoints of the string.
    #[inline]
    pub fn codepoints(&self) -> Codepoints<'_, U> {
        Codepoints::new(&self.0)
    }

    /// Returns an iterator over the codepoints of the string and their
    /// positions, in code units.
    #[inline]
    pub fn char_indices(&self) -> CodepointIndices<'_, U> {
        CodepointIndices::new(&self.0)
    }

    /// Returns whether the code units are well-formed for their width.
    pub fn is_valid(&self) -> bool {
        self.char_indices()
            .all(|(offset, ch, len)| *codec::encode_char::<U>(ch) == self.0[offset..offset + len])
    }

    // Bounds of the non-whitespace span, trimming only the requested sides.
    fn trim_bounds(&self, start: bool, end: bool) -> (usize, usize) {
        let mut first = None;
        let mut last = 0;
        for (offset, ch, len) in self.char_indices() {
            if props::is_whitespace(ch) {
                continue;
            }
            if first.is_none() {
                if !end {
                    return (offset, self.len());
                }
                first = Some(offset);
            }
            last = offset + len;
        }
        match first {
            Some(first) if start => (first, last),
            Some(_) => (0, last),
            None if !end => (self.len(), self.len()),
            None => (0, 0),
        }
    }

    pub(crate) fn trim_start_offset(&self) -> usize {
        self.trim_bounds(true, false).0
    }

    pub(crate) fn trim_end_offset(&self) -> usize {
        self.trim_bounds(false, true).1
    }

    /// Returns the string with leading and trailing whitespace removed.
    pub fn trim(&self) -> &Self {
        let (start, end) = self.trim_bounds(true, true);
        &self[start..end]
    }

    /// Returns the string with leading whitespace removed.
    pub fn trim_start(&self) -> &Self {
        &self[self.trim_start_offset()..]
    }

    /// Returns the string with trailing whitespace removed.
    pub fn trim_end(&self) -> &Self {
        &self[..self.trim_end_offset()]
    }

    /// Returns whether `pat` occurs in the string as a code-unit subsequence.
    pub fn contains<P: AsRef<[U]> + ?Sized>(&self, pat: &P) -> bool {
        find(&self.0, pat.as_ref()).is_some()
    }

    /// Returns whether the string begins with the code units of `pat`.
    pub fn starts_with<P: AsRef<[U]> + ?Sized>(&self, pat: &P) -> bool {
        self.0.starts_with(pat.as_ref())
    }

    /// Returns whether the string ends with the code units of `pat`.
    pub fn ends_with<P: AsRef<[U]> + ?Sized>(&self, pat: &P) -> bool {
        self.0.ends_with(pat.as_ref())
    }

    /// Splits the string on every non-overlapping occurrence of `delimiter`.
    ///
    /// Adjacent delimiters produce empty elements, so `k` occurrences always
    /// give `k + 1` elements. An empty delimiter splits between codepoints.
    pub fn split<P: AsRef<[U]> + ?Sized>(&self, delimiter: &P) -> Split<'_, U> {
        Split {
            rest: Some(&self.0),
            delimiter: SmallVec::from_slice(delimiter.as_ref()),
        }
    }

    /// Splits the string on every occurrence of a single code unit.
    pub fn split_unit(&self, unit: U) -> Split<'_, U> {
        Split {
            rest: Some(&self.0),
            delimiter: smallvec![unit],
        }
    }

    /// Returns the full lowercase mapping of the string.
    pub fn to_lower(&self, lang: impl Into<Language>) -> Result<UnicodeString<U>> {
        self.convert_case(CaseMode::Lower, lang.into())
    }

    /// Returns the full uppercase mapping of the string.
    pub fn to_upper(&self, lang: impl Into<Language>) -> Result<UnicodeString<U>> {
        self.convert_case(CaseMode::Upper, lang.into())
    }

    /// Returns the full case folding of the string.
    pub fn fold(&self, lang: impl Into<Language>) -> Result<UnicodeString<U>> {
        self.convert_case(CaseMode::Fold, lang.into())
    }

    fn convert_case(&self, mode: CaseMode, lang: Language) -> Result<UnicodeString<U>> {
        let mut input = Vec::new();
        error::reserve(&mut input, self.len())?;
        input.extend(self.codepoints());

        let mut output = UnicodeString::new();
        output.reserve(self.len())?;
        let mut status = Ok(());
        casing::convert(&input, mode, lang, |ch| {
            if status.is_ok() {
                status = output.push(ch);
            }
        });
        status?;

        tracing::trace!(
            target: "unistr",
            ?mode,
            ?lang,
            input_len = self.len(),
            output_len = output.len(),
            "converted case"
        );
        Ok(output)
    }

    /// Re-encodes the string at another width.
    pub fn transcode<V: CodeUnit>(&self) -> Result<UnicodeString<V>> {
        UnicodeString::transcode_from(self)
    }
}

fn find<U: PartialEq>(haystack: &[U], needle: &[U]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

impl<U: CodeUnit> PartialEq for UnicodeStr<U> {
    #[inline]
    fn eq(&self, other: &UnicodeStr<U>) -> bool {
        self.0 == other.0
    }
}

impl<U: CodeUnit> Eq for UnicodeStr<U> {}

impl<U: CodeUnit> PartialOrd for UnicodeStr<U> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<U: CodeUnit> Ord for UnicodeStr<U> {
    #[inline]
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl<U: CodeUnit> PartialEq<str> for UnicodeStr<U> {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.codepoints().eq(other.chars())
    }
}

impl<U: CodeUnit> PartialEq<UnicodeStr<U>> for str {
    #[inline]
    fn eq(&self, other: &UnicodeStr<U>) -> bool {
        *other == *self
    }
}

impl<U: CodeUnit> hash::Hash for UnicodeStr<U> {
    #[inline]
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        U::hash_slice(&self.0, state);
        state.write_u8(0xff)
    }
}

impl<U: CodeUnit> fmt::Display for UnicodeStr<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.codepoints() {
            f.write_char(ch)?;
        }
        Ok(())
    }
}

impl<U: CodeUnit> fmt::Debug for UnicodeStr<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"")?;
        for ch in self.codepoints() {
            write!(f, "{}", ch.escape_debug())?;
        }
        write!(f, "\"")
    }
}

impl<U: CodeUnit, I> Index<I> for UnicodeStr<U>
where
    I: SliceIndex<[U], Output = [U]>,
{
    type Output = UnicodeStr<U>;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        UnicodeStr::from_units(&self.0[index])
    }
}

impl<U: CodeUnit, I> IndexMut<I> for UnicodeStr<U>
where
    I: SliceIndex<[U], Output = [U]>,
{
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        UnicodeStr::from_units_mut(&mut self.0[index])
    }
}

impl<U: CodeUnit> AsRef<[U]> for UnicodeStr<U> {
    #[inline]
    fn as_ref(&self) -> &[U] {
        &self.0
    }
}

impl<U: CodeUnit> AsRef<UnicodeStr<U>> for UnicodeStr<U> {
    #[inline]
    fn as_ref(&self) -> &UnicodeStr<U> {
        self
    }
}

impl<U: CodeUnit> Default for &UnicodeStr<U> {
    #[inline]
    fn default() -> Self {
        UnicodeStr::from_units(&[])
    }
}

impl<U: CodeUnit> borrow::ToOwned for UnicodeStr<U> {
    type Owned = UnicodeString<U>;

    #[inline]
    fn to_owned(&self) -> UnicodeString<U> {
        UnicodeString::from_vec(self.0.to_vec())
    }
}

/// An iterator over the pieces of a string separated by a delimiter.
///
/// Created by [`UnicodeStr::split`] and [`UnicodeStr::split_unit`].
#[derive(Clone)]
pub struct Split<'str, U> {
    rest: Option<&'str [U]>,
    delimiter: SmallVec<[U; 4]>,
}

impl<'str, U: CodeUnit> Iterator for Split<'str, U> {
    type Item = &'str UnicodeStr<U>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        if self.delimiter.is_empty() {
            let len = codec::decode(rest).map_or(0, |(_, len)| len);
            let (head, tail) = rest.split_at(len);
            self.rest = if tail.is_empty() { None } else { Some(tail) };
            return Some(UnicodeStr::from_units(head));
        }
        match find(rest, &self.delimiter) {
            Some(pos) => {
                self.rest = Some(&rest[pos + self.delimiter.len()..]);
                Some(UnicodeStr::from_units(&rest[..pos]))
            }
            None => {
                self.rest = None;
                Some(UnicodeStr::from_units(rest))
            }
        }
    }
}

impl<U: CodeUnit> FusedIterator for Split<'_, U> {}

impl<U: CodeUnit> fmt::Debug for Split<'_, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Split(")?;
        f.debug_list().entries(self.clone()).finish()?;
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::UnicodeStr;
    use crate::props::Language;
    use rstest::rstest;

    fn utf8(s: &str) -> &UnicodeStr<u8> {
        UnicodeStr::from_units(s.as_bytes())
    }

    fn utf16(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[rstest]
    #[case("  hello \t\n", "hello")]
    #[case("hello", "hello")]
    #[case("", "")]
    #[case(" \u{3000}\u{A0} ", "")]
    #[case("\u{2003}a b\u{2029}", "a b")]
    fn test_trim(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(*expected, *utf8(input).trim());
        let units = utf16(input);
        assert_eq!(*expected, *UnicodeStr::from_units(&units[..]).trim());
    }

    #[test]
    fn test_trim_one_side() {
        let s = utf8("  a  ");
        assert_eq!(*"a  ", *s.trim_start());
        assert_eq!(*"  a", *s.trim_end());
        let blank = utf8("   ");
        assert!(blank.trim_start().is_empty());
        assert!(blank.trim_end().is_empty());
    }

    #[test]
    fn test_predicates() {
        let s = utf8("hello world");
        assert!(s.contains("lo w"));
        assert!(s.contains(""));
        assert!(!s.contains("worlds"));
        assert!(s.starts_with("hello"));
        assert!(!s.starts_with("world"));
        assert!(s.ends_with("world"));
        assert!(s.ends_with(""));

        let units = utf16("\u{10348}x");
        let s = UnicodeStr::from_units(&units[..]);
        assert!(s.starts_with(&[0xD800u16, 0xDF48][..]));
        assert!(s.contains(&[0xDF48u16][..]));
    }

    #[rstest]
    #[case("a,b,c", ",", &["a", "b", "c"])]
    #[case("a,,b", ",", &["a", "", "b"])]
    #[case(",", ",", &["", ""])]
    #[case("", ",", &[""])]
    #[case("abc", ",", &["abc"])]
    #[case("a::b::", "::", &["a", "b", ""])]
    #[case("aaa", "aa", &["", "a"])]
    #[case("a\u{E9}c", "", &["a", "\u{E9}", "c"])]
    #[case("", "", &[""])]
    fn test_split(#[case] input: &str, #[case] delimiter: &str, #[case] expected: &[&str]) {
        let parts = utf8(input)
            .split(delimiter)
            .map(|part| part.to_string())
            .collect::<Vec<_>>();
        assert_eq!(expected, &parts[..]);
    }

    #[test]
    fn test_split_unit() {
        let units: &[u32] = &[0x61, 0x20, 0x62, 0x20];
        let parts = UnicodeStr::from_units(units)
            .split_unit(0x20)
            .map(|part| part.as_units().len())
            .collect::<Vec<_>>();
        assert_eq!(vec![1, 1, 0], parts);
    }

    #[test]
    fn test_is_valid() {
        assert!(utf8("caf\u{E9} \u{1F525}").is_valid());
        assert!(utf8("\u{FFFD}").is_valid());
        assert!(!UnicodeStr::from_units(&[0x61u8, 0xC0, 0x80][..]).is_valid());
        assert!(!UnicodeStr::from_units(&[0xD800u16][..]).is_valid());
        assert!(!UnicodeStr::from_units(&[0x11_0000u32][..]).is_valid());
        assert!(UnicodeStr::<u16>::from_units(&[]).is_valid());
    }

    #[test]
    fn test_case_conversion() {
        assert_eq!(*"\u{3BF}\u{3C2}", utf8("\u{39F}\u{3A3}").to_lower("").unwrap());
        assert_eq!(*"\u{3C3}\u{3B1}", utf8("\u{3A3}\u{391}").to_lower("").unwrap());
        assert_eq!(*"\u{131}", utf8("I").to_lower("tr").unwrap());
        assert_eq!(*"i", utf8("\u{130}").to_lower(Language::Turkic).unwrap());
        assert_eq!(*"i\u{307}\u{300}", utf8("\u{CC}").to_lower("lt").unwrap());
        assert_eq!(*"SS", utf8("\u{DF}").to_upper("").unwrap());
        assert_eq!(*"strasse", utf8("Stra\u{DF}e").fold("").unwrap());

        let units = utf16("\u{1044F}\u{DF}");
        let upper = UnicodeStr::from_units(&units[..]).to_upper("").unwrap();
        assert_eq!(*"\u{10427}SS", upper);
        assert!(utf8("").to_lower("").unwrap().is_empty());
    }

    #[test]
    fn test_fmt_and_index() {
        let s = utf8("a\"\u{E9}");
        assert_eq!("a\"\u{E9}", s.to_string());
        assert_eq!("\"a\\\"\u{E9}\"", format!("{:?}", s));
        assert_eq!(*"\u{E9}", s[2..]);
        assert_eq!("\u{FFFD}", UnicodeStr::from_units(&[0xFFu8][..]).to_string());
    }

    #[test]
    fn test_hash_matches_owned() {
        fn calc_hash<T: std::hash::Hash + ?Sized>(v: &T) -> u64 {
            use std::collections::hash_map::DefaultHasher;
            use std::hash::Hasher;
            let mut hasher = DefaultHasher::new();
            v.hash(&mut hasher);
            hasher.finish()
        }

        let s = utf8("Hello world");
        assert_eq!(calc_hash(s), calc_hash(&s.to_owned()));
        assert_ne!(calc_hash(s), calc_hash(utf8("Hello")));
    }
}
