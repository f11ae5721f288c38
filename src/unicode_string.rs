use crate::{
    codec::{self, CodeUnit, REPLACEMENT_CHARACTER},
    error::{self, Error, Result},
    unicode_str_ty::UnicodeStr,
};
use std::{borrow, fmt, hash, iter::FromIterator, ops, slice};

/// A growable Unicode string stored as code units of type `U`.
///
/// Growth is fallible: operations that allocate return
/// [`Error::CapacityOverflow`] instead of aborting when the buffer cannot
/// grow. The `Extend`, `FromIterator` and `AddAssign` impls follow `Vec`
/// and abort on allocation failure.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnicodeString<U> {
    buf: Vec<U>,
}

/// A UTF-8 string.
pub type Utf8String = UnicodeString<u8>;
/// A UTF-16 string.
pub type Utf16String = UnicodeString<u16>;
/// A UTF-32 string.
pub type Utf32String = UnicodeString<u32>;

impl<U: CodeUnit> hash::Hash for UnicodeString<U> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<U: CodeUnit> PartialEq<UnicodeStr<U>> for UnicodeString<U> {
    #[inline]
    fn eq(&self, other: &UnicodeStr<U>) -> bool {
        **self == *other
    }
}

impl<U: CodeUnit> PartialEq<str> for UnicodeString<U> {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        **self == *other
    }
}

impl<'a, U: CodeUnit> PartialEq<&'a str> for UnicodeString<U> {
    #[inline]
    fn eq(&self, other: &&'a str) -> bool {
        **self == **other
    }
}

impl<U: CodeUnit> PartialEq<UnicodeString<U>> for str {
    #[inline]
    fn eq(&self, other: &UnicodeString<U>) -> bool {
        **other == *self
    }
}

impl<U: CodeUnit> fmt::Display for UnicodeString<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &**self)
    }
}

impl<U: CodeUnit> fmt::Debug for UnicodeString<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &**self)
    }
}

impl<U: CodeUnit> ops::Deref for UnicodeString<U> {
    type Target = UnicodeStr<U>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        UnicodeStr::from_units(&self.buf)
    }
}

impl<U: CodeUnit> ops::DerefMut for UnicodeString<U> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        UnicodeStr::from_units_mut(&mut self.buf)
    }
}

impl<U: CodeUnit> borrow::Borrow<UnicodeStr<U>> for UnicodeString<U> {
    fn borrow(&self) -> &UnicodeStr<U> {
        self
    }
}

impl<U: CodeUnit> AsRef<UnicodeStr<U>> for UnicodeString<U> {
    #[inline]
    fn as_ref(&self) -> &UnicodeStr<U> {
        self
    }
}

impl<U: CodeUnit> AsRef<[U]> for UnicodeString<U> {
    #[inline]
    fn as_ref(&self) -> &[U] {
        &self.buf
    }
}

impl<U: CodeUnit> UnicodeString<U> {
    /// Creates a new empty `UnicodeString`.
    pub const fn new() -> Self {
        UnicodeString { buf: Vec::new() }
    }

    /// Creates an empty `UnicodeString` able to hold `capacity` code units.
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        let mut string = Self::new();
        string.reserve(capacity)?;
        Ok(string)
    }

    /// Wraps a vector of code units without copying or validating it.
    pub const fn from_vec(units: Vec<U>) -> Self {
        UnicodeString { buf: units }
    }

    /// Copies a slice of code units into a new string.
    pub fn from_units(units: &[U]) -> Result<Self> {
        let mut string = Self::try_with_capacity(units.len())?;
        string.buf.extend_from_slice(units);
        Ok(string)
    }

    /// Creates a string holding `count` copies of `ch`.
    pub fn repeated(ch: char, count: usize) -> Result<Self> {
        let encoded = codec::encode_char::<U>(ch);
        let total = encoded
            .len()
            .checked_mul(count)
            .ok_or(Error::CapacityOverflow { requested: usize::MAX })?;
        let mut string = Self::try_with_capacity(total)?;
        for _ in 0..count {
            string.buf.extend_from_slice(&encoded);
        }
        Ok(string)
    }

    /// Copies a buffer terminated by a zero code unit. A null pointer
    /// yields an empty string.
    ///
    /// # Safety
    ///
    /// A non-null `ptr` must point to a readable sequence of code units
    /// that ends with a zero unit.
    pub unsafe fn from_nul_terminated(ptr: *const U) -> Result<Self> {
        if ptr.is_null() {
            return Ok(Self::new());
        }
        let nul = U::default();
        let mut len = 0;
        // SAFETY: the caller guarantees every unit up to the terminator is
        // readable.
        while unsafe { *ptr.add(len) } != nul {
            len += 1;
        }
        let units = unsafe { slice::from_raw_parts(ptr, len) };
        Self::from_units(units)
    }

    /// Decodes `src` and re-encodes every codepoint at width `U`.
    pub fn transcode_from<V: CodeUnit>(src: &UnicodeStr<V>) -> Result<Self> {
        let mut string = Self::try_with_capacity(src.len())?;
        for ch in src.codepoints() {
            string.push(ch)?;
        }
        Ok(string)
    }

    /// Returns the underlying vector of code units.
    pub fn into_units(self) -> Vec<U> {
        self.buf
    }

    /// Borrows the whole string as a slice.
    #[inline]
    pub fn as_unicode_str(&self) -> &UnicodeStr<U> {
        self
    }

    /// Number of code units the string can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Reserves room for at least `additional` more code units.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        error::reserve(&mut self.buf, additional)
    }

    /// Removes every code unit, keeping the allocation.
    pub fn clear(&mut self) {
        self.buf.clear()
    }

    /// Appends the given `char` to the end of the string.
    pub fn push(&mut self, ch: char) -> Result<()> {
        self.push_codepoint(u32::from(ch))
    }

    /// Appends a raw codepoint value. Surrogates and values above U+10FFFF
    /// are appended as U+FFFD.
    pub fn push_codepoint(&mut self, cp: u32) -> Result<()> {
        self.reserve(U::MAX_UNITS)?;
        let old_len = self.buf.len();
        // SAFETY: `reserve` left room for `U::MAX_UNITS` units past `old_len`,
        // and every unit up to the returned length has been written.
        unsafe {
            let spare_ptr = self.buf.as_mut_ptr().add(old_len);
            let used_len = codec::encode_unchecked(cp, spare_ptr);
            self.buf.set_len(old_len + used_len);
        }
        Ok(())
    }

    /// Appends the code units of `s` to the end of the string.
    pub fn append(&mut self, s: &UnicodeStr<U>) -> Result<()> {
        self.reserve(s.len())?;
        self.buf.extend_from_slice(s.as_units());
        Ok(())
    }

    /// Removes leading and trailing whitespace in place.
    pub fn trim_in_place(&mut self) {
        self.trim_end_in_place();
        self.trim_start_in_place();
    }

    /// Removes leading whitespace in place.
    pub fn trim_start_in_place(&mut self) {
        let start = self.trim_start_offset();
        self.buf.drain(..start);
    }

    /// Removes trailing whitespace in place.
    pub fn trim_end_in_place(&mut self) {
        let end = self.trim_end_offset();
        self.buf.truncate(end);
    }

    /// Replaces every malformed code unit with U+FFFD, leaving well-formed
    /// text untouched. Applying it twice has no further effect.
    pub fn replace_invalid(&mut self) -> Result<()> {
        if self.is_valid() {
            return Ok(());
        }

        let replacement = codec::encode_char::<U>(REPLACEMENT_CHARACTER);
        let mut repaired = Vec::new();
        error::reserve(&mut repaired, self.len())?;
        let mut replaced = 0usize;
        for (offset, ch, len) in self.char_indices() {
            let src = &self.buf[offset..offset + len];
            let encoded = codec::encode_char::<U>(ch);
            if *encoded == *src {
                repaired.extend_from_slice(src);
            } else {
                replaced += 1;
                error::reserve(&mut repaired, replacement.len())?;
                repaired.extend_from_slice(&replacement);
            }
        }

        tracing::trace!(
            target: "unistr",
            replaced,
            old_len = self.buf.len(),
            new_len = repaired.len(),
            "replaced malformed code units"
        );
        self.buf = repaired;
        Ok(())
    }

    /// Concatenates `parts`, placing `separator` between consecutive parts.
    ///
    /// An empty `parts` gives an empty string.
    pub fn join<S, P>(parts: &[S], separator: &P) -> Result<Self>
    where
        S: AsRef<UnicodeStr<U>>,
        P: AsRef<[U]> + ?Sized,
    {
        let separator = separator.as_ref();
        let mut total = 0;
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                total = error::checked_len(total, separator.len())?;
            }
            total = error::checked_len(total, part.as_ref().len())?;
        }

        let mut string = Self::try_with_capacity(total)?;
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                string.buf.extend_from_slice(separator);
            }
            string.buf.extend_from_slice(part.as_ref().as_units());
        }
        Ok(string)
    }
}

impl<U: CodeUnit> Extend<char> for UnicodeString<U> {
    fn extend<T: IntoIterator<Item = char>>(&mut self, iter: T) {
        let iter = iter.into_iter();
        self.buf.reserve(iter.size_hint().0);
        for ch in iter {
            self.buf.extend_from_slice(&codec::encode_char::<U>(ch));
        }
    }
}

impl<U: CodeUnit> FromIterator<char> for UnicodeString<U> {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        let mut string = Self::default();
        string.extend(iter);
        string
    }
}

impl<U: CodeUnit> From<&str> for UnicodeString<U> {
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

impl<U: CodeUnit> From<&UnicodeStr<U>> for UnicodeString<U> {
    fn from(s: &UnicodeStr<U>) -> Self {
        borrow::ToOwned::to_owned(s)
    }
}

impl<'rhs, U: CodeUnit> ops::AddAssign<&'rhs UnicodeStr<U>> for UnicodeString<U> {
    fn add_assign(&mut self, rhs: &'rhs UnicodeStr<U>) {
        self.buf.extend_from_slice(rhs.as_units());
    }
}

#[cfg(feature = "serde")]
impl<U: CodeUnit> serde::Serialize for UnicodeString<U> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(&**self)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: CodeUnit> serde::Deserialize<'de> for UnicodeString<U> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Ok(UnicodeString::from(&*s))
    }
}

#[cfg(test)]
mod tests {
    use super::{UnicodeString, Utf16String, Utf32String, Utf8String};
    use crate::{codec::REPLACEMENT_CHARACTER, error::Error, unicode_str_ty::UnicodeStr};
    use quickcheck::{QuickCheck, TestResult};
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_constructors() {
        let empty = Utf16String::new();
        assert!(empty.is_empty());
        assert_eq!(0, empty.len());

        let stars = Utf8String::repeated('\u{2605}', 3).unwrap();
        assert_eq!(*"\u{2605}\u{2605}\u{2605}", stars);
        assert_eq!(9, stars.len());
        assert!(Utf32String::repeated('x', 0).unwrap().is_empty());

        let units = [0x48u16, 0x69];
        assert_eq!(*"Hi", Utf16String::from_units(&units).unwrap());

        let s = Utf32String::from("caf\u{E9}");
        assert_eq!(&[0x63, 0x61, 0x66, 0xE9][..], s.as_units());
    }

    #[test]
    fn test_repeated_overflow() {
        assert_eq!(
            Err(Error::CapacityOverflow { requested: usize::MAX }),
            Utf8String::repeated('\u{10348}', usize::MAX / 2)
        );
        assert!(matches!(
            Utf32String::repeated('a', usize::MAX),
            Err(Error::CapacityOverflow { .. })
        ));
    }

    #[test]
    fn test_from_nul_terminated() {
        let units = [0x61u16, 0x62, 0, 0x63];
        let s = unsafe { Utf16String::from_nul_terminated(units.as_ptr()) }.unwrap();
        assert_eq!(*"ab", s);
        let s = unsafe { Utf8String::from_nul_terminated(std::ptr::null()) }.unwrap();
        assert!(s.is_empty());
        let s = unsafe { Utf8String::from_nul_terminated(b"\0".as_ptr()) }.unwrap();
        assert!(s.is_empty());
    }

    #[test]
    fn test_push_and_append() {
        let mut s = Utf16String::new();
        s.push('a').unwrap();
        s.push('\u{1F525}').unwrap();
        assert_eq!(3, s.len());
        s.push_codepoint(0xD800).unwrap();
        s.push_codepoint(0x11_0000).unwrap();
        assert_eq!(*"a\u{1F525}\u{FFFD}\u{FFFD}", s);

        let mut t = Utf16String::from("x");
        t.append(&s).unwrap();
        t += UnicodeStr::from_units(&[0x79u16][..]);
        assert_eq!(*"xa\u{1F525}\u{FFFD}\u{FFFD}y", t);
        t.clear();
        assert!(t.is_empty());
        assert!(t.capacity() >= 7);
    }

    #[test]
    fn test_trim_in_place() {
        let mut s = Utf8String::from(" \t a b \n");
        s.trim_in_place();
        assert_eq!(*"a b", s);

        let mut s = Utf16String::from("  a ");
        s.trim_start_in_place();
        assert_eq!(*"a ", s);
        s.trim_end_in_place();
        assert_eq!(*"a", s);

        let mut s = Utf32String::from("\u{3000}\u{3000}");
        s.trim_in_place();
        assert!(s.is_empty());
    }

    #[test]
    fn test_replace_invalid() {
        let mut s = Utf8String::from_vec(vec![0x61, 0xC0, 0x80, 0x62, 0xE2, 0x82]);
        s.replace_invalid().unwrap();
        assert_eq!(*"a\u{FFFD}\u{FFFD}b\u{FFFD}\u{FFFD}", s);
        assert!(s.is_valid());
        let once = s.clone();
        s.replace_invalid().unwrap();
        assert_eq!(once, s);

        let mut s = Utf16String::from_vec(vec![0xDC00, 0x41, 0xD800]);
        s.replace_invalid().unwrap();
        assert_eq!(&[0xFFFD, 0x41, 0xFFFD][..], s.as_units());

        let mut s = Utf32String::from_vec(vec![0xD800, 0x10_FFFF, 0x11_0000]);
        s.replace_invalid().unwrap();
        assert_eq!(
            vec![REPLACEMENT_CHARACTER, '\u{10FFFF}', REPLACEMENT_CHARACTER],
            s.codepoints().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_join() {
        let parts = [Utf8String::from("a"), Utf8String::from("b"), Utf8String::from("c")];
        assert_eq!(*"a, b, c", Utf8String::join(&parts, ", ").unwrap());

        let empty: [&UnicodeStr<u8>; 0] = [];
        assert!(Utf8String::join(&empty, ",").unwrap().is_empty());

        let blanks = [Utf8String::new(), Utf8String::new()];
        assert_eq!(*",", Utf8String::join(&blanks, ",").unwrap());

        let one = [Utf8String::from("solo")];
        assert_eq!(*"solo", Utf8String::join(&one, ",").unwrap());
    }

    #[test]
    fn test_transcode() {
        let text = "A\u{A2}\u{20AC}\u{10348}";
        let utf8 = Utf8String::from(text);
        let utf16 = utf8.transcode::<u16>().unwrap();
        let utf32 = utf16.transcode::<u32>().unwrap();
        assert_eq!(&[0x41, 0xA2, 0x20AC, 0xD800, 0xDF48][..], utf16.as_units());
        assert_eq!(&[0x41, 0xA2, 0x20AC, 0x10348][..], utf32.as_units());
        assert_eq!(utf8, utf32.transcode::<u8>().unwrap());
        assert_eq!(text.as_bytes(), utf8.as_units());
    }

    #[test]
    fn test_case_conversion_owned() {
        let s = Utf16String::from("\u{39F}\u{3A3} \u{3A3}\u{391}");
        assert_eq!(*"\u{3BF}\u{3C2} \u{3C3}\u{3B1}", s.to_lower("").unwrap());
        assert_eq!(*"\u{130}STANBUL", Utf8String::from("istanbul").to_upper("tr").unwrap());
    }

    #[test]
    fn test_ordering_and_fmt() {
        let a = Utf32String::from("apple");
        let b = Utf32String::from("banana");
        assert!(a < b);
        assert_eq!("apple", a.to_string());
        assert_eq!("\"apple\"", format!("{:?}", a));
        assert_eq!(a, "apple");
    }

    #[test]
    fn test_trim_idempotent() {
        fn prop(s: String) -> bool {
            let utf16 = Utf16String::from(s.as_str());
            let once = utf16.trim();
            once == once.trim() && *once.to_string() == *s.trim()
        }
        QuickCheck::new()
            .tests(500)
            .quickcheck(prop as fn(String) -> bool);
    }

    #[test]
    fn test_split_join_round_trip() {
        fn prop(s: String) -> bool {
            let utf8 = Utf8String::from(s.as_str());
            let parts = utf8.split(",").collect::<Vec<_>>();
            Utf8String::join(&parts, ",").map_or(false, |joined| joined == utf8)
        }
        QuickCheck::new()
            .tests(500)
            .quickcheck(prop as fn(String) -> bool);
    }

    #[quickcheck]
    fn transcode_round_trips(s: String) -> TestResult {
        let utf8 = Utf8String::from(s.as_str());
        let utf16 = Utf16String::from(s.as_str());
        let utf32 = Utf32String::from(s.as_str());
        let ok = utf8.transcode::<u16>().ok() == Some(utf16.clone())
            && utf8.transcode::<u32>().ok() == Some(utf32.clone())
            && utf16.transcode::<u8>().ok() == Some(utf8.clone())
            && utf16.transcode::<u32>().ok() == Some(utf32.clone())
            && utf32.transcode::<u8>().ok() == Some(utf8.clone())
            && utf32.transcode::<u16>().ok() == Some(utf16);
        TestResult::from_bool(ok)
    }

    #[quickcheck]
    fn replace_invalid_is_idempotent(units: Vec<u16>) -> bool {
        let mut s = Utf16String::from_vec(units);
        if s.replace_invalid().is_err() {
            return false;
        }
        let once = s.clone();
        s.replace_invalid().is_ok() && s == once && s.is_valid()
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let s = Utf16String::from("h\u{E9}llo");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!("\"h\u{E9}llo\"", json);
        let back: Utf16String = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
