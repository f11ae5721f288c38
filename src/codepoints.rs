use crate::codec::{self, CodeUnit};
use std::{fmt, iter::FusedIterator, ptr};

/// An iterator over the codepoints of an encoded buffer.
///
/// Decoding is lazy: [`peek`](Codepoints::peek) decodes the codepoint at the
/// current position and remembers its length, so a following
/// [`advance`](Codepoints::advance) does not decode again. Malformed units
/// are yielded as U+FFFD, one per unit.
pub struct Codepoints<'a, U> {
    data: &'a [U],
    cur_len: usize,
}

impl<'a, U: CodeUnit> Codepoints<'a, U> {
    /// Creates an iterator positioned at the start of `units`.
    pub const fn new(units: &'a [U]) -> Self {
        Codepoints {
            data: units,
            cur_len: 0,
        }
    }

    /// Decodes the codepoint at the current position without advancing.
    pub fn peek(&mut self) -> Option<char> {
        let (ch, len) = codec::decode(self.data)?;
        self.cur_len = len;
        Some(ch)
    }

    /// Moves past the current codepoint. Returns `false` at the end.
    pub fn advance(&mut self) -> bool {
        if self.cur_len == 0 {
            match codec::decode(self.data) {
                Some((_, len)) => self.cur_len = len,
                None => return false,
            }
        }
        self.data = &self.data[self.cur_len..];
        self.cur_len = 0;
        true
    }

    /// The code units that have not been consumed yet.
    pub const fn as_units(&self) -> &'a [U] {
        self.data
    }

    /// Returns whether every code unit has been consumed.
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<U> Clone for Codepoints<'_, U> {
    fn clone(&self) -> Self {
        Codepoints {
            data: self.data,
            cur_len: self.cur_len,
        }
    }
}

// Two views are equal only when they point at the same position of the same
// buffer.
impl<U> PartialEq for Codepoints<'_, U> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.data.as_ptr(), other.data.as_ptr()) && self.data.len() == other.data.len()
    }
}

impl<U> Eq for Codepoints<'_, U> {}

impl<'a, U: CodeUnit> Iterator for Codepoints<'a, U> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.advance();
        Some(ch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.data.len();
        ((len + U::MAX_UNITS - 1) / U::MAX_UNITS, Some(len))
    }
}

impl<U: CodeUnit> FusedIterator for Codepoints<'_, U> {}

impl<U: CodeUnit> fmt::Debug for Codepoints<'_, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Codepoints(")?;
        f.debug_list().entries(self.clone()).finish()?;
        write!(f, ")")
    }
}

/// An iterator over the codepoints of an encoded buffer and their positions.
///
/// Yields `(offset, codepoint, len)`, with `offset` and `len` in code units.
#[derive(Clone)]
pub struct CodepointIndices<'a, U> {
    offset: usize,
    inner: Codepoints<'a, U>,
}

impl<'a, U: CodeUnit> CodepointIndices<'a, U> {
    /// Creates an iterator positioned at the start of `units`.
    pub const fn new(units: &'a [U]) -> Self {
        CodepointIndices {
            offset: 0,
            inner: Codepoints::new(units),
        }
    }

    /// Offset of the next codepoint, in code units.
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

impl<'a, U: CodeUnit> Iterator for CodepointIndices<'a, U> {
    type Item = (usize, char, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (ch, len) = codec::decode(self.inner.as_units())?;
        let offset = self.offset;
        self.inner = Codepoints::new(&self.inner.as_units()[len..]);
        self.offset += len;
        Some((offset, ch, len))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<U: CodeUnit> FusedIterator for CodepointIndices<'_, U> {}

impl<U: CodeUnit> fmt::Debug for CodepointIndices<'_, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CodepointIndices(")?;
        f.debug_list().entries(self.clone()).finish()?;
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::{CodepointIndices, Codepoints};
    use crate::codec::REPLACEMENT_CHARACTER;

    #[test]
    fn test_iterate_utf8() {
        let bytes = "A\u{A2}\u{20AC}\u{10348}".as_bytes();
        let cps = Codepoints::new(bytes).collect::<Vec<_>>();
        assert_eq!(vec!['A', '\u{A2}', '\u{20AC}', '\u{10348}'], cps);
    }

    #[test]
    fn test_iterate_malformed() {
        let units: &[u16] = &[0x41, 0xDC00, 0xD800, 0xD800, 0xDC00];
        let cps = Codepoints::new(units).collect::<Vec<_>>();
        assert_eq!(
            vec!['A', REPLACEMENT_CHARACTER, REPLACEMENT_CHARACTER, '\u{10000}'],
            cps
        );
    }

    #[test]
    fn test_peek_does_not_advance() {
        let bytes = "\u{20AC}x".as_bytes();
        let mut it = Codepoints::new(bytes);
        assert_eq!(Some('\u{20AC}'), it.peek());
        assert_eq!(Some('\u{20AC}'), it.peek());
        assert_eq!(4, it.as_units().len());
        assert!(it.advance());
        assert_eq!(Some('x'), it.peek());
        assert!(it.advance());
        assert!(it.is_empty());
        assert!(!it.advance());
        assert_eq!(None, it.peek());
    }

    #[test]
    fn test_advance_without_peek() {
        let bytes = "\u{10348}z".as_bytes();
        let mut it = Codepoints::new(bytes);
        assert!(it.advance());
        assert_eq!(Some('z'), it.next());
        assert_eq!(None, it.next());
    }

    #[test]
    fn test_equality_is_structural() {
        let a = "abc".as_bytes().to_vec();
        let b = a.clone();
        let mut it1 = Codepoints::new(&a[..]);
        let it2 = Codepoints::new(&a[..]);
        assert_eq!(it1, it2);
        assert_ne!(Codepoints::new(&a[..]), Codepoints::new(&b[..]));
        it1.next();
        assert_ne!(it1, it2);
        assert_eq!(it1, Codepoints::new(&a[1..]));
    }

    #[test]
    fn test_multiple_passes() {
        let units: &[u32] = &[0x48, 0x69];
        let view = Codepoints::new(units);
        let first = view.clone().collect::<String>();
        let second = view.collect::<String>();
        assert_eq!("Hi", first);
        assert_eq!(first, second);
    }

    #[test]
    fn test_indices() {
        let bytes = "a\u{E9}\u{1F525}".as_bytes();
        let indices = CodepointIndices::new(bytes).collect::<Vec<_>>();
        assert_eq!(
            vec![(0, 'a', 1), (1, '\u{E9}', 2), (3, '\u{1F525}', 4)],
            indices
        );
    }

    #[test]
    fn test_debug_fmt() {
        let units: &[u32] = &[0x41];
        assert_eq!("Codepoints(['A'])", format!("{:?}", Codepoints::new(units)));
    }
}
