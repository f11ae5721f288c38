//! Validating UTF-8, UTF-16 and UTF-32 codecs.
//!
//! Decoding never fails: any malformed subsequence decodes to
//! [`REPLACEMENT_CHARACTER`] and consumes exactly one code unit, so a scan
//! over arbitrary data always makes progress.

use crate::error::{Error, Result};
use std::{fmt, hash, ops, ptr};

/// U+FFFD REPLACEMENT CHARACTER.
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// Largest number of code units a codepoint occupies at any width.
pub const MAX_ENCODED_LEN: usize = 4;

const REPLACEMENT_DECODE: (char, usize) = (REPLACEMENT_CHARACTER, 1);

const TAG_CONT: u8 = 0b1000_0000;
const TAG_TWO_B: u8 = 0b1100_0000;
const TAG_THREE_B: u8 = 0b1110_0000;
const TAG_FOUR_B: u8 = 0b1111_0000;
const CONT_PREFIX_MASK: u8 = 0b1100_0000;
const CONT_VALUE_MASK: u8 = 0b0011_1111;

// Smallest codepoint that may use a sequence of the given length.
const MIN_CODEPOINT_FOR_LEN: [u32; 5] = [0, 0, 0x80, 0x800, 0x1_0000];

const HIGH_SURROGATE_START: u32 = 0xD800;
const LOW_SURROGATE_START: u32 = 0xDC00;
const SURROGATE_END: u32 = 0xDFFF;
const MAX_SCALAR: u32 = 0x10_FFFF;

/// Returns whether `b` is a UTF-8 continuation byte (`10xxxxxx`).
#[inline]
pub const fn is_continuation(b: u8) -> bool {
    (b & CONT_PREFIX_MASK) == TAG_CONT
}

/// Returns whether `cp` lies in the surrogate range `U+D800..=U+DFFF`.
#[inline]
pub const fn is_surrogate(cp: u32) -> bool {
    cp >= HIGH_SURROGATE_START && cp <= SURROGATE_END
}

/// Returns whether `cp` is a high (leading) surrogate.
#[inline]
pub const fn is_high_surrogate(cp: u32) -> bool {
    cp >= HIGH_SURROGATE_START && cp < LOW_SURROGATE_START
}

/// Returns whether `cp` is a low (trailing) surrogate.
#[inline]
pub const fn is_low_surrogate(cp: u32) -> bool {
    cp >= LOW_SURROGATE_START && cp <= SURROGATE_END
}

/// Returns whether `cp` is a Unicode scalar value.
#[inline]
pub const fn is_scalar(cp: u32) -> bool {
    cp <= MAX_SCALAR && !is_surrogate(cp)
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// A fixed-width storage element of an encoded Unicode buffer.
///
/// Implemented for `u8` (UTF-8), `u16` (UTF-16) and `u32` (UTF-32).
pub trait CodeUnit:
    sealed::Sealed + Copy + Default + Eq + Ord + hash::Hash + fmt::Debug + Send + Sync + 'static
{
    /// Width of one code unit in bits.
    const BITS: u32;

    /// Largest number of units one codepoint occupies at this width.
    const MAX_UNITS: usize;

    /// Decodes the codepoint at the start of `units`.
    ///
    /// Returns the codepoint and the number of units consumed, or `None` if
    /// `units` is empty. Malformed input yields `(U+FFFD, 1)`.
    fn decode(units: &[Self]) -> Option<(char, usize)>;

    /// Encodes `ch` into `out`, returning the number of units written.
    fn write_char(ch: char, out: &mut [Self; MAX_ENCODED_LEN]) -> usize;

    /// Number of units needed to encode `ch` at this width.
    fn encoded_len(ch: char) -> usize;
}

impl CodeUnit for u8 {
    const BITS: u32 = 8;
    const MAX_UNITS: usize = 4;

    fn decode(units: &[u8]) -> Option<(char, usize)> {
        let (&lead, rest) = units.split_first()?;
        if lead < 0x80 {
            return Some((char::from(lead), 1));
        }

        let (len, mut value) = match lead {
            0xC2..=0xDF => (2, u32::from(lead & 0x1F)),
            0xE0..=0xEF => (3, u32::from(lead & 0x0F)),
            0xF0..=0xF4 => (4, u32::from(lead & 0x07)),
            _ => return Some(REPLACEMENT_DECODE),
        };
        let cont = match rest.get(..len - 1) {
            Some(cont) => cont,
            None => return Some(REPLACEMENT_DECODE),
        };
        for &b in cont {
            if !is_continuation(b) {
                return Some(REPLACEMENT_DECODE);
            }
            value = (value << 6) | u32::from(b & CONT_VALUE_MASK);
        }

        if value < MIN_CODEPOINT_FOR_LEN[len] {
            return Some(REPLACEMENT_DECODE);
        }
        match char::from_u32(value) {
            Some(ch) => Some((ch, len)),
            None => Some(REPLACEMENT_DECODE),
        }
    }

    fn write_char(ch: char, out: &mut [u8; MAX_ENCODED_LEN]) -> usize {
        let code = u32::from(ch);
        match ch.len_utf8() {
            1 => {
                out[0] = code as u8;
                1
            }
            2 => {
                out[0] = (code >> 6 & 0x1F) as u8 | TAG_TWO_B;
                out[1] = (code & 0x3F) as u8 | TAG_CONT;
                2
            }
            3 => {
                out[0] = (code >> 12 & 0x0F) as u8 | TAG_THREE_B;
                out[1] = (code >> 6 & 0x3F) as u8 | TAG_CONT;
                out[2] = (code & 0x3F) as u8 | TAG_CONT;
                3
            }
            _ => {
                out[0] = (code >> 18 & 0x07) as u8 | TAG_FOUR_B;
                out[1] = (code >> 12 & 0x3F) as u8 | TAG_CONT;
                out[2] = (code >> 6 & 0x3F) as u8 | TAG_CONT;
                out[3] = (code & 0x3F) as u8 | TAG_CONT;
                4
            }
        }
    }

    #[inline]
    fn encoded_len(ch: char) -> usize {
        ch.len_utf8()
    }
}

impl CodeUnit for u16 {
    const BITS: u32 = 16;
    const MAX_UNITS: usize = 2;

    fn decode(units: &[u16]) -> Option<(char, usize)> {
        let (&lead, rest) = units.split_first()?;
        let lead = u32::from(lead);
        if !is_surrogate(lead) {
            // BMP
            return Some((char::from_u32(lead).unwrap_or(REPLACEMENT_CHARACTER), 1));
        }
        if !is_high_surrogate(lead) {
            return Some(REPLACEMENT_DECODE);
        }
        match rest.first().map(|&trail| u32::from(trail)) {
            Some(trail) if is_low_surrogate(trail) => {
                let value = 0x1_0000
                    + ((lead - HIGH_SURROGATE_START) << 10)
                    + (trail - LOW_SURROGATE_START);
                match char::from_u32(value) {
                    Some(ch) => Some((ch, 2)),
                    None => Some(REPLACEMENT_DECODE),
                }
            }
            _ => Some(REPLACEMENT_DECODE),
        }
    }

    fn write_char(ch: char, out: &mut [u16; MAX_ENCODED_LEN]) -> usize {
        let code = u32::from(ch);
        if code <= 0xFFFF {
            out[0] = code as u16;
            return 1;
        }
        let val = code - 0x1_0000;
        out[0] = (HIGH_SURROGATE_START + (val >> 10)) as u16;
        out[1] = (LOW_SURROGATE_START + (val & 0x3FF)) as u16;
        2
    }

    #[inline]
    fn encoded_len(ch: char) -> usize {
        ch.len_utf16()
    }
}

impl CodeUnit for u32 {
    const BITS: u32 = 32;
    const MAX_UNITS: usize = 1;

    #[inline]
    fn decode(units: &[u32]) -> Option<(char, usize)> {
        let &unit = units.first()?;
        Some((char::from_u32(unit).unwrap_or(REPLACEMENT_CHARACTER), 1))
    }

    #[inline]
    fn write_char(ch: char, out: &mut [u32; MAX_ENCODED_LEN]) -> usize {
        out[0] = u32::from(ch);
        1
    }

    #[inline]
    fn encoded_len(_: char) -> usize {
        1
    }
}

/// Decodes the codepoint at the start of `units`.
///
/// See [`CodeUnit::decode`].
#[inline]
pub fn decode<U: CodeUnit>(units: &[U]) -> Option<(char, usize)> {
    U::decode(units)
}

/// Maps a raw codepoint to the character actually encoded for it.
#[inline]
fn scalar_or_replacement(cp: u32) -> char {
    char::from_u32(cp).unwrap_or(REPLACEMENT_CHARACTER)
}

/// Number of units `encode` writes for `cp` at width `U`.
#[inline]
pub fn encoded_len<U: CodeUnit>(cp: u32) -> usize {
    U::encoded_len(scalar_or_replacement(cp))
}

/// A single encoded codepoint held inline.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct EncodedChar<U> {
    units: [U; MAX_ENCODED_LEN],
    len: usize,
}

impl<U: CodeUnit> ops::Deref for EncodedChar<U> {
    type Target = [U];

    #[inline]
    fn deref(&self) -> &[U] {
        &self.units[..self.len]
    }
}

impl<U: CodeUnit> fmt::Debug for EncodedChar<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedChar(")?;
        f.debug_list().entries(self.iter()).finish()?;
        write!(f, ")")
    }
}

/// Encodes `ch` at width `U` into an inline buffer.
#[inline]
pub fn encode_char<U: CodeUnit>(ch: char) -> EncodedChar<U> {
    let mut units = [U::default(); MAX_ENCODED_LEN];
    let len = U::write_char(ch, &mut units);
    EncodedChar { units, len }
}

/// Encodes `cp` into `out`, returning the number of units written.
///
/// Surrogates and values above U+10FFFF are written as U+FFFD. Fails with
/// [`Error::BufferTooSmall`] without writing anything if `out` is too short.
pub fn encode<U: CodeUnit>(cp: u32, out: &mut [U]) -> Result<usize> {
    let encoded = encode_char::<U>(scalar_or_replacement(cp));
    match out.get_mut(..encoded.len()) {
        Some(dst) => {
            dst.copy_from_slice(&encoded);
            Ok(encoded.len())
        }
        None => Err(Error::BufferTooSmall {
            required: encoded.len(),
            available: out.len(),
        }),
    }
}

/// Encodes `cp` to `out` without checking the destination's size.
///
/// Surrogates and values above U+10FFFF are written as U+FFFD. Returns the
/// number of units written.
///
/// # Safety
///
/// `out` must be valid for writes of `U::MAX_UNITS` consecutive code units.
#[inline]
pub unsafe fn encode_unchecked<U: CodeUnit>(cp: u32, out: *mut U) -> usize {
    let encoded = encode_char::<U>(scalar_or_replacement(cp));
    unsafe { ptr::copy_nonoverlapping(encoded.as_ptr(), out, encoded.len()) };
    encoded.len()
}
