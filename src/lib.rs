#![deny(unsafe_op_in_unsafe_fn)]
#![deny(missing_docs, missing_debug_implementations)]
//! Unicode strings generic over their code-unit width.
//!
//! The `UnicodeString` type is a growable string stored as UTF-8 (`u8`),
//! UTF-16 (`u16`) or UTF-32 (`u32`) code units. Its borrowed form,
//! `&UnicodeStr`, plays the role `&str` plays for `String`.
//!
//! Strings hold arbitrary code units. Malformed sequences are never an error:
//! they read as U+FFFD (REPLACEMENT CHARACTER), one per offending unit, and
//! [`UnicodeString::replace_invalid`] rewrites them in place.
//!
//! # Case mapping
//!
//! `to_lower`, `to_upper` and `fold` implement the full mappings of the
//! Unicode Character Database, including the conditional rules of
//! `SpecialCasing.txt`:
//!
//! * Final sigma: U+03A3 lowercases to U+03C2 at the end of a word.
//! * Turkic (`tr`, `az`): dotted and dotless I map to each other.
//! * Lithuanian (`lt`): an explicit dot above is kept on lowercase i and j
//!   when another accent follows, and removed again when uppercasing.
//!
//! ```
//! use unistr::Utf16String;
//!
//! let s = Utf16String::from("\u{39F}\u{3A3}");
//! assert_eq!(s.to_lower("").unwrap(), "\u{3BF}\u{3C2}");
//! assert_eq!(Utf16String::from("I").to_lower("tr").unwrap(), "\u{131}");
//! ```
//!
//! # Errors
//!
//! Operations that grow a string return [`Error::CapacityOverflow`] when the
//! buffer cannot be reserved, instead of aborting the process.

pub mod casing;

pub mod codec;

pub mod props;

pub(crate) mod tables;

pub(crate) mod codepoints;

pub(crate) mod error;

pub(crate) mod unicode_str_ty;

pub(crate) mod unicode_string;

pub use casing::CaseMode;

pub use codec::{CodeUnit, REPLACEMENT_CHARACTER};

pub use codepoints::{CodepointIndices, Codepoints};

pub use error::{Error, Result};

pub use props::Language;

pub use unicode_str_ty::{Split, UnicodeStr};

pub use unicode_string::{UnicodeString, Utf16String, Utf32String, Utf8String};

/// A UTF-8 string slice.
pub type Utf8Str = UnicodeStr<u8>;

/// A UTF-16 string slice.
pub type Utf16Str = UnicodeStr<u16>;

/// A UTF-32 string slice.
pub type Utf32Str = UnicodeStr<u32>;
