//! Context-sensitive case conversion.
//!
//! Conversion runs in two passes over a pre-decoded codepoint buffer. A
//! right-to-left pass records what follows every position
//! ([`LookaheadContext`]); the left-to-right pass then maps each codepoint
//! while keeping track of what preceded it ([`ForwardContext`]).
//!
//! ```
//! use unistr::casing::{convert, CaseMode};
//! use unistr::Language;
//!
//! let input = "ΟΣ".chars().collect::<Vec<_>>();
//! let mut out = String::new();
//! convert(&input, CaseMode::Lower, Language::Default, |c| out.push(c));
//! assert_eq!("ος", out);
//! ```

use crate::props::{self, Language};

const COMBINING_DOT_ABOVE: char = '\u{0307}';

/// What follows a codepoint, as seen by the special casing conditions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookaheadContext {
    /// A cased letter follows, with only case-ignorable codepoints between.
    pub followed_by_cased: bool,
    /// The next codepoint has combining class Above.
    pub more_above: bool,
    /// U+0307 follows before any codepoint of class Not Reordered or Above.
    pub before_dot: bool,
}

/// What preceded a codepoint, as seen by the special casing conditions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForwardContext {
    /// A cased letter precedes, with only case-ignorable codepoints between.
    pub preceded_by_cased: bool,
    /// A soft-dotted letter precedes, with no combining-class reset between.
    pub after_soft_dotted: bool,
    /// U+0049 precedes, with no combining-class reset between.
    pub after_i: bool,
}

impl ForwardContext {
    /// Updates the context after `c` has been converted.
    pub fn update(&mut self, c: char) {
        if props::is_cased(c) {
            self.preceded_by_cased = true;
        } else if !props::is_case_ignorable(c) {
            self.preceded_by_cased = false;
        }

        let resets = props::canonical_combining_class(c).resets_casing_context();
        if props::is_soft_dotted(c) {
            self.after_soft_dotted = true;
        } else if resets {
            self.after_soft_dotted = false;
        }

        if c == 'I' {
            self.after_i = true;
        } else if resets {
            self.after_i = false;
        }
    }
}

/// Direction of a case conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseMode {
    /// Full lowercase mapping.
    Lower,
    /// Full uppercase mapping.
    Upper,
    /// Full case folding, for caseless comparison.
    Fold,
}

/// Computes the lookahead context of every position of `input`.
pub fn lookahead(input: &[char]) -> Vec<LookaheadContext> {
    let mut contexts = vec![LookaheadContext::default(); input.len()];
    let mut next = LookaheadContext::default();
    for i in (0..input.len()).rev() {
        contexts[i] = next;

        let c = input[i];
        let ccc = props::canonical_combining_class(c);
        next = LookaheadContext {
            followed_by_cased: if props::is_cased(c) {
                true
            } else if props::is_case_ignorable(c) {
                next.followed_by_cased
            } else {
                false
            },
            more_above: ccc == props::CombiningClass::Above,
            before_dot: if c == COMBINING_DOT_ABOVE {
                true
            } else if ccc.resets_casing_context() {
                false
            } else {
                next.before_dot
            },
        };
    }
    contexts
}

/// Converts the case of `input`, passing every output codepoint to `emit`.
pub fn convert<F>(input: &[char], mode: CaseMode, lang: Language, mut emit: F)
where
    F: FnMut(char),
{
    if input.is_empty() {
        return;
    }
    match mode {
        CaseMode::Fold => {
            for &c in input {
                match props::special_fold(c, lang) {
                    Some(mapped) => mapped.into_iter().for_each(&mut emit),
                    None => emit(props::simple_fold(c)),
                }
            }
        }
        CaseMode::Lower | CaseMode::Upper => {
            let ahead = lookahead(input);
            let mut fwd = ForwardContext::default();
            for (&c, ahead) in input.iter().zip(&ahead) {
                let special = match mode {
                    CaseMode::Upper => props::special_upper(c, lang, &fwd, ahead),
                    _ => props::special_lower(c, lang, &fwd, ahead),
                };
                match special {
                    Some(mapped) => mapped.into_iter().for_each(&mut emit),
                    None => emit(match mode {
                        CaseMode::Upper => props::simple_upper(c),
                        _ => props::simple_lower(c),
                    }),
                }
                fwd.update(c);
            }
        }
    }
}

/// Converts the case of `input` into a new codepoint buffer.
pub fn convert_to_vec(input: &[char], mode: CaseMode, lang: Language) -> Vec<char> {
    let mut out = Vec::with_capacity(input.len());
    convert(input, mode, lang, |c| out.push(c));
    out
}
