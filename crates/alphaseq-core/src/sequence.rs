//! The letter sequence value object.
//!
//! A [`LetterSequence`] holds a validated seed buffer and the number of
//! distinct values reachable from it, computed once at construction. The
//! actual enumeration lives in [`crate::iter::Successors`]; this module only
//! validates, counts, and hands out traversals.

use crate::case::{LetterCase, ALPHABET_LEN};
use crate::iter::Successors;

/// Maximum supported seed length.
///
/// 26^13 is the largest power of 26 that fits in a `u64`; longer seeds
/// would overflow the case count.
pub const SEQUENCE_LEN_MAX: usize = 13;

/// A fixed-length sequence of letters enumerable in successor order.
///
/// Construct from an explicit buffer ([`from_chars`]), from text
/// ([`from_text`]), or from a length with an all-`'A'`/`'a'` seed
/// ([`with_upper_case_seed`], [`with_lower_case_seed`]). Construction
/// validates every character and computes the case count up front; both the
/// seed and the count are immutable afterwards.
///
/// # Usage
///
/// ```rust
/// use alphaseq_core::LetterSequence;
///
/// let sequence = LetterSequence::from_text("zzu")?;
/// assert_eq!(sequence.case_count(), 676);
///
/// let mut successors = sequence.successors();
/// assert_eq!(successors.next().as_deref(), Some("zzv"));
/// # Ok::<(), alphaseq_core::SequenceError>(())
/// ```
///
/// [`from_chars`]: LetterSequence::from_chars
/// [`from_text`]: LetterSequence::from_text
/// [`with_upper_case_seed`]: LetterSequence::with_upper_case_seed
/// [`with_lower_case_seed`]: LetterSequence::with_lower_case_seed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSequence {
    seed: Vec<char>,
    case_count: u64,
}

impl LetterSequence {
    /// Create a sequence from an explicit character buffer.
    ///
    /// The buffer is copied; later changes to the original cannot affect the
    /// sequence. Every character must be an alphabetic letter (Unicode, not
    /// limited to ASCII).
    pub fn from_chars(initial: &[char]) -> Result<Self, SequenceError> {
        Self::validated(initial.to_vec())
    }

    /// Create a sequence from text.
    pub fn from_text(initial: &str) -> Result<Self, SequenceError> {
        Self::validated(initial.chars().collect())
    }

    /// Create a sequence seeded with `length` copies of `'A'`.
    ///
    /// # Panics
    ///
    /// Panics if `length` exceeds [`SEQUENCE_LEN_MAX`].
    #[must_use]
    pub fn with_upper_case_seed(length: usize) -> Self {
        Self::seeded(length, LetterCase::Upper)
    }

    /// Create a sequence seeded with `length` copies of `'a'`.
    ///
    /// # Panics
    ///
    /// Panics if `length` exceeds [`SEQUENCE_LEN_MAX`].
    #[must_use]
    pub fn with_lower_case_seed(length: usize) -> Self {
        Self::seeded(length, LetterCase::Lower)
    }

    fn seeded(length: usize, case: LetterCase) -> Self {
        assert!(
            length <= SEQUENCE_LEN_MAX,
            "seed length {length} exceeds the supported maximum of {SEQUENCE_LEN_MAX}"
        );

        let seed = vec![case.first(); length];
        let case_count = count_from(&seed);
        Self { seed, case_count }
    }

    /// Single validated-copy step every construction path funnels into.
    fn validated(seed: Vec<char>) -> Result<Self, SequenceError> {
        if seed.len() > SEQUENCE_LEN_MAX {
            return Err(SequenceError::TooLong { len: seed.len() });
        }

        for (index, &ch) in seed.iter().enumerate() {
            if !ch.is_alphabetic() {
                return Err(SequenceError::NotALetter { index, ch });
            }
        }

        let case_count = count_from(&seed);
        Ok(Self { seed, case_count })
    }

    /// Number of distinct values obtainable from the original seed, the
    /// terminal all-`'Z'`/`'z'` value included.
    ///
    /// Computed at construction; never changes afterwards.
    #[must_use]
    pub fn case_count(&self) -> u64 {
        self.case_count
    }

    /// The seed this sequence was constructed from.
    ///
    /// Traversals never emit the seed itself; read it here before iterating.
    #[must_use]
    pub fn seed(&self) -> String {
        self.seed.iter().collect()
    }

    /// Seed length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seed.len()
    }

    /// Whether the seed is empty (case count 0, nothing to enumerate).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seed.is_empty()
    }

    /// Start a traversal over the successors of the seed.
    ///
    /// Each traversal owns a private copy of the seed buffer, so any number
    /// of traversals can run without observing each other's progress. A
    /// traversal yields exactly `case_count() - 1` strings.
    #[must_use]
    pub fn successors(&self) -> Successors {
        Successors::new(self.seed.clone(), self.case_count)
    }
}

impl<'a> IntoIterator for &'a LetterSequence {
    type Item = String;
    type IntoIter = Successors;

    fn into_iter(self) -> Successors {
        self.successors()
    }
}

/// Count of distinct values reachable from `seed`.
///
/// Position 0 contributes `terminal - seed + 1` values when seeded at its
/// case's terminal letter (which evaluates to 1), otherwise 26. Every other
/// position contributes 26 regardless: in the generation model the trailing
/// positions range over the full alphabet.
fn count_from(seed: &[char]) -> u64 {
    if seed.is_empty() {
        return 0;
    }

    let mut count: u64 = 1;
    for (index, &ch) in seed.iter().enumerate() {
        let factor = match LetterCase::of(ch) {
            Some(case) if index == 0 && ch == case.terminal() => 1,
            _ => ALPHABET_LEN,
        };
        count *= factor;
    }

    debug_assert!(count > 0, "non-empty seed must reach at least itself");
    count
}

/// Errors produced by sequence construction and traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// A seed character was not an alphabetic letter.
    #[error("sequence contains {ch:?} at index {index}, which is not a letter")]
    NotALetter { index: usize, ch: char },

    /// The seed was longer than the supported maximum.
    #[error("sequence length {len} exceeds the supported maximum of {max}", max = SEQUENCE_LEN_MAX)]
    TooLong { len: usize },

    /// The traversal has already produced every reachable sequence.
    #[error("sequence traversal is exhausted")]
    Exhausted,
}
