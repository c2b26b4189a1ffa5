//! # alphaseq-core
//!
//! Fixed-length letter sequence enumeration in successor order.
//!
//! A [`LetterSequence`] starts from a seed such as `"aaa"` and enumerates
//! every value reachable by repeated successor steps (`"aab"`, `"aac"`, up
//! to the all-`'z'` or all-`'Z'` terminal value), the way spreadsheet
//! columns are named. Case is preserved position by position throughout.
//!
//! ## Usage
//!
//! ```rust
//! use alphaseq_core::LetterSequence;
//!
//! let sequence = LetterSequence::from_text("aay")?;
//! assert_eq!(sequence.case_count(), 17_576);
//!
//! let mut successors = sequence.successors();
//! assert_eq!(successors.next().as_deref(), Some("aaz"));
//! assert_eq!(successors.next().as_deref(), Some("aba"));
//! # Ok::<(), alphaseq_core::SequenceError>(())
//! ```
//!
//! ## Traversal ownership
//!
//! Every call to [`LetterSequence::successors`] hands out an iterator with
//! its own private copy of the seed buffer, so traversals never observe each
//! other's progress. The seed itself is never emitted; read it via
//! [`LetterSequence::seed`] before iterating.

pub mod case;
pub mod iter;
pub mod sequence;

pub use case::LetterCase;
pub use iter::Successors;
pub use sequence::{LetterSequence, SequenceError, SEQUENCE_LEN_MAX};
