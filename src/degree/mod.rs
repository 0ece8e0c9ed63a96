//! Degree descriptor recognition.
//!
//! - [`dictionary`] — abbreviation → [`Rank`](crate::models::Rank) map that grows during a run,
//!   plus its derived alternation pattern.
//! - [`extractor`] — pulls an embedded abbreviation (`" - PHD"`, `"(MBA)"`) out of a descriptor.
//! - [`recognizer`] — lookup, base-pattern and fuzzy matching strategies.
//! - [`pipeline`] — the three-pass driver that labels a whole batch.

pub mod dictionary;
pub mod extractor;
pub mod pipeline;
pub mod recognizer;
