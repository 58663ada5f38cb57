//!
//! # Covering rule induction
//! `stratus-prism` provides a pure Rust implementation of the PRISM
//! covering algorithm for modular classification rules.
//!
//! # The big picture
//!
//! `stratus-prism` is a crate in the `stratus` ecosystem, a toolkit for
//! rule-based classification of categorical weather data.
//!
//! Covering algorithms induce an ordered list of conjunctive IF/THEN rules
//! directly, one class at a time: each emitted rule explains (covers) a
//! subset of the remaining rows of its target class, the covered rows are
//! removed and the search repeats until the class is exhausted. The result
//! reads as a report rather than a tree and is consumed downstream by a
//! fuzzy inference stage through a JSON rule document.
//!
//! # Current state
//!
//! `stratus-prism` currently provides an implementation of
//! [PRISM](Prism) induction for single-label classification, first-match
//! and majority-vote evaluation of rule sets, and the rule document
//! serializer.
//!

mod covering;
mod error;

pub use covering::*;
pub use error::{PrismError, Result};
