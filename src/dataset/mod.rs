//! Categorical datasets
//!
//! This module implements the row table used by the rule-induction
//! algorithms together with various helper traits to extend its
//! functionality. Attribute values are discrete tokens, either small
//! integer category codes produced by an upstream discretization stage or
//! free-form string labels; equality is exact and the two variants never
//! compare equal to each other.
use std::fmt;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

mod impl_table;

/// A single categorical attribute value
///
/// Values are a discriminated variant: either an integer category code or a
/// string label. There is no implicit coercion, `Int(1)` and `Str("1")` are
/// different values. The untagged serde representation keeps integer codes
/// as JSON integers and labels as JSON strings, so a round trip through a
/// rule document restores the exact variant.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", untagged)
)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttrValue {
    Int(i64),
    Str(String),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Int(v) => write!(f, "{}", v),
            AttrValue::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Str(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Str(s)
    }
}

/// RowTable
///
/// The fundamental structure of a categorical dataset. It owns a number of
/// records, one string class label per record, and the declared feature
/// names. Row identity is the row index, so duplicate records stay
/// distinguishable when working sets are intersected during induction.
///
/// The table is immutable once constructed. Construction also fixes the
/// enumeration order used by the induction algorithms: feature domains and
/// the class list are collected in first-seen order over the full table,
/// which keeps candidate enumeration and therefore the emitted rule sets
/// deterministic.
///
/// # Fields
///
/// * `records`: one `Vec<AttrValue>` per row, in declared feature order
/// * `labels`: the class label of each row
/// * `feature_names`: declared feature names with dimensionality (nfeatures)
/// * `class_name`: name of the class column, distinct from every feature
#[derive(Debug, Clone, PartialEq)]
pub struct RowTable {
    records: Vec<Vec<AttrValue>>,
    labels: Vec<String>,
    feature_names: Vec<String>,
    class_name: String,
    domains: Vec<Vec<AttrValue>>,
    classes: Vec<String>,
}
