//! `stratus` provides the building blocks for rule-based classification of
//! categorical weather data.
//!
//! The upstream stages of the pipeline discretize continuous measurements
//! into small integer category codes and select which attributes are worth
//! offering to a learner. This crate picks up from there: it defines the
//! immutable [`RowTable`](dataset::RowTable) those stages produce, the
//! [`Fit`](traits::Fit)/[`Predict`](traits::Predict) seams the rule
//! induction algorithms plug into, and the scoring utilities used to judge
//! an induced rule set.
//!
//! The algorithms themselves live in the workspace members under
//! `algorithms/`, currently the PRISM-style covering engine in
//! `stratus-prism`. Sample data for tests and examples is provided by
//! `stratus-datasets`.
//!

pub mod dataset;
pub mod error;
mod metrics_classification;
mod param_guard;
pub mod prelude;
pub mod traits;

pub use dataset::{AttrValue, RowTable};
pub use param_guard::ParamGuard;

/// Common metrics functions for classification
pub mod metrics {
    pub use crate::metrics_classification::ConfusionMatrix;
}
