//! Provide traits for different classes of algorithms
//!

/// Collection of rows with a known number of samples and features
pub trait Records {
    fn nsamples(&self) -> usize;
    fn nfeatures(&self) -> usize;
}

/// Fittable algorithms
///
/// A fittable algorithm takes a dataset and returns a model. Errors during
/// the fitting process are returned as `E`, which wraps the base crate error
/// for algorithm crates with their own error type.
pub trait Fit<D, E> {
    type Object;

    fn fit(&self, dataset: &D) -> std::result::Result<Self::Object, E>;
}

/// Predict a target for a collection of observations
pub trait Predict<D, T> {
    fn predict(&self, data: D) -> T;
}
