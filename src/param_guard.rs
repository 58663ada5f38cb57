use crate::traits::Fit;

/// A set of hyperparameters whose values have not been checked for validity. A reference to the
/// checked hyperparameters can only be obtained after checking has completed. If the `Fit`
/// trait has been implemented on the checked hyperparameters, it is also implemented on the
/// unchecked hyperparameters with the checking step done automatically.
///
/// The hyperparameter validation done in `check_ref()` and `check()` should be identical.
pub trait ParamGuard {
    /// The checked hyperparameters
    type Checked;
    /// Error type resulting from failed hyperparameter checking
    type Error;

    /// Checks the hyperparameters and returns a reference to them if successful
    fn check_ref(&self) -> std::result::Result<&Self::Checked, Self::Error>;

    /// Checks the hyperparameters and returns them if successful
    fn check(self) -> std::result::Result<Self::Checked, Self::Error>;

    /// Calls `check()` and unwraps the result
    fn check_unwrap(self) -> Self::Checked
    where
        Self: Sized,
        Self::Error: std::fmt::Debug,
    {
        self.check().unwrap()
    }
}

/// Performs the checking step and calls `fit` on the checked hyperparameters. If checking was
/// successful, the fitted model is returned, otherwise the checking error.
impl<D, E, P> Fit<D, E> for P
where
    P: ParamGuard,
    E: From<<P as ParamGuard>::Error>,
    <P as ParamGuard>::Checked: Fit<D, E>,
{
    type Object = <<P as ParamGuard>::Checked as Fit<D, E>>::Object;

    fn fit(&self, dataset: &D) -> std::result::Result<Self::Object, E> {
        let checked = self.check_ref().map_err(E::from)?;
        checked.fit(dataset)
    }
}
