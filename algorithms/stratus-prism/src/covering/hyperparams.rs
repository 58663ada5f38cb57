use stratus::ParamGuard;

use crate::error::PrismError;
use crate::Prism;

/// The set of hyperparameters that can be specified for fitting a
/// [PRISM](crate::Prism) rule set.
///
/// ### Example
///
/// ```rust
/// use stratus::prelude::*;
/// use stratus_prism::Prism;
///
/// // Initialize the default set of parameters
/// let params = Prism::params();
/// // Accept impure rules once they reach 80% purity, cap rule length
/// let params = params.min_purity(0.8).max_conditions(Some(3));
///
/// let table = stratus_datasets::weather();
/// let model = params.fit(&table).unwrap();
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PrismValidParams {
    min_purity: f64,
    max_conditions: Option<usize>,
}

impl PrismValidParams {
    /// Purity a growing rule must reach before it stops gaining conditions
    pub fn min_purity(&self) -> f64 {
        self.min_purity
    }

    /// Optional cap on the number of conditions in one antecedent
    pub fn max_conditions(&self) -> Option<usize> {
        self.max_conditions
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PrismParams(PrismValidParams);

impl PrismParams {
    pub fn new() -> Self {
        Self(PrismValidParams {
            min_purity: 1.0,
            max_conditions: None,
        })
    }

    /// Sets the purity at which a growing rule is considered finished
    ///
    /// With the default of `1.0` a rule keeps gaining conditions until it
    /// covers only rows of its target class or no candidate is left.
    pub fn min_purity(mut self, min_purity: f64) -> Self {
        self.0.min_purity = min_purity;
        self
    }

    /// Sets the optional limit on antecedent length
    pub fn max_conditions(mut self, max_conditions: Option<usize>) -> Self {
        self.0.max_conditions = max_conditions;
        self
    }
}

impl Default for PrismParams {
    fn default() -> Self {
        Self::new()
    }
}

impl Prism {
    /// Defaults are provided if the optional parameters are not specified:
    /// * `min_purity = 1.0`
    /// * `max_conditions = None`
    pub fn params() -> PrismParams {
        PrismParams::new()
    }
}

impl ParamGuard for PrismParams {
    type Checked = PrismValidParams;
    type Error = PrismError;

    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        if !(self.0.min_purity > 0.0 && self.0.min_purity <= 1.0) {
            Err(PrismError::InvalidMinPurity(self.0.min_purity))
        } else if self.0.max_conditions == Some(0) {
            Err(PrismError::InvalidConditionCap(0))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratus::ParamGuard;

    #[test]
    #[should_panic]
    fn panic_on_zero_min_purity() {
        Prism::params().min_purity(0.0).check_unwrap();
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        assert!(matches!(
            Prism::params().min_purity(1.5).check(),
            Err(PrismError::InvalidMinPurity(_))
        ));
        assert!(matches!(
            Prism::params().max_conditions(Some(0)).check(),
            Err(PrismError::InvalidConditionCap(0))
        ));
        assert!(Prism::params().check().is_ok());
    }
}
