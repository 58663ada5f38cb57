use stratus::dataset::AttrValue;
use thiserror::Error;

/// Simplified `Result` using [`PrismError`](crate::PrismError) as error type
pub type Result<T> = std::result::Result<T, PrismError>;

/// Error variants from hyper-parameter construction, induction or rule
/// document handling
#[derive(Error, Debug)]
pub enum PrismError {
    /// Invalid purity threshold
    #[error("invalid minimum purity {0}, must lie in (0, 1]")]
    InvalidMinPurity(f64),
    /// Invalid antecedent length cap
    #[error("invalid condition cap {0}, must be positive")]
    InvalidConditionCap(usize),
    /// The covering loop emitted a rule that removes no remaining row of
    /// its target class
    #[error("induction stalled: rule for class {0:?} covers no remaining rows of that class")]
    InductionStalled(String),
    /// A rule document references an attribute outside the table vocabulary
    #[error("rule references unknown attribute {0:?}")]
    UnknownAttribute(String),
    /// A rule document references a value outside the attribute's domain
    #[error("rule references unknown value {value} for attribute {attribute:?}")]
    UnknownValue {
        attribute: String,
        value: AttrValue,
    },
    #[error("malformed rule document: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    BaseCrate(#[from] stratus::error::Error),
}
