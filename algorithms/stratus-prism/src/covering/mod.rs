mod algorithm;
mod document;
mod evaluate;
mod hyperparams;
mod rules;

pub use algorithm::*;
pub use hyperparams::*;
pub use rules::*;
