//! Bridge from form validation results to domain errors

use marketfeed_common::validation::{ValidationResult, Validator};
use marketfeed_domain::{MarketError, Result};

/// Converts a finished [`Validator`] pass into a domain [`Result`].
pub trait IntoMarketResult<T> {
    fn into_market(self) -> Result<T>;
}

impl<T> IntoMarketResult<T> for ValidationResult<T> {
    fn into_market(self) -> Result<T> {
        self.map_err(|err| MarketError::Validation(err.to_string()))
    }
}

/// Run `build` against a fresh validator and finalize it.
pub fn validate(build: impl FnOnce(&mut Validator)) -> Result<()> {
    let mut validator = Validator::new();
    build(&mut validator);
    validator.finalize().into_market()
}
