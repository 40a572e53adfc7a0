use thiserror::Error;

/// Aggregation precondition failures
///
/// The transform refuses to run on missing input rather than silently
/// producing an empty result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("no cart data to aggregate")]
    NoCartData,

    #[error("no product data to aggregate")]
    NoProductData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(InputError::NoCartData.to_string(), "no cart data to aggregate");
        assert_eq!(
            InputError::NoProductData.to_string(),
            "no product data to aggregate"
        );
    }

    #[test]
    fn error_is_cloneable_and_comparable() {
        let err = InputError::NoCartData;
        assert_eq!(err.clone(), InputError::NoCartData);
        assert_ne!(err, InputError::NoProductData);
    }
}
