use thiserror::Error;

/// Main error type for Vanna pricing operations.
#[derive(Error, Debug)]
pub enum VannaError {
    /// A pricing precondition failed; raised before any computation runs.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The implied-volatility target price lies outside the price range
    /// spanned by the volatility bracket endpoints. Widen the bracket and
    /// retry.
    #[error("Target price not bracketed by volatility interval ({low}, {high})")]
    NotBracketed { low: f64, high: f64 },
}

/// Result type alias for Vanna operations.
pub type VannaResult<T> = Result<T, VannaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let e = VannaError::InvalidInput("spot must be > 0".to_string());
        assert!(e.to_string().contains("Invalid input"));
        assert!(e.to_string().contains("spot must be > 0"));
    }

    #[test]
    fn test_not_bracketed_display() {
        let e = VannaError::NotBracketed {
            low: 1e-6,
            high: 5.0,
        };
        let s = e.to_string();
        assert!(s.contains("not bracketed"));
        assert!(s.contains('5'));
    }
}
