use std::fmt;

/// Error types for circuit construction and sweep evaluation
#[derive(Clone, Debug, PartialEq)]
pub enum CircuitError {
    InvalidParameter(String),
    EmptySweep(String),
    DivisionByZero(String),
    SweepTooLong(String),
    SearchFailed(String),
}

impl fmt::Display for CircuitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CircuitError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            CircuitError::EmptySweep(msg) => write!(f, "Empty frequency sweep: {}", msg),
            CircuitError::DivisionByZero(msg) => write!(f, "Division by zero: {}", msg),
            CircuitError::SweepTooLong(msg) => write!(f, "Sweep exceeds point limit: {}", msg),
            CircuitError::SearchFailed(msg) => write!(f, "Search failed: {}", msg),
        }
    }
}

impl std::error::Error for CircuitError {}

/// Non-fatal report raised when the resonant frequency of a circuit lies
/// outside its configured sweep window. Construction still succeeds; the
/// caller decides whether to adjust the bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutOfBoundsWarning {
    pub res_freq: f64,
    pub f_lower: f64,
    pub f_upper: f64,
}

impl fmt::Display for OutOfBoundsWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "resonant frequency {:.6e} Hz outside sweep bounds [{:.6e}, {:.6e}) Hz",
            self.res_freq, self.f_lower, self.f_upper
        )
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CircuitError::InvalidParameter("inductance must be > 0".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid parameter: inductance must be > 0"
        );

        let err = CircuitError::DivisionByZero("zero angular frequency".to_string());
        assert!(format!("{}", err).starts_with("Division by zero"));
    }

    #[test]
    fn warning_display_lists_bounds() {
        let warn = OutOfBoundsWarning {
            res_freq: 7.0e9,
            f_lower: 8.0e9,
            f_upper: 15.0e9,
        };
        let msg = format!("{}", warn);
        assert!(msg.contains("7.000000e9"));
        assert!(msg.contains("8.000000e9"));
        assert!(msg.contains("15.000000e9"));
    }
}
