use core::fmt;

/// Result alias for `ember`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the input-validation boundary.
///
/// Validation runs before any distance or tree work, so a failed call
/// produces no partial results. An empty detection list is not an error
/// anywhere in this crate; it clusters to an empty result.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Wrong number of coordinate values for a point.
    DimensionMismatch {
        /// Expected coordinate count.
        expected: usize,
        /// Found coordinate count.
        found: usize,
    },

    /// A coordinate value was NaN or infinite.
    NonFiniteCoordinate {
        /// Axis name, `"x"` or `"y"`.
        axis: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DimensionMismatch { expected, found } => {
                write!(
                    f,
                    "dimension mismatch: expected {expected} coordinate values, found {found}"
                )
            }
            Error::NonFiniteCoordinate { axis } => {
                write!(f, "coordinate '{axis}' is not finite")
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_dimension_mismatch() {
        let err = Error::DimensionMismatch {
            expected: 2,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "dimension mismatch: expected 2 coordinate values, found 3"
        );
    }

    #[test]
    fn test_display_non_finite() {
        let err = Error::NonFiniteCoordinate { axis: "y" };
        assert_eq!(err.to_string(), "coordinate 'y' is not finite");
    }
}
