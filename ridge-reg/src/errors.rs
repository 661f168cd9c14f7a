use thiserror::Error;

/// The errors reported by [`RidgeRegression`](crate::RidgeRegression)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RidgeError {
    /// The design matrix is empty or disagrees with the response vector on
    /// the number of observations
    #[error("invalid problem shape: {rows}x{cols} design matrix with {y_len} responses")]
    InvalidShape {
        /// Rows of the design matrix
        rows: usize,
        /// Columns of the design matrix
        cols: usize,
        /// Length of the response vector
        y_len: usize,
    },

    /// The ridge penalty is negative
    #[error("ridge penalty must be non-negative, got {0}")]
    NegativePenalty(f64),

    /// A design column has zero root mean square, so it cannot be scaled
    #[error("column {0} of the design matrix has zero root mean square")]
    DegenerateColumn(usize),

    /// Coefficient variances were requested without positive degrees of
    /// freedom
    #[error("variance estimation requires more than {cols} rows, got {rows}")]
    InsufficientDegreesOfFreedom {
        /// Rows of the design matrix
        rows: usize,
        /// Columns of the design matrix
        cols: usize,
    },
}
