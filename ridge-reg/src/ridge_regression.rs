use nalgebra::{DMatrix, DVector, Dyn, SVD};

use crate::{errors::RidgeError, scaling};

/// Singular values below this floor are treated as exactly zero and their
/// direction is dropped from the reconstruction entirely
pub const SINGULAR_VALUE_FLOOR: f64 = 1e-15;

/// Ridge regression aka Tikhonov regularization, solved through the thin
/// singular value decomposition of the column-scaled design matrix
///
/// Each design column is scaled to unit root mean square before
/// factorizing, so the penalty shrinks every feature comparably. The
/// factorization is computed on the first call to [`Self::fit`] and cached
/// write-once for the lifetime of the instance: the design matrix is fixed
/// at construction and only the shrinkage applied to the singular values
/// depends on the penalty, so re-solving via [`Self::set_penalty`] and
/// [`Self::fit`] reuses the cached factors.
#[derive(Debug, Clone)]
pub struct RidgeRegression {
    x: DMatrix<f64>,
    y: DVector<f64>,
    l2_penalty: f64,
    scales: DVector<f64>,
    scaled_x: DMatrix<f64>,
    svd: Option<SVD<f64, Dyn, Dyn>>,
    coefficients: DVector<f64>,
    fitted: DVector<f64>,
    residuals: DVector<f64>,
    coef_variances: Option<DVector<f64>>,
}

impl RidgeRegression {
    /// Create a new ridge regression of `y` onto the columns of `x`
    ///
    /// # Parameters
    /// x: Design matrix with one row per observation
    /// y: Response vector, aligned row-for-row with `x`
    /// l2_penalty: Non-negative ridge penalty; 0 reduces the solve to
    /// ordinary least squares
    pub fn new(x: DMatrix<f64>, y: DVector<f64>, l2_penalty: f64) -> Result<Self, RidgeError> {
        let (rows, cols) = x.shape();
        if rows == 0 || cols == 0 || rows != y.len() {
            return Err(RidgeError::InvalidShape {
                rows,
                cols,
                y_len: y.len(),
            });
        }
        if l2_penalty < 0.0 {
            return Err(RidgeError::NegativePenalty(l2_penalty));
        }

        let scales = scaling::rms_scales(&x);
        if let Some(col) = scales.iter().position(|s| *s == 0.0) {
            return Err(RidgeError::DegenerateColumn(col));
        }
        let scaled_x = scaling::scale_columns(&x, &scales);

        Ok(Self {
            coefficients: DVector::zeros(cols),
            fitted: DVector::zeros(rows),
            residuals: DVector::zeros(rows),
            coef_variances: None,
            svd: None,
            x,
            y,
            l2_penalty,
            scales,
            scaled_x,
        })
    }

    /// Solve for the coefficients at the current penalty and derive fitted
    /// values, residuals and coefficient variances from them
    ///
    /// May be called repeatedly; only the first call factorizes the scaled
    /// design matrix.
    pub fn fit(&mut self) {
        if self.svd.is_none() {
            trace!(
                "factorizing {}x{} scaled design matrix",
                self.scaled_x.nrows(),
                self.scaled_x.ncols()
            );
            self.svd = Some(self.scaled_x.clone().svd(true, true));
        }
        let svd = self.svd.as_ref().expect("cached right above");
        let u = svd.u.as_ref().expect("thin SVD was requested with U");
        let v_t = svd.v_t.as_ref().expect("thin SVD was requested with V");

        // shrink each singular value into its reconstruction factor
        let shrink = DVector::from_fn(svd.singular_values.len(), |i, _| {
            let s = svd.singular_values[i];
            if s < SINGULAR_VALUE_FLOOR {
                0.0
            } else {
                s / (s * s + self.l2_penalty)
            }
        });

        // z maps the responses straight to scaled coefficients and doubles
        // as the propagator of the residual variance below
        let z = v_t.transpose() * DMatrix::from_diagonal(&shrink) * u.transpose();

        let coef_scaled = &z * &self.y;
        let coefficients = coef_scaled.component_div(&self.scales);
        let fitted = &self.x * &coefficients;
        let residuals = &self.y - &fitted;

        let (rows, cols) = self.x.shape();
        self.coef_variances = if rows > cols {
            let error_variance = residuals.norm_squared() / (rows - cols) as f64;
            debug!(
                "residual variance {} on {} degrees of freedom",
                error_variance,
                rows - cols
            );
            let covariance = error_variance * (&z * z.transpose());

            Some(covariance.diagonal())
        } else {
            None
        };

        self.coefficients = coefficients;
        self.fitted = fitted;
        self.residuals = residuals;
    }

    /// Replace the ridge penalty for the next call to [`Self::fit`]
    ///
    /// The cached factorization is kept, as it does not depend on the
    /// penalty.
    pub fn set_penalty(&mut self, l2_penalty: f64) -> Result<(), RidgeError> {
        if l2_penalty < 0.0 {
            return Err(RidgeError::NegativePenalty(l2_penalty));
        }
        self.l2_penalty = l2_penalty;

        Ok(())
    }

    /// The current ridge penalty
    #[inline(always)]
    pub fn l2_penalty(&self) -> f64 {
        self.l2_penalty
    }

    /// Root mean square scale of each design column
    #[inline(always)]
    pub fn scales(&self) -> &DVector<f64> {
        &self.scales
    }

    /// The solved coefficients, in the units of the original columns
    #[inline(always)]
    pub fn coefficients(&self) -> &DVector<f64> {
        &self.coefficients
    }

    /// Predictions for the rows of the training design matrix
    #[inline(always)]
    pub fn fitted(&self) -> &DVector<f64> {
        &self.fitted
    }

    /// Per-observation difference between response and fitted value
    #[inline(always)]
    pub fn residuals(&self) -> &DVector<f64> {
        &self.residuals
    }

    /// Sampling variance of each coefficient: the diagonal of the estimated
    /// coefficient covariance matrix, with no square root taken
    ///
    /// Available once [`Self::fit`] has run on a problem with more
    /// observations than features.
    pub fn coef_variances(&self) -> Result<&DVector<f64>, RidgeError> {
        let (rows, cols) = self.x.shape();

        self.coef_variances
            .as_ref()
            .ok_or(RidgeError::InsufficientDegreesOfFreedom { rows, cols })
    }

    /// Apply the fitted coefficients to new observations
    #[must_use]
    pub fn predict(&self, x: &DMatrix<f64>) -> DVector<f64> {
        x * &self.coefficients
    }
}
