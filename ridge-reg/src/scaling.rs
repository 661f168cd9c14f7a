//! Column scaling of the design matrix
//!
//! Each column is divided by its root mean square magnitude, so that the
//! ridge penalty shrinks every feature on a comparable footing regardless of
//! the feature's native units.

use nalgebra::{DMatrix, DVector};

/// Root mean square magnitude of each column of `x`
///
/// A column of all zeros yields a zero scale, which cannot be divided by;
/// callers must reject such columns before scaling.
pub(crate) fn rms_scales(x: &DMatrix<f64>) -> DVector<f64> {
    let n = x.nrows() as f64;

    DVector::from_fn(x.ncols(), |j, _| (x.column(j).norm_squared() / n).sqrt())
}

/// Divide each column of `x` by its scale factor, leaving `x` untouched
pub(crate) fn scale_columns(x: &DMatrix<f64>, scales: &DVector<f64>) -> DMatrix<f64> {
    DMatrix::from_fn(x.nrows(), x.ncols(), |i, j| x[(i, j)] / scales[j])
}
