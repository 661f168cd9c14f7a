#[macro_use]
extern crate log;

use nalgebra::{DMatrix, DVector};
use ridge_reg::RidgeRegression;

/// Longley macroeconomic series, 1947 to 1962: GNP deflator, GNP,
/// unemployed, armed forces, non-institutional population and year, with
/// total employment as the response. The predictors are heavily collinear,
/// which makes the normal-equation solve notoriously fragile here.
#[rustfmt::skip]
const LONGLEY: [[f64; 7]; 16] = [
    [83.0,  234.289, 235.6, 159.0, 107.608, 1947.0, 60.323],
    [88.5,  259.426, 232.5, 145.6, 108.632, 1948.0, 61.122],
    [88.2,  258.054, 368.2, 161.6, 109.773, 1949.0, 60.171],
    [89.5,  284.599, 335.1, 165.0, 110.929, 1950.0, 61.187],
    [96.2,  328.975, 209.9, 309.9, 112.075, 1951.0, 63.221],
    [98.1,  346.999, 193.2, 359.4, 113.270, 1952.0, 63.639],
    [99.0,  365.385, 187.0, 354.7, 115.094, 1953.0, 64.989],
    [100.0, 363.112, 357.8, 335.0, 116.219, 1954.0, 63.761],
    [101.2, 397.469, 290.4, 304.8, 117.388, 1955.0, 66.019],
    [104.6, 419.180, 282.2, 285.7, 118.734, 1956.0, 67.857],
    [108.4, 442.769, 293.6, 279.8, 120.445, 1957.0, 68.169],
    [110.8, 444.546, 468.1, 263.7, 121.950, 1958.0, 66.513],
    [112.6, 482.704, 381.3, 255.2, 123.366, 1959.0, 68.655],
    [114.2, 502.601, 393.1, 251.4, 125.368, 1960.0, 69.564],
    [115.7, 518.173, 480.6, 257.2, 127.852, 1961.0, 69.331],
    [116.9, 554.894, 400.7, 282.7, 130.081, 1962.0, 70.551],
];

const PENALTIES: [f64; 5] = [0.0, 0.001, 0.01, 0.1, 1.0];

fn main() {
    pretty_env_logger::init();

    let (x, y) = design();
    info!("fitting {} observations with {} columns", x.nrows(), x.ncols());

    // one instance for the whole sweep, so the factorization is reused
    let mut model =
        RidgeRegression::new(x, y, PENALTIES[0]).expect("the Longley design is well formed");
    for l2_penalty in PENALTIES {
        model.set_penalty(l2_penalty).expect("penalties are non-negative");
        model.fit();

        let rms_residual = model.residuals().norm() / (model.residuals().len() as f64).sqrt();
        info!("lambda {:>6.3}: residual rms {:.5}", l2_penalty, rms_residual);
        info!("  coefficients: {:.5}", model.coefficients().transpose());
        match model.coef_variances() {
            Ok(variances) => info!("  variances: {:.5}", variances.transpose()),
            Err(e) => warn!("no variances: {}", e),
        }
    }
}

/// Assemble the design matrix with a leading intercept column of ones
fn design() -> (DMatrix<f64>, DVector<f64>) {
    let x = DMatrix::from_fn(LONGLEY.len(), 7, |i, j| {
        if j == 0 {
            1.0
        } else {
            LONGLEY[i][j - 1]
        }
    });
    let y = DVector::from_fn(LONGLEY.len(), |i, _| LONGLEY[i][6]);

    (x, y)
}
