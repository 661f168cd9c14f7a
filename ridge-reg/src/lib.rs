//! Ridge regression solved through the singular value decomposition
//!
//! Factorizing the column-scaled design matrix and shrinking its singular
//! values stays numerically stable where the textbook normal-equation solve
//! breaks down, in particular for ill-conditioned designs and for designs
//! with more columns than rows.

#![deny(unused_imports, unused_crate_dependencies)]
#![warn(missing_docs)]

#[macro_use]
extern crate log;

mod errors;
mod ridge_regression;
mod scaling;

pub use errors::RidgeError;
pub use ridge_regression::{RidgeRegression, SINGULAR_VALUE_FLOOR};
