//! Errors raised at the parameter-validation boundary.
//!
//! The generator itself never fails; these are produced when a host asks
//! whether a parameter record is fit to regenerate from.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("invalid color {0:?}: expected #rrggbb or #rgb")]
    InvalidColor(String),
    #[error("branches must be at least 1")]
    ZeroBranches,
    #[error("{field} is not a finite number")]
    NonFinite { field: &'static str },
    #[error("{field} = {value} is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
