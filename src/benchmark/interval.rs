//! Fisher z-transform confidence interval for a correlation coefficient

use crate::error::{EvalError, EvalResult};

/// Two-sided 95% normal quantile
const Z_95: f64 = 1.96;

/// Confidence interval around a correlation coefficient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// 95% confidence interval for `rho` measured on `sample_size` pairs
///
/// `z = atanh(rho)`, `margin = 1.96 / sqrt(n - 3)`, bounds are
/// `tanh(z ± margin)`. Needs at least 4 samples. `rho = ±1` collapses to
/// `(±1, ±1)`.
pub fn confidence_interval(rho: f64, sample_size: usize) -> EvalResult<ConfidenceInterval> {
    if sample_size <= 3 {
        return Err(EvalError::domain(format!(
            "confidence interval needs at least 4 pairs, got {}",
            sample_size
        )));
    }
    if !(-1.0..=1.0).contains(&rho) {
        return Err(EvalError::domain(format!(
            "correlation {} outside [-1, 1]",
            rho
        )));
    }

    let z = rho.atanh();
    let margin = Z_95 / ((sample_size - 3) as f64).sqrt();

    Ok(ConfidenceInterval {
        lower: (z - margin).tanh(),
        upper: (z + margin).tanh(),
    })
}
