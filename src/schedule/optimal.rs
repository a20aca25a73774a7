//! Optimal learning rate for regularized SGD.

use super::*;

/// Optimal learning rate.
///
/// rate(t) = 1 / (alpha * (t + t0))
///
/// The step size from Bottou's analysis of SGD with L2 regularization
/// strength `alpha`. `t0` shifts the effective start so the first updates
/// are not huge. When `alpha * (t + t0)` is zero the rate is infinite.
///
/// References: <https://leon.bottou.org/projects/sgd>
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OptimalSchedule {
    #[serde(default = "OptimalSchedule::default_t0")]
    pub t0: f64,
    #[serde(default = "OptimalSchedule::default_alpha")]
    pub alpha: f64,
}

impl OptimalSchedule {
    pub fn new(t0: f64, alpha: f64) -> Self {
        Self { t0, alpha }
    }
    fn default_t0() -> f64 {
        OPTIMAL_T0
    }
    fn default_alpha() -> f64 {
        OPTIMAL_ALPHA
    }
}

impl Default for OptimalSchedule {
    fn default() -> Self {
        Self::new(OPTIMAL_T0, OPTIMAL_ALPHA)
    }
}

impl LearningRateSchedule for OptimalSchedule {
    fn rate_at(&self, step: Step) -> Rate {
        1. / (self.alpha * (step as f64 + self.t0))
    }
}
