//! Inverse scaling (polynomial decay) learning rate.

use super::*;

/// Inverse scaling learning rate.
///
/// rate(t) = base_rate / (t + 1)^power
///
/// Offsetting by one keeps step 0 finite. Non-increasing whenever
/// `power` and `base_rate` are positive; `power = 0` is a constant schedule
/// and a negative `power` grows without bound.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InverseScalingSchedule {
    pub base_rate: Rate,
    #[serde(default = "InverseScalingSchedule::default_power")]
    pub power: f64,
}

impl InverseScalingSchedule {
    /// Inverse scaling with the default `power` of 0.5.
    pub fn new(base_rate: Rate) -> Self {
        Self::with_power(base_rate, INVSCALING_POWER)
    }
    pub fn with_power(base_rate: Rate, power: f64) -> Self {
        Self { base_rate, power }
    }
    fn default_power() -> f64 {
        INVSCALING_POWER
    }
}

impl LearningRateSchedule for InverseScalingSchedule {
    fn rate_at(&self, step: Step) -> Rate {
        let t = step as f64 + 1.;
        self.base_rate / t.powf(self.power)
    }
}
