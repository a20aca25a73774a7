//! Constant learning rate.

use super::*;

/// Constant learning rate.
///
/// Ignores the step entirely. Useful as a baseline, or when decay is
/// already folded into the tuned rate.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConstantSchedule {
    pub rate: Rate,
}

impl ConstantSchedule {
    pub fn new(rate: Rate) -> Self {
        Self { rate }
    }
}

impl LearningRateSchedule for ConstantSchedule {
    fn rate_at(&self, _: Step) -> Rate {
        self.rate
    }
}
