//! Runtime selection of a learning rate schedule.

mod notation;

use crate::*;
use anyhow::Context;
use anyhow::bail;
use serde::Deserialize;
use serde::Serialize;

/// Any of the built-in schedules, chosen at runtime.
///
/// Deserializes from a tagged JSON object. Omitted `power`, `t0` and `alpha`
/// take their defaults:
///
/// ```json
/// { "kind": "constant", "rate": 0.1 }
/// { "kind": "inverse_scaling", "base_rate": 1.0, "power": 0.25 }
/// { "kind": "optimal" }
/// ```
///
/// Also parses from and displays as compact notation such as
/// `invscaling(1, 0.25)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Schedule {
    Constant(ConstantSchedule),
    InverseScaling(InverseScalingSchedule),
    Optimal(OptimalSchedule),
}

impl Schedule {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let schedule = serde_json::from_str::<Self>(json).context("parse schedule configuration")?;
        log::debug!("configured learning rate schedule {}", schedule);
        Ok(schedule)
    }
    /// JSON has no encoding for `inf` or `NaN`, so such parameters are an error.
    pub fn to_json(&self) -> anyhow::Result<String> {
        let finite = match self {
            Self::Constant(s) => s.rate.is_finite(),
            Self::InverseScaling(s) => s.base_rate.is_finite() && s.power.is_finite(),
            Self::Optimal(s) => s.t0.is_finite() && s.alpha.is_finite(),
        };
        if !finite {
            bail!("non-finite parameter in {} has no JSON encoding", self);
        }
        serde_json::to_string(self).context("serialize schedule configuration")
    }
    /// Reads a JSON schedule configuration from disk.
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read schedule configuration {}", path.display()))?;
        Self::from_json(&json)
    }
}

impl LearningRateSchedule for Schedule {
    fn rate_at(&self, step: Step) -> Rate {
        match self {
            Self::Constant(s) => s.rate_at(step),
            Self::InverseScaling(s) => s.rate_at(step),
            Self::Optimal(s) => s.rate_at(step),
        }
    }
}

impl From<ConstantSchedule> for Schedule {
    fn from(schedule: ConstantSchedule) -> Self {
        Self::Constant(schedule)
    }
}
impl From<InverseScalingSchedule> for Schedule {
    fn from(schedule: InverseScalingSchedule) -> Self {
        Self::InverseScaling(schedule)
    }
}
impl From<OptimalSchedule> for Schedule {
    fn from(schedule: OptimalSchedule) -> Self {
        Self::Optimal(schedule)
    }
}
