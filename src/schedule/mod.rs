//! Learning rate schedules.

mod constant;
mod invscaling;
mod optimal;
mod rates;

pub use constant::*;
pub use invscaling::*;
pub use optimal::*;
pub use rates::*;

use crate::*;

/// Maps an optimizer step to the learning rate used at that step.
///
/// Implementations are pure: the result depends only on the schedule's
/// parameters and `step`, never on earlier calls.
pub trait LearningRateSchedule {
    /// Learning rate at `step`.
    ///
    /// Degenerate parameters surface as whatever IEEE arithmetic produces
    /// (`inf` or `NaN`); nothing is validated here.
    fn rate_at(&self, step: Step) -> Rate;

    /// Same as `rate_at`, but a non-finite rate is an error.
    fn checked_rate_at(&self, step: Step) -> anyhow::Result<Rate> {
        let rate = self.rate_at(step);
        if rate.is_finite() {
            Ok(rate)
        } else {
            Err(anyhow::anyhow!(
                "arithmetic failure: learning rate is {} at step {}",
                rate,
                step
            ))
        }
    }

    /// Rates at steps 0, 1, 2, ...
    fn rates(&self) -> Rates<&Self>
    where
        Self: Sized,
    {
        Rates::from(self)
    }
}

impl<S> LearningRateSchedule for &S
where
    S: LearningRateSchedule + ?Sized,
{
    fn rate_at(&self, step: Step) -> Rate {
        (**self).rate_at(step)
    }
}

impl<S> LearningRateSchedule for Box<S>
where
    S: LearningRateSchedule + ?Sized,
{
    fn rate_at(&self, step: Step) -> Rate {
        (**self).rate_at(step)
    }
}
