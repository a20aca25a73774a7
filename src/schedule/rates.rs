use super::*;

/// Unbounded sequence of rates at steps 0, 1, 2, ...
///
/// Bound it with `take`, or jump ahead with `nth`/`step_by`. Ends after
/// `Step::MAX`, or once `nth` skips past it.
#[derive(Debug, Clone)]
pub struct Rates<S> {
    schedule: S,
    step: Option<Step>,
}

impl<S> Rates<S> {
    /// Next step this iterator will evaluate, `None` once exhausted.
    pub fn step(&self) -> Option<Step> {
        self.step
    }
}

impl<S> From<S> for Rates<S>
where
    S: LearningRateSchedule,
{
    fn from(schedule: S) -> Self {
        Self {
            schedule,
            step: Some(0),
        }
    }
}

impl<S> Iterator for Rates<S>
where
    S: LearningRateSchedule,
{
    type Item = Rate;
    fn next(&mut self) -> Option<Self::Item> {
        let step = self.step?;
        self.step = step.checked_add(1);
        Some(self.schedule.rate_at(step))
    }
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.step = self.step.and_then(|step| step.checked_add(n));
        self.next()
    }
}

impl<S> std::iter::FusedIterator for Rates<S> where S: LearningRateSchedule {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let schedule = InverseScalingSchedule::new(1.);
        let rates = schedule.rates().take(4).collect::<Vec<_>>();
        assert_eq!(rates.len(), 4);
        assert_eq!(rates[0], 1.);
        assert_eq!(rates[3], 0.5);
    }

    #[test]
    fn nth_skips_steps() {
        let schedule = OptimalSchedule::default();
        let mut rates = schedule.rates();
        assert_eq!(rates.nth(99), Some(schedule.rate_at(99)));
        assert_eq!(rates.step(), Some(100));
        assert_eq!(rates.next(), Some(schedule.rate_at(100)));
    }

    #[test]
    fn step_by_matches_direct_evaluation() {
        let schedule = OptimalSchedule::default();
        for (i, rate) in Rates::from(schedule).step_by(250).take(8).enumerate() {
            assert_eq!(rate, schedule.rate_at(i * 250));
        }
    }

    #[test]
    fn yields_last_step_then_stops() {
        let schedule = ConstantSchedule::new(0.1);
        let mut rates = schedule.rates();
        assert_eq!(rates.nth(Step::MAX - 1), Some(0.1));
        assert_eq!(rates.step(), Some(Step::MAX));
        assert_eq!(rates.next(), Some(0.1));
        assert_eq!(rates.step(), None);
        assert_eq!(rates.next(), None);
        assert_eq!(rates.next(), None);
    }

    #[test]
    fn stays_exhausted_after_skipping_past_end() {
        let schedule = ConstantSchedule::new(0.1);
        let mut rates = schedule.rates();
        assert_eq!(rates.nth(10), Some(0.1));
        assert_eq!(rates.nth(Step::MAX), None);
        assert_eq!(rates.step(), None);
        assert_eq!(rates.next(), None);
        assert_eq!(rates.nth(0), None);
    }
}
