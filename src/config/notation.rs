//! Compact text notation for schedules: `constant(0.1)`, `invscaling(1, 0.5)`,
//! `optimal()`, `optimal(1000, 0.0001)`.

use super::*;
use anyhow::anyhow;
use anyhow::bail;

impl TryFrom<&str> for Schedule {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let (name, args) = s
            .trim()
            .strip_suffix(')')
            .and_then(|s| s.split_once('('))
            .ok_or_else(|| anyhow!("expected name(args), got {:?}", s))?;
        let args = if args.trim().is_empty() {
            Vec::new()
        } else {
            args.split(',')
                .map(str::trim)
                .map(|a| {
                    a.parse::<f64>()
                        .with_context(|| format!("invalid schedule argument {:?}", a))
                })
                .collect::<anyhow::Result<Vec<_>>>()?
        };
        let schedule = match (name.trim(), args.as_slice()) {
            ("constant", &[rate]) => Self::from(ConstantSchedule::new(rate)),
            ("invscaling" | "inverse_scaling", &[base]) => {
                Self::from(InverseScalingSchedule::new(base))
            }
            ("invscaling" | "inverse_scaling", &[base, power]) => {
                Self::from(InverseScalingSchedule::with_power(base, power))
            }
            ("optimal", &[]) => Self::from(OptimalSchedule::default()),
            ("optimal", &[t0]) => Self::from(OptimalSchedule::new(t0, OPTIMAL_ALPHA)),
            ("optimal", &[t0, alpha]) => Self::from(OptimalSchedule::new(t0, alpha)),
            (name @ ("constant" | "invscaling" | "inverse_scaling" | "optimal"), args) => {
                bail!("wrong number of arguments for {}: {}", name, args.len())
            }
            (name, _) => bail!("unknown schedule {:?}", name),
        };
        log::debug!("parsed learning rate schedule {}", schedule);
        Ok(schedule)
    }
}

impl std::str::FromStr for Schedule {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant(s) => write!(f, "constant({})", s.rate),
            Self::InverseScaling(s) => write!(f, "invscaling({}, {})", s.base_rate, s.power),
            Self::Optimal(s) => write!(f, "optimal({}, {})", s.t0, s.alpha),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_kind() {
        assert_eq!(
            Schedule::try_from("constant(0.1)").unwrap(),
            Schedule::from(ConstantSchedule::new(0.1))
        );
        assert_eq!(
            Schedule::try_from("invscaling(1.0)").unwrap(),
            Schedule::from(InverseScalingSchedule::new(1.))
        );
        assert_eq!(
            Schedule::try_from("inverse_scaling(1.0, 0.25)").unwrap(),
            Schedule::from(InverseScalingSchedule::with_power(1., 0.25))
        );
        assert_eq!(
            Schedule::try_from("optimal()").unwrap(),
            Schedule::from(OptimalSchedule::default())
        );
        assert_eq!(
            Schedule::try_from("optimal(10)").unwrap(),
            Schedule::from(OptimalSchedule::new(10., OPTIMAL_ALPHA))
        );
        assert_eq!(
            Schedule::try_from("optimal(10, 1e-2)").unwrap(),
            Schedule::from(OptimalSchedule::new(10., 0.01))
        );
    }

    #[test]
    fn ignores_whitespace() {
        assert_eq!(
            Schedule::try_from("  invscaling ( 2 ,0.5 )  ").unwrap(),
            Schedule::from(InverseScalingSchedule::with_power(2., 0.5))
        );
        assert_eq!(
            " optimal(   ) ".parse::<Schedule>().unwrap(),
            Schedule::from(OptimalSchedule::default())
        );
    }

    #[test]
    fn rejects_malformed() {
        for bad in [
            "",
            "constant",
            "constant(0.1",
            "constant()",
            "constant(0.1, 0.2)",
            "constant(fast)",
            "invscaling()",
            "invscaling(1, 0.5, 2)",
            "optimal(1, 2, 3)",
            "optimal(1,)",
            "cosine(0.1)",
        ] {
            assert!(Schedule::try_from(bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn display_parses_back() {
        for schedule in [
            Schedule::from(ConstantSchedule::new(0.1)),
            Schedule::from(InverseScalingSchedule::with_power(0.03, 0.6)),
            Schedule::from(OptimalSchedule::default()),
            Schedule::from(OptimalSchedule::new(-5., 1e-7)),
        ] {
            let text = schedule.to_string();
            assert_eq!(Schedule::try_from(text.as_str()).unwrap(), schedule, "{}", text);
        }
    }

    #[test]
    fn display_format() {
        assert_eq!(Schedule::from(OptimalSchedule::default()).to_string(), "optimal(1000, 0.0001)");
        assert_eq!(Schedule::from(InverseScalingSchedule::new(1.)).to_string(), "invscaling(1, 0.5)");
    }
}
