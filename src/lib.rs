//! Step-indexed learning rate schedules.
//!
//! An optimizer owns its step counter and asks a schedule for the step size
//! to use at that step. Every schedule is a pure function of its fixed
//! parameters and the step it is given, so one instance can be shared
//! read-only by any number of optimizers or threads.
//!
//! # Module Structure
//!
//! - `schedule` — the `LearningRateSchedule` trait and its implementations
//! - `config` — runtime selection of a schedule (JSON, compact notation)

mod config;
mod schedule;

pub use config::*;
pub use schedule::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Optimizer update counter, conventionally starting at 0.
pub type Step = usize;
/// Learning rate (step size multiplier applied to a gradient update).
pub type Rate = f64;

// ============================================================================
// SCHEDULE DEFAULTS
// Used by constructors, Default impls, and omitted configuration fields.
// ============================================================================
/// Decay exponent for inverse scaling: rate ∝ 1/√(t+1).
pub const INVSCALING_POWER: f64 = 0.5;
/// Step offset for the optimal schedule. Keeps the first rates from blowing up.
pub const OPTIMAL_T0: f64 = 1000.;
/// Regularization strength for the optimal schedule: rate = 1/(α(t+t0)).
pub const OPTIMAL_ALPHA: f64 = 1e-4;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
