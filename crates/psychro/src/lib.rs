//! Psychrometric properties of moist air.
//!
//! Properties follow the correlations of the ASHRAE Handbook, Fundamentals
//! (2017, chapter 1), in either SI or IP units. Every calculation goes through
//! a [`Psychrometrics`] handle that fixes the unit system and solver settings:
//!
//! ```
//! use psychro::{Psychrometrics, UnitSystem};
//!
//! let psy = Psychrometrics::new(UnitSystem::Metric);
//! let state = psy.calc_psychrometrics_from_t_wet_bulb(40.0, 20.0, 101_325.0)?;
//!
//! assert!((state.hum_ratio - 0.0065).abs() < 1e-4);
//! # Ok::<(), psychro::PsychroError>(())
//! ```
//!
//! Dew point and wet bulb have no closed form. The dew point inverts the
//! saturation pressure curve with Newton-Raphson and the wet bulb bisects
//! between dew point and dry bulb. Both run on the generic solvers in
//! `psychro-solvers` and log each iteration through `tracing` at `TRACE`.
//!
//! For unit-checked inputs and outputs, use [`MoistAir`].

mod air;
mod atmosphere;
mod check;
mod composite;
mod dew_point;
mod error;
mod humidity;
mod moist_air;
mod psychrometrics;
mod saturation;
mod settings;
mod wet_bulb;

pub mod units;

pub use composite::Properties;
pub use dew_point::DewPointProblem;
pub use error::PsychroError;
pub use moist_air::MoistAir;
pub use psychrometrics::Psychrometrics;
pub use saturation::{SaturationCurve, SaturationPoint};
pub use settings::{Settings, SettingsError};
pub use units::UnitSystem;
pub use wet_bulb::{WetBulbHumRatio, WetBulbProblem};

/// Smallest humidity ratio any calculation uses or returns.
///
/// Smaller non-negative values are raised to this floor.
pub const MIN_HUM_RATIO: f64 = 1e-7;

/// Default iteration cap for the dew point and wet bulb solvers.
pub const MAX_ITERS: usize = 100;
