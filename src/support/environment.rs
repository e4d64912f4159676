//! Environmental forcing terms for cold-exposure thermoregulation.
//!
//! Every function here is pure: it turns raw environment and clothing inputs
//! into the effective physical quantities the body model integrates over.
//!
//! - [`wind`]: effective wind speed and the wind-chill temperature
//! - [`insulation`]: clothing plus boundary-layer insulance per body region
//! - [`altitude`]: barometric pressure, hypoxia and the metabolic ceiling
//! - [`respiration`]: dry respiratory heat loss
//! - [`solar`]: absorbed solar radiation
//!
//! # Example
//!
//! ```
//! use thermoreg_models::support::environment::{altitude, wind};
//! use uom::si::{
//!     f64::{Length, Velocity},
//!     length::meter,
//!     pressure::hectopascal,
//!     ratio::ratio,
//!     velocity::kilometer_per_hour,
//! };
//!
//! let gust = Velocity::new::<kilometer_per_hour>(20.0);
//! let v_eff = wind::effective_wind_speed(gust);
//! assert!((v_eff.get::<kilometer_per_hour>() - 12.0).abs() < 1e-9);
//!
//! let summit = Length::new::<meter>(8500.0);
//! assert!(altitude::air_pressure(summit).get::<hectopascal>() < 350.0);
//! assert!((altitude::hypoxia_factor(summit, false).get::<ratio>() - 0.3).abs() < 1e-9);
//! ```

pub mod altitude;
pub mod insulation;
pub mod respiration;
pub mod solar;
pub mod wind;
