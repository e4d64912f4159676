//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for physical quantities at every public boundary
//! (temperatures, powers, masses, areas, wind speeds).
//! This module provides what [`uom`] itself lacks for thermoregulation work.
//!
//! ## Temperature differences
//!
//! Skin-to-air and core-to-skin gradients drive every heat flow in the body
//! model. [`TemperatureDifference::minus`] turns two absolute temperatures into
//! a [`TemperatureInterval`](uom::si::f64::TemperatureInterval):
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::temperature_interval::degree_celsius as delta_celsius;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use thermoreg_models::support::units::TemperatureDifference;
//!
//! let skin = ThermodynamicTemperature::new::<degree_celsius>(33.0);
//! let air = ThermodynamicTemperature::new::<degree_celsius>(-10.0);
//! let gradient = skin.minus(air);
//! assert!((gradient.get::<delta_celsius>() - 43.0).abs() < 1e-9);
//! ```
//!
//! ## Thermal insulance
//!
//! Clothing and boundary-layer insulation are area-specific resistances
//! (m²·K/W), expressed by [`ThermalInsulance`].

mod quantities;
mod temperature_difference;

pub use quantities::{ThermalInsulance, clo, square_meter_kelvin_per_watt};
pub use temperature_difference::TemperatureDifference;
