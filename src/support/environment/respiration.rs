//! Dry respiratory heat loss.

use uom::si::{
    f64::{Length, Power, ThermodynamicTemperature},
    length::meter,
    power::watt,
    temperature_interval::degree_celsius as delta_celsius,
};

use crate::support::units::TemperatureDifference;

/// Respiratory convective loss per watt of metabolism per kelvin, 1/K.
///
/// Fanger's coefficient for heating inspired air.
pub const RESPIRATORY_LOSS_COEFFICIENT: f64 = 0.0014;

/// Increase of minute ventilation per metre of altitude.
pub const VENTILATION_INCREASE_PER_M: f64 = 5.0e-4;

/// Returns the ventilation multiplier at `altitude` relative to sea level.
#[must_use]
pub fn ventilation_factor(altitude: Length) -> f64 {
    1.0 + VENTILATION_INCREASE_PER_M * altitude.get::<meter>().max(0.0)
}

/// Returns the heat lost warming inspired air to body temperature.
///
/// Loss scales with realized metabolism (breathing follows oxygen demand),
/// with the body-to-air gradient, and with the altitude ventilation factor.
/// Breathing air warmer than the body is not modeled as a heat gain.
#[must_use]
pub fn respiratory_heat_loss(
    metabolism: Power,
    body: ThermodynamicTemperature,
    air: ThermodynamicTemperature,
    altitude: Length,
) -> Power {
    let gradient = body.minus(air).get::<delta_celsius>().max(0.0);
    let loss = RESPIRATORY_LOSS_COEFFICIENT
        * metabolism.get::<watt>()
        * gradient
        * ventilation_factor(altitude);

    Power::new::<watt>(loss)
}
