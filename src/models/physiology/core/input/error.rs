use thiserror::Error;
use uom::si::f64::{HeatFluxDensity, Length, ThermodynamicTemperature, Velocity};

use crate::support::constraint::ConstraintError;

/// Errors from validating simulation inputs.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InputError {
    #[error("metabolic multiplier must be strictly positive, got {mets} METs")]
    Metabolism { mets: f64, source: ConstraintError },

    #[error("clothing insulation must not be negative, got {clo} Clo")]
    Clothing { clo: f64, source: ConstraintError },

    #[error("ambient temperature is not finite: {ambient:?}")]
    AmbientTemperature { ambient: ThermodynamicTemperature },

    #[error("wind speed must not be negative: {wind:?}")]
    WindSpeed { wind: Velocity, source: ConstraintError },

    #[error("altitude is not finite: {altitude:?}")]
    Altitude { altitude: Length },

    #[error("solar irradiance must not be negative: {irradiance:?}")]
    SolarIrradiance {
        irradiance: HeatFluxDensity,
        source: ConstraintError,
    },
}
