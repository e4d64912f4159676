use uom::si::{
    f64::{HeatFluxDensity, Length, ThermodynamicTemperature, Velocity},
    heat_flux_density::watt_per_square_meter,
    length::meter,
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::NonNegative;

use super::InputError;

/// Weather at the climber's location for one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentalConditions {
    ambient_temperature: ThermodynamicTemperature,
    wind_speed: Velocity,
    altitude: Length,
    solar_irradiance: HeatFluxDensity,
}

impl EnvironmentalConditions {
    /// Constructs validated conditions.
    ///
    /// # Errors
    ///
    /// Returns an error if the temperature or altitude is not finite, or if the
    /// wind speed or irradiance is negative or `NaN`.
    pub fn new(
        ambient_temperature: ThermodynamicTemperature,
        wind_speed: Velocity,
        altitude: Length,
        solar_irradiance: HeatFluxDensity,
    ) -> Result<Self, InputError> {
        if !ambient_temperature.get::<kelvin>().is_finite() {
            return Err(InputError::AmbientTemperature {
                ambient: ambient_temperature,
            });
        }
        NonNegative::new(wind_speed).map_err(|source| InputError::WindSpeed {
            wind: wind_speed,
            source,
        })?;
        if !altitude.get::<meter>().is_finite() {
            return Err(InputError::Altitude { altitude });
        }
        NonNegative::new(solar_irradiance).map_err(|source| InputError::SolarIrradiance {
            irradiance: solar_irradiance,
            source,
        })?;

        Ok(Self::new_unchecked(
            ambient_temperature,
            wind_speed,
            altitude,
            solar_irradiance,
        ))
    }

    /// Constructs conditions without validation.
    #[must_use]
    pub fn new_unchecked(
        ambient_temperature: ThermodynamicTemperature,
        wind_speed: Velocity,
        altitude: Length,
        solar_irradiance: HeatFluxDensity,
    ) -> Self {
        Self {
            ambient_temperature,
            wind_speed,
            altitude,
            solar_irradiance,
        }
    }

    /// Constructs sea-level conditions without sunshine.
    ///
    /// # Errors
    ///
    /// Returns an error under the same rules as [`EnvironmentalConditions::new`].
    pub fn sea_level(
        ambient_temperature: ThermodynamicTemperature,
        wind_speed: Velocity,
    ) -> Result<Self, InputError> {
        Self::new(
            ambient_temperature,
            wind_speed,
            Length::new::<meter>(0.0),
            HeatFluxDensity::new::<watt_per_square_meter>(0.0),
        )
    }

    #[must_use]
    pub fn ambient_temperature(&self) -> ThermodynamicTemperature {
        self.ambient_temperature
    }

    #[must_use]
    pub fn wind_speed(&self) -> Velocity {
        self.wind_speed
    }

    #[must_use]
    pub fn altitude(&self) -> Length {
        self.altitude
    }

    #[must_use]
    pub fn solar_irradiance(&self) -> HeatFluxDensity {
        self.solar_irradiance
    }
}
