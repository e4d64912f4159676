use uom::si::{
    f64::{HeatFluxDensity, Length, ThermodynamicTemperature, Velocity},
    heat_flux_density::watt_per_square_meter,
    length::meter,
    thermodynamic_temperature::degree_celsius,
    velocity::kilometer_per_hour,
};

use super::{ClimberConfiguration, EnvironmentalConditions, PhysiologyConfig, PhysiologyEngine};

pub(super) fn celsius(t: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(t)
}

pub(super) fn kmh(v: f64) -> Velocity {
    Velocity::new::<kilometer_per_hour>(v)
}

pub(super) fn climber(mets: f64, clo: f64) -> ClimberConfiguration {
    ClimberConfiguration::new(mets, clo).unwrap()
}

/// Sea-level conditions without sunshine.
pub(super) fn sea_level(ambient: f64, wind: f64) -> EnvironmentalConditions {
    EnvironmentalConditions::sea_level(celsius(ambient), kmh(wind)).unwrap()
}

/// High camp near 8500 m: −30 °C and 25 km/h wind.
pub(super) fn summit(irradiance: f64) -> EnvironmentalConditions {
    EnvironmentalConditions::new(
        celsius(-30.0),
        kmh(25.0),
        Length::new::<meter>(8500.0),
        HeatFluxDensity::new::<watt_per_square_meter>(irradiance),
    )
    .unwrap()
}

/// Runs a fresh engine under constant conditions.
pub(super) fn simulate(
    config: PhysiologyConfig,
    environment: &EnvironmentalConditions,
    climber: &ClimberConfiguration,
    minutes: usize,
) -> PhysiologyEngine {
    let mut engine = PhysiologyEngine::new(config);
    engine.run(minutes, environment, climber);
    engine
}
