//! One-minute explicit integration of the body model.
//!
//! A step runs in two phases:
//!
//! 1. Every segment's energy balance is computed from the previous minute's
//!    snapshot. Segments only read the snapshot, so their updates are
//!    independent of each other.
//! 2. The balances are aggregated into the core update. The core temperature
//!    changes only here.

use uom::si::{
    area::square_meter,
    f64::{Power, Pressure, Ratio, ThermodynamicTemperature, Velocity},
    mass::kilogram,
    power::watt,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    temperature_interval::degree_celsius as delta_celsius,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::environment::{altitude, insulation, respiration, solar, wind};

use super::{
    ClimberConfiguration, EnvironmentalConditions, ModelVariant, PerSegment, PhysiologyConfig,
    PhysiologyState, Segment, SegmentReport, StepReport,
};

const SECONDS_PER_MINUTE: f64 = 60.0;

/// Length of one integration step, s.
const STEP_SECONDS: f64 = SECONDS_PER_MINUTE;

/// Returns the fraction of full blood flow reaching a segment.
///
/// At or above the configured onset temperature there is no restriction.
/// Below it the response decays smoothly with the core deficit:
///
/// ```text
/// response = 1 / (1 + sensitivity · (onset − core) · scale)
/// ```
///
/// so that highly sensitive segments (hands, feet) shut down long before the trunk.
#[must_use]
pub fn vasoconstriction_response(
    config: &PhysiologyConfig,
    core: ThermodynamicTemperature,
    sensitivity: f64,
) -> f64 {
    if core >= config.vasoconstriction_onset {
        return 1.0;
    }

    let deficit =
        config.vasoconstriction_onset.get::<degree_celsius>() - core.get::<degree_celsius>();
    1.0 / (1.0 + sensitivity * deficit * config.vasoconstriction_scale)
}

/// Environmental forcing shared by all segments during one step.
#[derive(Debug, Clone, Copy)]
struct Forcing {
    ambient_c: f64,
    effective_wind: Velocity,
    hypoxia: Ratio,
    metabolic_ceiling: Power,
    realized_metabolism: Power,
    air_pressure: Pressure,
    wind_chill: ThermodynamicTemperature,
}

impl Forcing {
    fn resolve(environment: &EnvironmentalConditions, climber: &ClimberConfiguration) -> Self {
        let hypoxia = altitude::hypoxia_factor(environment.altitude(), climber.oxygen_support());

        Self {
            ambient_c: environment.ambient_temperature().get::<degree_celsius>(),
            effective_wind: wind::effective_wind_speed(environment.wind_speed()),
            hypoxia,
            metabolic_ceiling: altitude::metabolic_ceiling(hypoxia),
            realized_metabolism: altitude::realized_metabolism(climber.mets(), hypoxia),
            air_pressure: altitude::air_pressure(environment.altitude()),
            wind_chill: wind::wind_chill_temperature(
                environment.ambient_temperature(),
                environment.wind_speed(),
            ),
        }
    }
}

/// Phase-one result for one segment, all rates in W.
#[derive(Debug, Clone, Copy)]
struct SegmentBalance {
    metabolic_w: f64,
    loss_w: f64,
    blood_w: f64,
    solar_w: f64,
    perfusion: f64,
    skin_c: f64,
    at_ambient_floor: bool,
}

impl SegmentBalance {
    fn report(&self) -> SegmentReport {
        SegmentReport {
            temperature: ThermodynamicTemperature::new::<degree_celsius>(self.skin_c),
            metabolic_heat: Power::new::<watt>(self.metabolic_w),
            heat_loss: Power::new::<watt>(self.loss_w),
            blood_heat: Power::new::<watt>(self.blood_w),
            solar_gain: Power::new::<watt>(self.solar_w),
            perfusion: self.perfusion,
            at_ambient_floor: self.at_ambient_floor,
        }
    }
}

/// Advances `state` by one minute.
///
/// Returns the next state and the diagnostics of the step.
pub(crate) fn advance(
    config: &PhysiologyConfig,
    state: &PhysiologyState,
    environment: &EnvironmentalConditions,
    climber: &ClimberConfiguration,
) -> (PhysiologyState, StepReport) {
    let forcing = Forcing::resolve(environment, climber);

    // Phase one: segments from the snapshot.
    let balances = PerSegment::from_fn(|segment| {
        segment_balance(config, segment, state, environment, climber, &forcing)
    });

    // Phase two: aggregate into the core.
    let total_metabolic_w: f64 = balances.values().map(|b| b.metabolic_w).sum();
    let blood_cooling_w = -balances.values().map(|b| b.blood_w).sum::<f64>();

    let (core_source_w, respiratory_loss) = match config.variant {
        ModelVariant::Basic => (
            total_metabolic_w * config.core_metabolic_weighting,
            Power::new::<watt>(0.0),
        ),
        ModelVariant::Alpine => {
            let loss = respiration::respiratory_heat_loss(
                forcing.realized_metabolism,
                state.core_temperature,
                environment.ambient_temperature(),
                environment.altitude(),
            );
            (total_metabolic_w - loss.get::<watt>(), loss)
        }
    };

    let core_heat_capacity = config.core_mass.get::<kilogram>()
        * config.tissue_specific_heat.get::<joule_per_kilogram_kelvin>();
    let core_net_j = (core_source_w + blood_cooling_w) * STEP_SECONDS;
    let mut core_c =
        state.core_temperature.get::<degree_celsius>() + core_net_j / core_heat_capacity;

    if core_c < config.homeostasis_threshold.get::<degree_celsius>() {
        let shivering_capacity = match config.variant {
            ModelVariant::Basic => 1.0,
            ModelVariant::Alpine => forcing.hypoxia.get::<ratio>(),
        };
        core_c += config.homeostasis_increment.get::<delta_celsius>() * shivering_capacity;
    }

    let core_temperature = ThermodynamicTemperature::new::<degree_celsius>(core_c);
    let minute = state.minute + 1;

    let next = PhysiologyState {
        minute,
        core_temperature,
        skin_temperatures: balances
            .map(|_, b| ThermodynamicTemperature::new::<degree_celsius>(b.skin_c)),
    };

    let (realized_metabolism, metabolic_ceiling, hypoxia_factor) = match config.variant {
        ModelVariant::Basic => (Power::new::<watt>(total_metabolic_w), None, None),
        ModelVariant::Alpine => (
            forcing.realized_metabolism,
            Some(forcing.metabolic_ceiling),
            Some(forcing.hypoxia),
        ),
    };

    let report = StepReport {
        minute,
        core_temperature,
        realized_metabolism,
        metabolic_ceiling,
        hypoxia_factor,
        air_pressure: forcing.air_pressure,
        respiratory_loss,
        wind_chill: forcing.wind_chill,
        segments: balances.map(|_, b| b.report()),
    };

    (next, report)
}

/// Metabolic heat produced in `segment` during the step, W.
fn metabolic_heat(
    config: &PhysiologyConfig,
    segment: Segment,
    climber: &ClimberConfiguration,
    forcing: &Forcing,
) -> f64 {
    let parameters = &config.segments[segment];

    match config.variant {
        ModelVariant::Basic => {
            let mets = climber.mets();
            let activity = if segment.is_extremity() {
                1.0 + (mets - 1.0) * config.extremity_activity_damping
            } else {
                mets
            };
            parameters.basal_metabolism().get::<watt>() * activity
        }
        ModelVariant::Alpine => {
            forcing.realized_metabolism.get::<watt>() * parameters.metabolic_share()
        }
    }
}

fn segment_balance(
    config: &PhysiologyConfig,
    segment: Segment,
    state: &PhysiologyState,
    environment: &EnvironmentalConditions,
    climber: &ClimberConfiguration,
    forcing: &Forcing,
) -> SegmentBalance {
    let parameters = &config.segments[segment];
    let mass_kg = parameters.mass().get::<kilogram>();
    let area_m2 = parameters.area().get::<square_meter>();
    let skin_c = state.skin_temperatures[segment].get::<degree_celsius>();
    let core_c = state.core_temperature.get::<degree_celsius>();

    let metabolic_w = metabolic_heat(config, segment, climber, forcing);

    let local_clo = insulation::local_clothing(climber.clo(), climber.is_wet(), segment.exposure());
    let r_total = insulation::insulation_resistance(local_clo, forcing.effective_wind);
    let loss_w = area_m2 * (skin_c - forcing.ambient_c) / r_total.value;

    let solar_w = match config.variant {
        ModelVariant::Basic => 0.0,
        ModelVariant::Alpine => solar::solar_heat_gain(
            environment.solar_irradiance(),
            parameters.area(),
            parameters.solar_exposure(),
        )
        .get::<watt>(),
    };

    let perfusion = vasoconstriction_response(
        config,
        state.core_temperature,
        parameters.vasoconstriction_sensitivity(),
    );
    let blood_w =
        config.perfusion_constant * mass_kg * perfusion * (core_c - skin_c) / SECONDS_PER_MINUTE;

    let net_j = (metabolic_w + blood_w + solar_w - loss_w) * STEP_SECONDS;
    let heat_capacity = mass_kg * config.tissue_specific_heat.get::<joule_per_kilogram_kelvin>();
    let unclamped_c = skin_c + net_j / heat_capacity;

    let at_ambient_floor = unclamped_c < forcing.ambient_c;
    if at_ambient_floor {
        log::trace!("{segment} skin clamped to ambient {:.2} °C", forcing.ambient_c);
    }

    SegmentBalance {
        metabolic_w,
        loss_w,
        blood_w,
        solar_w,
        perfusion,
        skin_c: if at_ambient_floor {
            forcing.ambient_c
        } else {
            unclamped_c
        },
        at_ambient_floor,
    }
}
