use uom::si::f64::{Power, Pressure, Ratio, ThermodynamicTemperature};

use super::{CoreStatus, PerSegment};

/// Diagnostics produced by one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    /// Simulated minutes elapsed after this step.
    pub minute: usize,

    /// Core temperature after this step.
    pub core_temperature: ThermodynamicTemperature,

    /// Whole-body metabolic heat actually produced.
    pub realized_metabolism: Power,

    /// Highest metabolism the climber could sustain at this altitude.
    ///
    /// `None` in the basic variant, which does not cap metabolism.
    pub metabolic_ceiling: Option<Power>,

    /// Fraction of sea-level aerobic capacity available.
    ///
    /// `None` in the basic variant, which ignores hypoxia.
    pub hypoxia_factor: Option<Ratio>,

    /// Barometric pressure at the climber's altitude.
    pub air_pressure: Pressure,

    /// Heat lost warming inspired air; zero in the basic variant.
    pub respiratory_loss: Power,

    /// Osczevski–Bluestein wind-chill temperature.
    pub wind_chill: ThermodynamicTemperature,

    /// Per-segment energy balance.
    pub segments: PerSegment<SegmentReport>,
}

impl StepReport {
    /// Classifies the core temperature after this step.
    #[must_use]
    pub fn core_status(&self) -> CoreStatus {
        CoreStatus::classify(self.core_temperature)
    }
}

/// Energy balance of one segment during one step.
///
/// Heat terms are average rates over the step; positive means into the segment,
/// except `heat_loss` which is positive when the segment loses heat to the air.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentReport {
    /// Skin temperature after this step.
    pub temperature: ThermodynamicTemperature,

    pub metabolic_heat: Power,

    pub heat_loss: Power,

    /// Heat delivered by blood flow from the core (negative if the skin was warmer).
    pub blood_heat: Power,

    pub solar_gain: Power,

    /// Fraction of full blood flow remaining after vasoconstriction, `(0, 1]`.
    pub perfusion: f64,

    /// Whether the skin temperature was clamped to ambient.
    pub at_ambient_floor: bool,
}
