use uom::si::f64::ThermodynamicTemperature;

use super::{PerSegment, PhysiologyConfig};

/// Snapshot of the body model between two steps.
///
/// This is everything a step reads from the previous minute, which makes the
/// step a pure function of `(state, environment, climber)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysiologyState {
    /// Simulated minutes elapsed.
    pub minute: usize,

    /// Central blood temperature.
    pub core_temperature: ThermodynamicTemperature,

    /// Skin temperature of every segment.
    pub skin_temperatures: PerSegment<ThermodynamicTemperature>,
}

impl PhysiologyState {
    /// Returns the state at the start of a run.
    #[must_use]
    pub fn initial(config: &PhysiologyConfig) -> Self {
        Self {
            minute: 0,
            core_temperature: config.initial_core_temperature,
            skin_temperatures: PerSegment::from_fn(|_| config.initial_skin_temperature),
        }
    }
}
