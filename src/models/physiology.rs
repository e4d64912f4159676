//! Human thermoregulation under cold exposure.
//!
//! The body is split into six segments (head, trunk, arms, hands, legs, feet)
//! around a lumped core. Every minute each segment balances metabolic heat,
//! blood-borne heat from the core, solar gain and convective loss through
//! clothing; the core then absorbs the net blood cooling. As the core cools,
//! vasoconstriction throttles perfusion to the periphery so hands and feet are
//! sacrificed to keep the trunk warm.
//!
//! Two entry points share the same integration:
//!
//! - [`PhysiologyEngine`] owns a run and records temperature histories.
//! - [`ThermoregulationModel`] is a stateless [`twine_core::Model`] that maps a
//!   [`PhysiologyState`] snapshot to the next one.
//!
//! # Example
//!
//! ```
//! use thermoreg_models::models::physiology::{
//!     ClimberConfiguration, PhysiologyConfig, PhysiologyState, StepInput,
//!     ThermoregulationModel, EnvironmentalConditions,
//! };
//! use twine_core::Model;
//! use uom::si::{
//!     f64::{ThermodynamicTemperature, Velocity},
//!     thermodynamic_temperature::degree_celsius,
//!     velocity::kilometer_per_hour,
//! };
//!
//! let model = ThermoregulationModel::new(PhysiologyConfig::basic());
//! let mut input = StepInput {
//!     state: PhysiologyState::initial(model.config()),
//!     environment: EnvironmentalConditions::sea_level(
//!         ThermodynamicTemperature::new::<degree_celsius>(-10.0),
//!         Velocity::new::<kilometer_per_hour>(20.0),
//!     )?,
//!     climber: ClimberConfiguration::new(1.0, 1.5)?,
//! };
//!
//! for _ in 0..60 {
//!     let output = model.call(&input)?;
//!     input.state = output.state;
//! }
//!
//! assert_eq!(input.state.minute, 60);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod core;

use std::convert::Infallible;

use twine_core::Model;

pub use self::core::{
    BodySegment, ClimberConfiguration, CoreStatus, EnvironmentalConditions, InputError,
    ModelVariant, PerSegment, PhysiologyConfig, PhysiologyEngine, PhysiologyState, Segment,
    SegmentParameters, SegmentParametersError, SegmentReport, SegmentStatus, SegmentSummary,
    StepReport, vasoconstriction_response,
};

/// Input to one [`ThermoregulationModel`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepInput {
    /// Temperatures at the start of the minute.
    pub state: PhysiologyState,
    pub environment: EnvironmentalConditions,
    pub climber: ClimberConfiguration,
}

/// Output of one [`ThermoregulationModel`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutput {
    /// Temperatures at the end of the minute.
    pub state: PhysiologyState,
    pub report: StepReport,
}

/// Stateless one-minute thermoregulation model.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThermoregulationModel {
    config: PhysiologyConfig,
}

impl ThermoregulationModel {
    #[must_use]
    pub fn new(config: PhysiologyConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &PhysiologyConfig {
        &self.config
    }
}

impl Model for ThermoregulationModel {
    type Input = StepInput;
    type Output = StepOutput;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let (state, report) =
            self::core::advance(&self.config, &input.state, &input.environment, &input.climber);
        Ok(StepOutput { state, report })
    }
}
