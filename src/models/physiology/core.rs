//! Six-segment bioheat integration with a lumped core.
//!
//! The engine owns one [`BodySegment`] per [`Segment`] and a core temperature.
//! Each call to [`PhysiologyEngine::step`] advances the body by one minute
//! under the supplied environment and climber configuration.

mod config;
mod input;
mod report;
mod segment;
mod state;
mod status;
mod step;

#[cfg(test)]
mod test_support;

pub use config::{ModelVariant, PhysiologyConfig};
pub use input::{ClimberConfiguration, EnvironmentalConditions, InputError};
pub use report::{SegmentReport, StepReport};
pub use segment::{BodySegment, PerSegment, Segment, SegmentParameters, SegmentParametersError};
pub use state::PhysiologyState;
pub use status::{CoreStatus, SegmentStatus, SegmentSummary};
pub use step::vasoconstriction_response;

use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    power::watt,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::TemperatureDifference;

pub(super) use step::advance;

/// Stateful simulation of one person over one run.
///
/// Segment and core histories are append-only and start with the initial
/// sample, so after `n` steps each history holds `n + 1` temperatures.
#[derive(Debug, Clone)]
pub struct PhysiologyEngine {
    config: PhysiologyConfig,
    segments: PerSegment<BodySegment>,
    core_temperature: ThermodynamicTemperature,
    core_history: Vec<ThermodynamicTemperature>,
    minutes: usize,
}

impl Default for PhysiologyEngine {
    fn default() -> Self {
        Self::new(PhysiologyConfig::default())
    }
}

impl PhysiologyEngine {
    /// Creates an engine at the configured initial temperatures.
    #[must_use]
    pub fn new(config: PhysiologyConfig) -> Self {
        let segments = PerSegment::from_fn(|segment| {
            BodySegment::new(
                segment,
                config.segments[segment],
                config.initial_skin_temperature,
            )
        });

        Self {
            config,
            segments,
            core_temperature: config.initial_core_temperature,
            core_history: vec![config.initial_core_temperature],
            minutes: 0,
        }
    }

    /// Advances the body by one minute.
    ///
    /// All six segments are updated from the previous minute's temperatures
    /// before the core is updated, and every history grows by one sample.
    pub fn step(
        &mut self,
        environment: &EnvironmentalConditions,
        climber: &ClimberConfiguration,
    ) -> StepReport {
        let previous_status = self.core_status();
        let (next, report) = advance(&self.config, &self.state(), environment, climber);

        for segment in Segment::ALL {
            let balance = &report.segments[segment];
            log::trace!(
                "minute {}: {segment} skin {:.2} °C, loss {:.1} W, blood {:.1} W",
                next.minute,
                balance.temperature.get::<degree_celsius>(),
                balance.heat_loss.get::<watt>(),
                balance.blood_heat.get::<watt>(),
            );
            self.segments[segment].record(next.skin_temperatures[segment]);
        }

        self.core_temperature = next.core_temperature;
        self.core_history.push(next.core_temperature);
        self.minutes = next.minute;

        log::debug!(
            "minute {}: core {:.3} °C, metabolism {:.1} W",
            self.minutes,
            self.core_temperature.get::<degree_celsius>(),
            report.realized_metabolism.get::<watt>(),
        );

        let status = report.core_status();
        if status != previous_status {
            log::info!(
                "minute {}: core status {previous_status:?} -> {status:?}",
                self.minutes
            );
        }

        report
    }

    /// Runs `minutes` steps under constant conditions.
    ///
    /// ```
    /// use thermoreg_models::models::physiology::{
    ///     ClimberConfiguration, EnvironmentalConditions, PhysiologyEngine, Segment,
    /// };
    /// use uom::si::{
    ///     f64::{ThermodynamicTemperature, Velocity},
    ///     thermodynamic_temperature::degree_celsius,
    ///     velocity::kilometer_per_hour,
    /// };
    ///
    /// let env = EnvironmentalConditions::sea_level(
    ///     ThermodynamicTemperature::new::<degree_celsius>(-10.0),
    ///     Velocity::new::<kilometer_per_hour>(20.0),
    /// )?;
    /// let climber = ClimberConfiguration::new(1.0, 1.5)?;
    ///
    /// let mut engine = PhysiologyEngine::default();
    /// let reports = engine.run(120, &env, &climber);
    ///
    /// assert_eq!(reports.len(), 120);
    /// assert_eq!(engine.core_history().len(), 121);
    /// let hands = engine.segment(Segment::Hands).temperature();
    /// assert!(hands < engine.segment(Segment::Trunk).temperature());
    /// # Ok::<(), thermoreg_models::models::physiology::InputError>(())
    /// ```
    pub fn run(
        &mut self,
        minutes: usize,
        environment: &EnvironmentalConditions,
        climber: &ClimberConfiguration,
    ) -> Vec<StepReport> {
        (0..minutes).map(|_| self.step(environment, climber)).collect()
    }

    /// Returns a snapshot of the current temperatures.
    #[must_use]
    pub fn state(&self) -> PhysiologyState {
        PhysiologyState {
            minute: self.minutes,
            core_temperature: self.core_temperature,
            skin_temperatures: self.segments.map(|_, body| body.temperature()),
        }
    }

    #[must_use]
    pub fn config(&self) -> &PhysiologyConfig {
        &self.config
    }

    #[must_use]
    pub fn segment(&self, segment: Segment) -> &BodySegment {
        &self.segments[segment]
    }

    #[must_use]
    pub fn segments(&self) -> &PerSegment<BodySegment> {
        &self.segments
    }

    #[must_use]
    pub fn core_temperature(&self) -> ThermodynamicTemperature {
        self.core_temperature
    }

    /// Returns every recorded core temperature, oldest first.
    #[must_use]
    pub fn core_history(&self) -> &[ThermodynamicTemperature] {
        &self.core_history
    }

    /// Returns the number of minutes simulated so far.
    #[must_use]
    pub fn minutes(&self) -> usize {
        self.minutes
    }

    #[must_use]
    pub fn core_status(&self) -> CoreStatus {
        CoreStatus::classify(self.core_temperature)
    }

    /// Returns the start-to-now summary of every segment.
    #[must_use]
    pub fn summaries(&self) -> PerSegment<SegmentSummary> {
        self.segments.map(|_, body| SegmentSummary::of(body))
    }

    /// Returns trunk minus hands skin temperature.
    ///
    /// A wide gradient means blood is being held in the core and the
    /// periphery is left to cool.
    #[must_use]
    pub fn core_shell_gradient(&self) -> TemperatureInterval {
        self.segments[Segment::Trunk]
            .temperature()
            .minus(self.segments[Segment::Hands].temperature())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::temperature_interval::degree_celsius as delta_celsius;

    use super::test_support::{celsius, climber, sea_level, simulate, summit};

    fn c(t: ThermodynamicTemperature) -> f64 {
        t.get::<degree_celsius>()
    }

    #[test]
    fn starts_at_initial_temperatures() {
        let engine = PhysiologyEngine::default();

        assert_eq!(engine.minutes(), 0);
        assert_eq!(engine.core_temperature(), celsius(37.0));
        assert_eq!(engine.core_history(), &[celsius(37.0)]);
        for (segment, body) in engine.segments().iter() {
            assert_eq!(body.segment(), segment);
            assert_eq!(body.temperature(), celsius(33.0));
        }
        assert_eq!(engine.state(), PhysiologyState::initial(engine.config()));
        assert_relative_eq!(engine.core_shell_gradient().get::<delta_celsius>(), 0.0);
    }

    #[test]
    fn histories_grow_one_sample_per_step() {
        let engine = simulate(
            PhysiologyConfig::basic(),
            &sea_level(-10.0, 20.0),
            &climber(1.0, 1.5),
            30,
        );

        assert_eq!(engine.minutes(), 30);
        assert_eq!(engine.core_history().len(), 31);
        for body in engine.segments().values() {
            assert_eq!(body.history().len(), 31);
            assert_eq!(body.history()[0], celsius(33.0));
            assert_eq!(body.history()[30], body.temperature());
        }
        assert_eq!(engine.core_history()[30], engine.core_temperature());
    }

    #[test]
    fn step_matches_pure_advance() {
        let env = sea_level(-15.0, 30.0);
        let person = climber(2.0, 2.0);

        let mut engine = PhysiologyEngine::new(PhysiologyConfig::alpine());
        engine.run(10, &env, &person);

        let before = engine.state();
        let (expected, expected_report) = advance(engine.config(), &before, &env, &person);
        let report = engine.step(&env, &person);

        assert_eq!(engine.state(), expected);
        assert_eq!(report, expected_report);
    }

    #[test]
    fn moderate_cold_rest_stays_out_of_hypothermia() {
        // -10 °C, 20 km/h, resting, 1.5 Clo, dry, two hours.
        for config in [PhysiologyConfig::basic(), PhysiologyConfig::alpine()] {
            let engine = simulate(config, &sea_level(-10.0, 20.0), &climber(1.0, 1.5), 120);

            let core = c(engine.core_temperature());
            assert!((36.0..=37.0).contains(&core), "{:?}: {core}", config.variant);
            assert!(engine.core_history().iter().all(|&t| c(t) > 36.0));
            assert!(engine.core_status() <= CoreStatus::ColdStress);
        }
    }

    #[test]
    fn basic_moderate_cold_final_state() {
        let engine = simulate(
            PhysiologyConfig::basic(),
            &sea_level(-10.0, 20.0),
            &climber(1.0, 1.5),
            120,
        );

        assert_relative_eq!(c(engine.core_temperature()), 36.753, epsilon = 0.01);
        assert_relative_eq!(c(engine.segment(Segment::Trunk).temperature()), 32.3, epsilon = 0.1);
        assert_relative_eq!(c(engine.segment(Segment::Hands).temperature()), -4.79, epsilon = 0.1);

        let summaries = engine.summaries();
        assert_eq!(summaries[Segment::Trunk].status, SegmentStatus::Normal);
        assert_eq!(summaries[Segment::Arms].status, SegmentStatus::Cooled);
        assert_eq!(summaries[Segment::Hands].status, SegmentStatus::FrostbiteRisk);
        assert_eq!(summaries[Segment::Feet].status, SegmentStatus::FrostbiteRisk);
        assert_relative_eq!(
            summaries[Segment::Hands].drop.get::<delta_celsius>(),
            37.79,
            epsilon = 0.1
        );

        assert!(engine.core_shell_gradient().get::<delta_celsius>() > 30.0);
    }

    #[test]
    fn wet_clothing_cools_faster() {
        for config in [PhysiologyConfig::basic(), PhysiologyConfig::alpine()] {
            let env = sea_level(-10.0, 20.0);
            let dry = simulate(config, &env, &climber(1.0, 1.5), 120);
            let wet = simulate(config, &env, &climber(1.0, 1.5).wet(true), 120);

            assert!(wet.core_temperature() < dry.core_temperature());
            for segment in Segment::ALL {
                assert!(
                    wet.segment(segment).temperature() <= dry.segment(segment).temperature(),
                    "{:?} {segment}",
                    config.variant
                );
            }
        }
    }

    #[test]
    fn colder_air_never_leaves_skin_warmer() {
        for config in [PhysiologyConfig::basic(), PhysiologyConfig::alpine()] {
            let person = climber(1.0, 1.5);
            let mild = simulate(config, &sea_level(-10.0, 20.0), &person, 120);
            let cold = simulate(config, &sea_level(-20.0, 20.0), &person, 120);

            for segment in Segment::ALL {
                assert!(
                    cold.segment(segment).temperature() <= mild.segment(segment).temperature(),
                    "{:?} {segment}",
                    config.variant
                );
            }
        }
    }

    #[test]
    fn high_altitude_core_cools_every_minute() {
        // -30 °C, 25 km/h, 8500 m without oxygen, resting in 3.5 Clo, no sun.
        let engine = simulate(PhysiologyConfig::alpine(), &summit(0.0), &climber(1.0, 3.5), 120);

        let core = engine.core_history();
        assert!(core.windows(2).all(|pair| pair[1] < pair[0]));
        assert_relative_eq!(c(engine.core_temperature()), 36.347, epsilon = 0.01);

        let drop = |segment| {
            let body = engine.segment(segment);
            c(body.initial_temperature()) - c(body.temperature())
        };
        assert!(drop(Segment::Hands) > drop(Segment::Trunk));
        assert!(drop(Segment::Feet) > drop(Segment::Trunk));
        assert!(drop(Segment::Hands) > drop(Segment::Feet));
    }

    #[test]
    fn skin_never_drops_below_ambient() {
        let cases = [
            (PhysiologyConfig::basic(), sea_level(-40.0, 60.0), climber(1.0, 0.0).wet(true)),
            (PhysiologyConfig::alpine(), summit(0.0), climber(1.0, 0.5)),
            (PhysiologyConfig::basic(), sea_level(-10.0, 20.0), climber(1.0, 1.5)),
        ];

        for (config, env, person) in cases {
            let engine = simulate(config, &env, &person, 240);
            let ambient = env.ambient_temperature();
            for body in engine.segments().values() {
                assert!(body.history().iter().all(|&t| t >= ambient));
            }
        }
    }

    #[test]
    fn hypoxia_caps_reported_metabolism() {
        let mut engine = PhysiologyEngine::new(PhysiologyConfig::alpine());

        let without = engine.step(&summit(0.0), &climber(8.0, 3.5));
        assert_relative_eq!(without.realized_metabolism.get::<watt>(), 300.0, epsilon = 1e-6);
        let ceiling = without.metabolic_ceiling.unwrap();
        assert_relative_eq!(ceiling.get::<watt>(), 300.0, epsilon = 1e-6);

        let with = engine.step(&summit(0.0), &climber(8.0, 3.5).with_oxygen(true));
        assert_relative_eq!(with.realized_metabolism.get::<watt>(), 600.0, epsilon = 1e-6);
        assert!(with.hypoxia_factor.unwrap() > without.hypoxia_factor.unwrap());
    }

    #[test]
    fn hard_work_at_altitude_never_exceeds_reported_ceiling() {
        for config in [PhysiologyConfig::basic(), PhysiologyConfig::alpine()] {
            let mut engine = PhysiologyEngine::new(config);
            for report in engine.run(30, &summit(0.0), &climber(8.0, 3.5)) {
                match config.variant {
                    ModelVariant::Basic => {
                        assert_eq!(report.metabolic_ceiling, None);
                        assert_eq!(report.hypoxia_factor, None);
                    }
                    ModelVariant::Alpine => {
                        let ceiling = report.metabolic_ceiling.unwrap();
                        assert!(report.realized_metabolism <= ceiling);
                        assert!(report.hypoxia_factor.is_some());
                    }
                }
            }
        }
    }

    #[test]
    fn status_follows_core() {
        let mut engine = PhysiologyEngine::default();
        let report = engine.step(&sea_level(-10.0, 20.0), &climber(1.0, 1.5));
        assert_eq!(report.core_status(), engine.core_status());
        assert_eq!(report.core_temperature, engine.core_temperature());
        assert_eq!(report.minute, 1);
    }
}
