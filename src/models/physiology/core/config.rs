use uom::si::{
    f64::{Mass, SpecificHeatCapacity, TemperatureInterval, ThermodynamicTemperature},
    mass::kilogram,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    temperature_interval::degree_celsius as delta_celsius,
    thermodynamic_temperature::degree_celsius,
};

use super::{PerSegment, SegmentParameters};

/// Which formulation of the body model to integrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelVariant {
    /// Each segment scales its own basal heat with activity, and the core
    /// receives a weighted copy of total metabolism. Altitude does not affect
    /// the balance, and no hypoxia limit is applied or reported.
    #[default]
    Basic,

    /// High-altitude formulation: realized metabolism is capped by hypoxia and
    /// redistributed over segments by fixed shares, the core loses heat
    /// through respiration, and segments absorb solar radiation.
    Alpine,
}

/// Constants of the bioheat integration.
///
/// The defaults are one canonical, self-consistent set; see `DESIGN.md` for
/// why these values were picked among the published variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysiologyConfig {
    /// Model formulation.
    pub variant: ModelVariant,

    /// Fixed parameters of each body segment.
    pub segments: PerSegment<SegmentParameters>,

    /// Lumped heat capacity of body tissue.
    pub tissue_specific_heat: SpecificHeatCapacity,

    /// Mass of the central blood and core compartment.
    pub core_mass: Mass,

    /// Heat carried by perfusion per kilogram of tissue per kelvin of
    /// core-to-skin gradient, J/(kg·K·min).
    pub perfusion_constant: f64,

    /// Core temperature below which peripheral vasoconstriction starts.
    pub vasoconstriction_onset: ThermodynamicTemperature,

    /// Scale applied to `sensitivity × (onset − core)` in the blood-flow response.
    pub vasoconstriction_scale: f64,

    /// Fraction of extra METs that reaches head, hands and feet in the basic variant.
    pub extremity_activity_damping: f64,

    /// Multiplier on total metabolism credited to the core in the basic variant.
    pub core_metabolic_weighting: f64,

    /// Core temperature below which residual shivering adds heat.
    pub homeostasis_threshold: ThermodynamicTemperature,

    /// Core warming per minute from residual shivering.
    ///
    /// In the alpine variant it is scaled by the hypoxia factor.
    pub homeostasis_increment: TemperatureInterval,

    /// Skin temperature of every segment at the start of a run.
    pub initial_skin_temperature: ThermodynamicTemperature,

    /// Core temperature at the start of a run.
    pub initial_core_temperature: ThermodynamicTemperature,
}

impl Default for PhysiologyConfig {
    fn default() -> Self {
        Self::basic()
    }
}

impl PhysiologyConfig {
    /// Returns the sea-level formulation.
    #[must_use]
    pub fn basic() -> Self {
        Self {
            variant: ModelVariant::Basic,
            segments: PerSegment::from_fn(SegmentParameters::standard),
            tissue_specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(3470.0),
            core_mass: Mass::new::<kilogram>(50.0),
            perfusion_constant: 18.0,
            vasoconstriction_onset: ThermodynamicTemperature::new::<degree_celsius>(36.8),
            vasoconstriction_scale: 8.0,
            extremity_activity_damping: 0.1,
            core_metabolic_weighting: 1.5,
            homeostasis_threshold: ThermodynamicTemperature::new::<degree_celsius>(37.0),
            homeostasis_increment: TemperatureInterval::new::<delta_celsius>(0.002),
            initial_skin_temperature: ThermodynamicTemperature::new::<degree_celsius>(33.0),
            initial_core_temperature: ThermodynamicTemperature::new::<degree_celsius>(37.0),
        }
    }

    /// Returns the high-altitude formulation.
    #[must_use]
    pub fn alpine() -> Self {
        Self {
            variant: ModelVariant::Alpine,
            homeostasis_threshold: ThermodynamicTemperature::new::<degree_celsius>(36.5),
            homeostasis_increment: TemperatureInterval::new::<delta_celsius>(0.003),
            ..Self::basic()
        }
    }

    /// Replaces the parameters of every segment.
    #[must_use]
    pub fn with_segments(mut self, segments: PerSegment<SegmentParameters>) -> Self {
        self.segments = segments;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::physiology::Segment;

    #[test]
    fn default_is_basic() {
        assert_eq!(PhysiologyConfig::default(), PhysiologyConfig::basic());
    }

    #[test]
    fn alpine_only_changes_variant_and_homeostasis() {
        let basic = PhysiologyConfig::basic();
        let alpine = PhysiologyConfig::alpine();

        assert_eq!(alpine.variant, ModelVariant::Alpine);
        assert!(alpine.homeostasis_threshold < basic.homeostasis_threshold);
        assert_eq!(alpine.segments, basic.segments);
        assert_eq!(alpine.perfusion_constant, basic.perfusion_constant);
        assert_eq!(alpine.vasoconstriction_scale, basic.vasoconstriction_scale);
    }

    #[test]
    fn custom_segments() {
        let mut segments = PerSegment::from_fn(SegmentParameters::standard);
        segments[Segment::Hands] = SegmentParameters::standard(Segment::Feet);

        let config = PhysiologyConfig::basic().with_segments(segments);
        assert_eq!(
            config.segments[Segment::Hands],
            SegmentParameters::standard(Segment::Feet)
        );
    }
}
