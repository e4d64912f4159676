//! Clinical-style classification of simulated temperatures.

use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::TemperatureDifference;

use super::{BodySegment, Segment};

/// Core temperature band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CoreStatus {
    /// 36.5 °C and above.
    Normal,
    /// Below 36.5 °C.
    ColdStress,
    /// Below 35 °C.
    MildHypothermia,
    /// Below 32 °C.
    SevereHypothermia,
}

impl CoreStatus {
    #[must_use]
    pub fn classify(core: ThermodynamicTemperature) -> Self {
        let t = core.get::<degree_celsius>();
        if t < 32.0 {
            Self::SevereHypothermia
        } else if t < 35.0 {
            Self::MildHypothermia
        } else if t < 36.5 {
            Self::ColdStress
        } else {
            Self::Normal
        }
    }
}

/// Skin temperature band of one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SegmentStatus {
    /// 28 °C and above.
    Normal,
    /// Below 28 °C.
    Cooled,
    /// Below 15 °C.
    FrostbiteRisk,
}

impl SegmentStatus {
    #[must_use]
    pub fn classify(skin: ThermodynamicTemperature) -> Self {
        let t = skin.get::<degree_celsius>();
        if t < 15.0 {
            Self::FrostbiteRisk
        } else if t < 28.0 {
            Self::Cooled
        } else {
            Self::Normal
        }
    }
}

/// Start-to-now summary of one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSummary {
    pub segment: Segment,
    pub initial: ThermodynamicTemperature,
    pub current: ThermodynamicTemperature,
    /// `initial − current`; positive when the segment has cooled.
    pub drop: TemperatureInterval,
    pub status: SegmentStatus,
}

impl SegmentSummary {
    #[must_use]
    pub fn of(body: &BodySegment) -> Self {
        let initial = body.initial_temperature();
        let current = body.temperature();
        Self {
            segment: body.segment(),
            initial,
            current,
            drop: initial.minus(current),
            status: SegmentStatus::classify(current),
        }
    }
}
