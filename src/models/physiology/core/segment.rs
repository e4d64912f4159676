//! Body segments and their fixed physiological parameters.

use std::{
    fmt,
    ops::{Index, IndexMut},
};

use thiserror::Error;
use uom::si::{
    area::square_meter,
    f64::{Area, Mass, Power, ThermodynamicTemperature},
    mass::kilogram,
    power::watt,
};

use crate::support::{
    constraint::{ConstraintError, NonNegative, StrictlyPositive, UnitInterval},
    environment::insulation::Exposure,
};

/// One of the six anatomical regions tracked by the body model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Segment {
    Head,
    Trunk,
    Arms,
    Hands,
    Legs,
    Feet,
}

impl Segment {
    /// Number of segments in the body model.
    pub const COUNT: usize = 6;

    /// All segments, in their canonical order.
    pub const ALL: [Segment; Segment::COUNT] = [
        Segment::Head,
        Segment::Trunk,
        Segment::Arms,
        Segment::Hands,
        Segment::Legs,
        Segment::Feet,
    ];

    /// Returns how well the clothing ensemble covers this segment.
    ///
    /// Head and hands stay partly exposed whatever the clothing choice.
    #[must_use]
    pub fn exposure(self) -> Exposure {
        match self {
            Segment::Head | Segment::Hands => Exposure::Exposed,
            Segment::Trunk | Segment::Arms | Segment::Legs | Segment::Feet => Exposure::Covered,
        }
    }

    /// Returns `true` for regions whose heat production barely follows exercise.
    #[must_use]
    pub fn is_extremity(self) -> bool {
        matches!(self, Segment::Head | Segment::Hands | Segment::Feet)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Segment::Head => "head",
            Segment::Trunk => "trunk",
            Segment::Arms => "arms",
            Segment::Hands => "hands",
            Segment::Legs => "legs",
            Segment::Feet => "feet",
        };
        f.write_str(name)
    }
}

/// One value per [`Segment`], indexable by segment.
///
/// ```
/// use thermoreg_models::models::physiology::{PerSegment, Segment};
///
/// let mut counts = PerSegment::from_fn(|_| 0);
/// counts[Segment::Hands] += 1;
/// assert_eq!(counts[Segment::Hands], 1);
/// assert_eq!(counts.iter().count(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerSegment<T>([T; Segment::COUNT]);

impl<T> PerSegment<T> {
    /// Builds a table by evaluating `f` for every segment in canonical order.
    pub fn from_fn(f: impl FnMut(Segment) -> T) -> Self {
        Self(Segment::ALL.map(f))
    }

    /// Iterates over `(segment, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Segment, &T)> {
        Segment::ALL.into_iter().zip(self.0.iter())
    }

    /// Iterates over the values in canonical order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    /// Builds a new table by applying `f` to every entry.
    pub fn map<U>(&self, mut f: impl FnMut(Segment, &T) -> U) -> PerSegment<U> {
        PerSegment::from_fn(|segment| f(segment, &self[segment]))
    }
}

impl<T> Index<Segment> for PerSegment<T> {
    type Output = T;

    fn index(&self, segment: Segment) -> &T {
        &self.0[segment.index()]
    }
}

impl<T> IndexMut<Segment> for PerSegment<T> {
    fn index_mut(&mut self, segment: Segment) -> &mut T {
        &mut self.0[segment.index()]
    }
}

/// Errors from validating [`SegmentParameters`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SegmentParametersError {
    #[error("invalid segment mass {mass:?}")]
    Mass { mass: Mass, source: ConstraintError },
    #[error("invalid segment area {area:?}")]
    Area { area: Area, source: ConstraintError },
    #[error("invalid basal metabolism {basal:?}")]
    BasalMetabolism { basal: Power, source: ConstraintError },
    #[error("invalid vasoconstriction sensitivity {sensitivity}")]
    Vasoconstriction {
        sensitivity: f64,
        source: ConstraintError,
    },
    #[error("invalid solar exposure weight {exposure}")]
    SolarExposure {
        exposure: f64,
        source: ConstraintError,
    },
    #[error("invalid metabolic share {share}")]
    MetabolicShare { share: f64, source: ConstraintError },
}

/// Fixed physiological parameters of a body segment.
///
/// Values are set once when a simulation is built and never change during a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentParameters {
    mass: Mass,
    area: Area,
    basal_metabolism: Power,
    vasoconstriction_sensitivity: f64,
    solar_exposure: f64,
    metabolic_share: f64,
}

impl SegmentParameters {
    /// Constructs validated segment parameters.
    ///
    /// - `vasoconstriction_sensitivity`: higher values shut off blood flow
    ///   faster as the core cools.
    /// - `solar_exposure`: fraction of the area facing the sun, in `[0, 1]`.
    /// - `metabolic_share`: fraction of realized whole-body metabolism
    ///   produced here when activity is redistributed, in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns an error if mass or area is not strictly positive, basal
    /// metabolism or sensitivity is negative, or a fraction lies outside `[0, 1]`.
    pub fn new(
        mass: Mass,
        area: Area,
        basal_metabolism: Power,
        vasoconstriction_sensitivity: f64,
        solar_exposure: f64,
        metabolic_share: f64,
    ) -> Result<Self, SegmentParametersError> {
        StrictlyPositive::new(mass)
            .map_err(|source| SegmentParametersError::Mass { mass, source })?;
        StrictlyPositive::new(area)
            .map_err(|source| SegmentParametersError::Area { area, source })?;
        NonNegative::new(basal_metabolism).map_err(|source| {
            SegmentParametersError::BasalMetabolism {
                basal: basal_metabolism,
                source,
            }
        })?;
        NonNegative::new(vasoconstriction_sensitivity).map_err(|source| {
            SegmentParametersError::Vasoconstriction {
                sensitivity: vasoconstriction_sensitivity,
                source,
            }
        })?;
        UnitInterval::new(solar_exposure).map_err(|source| {
            SegmentParametersError::SolarExposure {
                exposure: solar_exposure,
                source,
            }
        })?;
        UnitInterval::new(metabolic_share).map_err(|source| {
            SegmentParametersError::MetabolicShare {
                share: metabolic_share,
                source,
            }
        })?;

        Ok(Self::new_unchecked(
            mass,
            area,
            basal_metabolism,
            vasoconstriction_sensitivity,
            solar_exposure,
            metabolic_share,
        ))
    }

    /// Constructs segment parameters without validation.
    ///
    /// # Warning
    ///
    /// Non-physical values are accepted and propagate through the integration
    /// as degenerate temperatures rather than errors.
    #[must_use]
    pub fn new_unchecked(
        mass: Mass,
        area: Area,
        basal_metabolism: Power,
        vasoconstriction_sensitivity: f64,
        solar_exposure: f64,
        metabolic_share: f64,
    ) -> Self {
        Self {
            mass,
            area,
            basal_metabolism,
            vasoconstriction_sensitivity,
            solar_exposure,
            metabolic_share,
        }
    }

    /// Returns the reference adult parameters for `segment`.
    ///
    /// Masses, areas and basal heat follow the Fiala (1999) segmentation,
    /// lumped to six regions. Metabolic shares sum to one.
    #[must_use]
    pub fn standard(segment: Segment) -> Self {
        let (mass, area, basal, vaso, solar, share) = match segment {
            Segment::Head => (4.5, 0.14, 12.0, 0.1, 1.0, 0.10),
            Segment::Trunk => (30.0, 0.55, 45.0, 0.1, 0.5, 0.30),
            Segment::Arms => (4.0, 0.26, 3.0, 0.8, 0.6, 0.10),
            Segment::Hands => (0.4, 0.08, 0.5, 3.0, 0.8, 0.10),
            Segment::Legs => (12.0, 0.60, 8.0, 0.8, 0.3, 0.30),
            Segment::Feet => (1.0, 0.14, 0.5, 3.0, 0.1, 0.10),
        };

        Self::new_unchecked(
            Mass::new::<kilogram>(mass),
            Area::new::<square_meter>(area),
            Power::new::<watt>(basal),
            vaso,
            solar,
            share,
        )
    }

    #[must_use]
    pub fn mass(&self) -> Mass {
        self.mass
    }

    #[must_use]
    pub fn area(&self) -> Area {
        self.area
    }

    #[must_use]
    pub fn basal_metabolism(&self) -> Power {
        self.basal_metabolism
    }

    #[must_use]
    pub fn vasoconstriction_sensitivity(&self) -> f64 {
        self.vasoconstriction_sensitivity
    }

    #[must_use]
    pub fn solar_exposure(&self) -> f64 {
        self.solar_exposure
    }

    #[must_use]
    pub fn metabolic_share(&self) -> f64 {
        self.metabolic_share
    }
}

/// Thermal state of one body segment over a run.
///
/// The temperature history is append-only and starts with the initial
/// temperature, so `history()[t]` is the skin temperature after `t` minutes.
#[derive(Debug, Clone, PartialEq)]
pub struct BodySegment {
    segment: Segment,
    parameters: SegmentParameters,
    temperature: ThermodynamicTemperature,
    history: Vec<ThermodynamicTemperature>,
}

impl BodySegment {
    pub(super) fn new(
        segment: Segment,
        parameters: SegmentParameters,
        initial: ThermodynamicTemperature,
    ) -> Self {
        Self {
            segment,
            parameters,
            temperature: initial,
            history: vec![initial],
        }
    }

    /// Returns which region this is.
    #[must_use]
    pub fn segment(&self) -> Segment {
        self.segment
    }

    #[must_use]
    pub fn parameters(&self) -> &SegmentParameters {
        &self.parameters
    }

    /// Returns the current skin temperature.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    /// Returns every recorded skin temperature, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ThermodynamicTemperature] {
        &self.history
    }

    /// Returns the skin temperature at the start of the run.
    #[must_use]
    pub fn initial_temperature(&self) -> ThermodynamicTemperature {
        self.history[0]
    }

    pub(super) fn record(&mut self, temperature: ThermodynamicTemperature) {
        self.temperature = temperature;
        self.history.push(temperature);
    }
}
