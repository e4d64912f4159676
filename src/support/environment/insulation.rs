//! Clothing and boundary-layer insulation.
//!
//! The total insulance between skin and air is modeled as a clothing layer in
//! series with a still-air boundary layer that thins as the wind picks up:
//!
//! ```text
//! r_total = 0.155·clo_local + 0.1 / (1 + 0.5·v_eff)
//! ```
//!
//! where `v_eff` is the effective wind speed in km/h.

use uom::si::{f64::Velocity, velocity::kilometer_per_hour};

use crate::support::units::{ThermalInsulance, clo, square_meter_kelvin_per_watt};

/// Fraction of nominal clothing insulation retained when soaked.
pub const WET_INSULATION_RETAINED: f64 = 0.35;

/// Fraction of (possibly wet) clothing insulation retained over exposed regions.
pub const EXPOSED_INSULATION_RETAINED: f64 = 0.3;

/// Still-air boundary layer insulance, m²·K/W.
pub const BOUNDARY_LAYER_INSULANCE: f64 = 0.1;

/// Boundary-layer thinning per km/h of effective wind.
pub const BOUNDARY_LAYER_WIND_COEFFICIENT: f64 = 0.5;

/// How well a body region is covered by the chosen clothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exposure {
    /// Covered by the full clothing ensemble.
    Covered,
    /// Only partly covered regardless of clothing choice (head, hands).
    Exposed,
}

/// Returns the local clothing insulation (Clo) over a region.
///
/// Wet clothing keeps [`WET_INSULATION_RETAINED`] of its nominal value, and
/// exposed regions keep a further [`EXPOSED_INSULATION_RETAINED`] of that.
#[must_use]
pub fn local_clothing(nominal_clo: f64, is_wet: bool, exposure: Exposure) -> f64 {
    let clo = if is_wet {
        nominal_clo * WET_INSULATION_RETAINED
    } else {
        nominal_clo
    };

    match exposure {
        Exposure::Covered => clo,
        Exposure::Exposed => clo * EXPOSED_INSULATION_RETAINED,
    }
}

/// Returns the total skin-to-air insulance for a local clothing value.
///
/// Negative clothing values are not rejected and simply reduce the result.
#[must_use]
pub fn insulation_resistance(local_clo: f64, effective_wind: Velocity) -> ThermalInsulance {
    let v = effective_wind.get::<kilometer_per_hour>();
    let boundary = square_meter_kelvin_per_watt(
        BOUNDARY_LAYER_INSULANCE / (1.0 + BOUNDARY_LAYER_WIND_COEFFICIENT * v),
    );

    clo(local_clo) + boundary
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn kmh(v: f64) -> Velocity {
        Velocity::new::<kilometer_per_hour>(v)
    }

    #[test]
    fn dry_covered_keeps_nominal() {
        assert_relative_eq!(local_clothing(1.5, false, Exposure::Covered), 1.5);
    }

    #[test]
    fn wet_and_exposed_penalties_compound() {
        assert_relative_eq!(local_clothing(2.0, true, Exposure::Covered), 0.7, epsilon = 1e-12);
        assert_relative_eq!(local_clothing(2.0, false, Exposure::Exposed), 0.6, epsilon = 1e-12);
        assert_relative_eq!(local_clothing(2.0, true, Exposure::Exposed), 0.21, epsilon = 1e-12);
    }

    #[test]
    fn naked_in_still_air_is_boundary_layer_only() {
        assert_relative_eq!(insulation_resistance(0.0, kmh(0.0)).value, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn wind_thins_boundary_layer() {
        // 12 km/h effective: 0.1 / 7 on top of 1.5 Clo.
        let r = insulation_resistance(1.5, kmh(12.0));
        assert_relative_eq!(r.value, 0.2325 + 0.1 / 7.0, epsilon = 1e-12);

        assert!(insulation_resistance(1.5, kmh(30.0)).value < r.value);
    }

    #[test]
    fn wetness_lowers_resistance() {
        let dry = insulation_resistance(local_clothing(1.5, false, Exposure::Covered), kmh(12.0));
        let wet = insulation_resistance(local_clothing(1.5, true, Exposure::Covered), kmh(12.0));
        assert!(wet.value < dry.value);
    }
}
