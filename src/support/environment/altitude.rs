//! Altitude effects: barometric pressure, hypoxia, and the metabolic ceiling.

use uom::si::{
    f64::{Length, Power, Pressure, Ratio},
    length::meter,
    power::watt,
    pressure::hectopascal,
    ratio::ratio,
};

/// Sea-level standard pressure, hPa.
pub const SEA_LEVEL_PRESSURE_HPA: f64 = 1013.25;

/// Altitude at which supplemental oxygen stops mattering, m.
///
/// Breathing bottled oxygen is treated as descending this far.
pub const OXYGEN_SUPPORT_BENEFIT_M: f64 = 3000.0;

/// Effective altitude above which aerobic capacity starts to decline, m.
pub const HYPOXIA_ONSET_M: f64 = 1500.0;

/// Loss of aerobic capacity per metre above [`HYPOXIA_ONSET_M`].
pub const HYPOXIA_DECLINE_PER_M: f64 = 1.0e-4;

/// Lowest hypoxia factor; an acclimatized climber never drops below this.
pub const HYPOXIA_FLOOR: f64 = 0.2;

/// Highest sustainable metabolic heat production at sea level, W.
pub const MAX_METABOLISM_W: f64 = 1000.0;

/// Whole-body heat production per MET, W.
pub const WATTS_PER_MET: f64 = 80.0;

/// Returns the air pressure at `altitude` from the standard barometric formula.
///
/// ```text
/// P = 1013.25·(1 − 2.25577e-5·h)^5.25588   [hPa, h in m]
/// ```
///
/// The base is floored at zero so absurd altitudes give zero pressure
/// instead of `NaN`.
#[must_use]
pub fn air_pressure(altitude: Length) -> Pressure {
    let h = altitude.get::<meter>();
    let base = (1.0 - 2.255_77e-5 * h).max(0.0);
    Pressure::new::<hectopascal>(SEA_LEVEL_PRESSURE_HPA * base.powf(5.255_88))
}

/// Returns the physiologically effective altitude.
///
/// Supplemental oxygen lowers it by [`OXYGEN_SUPPORT_BENEFIT_M`], floored at sea level.
#[must_use]
pub fn effective_altitude(altitude: Length, oxygen_support: bool) -> Length {
    if oxygen_support {
        let h = (altitude.get::<meter>() - OXYGEN_SUPPORT_BENEFIT_M).max(0.0);
        Length::new::<meter>(h)
    } else {
        altitude
    }
}

/// Returns the fraction of sea-level aerobic capacity available at `altitude`.
///
/// The factor is 1 up to [`HYPOXIA_ONSET_M`] of effective altitude and then
/// declines linearly, never dropping below [`HYPOXIA_FLOOR`].
#[must_use]
pub fn hypoxia_factor(altitude: Length, oxygen_support: bool) -> Ratio {
    let h = effective_altitude(altitude, oxygen_support).get::<meter>();
    let factor = if h > HYPOXIA_ONSET_M {
        (1.0 - (h - HYPOXIA_ONSET_M) * HYPOXIA_DECLINE_PER_M).max(HYPOXIA_FLOOR)
    } else {
        1.0
    };
    Ratio::new::<ratio>(factor)
}

/// Returns the highest metabolic heat production the climber can sustain.
#[must_use]
pub fn metabolic_ceiling(hypoxia: Ratio) -> Power {
    Power::new::<watt>(MAX_METABOLISM_W * hypoxia.get::<ratio>())
}

/// Returns the whole-body metabolism actually achieved for a requested activity.
///
/// The request is `mets × WATTS_PER_MET`, capped by the hypoxia-limited ceiling.
#[must_use]
pub fn realized_metabolism(mets: f64, hypoxia: Ratio) -> Power {
    let requested = mets * WATTS_PER_MET;
    let ceiling = metabolic_ceiling(hypoxia).get::<watt>();
    Power::new::<watt>(requested.min(ceiling))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn m(h: f64) -> Length {
        Length::new::<meter>(h)
    }

    #[test]
    fn sea_level_pressure() {
        assert_relative_eq!(air_pressure(m(0.0)).get::<hectopascal>(), 1013.25, epsilon = 1e-9);
    }

    #[test]
    fn pressure_near_everest_summit() {
        // Standard atmosphere gives roughly a third of sea level at 8.8 km.
        let p = air_pressure(m(8848.0)).get::<hectopascal>();
        assert_relative_eq!(p, 314.0, epsilon = 2.0);
    }

    #[test]
    fn pressure_never_nan() {
        let p = air_pressure(m(60_000.0)).get::<hectopascal>();
        assert_eq!(p, 0.0);
    }

    #[test]
    fn no_hypoxia_below_onset() {
        assert_relative_eq!(hypoxia_factor(m(0.0), false).get::<ratio>(), 1.0);
        assert_relative_eq!(hypoxia_factor(m(1500.0), false).get::<ratio>(), 1.0);
    }

    #[test]
    fn hypoxia_declines_linearly() {
        assert_relative_eq!(hypoxia_factor(m(3500.0), false).get::<ratio>(), 0.8, epsilon = 1e-9);
        assert_relative_eq!(hypoxia_factor(m(8500.0), false).get::<ratio>(), 0.3, epsilon = 1e-9);
    }

    #[test]
    fn hypoxia_is_floored() {
        assert_relative_eq!(hypoxia_factor(m(12_000.0), false).get::<ratio>(), HYPOXIA_FLOOR);
    }

    #[test]
    fn oxygen_support_lowers_effective_altitude() {
        assert_relative_eq!(effective_altitude(m(8500.0), true).get::<meter>(), 5500.0);
        assert_relative_eq!(effective_altitude(m(2000.0), true).get::<meter>(), 0.0);
        assert_relative_eq!(hypoxia_factor(m(8500.0), true).get::<ratio>(), 0.6, epsilon = 1e-9);
    }

    #[test]
    fn ceiling_caps_hard_work_at_altitude() {
        let summit = hypoxia_factor(m(8500.0), false);
        assert_relative_eq!(metabolic_ceiling(summit).get::<watt>(), 300.0, epsilon = 1e-6);

        // 8 METs asks for 640 W but only 300 W is available.
        let realized = realized_metabolism(8.0, summit);
        assert_relative_eq!(realized.get::<watt>(), 300.0, epsilon = 1e-6);

        // Resting fits under the ceiling.
        let resting = realized_metabolism(1.0, summit);
        assert_relative_eq!(resting.get::<watt>(), 80.0, epsilon = 1e-9);
    }

    #[test]
    fn oxygen_support_raises_ceiling() {
        let without = realized_metabolism(8.0, hypoxia_factor(m(8500.0), false));
        let with = realized_metabolism(8.0, hypoxia_factor(m(8500.0), true));
        assert!(with > without);
        assert_relative_eq!(with.get::<watt>(), 600.0, epsilon = 1e-6);
    }
}
