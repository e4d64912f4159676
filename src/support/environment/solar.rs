//! Absorbed solar radiation.

use uom::si::f64::{Area, HeatFluxDensity, Power};

/// Fraction of incident irradiance absorbed at the skin after clothing
/// reflection and transmission losses.
pub const SOLAR_ABSORPTION: f64 = 0.1;

/// Returns the solar heat absorbed by a body region.
///
/// `exposure` weights how much of the region's area faces the sun.
#[must_use]
pub fn solar_heat_gain(irradiance: HeatFluxDensity, area: Area, exposure: f64) -> Power {
    irradiance * area * (exposure * SOLAR_ABSORPTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{area::square_meter, heat_flux_density::watt_per_square_meter, power::watt};

    #[test]
    fn bright_high_altitude_sun_on_the_head() {
        let q = solar_heat_gain(
            HeatFluxDensity::new::<watt_per_square_meter>(1000.0),
            Area::new::<square_meter>(0.14),
            1.0,
        );
        assert_relative_eq!(q.get::<watt>(), 14.0, epsilon = 1e-9);
    }

    #[test]
    fn no_sun_no_gain() {
        let q = solar_heat_gain(
            HeatFluxDensity::new::<watt_per_square_meter>(0.0),
            Area::new::<square_meter>(0.55),
            0.5,
        );
        assert_eq!(q.get::<watt>(), 0.0);
    }
}
