//! Wind speed corrections.

use uom::si::{
    f64::{ThermodynamicTemperature, Velocity},
    thermodynamic_temperature::degree_celsius,
    velocity::kilometer_per_hour,
};

/// Wind speed (km/h) below which air is treated as calm.
pub const CALM_WIND_KMH: f64 = 5.0;

/// Fraction of the measured wind speed that reaches the skin boundary layer
/// once the wind is no longer calm.
pub const BOUNDARY_LAYER_WIND_FRACTION: f64 = 0.6;

/// Returns `true` below [`CALM_WIND_KMH`].
///
/// Compared as quantities: exactly 5 km/h is not calm.
fn is_calm(wind: Velocity) -> bool {
    wind < Velocity::new::<kilometer_per_hour>(CALM_WIND_KMH)
}

/// Returns the wind speed that drives convective exchange at the body surface.
///
/// Calm air passes through unchanged. At or above [`CALM_WIND_KMH`] the speed is
/// scaled by [`BOUNDARY_LAYER_WIND_FRACTION`], an empirical correction for the
/// suppression of turbulent exchange in the boundary layer around clothing.
#[must_use]
pub fn effective_wind_speed(wind: Velocity) -> Velocity {
    if is_calm(wind) {
        wind
    } else {
        wind * BOUNDARY_LAYER_WIND_FRACTION
    }
}

/// Returns the Osczevski–Bluestein wind-chill temperature.
///
/// In calm air the wind chill equals the ambient temperature. Otherwise:
///
/// ```text
/// WCT = 13.12 + 0.6215·T − 11.37·V^0.16 + 0.3965·T·V^0.16
/// ```
///
/// with `T` in °C and `V` in km/h.
#[must_use]
pub fn wind_chill_temperature(
    ambient: ThermodynamicTemperature,
    wind: Velocity,
) -> ThermodynamicTemperature {
    if is_calm(wind) {
        return ambient;
    }

    let v = wind.get::<kilometer_per_hour>();
    let t = ambient.get::<degree_celsius>();
    let v16 = v.powf(0.16);
    let wct = 13.12 + 0.6215 * t - 11.37 * v16 + 0.3965 * t * v16;

    ThermodynamicTemperature::new::<degree_celsius>(wct)
}
