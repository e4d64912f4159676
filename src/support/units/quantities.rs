use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{HeatFluxDensity, TemperatureInterval},
        heat_flux_density::watt_per_square_meter,
        temperature_interval::kelvin as delta_kelvin,
    },
    typenum::{N1, P1, P3, Z0},
};

/// Area-specific thermal resistance (thermal insulance), m²·K/W in SI.
pub type ThermalInsulance = Quantity<ISQ<Z0, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Thermal insulance of `1 Clo` in m²·K/W.
const M2_K_PER_W_PER_CLO: f64 = 0.155;

/// Creates a [`ThermalInsulance`] from a value in m²·K/W.
#[must_use]
pub fn square_meter_kelvin_per_watt(value: f64) -> ThermalInsulance {
    TemperatureInterval::new::<delta_kelvin>(value)
        / HeatFluxDensity::new::<watt_per_square_meter>(1.0)
}

/// Creates a [`ThermalInsulance`] from a clothing insulation value in Clo.
#[must_use]
pub fn clo(value: f64) -> ThermalInsulance {
    square_meter_kelvin_per_watt(M2_K_PER_W_PER_CLO * value)
}
