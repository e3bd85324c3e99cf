//! Diode model parameters
//!
//! Physical constants and the construction inputs of a DiodeModel, with the
//! defaults used by the lab bench.

use super::types::Material;

/// Physical constants (CODATA 2018)
pub const K_BOLTZMANN: f64 = 1.380649e-23; // Boltzmann constant [J/K]
pub const Q_ELECTRON: f64 = 1.60217663e-19; // Elementary charge [C]
pub const ZERO_CELSIUS: f64 = 273.15; // [K]

/// Reference temperature for the saturation current [C]
pub const T_REFERENCE_C: f64 = 27.0;
/// Saturation current doubles every this many degrees [C]
pub const IS_DOUBLING_INTERVAL_C: f64 = 10.0;

/// Saturation current at the reference temperature [A]
pub const IS_SILICON: f64 = 1e-12;
/// Saturation current of leaky (non-silicon) junctions [A]
pub const IS_LEAKY: f64 = 1e-6;

/// Slope of the linearized Zener breakdown region [Ohm]
pub const BREAKDOWN_RESISTANCE: f64 = 2.0;
/// Ceiling on V / (n*Vt) before exponentiation
pub const EXPONENT_LIMIT: f64 = 100.0;

/// Construction inputs of a diode model
///
/// None of these are range-checked. Degenerate values (zero ideality,
/// temperatures at or below absolute zero) are contained during evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct DiodeParams {
    /// Junction material; selects Is baseline and enables breakdown for Zener
    pub material: Material,
    /// Junction temperature [C]
    pub temp_c: f64,
    /// Reverse breakdown magnitude [V], only used for Zener
    pub zener_v: f64,
    /// Ideality (emission) factor [dimensionless], typically in (1, 2]
    pub ideality: f64,
}

impl Default for DiodeParams {
    fn default() -> Self {
        Self {
            material: Material::Silicon,
            temp_c: 27.0,
            zener_v: 5.1,
            ideality: 1.5,
        }
    }
}

impl DiodeParams {
    /// Junction temperature [K]
    pub fn temp_k(&self) -> f64 {
        self.temp_c + ZERO_CELSIUS
    }

    /// Thermal voltage kT/q [V]
    pub fn thermal_voltage(&self) -> f64 {
        K_BOLTZMANN * self.temp_k() / Q_ELECTRON
    }

    /// Temperature-scaled saturation current [A]
    pub fn saturation_current(&self) -> f64 {
        let base = if self.material.is_low_leakage() {
            IS_SILICON
        } else {
            IS_LEAKY
        };
        base * 2f64.powf((self.temp_c - T_REFERENCE_C) / IS_DOUBLING_INTERVAL_C)
    }
}
