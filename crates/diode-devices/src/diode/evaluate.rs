//! Diode DC Evaluation
//!
//! Computes the instantaneous junction current for an applied voltage.
//!
//! ## Current Model
//!
//! **Zener breakdown (V <= -Vz)**:
//! - Id = -(|V| - Vz) / R_bd, with R_bd fixed at 2 Ohm
//!
//! **Shockley (all other cases)**:
//! - x = min(V / (n * Vt), 100)
//! - Id = Is * (exp(x) - 1)
//!
//! The exponent ceiling saturates the output at large forward bias instead of
//! overflowing. Anything the ceiling cannot catch (zero n*Vt, NaN exponent,
//! infinite Is) is mapped to 0 A explicitly, so `evaluate` is total.

use super::params::{DiodeParams, BREAKDOWN_RESISTANCE, EXPONENT_LIMIT};
use super::types::{IvPoint, Material};

/// Static diode model
///
/// Derived quantities are fixed at construction; build a new model when the
/// temperature or material changes.
#[derive(Debug, Clone, PartialEq)]
pub struct DiodeModel {
    material: Material,
    temp_k: f64,
    vt: f64,
    zener_v: f64,
    n: f64,
    is: f64,
}

impl DiodeModel {
    pub fn new(params: &DiodeParams) -> Self {
        Self {
            material: params.material.clone(),
            temp_k: params.temp_k(),
            vt: params.thermal_voltage(),
            zener_v: params.zener_v,
            n: params.ideality,
            is: params.saturation_current(),
        }
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Junction temperature [K]
    pub fn temperature_kelvin(&self) -> f64 {
        self.temp_k
    }

    /// Thermal voltage kT/q [V]
    pub fn thermal_voltage(&self) -> f64 {
        self.vt
    }

    /// Saturation (leakage) current [A]
    pub fn saturation_current(&self) -> f64 {
        self.is
    }

    pub fn zener_voltage(&self) -> f64 {
        self.zener_v
    }

    pub fn ideality_factor(&self) -> f64 {
        self.n
    }

    /// Diode current [A] at `voltage` [V]. Always finite.
    pub fn evaluate(&self, voltage: f64) -> f64 {
        let current = if self.in_breakdown(voltage) {
            self.breakdown_current(voltage)
        } else {
            self.shockley_current(voltage)
        };
        if current.is_finite() {
            current
        } else {
            0.0
        }
    }

    /// Evaluate each voltage independently, preserving order.
    pub fn sweep<I>(&self, voltages: I) -> Vec<IvPoint>
    where
        I: IntoIterator<Item = f64>,
    {
        voltages
            .into_iter()
            .map(|v| IvPoint {
                voltage: round_millivolts(v),
                current: self.evaluate(v),
            })
            .collect()
    }

    /// Breakdown boundary is inclusive.
    fn in_breakdown(&self, voltage: f64) -> bool {
        self.material.is_zener() && voltage <= -self.zener_v
    }

    fn breakdown_current(&self, voltage: f64) -> f64 {
        -(voltage.abs() - self.zener_v) / BREAKDOWN_RESISTANCE
    }

    fn shockley_current(&self, voltage: f64) -> f64 {
        let n_vt = self.n * self.vt;
        if n_vt == 0.0 || !n_vt.is_finite() {
            return 0.0;
        }
        let exponent = voltage / n_vt;
        if exponent.is_nan() {
            return 0.0;
        }
        self.is * (exponent.min(EXPONENT_LIMIT).exp() - 1.0)
    }
}

/// Round to 3 decimal places for display.
///
/// Goes through `{:.3}`, which rounds the exact binary value, so 0.1235
/// (stored just below the tie) becomes 0.123.
pub fn round_millivolts(v: f64) -> f64 {
    format!("{v:.3}").parse::<f64>().unwrap_or(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn model(material: Material) -> DiodeModel {
        DiodeModel::new(&DiodeParams {
            material,
            ..DiodeParams::default()
        })
    }

    #[test]
    fn test_silicon_defaults() {
        let m = model(Material::Silicon);
        assert_relative_eq!(m.temperature_kelvin(), 300.15, epsilon = 1e-9);
        assert_relative_eq!(m.thermal_voltage(), 0.025865, epsilon = 1e-5);
        assert_relative_eq!(m.saturation_current(), 1e-12, max_relative = 1e-12);

        let id = m.evaluate(0.6);
        assert!(id > 1e-6 && id < 1e-3, "id = {id:e}");
    }

    #[test]
    fn test_leaky_material_baseline() {
        let m = model(Material::from_name("Ge"));
        assert_relative_eq!(m.saturation_current(), 1e-6, max_relative = 1e-12);
    }

    #[test]
    fn test_saturation_current_doubles_per_ten_degrees() {
        let hot = DiodeModel::new(&DiodeParams {
            temp_c: 37.0,
            ..DiodeParams::default()
        });
        assert_relative_eq!(hot.saturation_current(), 2e-12, max_relative = 1e-12);
    }

    #[rstest]
    #[case(Material::Silicon)]
    #[case(Material::Zener)]
    #[case(Material::Other("LED".to_string()))]
    fn test_zero_bias_is_zero(#[case] material: Material) {
        assert_eq!(model(material).evaluate(0.0), 0.0);
    }

    #[rstest]
    #[case(Material::Silicon)]
    #[case(Material::Other("Ge".to_string()))]
    fn test_non_zener_never_breaks_down(#[case] material: Material) {
        let m = model(material);
        for v in [-5.1, -10.0, -100.0] {
            let id = m.evaluate(v);
            assert!(id < 0.0);
            assert!(id >= -m.saturation_current());
        }
    }

    #[test]
    fn test_zener_breakdown_boundary_inclusive() {
        let m = model(Material::Zener);
        assert_eq!(m.evaluate(-5.1), 0.0);
        assert!(m.in_breakdown(-5.1));
        assert!(!m.in_breakdown(-5.0999));
        assert_relative_eq!(m.evaluate(-7.1), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zener_above_breakdown_uses_shockley() {
        let m = model(Material::Zener);
        let id = m.evaluate(-3.0);
        assert!(id < 0.0 && id > -1e-11);
    }

    #[test]
    fn test_forward_current_monotonic() {
        let m = model(Material::Silicon);
        let mut last = f64::NEG_INFINITY;
        for step in 0..=600 {
            let v = -2.0 + step as f64 * 0.01;
            let id = m.evaluate(v);
            assert!(id >= last, "not monotonic at {v}");
            last = id;
        }
    }

    #[test]
    fn test_exponent_clamped() {
        let m = model(Material::Silicon);
        let ceiling = m.saturation_current() * (EXPONENT_LIMIT.exp() - 1.0);
        assert_eq!(m.evaluate(10.0), ceiling);
        assert_eq!(m.evaluate(1e6), ceiling);
    }

    #[test]
    fn test_zero_ideality_falls_back_to_zero() {
        let m = DiodeModel::new(&DiodeParams {
            ideality: 0.0,
            ..DiodeParams::default()
        });
        assert_eq!(m.evaluate(0.6), 0.0);
        assert_eq!(m.evaluate(0.0), 0.0);
        assert_eq!(m.evaluate(-1.0), 0.0);
    }

    #[test]
    fn test_absolute_zero_falls_back_to_zero() {
        let m = DiodeModel::new(&DiodeParams {
            temp_c: -273.15,
            ..DiodeParams::default()
        });
        assert_eq!(m.evaluate(0.6), 0.0);
    }

    #[test]
    fn test_overflowed_saturation_current_falls_back_to_zero() {
        let m = DiodeModel::new(&DiodeParams {
            temp_c: 1e5,
            ..DiodeParams::default()
        });
        assert!(m.saturation_current().is_infinite());
        assert_eq!(m.evaluate(0.0), 0.0);
        assert_eq!(m.evaluate(0.6), 0.0);
    }

    #[test]
    fn test_nan_voltage_is_contained() {
        assert_eq!(model(Material::Zener).evaluate(f64::NAN), 0.0);
    }

    #[test]
    fn test_sweep_preserves_order_and_rounds() {
        let m = model(Material::Silicon);
        let points = m.sweep([0.12345, -0.5, 0.6]);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].voltage, 0.123);
        assert_eq!(points[0].current, m.evaluate(0.12345));
        assert_eq!(points[1].voltage, -0.5);
        assert_eq!(points[2].current, m.evaluate(0.6));
    }

    #[test]
    fn test_round_millivolts() {
        assert_eq!(round_millivolts(-1.97651), -1.977);
        assert_eq!(round_millivolts(1.5), 1.5);
    }

    #[rstest]
    #[case(1.0005, 1.0)]
    #[case(0.1235, 0.123)]
    #[case(1.2345, 1.234)]
    #[case(0.0045, 0.004)]
    #[case(-1.9985, -1.998)]
    fn test_round_millivolts_uses_exact_binary_value(#[case] v: f64, #[case] expected: f64) {
        assert_eq!(round_millivolts(v), expected);
    }

    #[test]
    fn test_sweep_rounds_caller_voltage_exactly() {
        let points = model(Material::Silicon).sweep([1.0005, 0.1235]);
        assert_eq!(points[0].voltage, 1.0);
        assert_eq!(points[1].voltage, 0.123);
    }
}
