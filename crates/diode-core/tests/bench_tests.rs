use approx::assert_relative_eq;
use diode_core::analysis::SweepPlan;
use diode_core::bench::Bench;
use diode_core::measurement::OperatingStatus;
use diode_devices::diode::{DiodeParams, Material};

fn bench(material: Material) -> Bench {
    Bench::new(&DiodeParams {
        material,
        ..DiodeParams::default()
    })
}

#[test]
fn silicon_measurement_at_knee() {
    let m = bench(Material::Silicon).measure(0.6);
    assert!(m.current > 1e-6 && m.current < 1e-3);
    assert_relative_eq!(m.power, 0.6 * m.current);
    assert_eq!(m.status, OperatingStatus::Optimal);
    assert_relative_eq!(m.thermal_voltage, 0.02586, epsilon = 1e-4);
    assert_relative_eq!(m.saturation_current, 1e-12, max_relative = 1e-12);
}

#[test]
fn zero_volts_is_idle() {
    let m = bench(Material::Silicon).measure(0.0);
    assert_eq!(m.current, 0.0);
    assert_eq!(m.power, 0.0);
    assert_eq!(m.status, OperatingStatus::Optimal);
}

#[test]
fn strong_forward_bias_overheats() {
    let m = bench(Material::Silicon).measure(1.5);
    assert!(m.current > 1.0);
    assert_eq!(m.status, OperatingStatus::Critical);
}

#[test]
fn zener_breakdown_overheats() {
    let m = bench(Material::Zener).measure(-7.1);
    assert_relative_eq!(m.current, -1.0, epsilon = 1e-12);
    assert_relative_eq!(m.power, 7.1, epsilon = 1e-9);
    assert_eq!(m.status, OperatingStatus::Critical);
}

#[test]
fn default_sweep_is_ascending_and_rounded() {
    let bench = bench(Material::Silicon);
    let points = bench.sweep(&SweepPlan::default());
    assert_eq!(points.len(), 150);
    assert_eq!(points[0].voltage, -2.0);
    assert_eq!(points[149].voltage, 1.5);
    assert!(points.windows(2).all(|w| w[0].voltage < w[1].voltage));
    for p in &points {
        assert_eq!((p.voltage * 1000.0).round() / 1000.0, p.voltage);
    }
    assert_eq!(points[149].current, bench.model.evaluate(1.5));
}

#[test]
fn zener_sweep_reaches_breakdown() {
    let points = bench(Material::Zener).sweep(&SweepPlan::from_start(-8.0));
    assert_relative_eq!(points[0].current, -1.45, epsilon = 1e-12);
    assert!(points.iter().any(|p| p.voltage > -5.1 && p.current > -1e-11 && p.current < 0.0));
}
