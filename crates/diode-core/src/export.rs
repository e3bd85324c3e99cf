use diode_devices::diode::{DiodeModel, IvPoint};
use std::fs;
use std::path::Path;

/// Render a sweep as a plain-text table: header, model parameters, then one
/// `voltage current` row per point in scientific notation.
pub fn format_sweep_text(model: &DiodeModel, points: &[IvPoint], precision: usize) -> String {
    let mut out = String::new();
    out.push_str("IV_SWEEP\n");
    out.push_str(&format!("material={}\n", model.material()));
    out.push_str(&format!("temp_k={}\n", model.temperature_kelvin()));
    out.push_str(&format!("vt={:.*e}\n", precision, model.thermal_voltage()));
    out.push_str(&format!("is={:.*e}\n", precision, model.saturation_current()));
    out.push_str(&format!("ideality={}\n", model.ideality_factor()));
    if model.material().is_zener() {
        out.push_str(&format!("zener_v={}\n", model.zener_voltage()));
    }
    out.push_str(&format!("points={}\n", points.len()));
    out.push_str("values:\n");
    for point in points {
        out.push_str(&format!(
            "{:.3} {:.*e}\n",
            point.voltage, precision, point.current
        ));
    }
    out
}

pub fn write_sweep_text(
    model: &DiodeModel,
    points: &[IvPoint],
    path: &Path,
    precision: usize,
) -> std::io::Result<()> {
    fs::write(path, format_sweep_text(model, points, precision))
}
