use diode_core::analysis::SweepPlan;
use diode_core::bench::Bench;
use diode_core::export::{format_sweep_text, write_sweep_text};
use diode_devices::diode::{DiodeParams, Material};

#[test]
fn sweep_text_has_header_and_rows() {
    let bench = Bench::new(&DiodeParams::default());
    let plan = SweepPlan {
        start: 0.0,
        stop: 0.5,
        points: 3,
    };
    let points = bench.sweep(&plan);
    let text = format_sweep_text(&bench.model, &points, 4);

    assert!(text.starts_with("IV_SWEEP\n"));
    assert!(text.contains("material=Si\n"));
    assert!(text.contains("points=3\n"));
    assert!(!text.contains("zener_v="));
    let rows: Vec<&str> = text
        .split("values:\n")
        .nth(1)
        .unwrap()
        .lines()
        .collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[0].starts_with("0.000 "));
    assert!(rows[2].starts_with("0.500 "));
}

#[test]
fn sweep_text_writer_outputs_file() {
    let bench = Bench::new(&DiodeParams {
        material: Material::Zener,
        ..DiodeParams::default()
    });
    let points = bench.sweep(&SweepPlan::default());

    let mut path = std::env::temp_dir();
    path.push("diode_lab_sweep_test.txt");
    write_sweep_text(&bench.model, &points, &path, 6).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("material=Zener"));
    assert!(content.contains("zener_v=5.1"));
    assert!(content.contains("-2.000 "));
}
