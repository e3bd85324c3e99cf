use diode_core::measurement::{OperatingStatus, OVERHEAT_POWER_LIMIT};
use rstest::rstest;

#[rstest]
#[case(2.0, 0.3, OperatingStatus::Critical)]
#[case(-2.0, 0.3, OperatingStatus::Critical)]
#[case(0.5, 0.1, OperatingStatus::Optimal)]
#[case(1.0, OVERHEAT_POWER_LIMIT, OperatingStatus::Optimal)]
#[case(0.0, 1e9, OperatingStatus::Optimal)]
fn classifies_by_dissipated_power(
    #[case] voltage: f64,
    #[case] current: f64,
    #[case] expected: OperatingStatus,
) {
    assert_eq!(OperatingStatus::classify(voltage, current), expected);
}

#[test]
fn status_labels() {
    assert_eq!(OperatingStatus::Optimal.as_str(), "OPTIMAL");
    assert_eq!(
        OperatingStatus::Critical.to_string(),
        "CRITICAL (OVERHEAT)"
    );
}
