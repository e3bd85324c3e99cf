use std::fmt;

/// Dissipation above which the junction is reported as overheating [W]
pub const OVERHEAT_POWER_LIMIT: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingStatus {
    Optimal,
    Critical,
}

impl OperatingStatus {
    /// Classify an operating point by its dissipated power |V * I|.
    pub fn classify(voltage: f64, current: f64) -> Self {
        if (voltage * current).abs() > OVERHEAT_POWER_LIMIT {
            OperatingStatus::Critical
        } else {
            OperatingStatus::Optimal
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OperatingStatus::Optimal => "OPTIMAL",
            OperatingStatus::Critical => "CRITICAL (OVERHEAT)",
        }
    }
}

impl fmt::Display for OperatingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-point bench reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub voltage: f64,
    pub current: f64,
    pub power: f64,
    pub status: OperatingStatus,
    pub thermal_voltage: f64,
    pub saturation_current: f64,
}
