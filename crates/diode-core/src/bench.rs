use diode_devices::diode::{DiodeModel, DiodeParams, IvPoint};

use crate::analysis::SweepPlan;
use crate::measurement::{Measurement, OperatingStatus};

/// A diode on the lab bench. Built per request, never shared.
#[derive(Debug, Clone)]
pub struct Bench {
    pub model: DiodeModel,
}

impl Bench {
    pub fn new(params: &DiodeParams) -> Self {
        Self {
            model: DiodeModel::new(params),
        }
    }

    pub fn measure(&self, voltage: f64) -> Measurement {
        let current = self.model.evaluate(voltage);
        Measurement {
            voltage,
            current,
            power: voltage * current,
            status: OperatingStatus::classify(voltage, current),
            thermal_voltage: self.model.thermal_voltage(),
            saturation_current: self.model.saturation_current(),
        }
    }

    pub fn sweep(&self, plan: &SweepPlan) -> Vec<IvPoint> {
        self.model.sweep(plan.voltages())
    }
}
