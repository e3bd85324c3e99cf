/// Default sweep start [V]
pub const SWEEP_START: f64 = -2.0;
/// Default sweep end [V]
pub const SWEEP_STOP: f64 = 1.5;
/// Default number of sweep samples
pub const SWEEP_POINTS: usize = 150;

/// Linearly spaced voltage sweep, endpoints included.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPlan {
    pub start: f64,
    pub stop: f64,
    pub points: usize,
}

impl Default for SweepPlan {
    fn default() -> Self {
        Self {
            start: SWEEP_START,
            stop: SWEEP_STOP,
            points: SWEEP_POINTS,
        }
    }
}

impl SweepPlan {
    /// Default plan with a caller-chosen start voltage.
    pub fn from_start(start: f64) -> Self {
        Self {
            start,
            ..Self::default()
        }
    }

    /// Spacing between consecutive samples; zero when fewer than two points.
    pub fn step(&self) -> f64 {
        if self.points < 2 {
            return 0.0;
        }
        (self.stop - self.start) / (self.points - 1) as f64
    }

    pub fn voltages(&self) -> Vec<f64> {
        match self.points {
            0 => Vec::new(),
            1 => vec![self.start],
            n => {
                let step = self.step();
                let mut values: Vec<f64> = (0..n).map(|i| self.start + i as f64 * step).collect();
                // pin the endpoint against accumulated rounding
                values[n - 1] = self.stop;
                values
            }
        }
    }
}
