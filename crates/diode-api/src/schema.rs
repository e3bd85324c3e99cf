use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use diode_core::measurement::Measurement;
use diode_devices::diode::{DiodeParams, IvPoint, Material};

use crate::error::ApiError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Diode construction fields shared by measure and sweep requests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiodeFields {
    /// Outer `None` is an absent key; `Some(None)` is an explicit `null`.
    #[serde(default, deserialize_with = "present")]
    pub material: Option<Option<String>>,
    pub temp: Option<Value>,
    pub zener_v: Option<Value>,
    pub ideality: Option<Value>,
}

impl DiodeFields {
    pub fn to_params(&self) -> Result<DiodeParams, ApiError> {
        let defaults = DiodeParams::default();
        Ok(DiodeParams {
            material: match &self.material {
                None => defaults.material,
                Some(Some(name)) => Material::from_name(name),
                // a null name is not a known material and lands in the leaky bucket
                Some(None) => Material::from_name("null"),
            },
            temp_c: number_field("temp", self.temp.as_ref(), defaults.temp_c)?,
            zener_v: number_field("zener_v", self.zener_v.as_ref(), defaults.zener_v)?,
            ideality: number_field("ideality", self.ideality.as_ref(), defaults.ideality)?,
        })
    }
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MeasureRequest {
    #[serde(flatten)]
    pub diode: DiodeFields,
    pub voltage: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SweepRequest {
    #[serde(flatten)]
    pub diode: DiodeFields,
    pub start: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MeasureResponse {
    pub current: f64,
    pub power: f64,
    pub status: &'static str,
    pub vt: f64,
    pub is_leakage: f64,
}

impl From<&Measurement> for MeasureResponse {
    fn from(m: &Measurement) -> Self {
        Self {
            current: m.current,
            power: m.power,
            status: m.status.as_str(),
            vt: m.thermal_voltage,
            is_leakage: m.saturation_current,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SweepPointResponse {
    pub v: f64,
    pub i: f64,
}

#[derive(Debug, Serialize)]
pub struct SweepResponse {
    pub data: Vec<SweepPointResponse>,
}

impl From<&[IvPoint]> for SweepResponse {
    fn from(points: &[IvPoint]) -> Self {
        Self {
            data: points
                .iter()
                .map(|p| SweepPointResponse {
                    v: p.voltage,
                    i: p.current,
                })
                .collect(),
        }
    }
}

/// Coerce a JSON number or numeric string. Absent and `null` take the default.
pub fn number_field(
    field: &'static str,
    value: Option<&Value>,
    default: f64,
) -> Result<f64, ApiError> {
    let parsed = match value {
        None | Some(Value::Null) => return Ok(default),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };
    match parsed {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(ApiError::InvalidField {
            field,
            value: value.map(Value::to_string).unwrap_or_default(),
        }),
    }
}
