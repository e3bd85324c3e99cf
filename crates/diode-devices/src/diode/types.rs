//! Diode type definitions
//!
//! Material selection and the output of a voltage sweep.

use std::fmt;

/// Junction material
///
/// `Si` and `Zener` share the low-leakage baseline. Any other name falls into
/// the leaky bucket and is kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Material {
    Silicon,
    Zener,
    Other(String),
}

impl Default for Material {
    fn default() -> Self {
        Material::Silicon
    }
}

impl Material {
    /// Parse a material name. Names are case-sensitive: "si" is not silicon.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Si" => Material::Silicon,
            "Zener" => Material::Zener,
            other => Material::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Material::Silicon => "Si",
            Material::Zener => "Zener",
            Material::Other(name) => name,
        }
    }

    pub fn is_zener(&self) -> bool {
        matches!(self, Material::Zener)
    }

    pub(crate) fn is_low_leakage(&self) -> bool {
        matches!(self, Material::Silicon | Material::Zener)
    }
}

impl From<&str> for Material {
    fn from(name: &str) -> Self {
        Material::from_name(name)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One point of an I-V characteristic
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IvPoint {
    /// Applied voltage rounded to millivolts [V]
    pub voltage: f64,
    /// Diode current at the unrounded voltage [A]
    pub current: f64,
}
