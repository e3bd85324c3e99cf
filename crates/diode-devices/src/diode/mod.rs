//! Junction Diode Model
//!
//! Static I-V model of a single semiconductor junction, used by the lab bench
//! to answer point measurements and voltage sweeps.
//!
//! ## Module Structure
//!
//! - `params`: Physical constants and construction inputs (DiodeParams)
//! - `types`: Material selection and sweep output (Material, IvPoint)
//! - `evaluate`: DiodeModel construction and current evaluation
//!
//! ## Usage
//!
//! ```
//! use diode_devices::diode::{DiodeModel, DiodeParams, Material};
//!
//! let params = DiodeParams {
//!     material: Material::Silicon,
//!     ..DiodeParams::default()
//! };
//! let model = DiodeModel::new(&params);
//!
//! let id = model.evaluate(0.6);
//! assert!(id > 0.0);
//! ```
//!
//! ## Current Model
//!
//! | Region | Condition | Current |
//! |--------|-----------|---------|
//! | Breakdown | Zener and V <= -Vz | -(\|V\| - Vz) / 2 |
//! | Shockley | otherwise | Is * (exp(min(V / (n*Vt), 100)) - 1) |
//!
//! Evaluation is total: degenerate parameters produce 0 A rather than NaN or
//! infinity.

pub mod params;
pub mod types;
pub mod evaluate;

pub use params::{DiodeParams, K_BOLTZMANN, Q_ELECTRON};
pub use types::{IvPoint, Material};
pub use evaluate::DiodeModel;
