pub mod diode;

pub use diode::{DiodeModel, DiodeParams, IvPoint, Material};
