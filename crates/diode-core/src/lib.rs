pub mod analysis;
pub mod bench;
pub mod export;
pub mod measurement;
