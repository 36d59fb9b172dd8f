//! JSON import/export of meshes and metrics.

pub mod export;
