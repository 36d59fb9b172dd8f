//! Surface geometry: the Möbius parametrization and dense mesh generation.

pub mod mobius;

pub use mobius::*;
