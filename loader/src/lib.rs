//! Builds scenes for the simulator, either from prefabs or from JSON5 files.

pub mod builder;
pub use builder::{SolarSystemBuilder, SolarSystemBuilderEntry};
pub mod deserialize;
pub mod error;
pub mod prefabs;
pub mod scene;
pub use deserialize::*;
pub use error::LoadError;
pub use scene::{HexagonScene, SolarScene};

#[macro_use]
extern crate lazy_static;
