//! Closed-form coil build simulation.
//!
//! The computation is a fixed pipeline of derived quantities: gauge lookup
//! and micro-geometry first ([`geometry`]), then electrical and thermal
//! derivation ([`solve`]), then classification and scoring ([`results`]).
//! Each step depends only on earlier ones within the same invocation; there
//! is no shared or retained state anywhere in the module.

mod build;
mod gauge;
mod geometry;
mod material;
mod results;
mod solve;

pub use build::{
    BuildSpec, CoilConfig, ParseCoilConfigError, ParseWireConfigError, WireConfig,
};
pub use gauge::{SUPPORTED_GAUGES, wire_diameter};
pub use material::{ParseWireMaterialError, WireMaterial};
pub use results::{SimulationOutput, ThermalClass};
pub use solve::simulate;
