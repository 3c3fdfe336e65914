//! Coil build electro-thermal simulator.
//!
//! Given a wire build's material, layout, and geometry, [`simulate`] derives
//! the build's electrical resistance, amperage draw, wire surface area, heat
//! capacity, heat flux, ramp-up time, and a pair of derived scores. The
//! computation is a fixed closed-form pipeline (geometry → electrical →
//! thermal → scores) with no solvers, no state, and no I/O; callers re-run it
//! wholesale on every input change.
//!
//! The simulator never fails. Degenerate geometry (zero or negative lengths,
//! zero voltage) produces infinite or NaN fields through ordinary IEEE-754
//! float semantics rather than errors; callers are expected to feed sane
//! defaults. See [`simulate`] for details.
//!
//! # Example
//!
//! ```
//! use coil_models::models::electrothermal::coil::{BuildSpec, ThermalClass, simulate};
//! use uom::si::electrical_resistance::ohm;
//!
//! // Kanthal A1, 26 gauge, single round coil: 3.0 mm ID, 6 wraps, 3.7 V.
//! let output = simulate(&BuildSpec::default());
//!
//! assert!(output.resistance.get::<ohm>() > 0.7);
//! assert_eq!(output.thermal_class, ThermalClass::Balanced);
//! ```

pub(crate) mod core;

pub use self::core::{
    BuildSpec, CoilConfig, ParseCoilConfigError, ParseWireConfigError, ParseWireMaterialError,
    SUPPORTED_GAUGES, SimulationOutput, ThermalClass, WireConfig, WireMaterial, simulate,
    wire_diameter,
};
