//! Build configuration inputs.

use std::{fmt, str::FromStr};

use thiserror::Error;
use uom::si::{
    electric_potential::volt,
    f64::{ElectricPotential, Length},
    length::millimeter,
};

use super::material::WireMaterial;

/// How strands of wire are laid in a single coil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireConfig {
    /// A single round wire.
    Round,
    /// Two strands wound side by side.
    Parallel,
    /// Two strands twisted around each other.
    Twisted,
}

impl WireConfig {
    /// All supported configurations, in display order.
    pub const ALL: [Self; 3] = [Self::Round, Self::Parallel, Self::Twisted];

    /// Effective number of strands.
    ///
    /// Used twice in the pipeline: once to scale the wound length into total
    /// wire material, and once to combine strand resistances in parallel.
    /// Twisted strands approximate parallel behavior with a small empirical
    /// geometry penalty, hence 2.1 rather than 2.
    #[must_use]
    pub fn strand_multiplier(self) -> f64 {
        match self {
            Self::Round => 1.0,
            Self::Parallel => 2.0,
            Self::Twisted => 2.1,
        }
    }
}

impl fmt::Display for WireConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Round => "Round",
            Self::Parallel => "Parallel",
            Self::Twisted => "Twisted",
        };
        f.write_str(name)
    }
}

/// An error returned when a wire configuration name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown wire configuration: {0}")]
pub struct ParseWireConfigError(String);

impl FromStr for WireConfig {
    type Err = ParseWireConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Round" => Ok(Self::Round),
            "Parallel" => Ok(Self::Parallel),
            "Twisted" => Ok(Self::Twisted),
            other => Err(ParseWireConfigError(other.to_owned())),
        }
    }
}

/// How many identical coils the build mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoilConfig {
    Single,
    Dual,
    Triple,
    Quad,
}

impl CoilConfig {
    /// All supported arrangements, in display order.
    pub const ALL: [Self; 4] = [Self::Single, Self::Dual, Self::Triple, Self::Quad];

    /// Number of coils in the build.
    ///
    /// Multiple coils are modeled as identical resistors in parallel.
    #[must_use]
    pub fn coil_count(self) -> u32 {
        match self {
            Self::Single => 1,
            Self::Dual => 2,
            Self::Triple => 3,
            Self::Quad => 4,
        }
    }
}

impl fmt::Display for CoilConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Single => "Single",
            Self::Dual => "Dual",
            Self::Triple => "Triple",
            Self::Quad => "Quad",
        };
        f.write_str(name)
    }
}

/// An error returned when a coil arrangement name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown coil configuration: {0}")]
pub struct ParseCoilConfigError(String);

impl FromStr for CoilConfig {
    type Err = ParseCoilConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Single" => Ok(Self::Single),
            "Dual" => Ok(Self::Dual),
            "Triple" => Ok(Self::Triple),
            "Quad" => Ok(Self::Quad),
            other => Err(ParseCoilConfigError(other.to_owned())),
        }
    }
}

/// One coil build to simulate.
///
/// Constructed transiently per simulation call (typically on every form field
/// edit) and passed by value; nothing validates the fields. Zero or negative
/// geometry is accepted and propagates through the pipeline as degenerate
/// floats rather than errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildSpec {
    pub material: WireMaterial,
    pub wire_config: WireConfig,
    pub coil_config: CoilConfig,

    /// AWG gauge; unlisted gauges use the fallback diameter.
    pub gauge: u32,

    /// Inner (rod) diameter of the wound coil.
    pub inner_diameter: Length,

    /// Full turns around the rod; fractional wraps are permitted.
    pub wraps: f64,

    /// Supply voltage.
    pub voltage: ElectricPotential,
}

/// The calculator's initial form state: a common single-coil Kanthal build
/// on a nominal 3.7 V cell.
impl Default for BuildSpec {
    fn default() -> Self {
        Self {
            material: WireMaterial::KanthalA1,
            wire_config: WireConfig::Round,
            coil_config: CoilConfig::Single,
            gauge: 26,
            inner_diameter: Length::new::<millimeter>(3.0),
            wraps: 6.0,
            voltage: ElectricPotential::new::<volt>(3.7),
        }
    }
}
