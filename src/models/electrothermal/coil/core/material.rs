//! Wire materials and their physical constants.

use std::{fmt, str::FromStr};

use thiserror::Error;
use uom::si::{
    f64::{ElectricalResistivity, MassDensity, SpecificHeatCapacity},
    mass_density::gram_per_cubic_centimeter,
};

use crate::support::units::{joules_per_gram_kelvin, ohm_square_millimeters_per_meter};

/// A coil wire alloy.
///
/// The set is closed: each variant carries fixed reference constants for
/// resistivity, density, and specific heat capacity, looked up by exhaustive
/// match so adding a variant forces every table to be extended. The tables
/// are never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireMaterial {
    /// Kanthal A1, an iron-chromium-aluminium alloy.
    KanthalA1,
    /// Nichrome 80 (80/20 nickel-chromium).
    Nichrome80,
    /// Stainless steel 316L.
    Ss316L,
    /// Nickel 200 (commercially pure nickel).
    Ni200,
    /// Commercially pure titanium.
    Titanium,
}

impl WireMaterial {
    /// All supported materials, in display order.
    pub const ALL: [Self; 5] = [
        Self::KanthalA1,
        Self::Nichrome80,
        Self::Ss316L,
        Self::Ni200,
        Self::Titanium,
    ];

    /// Electrical resistivity at room temperature.
    ///
    /// Approximate datasheet values, tabulated in Ω·mm²/m.
    #[must_use]
    pub fn resistivity(self) -> ElectricalResistivity {
        let ohm_mm2_per_m = match self {
            Self::KanthalA1 => 1.45,
            Self::Nichrome80 => 1.09,
            Self::Ss316L => 0.74,
            Self::Ni200 => 0.096,
            Self::Titanium => 0.42,
        };
        ohm_square_millimeters_per_meter(ohm_mm2_per_m)
    }

    /// Mass density.
    #[must_use]
    pub fn density(self) -> MassDensity {
        let grams_per_cm3 = match self {
            Self::KanthalA1 => 7.1,
            Self::Nichrome80 => 8.4,
            Self::Ss316L => 8.0,
            Self::Ni200 => 8.9,
            Self::Titanium => 4.5,
        };
        MassDensity::new::<gram_per_cubic_centimeter>(grams_per_cm3)
    }

    /// Specific heat capacity, roughly estimated for each alloy.
    #[must_use]
    pub fn specific_heat_capacity(self) -> SpecificHeatCapacity {
        let joules_per_g_k = match self {
            Self::KanthalA1 => 0.46,
            Self::Nichrome80 => 0.45,
            Self::Ss316L => 0.50,
            Self::Ni200 => 0.44,
            Self::Titanium => 0.52,
        };
        joules_per_gram_kelvin(joules_per_g_k)
    }
}

/// Formats the material the way the surrounding application names it.
impl fmt::Display for WireMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::KanthalA1 => "Kanthal A1",
            Self::Nichrome80 => "Ni80",
            Self::Ss316L => "SS316L",
            Self::Ni200 => "Ni200",
            Self::Titanium => "Titanium",
        };
        f.write_str(name)
    }
}

/// An error returned when a material name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown wire material: {0}")]
pub struct ParseWireMaterialError(String);

impl FromStr for WireMaterial {
    type Err = ParseWireMaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Kanthal A1" => Ok(Self::KanthalA1),
            "Ni80" => Ok(Self::Nichrome80),
            "SS316L" => Ok(Self::Ss316L),
            "Ni200" => Ok(Self::Ni200),
            "Titanium" => Ok(Self::Titanium),
            other => Err(ParseWireMaterialError(other.to_owned())),
        }
    }
}
