//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities (e.g., length,
//! resistance, heat flux). The coil building community quotes several of them
//! in units [`uom`] has no named unit for: wire resistivity in Ω·mm²/m, heat
//! flux in mW/mm², and heat capacity in mJ/K. This module provides the
//! missing constructors and accessors, routed through SI units [`uom`] does
//! name, so the conversion factors live in exactly one place.

use uom::si::{
    electrical_resistivity::ohm_meter,
    f64::{ElectricalResistivity, HeatCapacity, HeatFluxDensity, SpecificHeatCapacity},
    heat_capacity::joule_per_kelvin,
    heat_flux_density::watt_per_square_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
};

/// Constructs a resistivity from a value in Ω·mm²/m.
///
/// Wire alloy datasheets quote resistivity in Ω·mm²/m so that resistance
/// works out from length in meters and cross-section in mm².
/// 1 Ω·mm²/m = 10⁻⁶ Ω·m.
#[must_use]
pub fn ohm_square_millimeters_per_meter(value: f64) -> ElectricalResistivity {
    ElectricalResistivity::new::<ohm_meter>(value * 1e-6)
}

/// Constructs a specific heat capacity from a value in J/(g·K).
///
/// Alloy heat capacities are tabulated per gram; 1 J/(g·K) = 1000 J/(kg·K).
#[must_use]
pub fn joules_per_gram_kelvin(value: f64) -> SpecificHeatCapacity {
    SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(value * 1000.0)
}

/// Heat flux in the community's customary mW/mm².
///
/// 1 mW/mm² = 1000 W/m². Both directions multiply or divide by exactly
/// 1000.0, so round-trips through this trait are exact.
pub trait HeatFluxDensityExt: Sized {
    /// Constructs a heat flux from a value in mW/mm².
    fn from_milliwatts_per_square_millimeter(value: f64) -> Self;

    /// Returns the heat flux in mW/mm².
    fn milliwatts_per_square_millimeter(self) -> f64;
}

impl HeatFluxDensityExt for HeatFluxDensity {
    fn from_milliwatts_per_square_millimeter(value: f64) -> Self {
        Self::new::<watt_per_square_meter>(value * 1000.0)
    }

    fn milliwatts_per_square_millimeter(self) -> f64 {
        self.get::<watt_per_square_meter>() / 1000.0
    }
}

/// Heat capacity in mJ/K.
///
/// Coil wire masses are small enough that J/K values are awkward to read;
/// the community quotes mJ/K.
pub trait HeatCapacityExt: Sized {
    /// Constructs a heat capacity from a value in mJ/K.
    fn from_millijoules_per_kelvin(value: f64) -> Self;

    /// Returns the heat capacity in mJ/K.
    fn millijoules_per_kelvin(self) -> f64;
}

impl HeatCapacityExt for HeatCapacity {
    fn from_millijoules_per_kelvin(value: f64) -> Self {
        Self::new::<joule_per_kelvin>(value / 1000.0)
    }

    fn millijoules_per_kelvin(self) -> f64 {
        self.get::<joule_per_kelvin>() * 1000.0
    }
}
