//! Simulation results and the classifications derived from them.

use std::fmt;

use uom::si::f64::{
    Area, ElectricCurrent, ElectricalResistance, HeatCapacity, HeatFluxDensity, Time,
};

use crate::support::units::HeatFluxDensityExt;

/// Heat flux below which a build reads as cool, in mW/mm².
const COOL_BELOW_MW_PER_MM2: f64 = 120.0;

/// Heat flux above which a build reads as warm, in mW/mm².
const WARM_ABOVE_MW_PER_MM2: f64 = 220.0;

/// Heat flux above which a build reads as hot, in mW/mm².
const HOT_ABOVE_MW_PER_MM2: f64 = 300.0;

/// Read-only results of one coil build simulation.
///
/// Every field is a deterministic pure function of the input spec. Callers
/// recompute the whole bundle on each input change and replace the previous
/// one; nothing is patched incrementally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationOutput {
    /// Final build resistance, all strands and coils combined in parallel.
    pub resistance: ElectricalResistance,

    /// Current drawn at the supply voltage.
    pub current: ElectricCurrent,

    /// Lateral surface area of all wire in the build.
    pub surface_area: Area,

    /// Heat capacity of the build's wire mass.
    pub heat_capacity: HeatCapacity,

    /// Power dissipated per unit of wire surface.
    pub heat_flux: HeatFluxDensity,

    /// Time to heat the wire from ambient (25 °C) to the reference
    /// vaporization temperature (200 °C) at constant power.
    pub ramp_up_time: Time,

    /// Coarse thermal character derived from the heat flux.
    pub thermal_class: ThermalClass,

    /// Heat flux as a percentage of the maximum safe flux (350 mW/mm²).
    ///
    /// Deliberately unclamped: extreme builds read above 100.
    pub stress_index: f64,

    /// Composite 0–100 score rewarding near-ideal heat flux and fast
    /// ramp-up.
    ///
    /// Unlike the stress index, this is clamped to `[0, 100]` even for
    /// pathological inputs.
    pub efficiency_score: f64,
}

impl SimulationOutput {
    /// Whether the build's current draw stays under a power source's
    /// continuous discharge rating.
    ///
    /// A plain threshold check with no hysteresis or headroom margin. The
    /// rating is supplied per call because it belongs to the battery, not
    /// the build.
    #[must_use]
    pub fn is_within_rating(&self, continuous_discharge_rating: ElectricCurrent) -> bool {
        self.current < continuous_discharge_rating
    }
}

/// Coarse thermal character of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThermalClass {
    Cool,
    Balanced,
    Warm,
    Hot,
}

impl ThermalClass {
    /// Classifies a heat flux.
    ///
    /// Thresholds in mW/mm², applied in checked order: below 120 is
    /// [`Cool`](Self::Cool), above 300 is [`Hot`](Self::Hot), above 220 is
    /// [`Warm`](Self::Warm), everything else is
    /// [`Balanced`](Self::Balanced). Exactly 220 therefore classifies as
    /// balanced and exactly 300 as warm. A NaN flux fails every comparison
    /// and lands on balanced.
    #[must_use]
    pub fn from_heat_flux(heat_flux: HeatFluxDensity) -> Self {
        let flux = heat_flux.milliwatts_per_square_millimeter();
        if flux < COOL_BELOW_MW_PER_MM2 {
            Self::Cool
        } else if flux > HOT_ABOVE_MW_PER_MM2 {
            Self::Hot
        } else if flux > WARM_ABOVE_MW_PER_MM2 {
            Self::Warm
        } else {
            Self::Balanced
        }
    }
}

impl fmt::Display for ThermalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Cool => "Cool",
            Self::Balanced => "Balanced",
            Self::Warm => "Warm",
            Self::Hot => "Hot",
        };
        f.write_str(name)
    }
}
