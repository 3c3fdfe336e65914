//! The electro-thermal derivation pipeline.

use std::f64::consts::PI;

use uom::si::{
    f64::{
        Area, ElectricCurrent, ElectricalResistance, HeatCapacity, HeatFluxDensity, Mass, Power,
        TemperatureInterval, Time, Volume,
    },
    temperature_interval::kelvin,
    time::second,
};

use crate::support::units::HeatFluxDensityExt;

use super::{
    build::BuildSpec,
    geometry::CoilGeometry,
    results::{SimulationOutput, ThermalClass},
};

/// Temperature rise from ambient (25 °C) to the reference vaporization
/// temperature (200 °C), used for ramp-up time.
const HEATING_INTERVAL_KELVIN: f64 = 175.0;

/// Heat flux treated as the maximum a build should sustain, in mW/mm².
/// The stress index is the build's flux as a percentage of this.
const MAX_SAFE_FLUX_MW_PER_MM2: f64 = 350.0;

/// Heat flux the efficiency score treats as ideal, in mW/mm².
const IDEAL_FLUX_MW_PER_MM2: f64 = 200.0;

/// Runs the coil build simulation.
///
/// Pure and infallible: identical inputs yield bit-identical outputs, and no
/// input is validated. Degenerate geometry (zero cross-section, negative
/// wraps, zero voltage) flows through every downstream field as infinite or
/// NaN values by ordinary IEEE-754 semantics rather than surfacing errors;
/// only the efficiency score is clamped to a finite range.
#[must_use]
pub fn simulate(spec: &BuildSpec) -> SimulationOutput {
    let geometry = CoilGeometry::derive(spec);
    let strands = spec.wire_config.strand_multiplier();
    let coils = f64::from(spec.coil_config.coil_count());

    // Strands wound together and coils mounted together both combine as
    // resistors in parallel. Dividing by the twisted multiplier (2.1) treats
    // twisted strands as parallel with a small geometry penalty.
    let per_strand: ElectricalResistance =
        spec.material.resistivity() * geometry.wound_length_per_coil / geometry.cross_section;
    let single_coil = per_strand / strands;
    let resistance = single_coil / coils;

    let current: ElectricCurrent = spec.voltage / resistance;
    let power: Power = spec.voltage * spec.voltage / resistance;

    // Lateral surface of a cylinder, totaled across all wire in the build.
    let surface_area_per_coil: Area = PI * geometry.wire_diameter * geometry.total_length_per_coil;
    let surface_area = surface_area_per_coil * coils;
    let heat_flux: HeatFluxDensity = power / surface_area;

    let wire_volume: Volume = geometry.cross_section * geometry.total_length_per_coil * coils;
    let mass: Mass = wire_volume * spec.material.density();
    let heat_capacity: HeatCapacity = mass * spec.material.specific_heat_capacity();
    let heating = TemperatureInterval::new::<kelvin>(HEATING_INTERVAL_KELVIN);
    let ramp_up_time: Time = heat_capacity * heating / power;

    SimulationOutput {
        resistance,
        current,
        surface_area,
        heat_capacity,
        heat_flux,
        ramp_up_time,
        thermal_class: ThermalClass::from_heat_flux(heat_flux),
        stress_index: stress_index(heat_flux),
        efficiency_score: efficiency_score(ramp_up_time, heat_flux),
    }
}

/// Heat flux as a percentage of the maximum safe flux, unclamped above 100.
fn stress_index(heat_flux: HeatFluxDensity) -> f64 {
    heat_flux.milliwatts_per_square_millimeter() / MAX_SAFE_FLUX_MW_PER_MM2 * 100.0
}

/// Rewards builds near the ideal flux and penalizes slow ramp-up.
///
/// The raw score can run far outside `[0, 100]` for extreme builds; the
/// returned score is clamped.
fn efficiency_score(ramp_up_time: Time, heat_flux: HeatFluxDensity) -> f64 {
    let ramp_penalty = ramp_up_time.get::<second>() * 10.0;
    let flux_penalty =
        (heat_flux.milliwatts_per_square_millimeter() - IDEAL_FLUX_MW_PER_MM2).abs() / 10.0;
    (100.0 - ramp_penalty - flux_penalty).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_millimeter,
        electric_current::ampere,
        electric_potential::volt,
        electrical_resistance::ohm,
        f64::{ElectricPotential, Length},
        length::millimeter,
    };

    use crate::models::electrothermal::coil::core::{
        build::{CoilConfig, WireConfig},
        material::WireMaterial,
    };
    use crate::support::units::HeatCapacityExt;

    #[test]
    fn golden_kanthal_single_round_build() {
        // Kanthal A1, 26 gauge, Round, Single, 3.0 mm ID, 6 wraps, 3.7 V.
        let output = simulate(&BuildSpec::default());

        assert_relative_eq!(
            output.resistance.get::<ohm>(),
            0.778_692_191_430,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            output.current.get::<ampere>(),
            4.751_556_572_31,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            output.surface_area.get::<square_millimeter>(),
            88.024_312_378_8,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            output.heat_capacity.millijoules_per_kelvin(),
            29.108_099_678_2,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            output.heat_flux.milliwatts_per_square_millimeter(),
            199.726_176_126,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            output.ramp_up_time.get::<second>(),
            0.289_743_881_460,
            max_relative = 1e-9
        );
        assert_eq!(output.thermal_class, ThermalClass::Balanced);
        assert_relative_eq!(output.stress_index, 57.064_621_750_4, max_relative = 1e-9);
        assert_relative_eq!(
            output.efficiency_score,
            97.075_178_798_0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn more_wraps_mean_more_resistance() {
        let mut previous = f64::NEG_INFINITY;
        for wraps in [4.0, 5.0, 6.0, 6.5, 7.0, 10.0] {
            let output = simulate(&BuildSpec {
                wraps,
                ..BuildSpec::default()
            });
            let resistance = output.resistance.get::<ohm>();
            assert!(resistance > previous);
            previous = resistance;
        }
    }

    #[test]
    fn more_coils_mean_less_resistance() {
        let mut previous = f64::INFINITY;
        for coil_config in CoilConfig::ALL {
            let output = simulate(&BuildSpec {
                coil_config,
                ..BuildSpec::default()
            });
            let resistance = output.resistance.get::<ohm>();
            assert!(resistance < previous);
            previous = resistance;
        }
    }

    #[test]
    fn strand_configs_combine_in_parallel() {
        let single = |wire_config| {
            simulate(&BuildSpec {
                wire_config,
                ..BuildSpec::default()
            })
            .resistance
            .get::<ohm>()
        };

        let round = single(WireConfig::Round);
        let parallel = single(WireConfig::Parallel);
        let twisted = single(WireConfig::Twisted);

        assert!(parallel < round);
        assert_relative_eq!(parallel, round / 2.0, max_relative = 1e-12);
        // The 2.1 multiplier makes twisted read slightly below true parallel.
        assert!(twisted < parallel);
        assert_relative_eq!(twisted, 0.370_805_805_443, max_relative = 1e-9);
    }

    #[test]
    fn dual_coils_halve_resistance() {
        let single = simulate(&BuildSpec::default());
        let dual = simulate(&BuildSpec {
            coil_config: CoilConfig::Dual,
            ..BuildSpec::default()
        });

        assert_relative_eq!(
            dual.resistance.get::<ohm>(),
            single.resistance.get::<ohm>() / 2.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn stress_index_is_unclamped() {
        // A hot dual Ni80 build pushes well past the reference flux.
        let output = simulate(&BuildSpec {
            material: WireMaterial::Nichrome80,
            coil_config: CoilConfig::Dual,
            wraps: 5.0,
            ..BuildSpec::default()
        });

        assert!(output.stress_index > 100.0);
        assert_relative_eq!(output.stress_index, 106.219_882_509, max_relative = 1e-9);
        assert_relative_eq!(
            output.heat_flux.milliwatts_per_square_millimeter(),
            371.769_588_783,
            max_relative = 1e-9
        );
        assert_eq!(output.thermal_class, ThermalClass::Hot);
    }

    #[test]
    fn efficiency_score_is_clamped() {
        // A tiny Ni200 build at high voltage sends the raw score far below
        // zero; the clamp must hold it at exactly zero.
        let output = simulate(&BuildSpec {
            material: WireMaterial::Ni200,
            gauge: 32,
            inner_diameter: Length::new::<millimeter>(1.0),
            wraps: 1.0,
            voltage: ElectricPotential::new::<volt>(8.4),
            ..BuildSpec::default()
        });

        assert_eq!(output.efficiency_score, 0.0);
        assert!(output.stress_index > 100.0);
    }

    #[test]
    fn unlisted_gauges_share_the_fallback_diameter() {
        let gauge_99 = simulate(&BuildSpec {
            gauge: 99,
            ..BuildSpec::default()
        });
        let gauge_21 = simulate(&BuildSpec {
            gauge: 21,
            ..BuildSpec::default()
        });

        // Both fall back to 0.4 mm wire, so the outputs are identical.
        assert_eq!(gauge_99, gauge_21);
        assert!(gauge_99.resistance.get::<ohm>() > 0.0);
    }

    #[test]
    fn repeat_invocations_are_bit_identical() {
        let spec = BuildSpec {
            material: WireMaterial::Ss316L,
            wire_config: WireConfig::Twisted,
            coil_config: CoilConfig::Triple,
            wraps: 7.5,
            ..BuildSpec::default()
        };

        assert_eq!(simulate(&spec), simulate(&spec));
    }

    #[test]
    fn zero_voltage_propagates_without_failing() {
        let output = simulate(&BuildSpec {
            voltage: ElectricPotential::new::<volt>(0.0),
            ..BuildSpec::default()
        });

        // Zero power: the coil never heats, so ramp-up diverges while the
        // clamp still pins the efficiency score.
        assert_eq!(output.current.get::<ampere>(), 0.0);
        assert!(output.ramp_up_time.get::<second>().is_infinite());
        assert_eq!(output.efficiency_score, 0.0);
        assert_eq!(output.thermal_class, ThermalClass::Cool);
        assert_eq!(output.stress_index, 0.0);
    }

    #[test]
    fn negative_geometry_propagates_without_failing() {
        let output = simulate(&BuildSpec {
            wraps: -10.0,
            ..BuildSpec::default()
        });

        // Nothing validates the input; a negative wound length simply
        // produces a negative resistance.
        assert!(output.resistance.get::<ohm>() < 0.0);
    }

    #[test]
    fn rating_check_is_a_plain_threshold() {
        let output = simulate(&BuildSpec::default());

        // The golden build draws about 4.75 A.
        assert!(output.is_within_rating(ElectricCurrent::new::<ampere>(20.0)));
        assert!(!output.is_within_rating(ElectricCurrent::new::<ampere>(4.0)));
    }
}
