//! Wound wire micro-geometry.

use std::f64::consts::PI;

use uom::si::{
    f64::{Area, Length},
    length::millimeter,
};

use super::{build::BuildSpec, gauge};

/// Lead wire clamped or soldered at the posts, per coil, in millimeters.
const LEAD_LENGTH_MM: f64 = 5.0;

/// Derived micro-geometry for one build.
///
/// The later pipeline steps consume different length measures: per-strand
/// resistance wants the wound length of a single strand, while surface area,
/// volume, and mass want the total wire material. Both are derived here so
/// the electrical and thermal steps share one set of intermediates.
#[derive(Debug, Clone, Copy)]
pub(super) struct CoilGeometry {
    /// Wire diameter from the gauge table.
    pub(super) wire_diameter: Length,

    /// Cross-section area of a single strand.
    pub(super) cross_section: Area,

    /// Wound length of one strand of one coil, legs included.
    pub(super) wound_length_per_coil: Length,

    /// Total wire length in one coil across all strands.
    pub(super) total_length_per_coil: Length,
}

impl CoilGeometry {
    /// Derives the build's micro-geometry.
    ///
    /// The coil circumference uses the mean coil diameter — inner diameter
    /// plus one wire thickness — because the wound loop's centerline sits
    /// half a wire out from the rod on either side.
    pub(super) fn derive(spec: &BuildSpec) -> Self {
        let wire_diameter = gauge::wire_diameter(spec.gauge);
        let radius = wire_diameter / 2.0;
        let cross_section = PI * radius * radius;

        let circumference = PI * (spec.inner_diameter + wire_diameter);
        let leads = Length::new::<millimeter>(LEAD_LENGTH_MM);
        let wound_length_per_coil = circumference * spec.wraps + leads;

        // Parallel and twisted strands are physically longer wire material
        // for the same wound geometry.
        let strands = spec.wire_config.strand_multiplier();
        let total_length_per_coil = wound_length_per_coil * strands;

        Self {
            wire_diameter,
            cross_section,
            wound_length_per_coil,
            total_length_per_coil,
        }
    }
}
