//! AWG wire gauge to diameter lookup.

use uom::si::{f64::Length, length::millimeter};

/// Gauges with a tabulated diameter, in increasing AWG order.
pub const SUPPORTED_GAUGES: [u32; 7] = [20, 22, 24, 26, 28, 30, 32];

/// Diameter used for gauges outside the table, in millimeters.
const FALLBACK_DIAMETER_MM: f64 = 0.4;

/// Looks up the wire diameter for an AWG gauge.
///
/// Gauges outside [`SUPPORTED_GAUGES`] silently fall back to 0.4 mm. The
/// fallback is a deliberate policy so the simulator always has a diameter to
/// work with; an unlisted gauge is not an error.
#[must_use]
pub fn wire_diameter(gauge: u32) -> Length {
    let millimeters = match gauge {
        20 => 0.812,
        22 => 0.644,
        24 => 0.511,
        26 => 0.405,
        28 => 0.321,
        30 => 0.255,
        32 => 0.202,
        _ => FALLBACK_DIAMETER_MM,
    };
    Length::new::<millimeter>(millimeters)
}
