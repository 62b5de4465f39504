//! SI display rescaling.
//!
//! Picks the power-of-1000 prefix whose coefficient lands an attribute's
//! value range in `[1, 1000)`, then multiplies the values in place. The
//! transform is display-only and reversible: dividing by the recorded
//! coefficient restores the raw values.

use tracing::debug;

/// Prefix table, ascending: coefficient applied to raw values.
const PREFIXES: [(&str, f64); 9] = [
    ("p", 1e12),
    ("n", 1e9),
    ("µ", 1e6),
    ("m", 1e3),
    ("", 1e0),
    ("K", 1e-3),
    ("M", 1e-6),
    ("G", 1e-9),
    ("T", 1e-12),
];

/// Chosen prefix and the coefficient that was applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleInfo {
    pub unit: &'static str,
    pub coeff: f64,
}

impl ScaleInfo {
    pub const IDENTITY: Self = Self {
        unit: "",
        coeff: 1.0,
    };
}

/// Select the prefix whose coefficient puts `range` into `[1, 1000)`.
///
/// Ranges beyond the table clamp to its ends; zero or non-finite ranges
/// (all values identical, or NaN sentinels throughout) keep coefficient 1.
pub fn prefix_for_range(range: f64) -> ScaleInfo {
    if !range.is_finite() || range <= 0.0 {
        return ScaleInfo::IDENTITY;
    }

    for (unit, coeff) in PREFIXES {
        let scaled = range * coeff;
        if (1.0..1000.0).contains(&scaled) {
            return ScaleInfo { unit, coeff };
        }
    }

    // Below pico or above tera: clamp to the nearest table end.
    if range < 1.0 {
        ScaleInfo {
            unit: "p",
            coeff: 1e12,
        }
    } else {
        ScaleInfo {
            unit: "T",
            coeff: 1e-12,
        }
    }
}

/// Rescale `values` in place for display and report the applied prefix.
///
/// NaN entries are ignored when measuring the range and pass through the
/// multiplication unchanged (NaN stays NaN).
pub fn rescale(key: &str, values: &mut [f64]) -> ScaleInfo {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values.iter() {
        min = min.min(v);
        max = max.max(v);
    }
    if values.is_empty() || !min.is_finite() || !max.is_finite() {
        return ScaleInfo::IDENTITY;
    }

    let info = prefix_for_range(max - min);
    if info.coeff != 1.0 {
        for v in values.iter_mut() {
            *v *= info.coeff;
        }
    }
    debug!(
        attr = key,
        coeff = info.coeff,
        unit = info.unit,
        "rescaled attribute for display"
    );
    info
}
