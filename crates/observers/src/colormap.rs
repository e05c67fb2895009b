//! Perceptually uniform colormap for heatmaps.

/// Color used for cells without a finite value.
pub const MISSING: [u8; 3] = [128, 128, 128];

/// Plasma colormap sampled at nine evenly spaced stops.
const PLASMA: [[u8; 3]; 9] = [
    [13, 8, 135],
    [76, 2, 161],
    [126, 3, 168],
    [169, 35, 149],
    [204, 71, 120],
    [230, 108, 92],
    [248, 149, 64],
    [253, 197, 39],
    [240, 249, 33],
];

/// Maps `t` in `[0, 1]` to an RGB color on the plasma colormap.
///
/// Values outside the interval are clamped; `NaN` maps to [`MISSING`].
#[must_use]
pub fn plasma(t: f64) -> [u8; 3] {
    if t.is_nan() {
        return MISSING;
    }

    #[allow(clippy::cast_precision_loss)]
    let scaled = t.clamp(0.0, 1.0) * (PLASMA.len() - 1) as f64;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let lower = (scaled.floor() as usize).min(PLASMA.len() - 2);
    #[allow(clippy::cast_precision_loss)]
    let frac = scaled - lower as f64;

    let (a, b) = (PLASMA[lower], PLASMA[lower + 1]);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let color = std::array::from_fn(|i| {
        let (lo, hi) = (f64::from(a[i]), f64::from(b[i]));
        (lo + frac * (hi - lo)).round() as u8
    });
    color
}

/// Scales `value` into `[0, 1]` relative to `(min, max)`.
///
/// A degenerate range maps every value to `0.5`.
#[must_use]
pub fn normalize(value: f64, (min, max): (f64, f64)) -> f64 {
    let span = max - min;
    if span > 0.0 {
        (value - min) / span
    } else {
        0.5
    }
}
