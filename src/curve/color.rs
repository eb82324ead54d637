//! Hue-wheel coloring of sweep samples.

use crate::foundation::core::Rgb;

/// Map sweep sample `step` of `total` onto the rainbow wheel.
///
/// The sector table matches a classic HSV sector switch, except that the falling edge value
/// is truncated to an integer (`q = trunc(1 - f)`). Within a sector `q` is therefore `1` only
/// exactly on a sector boundary and `0` elsewhere, which gives the palette its hard bands.
///
/// `total == 0` is treated as hue `0`.
pub fn rainbow(step: usize, total: usize) -> Rgb {
    let (sector, f) = sector_and_fraction(step, total);
    let q = (1.0 - f).trunc();

    match sector {
        0 => Rgb::new(1.0, f, 0.0),
        1 => Rgb::new(q, 1.0, 0.0),
        2 => Rgb::new(0.0, 1.0, f),
        3 => Rgb::new(0.0, q, 1.0),
        4 => Rgb::new(f, 0.0, 1.0),
        _ => Rgb::new(1.0, 0.0, q),
    }
}

/// Hue sector (`0..6`) that [`rainbow`] uses for `step` of `total`.
pub fn hue_sector(step: usize, total: usize) -> usize {
    sector_and_fraction(step, total).0
}

fn sector_and_fraction(step: usize, total: usize) -> (usize, f64) {
    if total == 0 {
        return (0, 0.0);
    }
    let h6 = step as f64 / total as f64 * 6.0;
    let whole = h6.trunc();
    ((whole as usize) % 6, h6 - whole)
}

#[cfg(test)]
#[path = "../../tests/unit/curve/color.rs"]
mod tests;
