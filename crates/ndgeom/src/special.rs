//! Special functions needed for N-dimensional measures.

use std::f64::consts::PI;

use crate::Float;

/// Parameter `g` of the Lanczos approximation.
const LANCZOS_G: Float = 7.0;

/// Coefficients of the Lanczos approximation for `g = 7`, `n = 9`.
const LANCZOS_COEFFICIENTS: [Float; 9] = [
    0.999_999_999_999_809_9,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_1,
    -176.615_029_162_140_6,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_572e-6,
    1.505_632_735_149_311_6e-7,
];

/// Returns the gamma function evaluated at `x`, accurate to roughly 15
/// significant digits.
///
/// Uses the Lanczos approximation, with the reflection formula for `x < 1/2`.
/// Returns NaN at non-positive integers, where the gamma function has poles.
pub fn gamma(x: Float) -> Float {
    if x < 0.5 {
        if x == x.floor() {
            return Float::NAN;
        }
        // Γ(x) Γ(1 - x) = π / sin(πx)
        PI / ((PI * x).sin() * gamma(1.0 - x))
    } else {
        let x = x - 1.0;
        let t = x + LANCZOS_G + 0.5;
        let series = LANCZOS_COEFFICIENTS[1..]
            .iter()
            .enumerate()
            .fold(LANCZOS_COEFFICIENTS[0], |acc, (i, &c)| {
                acc + c / (x + i as Float + 1.0)
            });
        // t^(x + 1/2) alone overflows well before the result does
        let half_power = t.powf((x + 0.5) / 2.0);
        (2.0 * PI).sqrt() * half_power * ((-t).exp() * half_power) * series
    }
}

/// Returns the surface area of the unit hypersphere in `ndim`-dimensional
/// space: `2 π^(n/2) / Γ(n/2)`.
pub fn unit_sphere_area(ndim: usize) -> Float {
    let half_n = ndim as Float / 2.0;
    2.0 * PI.powf(half_n) / gamma(half_n)
}

/// Returns the volume of the unit ball in `ndim`-dimensional space:
/// `π^(n/2) / Γ(n/2 + 1)`.
pub fn unit_ball_volume(ndim: usize) -> Float {
    let half_n = ndim as Float / 2.0;
    PI.powf(half_n) / gamma(half_n + 1.0)
}
