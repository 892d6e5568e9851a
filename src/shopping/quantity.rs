// ABOUTME: Quantity rounding and rendering shared by scaling and the list formatter
// ABOUTME: Implements round-half-up to fixed decimals and shortest decimal rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Round a non-negative quantity to `decimals` places, halves rounding up
///
/// Quantities are never negative, so rounding half away from zero
/// (`f64::round`) is the same as rounding half up.
#[must_use]
pub fn round_half_up(value: f64, decimals: u32) -> f64 {
    let scale = 10_f64.powf(f64::from(decimals));
    (value * scale).round() / scale
}

/// Magnitudes below this render in exponent form
const EXPONENT_FORM_BELOW: f64 = 1e-6;
/// Magnitudes at or above this render in exponent form
const EXPONENT_FORM_FROM: f64 = 1e21;

/// Render a quantity in its shortest decimal form: `3`, `0.5`, `1.25`
///
/// No trailing zeros are added and negative zero prints as `0`. Very small
/// and very large magnitudes switch to exponent form with an explicit sign
/// (`1e-7`, `1e+21`), and non-finite values print as `NaN` or `Infinity`.
#[must_use]
pub fn render_quantity(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}Infinity");
    }

    let magnitude = value.abs();
    if !(EXPONENT_FORM_BELOW..EXPONENT_FORM_FROM).contains(&magnitude) {
        let rendered = format!("{value:e}");
        return match rendered.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => rendered,
        };
    }
    value.to_string()
}
