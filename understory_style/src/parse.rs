// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsing of CSS-like color and composite-mode strings.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use peniko::{BlendMode, Color, Compose, Mix};

/// Error returned when a style string cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Not a `#rrggbb`, `rgb(..)` or `rgba(..)` color.
    InvalidColor(String),
    /// Not a known composite operation name.
    UnknownBlendMode(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor(s) => write!(f, "invalid color value `{s}`"),
            Self::UnknownBlendMode(s) => write!(f, "unknown blend mode `{s}`"),
        }
    }
}

impl core::error::Error for ParseError {}

/// Parses `#rrggbb`, `rgb(r, g, b)` or `rgba(r, g, b, a)`.
///
/// Channels in the functional forms are `0..=255` and may be fractional;
/// alpha is `0..=1` and defaults to `1`. Surrounding whitespace and a
/// trailing `;` are accepted.
///
/// ```rust
/// use understory_style::parse_color;
///
/// let teal = parse_color("#07AAB9").unwrap();
/// assert_eq!(teal.to_rgba8().to_u8_array(), [0x07, 0xAA, 0xB9, 0xFF]);
///
/// let faded = parse_color("rgba(255, 0, 0, 0.5)").unwrap();
/// assert_eq!(faded.components[3], 0.5);
///
/// assert!(parse_color("teal").is_err());
/// ```
pub fn parse_color(input: &str) -> Result<Color, ParseError> {
    let trimmed = input.trim();
    parse_hex(trimmed)
        .or_else(|| parse_functional(trimmed))
        .ok_or_else(|| ParseError::InvalidColor(input.to_string()))
}

fn parse_hex(s: &str) -> Option<Color> {
    let digits = s.strip_prefix('#')?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let n = u32::from_str_radix(digits, 16).ok()?;
    let [_, r, g, b] = n.to_be_bytes();
    Some(Color::from_rgba8(r, g, b, 255))
}

fn parse_functional(s: &str) -> Option<Color> {
    let s = s.to_ascii_lowercase();
    let s = s.trim_end_matches(';').trim_end();
    let rest = s.strip_prefix("rgba").or_else(|| s.strip_prefix("rgb"))?;
    let body = rest.trim_start().strip_prefix('(')?.strip_suffix(')')?;

    let values = body
        .split(',')
        .map(|part| {
            let part = part.trim();
            let v: f64 = part.parse().ok()?;
            (v.is_finite() && v >= 0.0 && !part.starts_with('+')).then_some(v)
        })
        .collect::<Option<Vec<f64>>>()?;

    let (rgb, alpha) = match values.as_slice() {
        [r, g, b] => ([*r, *g, *b], 1.0),
        [r, g, b, a] => ([*r, *g, *b], *a),
        _ => return None,
    };
    if rgb.iter().any(|c| *c > 255.0) || alpha > 1.0 {
        return None;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "channels are range checked and f32 is the color storage type"
    )]
    let channel = |c: f64| (c / 255.0) as f32;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "alpha is range checked and f32 is the color storage type"
    )]
    let alpha = alpha as f32;
    Some(Color::new([channel(rgb[0]), channel(rgb[1]), channel(rgb[2]), alpha]))
}

/// Maps a canvas composite operation name to a blend mode.
///
/// Separable and non-separable blend names (`multiply`, `overlay`,
/// `color-dodge`, …) map to a [`Mix`] over `source-over`; Porter-Duff names
/// (`source-over`, `destination-out`, `xor`, `lighter`, …) map to a
/// [`Compose`] with normal mixing.
pub fn parse_blend(input: &str) -> Result<BlendMode, ParseError> {
    let name = input.trim().to_ascii_lowercase();
    let mix = match name.as_str() {
        "normal" => Some(Mix::Normal),
        "multiply" => Some(Mix::Multiply),
        "screen" => Some(Mix::Screen),
        "overlay" => Some(Mix::Overlay),
        "darken" => Some(Mix::Darken),
        "lighten" => Some(Mix::Lighten),
        "color-dodge" => Some(Mix::ColorDodge),
        "color-burn" => Some(Mix::ColorBurn),
        "hard-light" => Some(Mix::HardLight),
        "soft-light" => Some(Mix::SoftLight),
        "difference" => Some(Mix::Difference),
        "exclusion" => Some(Mix::Exclusion),
        "hue" => Some(Mix::Hue),
        "saturation" => Some(Mix::Saturation),
        "color" => Some(Mix::Color),
        "luminosity" => Some(Mix::Luminosity),
        _ => None,
    };
    if let Some(mix) = mix {
        return Ok(BlendMode::new(mix, Compose::SrcOver));
    }
    let compose = match name.as_str() {
        "source-over" => Compose::SrcOver,
        "source-in" => Compose::SrcIn,
        "source-out" => Compose::SrcOut,
        "source-atop" => Compose::SrcAtop,
        "destination-over" => Compose::DestOver,
        "destination-in" => Compose::DestIn,
        "destination-out" => Compose::DestOut,
        "destination-atop" => Compose::DestAtop,
        "copy" => Compose::Copy,
        "xor" => Compose::Xor,
        "lighter" => Compose::Plus,
        "clear" => Compose::Clear,
        _ => return Err(ParseError::UnknownBlendMode(input.to_string())),
    };
    Ok(BlendMode::new(Mix::Normal, compose))
}
