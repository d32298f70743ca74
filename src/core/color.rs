use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// CSS-style color: 8-bit RGB channels plus a unit alpha.
///
/// Parses `rgb(..)`, `rgba(..)`, `#rgb` and `#rrggbb`; formats back to
/// `rgb(r, g, b)` when opaque and `rgba(r, g, b, a)` otherwise. Serialized as
/// that string so dataset configs stay human readable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(ChartError::InvalidColor(format!(
                "alpha must be finite and in [0, 1], got {}",
                self.alpha
            )));
        }
        Ok(())
    }

    /// Channels normalized to `0..=1`, as expected by vector backends.
    #[must_use]
    pub fn to_unit_rgba(self) -> (f64, f64, f64, f64) {
        (
            f64::from(self.red) / 255.0,
            f64::from(self.green) / 255.0,
            f64::from(self.blue) / 255.0,
            self.alpha,
        )
    }

    /// Scales HSL saturation up by `ratio` of its current value.
    #[must_use]
    pub fn saturate(self, ratio: f64) -> Self {
        let (hue, saturation, lightness) = self.to_hsl();
        let saturation = (saturation + saturation * ratio).clamp(0.0, 1.0);
        Self::from_hsl(hue, saturation, lightness, self.alpha)
    }

    /// Scales HSL lightness down by `ratio` of its current value.
    #[must_use]
    pub fn darken(self, ratio: f64) -> Self {
        let (hue, saturation, lightness) = self.to_hsl();
        let lightness = (lightness - lightness * ratio).clamp(0.0, 1.0);
        Self::from_hsl(hue, saturation, lightness, self.alpha)
    }

    /// Linear blend towards `other`; `weight = 0` keeps `self`, `1` yields `other`.
    #[must_use]
    pub fn mix(self, other: Self, weight: f64) -> Self {
        let weight = weight.clamp(0.0, 1.0);
        let channel = |from: u8, to: u8| {
            let from = f64::from(from);
            round_channel(from + (f64::from(to) - from) * weight)
        };
        Self {
            red: channel(self.red, other.red),
            green: channel(self.green, other.green),
            blue: channel(self.blue, other.blue),
            alpha: self.alpha + (other.alpha - self.alpha) * weight,
        }
    }

    /// Returns `(hue_degrees, saturation, lightness)` with the latter two in `0..=1`.
    #[must_use]
    pub fn to_hsl(self) -> (f64, f64, f64) {
        let (r, g, b, _) = self.to_unit_rgba();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;

        if max == min {
            return (0.0, 0.0, lightness);
        }

        let delta = max - min;
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };
        let hue = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        (hue * 60.0, saturation, lightness)
    }

    #[must_use]
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        if saturation == 0.0 {
            let gray = round_channel(lightness * 255.0);
            return Self::rgba(gray, gray, gray, alpha);
        }

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;
        let h = hue.rem_euclid(360.0) / 360.0;

        Self::rgba(
            round_channel(hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0),
            round_channel(hue_to_channel(p, q, h) * 255.0),
            round_channel(hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0),
            alpha,
        )
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn round_channel(value: f64) -> u8 {
    // Saturating float-to-int cast also maps NaN to 0.
    value.round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha >= 1.0 {
            write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
        } else {
            write!(
                f,
                "rgba({}, {}, {}, {})",
                self.red, self.green, self.blue, self.alpha
            )
        }
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let text = input.trim().to_ascii_lowercase();

        if let Some(hex) = text.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ChartError::InvalidColor(input.to_owned()));
        }

        let (body, expects_alpha) = if let Some(rest) = text.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = text.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(ChartError::InvalidColor(input.to_owned()));
        };

        let body = body
            .strip_suffix(')')
            .ok_or_else(|| ChartError::InvalidColor(input.to_owned()))?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if expects_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(ChartError::InvalidColor(input.to_owned()));
        }

        let channel = |part: &str| -> ChartResult<u8> {
            let value: f64 = part
                .parse()
                .map_err(|_| ChartError::InvalidColor(input.to_owned()))?;
            if !value.is_finite() || !(0.0..=255.0).contains(&value) {
                return Err(ChartError::InvalidColor(input.to_owned()));
            }
            Ok(round_channel(value))
        };

        let alpha = if expects_alpha {
            parts[3]
                .parse::<f64>()
                .map_err(|_| ChartError::InvalidColor(input.to_owned()))?
        } else {
            1.0
        };

        let color = Self::rgba(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?, alpha);
        color.validate()?;
        Ok(color)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digit = |index: usize| u8::from_str_radix(hex.get(index..=index)?, 16).ok();
    match hex.len() {
        3 => Some(Color::rgb(digit(0)? * 17, digit(1)? * 17, digit(2)? * 17)),
        6 => {
            let byte = |index: usize| u8::from_str_radix(hex.get(index..index + 2)?, 16).ok();
            Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
