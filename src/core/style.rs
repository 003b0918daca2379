//! Color and unit resolution used while resolving axis styles.
//!
//! The calculator never parses CSS itself. It goes through [`StyleResolver`],
//! so hosts can plug in the color/unit conventions of their renderer.
//! [`CssStyleResolver`] covers the common CSS subset.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Same color with the alpha channel replaced.
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn validate(self) -> GridResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(GridError::InvalidColor(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Collaborator used to turn style specs into renderer-ready values.
pub trait StyleResolver {
    /// Parses a color spec such as `#336699` or `rgba(0, 0, 0, .5)`.
    fn resolve_color(&self, spec: &str) -> GridResult<Color>;

    /// Applies `alpha` to a resolved color.
    fn apply_alpha(&self, color: Color, alpha: f64) -> Color {
        color.with_alpha(alpha)
    }

    /// Splits `"11pt"` into `(11.0, "pt")`. A bare number has an empty unit.
    fn parse_unit(&self, input: &str) -> GridResult<(f64, String)>;

    /// Size of one `unit` in pixels.
    fn unit_to_pixels(&self, unit: &str) -> GridResult<f64>;
}

/// Pixels per inch assumed for physical CSS units.
const CSS_DPI: f64 = 96.0;
/// Root font size used for relative units.
const CSS_ROOT_FONT_PX: f64 = 16.0;

/// Default resolver implementing a CSS-compatible subset.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssStyleResolver;

impl StyleResolver for CssStyleResolver {
    fn resolve_color(&self, spec: &str) -> GridResult<Color> {
        let spec = spec.trim().to_ascii_lowercase();
        if let Some(hex) = spec.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| GridError::InvalidColor(spec.clone()));
        }
        if let Some(body) = spec
            .strip_prefix("rgba(")
            .or_else(|| spec.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_rgb_function(body).ok_or_else(|| GridError::InvalidColor(spec.clone()));
        }
        named_color(&spec).ok_or(GridError::InvalidColor(spec))
    }

    fn parse_unit(&self, input: &str) -> GridResult<(f64, String)> {
        let input = input.trim();
        let split = input
            .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')))
            .unwrap_or(input.len());
        // Exponent markers are only numeric when followed by digits ("1e3"),
        // otherwise they start a unit ("2em", "3ex").
        let split = match input[..split].rfind(['e', 'E']) {
            Some(position)
                if !input[position + 1..split]
                    .chars()
                    .any(|c| c.is_ascii_digit()) =>
            {
                position
            }
            _ => split,
        };
        let (number, unit) = input.split_at(split);
        let value = number
            .parse::<f64>()
            .map_err(|_| GridError::InvalidUnit(input.to_owned()))?;
        Ok((value, unit.trim().to_ascii_lowercase()))
    }

    fn unit_to_pixels(&self, unit: &str) -> GridResult<f64> {
        let pixels = match unit {
            "" | "px" => 1.0,
            "pt" => CSS_DPI / 72.0,
            "pc" => CSS_DPI / 6.0,
            "in" => CSS_DPI,
            "cm" => CSS_DPI / 2.54,
            "mm" => CSS_DPI / 25.4,
            "em" | "rem" => CSS_ROOT_FONT_PX,
            "ex" | "ch" => CSS_ROOT_FONT_PX / 2.0,
            other => return Err(GridError::InvalidUnit(other.to_owned())),
        };
        Ok(pixels)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digits: Vec<u8> = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<_>>()?;
    let channels: Vec<u8> = match digits.len() {
        3 | 4 => digits.iter().map(|d| d * 17).collect(),
        6 | 8 => digits.chunks(2).map(|pair| pair[0] * 16 + pair[1]).collect(),
        _ => return None,
    };
    let alpha = channels.get(3).map_or(1.0, |a| f64::from(*a) / 255.0);
    Some(Color::rgba(
        f64::from(channels[0]) / 255.0,
        f64::from(channels[1]) / 255.0,
        f64::from(channels[2]) / 255.0,
        alpha,
    ))
}

fn parse_rgb_function(body: &str) -> Option<Color> {
    let parts: Vec<f64> = body
        .split([',', ' ', '/'])
        .filter(|part| !part.is_empty())
        .map(|part| match part.strip_suffix('%') {
            Some(percent) => percent.parse::<f64>().ok().map(|v| v / 100.0 * 255.0),
            None => part.parse::<f64>().ok(),
        })
        .collect::<Option<_>>()?;
    if !(3..=4).contains(&parts.len()) {
        return None;
    }
    let channel = |v: f64| (v / 255.0).clamp(0.0, 1.0);
    let alpha = parts.get(3).copied().unwrap_or(1.0).clamp(0.0, 1.0);
    Some(Color::rgba(
        channel(parts[0]),
        channel(parts[1]),
        channel(parts[2]),
        alpha,
    ))
}

fn named_color(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::BLACK,
        "white" => Color::rgb(1.0, 1.0, 1.0),
        "red" => Color::rgb(1.0, 0.0, 0.0),
        "green" => Color::rgb(0.0, 128.0 / 255.0, 0.0),
        "blue" => Color::rgb(0.0, 0.0, 1.0),
        "gray" | "grey" => Color::rgb(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0),
        "transparent" => Color::rgba(0.0, 0.0, 0.0, 0.0),
        _ => return None,
    };
    Some(color)
}
