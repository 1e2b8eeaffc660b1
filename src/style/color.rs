use crate::foundation::core::Rgba8;
use serde::Deserialize;

/// A color as it appears in a parameter document.
///
/// Accepted shapes:
///
/// - CSS-like strings: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r, g, b)`,
///   `rgba(r, g, b, a)` and a handful of named colors
/// - `{ "r", "g", "b", "a"? }` objects with channels in `0..=1`
/// - `{ "h", "s", "l", "a"? }` objects (hue in degrees, the rest in `0..=1`)
///
/// Parsing never fails at deserialization time for strings; an unparseable string resolves to
/// `None` in [`ColorInput::resolve`] and the caller applies its fallback.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    /// CSS-like color text.
    Text(String),
    /// Normalized RGBA object.
    Rgba {
        /// Red in `0..=1`.
        r: f64,
        /// Green in `0..=1`.
        g: f64,
        /// Blue in `0..=1`.
        b: f64,
        /// Alpha in `0..=1`.
        #[serde(default = "one")]
        a: f64,
    },
    /// Normalized HSLA object.
    Hsla {
        /// Hue in degrees.
        h: f64,
        /// Saturation in `0..=1`.
        s: f64,
        /// Lightness in `0..=1`.
        l: f64,
        /// Alpha in `0..=1`.
        #[serde(default = "one")]
        a: f64,
    },
}

fn one() -> f64 {
    1.0
}

impl ColorInput {
    /// Resolve to a concrete color, or `None` when the input is not a recognizable color.
    pub fn resolve(&self) -> Option<Rgba8> {
        match self {
            Self::Text(s) => parse_color(s),
            Self::Rgba { r, g, b, a } => unit_rgba(*r, *g, *b, *a),
            Self::Hsla { h, s, l, a } => {
                let (r, g, b) = hsl_to_rgb(*h, *s, *l)?;
                unit_rgba(r, g, b, *a)
            }
        }
    }
}

impl From<&str> for ColorInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<Rgba8> for ColorInput {
    fn from(c: Rgba8) -> Self {
        Self::Text(c.to_string())
    }
}

/// Parse CSS-like color text.
pub fn parse_color(s: &str) -> Option<Rgba8> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    let lower = s.to_ascii_lowercase();
    if let Some(args) = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_rgb_fn(args);
    }
    named_color(&lower)
}

fn parse_hex(s: &str) -> Option<Rgba8> {
    if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    fn nibble(c: u8) -> u8 {
        let v = (c as char).to_digit(16).unwrap_or(0) as u8;
        v << 4 | v
    }

    fn byte(pair: &str) -> Option<u8> {
        u8::from_str_radix(pair, 16).ok()
    }

    let b = s.as_bytes();
    match s.len() {
        3 => Some(Rgba8::opaque(nibble(b[0]), nibble(b[1]), nibble(b[2]))),
        4 => Some(Rgba8::new(
            nibble(b[0]),
            nibble(b[1]),
            nibble(b[2]),
            nibble(b[3]),
        )),
        6 => Some(Rgba8::opaque(
            byte(&s[0..2])?,
            byte(&s[2..4])?,
            byte(&s[4..6])?,
        )),
        8 => Some(Rgba8::new(
            byte(&s[0..2])?,
            byte(&s[2..4])?,
            byte(&s[4..6])?,
            byte(&s[6..8])?,
        )),
        _ => None,
    }
}

fn parse_rgb_fn(args: &str) -> Option<Rgba8> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let mut rgb = [0u8; 3];
    for (slot, part) in rgb.iter_mut().zip(&parts) {
        let v: f64 = part.parse().ok()?;
        if !v.is_finite() {
            return None;
        }
        *slot = v.round().clamp(0.0, 255.0) as u8;
    }
    let a = match parts.get(3) {
        Some(part) => {
            let v: f64 = part.parse().ok()?;
            if !v.is_finite() {
                return None;
            }
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        None => 255,
    };
    Some(Rgba8::new(rgb[0], rgb[1], rgb[2], a))
}

fn named_color(name: &str) -> Option<Rgba8> {
    let c = match name {
        "black" => Rgba8::BLACK,
        "white" => Rgba8::WHITE,
        "transparent" => Rgba8::TRANSPARENT,
        "red" => Rgba8::opaque(255, 0, 0),
        "green" => Rgba8::opaque(0, 128, 0),
        "lime" => Rgba8::opaque(0, 255, 0),
        "blue" => Rgba8::opaque(0, 0, 255),
        "navy" => Rgba8::opaque(0, 0, 128),
        "yellow" => Rgba8::opaque(255, 255, 0),
        "orange" => Rgba8::opaque(255, 165, 0),
        "purple" => Rgba8::opaque(128, 0, 128),
        "gray" | "grey" => Rgba8::opaque(128, 128, 128),
        _ => return None,
    };
    Some(c)
}

fn unit_rgba(r: f64, g: f64, b: f64, a: f64) -> Option<Rgba8> {
    if ![r, g, b, a].iter().all(|v| v.is_finite()) {
        return None;
    }

    fn to_u8(x: f64) -> u8 {
        (x.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    Some(Rgba8::new(to_u8(r), to_u8(g), to_u8(b), to_u8(a)))
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Option<(f64, f64, f64)> {
    if ![h, s, l].iter().all(|v| v.is_finite()) {
        return None;
    }
    let h = (h % 360.0 + 360.0) % 360.0 / 360.0;
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        return Some((l, l, l));
    }

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    Some((
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/style/color.rs"]
mod tests;
