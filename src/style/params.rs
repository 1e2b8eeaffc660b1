use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Deserializer};

use crate::foundation::error::{QrPaintError, QrPaintResult};
use crate::geometry::CornerRadii;
use crate::style::color::ColorInput;

/// Raw render parameters as supplied by a caller or a JSON document.
///
/// Every field is optional. Keys use the camelCase names of the parameter document
/// (`quietZone`, `removeQrCodeBehindLogo`, ...). Numeric fields accept numbers or numeric
/// strings; anything else is treated as absent and later replaced by its default in
/// [`crate::RenderStyle::from_params`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderParams {
    /// Logical output side in pixels, excluding the quiet zone.
    #[serde(deserialize_with = "lenient_number")]
    pub size: Option<f64>,
    /// Width of the background border around the symbol.
    #[serde(deserialize_with = "lenient_number")]
    pub quiet_zone: Option<f64>,
    #[serde(deserialize_with = "lenient_color")]
    pub bg_color: Option<ColorInput>,
    #[serde(deserialize_with = "lenient_color")]
    pub fg_color: Option<ColorInput>,
    /// `L`, `M`, `Q` or `H`.
    #[serde(deserialize_with = "lenient_text")]
    pub ec_level: Option<String>,
    /// `squares` or `dots`.
    #[serde(deserialize_with = "lenient_text")]
    pub qr_style: Option<String>,
    pub eye_color: Option<EyeParam<ColorInput>>,
    pub eye_radius: Option<EyeParam<CornerRadii>>,
    /// Path, `data:` URI or `http(s)` URL of the logo.
    #[serde(deserialize_with = "lenient_text")]
    pub logo_image: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub logo_width: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub logo_height: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub logo_opacity: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub logo_padding: Option<f64>,
    /// `square` or `circle`.
    #[serde(deserialize_with = "lenient_text")]
    pub logo_padding_style: Option<String>,
    #[serde(deserialize_with = "lenient_bool")]
    pub remove_qr_code_behind_logo: Option<bool>,
}

impl RenderParams {
    /// Parse a JSON parameter document.
    pub fn from_json_str(s: &str) -> QrPaintResult<Self> {
        serde_json::from_str(s).map_err(|e| QrPaintError::serde(e.to_string()))
    }

    /// Read and parse a JSON parameter document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> QrPaintResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read render params '{}'", path.display()))?;
        Self::from_json_str(&text)
    }
}

/// One eye's value: the same for both squares, or split into inner and outer.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(
    try_from = "PartRepr<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub enum EyePart<T> {
    /// Used for the inner and the outer square.
    Uniform(T),
    /// Separate values for the inner and the outer square.
    InnerOuter {
        /// Inner (filled) square.
        inner: T,
        /// Outer (ring) square.
        outer: T,
    },
}

impl<T: Clone> EyePart<T> {
    /// Split into `(inner, outer)`.
    pub fn split(&self) -> (T, T) {
        match self {
            Self::Uniform(v) => (v.clone(), v.clone()),
            Self::InnerOuter { inner, outer } => (inner.clone(), outer.clone()),
        }
    }
}

/// Eye color or radius as supplied: shared by all three eyes or listed per eye.
///
/// Per-eye lists must have exactly three entries (top-left, top-right, bottom-left); any other
/// arity is rejected while parsing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(
    try_from = "ParamRepr<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub enum EyeParam<T> {
    /// Same value for both squares of every eye.
    Uniform(T),
    /// Inner/outer pair shared by every eye.
    InnerOuter {
        /// Inner (filled) square.
        inner: T,
        /// Outer (ring) square.
        outer: T,
    },
    /// One entry per eye.
    PerEye([EyePart<T>; 3]),
}

impl<T: Clone> EyeParam<T> {
    /// Resolve to exactly one entry per eye, in zone order.
    pub fn per_eye(&self) -> [EyePart<T>; 3] {
        match self {
            Self::Uniform(v) => std::array::from_fn(|_| EyePart::Uniform(v.clone())),
            Self::InnerOuter { inner, outer } => std::array::from_fn(|_| EyePart::InnerOuter {
                inner: inner.clone(),
                outer: outer.clone(),
            }),
            Self::PerEye(parts) => parts.clone(),
        }
    }
}

// Inner/outer pairs only come from JSON objects. Deriving them as struct variants would also
// accept two-element arrays, which collide with per-eye lists of the wrong arity.
#[derive(Deserialize)]
#[serde(untagged, bound(deserialize = "T: Deserialize<'de>"))]
enum PartRepr<T> {
    Uniform(T),
    Pair(BTreeMap<String, T>),
}

impl<T> TryFrom<PartRepr<T>> for EyePart<T> {
    type Error = String;

    fn try_from(repr: PartRepr<T>) -> Result<Self, Self::Error> {
        match repr {
            PartRepr::Uniform(v) => Ok(Self::Uniform(v)),
            PartRepr::Pair(map) => {
                let (inner, outer) = inner_outer(map)?;
                Ok(Self::InnerOuter { inner, outer })
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged, bound(deserialize = "T: Deserialize<'de>"))]
enum ParamRepr<T> {
    Uniform(T),
    Pair(BTreeMap<String, T>),
    PerEye([EyePart<T>; 3]),
}

impl<T> TryFrom<ParamRepr<T>> for EyeParam<T> {
    type Error = String;

    fn try_from(repr: ParamRepr<T>) -> Result<Self, Self::Error> {
        match repr {
            ParamRepr::Uniform(v) => Ok(Self::Uniform(v)),
            ParamRepr::Pair(map) => {
                let (inner, outer) = inner_outer(map)?;
                Ok(Self::InnerOuter { inner, outer })
            }
            ParamRepr::PerEye(parts) => Ok(Self::PerEye(parts)),
        }
    }
}

fn inner_outer<T>(mut map: BTreeMap<String, T>) -> Result<(T, T), String> {
    let inner = map.remove("inner").ok_or("eye value object is missing `inner`")?;
    let outer = map.remove("outer").ok_or("eye value object is missing `outer`")?;
    if let Some(key) = map.keys().next() {
        return Err(format!("unexpected eye value key `{key}`"));
    }
    Ok((inner, outer))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberRepr {
    Num(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match NumberRepr::deserialize(deserializer)? {
        NumberRepr::Num(v) => Some(v),
        NumberRepr::Text(s) => s.trim().parse::<f64>().ok(),
        NumberRepr::Other(_) => None,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextRepr {
    Text(String),
    Other(serde::de::IgnoredAny),
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TextRepr::deserialize(deserializer)? {
        TextRepr::Text(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolRepr {
    Bool(bool),
    Text(String),
    Other(serde::de::IgnoredAny),
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match BoolRepr::deserialize(deserializer)? {
        BoolRepr::Bool(b) => Some(b),
        BoolRepr::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        BoolRepr::Other(_) => None,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Color(ColorInput),
    Other(serde::de::IgnoredAny),
}

fn lenient_color<'de, D>(deserializer: D) -> Result<Option<ColorInput>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match ColorRepr::deserialize(deserializer)? {
        ColorRepr::Color(c) => Some(c),
        ColorRepr::Other(_) => None,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/style/params.rs"]
mod tests;
