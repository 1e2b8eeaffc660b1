use crate::assets::logo::LogoSource;
use crate::foundation::core::Rgba8;
use crate::geometry::CornerRadii;
use crate::style::color::ColorInput;
use crate::style::params::{EyeParam, RenderParams};

/// Default logical output side in pixels.
pub const DEFAULT_SIZE: f64 = 150.0;
/// Default quiet-zone width in pixels.
pub const DEFAULT_QUIET_ZONE: f64 = 10.0;
pub const DEFAULT_BG_COLOR: Rgba8 = Rgba8::WHITE;
pub const DEFAULT_FG_COLOR: Rgba8 = Rgba8::BLACK;
pub const DEFAULT_LOGO_OPACITY: f64 = 1.0;

/// Error-correction level requested from the symbol encoder.
///
/// The renderer never looks at it; it travels with the style so the glue that calls the encoder
/// has a single source of truth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EcLevel {
    /// ~7% recovery.
    Low,
    /// ~15% recovery.
    #[default]
    Medium,
    /// ~25% recovery.
    Quartile,
    /// ~30% recovery.
    High,
}

impl EcLevel {
    /// Parse `L`/`M`/`Q`/`H` (or the full names), case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" | "LOW" => Some(Self::Low),
            "M" | "MEDIUM" => Some(Self::Medium),
            "Q" | "QUARTILE" => Some(Self::Quartile),
            "H" | "HIGH" => Some(Self::High),
            _ => None,
        }
    }

    /// Single-letter form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "L",
            Self::Medium => "M",
            Self::Quartile => "Q",
            Self::High => "H",
        }
    }
}

/// How dark data modules are painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ModuleStyle {
    /// Gap-free pixel-snapped squares.
    #[default]
    Squares,
    /// Shrunk circles centered in each cell.
    Dots,
}

impl ModuleStyle {
    /// Parse `squares` or `dots` (singular accepted), case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "squares" | "square" => Some(Self::Squares),
            "dots" | "dot" => Some(Self::Dots),
            _ => None,
        }
    }
}

/// Shape of the background pad behind the logo.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaddingStyle {
    /// Rectangle grown by the padding on every side.
    #[default]
    Square,
    /// Ellipse inscribed in the padded rectangle.
    Circle,
}

impl PaddingStyle {
    /// Parse `square` or `circle`, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "square" => Some(Self::Square),
            "circle" => Some(Self::Circle),
            _ => None,
        }
    }
}

/// Fully resolved colors and radii of one positional eye.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EyeStyle {
    pub outer_color: Rgba8,
    pub inner_color: Rgba8,
    pub outer_radii: CornerRadii,
    pub inner_radii: CornerRadii,
}

/// Logo descriptor. Width and height of `0` mean "derive from the output size".
#[derive(Clone, Debug, PartialEq)]
pub struct LogoStyle {
    pub source: LogoSource,
    pub width: f64,
    pub height: f64,
    /// Global alpha in `(0, 1]`.
    pub opacity: f64,
    pub padding: f64,
    pub padding_style: PaddingStyle,
    pub remove_behind: bool,
}

impl LogoStyle {
    /// Logo with every option at its default.
    pub fn new(source: LogoSource) -> Self {
        Self {
            source,
            width: 0.0,
            height: 0.0,
            opacity: DEFAULT_LOGO_OPACITY,
            padding: 0.0,
            padding_style: PaddingStyle::Square,
            remove_behind: false,
        }
    }

    /// Whether a background mask is painted before the logo.
    pub fn needs_mask(&self) -> bool {
        self.remove_behind || self.padding > 0.0
    }
}

/// Immutable, fully typed configuration for one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderStyle {
    /// Logical side of the symbol area in pixels, excluding the quiet zone.
    pub size: f64,
    pub quiet_zone: f64,
    pub bg_color: Rgba8,
    pub fg_color: Rgba8,
    pub ec_level: EcLevel,
    pub module_style: ModuleStyle,
    /// Eyes in zone order: top-left, top-right, bottom-left.
    pub eyes: [EyeStyle; 3],
    pub logo: Option<LogoStyle>,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::from_params(&RenderParams::default())
    }
}

impl RenderStyle {
    /// Validate and default every field of `params`.
    ///
    /// Never fails: each invalid or missing field is replaced by its documented default.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn from_params(params: &RenderParams) -> Self {
        let size = positive_or(params.size, "size", DEFAULT_SIZE);
        let quiet_zone = non_negative_or(params.quiet_zone, "quietZone", DEFAULT_QUIET_ZONE);
        let bg_color = color_or(params.bg_color.as_ref(), "bgColor", DEFAULT_BG_COLOR);
        let fg_color = color_or(params.fg_color.as_ref(), "fgColor", DEFAULT_FG_COLOR);
        let ec_level = parsed_or(params.ec_level.as_deref(), "ecLevel", EcLevel::parse);
        let module_style = parsed_or(params.qr_style.as_deref(), "qrStyle", ModuleStyle::parse);

        let eyes = resolve_eyes(
            params.eye_color.as_ref(),
            params.eye_radius.as_ref(),
            fg_color,
        );

        let logo = params
            .logo_image
            .as_deref()
            .map(|src| LogoStyle {
                source: LogoSource::parse(src),
                width: positive_or(params.logo_width, "logoWidth", 0.0),
                height: positive_or(params.logo_height, "logoHeight", 0.0),
                opacity: positive_or(params.logo_opacity, "logoOpacity", DEFAULT_LOGO_OPACITY)
                    .min(1.0),
                padding: positive_or(params.logo_padding, "logoPadding", 0.0),
                padding_style: parsed_or(
                    params.logo_padding_style.as_deref(),
                    "logoPaddingStyle",
                    PaddingStyle::parse,
                ),
                remove_behind: params.remove_qr_code_behind_logo.unwrap_or(false),
            });

        Self {
            size,
            quiet_zone,
            bg_color,
            fg_color,
            ec_level,
            module_style,
            eyes,
            logo,
        }
    }

    /// Logical side of the whole canvas, quiet zone included.
    pub fn canvas_side(&self) -> f64 {
        self.size + 2.0 * self.quiet_zone
    }

    /// Replace the logo descriptor.
    pub fn with_logo(mut self, logo: Option<LogoStyle>) -> Self {
        self.logo = logo;
        self
    }
}

fn positive_or(v: Option<f64>, key: &str, default: f64) -> f64 {
    match v {
        Some(v) if v.is_finite() && v > 0.0 => v,
        Some(v) => {
            tracing::debug!(key, value = v, default, "invalid numeric parameter, using default");
            default
        }
        None => default,
    }
}

fn non_negative_or(v: Option<f64>, key: &str, default: f64) -> f64 {
    match v {
        Some(v) if v.is_finite() && v >= 0.0 => v,
        Some(v) => {
            tracing::debug!(key, value = v, default, "invalid numeric parameter, using default");
            default
        }
        None => default,
    }
}

fn color_or(v: Option<&ColorInput>, key: &str, default: Rgba8) -> Rgba8 {
    match v.map(|c| (c, c.resolve())) {
        Some((_, Some(c))) => c,
        Some((raw, None)) => {
            tracing::debug!(key, ?raw, %default, "unrecognized color, using default");
            default
        }
        None => default,
    }
}

fn parsed_or<T: Default + std::fmt::Debug>(
    v: Option<&str>,
    key: &str,
    parse: impl FnOnce(&str) -> Option<T>,
) -> T {
    match v {
        Some(raw) => parse(raw).unwrap_or_else(|| {
            let default = T::default();
            tracing::debug!(key, raw, ?default, "unrecognized value, using default");
            default
        }),
        None => T::default(),
    }
}

fn resolve_eyes(
    color: Option<&EyeParam<ColorInput>>,
    radius: Option<&EyeParam<CornerRadii>>,
    fg_color: Rgba8,
) -> [EyeStyle; 3] {
    let colors = color.map(EyeParam::per_eye);
    let radii = radius.map(EyeParam::per_eye);

    std::array::from_fn(|i| {
        let (inner_color, outer_color) = match &colors {
            Some(parts) => {
                let (inner, outer) = parts[i].split();
                (
                    color_or(Some(&inner), "eyeColor", fg_color),
                    color_or(Some(&outer), "eyeColor", fg_color),
                )
            }
            None => (fg_color, fg_color),
        };
        let (inner_radii, outer_radii) = match &radii {
            Some(parts) => parts[i].split(),
            None => (CornerRadii::default(), CornerRadii::default()),
        };
        EyeStyle {
            outer_color,
            inner_color,
            outer_radii,
            inner_radii,
        }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/style/normalize.rs"]
mod tests;
