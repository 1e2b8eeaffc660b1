/// Convenience result type used across qrpaint.
pub type QrPaintResult<T> = Result<T, QrPaintError>;

/// Errors surfaced by the rendering engine.
///
/// Invalid style fields are never reported here: they fall back to their documented defaults
/// during normalization.
#[derive(thiserror::Error, Debug)]
pub enum QrPaintError {
    /// Invalid matrix, missing logo source or malformed parameter shape.
    #[error("validation error: {0}")]
    Validation(String),

    /// The output surface could not be created or addressed.
    #[error("surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// The logo could not be fetched or decoded.
    #[error("logo load error: {0}")]
    LogoLoad(String),

    /// Errors when deserializing a parameter document.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl QrPaintError {
    /// Build a [`QrPaintError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`QrPaintError::SurfaceUnavailable`] value.
    pub fn surface_unavailable(msg: impl Into<String>) -> Self {
        Self::SurfaceUnavailable(msg.into())
    }

    /// Build a [`QrPaintError::LogoLoad`] value.
    pub fn logo_load(msg: impl Into<String>) -> Self {
        Self::LogoLoad(msg.into())
    }

    /// Build a [`QrPaintError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Return `true` for failures that leave the rendered base frame usable.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::LogoLoad(_) | Self::Validation(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
