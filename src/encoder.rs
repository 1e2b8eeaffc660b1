//! Adapter from the `qrcode` crate to [`ModuleMatrix`].

use crate::foundation::error::{QrPaintError, QrPaintResult};
use crate::matrix::ModuleMatrix;
use crate::style::normalize::EcLevel;

impl From<EcLevel> for qrcode::EcLevel {
    fn from(level: EcLevel) -> Self {
        match level {
            EcLevel::Low => qrcode::EcLevel::L,
            EcLevel::Medium => qrcode::EcLevel::M,
            EcLevel::Quartile => qrcode::EcLevel::Q,
            EcLevel::High => qrcode::EcLevel::H,
        }
    }
}

/// Encode `payload` (as UTF-8 bytes) at `level`, picking the smallest fitting version.
pub fn encode_matrix(payload: &str, level: EcLevel) -> QrPaintResult<ModuleMatrix> {
    let code = qrcode::QrCode::with_error_correction_level(payload.as_bytes(), level.into())
        .map_err(|e| QrPaintError::validation(format!("QR encode error: {e}")))?;
    let side = code.width();
    let colors = code.to_colors();
    tracing::debug!(side, ec = level.as_str(), "payload encoded");
    ModuleMatrix::from_fn(side, |row, col| {
        colors[row * side + col] == qrcode::Color::Dark
    })
}

#[cfg(test)]
#[path = "../tests/unit/encoder.rs"]
mod tests;
