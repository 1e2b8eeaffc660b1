use std::path::PathBuf;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::assets::decode::{PreparedImage, decode_image, looks_like_svg, parse_svg};
use crate::assets::svg_raster::{rasterize_svg, svg_raster_size};
use crate::foundation::error::{QrPaintError, QrPaintResult};

/// Where a logo image comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogoSource {
    /// File on the local filesystem.
    Path(PathBuf),
    /// `data:[<mediatype>][;base64],<payload>` URI.
    DataUri(String),
    /// Encoded image bytes already in memory.
    Bytes(Arc<[u8]>),
    /// `http(s)` URL, fetched only when the `http` feature is enabled.
    Url(String),
}

impl LogoSource {
    /// Classify a source string: `data:` URIs, `http(s)://` URLs, otherwise a path.
    pub fn parse(s: &str) -> Self {
        let t = s.trim();
        if has_prefix_ignore_case(t, "data:") {
            Self::DataUri(t.to_owned())
        } else if has_prefix_ignore_case(t, "http://") || has_prefix_ignore_case(t, "https://") {
            Self::Url(t.to_owned())
        } else {
            Self::Path(PathBuf::from(t))
        }
    }

    /// Wrap encoded image bytes.
    pub fn from_bytes(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self::Bytes(bytes.into())
    }
}

impl std::fmt::Display for LogoSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path(p) => write!(f, "{}", p.display()),
            Self::DataUri(uri) => write!(f, "data URI ({} bytes)", uri.len()),
            Self::Bytes(b) => write!(f, "{} in-memory bytes", b.len()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

fn has_prefix_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Fetch and decode a logo.
///
/// `target_px` is the physical size the logo will cover; vector logos are rasterized at that
/// size, raster logos keep their native resolution. Decoding runs on the blocking pool so the
/// caller's executor is never stalled. Every failure is reported as
/// [`QrPaintError::LogoLoad`].
pub async fn load_logo(source: LogoSource, target_px: (f64, f64)) -> QrPaintResult<PreparedImage> {
    let bytes = fetch_logo_bytes(&source).await?;
    let image = tokio::task::spawn_blocking(move || decode_logo_bytes(&bytes, target_px))
        .await
        .map_err(|e| QrPaintError::logo_load(format!("logo decode task failed: {e}")))??;
    tracing::debug!(%source, width = image.width, height = image.height, "logo decoded");
    Ok(image)
}

/// Decode logo bytes, rasterizing SVG documents at `target_px`.
pub fn decode_logo_bytes(bytes: &[u8], target_px: (f64, f64)) -> QrPaintResult<PreparedImage> {
    let decoded = if looks_like_svg(bytes) {
        parse_svg(bytes).and_then(|tree| {
            let (w, h) = svg_raster_size(&tree, target_px.0, target_px.1)?;
            rasterize_svg(&tree, w, h)
        })
    } else {
        decode_image(bytes)
    };
    decoded.map_err(|e| match e {
        QrPaintError::LogoLoad(_) => e,
        other => QrPaintError::logo_load(format!("{other:#}")),
    })
}

async fn fetch_logo_bytes(source: &LogoSource) -> QrPaintResult<Vec<u8>> {
    match source {
        LogoSource::Path(p) => tokio::fs::read(p)
            .await
            .map_err(|e| QrPaintError::logo_load(format!("read logo '{}': {e}", p.display()))),
        LogoSource::DataUri(uri) => decode_data_uri(uri),
        LogoSource::Bytes(b) => Ok(b.to_vec()),
        LogoSource::Url(url) => fetch_url(url).await,
    }
}

#[cfg(feature = "http")]
async fn fetch_url(url: &str) -> QrPaintResult<Vec<u8>> {
    let resp = reqwest::get(url)
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| QrPaintError::logo_load(format!("fetch logo '{url}': {e}")))?;
    let bytes = resp
        .bytes()
        .await
        .map_err(|e| QrPaintError::logo_load(format!("read logo body '{url}': {e}")))?;
    Ok(bytes.to_vec())
}

#[cfg(not(feature = "http"))]
async fn fetch_url(url: &str) -> QrPaintResult<Vec<u8>> {
    Err(QrPaintError::logo_load(format!(
        "cannot fetch '{url}': built without the `http` feature"
    )))
}

/// Decode the payload of a `data:` URI.
///
/// Base64 payloads may contain ASCII whitespace; other payloads are taken verbatim.
pub fn decode_data_uri(uri: &str) -> QrPaintResult<Vec<u8>> {
    if !has_prefix_ignore_case(uri, "data:") {
        return Err(QrPaintError::logo_load("not a data URI"));
    }
    let (meta, payload) = uri["data:".len()..]
        .split_once(',')
        .ok_or_else(|| QrPaintError::logo_load("data URI has no ',' separator"))?;

    let is_base64 = meta
        .split(';')
        .any(|p| p.trim().eq_ignore_ascii_case("base64"));
    if !is_base64 {
        return Ok(payload.as_bytes().to_vec());
    }

    let cleaned: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    BASE64
        .decode(cleaned.as_bytes())
        .map_err(|e| QrPaintError::logo_load(format!("invalid base64 in data URI: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/logo.rs"]
mod tests;
