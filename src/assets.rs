/// Raster and SVG decoding into premultiplied RGBA8.
pub mod decode;
/// Logo sources and the async logo loader.
pub mod logo;
pub(crate) mod svg_raster;
