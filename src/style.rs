/// Color parsing.
pub mod color;
/// Normalization of raw parameters into a [`normalize::RenderStyle`].
pub mod normalize;
/// Raw, serde-facing render parameters.
pub mod params;
