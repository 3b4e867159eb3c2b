//! Host-independent geometry for the page behaviors.
//!
//! Everything here is plain Rust so the placement rules can be tested natively
//! without a browser. The DOM side only feeds in the viewport and a random source
//! and writes the formatted CSS values back out.

use crate::error::PageError;

/// Visible rendering area (window inner size in CSS pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A 2D position / translation in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

/// Footprint of the evading element, subtracted from the viewport so the
/// element's top-left corner lands inside the visible area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementSize {
    pub width: f64,
    pub height: f64,
}

/// Uniform random numbers in [0, 1). A source that cannot produce a value
/// reports it instead of substituting one.
pub trait RandomSource {
    fn next_unit(&mut self) -> Result<f64, PageError>;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> Result<f64, PageError> {
        (**self).next_unit()
    }
}

/// `Math.random()` from the host JS engine. Only meaningful on wasm32.
#[derive(Clone, Copy, Debug, Default)]
pub struct MathRandom;

impl RandomSource for MathRandom {
    fn next_unit(&mut self) -> Result<f64, PageError> {
        Ok(js_sys::Math::random())
    }
}

/// Crypto-backed source (feature = "rng"). Uses 53 random bits so every value
/// is an exact multiple of 2^-53 below 1.0.
#[cfg(feature = "rng")]
#[derive(Clone, Copy, Debug, Default)]
pub struct CryptoRandom;

#[cfg(feature = "rng")]
impl RandomSource for CryptoRandom {
    fn next_unit(&mut self) -> Result<f64, PageError> {
        let mut buf = [0u8; 8];
        getrandom::getrandom(&mut buf).map_err(|e| PageError::Random(e.to_string()))?;
        let bits = u64::from_le_bytes(buf) >> 11;
        Ok(bits as f64 / (1u64 << 53) as f64)
    }
}

/// Cycles through a fixed list of values. Values are taken as-is, so callers are
/// responsible for keeping them inside [0, 1).
#[derive(Clone, Debug)]
pub struct SequenceRandom {
    values: Vec<f64>,
    next: usize,
}

impl SequenceRandom {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self { values: values.into(), next: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> Result<f64, PageError> {
        if self.values.is_empty() {
            return Err(PageError::Random("empty sequence".to_string()));
        }
        let v = self.values[self.next % self.values.len()];
        self.next = self.next.wrapping_add(1);
        Ok(v)
    }
}

/// Random translation for the evading element: x in [0, W - w), y in [0, H - h).
/// Not clamped; a viewport smaller than the element yields a negative offset.
pub fn evader_offset(
    viewport: Viewport,
    size: ElementSize,
    rng: &mut impl RandomSource,
) -> Result<Offset, PageError> {
    let x = rng.next_unit()? * (viewport.width - size.width);
    let y = rng.next_unit()? * (viewport.height - size.height);
    Ok(Offset { x, y })
}

/// Random starting point for one heart: left in [0, W), top in [0, H).
pub fn heart_position(viewport: Viewport, rng: &mut impl RandomSource) -> Result<Offset, PageError> {
    let x = rng.next_unit()? * viewport.width;
    let y = rng.next_unit()? * viewport.height;
    Ok(Offset { x, y })
}

/// CSS pixel length, e.g. `12.5px`.
pub fn px(value: f64) -> String {
    format!("{}px", value)
}

/// CSS `transform` value moving an element by `offset`.
pub fn translate(offset: Offset) -> String {
    format!("translate({}, {})", px(offset.x), px(offset.y))
}
