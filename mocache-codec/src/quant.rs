//! Fixed-point delta quantization
//!
//! Per-frame deltas are stored as signed 16-bit fixed point at a single
//! shared scale. Encoder and decoder of a clip must agree on the scale
//! exactly or reconstruction silently drifts, so it is a crate constant
//! rather than a header field.

/// Fixed-point scale for delta quantization.
///
/// Representable delta range at this scale is roughly ±32.0 with a
/// worst-case round-trip error of `0.5 / QUANTIZE_SCALE` (~0.0005).
pub const QUANTIZE_SCALE: f32 = 1024.0;

/// Quantize a delta to signed 16-bit fixed point.
///
/// Deltas beyond the representable range saturate to the i16 limits
/// rather than erroring; callers with larger per-frame motion need a
/// smaller scale.
#[inline]
pub fn quantize(delta: f32) -> i16 {
    // Float-to-int casts saturate, which gives the clamp for free.
    (delta * QUANTIZE_SCALE).round() as i16
}

/// Recover a delta from its fixed-point form.
#[inline]
pub fn dequantize(q: i16) -> f32 {
    q as f32 / QUANTIZE_SCALE
}
