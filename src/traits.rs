/// Extension trait for `usize` to provide f32 conversion for indices and counts
pub trait UsizeExt {
    /// Converts `usize` to `f32` (exact for values below 16 million, which every
    /// marker or arc index is)
    fn to_f32(self) -> f32;
}

impl UsizeExt for usize {
    #[inline]
    #[allow(
        clippy::cast_precision_loss,
        reason = "marker and arc indices are tiny"
    )]
    fn to_f32(self) -> f32 { self as f32 }
}

/// Extension trait for `f64` clock and angle values that feed `f32` math
pub trait F64Ext {
    /// Narrows to `f32`. Callers reduce the value to a small range first.
    fn to_f32(self) -> f32;
}

impl F64Ext for f64 {
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "values are reduced to a single period before narrowing"
    )]
    fn to_f32(self) -> f32 { self as f32 }
}
