use cgmath::BaseFloat;

/// Scalar is the floating-point parameterization of the crate: any angle
/// value, in radians, of a concrete precision.
///
/// Beyond the cgmath numeric bounds it carries the per-precision constants
/// the interval normalization depends on. `PI` is *not* the standard
/// library constant: it is a grid-aligned truncation of pi chosen so that
/// `TAU` is an exact multiple of the `2 * EPS` quantization step, which
/// keeps winding-number shifts by `TAU` exact and re-normalization of an
/// already-canonical interval bit-identical.
pub trait Scalar: BaseFloat {
    /// Quantization step. Canonical interval bounds are truncated to
    /// multiples of `2 * EPS` so that values separated only by accumulated
    /// rounding error compare equal.
    const EPS: Self;

    /// Grid-aligned truncation of pi.
    const PI: Self;

    /// One full turn, exactly `2 * PI`.
    const TAU: Self;
}

impl Scalar for f64 {
    // 2^-30
    const EPS: f64 = 9.31322574615478515625e-10;
    const PI: f64 = 3.14159265346825122833251953125;
    const TAU: f64 = 6.2831853069365024566650390625;
}

impl Scalar for f32 {
    // 2^-15
    const EPS: f32 = 3.0517578125e-5;
    const PI: f32 = 3.141571044921875;
    const TAU: f32 = 6.28314208984375;
}
