use crate::scalar::Scalar;
use num_traits::Float;
use std::fmt;
use std::ops::Add;

/// AngularInterval represents one contiguous arc of the circle, stored in a
/// canonical wrapped form. An interval is constructed from any pair of
/// radian values, of arbitrary magnitude and winding count, and normalized
/// so that exactly one of three shapes holds:
///
/// - non-wrapping: `lo <= hi`, both in `(-PI, PI]` — the arc swept
///   counter-clockwise from `lo` to `hi`;
/// - wrapping: `lo > hi` — the arc crosses the ±PI seam and covers
///   `[lo, PI] ∪ [-PI, hi]`;
/// - full circle: exactly `(-PI, PI)` as a bound pair.
///
/// Both bounds are truncated onto a grid of `2 * EPS` so that bounds which
/// drifted apart only through accumulated rounding compare equal. This is a
/// deliberate precision-for-robustness trade.
///
/// Intervals are immutable values; arithmetic returns new instances.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngularInterval<T: Scalar> {
    lo: T,
    hi: T,
}

impl<T: Scalar> AngularInterval<T> {
    /// Builds the canonical interval for the arc swept counter-clockwise
    /// from `lower` to `upper`. A span of `2 * PI` or more collapses to the
    /// full circle; `lower > upper` is read as a sweep crossing one winding
    /// boundary. All inputs are valid, including `lower == upper` (a single
    /// angle).
    pub fn new(lower: T, upper: T) -> Self {
        let pi = T::PI;
        let tau = T::TAU;

        if (upper - lower).abs() >= tau {
            // The constants are already grid-aligned, skip quantization.
            return AngularInterval { lo: -pi, hi: pi };
        }

        let mut l = lower;
        let mut u = if lower > upper { upper + tau } else { upper };

        // Bring both bounds into the winding that puts the upper bound
        // nearest the principal range, keeping their relative position.
        let n = (u / tau).floor();
        u = u - n * tau;
        l = l - n * tau;
        if u > pi {
            u = u - tau;
            l = l - tau;
        }
        // A lower bound at or below -PI lifts alone; this is what produces
        // the wrapped form lo > hi.
        if l <= -pi {
            l = l + tau;
        }

        let grid = T::EPS + T::EPS;
        AngularInterval {
            lo: l - l % grid,
            hi: u - u % grid,
        }
    }

    /// Returns a lower bound guaranteed numerically below `upper()`: the
    /// stored bound when the interval does not wrap, else the stored bound
    /// shifted down one winding. Arithmetic consumers always see an
    /// ascending pair.
    pub fn lower(&self) -> T {
        if self.lo < self.hi {
            self.lo
        } else {
            self.lo - T::TAU
        }
    }

    /// Returns the stored canonical lower bound.
    pub fn lower_raw(&self) -> T {
        self.lo
    }

    /// Returns the stored canonical upper bound.
    pub fn upper(&self) -> T {
        self.hi
    }

    /// Reports whether the arc crosses the ±PI seam.
    pub fn is_wrapping(&self) -> bool {
        self.lo > self.hi
    }

    /// Reports whether the given angle, at any winding count, lies on the
    /// arc. Bounds are included.
    pub fn contains(&self, angle: T) -> bool {
        let pi = T::PI;
        let tau = T::TAU;
        let n = (angle / tau).floor();
        let mut v = angle - n * tau;
        if v > pi {
            v = v - tau;
        }
        if self.lo <= self.hi {
            self.lo <= v && v <= self.hi
        } else {
            // Wrapped arc [lo, PI] ∪ [-PI, hi]; the gap (hi, lo) is outside.
            v >= self.lo || v <= self.hi
        }
    }

    /// Returns this interval translated by `delta` radians, re-normalized.
    pub fn offset(&self, delta: T) -> Self {
        AngularInterval::new(self.lower() + delta, self.upper() + delta)
    }
}

/// Interval addition (the Minkowski sum of two single arcs), not set union.
impl<T: Scalar> Add for AngularInterval<T> {
    type Output = AngularInterval<T>;

    fn add(self, other: AngularInterval<T>) -> AngularInterval<T> {
        AngularInterval::new(
            self.lower() + other.lower(),
            self.upper() + other.upper(),
        )
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for AngularInterval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower(), self.upper())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PI: f64 = <f64 as Scalar>::PI;
    const TAU: f64 = <f64 as Scalar>::TAU;

    #[test]
    fn test_non_wrapping_construction() {
        let iv = AngularInterval::new(0.5, 1.0);
        assert_eq!(iv.lower_raw(), 0.5);
        assert_eq!(iv.upper(), 1.0);
        assert!(!iv.is_wrapping());
        assert_eq!(iv.lower(), 0.5);
    }

    #[test]
    fn test_full_circle_collapse() {
        let iv = AngularInterval::new(0.0, 7.0);
        assert_eq!(iv.lower_raw(), -PI);
        assert_eq!(iv.upper(), PI);
        assert!(!iv.is_wrapping());
        let iv = AngularInterval::new(3.0, -4.0);
        assert_eq!((iv.lower_raw(), iv.upper()), (-PI, PI));
    }

    #[test]
    fn test_wrapping_construction() {
        // Raw lower > upper with a span under one turn: the arc crosses the
        // seam and is stored with lo > hi.
        let iv = AngularInterval::new(2.5, -2.5);
        assert!(iv.is_wrapping());
        assert_eq!(iv.lower_raw(), 2.5);
        assert_eq!(iv.upper(), -2.5);
        assert_eq!(iv.lower(), 2.5 - TAU);
    }

    #[test]
    fn test_seam_crossing_input() {
        // An ascending input that runs past PI wraps the same way.
        let iv = AngularInterval::new(3.0, 3.5);
        assert!(iv.is_wrapping());
        assert_eq!(iv.lower_raw(), 3.0);
        assert_eq!(iv.upper(), 3.5 - TAU);
    }

    #[test]
    fn test_multi_winding_reduction() {
        let a = AngularInterval::new(0.5, 1.0);
        let b = AngularInterval::new(0.5 + 2.0 * TAU, 1.0 + 2.0 * TAU);
        let c = AngularInterval::new(0.5 - TAU, 1.0 - TAU);
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_normalization_idempotence() {
        for &(l, u) in &[(7.0, 8.5), (2.5, -2.5), (-0.25, 0.25), (3.0, 3.5), (-PI, PI)] {
            let iv: AngularInterval<f64> = AngularInterval::new(l, u);
            let redo = AngularInterval::new(iv.lower_raw(), iv.upper());
            assert_eq!(iv.lower_raw(), redo.lower_raw());
            assert_eq!(iv.upper(), redo.upper());
        }
    }

    #[test]
    fn test_quantization() {
        let grid = 2.0 * <f64 as Scalar>::EPS;
        let iv = AngularInterval::new(0.1, 0.2);
        assert_eq!(iv.lower_raw() % grid, 0.0);
        assert_eq!(iv.upper() % grid, 0.0);
        assert!((iv.lower_raw() - 0.1).abs() < grid);
        assert!((iv.upper() - 0.2).abs() < grid);
    }

    #[test]
    fn test_contains_wraparound() {
        let iv = AngularInterval::new(2.5, -2.5);
        assert!(iv.contains(3.0));
        assert!(iv.contains(-3.0));
        assert!(iv.contains(PI));
        assert!(!iv.contains(0.0));
        assert!(!iv.contains(2.0));
        assert!(!iv.contains(-2.0));
        // Bounds are included.
        assert!(iv.contains(2.5));
        assert!(iv.contains(-2.5));
    }

    #[test]
    fn test_contains_periodicity() {
        let iv = AngularInterval::new(0.5, 1.0);
        for k in -3i32..=3 {
            let shift = k as f64 * TAU;
            assert!(iv.contains(0.75 + shift));
            assert!(iv.contains(0.5 + shift));
            assert!(!iv.contains(1.5 + shift));
            assert!(!iv.contains(0.25 + shift));
        }
    }

    #[test]
    fn test_contains_full_circle() {
        let iv = AngularInterval::new(-PI, PI);
        for &a in &[0.0, 1.0, -1.0, PI, -PI, 100.0, -100.0] {
            assert!(iv.contains(a));
        }
    }

    #[test]
    fn test_point_interval() {
        let iv = AngularInterval::new(1.0, 1.0);
        assert!(iv.contains(1.0));
        assert!(iv.contains(1.0 + TAU));
        assert!(!iv.contains(1.0 + 0.001));
    }

    #[test]
    fn test_offset_across_seam() {
        let iv = AngularInterval::new(0.0, 1.0).offset(PI);
        assert!(iv.is_wrapping());
        assert!(iv.contains(-3.0));
        assert!(iv.contains(PI));
        assert!(iv.contains(1.0 - PI));
        assert!(!iv.contains(0.0));
    }

    #[test]
    fn test_interval_addition() {
        let sum = AngularInterval::new(0.25, 0.5) + AngularInterval::new(0.25, 0.75);
        assert_eq!(sum, AngularInterval::new(0.5, 1.25));
    }

    #[test]
    fn test_display() {
        let iv: AngularInterval<f64> = AngularInterval::new(0.5, 1.0);
        assert_eq!(format!("{}", iv), "[0.5, 1]");
    }

    #[test]
    fn test_f32_instantiation() {
        let iv: AngularInterval<f32> = AngularInterval::new(2.5, -2.5);
        assert!(iv.is_wrapping());
        assert!(iv.contains(3.0));
        assert!(!iv.contains(0.0));
        let redo = AngularInterval::new(iv.lower_raw(), iv.upper());
        assert_eq!(iv, redo);
    }
}
