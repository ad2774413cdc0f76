use crate::scalar::Scalar;
use cgmath::Matrix4;
use num_traits::Float;

/// Which Denavit-Hartenberg parameter convention a transform is built in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DhConvention {
    /// Standard (distal) convention: the frame transform is
    /// Rz(theta) Tz(d) Tx(a) Rx(alpha).
    Classic,
    /// Modified (proximal, Craig) convention: Rx(alpha) Tx(a) Rz(theta) Tz(d).
    Modified,
}

/// Builds the homogeneous transform between consecutive link frames from
/// one row of a DH parameter table. Angles are radians, lengths are in the
/// caller's units.
pub fn dh_transform<T: Scalar>(
    convention: DhConvention,
    alpha: T,
    a: T,
    theta: T,
    d: T,
) -> Matrix4<T> {
    let sa = alpha.sin();
    let ca = alpha.cos();
    let st = theta.sin();
    let ct = theta.cos();
    let zero = T::zero();
    let one = T::one();

    // cgmath matrices are column-major; each Vector4 below is one column
    // of the row-major DH matrix from the textbooks.
    match convention {
        DhConvention::Classic => Matrix4::new(
            ct, st, zero, zero,
            -st * ca, ct * ca, sa, zero,
            st * sa, -ct * sa, ca, zero,
            a * ct, a * st, d, one,
        ),
        DhConvention::Modified => Matrix4::new(
            ct, st * ca, st * sa, zero,
            -st, ct * ca, ct * sa, zero,
            zero, -sa, ca, zero,
            a, -d * sa, d * ca, one,
        ),
    }
}
