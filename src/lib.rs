//! Angular interval sets on the circle.
//!
//! The crate represents sets of angular ranges — reachable joint sweeps,
//! visibility cones, forbidden zones — with correct handling of wraparound
//! at the ±PI seam. A single wrapped arc is an [`AngularInterval`]; a
//! possibly disjoint subset of the circle is an [`AngularIntervalSet`],
//! which supports union, intersection and difference through an event
//! sweep over interval boundaries.
//!
//! Everything is generic over the floating-point width through [`Scalar`],
//! instantiated for `f32` and `f64`. All operations are total: inputs of
//! any magnitude or winding count are normalized, arcs spanning a full
//! turn collapse to the whole circle, and empty operands short-circuit
//! rather than fail.
//!
//! ```
//! use arcset::{AngularInterval, AngularIntervalSet};
//!
//! // An arc crossing the seam: from 2.5 rad counter-clockwise to -2.5 rad.
//! let seam = AngularIntervalSet::from(AngularInterval::new(2.5f64, -2.5));
//! assert!(seam.contains(3.0));
//! assert!(!seam.contains(0.0));
//!
//! let reachable = AngularIntervalSet::from(AngularInterval::new(0.0, 1.0));
//! assert!(reachable.intersection(&seam).is_empty());
//! ```

pub mod interval;
pub mod interval_set;
pub mod kine;
pub mod scalar;

pub use crate::interval::AngularInterval;
pub use crate::interval_set::AngularIntervalSet;
pub use crate::kine::{dh_transform, DhConvention};
pub use crate::scalar::Scalar;
