use crate::interval::AngularInterval;
use crate::scalar::Scalar;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

/// AngularIntervalSet represents a subset of the circle as a collection of
/// disjoint [`AngularInterval`] arcs: empty, a single arc, several disjoint
/// arcs, or the full circle (one maximal interval `[-PI, PI]`).
///
/// All algebra runs over a breakpoint decomposition of the circle: each set
/// is lowered to a sorted sequence of `(angle, inside)` boundary events, the
/// event streams are swept (and for binary operators merged under a boolean
/// combinator), and the result is rebuilt as a canonical disjoint set. The
/// member order after any operation is an internal detail; callers must not
/// rely on input order surviving.
///
/// Every operator returns a new set and leaves its operands untouched; the
/// compound-assignment forms replace the receiver wholesale.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AngularIntervalSet<T: Scalar> {
    intervals: Vec<AngularInterval<T>>,
}

impl<T: Scalar> AngularIntervalSet<T> {
    /// Returns the empty set.
    pub fn new() -> Self {
        AngularIntervalSet {
            intervals: Vec::new(),
        }
    }

    /// Returns the empty set (no angle is a member).
    pub fn empty() -> Self {
        Self::new()
    }

    /// Returns the universal set: the full circle `[-PI, PI]`.
    pub fn full() -> Self {
        AngularIntervalSet {
            intervals: vec![AngularInterval::new(-T::PI, T::PI)],
        }
    }

    /// Reports whether no angle is a member.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Returns the number of member intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Reports whether the given angle, at any winding count, is a member.
    pub fn contains(&self, angle: T) -> bool {
        self.intervals.iter().any(|iv| iv.contains(angle))
    }

    /// Iterates over the member intervals.
    pub fn iter(&self) -> std::slice::Iter<'_, AngularInterval<T>> {
        self.intervals.iter()
    }

    /// Removes every member interval.
    pub fn clear(&mut self) {
        self.intervals.clear();
    }

    /// Rewrites the set in canonical form: member intervals pairwise
    /// disjoint, overlaps and mergeable seam neighbors fused, a covered
    /// circle collapsed to `[-PI, PI]`.
    pub fn simplify(&mut self) {
        if !self.is_empty() {
            *self = Self::from_breakpoints(&self.to_breakpoints());
        }
    }

    /// Returns the union of the two sets.
    pub fn union(&self, other: &Self) -> Self {
        let mut res = self.clone();
        res.intervals.extend_from_slice(&other.intervals);
        res.simplify();
        res
    }

    /// Returns the intersection of the two sets. Either operand being empty
    /// short-circuits to the empty set.
    pub fn intersection(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::empty();
        }
        Self::merge(self, other, |a, b| a && b)
    }

    /// Returns the set difference `self \ other`. An empty subtrahend
    /// leaves `self` unchanged.
    pub fn difference(&self, other: &Self) -> Self {
        if self.is_empty() {
            return Self::empty();
        }
        if other.is_empty() {
            return self.clone();
        }
        Self::merge(self, other, |a, b| a && !b)
    }

    /// Lowers the set to its sorted breakpoint sequence: `(angle, inside)`
    /// pairs where `inside` is the membership state of the arc ending at
    /// that angle.
    ///
    /// Each interval contributes its raw lower bound as a closing event and
    /// its upper bound as an opening event — traversed in ascending angle, a
    /// wrapped interval (stored `lo > hi`) is inside at the sweep start, so
    /// every wrapped member seeds one unit of "already inside" state.
    fn to_breakpoints(&self) -> Vec<(T, bool)> {
        let mut events: Vec<(T, i32)> = Vec::with_capacity(2 * self.intervals.len());
        let mut n = 0;
        for iv in &self.intervals {
            events.push((iv.lower_raw(), -1));
            events.push((iv.upper(), 1));
            if iv.is_wrapping() {
                n += 1;
            }
        }
        // Lexicographic order: by angle, closing events before opening ones
        // at equal angles.
        events.sort_by(|a, b| match a.0.partial_cmp(&b.0) {
            Some(Ordering::Equal) | None => a.1.cmp(&b.1),
            Some(ord) => ord,
        });

        let mut pts = Vec::with_capacity(events.len());
        for (angle, tag) in events {
            pts.push((angle, n > 0));
            n -= tag;
        }
        pts
    }

    /// Rebuilds a canonical set from a sorted breakpoint sequence.
    fn from_breakpoints(pts: &[(T, bool)]) -> Self {
        if pts.iter().all(|p| !p.1) {
            return Self::empty();
        }
        if pts.iter().all(|p| p.1) {
            return Self::full();
        }

        // Seed the open bound with the last false->true transition so the
        // earliest close can pair with an opening that wraps past the seam.
        let mut lower = T::zero();
        for i in 0..pts.len() {
            let cur = pts[i];
            let next = pts[(i + 1) % pts.len()];
            if !cur.1 && next.1 {
                lower = cur.0;
            }
        }
        let mut intervals = Vec::new();
        for i in 0..pts.len() {
            let cur = pts[i];
            let next = pts[(i + 1) % pts.len()];
            if !cur.1 && next.1 {
                lower = cur.0;
            }
            if cur.1 && !next.1 {
                intervals.push(AngularInterval::new(lower, cur.0));
            }
        }
        AngularIntervalSet { intervals }
    }

    /// Sweep-merges the breakpoint sequences of two sets under a boolean
    /// combinator and rebuilds the result. Each cursor is cyclic: once a
    /// sequence is exhausted its state wraps to the front, which carries
    /// membership across the seam.
    fn merge<F>(set1: &Self, set2: &Self, op: F) -> Self
    where
        F: Fn(bool, bool) -> bool,
    {
        let pts1 = set1.to_breakpoints();
        let pts2 = set2.to_breakpoints();
        let mut res: Vec<(T, bool)> = Vec::with_capacity(pts1.len() + pts2.len());

        if pts1.is_empty() || pts2.is_empty() {
            // Degenerate operand: pass the surviving breakpoints through.
            res.extend_from_slice(&pts1);
            res.extend_from_slice(&pts2);
        } else {
            let mut i = 0;
            let mut j = 0;
            for _ in 0..pts1.len() + pts2.len() {
                let flag = op(pts1[i % pts1.len()].1, pts2[j % pts2.len()].1);
                if i >= pts1.len() {
                    res.push((pts2[j].0, flag));
                    j += 1;
                } else if j >= pts2.len() {
                    res.push((pts1[i].0, flag));
                    i += 1;
                } else if pts1[i].0 > pts2[j].0 {
                    res.push((pts2[j].0, flag));
                    j += 1;
                } else {
                    res.push((pts1[i].0, flag));
                    i += 1;
                }
            }
        }
        Self::from_breakpoints(&res)
    }
}

impl<T: Scalar> From<AngularInterval<T>> for AngularIntervalSet<T> {
    fn from(interval: AngularInterval<T>) -> Self {
        AngularIntervalSet {
            intervals: vec![interval],
        }
    }
}

impl<'a, T: Scalar> IntoIterator for &'a AngularIntervalSet<T> {
    type Item = &'a AngularInterval<T>;
    type IntoIter = std::slice::Iter<'a, AngularInterval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl<T: Scalar> Add for AngularIntervalSet<T> {
    type Output = AngularIntervalSet<T>;

    fn add(self, rhs: AngularIntervalSet<T>) -> AngularIntervalSet<T> {
        self.union(&rhs)
    }
}

impl<'a, 'b, T: Scalar> Add<&'b AngularIntervalSet<T>> for &'a AngularIntervalSet<T> {
    type Output = AngularIntervalSet<T>;

    fn add(self, rhs: &'b AngularIntervalSet<T>) -> AngularIntervalSet<T> {
        self.union(rhs)
    }
}

impl<T: Scalar> AddAssign for AngularIntervalSet<T> {
    fn add_assign(&mut self, rhs: AngularIntervalSet<T>) {
        *self = self.union(&rhs);
    }
}

impl<T: Scalar> Mul for AngularIntervalSet<T> {
    type Output = AngularIntervalSet<T>;

    fn mul(self, rhs: AngularIntervalSet<T>) -> AngularIntervalSet<T> {
        self.intersection(&rhs)
    }
}

impl<'a, 'b, T: Scalar> Mul<&'b AngularIntervalSet<T>> for &'a AngularIntervalSet<T> {
    type Output = AngularIntervalSet<T>;

    fn mul(self, rhs: &'b AngularIntervalSet<T>) -> AngularIntervalSet<T> {
        self.intersection(rhs)
    }
}

impl<T: Scalar> MulAssign for AngularIntervalSet<T> {
    fn mul_assign(&mut self, rhs: AngularIntervalSet<T>) {
        *self = self.intersection(&rhs);
    }
}

impl<T: Scalar> Sub for AngularIntervalSet<T> {
    type Output = AngularIntervalSet<T>;

    fn sub(self, rhs: AngularIntervalSet<T>) -> AngularIntervalSet<T> {
        self.difference(&rhs)
    }
}

impl<'a, 'b, T: Scalar> Sub<&'b AngularIntervalSet<T>> for &'a AngularIntervalSet<T> {
    type Output = AngularIntervalSet<T>;

    fn sub(self, rhs: &'b AngularIntervalSet<T>) -> AngularIntervalSet<T> {
        self.difference(rhs)
    }
}

impl<T: Scalar> SubAssign for AngularIntervalSet<T> {
    fn sub_assign(&mut self, rhs: AngularIntervalSet<T>) {
        *self = self.difference(&rhs);
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for AngularIntervalSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, iv) in self.intervals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", iv)?;
        }
        write!(f, "}}")
    }
}
