//! Utilities shared by the tree and its distance calculators.

use crate::mbr::{Mbr, PointND};
use crate::r#type::IndexableNum;

/// 1D distance from a value to a range, widened to `f64` before subtracting.
#[inline]
pub(crate) fn axis_dist<N: IndexableNum>(k: N, min: N, max: N) -> f64 {
    let (k, min, max) = (k.as_f64(), min.as_f64(), max.as_f64());
    if k < min {
        min - k
    } else if k <= max {
        0.
    } else {
        k - max
    }
}

/// Euclidean distance from `point` to the closest point of `mbr`, or `0` if the point is inside.
///
/// Axes missing from either the box or the point are ignored.
pub fn min_dist<N: IndexableNum>(mbr: &impl Mbr<N>, point: &PointND<N>) -> f64 {
    let dimensions = mbr.dimensions().min(point.dimensions());
    (0..dimensions)
        .map(|axis| {
            let d = axis_dist(point.coord(axis), mbr.min(axis), mbr.max(axis));
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// `ceil(n / d)` for non-negative integers.
#[inline]
pub(crate) fn div_ceil(n: usize, d: usize) -> usize {
    (n + d - 1) / d
}
