use crate::mbr::{Mbr, PointND};
use crate::prtree::util::min_dist;
use crate::r#type::IndexableNum;

/// Derives the bounding box of a stored item.
///
/// The tree never looks at `T` itself; everything it knows about an item comes from this trait.
/// Implementations must report `min(axis, item) <= max(axis, item)` for correct results.
pub trait MbrConverter<T> {
    /// The numeric type of the box coordinates.
    type Coord: IndexableNum;

    /// The number of dimensions of every item's box.
    fn dimensions(&self) -> usize;

    /// The minimum of `item` along `axis`.
    fn min(&self, axis: usize, item: &T) -> Self::Coord;

    /// The maximum of `item` along `axis`.
    fn max(&self, axis: usize, item: &T) -> Self::Coord;
}

impl<T, C: MbrConverter<T>> MbrConverter<T> for &C {
    type Coord = C::Coord;

    fn dimensions(&self) -> usize {
        (**self).dimensions()
    }

    fn min(&self, axis: usize, item: &T) -> Self::Coord {
        (**self).min(axis, item)
    }

    fn max(&self, axis: usize, item: &T) -> Self::Coord {
        (**self).max(axis, item)
    }
}

/// A secondary predicate applied to each geometrically matching item.
///
/// Any `Fn(&T) -> bool` closure is a filter.
pub trait NodeFilter<T> {
    fn accept(&self, item: &T) -> bool;
}

/// The filter that accepts everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl<T> NodeFilter<T> for AcceptAll {
    #[inline]
    fn accept(&self, _item: &T) -> bool {
        true
    }
}

impl<T, F: Fn(&T) -> bool> NodeFilter<T> for F {
    #[inline]
    fn accept(&self, item: &T) -> bool {
        self(item)
    }
}

/// Distances used by the nearest neighbour search.
pub trait DistanceCalculator<T, N: IndexableNum> {
    /// The distance between `item` and `point`.
    fn distance(&self, item: &T, point: &PointND<N>) -> f64;

    /// A lower bound of [`distance`][Self::distance] for every item inside `mbr`.
    ///
    /// Overestimating breaks the ordering guarantee of the search. The default is the Euclidean
    /// distance from `point` to the closest point of the box, which is `0` inside the box.
    fn distance_to_mbr(&self, mbr: &impl Mbr<N>, point: &PointND<N>) -> f64
    where
        Self: Sized,
    {
        min_dist(mbr, point)
    }
}
