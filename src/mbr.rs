//! Axis-aligned minimum bounding rectangles (MBRs) and query points.

use geo_traits::{CoordTrait, RectTrait};

use crate::prtree::MbrConverter;
use crate::r#type::IndexableNum;

/// An N dimensional minimum bounding rectangle.
pub trait Mbr<N: IndexableNum> {
    /// The number of dimensions of this box.
    fn dimensions(&self) -> usize;

    /// The minimum value of this box along `axis`.
    ///
    /// # Panics
    ///
    /// If `axis >= self.dimensions()`.
    fn min(&self, axis: usize) -> N;

    /// The maximum value of this box along `axis`.
    ///
    /// # Panics
    ///
    /// If `axis >= self.dimensions()`.
    fn max(&self, axis: usize) -> N;

    /// Returns `true` if this box intersects `other` on every axis both boxes share.
    ///
    /// Touching boundaries count as an intersection.
    fn intersects(&self, other: &impl Mbr<N>) -> bool
    where
        Self: Sized,
    {
        let dimensions = self.dimensions().min(other.dimensions());
        (0..dimensions).all(|axis| self.min(axis) <= other.max(axis) && other.min(axis) <= self.max(axis))
    }

    /// Returns `true` if the box the converter derives for `item` intersects this box.
    fn intersects_item<T, C>(&self, item: &T, converter: &C) -> bool
    where
        Self: Sized,
        C: MbrConverter<T, Coord = N>,
    {
        (0..converter.dimensions()).all(|axis| {
            self.min(axis) <= converter.max(axis, item) && converter.min(axis, item) <= self.max(axis)
        })
    }
}

/// An N dimensional box stored as interleaved `[min_0, max_0, min_1, max_1, ...]` values.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleMbr<N: IndexableNum> {
    values: Vec<N>,
}

impl<N: IndexableNum> SimpleMbr<N> {
    /// Create a new box from interleaved min/max values, e.g. `[xmin, xmax, ymin, ymax]`.
    ///
    /// # Panics
    ///
    /// If `values` does not hold a min and a max for each axis.
    pub fn new(values: Vec<N>) -> Self {
        assert!(
            values.len() % 2 == 0,
            "Need a min and a max for each axis, got {} values",
            values.len()
        );
        Self { values }
    }

    /// Create a new box from separate minimum and maximum corners.
    ///
    /// # Panics
    ///
    /// If the corners have different dimensions.
    pub fn from_corners(mins: &[N], maxs: &[N]) -> Self {
        assert_eq!(mins.len(), maxs.len(), "Corners must have the same dimensions");
        let values = mins
            .iter()
            .zip(maxs)
            .flat_map(|(min, max)| [*min, *max])
            .collect();
        Self { values }
    }

    /// The box the converter derives for `item`.
    pub fn from_item<T, C: MbrConverter<T, Coord = N>>(item: &T, converter: &C) -> Self {
        let dimensions = converter.dimensions();
        let mut values = Vec::with_capacity(dimensions * 2);
        for axis in 0..dimensions {
            values.push(converter.min(axis, item));
            values.push(converter.max(axis, item));
        }
        Self { values }
    }

    /// Copy any box into a `SimpleMbr`.
    pub fn from_mbr(mbr: &impl Mbr<N>) -> Self {
        let values = (0..mbr.dimensions())
            .flat_map(|axis| [mbr.min(axis), mbr.max(axis)])
            .collect();
        Self { values }
    }

    /// The minimum along `axis`, or `None` if this box has no such axis.
    pub fn get_min(&self, axis: usize) -> Option<N> {
        self.values.get(axis * 2).copied()
    }

    /// The maximum along `axis`, or `None` if this box has no such axis.
    pub fn get_max(&self, axis: usize) -> Option<N> {
        self.values.get(axis * 2 + 1).copied()
    }

    /// Grow this box so that it also covers `other`.
    pub fn expand(&mut self, other: &impl Mbr<N>) {
        for axis in 0..self.dimensions().min(other.dimensions()) {
            let min = other.min(axis);
            if min < self.values[axis * 2] {
                self.values[axis * 2] = min;
            }
            let max = other.max(axis);
            if max > self.values[axis * 2 + 1] {
                self.values[axis * 2 + 1] = max;
            }
        }
    }

    /// A new box covering both this box and `other`.
    pub fn union(&self, other: &impl Mbr<N>) -> Self {
        let mut result = self.clone();
        result.expand(other);
        result
    }

    /// The center of this box along `axis`, widened to `f64`.
    #[inline]
    pub fn centroid(&self, axis: usize) -> f64 {
        (self.min(axis).as_f64() + self.max(axis).as_f64()) / 2.
    }

    /// The interleaved min/max values of this box.
    pub fn values(&self) -> &[N] {
        &self.values
    }
}

impl<N: IndexableNum> Mbr<N> for SimpleMbr<N> {
    fn dimensions(&self) -> usize {
        self.values.len() / 2
    }

    fn min(&self, axis: usize) -> N {
        assert!(
            axis < self.dimensions(),
            "axis {} out of bounds for {} dimensions",
            axis,
            self.dimensions()
        );
        self.values[axis * 2]
    }

    fn max(&self, axis: usize) -> N {
        assert!(
            axis < self.dimensions(),
            "axis {} out of bounds for {} dimensions",
            axis,
            self.dimensions()
        );
        self.values[axis * 2 + 1]
    }
}

impl<N: IndexableNum> From<SimpleMbr2D<N>> for SimpleMbr<N> {
    fn from(value: SimpleMbr2D<N>) -> Self {
        Self::new(vec![value.min_x, value.max_x, value.min_y, value.max_y])
    }
}

/// A two dimensional box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleMbr2D<N: IndexableNum> {
    min_x: N,
    min_y: N,
    max_x: N,
    max_y: N,
}

impl<N: IndexableNum> SimpleMbr2D<N> {
    pub fn new(min_x: N, min_y: N, max_x: N, max_y: N) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Get the minimum `x` value of this box.
    pub fn min_x(&self) -> N {
        self.min_x
    }

    /// Get the minimum `y` value of this box.
    pub fn min_y(&self) -> N {
        self.min_y
    }

    /// Get the maximum `x` value of this box.
    pub fn max_x(&self) -> N {
        self.max_x
    }

    /// Get the maximum `y` value of this box.
    pub fn max_y(&self) -> N {
        self.max_y
    }
}

impl<N: IndexableNum> Mbr<N> for SimpleMbr2D<N> {
    fn dimensions(&self) -> usize {
        2
    }

    fn min(&self, axis: usize) -> N {
        match axis {
            0 => self.min_x,
            1 => self.min_y,
            _ => panic!("axis {} out of bounds for 2 dimensions", axis),
        }
    }

    fn max(&self, axis: usize) -> N {
        match axis {
            0 => self.max_x,
            1 => self.max_y,
            _ => panic!("axis {} out of bounds for 2 dimensions", axis),
        }
    }
}

/// A single coordinate.
///
/// Used in the implementation of RectTrait for SimpleMbr2D.
pub struct Coord<N: IndexableNum> {
    x: N,
    y: N,
}

impl<N: IndexableNum> CoordTrait for Coord<N> {
    type T = N;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("Invalid index of coord"),
        }
    }
}

impl<N: IndexableNum> RectTrait for SimpleMbr2D<N> {
    type T = N;
    type CoordType<'a>
        = Coord<N>
    where
        Self: 'a;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn min(&self) -> Self::CoordType<'_> {
        Coord {
            x: self.min_x,
            y: self.min_y,
        }
    }

    fn max(&self) -> Self::CoordType<'_> {
        Coord {
            x: self.max_x,
            y: self.max_y,
        }
    }
}

/// An N dimensional point, used as the origin of nearest neighbour searches.
#[derive(Debug, Clone, PartialEq)]
pub struct PointND<N: IndexableNum> {
    coords: Vec<N>,
}

impl<N: IndexableNum> PointND<N> {
    pub fn new(coords: Vec<N>) -> Self {
        Self { coords }
    }

    /// A two dimensional point from any [`CoordTrait`].
    pub fn from_coord(coord: &impl CoordTrait<T = N>) -> Self {
        Self::new(vec![coord.x(), coord.y()])
    }

    pub fn dimensions(&self) -> usize {
        self.coords.len()
    }

    /// The coordinate along `axis`.
    ///
    /// # Panics
    ///
    /// If `axis >= self.dimensions()`.
    pub fn coord(&self, axis: usize) -> N {
        self.coords[axis]
    }

    pub fn coords(&self) -> &[N] {
        &self.coords
    }
}
