//! Fixtures shared by the unit tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::mbr::Mbr;
use crate::prtree::MbrConverter;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Points have a degenerate box.
#[derive(Debug)]
pub(crate) struct PointConverter;

impl MbrConverter<Point2D> for PointConverter {
    type Coord = f64;

    fn dimensions(&self) -> usize {
        2
    }

    fn min(&self, axis: usize, item: &Point2D) -> f64 {
        if axis == 0 {
            item.x
        } else {
            item.y
        }
    }

    fn max(&self, axis: usize, item: &Point2D) -> f64 {
        self.min(axis, item)
    }
}

/// Boxes stored as interleaved `[min_0, max_0, min_1, max_1, ...]` values.
#[derive(Debug)]
pub(crate) struct BoxConverter(pub usize);

impl MbrConverter<Vec<f64>> for BoxConverter {
    type Coord = f64;

    fn dimensions(&self) -> usize {
        self.0
    }

    fn min(&self, axis: usize, item: &Vec<f64>) -> f64 {
        item[axis * 2]
    }

    fn max(&self, axis: usize, item: &Vec<f64>) -> f64 {
        item[axis * 2 + 1]
    }
}

/// `n` random boxes with minimums in `[0, 100)` and extents in `[0, 10)`.
pub(crate) fn random_boxes(dimensions: usize, n: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let mut values = Vec::with_capacity(dimensions * 2);
            for _ in 0..dimensions {
                let min = rng.gen_range(0. ..100.);
                values.push(min);
                values.push(min + rng.gen_range(0. ..10.));
            }
            values
        })
        .collect()
}

/// Every item of `data` that intersects `query` and passes `filter`, found by a linear scan.
pub(crate) fn brute_force_find<T: Clone, C: MbrConverter<T, Coord = f64>>(
    data: &[T],
    converter: &C,
    query: &impl Mbr<f64>,
    filter: impl Fn(&T) -> bool,
) -> Vec<T> {
    data.iter()
        .filter(|item| query.intersects_item(*item, converter) && filter(item))
        .cloned()
        .collect()
}

pub(crate) fn points_2d() -> Vec<Point2D> {
    let coords = [
        (54, 1), (97, 21), (65, 35), (33, 54), (95, 39), (54, 3), (53, 54), (84, 72), (33, 34),
        (43, 15), (52, 83), (81, 23), (1, 61), (38, 74), (11, 91), (24, 56), (90, 31), (25, 57),
        (46, 61), (29, 69), (49, 60), (4, 98), (71, 15), (60, 25), (38, 84), (52, 38), (94, 51),
        (13, 25), (77, 73), (88, 87), (6, 27), (58, 22), (53, 28), (27, 91), (96, 98), (93, 14),
        (22, 93), (45, 94), (18, 28), (35, 15), (19, 81), (20, 81), (67, 53), (43, 3), (47, 66),
        (48, 34), (46, 12), (32, 38), (43, 12), (39, 94), (88, 62), (66, 14), (84, 30),
        (72, 81), (41, 92), (26, 4), (6, 76), (47, 21), (57, 70), (71, 82),
    ];
    coords
        .iter()
        .map(|(x, y)| Point2D::new(*x as f64, *y as f64))
        .collect()
}
