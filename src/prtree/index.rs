use std::marker::PhantomData;

use geo_traits::CoordTrait;
use num_traits::Bounded;

use crate::error::{PRTreeError, Result};
use crate::mbr::{Mbr, PointND, SimpleMbr, SimpleMbr2D};
use crate::prtree::builder::LeafBuilder;
use crate::prtree::nearest::{DistanceResult, NearestNeighbour};
use crate::prtree::node::Node;
use crate::prtree::r#trait::{AcceptAll, DistanceCalculator, MbrConverter, NodeFilter};
use crate::prtree::traversal::Finder;
use crate::r#type::IndexableNum;

/// The default branch factor used by [`PRTree::new`]
pub const DEFAULT_BRANCH_FACTOR: usize = 16;

/// A Priority R-Tree, a spatial index for N dimensions.
///
/// The tree only supports bulk loading: [`load`][Self::load] is called exactly once with the full
/// data set, after which the tree is immutable and can be queried concurrently through shared
/// references.
///
/// ```
/// use prtree::prtree::{MbrConverter, PRTree};
/// use prtree::SimpleMbr;
///
/// struct Points;
///
/// impl MbrConverter<[f64; 2]> for Points {
///     type Coord = f64;
///
///     fn dimensions(&self) -> usize {
///         2
///     }
///
///     fn min(&self, axis: usize, item: &[f64; 2]) -> f64 {
///         item[axis]
///     }
///
///     fn max(&self, axis: usize, item: &[f64; 2]) -> f64 {
///         item[axis]
///     }
/// }
///
/// let mut tree = PRTree::with_branch_factor(Points, 4).unwrap();
/// tree.load(vec![[0., 0.], [5., 5.], [10., 10.], [1., 1.]]).unwrap();
///
/// let query = SimpleMbr::new(vec![0., 2., 0., 2.]);
/// let mut found: Vec<_> = tree.find(&query).unwrap().collect();
/// found.sort_by(|a, b| a[0].total_cmp(&b[0]));
/// assert_eq!(found, vec![&[0., 0.], &[1., 1.]]);
/// ```
#[derive(Debug, Clone)]
pub struct PRTree<T, C: MbrConverter<T>> {
    converter: C,
    branch_factor: usize,
    root: Option<Node<T, C::Coord>>,
    loaded: bool,
    num_leaves: usize,
    height: usize,
    phantom: PhantomData<T>,
}

impl<T, C: MbrConverter<T>> PRTree<T, C> {
    /// Create a new, empty tree with the default branch factor.
    pub fn new(converter: C) -> Result<Self> {
        Self::with_branch_factor(converter, DEFAULT_BRANCH_FACTOR)
    }

    /// Create a new, empty tree where every node holds at most `branch_factor` entries.
    pub fn with_branch_factor(converter: C, branch_factor: usize) -> Result<Self> {
        if branch_factor < 2 {
            return Err(PRTreeError::InvalidBranchFactor(branch_factor));
        }
        let dimensions = converter.dimensions();
        if dimensions == 0 {
            return Err(PRTreeError::InvalidDimensions(dimensions));
        }
        Ok(Self {
            converter,
            branch_factor,
            root: None,
            loaded: false,
            num_leaves: 0,
            height: 0,
            phantom: PhantomData,
        })
    }

    /// Bulk load data into this tree.
    ///
    /// Leaf nodes holding up to `branch_factor` items are built first. Those nodes are then used
    /// as the entries of the next level, until all nodes fit into the root.
    ///
    /// Fails with [`PRTreeError::AlreadyLoaded`] if this tree was loaded before, leaving it
    /// untouched.
    pub fn load(&mut self, data: impl IntoIterator<Item = T>) -> Result<()> {
        if self.loaded {
            return Err(PRTreeError::AlreadyLoaded);
        }

        let data: Vec<T> = data.into_iter().collect();
        let num_leaves = data.len();
        let builder = LeafBuilder::new(self.converter.dimensions(), self.branch_factor);
        let converter = &self.converter;

        let mut nodes = builder.build_nodes(
            data,
            |item, axis| (converter.min(axis, item).as_f64() + converter.max(axis, item).as_f64()) / 2.,
            |entries| Node::leaf(entries, converter),
        );
        let mut height = 1;
        while nodes.len() > self.branch_factor {
            height += 1;
            log::trace!("building level {} from {} nodes", height, nodes.len());
            nodes = builder.build_nodes(
                nodes,
                |node, axis| node.mbr().centroid(axis),
                Node::internal,
            );
        }

        let root = match nodes.len() {
            0 => {
                height = 0;
                None
            }
            1 => nodes.pop(),
            _ => {
                height += 1;
                Some(Node::internal(nodes))
            }
        };

        log::debug!(
            "loaded {} items with branch factor {}, height {}",
            num_leaves,
            self.branch_factor,
            height
        );

        self.root = root;
        self.num_leaves = num_leaves;
        self.height = height;
        self.loaded = true;
        Ok(())
    }

    /// The converter used to derive item boxes.
    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// The maximum number of entries in each node.
    pub fn branch_factor(&self) -> usize {
        self.branch_factor
    }

    /// The number of dimensions of this tree, as reported by its converter.
    pub fn dimensions(&self) -> usize {
        self.converter.dimensions()
    }

    /// Returns `true` once [`load`][Self::load] has succeeded, even with no data.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The total number of items in this tree.
    pub fn num_leaves(&self) -> usize {
        self.num_leaves
    }

    /// Returns `true` if this tree holds no items.
    pub fn is_empty(&self) -> bool {
        self.num_leaves == 0
    }

    /// The number of node levels of this tree, `0` if it is empty.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The root node, if this tree holds any items.
    pub fn root(&self) -> Option<&Node<T, C::Coord>> {
        self.root.as_ref()
    }

    /// The N dimensional bounding box of all data in this tree.
    pub fn mbr(&self) -> Option<SimpleMbr<C::Coord>> {
        self.root.as_ref().map(|root| root.mbr().clone())
    }

    /// The first two dimensions of [`mbr`][Self::mbr].
    ///
    /// `None` if the tree is empty or has a single dimension.
    pub fn mbr_2d(&self) -> Option<SimpleMbr2D<C::Coord>> {
        let mbr = self.root.as_ref()?.mbr();
        if mbr.dimensions() < 2 {
            return None;
        }
        Some(SimpleMbr2D::new(mbr.min(0), mbr.min(1), mbr.max(0), mbr.max(1)))
    }

    /// Find all items that intersect `query`.
    ///
    /// The search is lazy: nodes are only visited as the returned iterator is advanced. Each
    /// call starts a fresh search.
    pub fn find<Q: Mbr<C::Coord>>(&self, query: &Q) -> Result<Finder<'_, T, C, AcceptAll>> {
        self.find_with_filter(query, AcceptAll)
    }

    /// Find all items that intersect `query` and that `filter` accepts.
    pub fn find_with_filter<Q, F>(&self, query: &Q, filter: F) -> Result<Finder<'_, T, C, F>>
    where
        Q: Mbr<C::Coord>,
        F: NodeFilter<T>,
    {
        self.validate_query(query)?;
        Ok(Finder::new(
            &self.converter,
            self.root.as_ref(),
            SimpleMbr::from_mbr(query),
            filter,
        ))
    }

    /// Find all items that intersect `query`, adding them to `results`.
    pub fn find_into<'a, Q: Mbr<C::Coord>>(
        &'a self,
        query: &Q,
        results: &mut impl Extend<&'a T>,
    ) -> Result<()> {
        self.find_into_with_filter(query, &AcceptAll, results)
    }

    /// Find all items that intersect `query` and that `filter` accepts, adding them to `results`.
    pub fn find_into_with_filter<'a, Q, F>(
        &'a self,
        query: &Q,
        filter: &F,
        results: &mut impl Extend<&'a T>,
    ) -> Result<()>
    where
        Q: Mbr<C::Coord>,
        F: NodeFilter<T>,
    {
        self.validate_query(query)?;
        if let Some(root) = &self.root {
            if query.intersects(root.mbr()) {
                root.find(query, &self.converter, filter, results);
            }
        }
        Ok(())
    }

    /// Find all items that intersect the given rectangle.
    ///
    /// Only the first two dimensions are constrained; any further dimensions of this tree are
    /// searched over their full range.
    pub fn find_2d(
        &self,
        min_x: C::Coord,
        min_y: C::Coord,
        max_x: C::Coord,
        max_y: C::Coord,
    ) -> Result<Finder<'_, T, C, AcceptAll>> {
        self.find_2d_with_filter(min_x, min_y, max_x, max_y, AcceptAll)
    }

    /// Find all items that intersect the given rectangle and that `filter` accepts.
    ///
    /// See [`find_2d`][Self::find_2d].
    pub fn find_2d_with_filter<F: NodeFilter<T>>(
        &self,
        min_x: C::Coord,
        min_y: C::Coord,
        max_x: C::Coord,
        max_y: C::Coord,
        filter: F,
    ) -> Result<Finder<'_, T, C, F>> {
        let query = self.query_2d(min_x, min_y, max_x, max_y);
        self.find_with_filter(&query, filter)
    }

    /// Find all items that intersect the given rectangle, adding them to `results`.
    ///
    /// See [`find_2d`][Self::find_2d].
    pub fn find_2d_into<'a>(
        &'a self,
        min_x: C::Coord,
        min_y: C::Coord,
        max_x: C::Coord,
        max_y: C::Coord,
        results: &mut impl Extend<&'a T>,
    ) -> Result<()> {
        let query = self.query_2d(min_x, min_y, max_x, max_y);
        self.find_into(&query, results)
    }

    /// Find up to `max_hits` items closest to `point`, nearest first.
    ///
    /// Returns an empty list if this tree is empty. Items rejected by `filter` are skipped.
    pub fn nearest_neighbour<D, F>(
        &self,
        dc: &D,
        filter: &F,
        max_hits: usize,
        point: &PointND<C::Coord>,
    ) -> Result<Vec<DistanceResult<'_, T>>>
    where
        D: DistanceCalculator<T, C::Coord>,
        F: NodeFilter<T>,
    {
        let root = match &self.root {
            Some(root) => root,
            None => return Ok(vec![]),
        };
        let dimensions = self.dimensions();
        if point.dimensions() < dimensions {
            return Err(PRTreeError::DimensionMismatch {
                expected: dimensions,
                found: point.dimensions(),
            });
        }
        Ok(NearestNeighbour::new(root, dc, filter, max_hits, point).find())
    }

    /// Find up to `max_hits` items closest to the given coordinate, nearest first.
    ///
    /// Only valid for two dimensional trees.
    pub fn nearest_neighbour_coord<D, F>(
        &self,
        dc: &D,
        filter: &F,
        max_hits: usize,
        coord: &impl CoordTrait<T = C::Coord>,
    ) -> Result<Vec<DistanceResult<'_, T>>>
    where
        D: DistanceCalculator<T, C::Coord>,
        F: NodeFilter<T>,
    {
        self.nearest_neighbour(dc, filter, max_hits, &PointND::from_coord(coord))
    }

    fn validate_query<Q: Mbr<C::Coord>>(&self, query: &Q) -> Result<()> {
        let dimensions = self.dimensions();
        if query.dimensions() < dimensions {
            return Err(PRTreeError::DimensionMismatch {
                expected: dimensions,
                found: query.dimensions(),
            });
        }
        for axis in 0..dimensions {
            let min = query.min(axis);
            let max = query.max(axis);
            if max < min {
                return Err(PRTreeError::InvalidQuery {
                    axis,
                    min: min.as_f64(),
                    max: max.as_f64(),
                });
            }
        }
        Ok(())
    }

    fn query_2d(
        &self,
        min_x: C::Coord,
        min_y: C::Coord,
        max_x: C::Coord,
        max_y: C::Coord,
    ) -> SimpleMbr<C::Coord> {
        let mut values = vec![min_x, max_x, min_y, max_y];
        for _ in 2..self.dimensions() {
            values.push(<C::Coord as Bounded>::min_value());
            values.push(<C::Coord as Bounded>::max_value());
        }
        SimpleMbr::new(values)
    }
}

#[cfg(test)]
mod test {
    use rstar::primitives::{GeomWithData, Rectangle};
    use rstar::AABB;

    use super::*;
    use crate::prtree::EuclideanDistance;
    use crate::test::{brute_force_find, random_boxes, BoxConverter, Point2D, PointConverter};

    fn sorted(mut boxes: Vec<Vec<f64>>) -> Vec<Vec<f64>> {
        boxes.sort_by(|a, b| a.partial_cmp(b).unwrap());
        boxes
    }

    fn scenario_tree() -> PRTree<Point2D, PointConverter> {
        let mut tree = PRTree::with_branch_factor(PointConverter, 2).unwrap();
        tree.load(vec![
            Point2D::new(0., 0.),
            Point2D::new(5., 5.),
            Point2D::new(10., 10.),
            Point2D::new(1., 1.),
        ])
        .unwrap();
        tree
    }

    #[test]
    fn scenario_find() {
        let tree = scenario_tree();
        let query = SimpleMbr::new(vec![0., 2., 0., 2.]);
        let mut found: Vec<Point2D> = tree.find(&query).unwrap().copied().collect();
        found.sort_by(|a, b| a.x.total_cmp(&b.x));
        assert_eq!(found, vec![Point2D::new(0., 0.), Point2D::new(1., 1.)]);
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.num_leaves(), 4);
    }

    #[test]
    fn scenario_nearest_neighbour() {
        let tree = scenario_tree();
        let dc = EuclideanDistance::new(PointConverter);
        let origin = PointND::new(vec![0., 0.]);

        let one = tree.nearest_neighbour(&dc, &AcceptAll, 1, &origin).unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(*one[0].item(), Point2D::new(0., 0.));
        assert_eq!(one[0].distance(), 0.);

        let two = tree.nearest_neighbour(&dc, &AcceptAll, 2, &origin).unwrap();
        let items: Vec<Point2D> = two.iter().map(|r| *r.item()).collect();
        assert_eq!(items, vec![Point2D::new(0., 0.), Point2D::new(1., 1.)]);
    }

    #[test]
    fn load_only_once() {
        let mut tree = scenario_tree();
        let query = SimpleMbr::new(vec![-100., 100., -100., 100.]);
        let before = tree.find(&query).unwrap().count();

        let err = tree.load(vec![Point2D::new(50., 50.)]).unwrap_err();
        assert_eq!(err, PRTreeError::AlreadyLoaded);
        assert_eq!(tree.find(&query).unwrap().count(), before);
        assert_eq!(tree.num_leaves(), 4);
    }

    #[test]
    fn second_load_fails_after_empty_load() {
        let mut tree = PRTree::with_branch_factor(PointConverter, 3).unwrap();
        tree.load(vec![]).unwrap();
        assert!(tree.is_loaded());
        assert_eq!(
            tree.load(vec![Point2D::new(1., 1.)]),
            Err(PRTreeError::AlreadyLoaded)
        );
        assert!(tree.is_empty());
    }

    #[test]
    fn empty_tree() {
        let mut tree = PRTree::new(PointConverter).unwrap();
        tree.load(Vec::<Point2D>::new()).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert!(tree.mbr().is_none());
        assert!(tree.mbr_2d().is_none());

        let query = SimpleMbr::new(vec![0., 1., 0., 1.]);
        assert_eq!(tree.find(&query).unwrap().count(), 0);
        let mut eager: Vec<&Point2D> = vec![];
        tree.find_into(&query, &mut eager).unwrap();
        assert!(eager.is_empty());

        let dc = EuclideanDistance::new(PointConverter);
        let nn = tree
            .nearest_neighbour(&dc, &AcceptAll, 3, &PointND::new(vec![0., 0.]))
            .unwrap();
        assert!(nn.is_empty());
    }

    #[test]
    fn invalid_construction() {
        assert_eq!(
            PRTree::<Point2D, _>::with_branch_factor(PointConverter, 1).unwrap_err(),
            PRTreeError::InvalidBranchFactor(1)
        );
        assert_eq!(
            PRTree::<Point2D, _>::with_branch_factor(PointConverter, 0).unwrap_err(),
            PRTreeError::InvalidBranchFactor(0)
        );
        assert_eq!(
            PRTree::<Vec<f64>, _>::new(BoxConverter(0)).unwrap_err(),
            PRTreeError::InvalidDimensions(0)
        );
    }

    #[test]
    fn inverted_query_fails_on_any_axis() {
        let mut tree = PRTree::with_branch_factor(BoxConverter(3), 4).unwrap();
        tree.load(random_boxes(3, 50, 1)).unwrap();
        for axis in 0..3 {
            let mut values = vec![0., 1., 0., 1., 0., 1.];
            values.swap(axis * 2, axis * 2 + 1);
            let query = SimpleMbr::new(values);
            assert_eq!(
                tree.find(&query).unwrap_err(),
                PRTreeError::InvalidQuery {
                    axis,
                    min: 1.,
                    max: 0.
                }
            );
            let mut results: Vec<&Vec<f64>> = vec![];
            assert!(tree.find_into(&query, &mut results).is_err());
        }
    }

    #[test]
    fn query_missing_dimensions() {
        let mut tree = PRTree::with_branch_factor(BoxConverter(3), 4).unwrap();
        tree.load(random_boxes(3, 10, 2)).unwrap();
        let query = SimpleMbr::new(vec![0., 1., 0., 1.]);
        assert_eq!(
            tree.find(&query).unwrap_err(),
            PRTreeError::DimensionMismatch {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn find_matches_brute_force() {
        for (num_items, branch_factor, seed) in [(1, 2, 3), (7, 2, 4), (200, 4, 5), (1000, 16, 6)] {
            let data = random_boxes(3, num_items, seed);
            let mut tree = PRTree::with_branch_factor(BoxConverter(3), branch_factor).unwrap();
            tree.load(data.clone()).unwrap();

            for query in random_boxes(3, 30, seed + 100) {
                let query = SimpleMbr::new(query);
                let expected = sorted(brute_force_find(&data, &BoxConverter(3), &query, |_| true));

                let lazy = sorted(tree.find(&query).unwrap().cloned().collect());
                let mut eager: Vec<&Vec<f64>> = vec![];
                tree.find_into(&query, &mut eager).unwrap();
                let eager = sorted(eager.into_iter().cloned().collect());

                assert_eq!(lazy, expected);
                assert_eq!(eager, expected);
            }
        }
    }

    #[test]
    fn find_with_filter_matches_brute_force() {
        let data = random_boxes(2, 500, 7);
        let mut tree = PRTree::with_branch_factor(BoxConverter(2), 8).unwrap();
        tree.load(data.clone()).unwrap();
        let filter = |b: &Vec<f64>| b[0] > 25.;

        for query in random_boxes(2, 20, 8) {
            let query = SimpleMbr::new(query);
            let expected = sorted(brute_force_find(&data, &BoxConverter(2), &query, filter));
            let found = sorted(
                tree.find_with_filter(&query, filter)
                    .unwrap()
                    .cloned()
                    .collect(),
            );
            let mut eager = vec![];
            tree.find_into_with_filter(&query, &filter, &mut eager)
                .unwrap();

            assert_eq!(found, expected);
            assert_eq!(eager.len(), expected.len());
        }
    }

    #[test]
    fn find_is_restartable() {
        let tree = scenario_tree();
        let query = SimpleMbr::new(vec![0., 10., 0., 10.]);
        assert_eq!(tree.find(&query).unwrap().count(), 4);
        assert_eq!(tree.find(&query).unwrap().count(), 4);
    }

    #[test]
    fn find_2d_leaves_other_dimensions_open() {
        let data = random_boxes(3, 300, 9);
        let mut tree = PRTree::with_branch_factor(BoxConverter(3), 6).unwrap();
        tree.load(data.clone()).unwrap();

        let query = SimpleMbr::new(vec![10., 60., 20., 40., f64::MIN, f64::MAX]);
        let expected = brute_force_find(&data, &BoxConverter(3), &query, |_| true);
        assert_eq!(
            tree.find_2d(10., 20., 60., 40.).unwrap().count(),
            expected.len()
        );

        let mut eager = vec![];
        tree.find_2d_into(10., 20., 60., 40., &mut eager).unwrap();
        assert_eq!(eager.len(), expected.len());

        let filtered = tree
            .find_2d_with_filter(10., 20., 60., 40., |b: &Vec<f64>| b[4] < 50.)
            .unwrap()
            .count();
        assert_eq!(filtered, expected.iter().filter(|b| b[4] < 50.).count());
    }

    #[test]
    fn mbr_covers_all_items() {
        let data = random_boxes(2, 100, 10);
        let mut tree = PRTree::with_branch_factor(BoxConverter(2), 5).unwrap();
        tree.load(data.clone()).unwrap();

        let mbr = tree.mbr().unwrap();
        let min_x = data.iter().map(|b| b[0]).fold(f64::MAX, f64::min);
        let max_y = data.iter().map(|b| b[3]).fold(f64::MIN, f64::max);
        assert_eq!(mbr.min(0), min_x);
        assert_eq!(mbr.max(1), max_y);

        let mbr_2d = tree.mbr_2d().unwrap();
        assert_eq!(mbr_2d.min_x(), min_x);
        assert_eq!(mbr_2d.max_y(), max_y);
    }

    #[test]
    fn height_is_logarithmic_and_deterministic() {
        for (num_items, branch_factor) in [(1, 2), (2, 2), (4, 2), (9, 3), (100, 4), (1000, 10), (5000, 16)] {
            let data = random_boxes(2, num_items, 11);
            let mut tree = PRTree::with_branch_factor(BoxConverter(2), branch_factor).unwrap();
            tree.load(data.clone()).unwrap();
            let mut again = PRTree::with_branch_factor(BoxConverter(2), branch_factor).unwrap();
            again.load(data).unwrap();

            let expected = (num_items as f64).log(branch_factor as f64).ceil() as i64;
            let height = tree.height() as i64;
            assert!(
                (height - expected).abs() <= 1,
                "height {} for {} items, branch factor {}",
                height,
                num_items,
                branch_factor
            );
            assert_eq!(tree.height(), again.height());
        }
    }

    #[test]
    fn find_agrees_with_rstar() {
        let points = crate::test::points_2d();
        let mut tree = PRTree::with_branch_factor(PointConverter, 5).unwrap();
        tree.load(points.clone()).unwrap();

        let to_insert = points
            .iter()
            .enumerate()
            .map(|(i, p)| GeomWithData::new(Rectangle::from_corners([p.x, p.y], [p.x, p.y]), i))
            .collect::<Vec<_>>();
        let reference = rstar::RTree::bulk_load(to_insert);

        for [min_x, min_y, max_x, max_y] in [[0., 0., 50., 50.], [20., 60., 90., 65.], [99., 99., 120., 120.]] {
            let aabb = AABB::from_corners([min_x, min_y], [max_x, max_y]);
            let expected = reference.locate_in_envelope_intersecting(&aabb).count();
            assert_eq!(tree.find_2d(min_x, min_y, max_x, max_y).unwrap().count(), expected);
        }
    }

    #[test]
    fn nearest_neighbour_from_coord() {
        let tree = scenario_tree();
        let dc = EuclideanDistance::new(PointConverter);
        let found = tree
            .nearest_neighbour_coord(&dc, &AcceptAll, 2, &geo_0_31::coord! { x: 9., y: 9. })
            .unwrap();
        let items: Vec<Point2D> = found.iter().map(|r| *r.item()).collect();
        assert_eq!(items, vec![Point2D::new(10., 10.), Point2D::new(5., 5.)]);
        assert_eq!(found[0].distance(), 2f64.sqrt());
    }

    #[test]
    fn integer_coordinates() {
        struct Cells;
        impl MbrConverter<(u16, u16)> for Cells {
            type Coord = u16;
            fn dimensions(&self) -> usize {
                2
            }
            fn min(&self, axis: usize, item: &(u16, u16)) -> u16 {
                if axis == 0 {
                    item.0
                } else {
                    item.1
                }
            }
            fn max(&self, axis: usize, item: &(u16, u16)) -> u16 {
                self.min(axis, item)
            }
        }

        let mut cells = vec![];
        for x in 0..20u16 {
            for y in 0..20u16 {
                cells.push((x, y));
            }
        }
        let mut tree = PRTree::with_branch_factor(Cells, 4).unwrap();
        tree.load(cells).unwrap();
        assert_eq!(tree.find_2d(3, 3, 5, 4).unwrap().count(), 6);
        assert_eq!(tree.mbr_2d(), Some(SimpleMbr2D::new(0, 0, 19, 19)));
    }

    #[test]
    fn nearest_neighbour_at_integer_extremes() {
        struct Bytes;
        impl MbrConverter<(i8, i8)> for Bytes {
            type Coord = i8;
            fn dimensions(&self) -> usize {
                2
            }
            fn min(&self, axis: usize, item: &(i8, i8)) -> i8 {
                if axis == 0 {
                    item.0
                } else {
                    item.1
                }
            }
            fn max(&self, axis: usize, item: &(i8, i8)) -> i8 {
                self.min(axis, item)
            }
        }

        let mut tree = PRTree::with_branch_factor(Bytes, 2).unwrap();
        tree.load(vec![(-128, 0), (-100, 0), (127, 127), (0, -128)]).unwrap();
        let dc = EuclideanDistance::new(Bytes);

        let found = tree
            .nearest_neighbour(&dc, &AcceptAll, 4, &PointND::new(vec![127, 0]))
            .unwrap();
        let items: Vec<(i8, i8)> = found.iter().map(|r| *r.item()).collect();
        assert_eq!(items, vec![(127, 127), (0, -128), (-100, 0), (-128, 0)]);
        assert_eq!(found[2].distance(), 227.);
        assert_eq!(found[3].distance(), 255.);
        assert!(found.windows(2).all(|w| w[0].distance() <= w[1].distance()));
    }
}
