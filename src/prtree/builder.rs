//! Bulk loading of tree levels.

use std::cmp::Ordering;

use crate::prtree::util::div_ceil;

/// Groups the entries of one tree level into nodes of at most `branch_factor` entries.
///
/// Entries are partitioned by sweeping the axes in turn, in the spirit of sort-tile-recursive
/// (STR) packing: the entries are sorted by their centroid along the first axis and cut into
/// slabs, each slab is sorted along the next axis and cut again, and so on. Along the last axis
/// the slab is cut into runs of `branch_factor` entries, and each run becomes one node.
///
/// The sorts are stable, so the result only depends on the input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LeafBuilder {
    dimensions: usize,
    branch_factor: usize,
}

impl LeafBuilder {
    pub(crate) fn new(dimensions: usize, branch_factor: usize) -> Self {
        debug_assert!(dimensions >= 1);
        debug_assert!(branch_factor >= 2);
        Self {
            dimensions,
            branch_factor,
        }
    }

    /// Partition `entries` and turn each group into a node with `factory`.
    ///
    /// `centroid(entry, axis)` gives the sort key of an entry along an axis. Returns no nodes for
    /// no entries, and a single node holding everything if there are at most `branch_factor`
    /// entries.
    pub(crate) fn build_nodes<E, R>(
        &self,
        mut entries: Vec<E>,
        centroid: impl Fn(&E, usize) -> f64,
        mut factory: impl FnMut(Vec<E>) -> R,
    ) -> Vec<R> {
        if entries.is_empty() {
            return vec![];
        }

        let num_nodes = div_ceil(entries.len(), self.branch_factor);
        let mut run_lengths = Vec::with_capacity(num_nodes);
        self.sweep(
            &mut entries,
            0,
            self.dimensions,
            num_nodes,
            &centroid,
            &mut run_lengths,
        );
        debug_assert_eq!(run_lengths.iter().sum::<usize>(), entries.len());

        let mut entries = entries.into_iter();
        run_lengths
            .into_iter()
            .map(|len| factory(entries.by_ref().take(len).collect()))
            .collect()
    }

    /// Sort `slice` along `axis` and either cut it into node runs (last axis) or into slabs that
    /// are swept along the next axis. The length of every node run is appended to `run_lengths`,
    /// in slice order.
    fn sweep<E>(
        &self,
        slice: &mut [E],
        axis: usize,
        remaining_dimensions: usize,
        num_nodes: usize,
        centroid: &impl Fn(&E, usize) -> f64,
        run_lengths: &mut Vec<usize>,
    ) {
        if slice.is_empty() {
            return;
        }

        if slice.len() > 1 {
            slice.sort_by(|a, b| compare(centroid(a, axis), centroid(b, axis)));
        }

        if remaining_dimensions <= 1 || num_nodes <= 1 {
            run_lengths.extend(slice.chunks(self.branch_factor).map(|run| run.len()));
            return;
        }

        let num_slabs = slab_count(num_nodes, remaining_dimensions);
        let slab_len = div_ceil(num_nodes, num_slabs) * self.branch_factor;
        for slab in slice.chunks_mut(slab_len) {
            let slab_nodes = div_ceil(slab.len(), self.branch_factor);
            self.sweep(
                slab,
                axis + 1,
                remaining_dimensions - 1,
                slab_nodes,
                centroid,
                run_lengths,
            );
        }
    }
}

/// `ceil(num_nodes ^ (1 / remaining_dimensions))`, the number of slabs cut along one axis.
fn slab_count(num_nodes: usize, remaining_dimensions: usize) -> usize {
    let estimate = (num_nodes as f64)
        .powf(1. / remaining_dimensions as f64)
        .ceil() as usize;
    // powf may land just above an exact integer root
    let mut count = estimate.max(1);
    while count > 1
        && (count - 1)
            .checked_pow(remaining_dimensions as u32)
            .is_some_and(|p| p >= num_nodes)
    {
        count -= 1;
    }
    count
}

/// Total order over sort keys. NaN sorts last so garbage boxes never panic the loader.
#[inline]
fn compare(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

#[cfg(test)]
mod test {
    use super::*;

    fn build(values: &[(f64, f64)], branch_factor: usize) -> Vec<Vec<(f64, f64)>> {
        let builder = LeafBuilder::new(2, branch_factor);
        builder.build_nodes(
            values.to_vec(),
            |p, axis| if axis == 0 { p.0 } else { p.1 },
            |group| group,
        )
    }

    #[test]
    fn no_entries_no_nodes() {
        assert!(build(&[], 4).is_empty());
    }

    #[test]
    fn few_entries_one_node() {
        let nodes = build(&[(3., 3.), (1., 1.), (2., 2.)], 4);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].len(), 3);
    }

    #[test]
    fn full_grid_is_tiled() {
        // 16 points on a 4x4 grid, 4 per node: STR yields four 2x2 tiles
        let mut values = vec![];
        for x in 0..4 {
            for y in 0..4 {
                values.push((x as f64, y as f64));
            }
        }
        let nodes = build(&values, 4);
        assert_eq!(nodes.len(), 4);
        for node in &nodes {
            assert_eq!(node.len(), 4);
            let min_x = node.iter().map(|p| p.0).fold(f64::MAX, f64::min);
            let max_x = node.iter().map(|p| p.0).fold(f64::MIN, f64::max);
            let min_y = node.iter().map(|p| p.1).fold(f64::MAX, f64::min);
            let max_y = node.iter().map(|p| p.1).fold(f64::MIN, f64::max);
            assert_eq!(max_x - min_x, 1.);
            assert_eq!(max_y - min_y, 1.);
        }
    }

    #[test]
    fn keeps_every_entry_and_respects_branch_factor() {
        let values: Vec<(f64, f64)> = (0..103)
            .map(|i| (((i * 37) % 101) as f64, ((i * 53) % 97) as f64))
            .collect();
        let nodes = build(&values, 5);
        assert_eq!(nodes.iter().map(|n| n.len()).sum::<usize>(), 103);
        assert!(nodes.iter().all(|n| !n.is_empty() && n.len() <= 5));
    }

    #[test]
    fn deterministic() {
        let values: Vec<(f64, f64)> = (0..50).map(|i| ((i % 7) as f64, (i % 3) as f64)).collect();
        assert_eq!(build(&values, 3), build(&values, 3));
    }

    #[test]
    fn nan_keys_do_not_panic() {
        let values = vec![(f64::NAN, 0.), (1., f64::NAN), (0., 0.), (2., 2.), (3., 1.)];
        let nodes = build(&values, 2);
        assert_eq!(nodes.iter().map(|n| n.len()).sum::<usize>(), 5);
    }

    #[test]
    fn slab_counts() {
        assert_eq!(slab_count(1, 2), 1);
        assert_eq!(slab_count(4, 2), 2);
        assert_eq!(slab_count(5, 2), 3);
        assert_eq!(slab_count(27, 3), 3);
        assert_eq!(slab_count(9, 1), 9);
    }
}
