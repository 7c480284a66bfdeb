//! Best-first nearest neighbour search.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::mbr::PointND;
use crate::prtree::node::Node;
use crate::prtree::r#trait::{DistanceCalculator, NodeFilter};
use crate::r#type::IndexableNum;

/// An item found by a nearest neighbour search, with its distance to the query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceResult<'a, T> {
    item: &'a T,
    distance: f64,
}

impl<'a, T> DistanceResult<'a, T> {
    pub fn item(&self) -> &'a T {
        self.item
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }
}

/// What a queue entry refers to.
enum Candidate<'a, T, N: IndexableNum> {
    Node(&'a Node<T, N>),
    Item(&'a T),
}

/// A wrapper around a candidate and its distance for use in the priority queue.
///
/// For nodes the distance is a lower bound of the distance of everything below the node. Equal
/// distances are ordered by insertion sequence.
struct QueueEntry<'a, T, N: IndexableNum> {
    dist: f64,
    seq: usize,
    candidate: Candidate<'a, T, N>,
}

impl<T, N: IndexableNum> PartialEq for QueueEntry<'_, T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, N: IndexableNum> Eq for QueueEntry<'_, T, N> {}

impl<T, N: IndexableNum> Ord for QueueEntry<'_, T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist
            .total_cmp(&other.dist)
            .then(self.seq.cmp(&other.seq))
    }
}

impl<T, N: IndexableNum> PartialOrd for QueueEntry<'_, T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// State of one nearest neighbour query.
pub(crate) struct NearestNeighbour<'a, 'q, T, N: IndexableNum, D, F> {
    root: &'a Node<T, N>,
    dc: &'q D,
    filter: &'q F,
    max_hits: usize,
    point: &'q PointND<N>,
    queue: BinaryHeap<Reverse<QueueEntry<'a, T, N>>>,
    seq: usize,
}

impl<'a, 'q, T, N, D, F> NearestNeighbour<'a, 'q, T, N, D, F>
where
    N: IndexableNum,
    D: DistanceCalculator<T, N>,
    F: NodeFilter<T>,
{
    pub(crate) fn new(
        root: &'a Node<T, N>,
        dc: &'q D,
        filter: &'q F,
        max_hits: usize,
        point: &'q PointND<N>,
    ) -> Self {
        Self {
            root,
            dc,
            filter,
            max_hits,
            point,
            queue: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Run the search.
    ///
    /// An item is only popped from the queue once no node with a smaller lower bound is left, so
    /// the pop order is the final distance order.
    pub(crate) fn find(mut self) -> Vec<DistanceResult<'a, T>> {
        let mut results = Vec::with_capacity(self.max_hits.min(64));
        if self.max_hits == 0 {
            return results;
        }

        let root_dist = self.dc.distance_to_mbr(self.root.mbr(), self.point);
        self.push(root_dist, Candidate::Node(self.root));

        while let Some(Reverse(entry)) = self.queue.pop() {
            match entry.candidate {
                Candidate::Item(item) => {
                    results.push(DistanceResult {
                        item,
                        distance: entry.dist,
                    });
                    if results.len() == self.max_hits {
                        break;
                    }
                }
                Candidate::Node(Node::Leaf { entries, .. }) => {
                    for item in entries {
                        if self.filter.accept(item) {
                            let dist = self.dc.distance(item, self.point);
                            self.push(dist, Candidate::Item(item));
                        }
                    }
                }
                Candidate::Node(Node::Internal { children, .. }) => {
                    for child in children {
                        let dist = self.dc.distance_to_mbr(child.mbr(), self.point);
                        self.push(dist, Candidate::Node(child));
                    }
                }
            }
        }

        log::trace!(
            "nearest neighbour search found {} of {} requested, {} candidates left",
            results.len(),
            self.max_hits,
            self.queue.len()
        );
        results
    }

    fn push(&mut self, dist: f64, candidate: Candidate<'a, T, N>) {
        self.queue.push(Reverse(QueueEntry {
            dist,
            seq: self.seq,
            candidate,
        }));
        self.seq += 1;
    }
}
