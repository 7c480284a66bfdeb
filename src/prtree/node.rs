//! The nodes of a [`PRTree`][crate::prtree::PRTree].

use crate::mbr::{Mbr, SimpleMbr};
use crate::prtree::r#trait::{MbrConverter, NodeFilter};
use crate::r#type::IndexableNum;

/// A node in the tree.
///
/// Leaves own the stored items; internal nodes own their children. Both cache the box covering
/// everything below them, computed once when the node is created.
#[derive(Debug, Clone)]
pub enum Node<T, N: IndexableNum> {
    Leaf { entries: Vec<T>, mbr: SimpleMbr<N> },
    Internal { children: Vec<Node<T, N>>, mbr: SimpleMbr<N> },
}

impl<T, N: IndexableNum> Node<T, N> {
    /// Create a leaf holding `entries`. `entries` must not be empty.
    pub(crate) fn leaf<C: MbrConverter<T, Coord = N>>(entries: Vec<T>, converter: &C) -> Self {
        debug_assert!(!entries.is_empty());
        let mut iter = entries.iter();
        let mut mbr = match iter.next() {
            Some(first) => SimpleMbr::from_item(first, converter),
            None => SimpleMbr::new(vec![]),
        };
        for entry in iter {
            mbr.expand(&SimpleMbr::from_item(entry, converter));
        }
        Node::Leaf { entries, mbr }
    }

    /// Create an internal node holding `children`. `children` must not be empty.
    pub(crate) fn internal(children: Vec<Node<T, N>>) -> Self {
        debug_assert!(!children.is_empty());
        let mut iter = children.iter();
        let mut mbr = match iter.next() {
            Some(first) => first.mbr().clone(),
            None => SimpleMbr::new(vec![]),
        };
        for child in iter {
            mbr.expand(child.mbr());
        }
        Node::Internal { children, mbr }
    }

    /// The box covering everything below this node.
    pub fn mbr(&self) -> &SimpleMbr<N> {
        match self {
            Node::Leaf { mbr, .. } | Node::Internal { mbr, .. } => mbr,
        }
    }

    /// Returns `true` if this is a leaf node holding items.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// The number of entries (leaf) or children (internal) of this node.
    pub fn len(&self) -> usize {
        match self {
            Node::Leaf { entries, .. } => entries.len(),
            Node::Internal { children, .. } => children.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Recursively collect every item below this node that intersects `query` and passes `filter`.
    pub(crate) fn find<'a, C, Q, F>(
        &'a self,
        query: &Q,
        converter: &C,
        filter: &F,
        results: &mut impl Extend<&'a T>,
    ) where
        C: MbrConverter<T, Coord = N>,
        Q: Mbr<N>,
        F: NodeFilter<T>,
    {
        match self {
            Node::Leaf { entries, .. } => results.extend(
                entries
                    .iter()
                    .filter(|entry| query.intersects_item(*entry, converter) && filter.accept(entry)),
            ),
            Node::Internal { children, .. } => {
                for child in children {
                    if query.intersects(child.mbr()) {
                        child.find(query, converter, filter, results);
                    }
                }
            }
        }
    }

    /// One step of an incremental search.
    ///
    /// Matching items of a leaf are appended to `found`; intersecting children of an internal node
    /// are pushed onto `to_visit`.
    pub(crate) fn expand<'a, C, Q, F>(
        &'a self,
        query: &Q,
        converter: &C,
        filter: &F,
        found: &mut Vec<&'a T>,
        to_visit: &mut Vec<&'a Node<T, N>>,
    ) where
        C: MbrConverter<T, Coord = N>,
        Q: Mbr<N>,
        F: NodeFilter<T>,
    {
        match self {
            Node::Leaf { entries, .. } => found.extend(
                entries
                    .iter()
                    .filter(|entry| query.intersects_item(*entry, converter) && filter.accept(entry)),
            ),
            Node::Internal { children, .. } => to_visit.extend(
                children
                    .iter()
                    .filter(|child| query.intersects(child.mbr())),
            ),
        }
    }
}
