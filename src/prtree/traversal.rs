//! Lazy traversal of the tree.

use crate::mbr::SimpleMbr;
use crate::prtree::node::Node;
use crate::prtree::r#trait::{MbrConverter, NodeFilter};

/// An iterator over the items that intersect a query box.
///
/// Created by [`PRTree::find`][crate::prtree::PRTree::find] and friends. Nodes are visited depth
/// first, only as far as needed to produce the next item, so the working set is bounded by the
/// tree height times the branch factor rather than by the number of results.
pub struct Finder<'a, T, C: MbrConverter<T>, F> {
    converter: &'a C,
    query: SimpleMbr<C::Coord>,
    filter: F,
    found: Vec<&'a T>,
    to_visit: Vec<&'a Node<T, C::Coord>>,
}

impl<'a, T, C: MbrConverter<T>, F: NodeFilter<T>> Finder<'a, T, C, F> {
    pub(crate) fn new(
        converter: &'a C,
        root: Option<&'a Node<T, C::Coord>>,
        query: SimpleMbr<C::Coord>,
        filter: F,
    ) -> Self {
        Self {
            converter,
            query,
            filter,
            found: vec![],
            to_visit: root.into_iter().collect(),
        }
    }

    /// Expand nodes until at least one item is buffered or nothing is left to visit.
    fn advance(&mut self) {
        while self.found.is_empty() {
            let Some(node) = self.to_visit.pop() else {
                break;
            };
            node.expand(
                &self.query,
                self.converter,
                &self.filter,
                &mut self.found,
                &mut self.to_visit,
            );
        }
    }
}

impl<'a, T, C: MbrConverter<T>, F: NodeFilter<T>> Iterator for Finder<'a, T, C, F> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance();
        self.found.pop()
    }
}

impl<'a, T, C: MbrConverter<T>, F: NodeFilter<T>> std::iter::FusedIterator for Finder<'a, T, C, F> {}

impl<'a, T, C: MbrConverter<T>, F> std::fmt::Debug for Finder<'a, T, C, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Finder")
            .field("query", &self.query)
            .field("found", &self.found.len())
            .field("to_visit", &self.to_visit.len())
            .finish()
    }
}
