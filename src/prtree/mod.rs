//! A bulk-loaded Priority R-Tree over items of any dimension.

mod builder;
pub mod distance;
pub mod index;
mod nearest;
pub mod node;
pub mod r#trait;
pub mod traversal;
pub mod util;

#[cfg(feature = "use-geo_0_31")]
pub use distance::HaversineDistance;
pub use distance::EuclideanDistance;
pub use index::{PRTree, DEFAULT_BRANCH_FACTOR};
pub use nearest::DistanceResult;
pub use node::Node;
pub use r#trait::{AcceptAll, DistanceCalculator, MbrConverter, NodeFilter};
pub use traversal::Finder;
pub use util::min_dist;
