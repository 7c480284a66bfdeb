//! Indexing of point features by position, vertical range, time range and variables.
//!
//! Longitudes are in degrees and are normalized into `(-180, 180]` when features are added.
//! Query boxes may extend past the date line; such queries are split and searched in pieces.

pub mod bounds;
pub mod indexer;
pub mod util;

pub use bounds::{Extent, FeatureBounds, FeatureBoundsConverter};
pub use indexer::{FeatureIndexer, PRTreeFeatureIndexer, FEATURE_BRANCH_FACTOR};
pub use util::{constrain_longitude_180, constrain_longitude_360};
