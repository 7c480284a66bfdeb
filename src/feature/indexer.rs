use std::collections::HashSet;

use crate::error::Result;
use crate::feature::bounds::{Extent, FeatureBounds, FeatureBoundsConverter};
use crate::feature::util::constrain_longitude_180;
use crate::mbr::{SimpleMbr, SimpleMbr2D};
use crate::prtree::PRTree;

/// The branch factor of the tree behind a [`PRTreeFeatureIndexer`].
pub const FEATURE_BRANCH_FACTOR: usize = 2;

/// Finds point features by position, vertical range, time range and available variables.
pub trait FeatureIndexer {
    /// Add features to this indexer.
    fn add_features(&mut self, features: Vec<FeatureBounds>) -> Result<()>;

    /// The ids of all features inside `horizontal_extent` that intersect the vertical and time
    /// extents and provide every one of `variable_ids`.
    ///
    /// `horizontal_extent` is in degrees of longitude and latitude; its longitudes may lie
    /// outside `(-180, 180]`. A missing vertical or time extent does not constrain the search.
    fn find_feature_ids(
        &self,
        horizontal_extent: &SimpleMbr2D<f64>,
        vertical_extent: Option<Extent<f64>>,
        time_extent: Option<Extent<i64>>,
        variable_ids: &[&str],
    ) -> Result<Vec<String>>;

    /// The ids of every feature in this indexer.
    fn all_feature_ids(&self) -> &HashSet<String>;
}

/// A [`FeatureIndexer`] backed by a four dimensional [`PRTree`].
///
/// Features can only be added once, since the tree is bulk loaded.
#[derive(Debug, Clone)]
pub struct PRTreeFeatureIndexer {
    tree: PRTree<FeatureBounds, FeatureBoundsConverter>,
    feature_ids: HashSet<String>,
}

impl PRTreeFeatureIndexer {
    pub fn new() -> Result<Self> {
        Self::with_branch_factor(FEATURE_BRANCH_FACTOR)
    }

    pub fn with_branch_factor(branch_factor: usize) -> Result<Self> {
        Ok(Self {
            tree: PRTree::with_branch_factor(FeatureBoundsConverter, branch_factor)?,
            feature_ids: HashSet::new(),
        })
    }

    /// The tree holding the features.
    pub fn tree(&self) -> &PRTree<FeatureBounds, FeatureBoundsConverter> {
        &self.tree
    }
}

impl FeatureIndexer for PRTreeFeatureIndexer {
    fn add_features(&mut self, mut features: Vec<FeatureBounds>) -> Result<()> {
        for feature in features.iter_mut() {
            feature.normalize_longitude();
        }
        let ids: Vec<String> = features.iter().map(|f| f.id().to_string()).collect();

        self.tree.load(features)?;
        self.feature_ids.extend(ids);
        log::debug!("indexed {} distinct features", self.feature_ids.len());
        Ok(())
    }

    fn find_feature_ids(
        &self,
        horizontal_extent: &SimpleMbr2D<f64>,
        vertical_extent: Option<Extent<f64>>,
        time_extent: Option<Extent<i64>>,
        variable_ids: &[&str],
    ) -> Result<Vec<String>> {
        // Shift both sides by the same amount so that min_x lies in (-180, 180]
        let min_x = horizontal_extent.min_x();
        let shift = constrain_longitude_180(min_x) - min_x;
        let min_x = min_x + shift;
        let max_x = horizontal_extent.max_x() + shift;
        let min_y = horizontal_extent.min_y();
        let max_y = horizontal_extent.max_y();

        let vertical = vertical_extent.unwrap_or_else(Extent::<f64>::unbounded);
        let time = time_extent.unwrap_or_else(Extent::<i64>::unbounded);
        let query = |min_x: f64, max_x: f64| {
            SimpleMbr::new(vec![
                min_x,
                max_x,
                min_y,
                max_y,
                vertical.low,
                vertical.high,
                time.low as f64,
                time.high as f64,
            ])
        };

        let queries = if max_x > 540. {
            log::trace!("query spans the date line at both ends, searching all longitudes");
            vec![query(-180., 180.)]
        } else if max_x > 180. {
            let wrapped_max_x = constrain_longitude_180(max_x);
            log::trace!(
                "query crosses the date line, searching [{}, 180] and [-180, {}]",
                min_x,
                wrapped_max_x
            );
            vec![query(min_x, 180.), query(-180., wrapped_max_x)]
        } else {
            vec![query(min_x, max_x)]
        };

        let filter = |feature: &FeatureBounds| feature.has_variables(variable_ids);
        let mut seen = HashSet::new();
        let mut ids = vec![];
        for query in &queries {
            for feature in self.tree.find_with_filter(query, filter)? {
                if seen.insert(feature.id()) {
                    ids.push(feature.id().to_string());
                }
            }
        }
        Ok(ids)
    }

    fn all_feature_ids(&self) -> &HashSet<String> {
        &self.feature_ids
    }
}
