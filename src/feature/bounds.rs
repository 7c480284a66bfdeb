use std::collections::HashSet;

use crate::error::{PRTreeError, Result};
use crate::feature::util::constrain_longitude_180;
use crate::prtree::MbrConverter;

/// A closed range of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent<V> {
    pub low: V,
    pub high: V,
}

impl<V> Extent<V> {
    pub fn new(low: V, high: V) -> Self {
        Self { low, high }
    }
}

impl Extent<f64> {
    /// The extent covering every finite value.
    pub fn unbounded() -> Self {
        Self::new(-f64::MAX, f64::MAX)
    }
}

impl Extent<i64> {
    /// The extent covering every timestamp.
    pub fn unbounded() -> Self {
        Self::new(-i64::MAX, i64::MAX)
    }
}

/// The spatial and temporal bounds of a point feature.
///
/// A feature sits at a single horizontal position, in degrees of longitude and latitude, and may
/// span a vertical range and a time range. Times are milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureBounds {
    id: String,
    x: f64,
    y: f64,
    vertical: Extent<f64>,
    time: Extent<i64>,
    variable_ids: HashSet<String>,
}

impl FeatureBounds {
    /// Describe a feature.
    ///
    /// A missing vertical or time extent is replaced by the unbounded extent, so the feature
    /// matches any query along that axis. Fails if the id is empty or the position is not finite.
    pub fn new(
        id: impl Into<String>,
        x: f64,
        y: f64,
        vertical: Option<Extent<f64>>,
        time: Option<Extent<i64>>,
        variable_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(PRTreeError::InvalidFeature(
                "a feature needs a non-empty id".to_string(),
            ));
        }
        if !x.is_finite() || !y.is_finite() {
            return Err(PRTreeError::InvalidFeature(format!(
                "feature {} has no valid horizontal position: ({}, {})",
                id, x, y
            )));
        }
        Ok(Self {
            id,
            x,
            y,
            vertical: vertical.unwrap_or_else(Extent::<f64>::unbounded),
            time: time.unwrap_or_else(Extent::<i64>::unbounded),
            variable_ids: variable_ids.into_iter().map(Into::into).collect(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Longitude in degrees.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Latitude in degrees.
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn vertical(&self) -> Extent<f64> {
        self.vertical
    }

    pub fn time(&self) -> Extent<i64> {
        self.time
    }

    pub fn variable_ids(&self) -> &HashSet<String> {
        &self.variable_ids
    }

    /// Returns `true` if this feature provides every one of `variable_ids`.
    pub fn has_variables(&self, variable_ids: &[&str]) -> bool {
        variable_ids.iter().all(|id| self.variable_ids.contains(*id))
    }

    /// Move the longitude into `(-180, 180]`.
    pub(crate) fn normalize_longitude(&mut self) {
        self.x = constrain_longitude_180(self.x);
    }
}

/// Maps [`FeatureBounds`] to a four dimensional box: longitude, latitude, vertical and time.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureBoundsConverter;

impl MbrConverter<FeatureBounds> for FeatureBoundsConverter {
    type Coord = f64;

    fn dimensions(&self) -> usize {
        4
    }

    fn min(&self, axis: usize, item: &FeatureBounds) -> f64 {
        match axis {
            0 => item.x,
            1 => item.y,
            2 => item.vertical.low,
            3 => item.time.low as f64,
            _ => f64::NAN,
        }
    }

    fn max(&self, axis: usize, item: &FeatureBounds) -> f64 {
        match axis {
            0 => item.x,
            1 => item.y,
            2 => item.vertical.high,
            3 => item.time.high as f64,
            _ => f64::NAN,
        }
    }
}
