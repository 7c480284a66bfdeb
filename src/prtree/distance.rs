//! Distance calculators for nearest neighbour searches.

#[cfg(feature = "use-geo_0_31")]
use geo_0_31::algorithm::{Distance, Haversine};
#[cfg(feature = "use-geo_0_31")]
use geo_0_31::Point;

#[cfg(feature = "use-geo_0_31")]
use crate::mbr::Mbr;
use crate::mbr::PointND;
use crate::prtree::r#trait::{DistanceCalculator, MbrConverter};
use crate::prtree::util::axis_dist;
#[cfg(feature = "use-geo_0_31")]
use crate::r#type::IndexableNum;

/// Euclidean distance from the query point to the closest point of an item's box.
///
/// Items containing the point are at distance `0`. Axes beyond the point's dimensions are
/// ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanDistance<C> {
    converter: C,
}

impl<C> EuclideanDistance<C> {
    pub fn new(converter: C) -> Self {
        Self { converter }
    }
}

impl<T, C: MbrConverter<T>> DistanceCalculator<T, C::Coord> for EuclideanDistance<C> {
    fn distance(&self, item: &T, point: &PointND<C::Coord>) -> f64 {
        let dimensions = self.converter.dimensions().min(point.dimensions());
        (0..dimensions)
            .map(|axis| {
                let d = axis_dist(
                    point.coord(axis),
                    self.converter.min(axis, item),
                    self.converter.max(axis, item),
                );
                d * d
            })
            .sum::<f64>()
            .sqrt()
    }
}

/// Mean earth radius used by [`Haversine`], in meters.
#[cfg(feature = "use-geo_0_31")]
const MEAN_EARTH_RADIUS: f64 = 6_371_008.8;

/// Great-circle distance in meters from the query point to an item's box.
///
/// Axis `0` is longitude and axis `1` is latitude, both in degrees. The query point is moved to
/// the closest longitude and latitude inside the item's box, and the haversine distance between
/// the two points is returned. Longitudes are compared modulo 360, so a box spanning
/// `[170, 190]` contains a point at `-175`.
#[cfg(feature = "use-geo_0_31")]
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineDistance<C> {
    converter: C,
}

#[cfg(feature = "use-geo_0_31")]
impl<C> HaversineDistance<C> {
    pub fn new(converter: C) -> Self {
        Self { converter }
    }
}

#[cfg(feature = "use-geo_0_31")]
impl<T, C: MbrConverter<T>> DistanceCalculator<T, C::Coord> for HaversineDistance<C> {
    fn distance(&self, item: &T, point: &PointND<C::Coord>) -> f64 {
        let lon = point.coord(0).as_f64();
        let lat = point.coord(1).as_f64();
        let closest_lon = closest_longitude(
            lon,
            self.converter.min(0, item).as_f64(),
            self.converter.max(0, item).as_f64(),
        );
        let closest_lat = lat.clamp(
            self.converter.min(1, item).as_f64(),
            self.converter.max(1, item).as_f64(),
        );
        Haversine.distance(Point::new(lon, lat), Point::new(closest_lon, closest_lat))
    }

    /// A lower bound of the distance from `point` to anything inside `mbr`.
    ///
    /// The latitude gap alone bounds the distance from below. If the point lies outside the
    /// longitude range, any path into the box also crosses one of the two bounding meridians,
    /// so the smaller distance to those great circles is a bound as well.
    fn distance_to_mbr(&self, mbr: &impl Mbr<C::Coord>, point: &PointND<C::Coord>) -> f64 {
        let lon = point.coord(0).as_f64();
        let lat = point.coord(1).as_f64();
        let min_lon = mbr.min(0).as_f64();
        let max_lon = mbr.max(0).as_f64();

        let lat_gap = axis_dist(lat, mbr.min(1).as_f64(), mbr.max(1).as_f64());
        let lat_bound = lat_gap.to_radians() * MEAN_EARTH_RADIUS;
        if contains_longitude(lon, min_lon, max_lon) {
            return lat_bound;
        }

        let cos_lat = lat.to_radians().cos();
        let cross_track = |meridian: f64| {
            let sin_d = (cos_lat * (lon - meridian).to_radians().sin()).abs();
            sin_d.min(1.).asin() * MEAN_EARTH_RADIUS
        };
        let lon_bound = cross_track(min_lon).min(cross_track(max_lon));
        lat_bound.max(lon_bound)
    }
}

/// Returns `true` if `lon` lies within `[min, max]` modulo 360.
#[cfg(feature = "use-geo_0_31")]
fn contains_longitude(lon: f64, min: f64, max: f64) -> bool {
    max - min >= 360. || (lon - min).rem_euclid(360.) <= max - min
}

/// The longitude within `[min, max]` closest to `lon`, comparing modulo 360.
#[cfg(feature = "use-geo_0_31")]
fn closest_longitude(lon: f64, min: f64, max: f64) -> f64 {
    if contains_longitude(lon, min, max) {
        return lon;
    }
    let past_max = (lon - max).rem_euclid(360.);
    let before_min = (min - lon).rem_euclid(360.);
    if past_max <= before_min {
        max
    } else {
        min
    }
}
