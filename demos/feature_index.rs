//! Index a handful of ocean profile positions and query them by region, depth, time and
//! variable, including a region that crosses the date line.
//!
//! Run with `RUST_LOG=trace` to see how queries are split.

use prtree::feature::{Extent, FeatureBounds, FeatureIndexer, PRTreeFeatureIndexer};
use prtree::{Result, SimpleMbr2D};

const HOUR: i64 = 60 * 60 * 1000;

fn main() -> Result<()> {
    env_logger::init();

    let features = vec![
        FeatureBounds::new(
            "pacific-west",
            178.5,
            -12.,
            Some(Extent::new(0., 1500.)),
            Some(Extent::new(0, 6 * HOUR)),
            ["temperature", "salinity"],
        )?,
        FeatureBounds::new(
            "pacific-east",
            -179.2,
            -11.5,
            Some(Extent::new(0., 800.)),
            Some(Extent::new(2 * HOUR, 3 * HOUR)),
            ["temperature"],
        )?,
        // 181.5 is stored as -178.5
        FeatureBounds::new("fiji-mooring", 181.5, -13., None, None, ["temperature", "salinity"])?,
        FeatureBounds::new(
            "north-atlantic",
            -30.,
            50.,
            Some(Extent::new(0., 2000.)),
            Some(Extent::new(0, 24 * HOUR)),
            ["temperature", "salinity", "oxygen"],
        )?,
    ];

    let mut indexer = PRTreeFeatureIndexer::new()?;
    indexer.add_features(features)?;
    println!("indexed {} features", indexer.all_feature_ids().len());

    let dateline = SimpleMbr2D::new(175., -20., 185., -5.);
    let ids = indexer.find_feature_ids(&dateline, None, None, &[])?;
    println!("around the date line: {:?}", ids);

    let ids = indexer.find_feature_ids(&dateline, None, None, &["salinity"])?;
    println!("around the date line with salinity: {:?}", ids);

    let shallow_and_early = indexer.find_feature_ids(
        &dateline,
        Some(Extent::new(0., 100.)),
        Some(Extent::new(0, HOUR)),
        &["temperature"],
    )?;
    println!("shallow, first hour: {:?}", shallow_and_early);

    let everywhere = SimpleMbr2D::new(-180., -90., 180., 90.);
    let ids = indexer.find_feature_ids(&everywhere, Some(Extent::new(1800., 1900.)), None, &[])?;
    println!("deeper than 1800m: {:?}", ids);

    Ok(())
}
