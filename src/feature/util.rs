/// Constrain a longitude to `[0, 360)`.
pub fn constrain_longitude_360(value: f64) -> f64 {
    // rem_euclid rounds tiny negative values up to exactly 360
    let value = value.rem_euclid(360.);
    if value >= 360. {
        0.
    } else {
        value
    }
}

/// Constrain a longitude to `(-180, 180]`.
pub fn constrain_longitude_180(value: f64) -> f64 {
    let value = constrain_longitude_360(value);
    if value > 180. {
        value - 360.
    } else {
        value
    }
}
