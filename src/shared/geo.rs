use std::{cmp, fmt::Display};

use serde::{Deserialize, Serialize};

pub(crate) const EARTH_RADIUS: Distance = Distance::from_kilometers(6371.0);
pub(crate) const MILES_PER_KILOMETER: f64 = 0.621371;

#[derive(Debug, Clone, Copy, Default)]
pub struct Distance(f64);

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:.1} mi", self.as_miles()))
    }
}

impl Serialize for Distance {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_miles())
    }
}

impl Distance {
    pub const fn from_kilometers(distance: f64) -> Self {
        Self(distance)
    }

    pub const fn from_miles(distance: f64) -> Self {
        Self(distance / MILES_PER_KILOMETER)
    }

    pub const fn as_kilometers(&self) -> f64 {
        self.0
    }

    pub const fn as_miles(&self) -> f64 {
        self.0 * MILES_PER_KILOMETER
    }

    /// Total ordering used when ranking, NaN sorts last.
    pub fn total_cmp(&self, other: &Self) -> cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}, {}", self.latitude, self.longitude))
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(value: Coordinate) -> Self {
        (value.latitude, value.longitude)
    }
}

impl Coordinate {
    /// Great-circle distance using the haversine formula.
    pub fn distance(&self, coord: &Self) -> Distance {
        let dist_lat = f64::to_radians(coord.latitude - self.latitude);
        let dist_lon = f64::to_radians(coord.longitude - self.longitude);
        let a = f64::powi(f64::sin(dist_lat / 2.0), 2)
            + f64::cos(f64::to_radians(self.latitude))
                * f64::cos(f64::to_radians(coord.latitude))
                * f64::sin(dist_lon / 2.0)
                * f64::sin(dist_lon / 2.0);
        let c = 2.0 * f64::atan2(f64::sqrt(a), f64::sqrt(1.0 - a));
        Distance::from_kilometers(EARTH_RADIUS.as_kilometers() * c)
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

#[test]
fn distance_test() {
    let birmingham = Coordinate::from((52.4862, -1.8904));
    let london = Coordinate::from((51.5072, -0.1276));
    let d = birmingham.distance(&london);
    assert!((d.as_kilometers() - 163.0).abs() < 5.0);
}

#[test]
fn distance_miles_test() {
    let dist = Distance::from_kilometers(100.0);
    assert!((dist.as_miles() - 62.1371).abs() < 1e-9);
}

#[test]
fn distance_cmp_test() {
    let dist_a = Distance::from_miles(10.0);
    let dist_b = Distance::from_kilometers(10.0);
    assert!(dist_a > dist_b)
}

#[test]
fn coordinate_bounds_test() {
    assert!(Coordinate::from((90.0, -180.0)).is_valid());
    assert!(!Coordinate::from((90.5, 0.0)).is_valid());
    assert!(!Coordinate::from((0.0, f64::NAN)).is_valid());
}
