use crate::shared::geo::Coordinate;
use std::sync::Arc;

/// A point a supplier search starts from.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub coordinate: Coordinate,
    pub label: Arc<str>,
}

impl Location {
    pub fn new(coordinate: Coordinate, label: impl Into<Arc<str>>) -> Self {
        Self {
            coordinate,
            label: label.into(),
        }
    }
}

impl From<Coordinate> for Location {
    fn from(value: Coordinate) -> Self {
        Self::new(value, value.to_string())
    }
}
