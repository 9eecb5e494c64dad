use std::{fmt::Display, sync::Arc};

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::{
    locator::Error,
    shared::{Coordinate, Distance, Identifiable},
};

const DIRECTIONS_URL: &str = "https://www.google.com/maps/search/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupplierKind {
    #[serde(rename = "Stockist", alias = "stockist")]
    Stockist,
    #[serde(rename = "Approved installer", alias = "approved_installer")]
    ApprovedInstaller,
    #[serde(rename = "Training centre", alias = "training_centre")]
    TrainingCentre,
}

impl Display for SupplierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SupplierKind::Stockist => f.write_str("Stockist"),
            SupplierKind::ApprovedInstaller => f.write_str("Approved installer"),
            SupplierKind::TrainingCentre => f.write_str("Training centre"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Supplier {
    pub id: Arc<str>,
    pub name: Arc<str>,
    pub kind: SupplierKind,
    pub city: Arc<str>,
    pub postcode: Arc<str>,
    pub phone: Arc<str>,
    pub coordinate: Coordinate,
}

impl Identifiable for Supplier {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Supplier {
    /// Map search link centred on the supplier, labelled with its name.
    pub fn directions_url(&self) -> String {
        let query = format!(
            "{},{}",
            self.coordinate.latitude, self.coordinate.longitude
        );
        match Url::parse_with_params(
            DIRECTIONS_URL,
            [
                ("api", "1"),
                ("query", query.as_str()),
                ("query_place_id", self.name()),
            ],
        ) {
            Ok(url) => url.into(),
            Err(_) => DIRECTIONS_URL.to_string(),
        }
    }

    /// Phone number with whitespace removed, for `tel:` links.
    pub fn dial_number(&self) -> String {
        self.phone.chars().filter(|c| !c.is_whitespace()).collect()
    }
}

/// One row of a supplier CSV file.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct SupplierRecord {
    pub id: String,
    pub name: String,
    pub kind: SupplierKind,
    pub city: String,
    pub postcode: String,
    pub phone: String,
    pub lat: f64,
    pub lon: f64,
}

impl TryFrom<SupplierRecord> for Supplier {
    type Error = Error;

    fn try_from(value: SupplierRecord) -> Result<Self, Self::Error> {
        let coordinate = Coordinate {
            latitude: value.lat,
            longitude: value.lon,
        };
        if !coordinate.is_valid() {
            return Err(Error::InvalidCoordinate(value.id));
        }
        Ok(Self {
            id: value.id.into(),
            name: value.name.into(),
            kind: value.kind,
            city: value.city.into(),
            postcode: value.postcode.into(),
            phone: value.phone.into(),
            coordinate,
        })
    }
}

/// A supplier with its distance from the searched location.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSupplier {
    pub supplier: Supplier,
    pub distance: Distance,
}

#[test]
fn dial_number_test() {
    let supplier = Supplier {
        id: "s5".into(),
        name: "London Roofing Distribution".into(),
        kind: SupplierKind::TrainingCentre,
        city: "London".into(),
        postcode: "E1".into(),
        phone: "020 0000 0000".into(),
        coordinate: Coordinate::from((51.5072, -0.1276)),
    };
    assert_eq!(supplier.dial_number(), "02000000000");
    let url = supplier.directions_url();
    assert!(url.starts_with(DIRECTIONS_URL));
    assert!(url.contains("query_place_id=London+Roofing+Distribution"));
}
