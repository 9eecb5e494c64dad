use crate::shared::Location;
use std::future::Future;
use thiserror::Error;

mod config;
mod nominatim;
pub use config::*;
pub use nominatim::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Query is empty")]
    EmptyQuery,
    #[error("No place matches {0:?}")]
    NotFound(String),
    #[error("Geocoding request failed: {0}")]
    GeocodeFailed(#[from] reqwest::Error),
    #[error("Invalid geocoder endpoint: {0}")]
    InvalidEndpoint(String),
}

impl Error {
    /// Message shown to the user in the search warning banner.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::EmptyQuery => "Please enter a UK postcode, town, or address.",
            Error::NotFound(_) => {
                "No location found. Try a postcode, town, or a more specific address."
            }
            Error::GeocodeFailed(_) | Error::InvalidEndpoint(_) => {
                "Geocoding failed. Please try again in a moment."
            }
        }
    }
}

/// Resolves free text into a single best matching location.
pub trait Geocoder {
    fn resolve(&self, query: &str) -> impl Future<Output = Result<Location, Error>> + Send;
}
