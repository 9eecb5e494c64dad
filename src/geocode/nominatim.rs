use crate::{
    geocode::{Config, Error, Geocoder},
    shared::{Coordinate, Location},
};
use reqwest::{Url, header::ACCEPT};
use serde::Deserialize;
use tracing::{debug, warn};

/// Nominatim reports coordinates as strings, other deployments as numbers.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum Degrees {
    Text(String),
    Number(f64),
}

impl Degrees {
    fn value(&self) -> Option<f64> {
        let value = match self {
            Degrees::Text(text) => text.trim().parse().ok()?,
            Degrees::Number(number) => *number,
        };
        value.is_finite().then_some(value)
    }
}

#[derive(Deserialize, Debug)]
struct Place {
    lat: Degrees,
    lon: Degrees,
    #[serde(default)]
    display_name: Option<String>,
}

pub struct NominatimGeocoder {
    client: reqwest::Client,
    config: Config,
}

impl NominatimGeocoder {
    pub fn new(config: Config) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn search_url(&self, query: &str) -> Result<Url, Error> {
        let base = format!("{}/search", self.config.base_url.trim_end_matches('/'));
        Url::parse_with_params(
            &base,
            [
                ("q", query),
                ("format", "json"),
                ("addressdetails", "1"),
                ("limit", "1"),
                ("countrycodes", self.config.country_codes.as_str()),
            ],
        )
        .map_err(|err| Error::InvalidEndpoint(format!("{base}: {err}")))
    }
}

impl Geocoder for NominatimGeocoder {
    async fn resolve(&self, query: &str) -> Result<Location, Error> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::EmptyQuery);
        }

        let url = self.search_url(query)?;
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .inspect_err(|err| warn!("Geocode request failed: {err}"))?;

        if !response.status().is_success() {
            warn!(status = %response.status(), query, "Geocoder returned an error status");
            return Err(Error::NotFound(query.to_string()));
        }

        let body = response.text().await?;
        let places: Vec<Place> = match serde_json::from_str(&body) {
            Ok(places) => places,
            Err(err) => {
                warn!("Malformed geocoder response: {err}");
                return Err(Error::NotFound(query.to_string()));
            }
        };

        let place = places
            .first()
            .ok_or_else(|| Error::NotFound(query.to_string()))?;
        let (Some(latitude), Some(longitude)) = (place.lat.value(), place.lon.value()) else {
            return Err(Error::NotFound(query.to_string()));
        };

        let label = match place.display_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => query,
        };
        debug!(query, latitude, longitude, "Geocoded");
        Ok(Location::new(
            Coordinate {
                latitude,
                longitude,
            },
            label,
        ))
    }
}

#[test]
fn search_url_test() {
    let geocoder = NominatimGeocoder::new(Config::default()).unwrap();
    let url = geocoder.search_url("SY1 1AA").unwrap();
    assert_eq!(url.path(), "/search");
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert!(pairs.contains(&("q".into(), "SY1 1AA".into())));
    assert!(pairs.contains(&("countrycodes".into(), "gb".into())));
    assert!(pairs.contains(&("limit".into(), "1".into())));
}
