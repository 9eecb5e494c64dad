use grflex::geocode;
use std::{env, path::PathBuf};
use tracing::warn;

const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub port: u16,
    /// CSV supplier list, the built-in list is used when unset.
    pub suppliers_path: Option<PathBuf>,
    pub geocoder: geocode::Config,
}

impl Config {
    pub fn from_env() -> Self {
        let port = match env::var("GRFLEX_PORT") {
            Ok(value) => value.parse().unwrap_or_else(|err| {
                warn!("Ignoring GRFLEX_PORT={value}: {err}");
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };

        let mut geocoder = geocode::Config::default();
        if let Ok(url) = env::var("GRFLEX_GEOCODER_URL") {
            geocoder.base_url = url;
        }
        if let Ok(user_agent) = env::var("GRFLEX_USER_AGENT") {
            geocoder.user_agent = user_agent;
        }

        Self {
            port,
            suppliers_path: env::var_os("GRFLEX_SUPPLIERS").map(PathBuf::from),
            geocoder,
        }
    }
}
