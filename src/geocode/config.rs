use std::time::Duration;

pub struct Config {
    pub base_url: String,
    /// Comma separated ISO 3166-1 alpha-2 codes the search is limited to.
    pub country_codes: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".into(),
            country_codes: "gb".into(),
            user_agent: concat!("grflex/", env!("CARGO_PKG_VERSION")).into(),
            timeout: Duration::from_secs(10),
        }
    }
}
