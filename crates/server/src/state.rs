use grflex::prelude::*;
use std::time::Duration;

pub struct AppState {
    pub estimator: Estimator,
    pub locator: Locator,
    pub geocoder: NominatimGeocoder,
    pub submitter: StubSubmitter,
    pub position_timeout: Duration,
}
