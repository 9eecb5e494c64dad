use std::{collections::HashMap, sync::Arc};

use crate::{
    dto::{NoticeDto, SearchDto},
    state::AppState,
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use grflex::prelude::*;
use tracing::warn;

fn page_param(params: &HashMap<String, String>) -> Result<usize, StatusCode> {
    match params.get("page") {
        Some(value) => value.parse().map_err(|_| StatusCode::BAD_REQUEST),
        None => Ok(0),
    }
}

fn coordinate_param(
    params: &HashMap<String, String>,
    key: &str,
) -> Result<Option<f64>, StatusCode> {
    match params.get(key) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| StatusCode::BAD_REQUEST),
        None => Ok(None),
    }
}

fn reject(err: locator::Error) -> Response {
    let status = match &err {
        locator::Error::Geocode(geocode::Error::EmptyQuery) => StatusCode::BAD_REQUEST,
        locator::Error::Geocode(geocode::Error::NotFound(_)) => StatusCode::NOT_FOUND,
        locator::Error::Geocode(_) => StatusCode::BAD_GATEWAY,
        locator::Error::Position(_) => StatusCode::UNPROCESSABLE_ENTITY,
        locator::Error::Superseded => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    warn!("Supplier search failed: {err}");
    (status, Json(NoticeDto::warning(err.user_message()))).into_response()
}

fn respond(
    state: &AppState,
    outcome: Result<SearchResults, locator::Error>,
    page: usize,
) -> Response {
    match outcome {
        Ok(results) => {
            Json(SearchDto::from(&results, state.locator.page_size(), page)).into_response()
        }
        Err(err) => reject(err),
    }
}

pub async fn search(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let query = params.get("q").ok_or(StatusCode::BAD_REQUEST)?;
    let page = page_param(&params)?;
    let outcome = state.locator.fork().search(&state.geocoder, query).await;
    Ok(respond(&state, outcome, page))
}

pub async fn near(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let page = page_param(&params)?;
    let denied = params.get("denied").is_some_and(|value| value == "true");
    let position = match (
        coordinate_param(&params, "lat")?,
        coordinate_param(&params, "lon")?,
    ) {
        _ if denied => ReportedPosition::Denied,
        (Some(latitude), Some(longitude)) => ReportedPosition::Granted(Coordinate {
            latitude,
            longitude,
        }),
        _ => ReportedPosition::Unsupported,
    };
    let outcome = state
        .locator
        .fork()
        .search_near(&position, state.position_timeout)
        .await;
    Ok(respond(&state, outcome, page))
}

/// Pages through the suppliers around an origin returned by an earlier search.
pub async fn page(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let page = page_param(&params)?;
    let (Some(latitude), Some(longitude)) = (
        coordinate_param(&params, "lat")?,
        coordinate_param(&params, "lon")?,
    ) else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(NoticeDto::warning("Search for a postcode, town, or address first.")),
        )
            .into_response());
    };
    let coordinate = Coordinate {
        latitude,
        longitude,
    };
    if !coordinate.is_valid() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let origin = match params.get("label").map(|label| label.trim()) {
        Some(label) if !label.is_empty() => Location::new(coordinate, label),
        _ => Location::from(coordinate),
    };
    let results = state.locator.around(origin);
    Ok(Json(SearchDto::from(&results, state.locator.page_size(), page)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{Value, json};
    use std::time::Duration;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, query_param},
    };

    fn params(pairs: &[(&str, &str)]) -> Query<HashMap<String, String>> {
        Query(
            pairs
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }

    fn test_state(server: &MockServer) -> Arc<AppState> {
        let geocoder = NominatimGeocoder::new(geocode::Config {
            base_url: server.uri(),
            ..Default::default()
        })
        .unwrap();
        Arc::new(AppState {
            estimator: Estimator::default(),
            locator: Locator::new(),
            geocoder,
            submitter: StubSubmitter::new().without_delay(),
            position_timeout: Duration::from_millis(100),
        })
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn concurrent_clients_keep_their_own_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("q", "Leeds"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([
                        { "lat": "53.8008", "lon": "-1.5491", "display_name": "Leeds" }
                    ]))
                    .set_delay(Duration::from_millis(300)),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("q", "London"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "lat": "51.5072", "lon": "-0.1276", "display_name": "London" }
            ])))
            .mount(&server)
            .await;

        let state = test_state(&server);
        let (slow, fast) = tokio::join!(
            search(params(&[("q", "Leeds")]), State(state.clone())),
            async {
                tokio::time::sleep(Duration::from_millis(30)).await;
                search(params(&[("q", "London")]), State(state.clone())).await
            }
        );
        let slow = slow.unwrap();
        let fast = fast.unwrap();
        assert_eq!(slow.status(), StatusCode::OK);
        assert_eq!(fast.status(), StatusCode::OK);
        assert_eq!(json_body(slow).await["origin"]["label"], "Leeds");
        assert_eq!(json_body(fast).await["origin"]["label"], "London");
    }

    #[tokio::test]
    async fn page_uses_the_given_origin() {
        let server = MockServer::start().await;
        let state = test_state(&server);
        let response = page(
            params(&[
                ("lat", "52.4862"),
                ("lon", "-1.8904"),
                ("label", "Birmingham"),
                ("page", "1"),
            ]),
            State(state),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["origin"]["label"], "Birmingham");
        assert_eq!(json["page"], 1);
        assert_eq!(json["showing"], "Showing 3-4 of 5");
    }

    #[tokio::test]
    async fn page_without_origin_is_rejected() {
        let server = MockServer::start().await;
        let response = page(params(&[("page", "0")]), State(test_state(&server)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
