use std::{collections::HashMap, sync::Arc};

use crate::{dto::EstimateDto, state::AppState};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use grflex::prelude::*;

pub async fn estimate(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let season = match params.get("season").map(|value| value.to_lowercase()) {
        None => Season::Summer,
        Some(value) if value == "summer" => Season::Summer,
        Some(value) if value == "winter" => Season::Winter,
        Some(_) => return Err(StatusCode::BAD_REQUEST),
    };

    let input = if params.contains_key("length") || params.contains_key("width") {
        RoofInput::Dimensions {
            length: params.get("length").cloned().unwrap_or_default(),
            width: params.get("width").cloned().unwrap_or_default(),
        }
    } else {
        RoofInput::Area(params.get("area").cloned().unwrap_or_default())
    };

    let estimate = state.estimator.estimate(&input, season);
    Ok(Json(EstimateDto::from(estimate, &state.estimator)).into_response())
}
