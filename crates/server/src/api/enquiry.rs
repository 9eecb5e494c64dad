use std::sync::Arc;

use crate::state::AppState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use grflex::prelude::*;

fn respond<F: Form>(outcome: Result<enquiry::Receipt, enquiry::Error>) -> Response {
    let status = Status::from_outcome::<F>(&outcome);
    let code = match outcome {
        Ok(_) => StatusCode::OK,
        Err(enquiry::Error::Invalid(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        Err(enquiry::Error::SubmissionFailed(_)) => StatusCode::SERVICE_UNAVAILABLE,
    };
    (code, Json(status)).into_response()
}

pub async fn contact(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ContactEnquiry>,
) -> Response {
    let outcome = enquiry::submit(&state.submitter, &form).await;
    respond::<ContactEnquiry>(outcome)
}

pub async fn apply(
    State(state): State<Arc<AppState>>,
    Json(form): Json<SupplierApplication>,
) -> Response {
    let outcome = enquiry::submit(&state.submitter, &form).await;
    respond::<SupplierApplication>(outcome)
}
