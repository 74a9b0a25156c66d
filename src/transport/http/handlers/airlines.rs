use crate::domain::AirlineCreate;
use crate::storage::DEFAULT_CAP;
use crate::transport::http::types::{
    json_422, json_error, json_ok, AirlineListParams, ApiResponse, AppState,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::Query;

#[utoipa::path(
    post,
    path = "/airlines/create",
    request_body = AirlineCreate,
    responses(
        (status = 200, description = "Airline created", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn create_airline_handler(
    State(state): State<AppState>,
    request: Result<Json<AirlineCreate>, JsonRejection>,
) -> impl IntoResponse {
    let Json(airline) = match request {
        Ok(v) => v,
        Err(e) => {
            return json_422(e, "{\"code\": \"UA\", \"name\": ..., \"alliance\": ...}")
                .into_response();
        }
    };
    match state.service.create_airline(airline).await {
        Ok(created) => json_ok(serde_json::json!(created)).into_response(),
        Err(e) => json_error(&e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/airlines/list",
    params(AirlineListParams),
    responses(
        (status = 200, description = "Airlines matching the supplied filters", body = ApiResponse),
        (status = 400, description = "Bad request", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn list_airlines_handler(
    State(state): State<AppState>,
    Query(params): Query<AirlineListParams>,
) -> impl IntoResponse {
    let limit = params.limit.unwrap_or(DEFAULT_CAP);
    match state
        .service
        .list_airlines(params.airline_id, params.name, params.alliance, limit)
        .await
    {
        Ok(airlines) => json_ok(serde_json::json!(airlines)).into_response(),
        Err(e) => json_error(&e).into_response(),
    }
}
