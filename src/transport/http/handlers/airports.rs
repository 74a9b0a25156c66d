use crate::domain::AirportCreate;
use crate::storage::DEFAULT_CAP;
use crate::transport::http::types::{
    json_422, json_error, json_ok, AirportListParams, ApiResponse, AppState,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::Query;

#[utoipa::path(
    post,
    path = "/airports/create",
    request_body = AirportCreate,
    responses(
        (status = 200, description = "Airport created", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn create_airport_handler(
    State(state): State<AppState>,
    request: Result<Json<AirportCreate>, JsonRejection>,
) -> impl IntoResponse {
    let Json(airport) = match request {
        Ok(v) => v,
        Err(e) => {
            return json_422(e, "{\"code\": \"JFK\", \"name\": ..., \"city\": ..., \"country\": ...}")
                .into_response();
        }
    };
    match state.service.create_airport(airport).await {
        Ok(created) => json_ok(serde_json::json!(created)).into_response(),
        Err(e) => json_error(&e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/airports/list",
    params(AirportListParams),
    responses(
        (status = 200, description = "Airports matching the supplied filters", body = ApiResponse),
        (status = 400, description = "Bad request", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn list_airports_handler(
    State(state): State<AppState>,
    Query(params): Query<AirportListParams>,
) -> impl IntoResponse {
    let limit = params.limit.unwrap_or(DEFAULT_CAP);
    match state
        .service
        .list_airports(params.airport_id, params.city, params.country, limit)
        .await
    {
        Ok(airports) => json_ok(serde_json::json!(airports)).into_response(),
        Err(e) => json_error(&e).into_response(),
    }
}
