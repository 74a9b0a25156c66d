use crate::domain::{FlightCreate, FlightUpdate};
use crate::storage::DEFAULT_CAP;
use crate::transport::http::types::{
    json_422, json_error, json_ok, json_ok_empty, ApiResponse, AppState, FlightListParams,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::Query;

#[utoipa::path(
    post,
    path = "/flights/create",
    request_body = FlightCreate,
    responses(
        (status = 200, description = "Flight created", body = ApiResponse),
        (status = 400, description = "Departure airport does not exist", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn create_flight_handler(
    State(state): State<AppState>,
    request: Result<Json<FlightCreate>, JsonRejection>,
) -> impl IntoResponse {
    let Json(flight) = match request {
        Ok(v) => v,
        Err(e) => {
            return json_422(
                e,
                "{\"departure_airport_id\": 1, \"arrival_airport_id\": 2, \
                 \"departure_date\": \"2026-09-01\", ...}",
            )
            .into_response();
        }
    };
    match state.service.create_flight(flight).await {
        Ok(created) => json_ok(serde_json::json!(created)).into_response(),
        Err(e) => json_error(&e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/flights/list",
    params(FlightListParams),
    responses(
        (status = 200, description = "Flights matching the supplied filters", body = ApiResponse),
        (status = 400, description = "Bad request", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn list_flights_handler(
    State(state): State<AppState>,
    Query(params): Query<FlightListParams>,
) -> impl IntoResponse {
    let limit = params.limit.unwrap_or(DEFAULT_CAP);
    match state
        .service
        .list_flights(
            params.departure_airport,
            params.arrival_airport,
            params.departure_date,
            params.arrival_date,
            limit,
        )
        .await
    {
        Ok(flights) => json_ok(serde_json::json!(flights)).into_response(),
        Err(e) => json_error(&e).into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/flights/update/{flight_id}",
    params(
        ("flight_id" = i32, Path, description = "Id of the flight to update")
    ),
    request_body = FlightUpdate,
    responses(
        (status = 200, description = "Flight updated", body = ApiResponse),
        (status = 404, description = "Flight does not exist", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn update_flight_handler(
    State(state): State<AppState>,
    Path(flight_id): Path<i32>,
    request: Result<Json<FlightUpdate>, JsonRejection>,
) -> impl IntoResponse {
    let Json(update) = match request {
        Ok(v) => v,
        Err(e) => {
            return json_422(e, "{\"flight_status\": \"Delayed\", ...} (all fields optional)")
                .into_response();
        }
    };
    match state.service.update_flight(flight_id, update).await {
        Ok(updated) => json_ok(serde_json::json!(updated)).into_response(),
        Err(e) => json_error(&e).into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/flights/delete/{flight_id}",
    params(
        ("flight_id" = i32, Path, description = "Id of the flight to delete")
    ),
    responses(
        (status = 200, description = "Flight deleted", body = ApiResponse),
        (status = 404, description = "Flight does not exist", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn delete_flight_handler(
    State(state): State<AppState>,
    Path(flight_id): Path<i32>,
) -> impl IntoResponse {
    match state.service.delete_flight(flight_id).await {
        Ok(()) => json_ok_empty().into_response(),
        Err(e) => json_error(&e).into_response(),
    }
}
