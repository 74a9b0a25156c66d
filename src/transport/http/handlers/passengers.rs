use crate::domain::{PassengerCreate, PassengerUpdate};
use crate::storage::DEFAULT_CAP;
use crate::transport::http::types::{
    json_422, json_error, json_ok, json_ok_empty, ApiResponse, AppState, PassengerListParams,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::Query;

#[utoipa::path(
    post,
    path = "/passengers/create",
    request_body = PassengerCreate,
    responses(
        (status = 200, description = "Passenger created", body = ApiResponse),
        (status = 400, description = "Flight does not exist", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn create_passenger_handler(
    State(state): State<AppState>,
    request: Result<Json<PassengerCreate>, JsonRejection>,
) -> impl IntoResponse {
    let Json(passenger) = match request {
        Ok(v) => v,
        Err(e) => {
            return json_422(
                e,
                "{\"flight_id\": 1, \"first_name\": ..., \"last_name\": ..., \
                 \"date_of_birth\": \"1990-01-01\", \"passport_number\": ...}",
            )
            .into_response();
        }
    };
    match state.service.create_passenger(passenger).await {
        Ok(created) => json_ok(serde_json::json!(created)).into_response(),
        Err(e) => json_error(&e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/passengers/list",
    params(PassengerListParams),
    responses(
        (status = 200, description = "Passengers matching the supplied filters", body = ApiResponse),
        (status = 400, description = "Bad request", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn list_passengers_handler(
    State(state): State<AppState>,
    Query(params): Query<PassengerListParams>,
) -> impl IntoResponse {
    let limit = params.limit.unwrap_or(DEFAULT_CAP);
    match state
        .service
        .list_passengers(
            params.passenger_id,
            params.first_name,
            params.last_name,
            params.passport_number,
            limit,
        )
        .await
    {
        Ok(passengers) => json_ok(serde_json::json!(passengers)).into_response(),
        Err(e) => json_error(&e).into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/passengers/update/{passenger_id}",
    params(
        ("passenger_id" = i32, Path, description = "Id of the passenger to update")
    ),
    request_body = PassengerUpdate,
    responses(
        (status = 200, description = "Passenger updated", body = ApiResponse),
        (status = 404, description = "Passenger does not exist", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn update_passenger_handler(
    State(state): State<AppState>,
    Path(passenger_id): Path<i32>,
    request: Result<Json<PassengerUpdate>, JsonRejection>,
) -> impl IntoResponse {
    let Json(update) = match request {
        Ok(v) => v,
        Err(e) => {
            return json_422(e, "{\"last_name\": \"Doe\", ...} (all fields optional)")
                .into_response();
        }
    };
    match state.service.update_passenger(passenger_id, update).await {
        Ok(updated) => json_ok(serde_json::json!(updated)).into_response(),
        Err(e) => json_error(&e).into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/passengers/delete/{passenger_id}",
    params(
        ("passenger_id" = i32, Path, description = "Id of the passenger to delete")
    ),
    responses(
        (status = 200, description = "Passenger deleted", body = ApiResponse),
        (status = 404, description = "Passenger does not exist", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn delete_passenger_handler(
    State(state): State<AppState>,
    Path(passenger_id): Path<i32>,
) -> impl IntoResponse {
    match state.service.delete_passenger(passenger_id).await {
        Ok(()) => json_ok_empty().into_response(),
        Err(e) => json_error(&e).into_response(),
    }
}
