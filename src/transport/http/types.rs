use crate::app::flight_data::FlightDataService;
use crate::error::Error;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::error;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<FlightDataService>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Optional filters for `/airports/list`. Absent parameters leave the query
/// unconstrained; repeated parameters form the candidate list.
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AirportListParams {
    /// Airport ids to filter by (repeatable).
    #[serde(default)]
    pub airport_id: Option<Vec<i32>>,
    /// Cities to filter by (repeatable).
    #[serde(default)]
    pub city: Option<Vec<String>>,
    /// Countries to filter by (repeatable).
    #[serde(default)]
    pub country: Option<Vec<String>>,
    /// Maximum number of rows to return. Defaults to 100.
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Optional filters for `/airlines/list`.
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AirlineListParams {
    /// Airline ids to filter by (repeatable).
    #[serde(default)]
    pub airline_id: Option<Vec<i32>>,
    /// Airline names to filter by (repeatable).
    #[serde(default)]
    pub name: Option<Vec<String>>,
    /// Alliances to filter by (repeatable).
    #[serde(default)]
    pub alliance: Option<Vec<String>>,
    /// Maximum number of rows to return. Defaults to 100.
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Optional filters for `/flights/list`. Airport filters take IATA codes.
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FlightListParams {
    /// Departure airport IATA codes to filter by (repeatable).
    #[serde(default)]
    pub departure_airport: Option<Vec<String>>,
    /// Arrival airport IATA codes to filter by (repeatable).
    #[serde(default)]
    pub arrival_airport: Option<Vec<String>>,
    /// Departure dates (YYYY-MM-DD) to filter by (repeatable).
    #[serde(default)]
    pub departure_date: Option<Vec<String>>,
    /// Arrival dates (YYYY-MM-DD) to filter by (repeatable).
    #[serde(default)]
    pub arrival_date: Option<Vec<String>>,
    /// Maximum number of rows to return. Defaults to 100.
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Optional filters for `/passengers/list`.
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PassengerListParams {
    /// Passenger ids to filter by (repeatable).
    #[serde(default)]
    pub passenger_id: Option<Vec<i32>>,
    /// First names to filter by (repeatable).
    #[serde(default)]
    pub first_name: Option<Vec<String>>,
    /// Last names to filter by (repeatable).
    #[serde(default)]
    pub last_name: Option<Vec<String>>,
    /// Passport numbers to filter by (repeatable).
    #[serde(default)]
    pub passport_number: Option<Vec<String>>,
    /// Maximum number of rows to return. Defaults to 100.
    #[serde(default)]
    pub limit: Option<u32>,
}

pub fn json_ok(data: JsonValue) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::OK,
        Json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        }),
    )
}

pub fn json_ok_empty() -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::OK,
        Json(ApiResponse {
            success: true,
            data: None,
            error: None,
        }),
    )
}

pub fn json_error(err: &Error) -> (StatusCode, Json<ApiResponse>) {
    let status = match err {
        Error::InvalidResourceType(_)
        | Error::InvalidFilterName { .. }
        | Error::ReferencedEntityMissing { .. } => StatusCode::BAD_REQUEST,
        Error::NotFound { .. } => StatusCode::NOT_FOUND,
        Error::Database(db_err) => {
            error!(error = %db_err, "storage failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (
        status,
        Json(ApiResponse {
            success: false,
            data: None,
            error: Some(err.to_string()),
        }),
    )
}

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse {
            success: false,
            data: None,
            error: Some(format!("Invalid JSON body: {} (expected: {})", err, expected)),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_query_parameters_form_a_list() {
        let params: AirportListParams =
            serde_html_form::from_str("city=NYC&city=LA&limit=5").unwrap();
        assert_eq!(
            params.city,
            Some(vec!["NYC".to_string(), "LA".to_string()])
        );
        assert_eq!(params.country, None);
        assert_eq!(params.limit, Some(5));
    }

    #[test]
    fn absent_parameters_stay_absent() {
        let params: FlightListParams = serde_html_form::from_str("").unwrap();
        assert!(params.departure_airport.is_none());
        assert!(params.arrival_date.is_none());
        assert!(params.limit.is_none());
    }

    #[test]
    fn error_statuses_follow_the_documented_mapping() {
        let (status, _) = json_error(&Error::InvalidResourceType("bookings".to_string()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = json_error(&Error::ReferencedEntityMissing {
            resource: "airports",
            id: 999,
        });
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = json_error(&Error::NotFound {
            resource: "flights",
            id: 4,
        });
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
