use crate::domain::{
    Airline, AirlineCreate, Airport, AirportCreate, Flight, FlightCreate, FlightUpdate,
    Passenger, PassengerCreate, PassengerUpdate,
};
use crate::transport::http::handlers::{airlines, airports, flights, health, passengers};
use crate::transport::http::types::ApiResponse;
use axum::routing::{delete, get, post, put};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        airports::create_airport_handler,
        airports::list_airports_handler,
        airlines::create_airline_handler,
        airlines::list_airlines_handler,
        flights::create_flight_handler,
        flights::list_flights_handler,
        flights::update_flight_handler,
        flights::delete_flight_handler,
        passengers::create_passenger_handler,
        passengers::list_passengers_handler,
        passengers::update_passenger_handler,
        passengers::delete_passenger_handler
    ),
    components(schemas(
        ApiResponse,
        Airport,
        AirportCreate,
        Airline,
        AirlineCreate,
        Flight,
        FlightCreate,
        FlightUpdate,
        Passenger,
        PassengerCreate,
        PassengerUpdate
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/healthchecker", get(health::healthcheck_handler))
        .route("/airports/create", post(airports::create_airport_handler))
        .route("/airports/list", get(airports::list_airports_handler))
        .route("/airlines/create", post(airlines::create_airline_handler))
        .route("/airlines/list", get(airlines::list_airlines_handler))
        .route("/flights/create", post(flights::create_flight_handler))
        .route("/flights/list", get(flights::list_flights_handler))
        .route("/flights/update/:flight_id", put(flights::update_flight_handler))
        .route("/flights/delete/:flight_id", delete(flights::delete_flight_handler))
        .route("/passengers/create", post(passengers::create_passenger_handler))
        .route("/passengers/list", get(passengers::list_passengers_handler))
        .route(
            "/passengers/update/:passenger_id",
            put(passengers::update_passenger_handler),
        )
        .route(
            "/passengers/delete/:passenger_id",
            delete(passengers::delete_passenger_handler),
        )
        .with_state(app_state)
}
