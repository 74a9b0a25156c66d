//! Typed rows and write payloads for the four resource tables.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Airport {
    pub id: i32,
    /// IATA code
    pub code: Option<String>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AirportCreate {
    pub code: Option<String>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Airline {
    pub id: i32,
    /// IATA code
    pub code: String,
    pub name: String,
    pub alliance: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AirlineCreate {
    pub code: String,
    pub name: String,
    pub alliance: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Flight {
    pub id: i32,
    pub flight_status: Option<String>,
    pub flight_number: Option<String>,
    pub available_seats: Option<String>,
    pub departure_airport_id: i32,
    pub arrival_airport_id: i32,
    /// YYYY-MM-DD
    pub departure_date: String,
    /// YYYY-MM-DD
    pub arrival_date: String,
    /// Minutes
    pub duration: i32,
    pub fare: f64,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct FlightCreate {
    pub flight_status: Option<String>,
    pub flight_number: Option<String>,
    pub available_seats: Option<String>,
    pub departure_airport_id: i32,
    pub arrival_airport_id: i32,
    pub departure_date: String,
    pub arrival_date: String,
    pub duration: i32,
    pub fare: f64,
}

/// Partial update: only the supplied fields replace the stored ones.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct FlightUpdate {
    pub flight_status: Option<String>,
    pub flight_number: Option<String>,
    pub available_seats: Option<String>,
    pub departure_airport_id: Option<i32>,
    pub arrival_airport_id: Option<i32>,
    pub departure_date: Option<String>,
    pub arrival_date: Option<String>,
    pub duration: Option<i32>,
    pub fare: Option<f64>,
}

impl FlightUpdate {
    /// Overlays the supplied fields onto an existing row (read-modify-write).
    pub fn apply(self, existing: Flight) -> Flight {
        Flight {
            id: existing.id,
            flight_status: self.flight_status.or(existing.flight_status),
            flight_number: self.flight_number.or(existing.flight_number),
            available_seats: self.available_seats.or(existing.available_seats),
            departure_airport_id: self
                .departure_airport_id
                .unwrap_or(existing.departure_airport_id),
            arrival_airport_id: self
                .arrival_airport_id
                .unwrap_or(existing.arrival_airport_id),
            departure_date: self.departure_date.unwrap_or(existing.departure_date),
            arrival_date: self.arrival_date.unwrap_or(existing.arrival_date),
            duration: self.duration.unwrap_or(existing.duration),
            fare: self.fare.unwrap_or(existing.fare),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Passenger {
    pub id: i32,
    pub flight_id: i32,
    pub first_name: String,
    pub last_name: String,
    /// YYYY-MM-DD
    pub date_of_birth: String,
    pub passport_number: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PassengerCreate {
    pub flight_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub passport_number: String,
}

/// Partial update: only the supplied fields replace the stored ones.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PassengerUpdate {
    pub flight_id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub passport_number: Option<String>,
}

impl PassengerUpdate {
    /// Overlays the supplied fields onto an existing row (read-modify-write).
    pub fn apply(self, existing: Passenger) -> Passenger {
        Passenger {
            id: existing.id,
            flight_id: self.flight_id.unwrap_or(existing.flight_id),
            first_name: self.first_name.unwrap_or(existing.first_name),
            last_name: self.last_name.unwrap_or(existing.last_name),
            date_of_birth: self.date_of_birth.unwrap_or(existing.date_of_birth),
            passport_number: self.passport_number.unwrap_or(existing.passport_number),
        }
    }
}
