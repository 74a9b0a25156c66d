//! Application service: CRUD operations over the four resource collections.
//!
//! One consolidated service in front of the record store. Read paths go
//! through the generic filter composition; write paths validate referenced
//! rows with the existence probe before touching the database.

use tracing::info;

use crate::domain::entity::EntityDef;
use crate::domain::{
    Airline, AirlineCreate, Airport, AirportCreate, EntityRegistry, FilterMap, Flight,
    FlightCreate, FlightUpdate, Passenger, PassengerCreate, PassengerUpdate,
};
use crate::error::{Error, Result};
use crate::storage::RecordStore;

pub struct FlightDataService {
    store: RecordStore,
    registry: EntityRegistry,
}

impl FlightDataService {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            registry: EntityRegistry::builtin(),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    fn def(&self, resource: &str) -> Result<&'static EntityDef> {
        self.registry.get(resource)
    }

    // --- Airports ---

    pub async fn create_airport(&self, airport: AirportCreate) -> Result<Airport> {
        let created = sqlx::query_as::<_, Airport>(
            "INSERT INTO airports (code, name, city, country) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&airport.code)
        .bind(&airport.name)
        .bind(&airport.city)
        .bind(&airport.country)
        .fetch_one(self.store.pool())
        .await?;
        info!(id = created.id, code = ?created.code, "airport created");
        Ok(created)
    }

    pub async fn list_airports(
        &self,
        airport_id: Option<Vec<i32>>,
        city: Option<Vec<String>>,
        country: Option<Vec<String>>,
        limit: u32,
    ) -> Result<Vec<Airport>> {
        let def = self.def("airports")?;
        let filters = FilterMap::new()
            .maybe_ints("airport_id", airport_id)
            .maybe_texts("city", city)
            .maybe_texts("country", country);
        self.store.list(def, &filters, limit).await
    }

    // --- Airlines ---

    pub async fn create_airline(&self, airline: AirlineCreate) -> Result<Airline> {
        let created = sqlx::query_as::<_, Airline>(
            "INSERT INTO airlines (code, name, alliance) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&airline.code)
        .bind(&airline.name)
        .bind(&airline.alliance)
        .fetch_one(self.store.pool())
        .await?;
        info!(id = created.id, code = %created.code, "airline created");
        Ok(created)
    }

    pub async fn list_airlines(
        &self,
        airline_id: Option<Vec<i32>>,
        name: Option<Vec<String>>,
        alliance: Option<Vec<String>>,
        limit: u32,
    ) -> Result<Vec<Airline>> {
        let def = self.def("airlines")?;
        let filters = FilterMap::new()
            .maybe_ints("airline_id", airline_id)
            .maybe_texts("name", name)
            .maybe_texts("alliance", alliance);
        self.store.list(def, &filters, limit).await
    }

    // --- Flights ---

    pub async fn create_flight(&self, flight: FlightCreate) -> Result<Flight> {
        // Only the departure airport is probed before the insert; the
        // arrival reference is still enforced by the foreign key.
        let airports = self.def("airports")?;
        if !self
            .store
            .exists_by_id(airports, flight.departure_airport_id)
            .await?
        {
            return Err(Error::ReferencedEntityMissing {
                resource: "airports",
                id: flight.departure_airport_id,
            });
        }
        let created = sqlx::query_as::<_, Flight>(
            "INSERT INTO flights (flight_status, flight_number, available_seats, \
             departure_airport_id, arrival_airport_id, departure_date, arrival_date, \
             duration, fare) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(&flight.flight_status)
        .bind(&flight.flight_number)
        .bind(&flight.available_seats)
        .bind(flight.departure_airport_id)
        .bind(flight.arrival_airport_id)
        .bind(&flight.departure_date)
        .bind(&flight.arrival_date)
        .bind(flight.duration)
        .bind(flight.fare)
        .fetch_one(self.store.pool())
        .await?;
        info!(id = created.id, "flight created");
        Ok(created)
    }

    pub async fn list_flights(
        &self,
        departure_airport: Option<Vec<String>>,
        arrival_airport: Option<Vec<String>>,
        departure_date: Option<Vec<String>>,
        arrival_date: Option<Vec<String>>,
        limit: u32,
    ) -> Result<Vec<Flight>> {
        let def = self.def("flights")?;
        // Airport filters arrive as IATA codes; membership is composed over
        // the resolved ids. Codes matching no airport resolve to an empty
        // list, which matches nothing.
        let departure_ids = match departure_airport {
            Some(codes) => Some(self.airport_ids_for_codes(codes).await?),
            None => None,
        };
        let arrival_ids = match arrival_airport {
            Some(codes) => Some(self.airport_ids_for_codes(codes).await?),
            None => None,
        };
        let filters = FilterMap::new()
            .maybe_ints("departure_airport", departure_ids)
            .maybe_ints("arrival_airport", arrival_ids)
            .maybe_texts("departure_date", departure_date)
            .maybe_texts("arrival_date", arrival_date);
        self.store.list(def, &filters, limit).await
    }

    async fn airport_ids_for_codes(&self, codes: Vec<String>) -> Result<Vec<i32>> {
        let ids = sqlx::query_scalar::<_, i32>("SELECT id FROM airports WHERE code = ANY($1)")
            .bind(codes)
            .fetch_all(self.store.pool())
            .await?;
        Ok(ids)
    }

    pub async fn get_flight(&self, id: i32) -> Result<Option<Flight>> {
        let flight = sqlx::query_as::<_, Flight>("SELECT * FROM flights WHERE id = $1")
            .bind(id)
            .fetch_optional(self.store.pool())
            .await?;
        Ok(flight)
    }

    pub async fn update_flight(&self, id: i32, update: FlightUpdate) -> Result<Flight> {
        // Read-modify-write: fetch, overlay the supplied fields, persist.
        let existing = self.get_flight(id).await?.ok_or(Error::NotFound {
            resource: "flights",
            id,
        })?;
        let merged = update.apply(existing);
        let updated = sqlx::query_as::<_, Flight>(
            "UPDATE flights SET flight_status = $2, flight_number = $3, \
             available_seats = $4, departure_airport_id = $5, arrival_airport_id = $6, \
             departure_date = $7, arrival_date = $8, duration = $9, fare = $10 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&merged.flight_status)
        .bind(&merged.flight_number)
        .bind(&merged.available_seats)
        .bind(merged.departure_airport_id)
        .bind(merged.arrival_airport_id)
        .bind(&merged.departure_date)
        .bind(&merged.arrival_date)
        .bind(merged.duration)
        .bind(merged.fare)
        .fetch_one(self.store.pool())
        .await?;
        info!(id, "flight updated");
        Ok(updated)
    }

    pub async fn delete_flight(&self, id: i32) -> Result<()> {
        let deleted = sqlx::query_scalar::<_, i32>("DELETE FROM flights WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(self.store.pool())
            .await?;
        match deleted {
            Some(_) => {
                info!(id, "flight deleted");
                Ok(())
            }
            None => Err(Error::NotFound {
                resource: "flights",
                id,
            }),
        }
    }

    // --- Passengers ---

    pub async fn create_passenger(&self, passenger: PassengerCreate) -> Result<Passenger> {
        let flights = self.def("flights")?;
        if !self.store.exists_by_id(flights, passenger.flight_id).await? {
            return Err(Error::ReferencedEntityMissing {
                resource: "flights",
                id: passenger.flight_id,
            });
        }
        let created = sqlx::query_as::<_, Passenger>(
            "INSERT INTO passengers (flight_id, first_name, last_name, date_of_birth, \
             passport_number) VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(passenger.flight_id)
        .bind(&passenger.first_name)
        .bind(&passenger.last_name)
        .bind(&passenger.date_of_birth)
        .bind(&passenger.passport_number)
        .fetch_one(self.store.pool())
        .await?;
        info!(id = created.id, "passenger created");
        Ok(created)
    }

    pub async fn list_passengers(
        &self,
        passenger_id: Option<Vec<i32>>,
        first_name: Option<Vec<String>>,
        last_name: Option<Vec<String>>,
        passport_number: Option<Vec<String>>,
        limit: u32,
    ) -> Result<Vec<Passenger>> {
        let def = self.def("passengers")?;
        let filters = FilterMap::new()
            .maybe_ints("passenger_id", passenger_id)
            .maybe_texts("first_name", first_name)
            .maybe_texts("last_name", last_name)
            .maybe_texts("passport_number", passport_number);
        self.store.list(def, &filters, limit).await
    }

    pub async fn get_passenger(&self, id: i32) -> Result<Option<Passenger>> {
        let passenger = sqlx::query_as::<_, Passenger>("SELECT * FROM passengers WHERE id = $1")
            .bind(id)
            .fetch_optional(self.store.pool())
            .await?;
        Ok(passenger)
    }

    pub async fn update_passenger(&self, id: i32, update: PassengerUpdate) -> Result<Passenger> {
        let existing = self.get_passenger(id).await?.ok_or(Error::NotFound {
            resource: "passengers",
            id,
        })?;
        let merged = update.apply(existing);
        let updated = sqlx::query_as::<_, Passenger>(
            "UPDATE passengers SET flight_id = $2, first_name = $3, last_name = $4, \
             date_of_birth = $5, passport_number = $6 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(merged.flight_id)
        .bind(&merged.first_name)
        .bind(&merged.last_name)
        .bind(&merged.date_of_birth)
        .bind(&merged.passport_number)
        .fetch_one(self.store.pool())
        .await?;
        info!(id, "passenger updated");
        Ok(updated)
    }

    pub async fn delete_passenger(&self, id: i32) -> Result<()> {
        let deleted =
            sqlx::query_scalar::<_, i32>("DELETE FROM passengers WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(self.store.pool())
                .await?;
        match deleted {
            Some(_) => {
                info!(id, "passenger deleted");
                Ok(())
            }
            None => Err(Error::NotFound {
                resource: "passengers",
                id,
            }),
        }
    }
}
