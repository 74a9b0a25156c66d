// src/bin/db_seed.rs
//
// Fills the database with generated sample data: 10 airports, 15 airlines,
// 50 flights, 25 passengers.

use chrono::{Duration, Utc};
use flight_tracker::domain::{AirlineCreate, AirportCreate, FlightCreate, PassengerCreate};
use flight_tracker::{AppConfig, FlightDataService, RecordStore};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

const AIRPORTS: &[(&str, &str, &str, &str)] = &[
    ("JFK", "John F. Kennedy International", "New York", "United States"),
    ("LAX", "Los Angeles International", "Los Angeles", "United States"),
    ("ORD", "O'Hare International", "Chicago", "United States"),
    ("CDG", "Charles de Gaulle", "Paris", "France"),
    ("LHR", "Heathrow", "London", "United Kingdom"),
    ("FRA", "Frankfurt am Main", "Frankfurt", "Germany"),
    ("AMS", "Schiphol", "Amsterdam", "Netherlands"),
    ("NRT", "Narita International", "Tokyo", "Japan"),
    ("SYD", "Kingsford Smith", "Sydney", "Australia"),
    ("GRU", "Guarulhos International", "Sao Paulo", "Brazil"),
];

const AIRLINES: &[(&str, &str, Option<&str>)] = &[
    ("UA", "United Airlines", Some("Star Alliance")),
    ("LH", "Lufthansa", Some("Star Alliance")),
    ("AC", "Air Canada", Some("Star Alliance")),
    ("SQ", "Singapore Airlines", Some("Star Alliance")),
    ("NH", "All Nippon Airways", Some("Star Alliance")),
    ("AF", "Air France", Some("SkyTeam")),
    ("KL", "KLM", Some("SkyTeam")),
    ("DL", "Delta Air Lines", Some("SkyTeam")),
    ("KE", "Korean Air", Some("SkyTeam")),
    ("AA", "American Airlines", Some("Oneworld")),
    ("BA", "British Airways", Some("Oneworld")),
    ("QF", "Qantas", Some("Oneworld")),
    ("IB", "Iberia", Some("Oneworld")),
    ("WN", "Southwest Airlines", None),
    ("FR", "Ryanair", None),
];

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas",
];

const STATUSES: &[&str] = &["On Time", "Delayed", "Cancelled"];

const NUM_FLIGHTS: usize = 50;
const NUM_PASSENGERS: usize = 25;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;
    let store = RecordStore::connect(&config).await?;
    store.migrate().await?;
    let service = FlightDataService::new(store);

    let mut rng = rand::thread_rng();
    let today = Utc::now().date_naive();

    let mut airport_ids = Vec::with_capacity(AIRPORTS.len());
    for &(code, name, city, country) in AIRPORTS {
        let created = service
            .create_airport(AirportCreate {
                code: Some(code.to_string()),
                name: Some(name.to_string()),
                city: Some(city.to_string()),
                country: Some(country.to_string()),
            })
            .await?;
        airport_ids.push(created.id);
    }
    info!(count = airport_ids.len(), "airports seeded");

    let mut airline_codes = Vec::with_capacity(AIRLINES.len());
    for &(code, name, alliance) in AIRLINES {
        service
            .create_airline(AirlineCreate {
                code: code.to_string(),
                name: name.to_string(),
                alliance: alliance.map(str::to_string),
            })
            .await?;
        airline_codes.push(code);
    }
    info!(count = airline_codes.len(), "airlines seeded");

    let mut flight_ids = Vec::with_capacity(NUM_FLIGHTS);
    for _ in 0..NUM_FLIGHTS {
        let departure_date = today + Duration::days(rng.gen_range(1..=180));
        let arrival_date = departure_date + Duration::days(rng.gen_range(1..=12));
        let airline = airline_codes
            .choose(&mut rng)
            .copied()
            .unwrap_or("UA");
        let created = service
            .create_flight(FlightCreate {
                flight_status: STATUSES.choose(&mut rng).map(|s| s.to_string()),
                flight_number: Some(format!("{}{}", airline, rng.gen_range(100..=900))),
                available_seats: Some(rng.gen_range(0..=250).to_string()),
                departure_airport_id: *airport_ids.choose(&mut rng).expect("airports seeded"),
                arrival_airport_id: *airport_ids.choose(&mut rng).expect("airports seeded"),
                departure_date: departure_date.format("%Y-%m-%d").to_string(),
                arrival_date: arrival_date.format("%Y-%m-%d").to_string(),
                duration: rng.gen_range(30..=360),
                fare: rng.gen_range(1_000..=100_000) as f64 / 100.0,
            })
            .await?;
        flight_ids.push(created.id);
    }
    info!(count = flight_ids.len(), "flights seeded");

    for _ in 0..NUM_PASSENGERS {
        let birth_date = today - Duration::days(rng.gen_range(6_570..=27_375));
        service
            .create_passenger(PassengerCreate {
                flight_id: *flight_ids.choose(&mut rng).expect("flights seeded"),
                first_name: FIRST_NAMES
                    .choose(&mut rng)
                    .map(|s| s.to_string())
                    .unwrap_or_default(),
                last_name: LAST_NAMES
                    .choose(&mut rng)
                    .map(|s| s.to_string())
                    .unwrap_or_default(),
                date_of_birth: birth_date.format("%Y-%m-%d").to_string(),
                passport_number: format!("P{:08}", rng.gen_range(0..100_000_000u32)),
            })
            .await?;
    }
    info!(count = NUM_PASSENGERS, "passengers seeded");

    Ok(())
}
