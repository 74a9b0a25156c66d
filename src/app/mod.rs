pub mod flight_data;

pub use flight_data::FlightDataService;
