//! Domain model: entity definitions, filter inputs, typed records.

pub mod entity;
pub mod filter;
pub mod records;

pub use entity::{EntityDef, EntityRegistry, FilterKind, FilterSpec};
pub use filter::{FilterMap, FilterValue};
pub use records::{
    Airline, AirlineCreate, Airport, AirportCreate, Flight, FlightCreate, FlightUpdate,
    Passenger, PassengerCreate, PassengerUpdate,
};
