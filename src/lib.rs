pub mod app;
pub mod domain;
pub mod error;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::flight_data::FlightDataService;
pub use domain::entity::EntityRegistry;
pub use error::{Error, Result};
pub use infra::config::AppConfig;
pub use storage::store::RecordStore;
