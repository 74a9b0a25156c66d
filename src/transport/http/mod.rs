pub mod router;
pub mod types;
pub mod handlers {
    pub mod airlines;
    pub mod airports;
    pub mod flights;
    pub mod health;
    pub mod passengers;
}

pub use router::{create_router, ApiDoc};
pub use types::AppState;
