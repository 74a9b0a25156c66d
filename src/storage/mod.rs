pub mod query;
pub mod store;

pub use query::{build_list_query, DEFAULT_CAP, MAX_CAP};
pub use store::RecordStore;
