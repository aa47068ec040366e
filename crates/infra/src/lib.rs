pub mod models;
pub mod overlap;
pub mod repos;
pub mod store;

pub use store::{BookingOutcome, HallStore, MemoryStore, PgStore};
