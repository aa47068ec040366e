pub mod handlers;
pub mod service;
pub mod types;

pub use handlers::{booking_history, list_customers};
