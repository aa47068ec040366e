pub mod handlers;
pub mod types;

pub use handlers::{create_room, list_rooms};
