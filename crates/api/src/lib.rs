pub mod app;
pub mod config;
pub mod domains;
pub mod error;
pub mod state;

pub use app::build_router;
pub use config::{AppConfig, StoreBackend};
pub use state::AppState;
