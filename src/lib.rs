pub mod config;
pub mod db;
pub mod envelope;
pub mod error;
pub mod observability;
pub mod routes;

pub use config::Config;
pub use routes::{AppState, router};
