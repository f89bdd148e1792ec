pub mod config;

pub use config::{config, try_config};
pub use shared::{EndpointConfig, Service};
