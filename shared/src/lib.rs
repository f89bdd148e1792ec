pub mod endpoints;
pub mod env;
pub mod error;

pub use endpoints::{
    load_config, load_config_tolerant, EndpointConfig, MissingRootPolicy, Service, API_URL_VAR,
    UNDEFINED_ROOT,
};
pub use env::{BuildEnv, EnvSource, MapEnv, ProcessEnv};
pub use error::{Error, ErrorCode, Result};
