use shared::{
    load_config, load_config_tolerant, BuildEnv, EndpointConfig, MissingRootPolicy, API_URL_VAR,
};
use std::sync::OnceLock;

static CONFIG: OnceLock<EndpointConfig> = OnceLock::new();

fn build_env() -> BuildEnv {
    BuildEnv::new().with(API_URL_VAR, option_env!("API_URL"))
}

/// Endpoints baked in at build time. Built on first call, shared afterwards.
///
/// A missing `API_URL` is tolerated: every endpoint then starts with `undefined/`.
pub fn config() -> &'static EndpointConfig {
    CONFIG.get_or_init(|| load_config_tolerant(&build_env()))
}

/// Same instance as [`config`], but refuses to hand it out when `API_URL` was
/// not set at build time.
pub fn try_config() -> shared::Result<&'static EndpointConfig> {
    let loaded = load_config(&build_env(), MissingRootPolicy::FailFast)?;
    Ok(CONFIG.get_or_init(|| loaded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{ErrorCode, UNDEFINED_ROOT};

    fn expected_root() -> &'static str {
        option_env!("API_URL").unwrap_or(UNDEFINED_ROOT)
    }

    #[test]
    fn test_config_is_shared() {
        let first = config();
        let second = config();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first, &EndpointConfig::from_root(expected_root()));
    }

    #[test]
    fn test_try_config_matches_build_env() {
        match option_env!("API_URL") {
            Some(root) => {
                let config = try_config().unwrap();
                assert!(std::ptr::eq(config, super::config()));
                assert_eq!(config.base_spectra_api(), format!("{root}/spectra"));
            }
            None => {
                let err = try_config().unwrap_err();
                assert_eq!(err.code, ErrorCode::MissingConfiguration);
                assert_eq!(config().base_job_api(), "undefined/jobs");
            }
        }
    }

    #[test]
    fn test_try_config_agrees_with_load_config() {
        let direct = load_config(&build_env(), MissingRootPolicy::FailFast);
        match (direct, try_config()) {
            (Ok(expected), Ok(shared)) => assert_eq!(&expected, shared),
            (Err(expected), Err(err)) => assert_eq!(expected, err),
            (direct, via_singleton) => panic!("mismatch: {direct:?} vs {via_singleton:?}"),
        }
    }
}
