use serde::Serialize;
use tracing::{error, warn};

use crate::env::EnvSource;
use crate::error::{Error, Result};

pub const API_URL_VAR: &str = "API_URL";

/// Stand-in root used when `API_URL` is absent and the gap is tolerated.
pub const UNDEFINED_ROOT: &str = "undefined";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    Jobs,
    Files,
    Labellings,
    Spectra,
}

impl Service {
    pub const ALL: [Service; 4] =
        [Service::Jobs, Service::Files, Service::Labellings, Service::Spectra];

    pub const fn suffix(self) -> &'static str {
        match self {
            Service::Jobs => "jobs",
            Service::Files => "files",
            Service::Labellings => "labellings",
            Service::Spectra => "spectra",
        }
    }
}

/// What to do when the root URL is not configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingRootPolicy {
    /// Derive every endpoint from [`UNDEFINED_ROOT`]; the problem only shows
    /// up later as failing requests.
    #[default]
    Tolerate,
    /// Refuse to produce a config.
    FailFast,
}

/// Base URLs of the backend services, all derived from one root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointConfig {
    base_job_api: String,
    base_file_api: String,
    base_labelling_api: String,
    base_spectra_api: String,
}

impl EndpointConfig {
    /// No validation or normalization: `root` is used verbatim.
    pub fn from_root(root: &str) -> Self {
        let join = |service: Service| format!("{}/{}", root, service.suffix());
        Self {
            base_job_api: join(Service::Jobs),
            base_file_api: join(Service::Files),
            base_labelling_api: join(Service::Labellings),
            base_spectra_api: join(Service::Spectra),
        }
    }

    pub fn base_job_api(&self) -> &str {
        &self.base_job_api
    }

    pub fn base_file_api(&self) -> &str {
        &self.base_file_api
    }

    pub fn base_labelling_api(&self) -> &str {
        &self.base_labelling_api
    }

    pub fn base_spectra_api(&self) -> &str {
        &self.base_spectra_api
    }

    pub fn endpoint(&self, service: Service) -> &str {
        match service {
            Service::Jobs => &self.base_job_api,
            Service::Files => &self.base_file_api,
            Service::Labellings => &self.base_labelling_api,
            Service::Spectra => &self.base_spectra_api,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Service, &str)> + '_ {
        Service::ALL.into_iter().map(move |service| (service, self.endpoint(service)))
    }
}

pub fn load_config(env: &impl EnvSource, policy: MissingRootPolicy) -> Result<EndpointConfig> {
    match (env.var(API_URL_VAR), policy) {
        (None, MissingRootPolicy::FailFast) => {
            error!("{} is not set", API_URL_VAR);
            Err(Error::missing_var(API_URL_VAR))
        }
        (root, _) => Ok(derive(root)),
    }
}

/// [`load_config`] under [`MissingRootPolicy::Tolerate`], which cannot fail.
pub fn load_config_tolerant(env: &impl EnvSource) -> EndpointConfig {
    derive(env.var(API_URL_VAR))
}

fn derive(root: Option<String>) -> EndpointConfig {
    match root {
        Some(root) => EndpointConfig::from_root(&root),
        None => {
            warn!("{} is not set, endpoints fall back to {:?}", API_URL_VAR, UNDEFINED_ROOT);
            EndpointConfig::from_root(UNDEFINED_ROOT)
        }
    }
}
