use std::collections::HashMap;

/// Source of configuration values keyed by environment variable name.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Reads the running process environment. Non-unicode values count as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Values captured at compile time, e.g. `BuildEnv::new().with("API_URL", option_env!("API_URL"))`.
///
/// A wasm front-end has no process environment, so whatever the bundler saw
/// at build time is all there is.
#[derive(Debug, Clone, Default)]
pub struct BuildEnv {
    vars: Vec<(&'static str, Option<&'static str>)>,
}

impl BuildEnv {
    pub const fn new() -> Self {
        Self { vars: Vec::new() }
    }

    pub fn with(mut self, key: &'static str, value: Option<&'static str>) -> Self {
        self.vars.retain(|(k, _)| *k != key);
        self.vars.push((key, value));
        self
    }
}

impl EnvSource for BuildEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars
            .iter()
            .find(|(k, _)| *k == key)
            .and_then(|(_, v)| v.map(str::to_string))
    }
}

/// In-memory variables for tests and explicit injection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
