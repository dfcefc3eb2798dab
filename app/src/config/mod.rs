use indexmap::IndexMap;
use neptune::{util::EnvProvider, NeptuneConfig};
use serde::Deserialize;

#[cfg(test)]
mod tests;

/// Optional settings file. Values in the process environment win over the file.
#[derive(Deserialize, Debug, Default, PartialEq, Eq, Clone)]
pub struct Config {
    pub neptune: Option<Neptune>,
}

impl Config {
    pub fn from_toml(toml: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml)
    }

    pub fn neptune(&self) -> Neptune {
        match &self.neptune {
            Some(n) => n.clone(),
            None => Neptune::default(),
        }
    }

    pub fn create_neptune_config(&self, env: &dyn EnvProvider) -> NeptuneConfig {
        let env = LayeredEnvProvider {
            env,
            fallback: self.neptune().as_vars(),
        };
        NeptuneConfig::from_env(&env)
    }
}

#[derive(Deserialize, Debug, Default, PartialEq, Eq, Clone)]
pub struct Neptune {
    pub webapp_name: Option<String>,
    pub server_url: Option<String>,
    pub api_base: Option<String>,
    pub sap_client: Option<String>,
    pub use_proxy: Option<bool>,
    pub proxy_base: Option<String>,
}
impl Neptune {
    /// Maps the set values onto the variable names [NeptuneConfig] reads.
    fn as_vars(&self) -> IndexMap<&'static str, String> {
        let use_proxy = self.use_proxy.map(|p| p.to_string());
        [
            (NeptuneConfig::WEBAPP_NAME_VAR, &self.webapp_name),
            (NeptuneConfig::SERVER_URL_VAR, &self.server_url),
            (NeptuneConfig::API_BASE_VAR, &self.api_base),
            (NeptuneConfig::SAP_CLIENT_VAR, &self.sap_client),
            (NeptuneConfig::USE_PROXY_VAR, &use_proxy),
            (NeptuneConfig::PROXY_BASE_VAR, &self.proxy_base),
        ]
        .into_iter()
        .filter_map(|(name, value)| Some((name, value.clone()?)))
        .collect()
    }
}

/// Reads from `env` first and falls back to values from the settings file.
struct LayeredEnvProvider<'a> {
    env: &'a dyn EnvProvider,
    fallback: IndexMap<&'static str, String>,
}
impl EnvProvider for LayeredEnvProvider<'_> {
    fn var(&self, name: &str) -> Option<String> {
        self.env
            .var(name)
            .filter(|v| !v.is_empty())
            .or_else(|| self.fallback.get(name).cloned())
    }
}
