use crate::util::EnvProvider;


/// Connection settings for a Neptune backend.
///
/// Built once at startup and never mutated afterwards. Every string field is
/// guaranteed to be non-empty; unset or empty variables fall back to the
/// `*_DEFAULT` constants.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NeptuneConfig {
    webapp_name: String,
    server_url: String,
    api_base: String,
    sap_client: String,
    use_proxy: bool,
    proxy_base: String,
}

impl NeptuneConfig {
    pub const WEBAPP_NAME_VAR: &'static str = "VITE_NEPTUNE_WEBAPP_NAME";
    pub const SERVER_URL_VAR: &'static str = "VITE_NEPTUNE_SERVER_URL";
    pub const API_BASE_VAR: &'static str = "VITE_NEPTUNE_API_BASE";
    pub const SAP_CLIENT_VAR: &'static str = "VITE_SAP_CLIENT";
    pub const USE_PROXY_VAR: &'static str = "VITE_USE_PROXY";
    pub const PROXY_BASE_VAR: &'static str = "VITE_PROXY_BASE";

    pub const WEBAPP_NAME_DEFAULT: &'static str = "smoketest";
    pub const SERVER_URL_DEFAULT: &'static str = "https://dxp24.co.za:8081";
    pub const API_BASE_DEFAULT: &'static str = "/neptune/api";
    pub const SAP_CLIENT_DEFAULT: &'static str = "800";
    pub const PROXY_BASE_DEFAULT: &'static str = "/proxy";

    /// Reads all settings from `env`.
    ///
    /// Proxy mode is only enabled by the literal value `true`.
    pub fn from_env(env: &dyn EnvProvider) -> Self {
        let read = |name: &str, default: &str| -> String {
            env.var(name)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            webapp_name: read(Self::WEBAPP_NAME_VAR, Self::WEBAPP_NAME_DEFAULT),
            server_url: read(Self::SERVER_URL_VAR, Self::SERVER_URL_DEFAULT),
            api_base: read(Self::API_BASE_VAR, Self::API_BASE_DEFAULT),
            sap_client: read(Self::SAP_CLIENT_VAR, Self::SAP_CLIENT_DEFAULT),
            use_proxy: env.var(Self::USE_PROXY_VAR).as_deref() == Some("true"),
            proxy_base: read(Self::PROXY_BASE_VAR, Self::PROXY_BASE_DEFAULT),
        }
    }

    /// Name of the deployed web app
    pub fn webapp_name(&self) -> &str {
        &self.webapp_name
    }

    /// Origin of the Neptune server, may already contain a path
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Client id sent as `sap-client` with every request
    pub fn sap_client(&self) -> &str {
        &self.sap_client
    }

    pub fn use_proxy(&self) -> bool {
        self.use_proxy
    }

    pub fn proxy_base(&self) -> &str {
        &self.proxy_base
    }
}
impl Default for NeptuneConfig {
    fn default() -> Self {
        Self {
            webapp_name: Self::WEBAPP_NAME_DEFAULT.into(),
            server_url: Self::SERVER_URL_DEFAULT.into(),
            api_base: Self::API_BASE_DEFAULT.into(),
            sap_client: Self::SAP_CLIENT_DEFAULT.into(),
            use_proxy: false,
            proxy_base: Self::PROXY_BASE_DEFAULT.into(),
        }
    }
}
