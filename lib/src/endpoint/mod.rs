use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::{
    config::NeptuneConfig,
    err::{EndpointError, InvalidUrlError},
    query::{self, QueryParams},
};


/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, the same set browsers escape
/// for a URI component.
pub const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds Neptune API urls from a fixed [NeptuneConfig].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointBuilder {
    config: NeptuneConfig,
}

impl EndpointBuilder {
    pub fn new(config: NeptuneConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NeptuneConfig {
        &self.config
    }

    /// Base url all endpoints are relative to.
    ///
    /// In proxy mode the real target (server without scheme + api base) is
    /// percent-encoded into a single path segment behind the proxy base.
    pub fn base_url(&self) -> String {
        let server_url = self.config.server_url();
        let api_base = self.config.api_base();
        if !self.config.use_proxy() {
            return format!("{server_url}{api_base}");
        }
        let proxied = format!("{}{api_base}", strip_scheme(server_url));
        let encoded = encode_uri_component(&proxied);
        let proxy_base = self.config.proxy_base();
        tracing::debug!(proxied = %proxied, proxy_base, "routing api through proxy");
        format!("{server_url}{proxy_base}/{encoded}")
    }

    /// Url of `operation` on `entity`, e.g. `equipment` and `Search`
    pub fn endpoint_url(&self, entity: &str, operation: &str) -> String {
        format!("{}/{entity}/{operation}", self.base_url())
    }

    /// [normalizes](query::normalize) `params` with the configured client id
    pub fn query_params(&self, params: &QueryParams) -> QueryParams {
        query::normalize(params, self.config.sap_client())
    }

    /// Full request url: [EndpointBuilder::endpoint_url] with the normalized
    /// `params` as query string.
    pub fn request_url(
        &self,
        entity: &str,
        operation: &str,
        params: &QueryParams,
    ) -> Result<url::Url, EndpointError> {
        let _span = tracing::info_span!("[Neptune(request_url)]", entity, operation).entered();
        let endpoint = self.endpoint_url(entity, operation);
        let mut url =
            url::Url::parse(&endpoint).map_err(|e| InvalidUrlError::new(&endpoint, e))?;
        let params = self.query_params(params);
        url.query_pairs_mut().extend_pairs(params.query_pairs());
        Ok(url)
    }
}

/// Removes one leading `http://` or `https://`, ignoring case.
pub fn strip_scheme(url: &str) -> &str {
    ["https://", "http://"]
        .iter()
        .find_map(|scheme| {
            let head = url.get(..scheme.len())?;
            head.eq_ignore_ascii_case(scheme)
                .then(|| &url[scheme.len()..])
        })
        .unwrap_or(url)
}

/// Percent-encodes `input` with the [URI_COMPONENT] set
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}
