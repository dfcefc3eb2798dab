use std::borrow::Cow;

use indexmap::IndexMap;
use serde_json::Value;

use crate::err::QueryError;


/// Key carrying the SAP client id
pub const SAP_CLIENT: &str = "sap-client";
pub const IV_PARAMS: &str = "IV_PARAMS";
pub const IV_SORTBY: &str = "IV_SORTBY";
pub const IS_PAGING: &str = "IS_PAGING";

/// Keys whose structured values are sent as embedded JSON text
pub const JSON_ENCODED_KEYS: [&str; 3] = [IV_PARAMS, IV_SORTBY, IS_PAGING];

/// Ordered bag of query parameters for a Neptune API call.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct QueryParams {
    params: IndexMap<String, Value>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object into parameters, keeping the key order of the document.
    pub fn from_json(json: &str) -> Result<Self, QueryError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| QueryError::InvalidJson(e.to_string()))?;
        match value {
            Value::Object(map) => Ok(map.into()),
            _ => Err(QueryError::NotAnObject),
        }
    }

    /// Inserts or replaces a parameter. Replacing keeps the original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.params.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets [IV_PARAMS] to the serialized form of `value`
    #[cfg(feature = "serde")]
    pub fn with_params(self, value: &impl serde::Serialize) -> Result<Self, QueryError> {
        self.with_serialized(IV_PARAMS, value)
    }

    /// Sets [IV_SORTBY] to the serialized form of `value`
    #[cfg(feature = "serde")]
    pub fn with_sort_by(self, value: &impl serde::Serialize) -> Result<Self, QueryError> {
        self.with_serialized(IV_SORTBY, value)
    }

    /// Sets [IS_PAGING] to the serialized form of `value`
    #[cfg(feature = "serde")]
    pub fn with_paging(self, value: &impl serde::Serialize) -> Result<Self, QueryError> {
        self.with_serialized(IS_PAGING, value)
    }

    #[cfg(feature = "serde")]
    fn with_serialized(self, key: &str, value: &impl serde::Serialize) -> Result<Self, QueryError> {
        let value = serde_json::to_value(value)?;
        Ok(self.with(key, value))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.params.iter()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Pairs as they are put on the wire. Strings are sent raw, `null` is left out
    /// and everything else is sent as JSON text.
    pub fn query_pairs(&self) -> impl Iterator<Item = (&str, Cow<'_, str>)> {
        self.params.iter().filter_map(|(key, value)| {
            let value = match value {
                Value::Null => return None,
                Value::String(s) => Cow::Borrowed(s.as_str()),
                other => Cow::Owned(other.to_string()),
            };
            Some((key.as_str(), value))
        })
    }

    /// Encodes all pairs as `application/x-www-form-urlencoded`
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_pairs())
            .finish()
    }
}

impl From<IndexMap<String, Value>> for QueryParams {
    fn from(params: IndexMap<String, Value>) -> Self {
        Self { params }
    }
}
impl From<serde_json::Map<String, Value>> for QueryParams {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}
impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let params = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { params }
    }
}
impl<'a> IntoIterator for &'a QueryParams {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

/// Prepares `params` for a request: `sap-client` goes first, then every caller
/// pair in order. Structured values of [JSON_ENCODED_KEYS] become JSON strings.
///
/// Caller values win, including a caller supplied `sap-client`.
pub fn normalize(params: &QueryParams, sap_client: &str) -> QueryParams {
    let mut normalized = QueryParams::new().with(SAP_CLIENT, sap_client);
    for (key, value) in params {
        if key == SAP_CLIENT {
            tracing::debug!(configured = sap_client, requested = %value, "sap-client overridden");
        }
        let value = if JSON_ENCODED_KEYS.contains(&key.as_str()) && is_structured(value) {
            Value::String(value.to_string())
        } else {
            value.clone()
        };
        normalized.insert(key.clone(), value);
    }
    normalized
}

fn is_structured(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}
