//! Client for the remote filterable collection API.
//!
//! Every outbound request goes through `CollectionClient`. It owns the default scope
//! parameters, the query string encoding and the failure policy: any non-success
//! status, transport error or malformed body is logged and replaced by an empty array,
//! so handlers always receive either real data or an empty result.

use serde_json::{Map, Value};

use crate::server::{
    error::collection::CollectionError,
    model::{lookup::COHORT, query::QueryParams},
};

/// Field directive applied to every scoped query.
pub const DEFAULT_FIELDS: &str = "*,squads.*";

/// Filter key restricting persons to squads of the configured cohort.
pub const COHORT_FILTER: &str = "filter[squads][squad_id][cohort]";

#[derive(Clone)]
pub struct CollectionClient {
    http_client: reqwest::Client,
    api_base: String,
}

impl CollectionClient {
    /// Creates a client for the API rooted at `api_base`.
    ///
    /// # Arguments
    /// - `http_client` - Shared reqwest client (cheap to clone)
    /// - `api_base` - Base URL such as `https://fdnd.directus.app/items`; a trailing
    ///   slash is ignored
    pub fn new(http_client: reqwest::Client, api_base: impl Into<String>) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Self {
            http_client,
            api_base,
        }
    }

    /// Default scope applied by `fetch_items` before caller overrides.
    pub fn default_params() -> QueryParams {
        QueryParams::new()
            .with("fields", DEFAULT_FIELDS)
            .with(COHORT_FILTER, COHORT)
    }

    /// Fetches records scoped to the cohort.
    ///
    /// Starts from `default_params()` and applies `overrides` on top; caller values win
    /// on key collision.
    ///
    /// # Arguments
    /// - `endpoint` - Collection path, optionally with a sub-path such as `person/12`
    /// - `overrides` - Additional or replacing filter/sort/field directives
    ///
    /// # Returns
    /// The response's `data` value, or an empty array on any failure
    pub async fn fetch_items(&self, endpoint: &str, overrides: QueryParams) -> Value {
        let params = Self::default_params().merge(overrides);
        self.fetch_unscoped(endpoint, &params).await
    }

    /// Fetches records with exactly `params`, without the default scope.
    ///
    /// Same failure policy as `fetch_items`.
    pub async fn fetch_unscoped(&self, endpoint: &str, params: &QueryParams) -> Value {
        match self.get_data(endpoint, params).await {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(endpoint, "Falling back to empty result: {}", err);
                Value::Array(Vec::new())
            }
        }
    }

    /// Builds the full request URL for `endpoint` with `params` encoded as the query.
    pub fn url_for(&self, endpoint: &str, params: &QueryParams) -> String {
        let mut url = format!("{}/{}", self.api_base, endpoint.trim_start_matches('/'));
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.to_query_string());
        }
        url
    }

    async fn get_data(&self, endpoint: &str, params: &QueryParams) -> Result<Value, CollectionError> {
        let url = self.url_for(endpoint, params);
        tracing::debug!("GET {}", url);

        let response = self.http_client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CollectionError::Status { status, url });
        }

        let body = response.bytes().await?;
        let mut envelope: Value = serde_json::from_slice(&body)?;

        let data = envelope
            .as_object_mut()
            .and_then(|object| object.remove("data"))
            .filter(|data| !data.is_null());

        Ok(data.unwrap_or_else(|| Value::Array(Vec::new())))
    }
}

/// Decodes a collection response into records.
///
/// Records are taken over as returned. Non-array data yields an empty list, and array
/// entries that are not objects are not records, so they are left out.
pub fn decode_list<T: From<Map<String, Value>>>(data: Value) -> Vec<T> {
    let Value::Array(records) = data else {
        return Vec::new();
    };

    records
        .into_iter()
        .filter_map(|record| match record {
            Value::Object(record) => Some(T::from(record)),
            _ => None,
        })
        .collect()
}

/// Decodes a single-item response.
///
/// The API answers an unknown id with an error status (mapped to `[]` by the client) or
/// with no object at all, both of which become `None`.
pub fn decode_one<T: From<Map<String, Value>>>(data: Value) -> Option<T> {
    match data {
        Value::Object(record) => Some(T::from(record)),
        _ => None,
    }
}
