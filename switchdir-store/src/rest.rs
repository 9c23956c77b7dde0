//! HTTP record store
//!
//! Talks to a PostgREST-style REST endpoint. Queries become URL
//! parameters on `GET {base}/rest/v1/{table}`:
//!
//! ```text
//! select=id,hw_sku,chip_name
//! or=(hw_sku.ilike."*tom*",chip_name.ilike."*tom*")
//! chip_name=eq.Tomahawk
//! id=neq.42
//! limit=8
//! ```

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use tokio::time::timeout;
use tracing::{debug, trace, warn};
use url::Url;

use switchdir_core::{Filter, Query};
use switchdir_types::DeviceRecord;

use crate::{config::StoreConfig, error::*, RecordStore};

/// Path of the REST API below the store base URL
const REST_PATH: [&str; 2] = ["rest", "v1"];

/// HTTP record store
pub struct RestStore {
    base_url: Url,
    api_key: Option<String>,
    client: Client,
    timeout: Duration,
}

impl RestStore {
    /// Create a store client from config
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            base_url: config.url.clone(),
            api_key: config.api_key.clone(),
            client,
            timeout: config.timeout,
        })
    }

    /// Create a store client from `SWITCHDIR_STORE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(&StoreConfig::from_env()?)
    }

    /// Set request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// URL of `table` on this store
    pub fn table_url(&self, table: &str) -> Result<Url> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(REST_PATH)
            .push(table);

        Ok(url)
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(key) = &self.api_key {
            let invalid = |_| Error::Config("API key is not a valid header value".into());

            headers.insert("apikey", HeaderValue::from_str(key).map_err(invalid)?);
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", key)).map_err(invalid)?,
            );
        }

        Ok(headers)
    }

    async fn send(&self, url: Url, params: &[(String, String)]) -> Result<Bytes> {
        let response = self
            .client
            .get(url)
            .headers(self.headers()?)
            .query(params)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("Store returned {}: {}", status, message);

            return Err(Error::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.bytes().await?)
    }
}

#[async_trait]
impl RecordStore for RestStore {
    async fn fetch(&self, query: &Query) -> Result<Vec<DeviceRecord>> {
        let url = self.table_url(&query.table)?;
        let params = query_params(query);

        trace!("GET {} {:?}", url, params);

        let body = timeout(self.timeout, self.send(url, &params))
            .await
            .map_err(|_| {
                warn!("Store request timed out after {:?}", self.timeout);
                Error::Timeout(self.timeout)
            })??;

        let rows = retain_matching(query, decode_rows(&body)?);

        debug!("Fetched {} rows from {}", rows.len(), query.table);

        Ok(rows)
    }

    fn endpoint(&self) -> String {
        self.base_url.to_string()
    }
}

/// Encode a query as REST parameters
pub fn query_params(query: &Query) -> Vec<(String, String)> {
    let mut params = vec![("select".to_string(), query.columns.select_list())];

    match &query.filter {
        Some(Filter::Eq(column, value)) => {
            params.push((column.name().to_string(), format!("eq.{}", value)));
        }
        Some(Filter::AnyContains(columns, text)) => {
            let pattern = quote(&format!("*{}*", escape_like(text)));
            let terms: Vec<_> = columns
                .iter()
                .map(|c| format!("{}.ilike.{}", c.name(), pattern))
                .collect();

            params.push(("or".to_string(), format!("({})", terms.join(","))));
        }
        None => {}
    }

    if let Some(exclusion) = &query.exclude {
        params.push((
            exclusion.column.name().to_string(),
            format!("neq.{}", exclusion.value),
        ));
    }

    if let Some(limit) = query.limit {
        params.push(("limit".to_string(), limit.to_string()));
    }

    params
}

/// Escape LIKE wildcards so the text matches literally
///
/// PostgREST reads `*` in an ilike pattern as `%` and offers no escape
/// for it, so `a*b` also matches `aXXb` remotely. [`retain_matching`]
/// drops those rows again.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}

/// Double-quote a value inside a logic tree so `,` `(` `)` stay literal
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');

    for c in value.chars() {
        if matches!(c, '\\' | '"') {
            quoted.push('\\');
        }
        quoted.push(c);
    }

    quoted.push('"');
    quoted
}

fn decode_rows(body: &Bytes) -> Result<Vec<DeviceRecord>> {
    Ok(serde_json::from_slice(body)?)
}

/// Re-check returned rows against a contains filter
///
/// Only applied when every filtered column was selected. A row dropped
/// here still counted against the remote limit.
fn retain_matching(query: &Query, mut rows: Vec<DeviceRecord>) -> Vec<DeviceRecord> {
    if let Some(filter @ Filter::AnyContains(columns, _)) = &query.filter {
        if columns.iter().all(|c| query.columns.includes(*c)) {
            let before = rows.len();
            rows.retain(|row| filter.matches(row));

            if rows.len() < before {
                trace!("Dropped {} rows matched only by a wildcard", before - rows.len());
            }
        }
    }

    rows
}
