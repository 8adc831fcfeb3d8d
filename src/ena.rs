use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::domain::TaxonId;
use crate::error::EnaError;
use crate::fields::{ORIGINAL_FIELDS, join_fields};

pub const SEARCH_URL: &str = "https://www.ebi.ac.uk/ena/portal/api/search";

pub const DEFAULT_FILE_TYPE: &str = "JSON";
pub const DEFAULT_INSTRUMENT_PLATFORM: &str = "illumina";
pub const DEFAULT_LIBRARY_SOURCE: &str = "TRANSCRIPTOMIC";

/// A `read_run` search scoped to one taxon subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub taxon_id: TaxonId,
    pub file_type: String,
    pub instrument_platform: String,
    pub library_source: String,
    /// Maximum number of records; `0` lets the portal return everything.
    pub limit: u64,
    pub fields: Vec<String>,
}

impl SearchQuery {
    pub fn new(taxon_id: TaxonId) -> Self {
        Self {
            taxon_id,
            file_type: DEFAULT_FILE_TYPE.to_string(),
            instrument_platform: DEFAULT_INSTRUMENT_PLATFORM.to_string(),
            library_source: DEFAULT_LIBRARY_SOURCE.to_string(),
            limit: 0,
            fields: ORIGINAL_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }

    pub fn with_file_type(mut self, file_type: impl Into<String>) -> Self {
        self.file_type = file_type.into();
        self
    }

    pub fn with_instrument_platform(mut self, platform: impl Into<String>) -> Self {
        self.instrument_platform = platform.into();
        self
    }

    pub fn with_library_source(mut self, source: impl Into<String>) -> Self {
        self.library_source = source.into();
        self
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }

    /// Query-string parameters in the order they are sent.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("query", self.taxon_id.tax_tree()),
            ("result", "read_run".to_string()),
            ("format", self.file_type.clone()),
            ("instrument_platform", self.instrument_platform.clone()),
            ("library_source", self.library_source.clone()),
            ("limit", self.limit.to_string()),
            ("fields", join_fields(&self.fields)),
        ]
    }
}

pub trait EnaClient: Send + Sync {
    /// Runs the search and returns the response body unmodified.
    fn search(&self, query: &SearchQuery) -> Result<Vec<u8>, EnaError>;
}

#[derive(Clone)]
pub struct EnaHttpClient {
    client: Client,
    base_url: String,
}

impl EnaHttpClient {
    pub fn new() -> Result<Self, EnaError> {
        Self::with_options(SEARCH_URL, None)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, EnaError> {
        Self::with_options(base_url, None)
    }

    /// `timeout: None` keeps the HTTP library's default.
    pub fn with_options(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, EnaError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("ena-taxon-metadata/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| EnaError::EnaHttp(err.to_string()))?,
        );
        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| EnaError::EnaHttp(err.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl EnaClient for EnaHttpClient {
    fn search(&self, query: &SearchQuery) -> Result<Vec<u8>, EnaError> {
        let params = query.params();
        tracing::debug!(
            url = %self.base_url,
            query = %query.taxon_id.tax_tree(),
            fields = query.fields.len(),
            "requesting ENA read_run metadata"
        );
        let response = self
            .client
            .get(self.base_url.as_str())
            .query(&params)
            .send()
            .map_err(|err| EnaError::EnaHttp(err.to_string()))?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .ok()
                .filter(|text| !text.trim().is_empty())
                .unwrap_or_else(|| "ENA request failed".to_string());
            return Err(EnaError::EnaStatus { status, message });
        }
        let bytes = response
            .bytes()
            .map_err(|err| EnaError::EnaHttp(err.to_string()))?;
        Ok(bytes.to_vec())
    }
}
