use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::{FieldSet, TaxonId};
use crate::ena::{
    DEFAULT_INSTRUMENT_PLATFORM, DEFAULT_LIBRARY_SOURCE, SEARCH_URL, SearchQuery,
};
use crate::error::EnaError;
use crate::fields::validate_fields;

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub instrument_platform: Option<String>,
    #[serde(default)]
    pub library_source: Option<String>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub field_set: Option<FieldSet>,
    #[serde(default)]
    pub fields: Option<Vec<String>>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub instrument_platform: String,
    pub library_source: String,
    pub limit: u64,
    pub fields: Vec<String>,
    pub timeout: Option<Duration>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            base_url: SEARCH_URL.to_string(),
            instrument_platform: DEFAULT_INSTRUMENT_PLATFORM.to_string(),
            library_source: DEFAULT_LIBRARY_SOURCE.to_string(),
            limit: 0,
            fields: FieldSet::default().fields(),
            timeout: None,
        }
    }
}

impl ResolvedConfig {
    pub fn query(&self, taxon_id: TaxonId, file_type: &str) -> SearchQuery {
        SearchQuery::new(taxon_id)
            .with_file_type(file_type)
            .with_instrument_platform(self.instrument_platform.clone())
            .with_library_source(self.library_source.clone())
            .with_limit(self.limit)
            .with_fields(self.fields.clone())
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Without a path the built-in defaults are used; nothing is read from disk.
    pub fn resolve(path: Option<&str>) -> Result<ResolvedConfig, EnaError> {
        let Some(path) = path else {
            return Ok(ResolvedConfig::default());
        };
        let config_path = PathBuf::from(path);
        let content = fs::read_to_string(&config_path)
            .map_err(|_| EnaError::ConfigRead(config_path.clone()))?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|err| EnaError::ConfigParse(err.to_string()))?;

        Self::resolve_config(config)
    }

    pub fn resolve_config(config: Config) -> Result<ResolvedConfig, EnaError> {
        let defaults = ResolvedConfig::default();

        let fields = match config.fields {
            Some(fields) => {
                validate_fields(&fields)?;
                fields
            }
            None => config.field_set.unwrap_or_default().fields(),
        };

        Ok(ResolvedConfig {
            base_url: config.base_url.unwrap_or(defaults.base_url),
            instrument_platform: config
                .instrument_platform
                .unwrap_or(defaults.instrument_platform),
            library_source: config.library_source.unwrap_or(defaults.library_source),
            limit: config.limit.unwrap_or(defaults.limit),
            fields,
            timeout: config.timeout_secs.map(Duration::from_secs),
        })
    }
}
