use camino::Utf8PathBuf;
use serde::Serialize;

use crate::ena::{EnaClient, SearchQuery};
use crate::error::EnaError;
use crate::persist::save_metadata;

#[derive(Debug, Clone, Serialize)]
pub struct SaveResult {
    pub taxon_id: String,
    pub path: String,
    pub bytes: usize,
}

pub struct App<C> {
    client: C,
    output_dir: Utf8PathBuf,
}

impl<C> App<C>
where
    C: EnaClient,
{
    pub fn new(client: C, output_dir: Utf8PathBuf) -> Self {
        Self { client, output_dir }
    }

    pub fn in_current_dir(client: C) -> Result<Self, EnaError> {
        let cwd = std::env::current_dir().map_err(|err| EnaError::Filesystem(err.to_string()))?;
        let output_dir = Utf8PathBuf::from_path_buf(cwd)
            .map_err(|_| EnaError::Filesystem("invalid working directory path".to_string()))?;
        Ok(Self::new(client, output_dir))
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Fetches metadata for the query's taxon and stores it on disk.
    ///
    /// The file is only opened after the search succeeded, so a failed request
    /// leaves any existing output untouched.
    pub fn save_taxon_metadata(&self, query: &SearchQuery) -> Result<SaveResult, EnaError> {
        let payload = self.client.search(query)?;
        let path = save_metadata(&self.output_dir, &query.taxon_id, &payload)?;
        tracing::info!(taxon_id = %query.taxon_id, %path, bytes = payload.len(), "saved metadata");
        Ok(SaveResult {
            taxon_id: query.taxon_id.to_string(),
            path: path.to_string(),
            bytes: payload.len(),
        })
    }
}
