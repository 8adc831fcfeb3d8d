use std::fs::OpenOptions;
use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};

use crate::domain::TaxonId;
use crate::error::EnaError;

pub fn metadata_file_name(taxon_id: &TaxonId) -> String {
    format!("taxon_id={}.json", taxon_id.as_str())
}

pub fn metadata_path(dir: &Utf8Path, taxon_id: &TaxonId) -> Utf8PathBuf {
    dir.join(metadata_file_name(taxon_id))
}

/// Writes `payload` to `<dir>/taxon_id=<id>.json`, replacing any earlier file.
pub fn save_metadata(
    dir: &Utf8Path,
    taxon_id: &TaxonId,
    payload: &[u8],
) -> Result<Utf8PathBuf, EnaError> {
    let path = metadata_path(dir, taxon_id);
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path.as_std_path())
        .map_err(|err| EnaError::Filesystem(format!("create {path}: {err}")))?;
    file.write_all(payload)
        .map_err(|err| EnaError::Filesystem(format!("write {path}: {err}")))?;
    file.flush()
        .map_err(|err| EnaError::Filesystem(format!("flush {path}: {err}")))?;
    Ok(path)
}
