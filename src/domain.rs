use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EnaError;

/// NCBI taxonomy identifier, e.g. `9606` for *Homo sapiens*.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaxonId(String);

impl TaxonId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The ENA query expression selecting the taxon and all of its descendants.
    pub fn tax_tree(&self) -> String {
        format!("tax_tree({})", self.0)
    }
}

impl fmt::Display for TaxonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaxonId {
    type Err = EnaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        let is_valid = !normalized.is_empty() && normalized.chars().all(|ch| ch.is_ascii_digit());
        if !is_valid {
            return Err(EnaError::InvalidTaxonId(value.to_string()));
        }
        Ok(Self(normalized.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldSet {
    /// The fields consumed by the downstream annotation pipeline.
    Original,
    /// `original` plus fields that help identify the sample source.
    Extended,
    /// `extended` plus every remaining catalog field.
    #[default]
    Full,
    /// The complete catalog in the portal's own column order.
    All,
}

impl fmt::Display for FieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldSet::Original => write!(f, "original"),
            FieldSet::Extended => write!(f, "extended"),
            FieldSet::Full => write!(f, "full"),
            FieldSet::All => write!(f, "all"),
        }
    }
}
