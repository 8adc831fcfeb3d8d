//! `read_run` field catalogs of the ENA Portal search API.
//!
//! The complete list is published at
//! <https://www.ebi.ac.uk/ena/portal/api/returnFields?query=tax_tree()&result=read_run>.

use std::collections::HashSet;

use crate::domain::FieldSet;
use crate::error::EnaError;

pub const ORIGINAL_FIELDS: &[&str] = &[
    "run_accession",
    "study_accession",
    "experiment_accession",
    "sample_accession",
    "secondary_sample_accession",
    "instrument_platform",
    "instrument_model",
    "library_layout",
    "library_strategy",
    "read_count",
    "base_count",
    "fastq_ftp",
    "fastq_aspera",
    "fastq_md5",
    "library_source",
    "library_selection",
    "center_name",
    "study_alias",
    "experiment_alias",
    "experiment_title",
    "study_title",
];

pub const ADDITIONAL_FIELDS: &[&str] = &["tissue_type"];

/// `ALL_FIELDS` minus `ORIGINAL_FIELDS` and `ADDITIONAL_FIELDS`.
pub const REMAINING_FIELDS: &[&str] = &[
    "secondary_study_accession",
    "submission_accession",
    "tax_id",
    "scientific_name",
    "library_name",
    "nominal_length",
    "first_public",
    "last_updated",
    "run_alias",
    "fastq_bytes",
    "fastq_galaxy",
    "submitted_bytes",
    "submitted_md5",
    "submitted_ftp",
    "submitted_aspera",
    "submitted_galaxy",
    "submitted_format",
    "sra_bytes",
    "sra_md5",
    "sra_ftp",
    "sra_aspera",
    "sra_galaxy",
    "cram_index_ftp",
    "cram_index_aspera",
    "cram_index_galaxy",
    "sample_alias",
    "broker_name",
    "nominal_sdev",
    "first_created",
    "sample_description",
    "parent_study",
    "library_construction_protocol",
    "accession",
    "bio_material",
    "cell_line",
    "cell_type",
    "collected_by",
    "collection_date",
    "country",
    "cultivar",
    "culture_collection",
    "description",
    "dev_stage",
    "ecotype",
    "environmental_sample",
    "germline",
    "identified_by",
    "isolate",
    "isolation_source",
    "location",
    "mating_type",
    "serotype",
    "serovar",
    "sex",
    "submitted_sex",
    "specimen_voucher",
    "strain",
    "sub_species",
    "sub_strain",
    "tissue_lib",
    "variety",
    "checklist",
    "depth",
    "elevation",
    "altitude",
    "environment_biome",
    "environment_feature",
    "environment_material",
    "temperature",
    "salinity",
    "sampling_campaign",
    "sampling_site",
    "sampling_platform",
    "protocol_label",
    "project_name",
    "host",
    "host_tax_id",
    "host_status",
    "host_sex",
    "submitted_host_sex",
    "host_body_site",
    "host_gravidity",
    "host_phenotype",
    "host_genotype",
    "host_growth_conditions",
    "environmental_package",
    "investigation_type",
    "experimental_factor",
    "sample_collection",
    "sequencing_method",
    "target_gene",
    "ph",
    "sample_title",
    "sample_material",
    "taxonomic_identity_marker",
    "assembly_quality",
    "assembly_software",
    "taxonomic_classification",
    "completeness_score",
    "contamination_score",
    "binning_software",
    "lat",
    "lon",
    "sample_capture_status",
    "collection_date_submitted",
    "submission_tool",
];

pub const ALL_FIELDS: &[&str] = &[
    "study_accession",
    "secondary_study_accession",
    "sample_accession",
    "secondary_sample_accession",
    "experiment_accession",
    "run_accession",
    "submission_accession",
    "tax_id",
    "scientific_name",
    "instrument_platform",
    "instrument_model",
    "library_name",
    "library_layout",
    "nominal_length",
    "library_strategy",
    "library_source",
    "library_selection",
    "read_count",
    "base_count",
    "center_name",
    "first_public",
    "last_updated",
    "experiment_title",
    "study_title",
    "study_alias",
    "experiment_alias",
    "run_alias",
    "fastq_bytes",
    "fastq_md5",
    "fastq_ftp",
    "fastq_aspera",
    "fastq_galaxy",
    "submitted_bytes",
    "submitted_md5",
    "submitted_ftp",
    "submitted_aspera",
    "submitted_galaxy",
    "submitted_format",
    "sra_bytes",
    "sra_md5",
    "sra_ftp",
    "sra_aspera",
    "sra_galaxy",
    "cram_index_ftp",
    "cram_index_aspera",
    "cram_index_galaxy",
    "sample_alias",
    "broker_name",
    "nominal_sdev",
    "first_created",
    "sample_description",
    "parent_study",
    "library_construction_protocol",
    "accession",
    "bio_material",
    "cell_line",
    "cell_type",
    "collected_by",
    "collection_date",
    "country",
    "cultivar",
    "culture_collection",
    "description",
    "dev_stage",
    "ecotype",
    "environmental_sample",
    "germline",
    "identified_by",
    "isolate",
    "isolation_source",
    "location",
    "mating_type",
    "serotype",
    "serovar",
    "sex",
    "submitted_sex",
    "specimen_voucher",
    "strain",
    "sub_species",
    "sub_strain",
    "tissue_lib",
    "tissue_type",
    "variety",
    "checklist",
    "depth",
    "elevation",
    "altitude",
    "environment_biome",
    "environment_feature",
    "environment_material",
    "temperature",
    "salinity",
    "sampling_campaign",
    "sampling_site",
    "sampling_platform",
    "protocol_label",
    "project_name",
    "host",
    "host_tax_id",
    "host_status",
    "host_sex",
    "submitted_host_sex",
    "host_body_site",
    "host_gravidity",
    "host_phenotype",
    "host_genotype",
    "host_growth_conditions",
    "environmental_package",
    "investigation_type",
    "experimental_factor",
    "sample_collection",
    "sequencing_method",
    "target_gene",
    "ph",
    "sample_title",
    "sample_material",
    "taxonomic_identity_marker",
    "assembly_quality",
    "assembly_software",
    "taxonomic_classification",
    "completeness_score",
    "contamination_score",
    "binning_software",
    "lat",
    "lon",
    "sample_capture_status",
    "collection_date_submitted",
    "submission_tool",
];

impl FieldSet {
    pub fn fields(self) -> Vec<String> {
        let groups: &[&[&str]] = match self {
            FieldSet::Original => &[ORIGINAL_FIELDS],
            FieldSet::Extended => &[ORIGINAL_FIELDS, ADDITIONAL_FIELDS],
            FieldSet::Full => &[ORIGINAL_FIELDS, ADDITIONAL_FIELDS, REMAINING_FIELDS],
            FieldSet::All => &[ALL_FIELDS],
        };
        groups
            .iter()
            .flat_map(|group| group.iter())
            .map(|field| field.to_string())
            .collect()
    }
}

/// Concatenates field groups in order, rejecting repeated names.
pub fn assemble_fields(groups: &[&[&str]]) -> Result<Vec<String>, EnaError> {
    let mut seen = HashSet::new();
    let mut fields = Vec::new();
    for field in groups.iter().flat_map(|group| group.iter()) {
        if !seen.insert(*field) {
            return Err(EnaError::DuplicateField(field.to_string()));
        }
        fields.push(field.to_string());
    }
    Ok(fields)
}

/// Checks a user-supplied field list against the catalog.
pub fn validate_fields(fields: &[String]) -> Result<(), EnaError> {
    let mut seen = HashSet::new();
    for field in fields {
        if !ALL_FIELDS.contains(&field.as_str()) {
            return Err(EnaError::UnknownField(field.clone()));
        }
        if !seen.insert(field.as_str()) {
            return Err(EnaError::DuplicateField(field.clone()));
        }
    }
    Ok(())
}

pub fn join_fields(fields: &[String]) -> String {
    fields.join(",")
}
