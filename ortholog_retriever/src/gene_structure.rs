// src/gene_structure.rs

use serde_json::Value;
use tracing::info;

use crate::api_handler::{parse_value, ApiError, EnsemblClient};
use crate::models::{GeneRecord, StructureRecord};

/// A fetched gene structure: the typed view for counting plus the raw
/// payload for the full-dump text report.
pub struct GeneStructure {
    pub record: StructureRecord,
    pub raw: Value,
}

/// Resolve a gene symbol to its stable gene record for one species.
/// Any transport or not-found error propagates unmodified.
pub fn resolve_gene(
    client: &EnsemblClient,
    symbol: &str,
    species: &str,
) -> Result<GeneRecord, ApiError> {
    info!("Resolving gene symbol {} in {}", symbol, species);
    let endpoint = format!("/lookup/symbol/{}/{}", species, symbol);
    let value = client.get(&endpoint, &[])?;
    parse_value(&endpoint, &value)
}

/// Fetch the full structural annotation (transcripts and exons) for a
/// gene ID in a given species.
pub fn fetch_structure(
    client: &EnsemblClient,
    gene_id: &str,
    species: &str,
) -> Result<GeneStructure, ApiError> {
    info!("Fetching gene structure for {} ({})", gene_id, species);
    let endpoint = format!("/lookup/id/{}", gene_id);
    let raw = client.get(
        &endpoint,
        &[("species", species), ("expand", "1"), ("format", "full")],
    )?;
    let record = parse_value(&endpoint, &raw)?;
    Ok(GeneStructure { record, raw })
}
