// src/models.rs

use serde::Deserialize;

/// Result of resolving a gene symbol against a species. Ensembl returns
/// many more fields; only the stable gene identifier is consumed here.
#[derive(Deserialize, Debug)]
pub struct GeneRecord {
    pub id: String,
}

/// Condensed homology response from the Ensembl REST API. A missing
/// `data` key is a shape error, not an empty result.
#[derive(Deserialize, Debug)]
pub struct OrthologyResponse {
    pub data: Vec<HomologyEntry>,
}

#[derive(Deserialize, Debug)]
pub struct HomologyEntry {
    #[serde(default)]
    pub homologies: Vec<Homology>,
}

#[derive(Deserialize, Debug)]
pub struct Homology {
    pub id: String,
    pub species: String,
}

/// Structural annotation for a gene fetched with full expansion.
/// `canonical_transcript` carries a dotted version suffix
/// (e.g. "ENST00000331789.11"); transcript ids do not.
#[derive(Deserialize, Debug)]
pub struct StructureRecord {
    #[serde(rename = "Transcript", default)]
    pub transcripts: Vec<TranscriptDetail>,
    #[serde(default)]
    pub canonical_transcript: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct TranscriptDetail {
    pub id: String,
    pub is_canonical: Option<u8>,
    #[serde(rename = "Exon", default)]
    pub exons: Vec<ExonDetail>,
}

#[derive(Deserialize, Debug)]
pub struct ExonDetail {
    pub id: String,
}

/// One (ortholog gene id, species) pair flattened out of an
/// OrthologyResponse. Duplicates are kept; order follows the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrthologPair {
    pub gene_id: String,
    pub species: String,
}

/// One row of the final summary table, one per (gene, species) pair.
#[derive(Debug, Clone)]
pub struct SummaryRow {
    pub gene_name: String,
    pub species: String,
    pub ortholog_gene_id: String,
    pub num_transcripts: u32,
    pub canonical_transcript_id: Option<String>,
    pub num_exons_canonical: Option<u32>,
}
