// src/orthologs.rs

use reqwest::StatusCode;
use tracing::{debug, info};

use crate::api_handler::{parse_value, ApiError, EnsemblClient};
use crate::models::{OrthologPair, OrthologyResponse};

/// Outcome of an ortholog lookup. Genes with no orthology tree are a
/// valid terminal state, not an error.
pub enum OrthologLookup {
    Found(OrthologyResponse),
    NotFound,
}

const LOOKUP_NOT_FOUND: &str = "Lookup found nothing";

fn is_lookup_not_found(err: &ApiError) -> bool {
    matches!(err, ApiError::Status { status, message, .. }
        if *status == StatusCode::BAD_REQUEST && message.contains(LOOKUP_NOT_FOUND))
}

/// Fetch orthologs for a gene symbol across all target species at once,
/// querying against the reference species as source. The response is
/// requested condensed, orthologue-only, without sequences.
///
/// Exactly one failure is recoverable: HTTP 400 with an error message
/// containing "Lookup found nothing" maps to `NotFound`. Every other
/// failure propagates and aborts the run.
pub fn fetch_orthologs(
    client: &EnsemblClient,
    symbol: &str,
    reference_species: &str,
    target_species: &[String],
) -> Result<OrthologLookup, ApiError> {
    info!("Fetching orthologs for {}", symbol);
    let endpoint = format!("/homology/symbol/{}/{}", reference_species, symbol);
    let mut query: Vec<(&str, &str)> = vec![
        ("type", "orthologues"),
        ("format", "condensed"),
        ("sequence", "none"),
    ];
    for species in target_species {
        query.push(("target_species", species));
    }

    match client.get(&endpoint, &query) {
        Ok(value) => {
            let response: OrthologyResponse = parse_value(&endpoint, &value)?;
            debug!(
                "Orthology response for {} has {} data entries",
                symbol,
                response.data.len()
            );
            Ok(OrthologLookup::Found(response))
        }
        Err(err) if is_lookup_not_found(&err) => {
            info!("No orthology data for {}", symbol);
            Ok(OrthologLookup::NotFound)
        }
        Err(err) => Err(err),
    }
}

/// Flatten a homology response into (gene id, species) pairs, entry
/// order then homology order. No deduplication, no species filtering.
pub fn extract_orthologs(response: &OrthologyResponse) -> Vec<OrthologPair> {
    let mut pairs = Vec::new();
    for entry in &response.data {
        for hom in &entry.homologies {
            pairs.push(OrthologPair {
                gene_id: hom.id.clone(),
                species: hom.species.clone(),
            });
        }
    }
    pairs
}
