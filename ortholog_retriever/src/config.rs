// src/config.rs

use clap::Parser;
use std::path::PathBuf;

use crate::api_handler::ENSEMBL_BASE_URL;

const DEFAULT_GENES: [&str; 3] = ["ARMH1", "ACTB", "DSCAM"];

const DEFAULT_TARGET_SPECIES: [&str; 7] = [
    "Homo sapiens",
    "Pongo abelii",
    "Mus musculus",
    "Pan troglodytes",
    "Gallus gallus",
    "Canis lupus familiaris",
    "Danio rerio",
];

/// Survey isoform and canonical-transcript exon counts for a gene list
/// across ortholog species via the Ensembl REST API.
#[derive(Parser, Debug, Clone)]
#[command(name = "ortholog_retriever", version, about)]
pub struct RunConfig {
    /// Gene symbols to survey, resolved against the reference species.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_GENES.map(String::from))]
    pub genes: Vec<String>,

    /// Target species (common names) for the ortholog lookup.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_TARGET_SPECIES.map(String::from))]
    pub target_species: Vec<String>,

    /// Source species for symbol resolution and orthology queries.
    #[arg(long, default_value = "homo_sapiens")]
    pub reference_species: String,

    /// Directory for the two text reports and the summary CSV.
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Base URL of the Ensembl REST service.
    #[arg(long, default_value = ENSEMBL_BASE_URL)]
    pub base_url: String,
}
