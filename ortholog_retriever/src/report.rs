// src/report.rs

use std::fs::{self, File};
use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use polars::prelude::*;
use tracing::info;

use crate::api_handler::EnsemblClient;
use crate::config::RunConfig;
use crate::gene_structure::{fetch_structure, resolve_gene, GeneStructure};
use crate::iso_exo::{count_iso_exo, IsoExoCount};
use crate::models::SummaryRow;
use crate::orthologs::{extract_orthologs, fetch_orthologs, OrthologLookup};

pub const GENE_INFO_FILE: &str = "ortholog_gene_info.txt";
pub const ISO_EXO_FILE: &str = "IsoExoCount.txt";
pub const SUMMARY_FILE: &str = "ortholog_exon_summary.csv";

/// Drive the whole survey: per gene, the reference-species branch runs
/// first and its row precedes any ortholog rows; the ortholog branch is
/// skipped (not fatal) only when the gene has no orthology tree. Both
/// text reports are appended to incrementally as each entry arrives.
/// Returns the summary frame after writing it as CSV.
pub fn run(config: &RunConfig) -> Result<DataFrame> {
    let client = EnsemblClient::new(&config.base_url, Duration::from_secs(config.timeout_secs))?;

    fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("creating output dir {}", config.output_dir.display()))?;
    let mut gene_info_file = File::create(config.output_dir.join(GENE_INFO_FILE))
        .with_context(|| format!("creating {}", GENE_INFO_FILE))?;
    let mut iso_exo_file = File::create(config.output_dir.join(ISO_EXO_FILE))
        .with_context(|| format!("creating {}", ISO_EXO_FILE))?;

    let mut rows: Vec<SummaryRow> = Vec::new();

    for gene in &config.genes {
        let gene_record = resolve_gene(&client, gene, &config.reference_species)
            .with_context(|| format!("resolving {} in {}", gene, config.reference_species))?;
        let structure = fetch_structure(&client, &gene_record.id, &config.reference_species)
            .with_context(|| {
                format!(
                    "fetching structure for {} ({})",
                    gene_record.id, config.reference_species
                )
            })?;
        write_entry(
            &mut gene_info_file,
            &mut iso_exo_file,
            gene,
            &config.reference_species,
            &gene_record.id,
            &structure,
            &mut rows,
        )?;

        let pairs = match fetch_orthologs(
            &client,
            gene,
            &config.reference_species,
            &config.target_species,
        )
        .with_context(|| format!("fetching orthologs for {}", gene))?
        {
            OrthologLookup::Found(response) => extract_orthologs(&response),
            OrthologLookup::NotFound => Vec::new(),
        };

        for pair in pairs {
            let structure = fetch_structure(&client, &pair.gene_id, &pair.species)
                .with_context(|| {
                    format!("fetching structure for {} ({})", pair.gene_id, pair.species)
                })?;
            write_entry(
                &mut gene_info_file,
                &mut iso_exo_file,
                gene,
                &pair.species,
                &pair.gene_id,
                &structure,
                &mut rows,
            )?;
        }
    }

    let mut df = summary_frame(&rows)?;
    let csv_path = config.output_dir.join(SUMMARY_FILE);
    let mut csv_file =
        File::create(&csv_path).with_context(|| format!("creating {}", csv_path.display()))?;
    CsvWriter::new(&mut csv_file)
        .include_header(true)
        .finish(&mut df)
        .context("writing summary CSV")?;
    info!("Wrote {} summary rows to {}", rows.len(), csv_path.display());

    Ok(df)
}

/// Write one (species, gene) entry to both text reports and push its
/// summary row.
fn write_entry(
    gene_info: &mut File,
    iso_exo: &mut File,
    gene_symbol: &str,
    species: &str,
    gene_id: &str,
    structure: &GeneStructure,
    rows: &mut Vec<SummaryRow>,
) -> Result<()> {
    write!(gene_info, "{} - {}\n\n{}\n\n", species, gene_id, structure.raw)
        .with_context(|| format!("writing {}", GENE_INFO_FILE))?;

    let counts = count_iso_exo(&structure.record);
    write!(
        iso_exo,
        "{} - {}\n\n{}\n\n",
        species,
        gene_id,
        iso_exo_line(gene_symbol, &counts)
    )
    .with_context(|| format!("writing {}", ISO_EXO_FILE))?;

    rows.push(SummaryRow {
        gene_name: gene_symbol.to_string(),
        species: species.to_string(),
        ortholog_gene_id: gene_id.to_string(),
        num_transcripts: counts.num_isoforms as u32,
        canonical_transcript_id: counts.canonical_id,
        num_exons_canonical: counts.num_exons_canonical.map(|n| n as u32),
    });
    Ok(())
}

fn iso_exo_line(gene_symbol: &str, counts: &IsoExoCount) -> String {
    let canonical_id = counts.canonical_id.as_deref().unwrap_or("None");
    let num_exons = counts
        .num_exons_canonical
        .map_or_else(|| "None".to_string(), |n| n.to_string());
    format!(
        "N of isoforms for gene {}: {}, N of exons in canonical transcript {}: {}",
        gene_symbol, counts.num_isoforms, canonical_id, num_exons
    )
}

/// Build the summary table with the six columns in their fixed order.
fn summary_frame(rows: &[SummaryRow]) -> PolarsResult<DataFrame> {
    let gene_name: Vec<String> = rows.iter().map(|r| r.gene_name.clone()).collect();
    let species: Vec<String> = rows.iter().map(|r| r.species.clone()).collect();
    let ortholog_gene_id: Vec<String> =
        rows.iter().map(|r| r.ortholog_gene_id.clone()).collect();
    let num_transcripts: Vec<u32> = rows.iter().map(|r| r.num_transcripts).collect();
    let canonical_transcript_id: Vec<Option<String>> = rows
        .iter()
        .map(|r| r.canonical_transcript_id.clone())
        .collect();
    let num_exons_canonical: Vec<Option<u32>> =
        rows.iter().map(|r| r.num_exons_canonical).collect();

    df![
        "gene_name" => gene_name,
        "species" => species,
        "ortholog_gene_id" => ortholog_gene_id,
        "num_transcripts" => num_transcripts,
        "canonical_transcript_id" => canonical_transcript_id,
        "num_exons_canonical" => num_exons_canonical,
    ]
}
