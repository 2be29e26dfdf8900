// src/main.rs

mod api_handler;
mod config;
mod gene_structure;
mod iso_exo;
mod models;
mod orthologs;
mod report;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::RunConfig;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = RunConfig::parse();
    info!(
        "Starting ortholog isoform/exon survey: {} genes, {} target species",
        config.genes.len(),
        config.target_species.len()
    );

    let df = report::run(&config)?;
    println!("{}", df);
    Ok(())
}
