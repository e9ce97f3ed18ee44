//! Command implementations.

use anyhow::Context as _;

use eqstat_analyze::{AnalyzerConfig, analyze};
use eqstat_ingest::{IngestConfig, read_csv_table};
use eqstat_model::{AnalysisReport, SemanticRole};
use eqstat_narrative::DisabledGenerator;

use crate::cli::AnalyzeArgs;

/// Ingests, analyzes, and optionally writes the JSON report.
pub fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<AnalysisReport> {
    let mut ingest_config = IngestConfig {
        require_csv_extension: !args.no_extension_check,
        ..IngestConfig::default()
    };
    if let Some(max_file_size) = args.max_file_size {
        ingest_config.max_file_size = max_file_size;
    }

    let table = read_csv_table(&args.input, &ingest_config)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    tracing::info!(
        path = %args.input.display(),
        rows = table.row_count(),
        columns = table.columns.len(),
        "dataset loaded"
    );

    let analyzer_config = AnalyzerConfig {
        sample_rows: args.sample_rows,
        ..AnalyzerConfig::default()
    };
    let report = analyze(&table, &analyzer_config, &DisabledGenerator)
        .context("analysis failed")?;

    if let Some(path) = &args.json_out {
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote JSON report");
    }

    Ok(report)
}

/// Prints each semantic role with its accepted column names.
pub fn run_roles() {
    for role in SemanticRole::ALL {
        println!("{:<12} {}", role.label(), role.synonyms().join(", "));
    }
}
