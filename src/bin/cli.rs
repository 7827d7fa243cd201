use anyhow::Context;
use clap::{Parser, Subcommand};
use result_search_engine::ranking::{DEFAULT_RESULT_LIMIT, DEFAULT_SIMILARITY_THRESHOLD};
use result_search_engine::{MatchConfig, MemoryProvider, RecordSet, ResultEngine};
use std::fs;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "result-search-cli")]
#[command(about = "Exam result fuzzy search CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the result records JSON file
    #[arg(short, long, default_value = "results.json")]
    records: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Search results by candidate name
    Search {
        /// Candidate name to search for
        query: String,

        /// Minimum similarity score (0-100)
        #[arg(short, long, default_value_t = DEFAULT_SIMILARITY_THRESHOLD)]
        threshold: u8,

        /// Maximum number of results
        #[arg(short, long, default_value_t = DEFAULT_RESULT_LIMIT)]
        limit: usize,

        /// Show per-subject marks
        #[arg(long)]
        subjects: bool,
    },

    /// Show record data status
    Status,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // Load records
    let json = fs::read_to_string(&cli.records)
        .with_context(|| format!("reading records from {}", cli.records))?;
    let records = RecordSet::from_json(&json)?;
    let provider = Arc::new(MemoryProvider::with_source(records, cli.records.clone()));

    match cli.command {
        Commands::Search {
            query,
            threshold,
            limit,
            subjects,
        } => {
            println!("🔍 Searching for: {}", query);

            let engine = ResultEngine::new(provider)
                .with_match_config(MatchConfig { threshold, limit });
            let outcome = engine.search(&query)?;

            if outcome.results.is_empty() {
                println!("\n❌ No matching candidates for: {}", outcome.query);
                return Ok(());
            }

            println!(
                "\n✅ {} result(s) in {:.2}ms",
                outcome.results.len(),
                outcome.latency_ms
            );

            for (i, report) in outcome.results.iter().enumerate() {
                println!("\n{}. {} ({}%)", i + 1, report.candidate_name, report.match_score);
                println!("   Roll No: {}", report.roll_no);
                if let Some(school) = &report.school_name {
                    println!("   School: {}", school);
                }
                if let Some(status) = &report.result_status {
                    println!("   Result: {}", status);
                }

                let overall = report
                    .percentages
                    .percentage_overall
                    .map(|p| format!("{:.2}%", p))
                    .unwrap_or_else(|| "N/A".to_string());
                let excluding = report
                    .percentages
                    .percentage_excluding_pe
                    .map(|p| format!("{:.2}%", p))
                    .unwrap_or_else(|| "N/A".to_string());
                println!(
                    "   Overall: {} ({} subjects)",
                    overall, report.percentages.num_subjects_overall
                );
                println!(
                    "   Excluding PE/additional: {} ({} subjects)",
                    excluding, report.percentages.num_subjects_excluding_pe
                );

                if subjects && !report.subjects.is_empty() {
                    println!("   📚 Subjects:");
                    for row in &report.subjects {
                        println!(
                            "      [{}] {}: {} (theory {}, practical {}, grade {})",
                            row.sub_code,
                            row.sub_name,
                            row.marks,
                            row.theory,
                            row.practical,
                            row.positional_grade
                        );
                    }
                }
            }
        }

        Commands::Status => {
            let engine = ResultEngine::new(provider);
            let status = engine.data_status();

            println!("📊 Data Status:");
            println!("   Loaded: {}", status.loaded);
            println!("   Source: {}", status.source);
            println!("   Records: {}", status.record_count);
            println!(
                "   Loaded at: {}",
                status.loaded_at.format("%Y-%m-%d %H:%M:%S")
            );
        }
    }

    Ok(())
}
