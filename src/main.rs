use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use jobsift::config::CleanConfig;
use jobsift::logging;
use jobsift::pipeline::Pipeline;
use jobsift::storage;

#[derive(Parser)]
#[command(name = "jobsift")]
#[command(about = "Job posting data cleaning pipeline")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean a raw job postings export into the dashboard-facing table
    Clean {
        /// Path to the raw CSV export
        #[arg(long, default_value = "jooble_data_jobs_last7_days.csv")]
        input: PathBuf,
        /// Path for the cleaned CSV
        #[arg(long, default_value = "cleaned_jooble_jobs.csv")]
        output: PathBuf,
        /// TOML file overriding keyword lists and stage toggles
        #[arg(long)]
        config: Option<PathBuf>,
        /// Write a JSON per-stage drop report beside the output
        #[arg(long)]
        report: bool,
        /// Keep records whose city is a vague region label (Remote, USA, ...)
        #[arg(long)]
        keep_vague_cities: bool,
    },
    /// Show row count and columns of a raw export
    Inspect {
        /// Path to the raw CSV export
        #[arg(long)]
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Clean {
            input,
            output,
            config,
            report,
            keep_vague_cities,
        } => {
            let mut clean_config = match config {
                Some(path) => CleanConfig::load(&path)?,
                None => CleanConfig::default(),
            };
            if keep_vague_cities {
                clean_config.exclude_vague_cities = false;
            }

            info!(input = %input.display(), "starting cleaning run");
            let raw_records = storage::read_raw(&input)?;
            let (clean_records, run_report) = Pipeline::new(clean_config).run(raw_records);
            storage::write_clean(&output, &clean_records)?;

            println!("\n📊 Cleaning results:");
            println!("   Input rows: {}", run_report.input_rows);
            println!("   Missing required fields: {}", run_report.missing_required);
            println!("   Empty descriptions: {}", run_report.empty_description);
            println!("   Bad links: {}", run_report.bad_link);
            println!("   Duplicate links: {}", run_report.duplicate_link);
            println!("   Off-topic titles: {}", run_report.off_topic);
            println!("   Deny-listed titles: {}", run_report.denied_keyword);
            println!("   Vague cities: {}", run_report.vague_city);

            if report {
                let report_path = output.with_extension("report.json");
                storage::write_report(&report_path, &run_report)?;
                println!("   Report: {}", report_path.display());
            }

            println!(
                "✅ Cleaned data saved with {} jobs in '{}'",
                run_report.output_rows,
                output.display()
            );
        }
        Commands::Inspect { input } => {
            let (columns, rows) = storage::inspect_raw(&input)?;
            println!("📄 {}", input.display());
            println!("   Rows: {}", rows);
            println!("   Columns: {}", columns.join(", "));
        }
    }

    Ok(())
}
