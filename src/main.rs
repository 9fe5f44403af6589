//! Resume screener: extract candidate details from a folder of resumes

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_screener::cli::{self, Cli, Commands, ConfigAction};
use resume_screener::config::{Config, OutputFormat};
use resume_screener::input::{DirectorySource, DocumentSource};
use resume_screener::output::formatter::{save_report_to_file, suggest_filename};
use resume_screener::output::{BatchReport, ReportGenerator};
use resume_screener::processing::{Gazetteer, HeuristicTagger, RecordBuilder, SkillRequest};
use resume_screener::{Result, ResumeScreenerError};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config, config_file: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Extract {
            folder,
            skill,
            skills,
            places,
            root,
            output,
            save,
            batch_size,
        } => {
            if let Some(places) = places {
                config.extraction.places_file = places;
            }
            if let Some(root) = root {
                config.input.documents_root = root;
            }
            if let Some(batch_size) = batch_size {
                config.processing.batch_size = batch_size;
            }
            if let Some(output) = output {
                config.output.format = cli::parse_output_format(&output).map_err(ResumeScreenerError::InvalidInput)?;
            }

            // Setup failures abort before any document is touched
            let request = SkillRequest::new(cli::collect_skills(&skill, skills.as_deref()))?;
            info!("Received skills: {}", request.skills().join(", "));

            let gazetteer = Gazetteer::load(&config.extraction.places_file)?;
            let builder = RecordBuilder::new(
                gazetteer,
                request,
                Arc::new(HeuristicTagger::new()),
                &config.extraction.name_prefix,
            )?
            .with_batch_size(config.processing.batch_size);

            let source = DirectorySource::new(&config.input.documents_root);
            let documents = source.list_documents(&folder).await?;

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.enable_steady_tick(Duration::from_millis(100));
            spinner.set_message(format!("Screening {} documents...", documents.len()));

            let result = builder.run(documents).await;
            spinner.finish_and_clear();

            let report = BatchReport::new(&folder, builder.skill_request().skills(), result);
            write_report(&report, &config, save)?;
        }

        Commands::Folders { root } => {
            let root = root.unwrap_or_else(|| config.input.documents_root.clone());
            let source = DirectorySource::new(root);
            let folders = source.list_folders().await?;

            if folders.is_empty() {
                println!("No folders found in {}", source.root().display());
            } else {
                println!("📂 Folders in {}:", source.root().display());
                for folder in folders {
                    println!("  • {}", folder);
                }
            }
        }

        Commands::Config { action } => {
            let path = config_file.unwrap_or_else(Config::config_path);

            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration\n");
                    println!("Documents Root: {}", config.input.documents_root.display());
                    println!("Places File: {}", config.extraction.places_file.display());
                    println!("Name Prefix: {}", config.extraction.name_prefix);
                    println!("Batch Size: {}", config.processing.batch_size);
                    println!("Output Format: {:?}", config.output.format);
                    println!("Output Path: {}", config.output_path().display());
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(&path)?;
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Set { key, value }) => {
                    config.set(&key, &value)?;
                    config.save_to(&path)?;
                    println!("✅ Set {} = {}", key, value);
                }
            }
        }
    }

    Ok(())
}

fn write_report(report: &BatchReport, config: &Config, save: Option<PathBuf>) -> Result<()> {
    let generator = ReportGenerator::with_options(config.output.color_output);
    let format = config.output.format;

    match (format, save) {
        (OutputFormat::Console, None) => {
            println!("{}", generator.generate_report(report, &format)?);
        }
        (_, save) => {
            let path = save.unwrap_or_else(|| {
                config
                    .output
                    .directory
                    .join(suggest_filename(&format, &config.output.filename, false))
            });
            let content = if format == OutputFormat::Console {
                ReportGenerator::with_options(false).generate_report(report, &format)?
            } else {
                generator.generate_report(report, &format)?
            };
            save_report_to_file(&content, &path)?;
            println!(
                "✅ {} records written to {}",
                report.metadata.records_created,
                path.display()
            );
        }
    }

    for skipped in report.failures() {
        println!("⚠️  Skipped {}: {}", skipped.filename, skipped.reason);
    }

    Ok(())
}
