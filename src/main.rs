//! Jobfit: resume-to-job matching and ATS compatibility scoring tool

use clap::Parser;
use jobfit::cli::{Cli, Commands, ConfigAction};
use jobfit::config::EngineConfig;
use jobfit::error::{JobFitError, Result};
use jobfit::input::jobs::{load_job_json, load_jobs_json};
use jobfit::input::ResumeProfile;
use jobfit::output::formatter::{matches_to_json, report_to_json, ConsoleFormatter, OutputFormat};
use jobfit::processing::analyzer::AnalysisEngine;
use log::{error, info};
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run_command(cli) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(cli: Cli) -> Result<()> {
    let config = EngineConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Match {
            resume,
            jobs,
            top,
            output,
        } => {
            let format: OutputFormat = output.parse()?;
            let profile = ResumeProfile::from_file(&resume)?;
            let postings = load_jobs_json(&jobs)?;
            info!(
                "matching resume {} against {} postings",
                resume.display(),
                postings.len()
            );

            let engine = AnalysisEngine::new(&config)?;
            let results = engine.rank_jobs(&profile, &postings, top)?;

            match format {
                OutputFormat::Console => {
                    println!("{}", ConsoleFormatter::new(true).format_matches(&results));
                }
                OutputFormat::Json => println!("{}", matches_to_json(&results)?),
            }
        }

        Commands::Analyze {
            resume,
            job,
            output,
        } => {
            let format: OutputFormat = output.parse()?;
            let profile = ResumeProfile::from_file(&resume)?;
            let posting = load_job_json(&job)?;
            info!("analyzing posting '{}'", posting.title);

            let engine = AnalysisEngine::new(&config)?;
            let report = engine.analyze_job(&profile, &posting)?;

            match format {
                OutputFormat::Console => {
                    println!("{}", ConsoleFormatter::new(true).format_report(&report));
                }
                OutputFormat::Json => println!("{}", report_to_json(&report)?),
            }
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let rendered = toml::to_string_pretty(&config).map_err(|e| {
                    JobFitError::Configuration(format!("failed to render config: {}", e))
                })?;
                println!("{}", rendered);
            }
            ConfigAction::Init { path } => {
                EngineConfig::default().save(&path)?;
                println!("Wrote default configuration to {}", path.display());
            }
        },
    }

    Ok(())
}
