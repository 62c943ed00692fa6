//! ATS analyzer: resume scoring and recommendation CLI

mod cli;
mod config;
mod error;
mod input;
mod processing;
mod output;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{AtsError, Result};
use log::{error, info};
use output::formatter::ReportGenerator;
use processing::engine::ScoringEngine;
use processing::job_analyzer::JobDescriptionAnalyzer;
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Score {
            resume,
            job,
            output,
            detailed,
            save,
        } => {
            cli::validate_file_extension(&resume, &["json"])
                .map_err(|e| AtsError::InvalidInput(format!("Resume file: {}", e)))?;
            if let Some(job_path) = &job {
                cli::validate_file_extension(job_path, &["txt", "md", "markdown"])
                    .map_err(|e| AtsError::InvalidInput(format!("Job description file: {}", e)))?;
            }

            let output_format = cli::parse_output_format(&output).map_err(AtsError::InvalidInput)?;

            info!("Scoring resume {}", resume.display());
            let resume_data = input::load_resume(&resume)?;

            let job_analysis = match &job {
                Some(job_path) => {
                    info!("Analyzing job description {}", job_path.display());
                    let job_text = input::load_job_description(job_path)?;
                    let analyzer =
                        JobDescriptionAnalyzer::with_dictionaries(config.dictionaries.clone())?;
                    Some(analyzer.analyze(&job_text))
                }
                None => None,
            };

            let engine = ScoringEngine::with_dictionaries(config.dictionaries.clone())?;
            let report = engine.score_resume(&resume_data, job_analysis.as_ref());

            let generator = ReportGenerator::new(
                config.output.color_output,
                detailed || config.output.detailed,
            );
            let rendered = generator.format(&report, output_format)?;
            println!("{}", rendered);

            if let Some(save_path) = save {
                generator.save_to_file(&rendered, &save_path)?;
                info!("Report saved to {}", save_path.display());
            }

            Ok(())
        }

        Commands::AnalyzeJob { job, output } => {
            cli::validate_file_extension(&job, &["txt", "md", "markdown"])
                .map_err(|e| AtsError::InvalidInput(format!("Job description file: {}", e)))?;
            let output_format = cli::parse_output_format(&output).map_err(AtsError::InvalidInput)?;

            info!("Analyzing job description {}", job.display());
            let job_text = input::load_job_description(&job)?;
            let analyzer = JobDescriptionAnalyzer::with_dictionaries(config.dictionaries.clone())?;
            let analysis = analyzer.analyze(&job_text);

            let generator = ReportGenerator::new(config.output.color_output, false);
            println!("{}", generator.format_job_analysis(&analysis, output_format)?);

            Ok(())
        }

        Commands::Config { action } => {
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    let rendered = toml::to_string_pretty(&config).map_err(|e| {
                        AtsError::Configuration(format!("Failed to render config: {}", e))
                    })?;
                    println!("{}", rendered);
                }
                ConfigAction::Path => {
                    println!("{}", Config::config_path().display());
                }
                ConfigAction::Reset => {
                    Config::default().save()?;
                    println!("Configuration reset to defaults");
                }
            }
            Ok(())
        }
    }
}
