//! Resume insight: resume analysis, ATS scoring, and role matching CLI

use clap::Parser;
use log::{error, info};
use resume_insight::analysis::service::AnalysisService;
use resume_insight::catalog;
use resume_insight::cli::{self, Cli, Commands, ConfigAction};
use resume_insight::config::{Config, OutputFormat};
use resume_insight::error::{Result, ResumeInsightError};
use resume_insight::input;
use resume_insight::output::ReportGenerator;
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
        Commands::Analyze {
            resume,
            job,
            top,
            output,
            save,
        } => {
            info!("Starting resume analysis");

            cli::validate_file_extension(&resume, &["txt", "md", "markdown"])
                .map_err(|e| ResumeInsightError::InvalidInput(format!("Resume file: {}", e)))?;
            if let Some(job_path) = &job {
                cli::validate_file_extension(job_path, &["txt", "md", "markdown"]).map_err(
                    |e| ResumeInsightError::InvalidInput(format!("Job description file: {}", e)),
                )?;
            }

            let output_format =
                cli::parse_output_format(&output).map_err(ResumeInsightError::InvalidInput)?;

            let resume_text = input::clean_text(&input::extract_text(&resume)?);
            input::validate_resume(&resume_text)?;
            info!("Resume text: {} characters", resume_text.len());

            // JD text stays raw: the label-based skill patterns are
            // line-oriented and need the original newlines.
            let job_text = match &job {
                Some(path) => Some(input::extract_text(path)?),
                None => None,
            };

            let top_matches = top.unwrap_or(config.analysis.top_role_matches);
            let service =
                AnalysisService::new(catalog::builtin())?.with_top_matches(top_matches);
            let report = service.analyze(&resume_text, job_text.as_deref());

            let generator = ReportGenerator::new(
                config.output.color_output,
                config.output.show_skill_contexts,
            );

            if let Some(save_path) = &save {
                generator.save_to_file(&report, output_format, save_path)?;
                println!("Report saved to {}", save_path.display());
            } else {
                println!("{}", generator.format(&report, output_format)?);
            }

            Ok(())
        }

        Commands::Roles { category } => {
            let catalog = catalog::builtin();
            for (cat, roles) in catalog.roles_by_category() {
                if let Some(filter) = &category {
                    if !cat.eq_ignore_ascii_case(filter) {
                        continue;
                    }
                }
                println!("{}", cat);
                for role in roles {
                    println!(
                        "  {} ({} skills, {} tools)",
                        role.name,
                        role.skills.len(),
                        role.tools.len()
                    );
                }
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let rendered = toml::to_string_pretty(&config).map_err(|e| {
                    ResumeInsightError::Configuration(format!("failed to render config: {}", e))
                })?;
                println!("# {}", Config::config_path()?.display());
                println!("{}", rendered);
                Ok(())
            }
            Some(ConfigAction::Init) => {
                config.save()?;
                println!("Wrote {}", Config::config_path()?.display());
                Ok(())
            }
            Some(ConfigAction::Reset) => {
                Config::default().save()?;
                println!("Reset {}", Config::config_path()?.display());
                Ok(())
            }
        },
    }
}
