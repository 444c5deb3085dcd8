//! CLI entrypoint for dossier
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use dossier_application::{
    GenerateReportUseCase, GenerationLogger, ReportParams, ReportProgressNotifier, TextModel,
};
use dossier_domain::{
    BuiltinPersonas, PersonaRole, PersonaStore, QualityValidator, Report, validate_persona,
};
use dossier_infrastructure::{
    ConfigIssue, ConfigLoader, FileConfig, JsonlGenerationLogger, ScenarioLoader, Severity,
    VertexSettings, VertexTextModel,
};
use dossier_presentation::{
    Cli, Command, ConsoleFormatter, GenerateArgs, OutputFormat, ProgressReporter, SimpleProgress,
};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting dossier");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    report_config_issues(&config.validate())?;

    match &cli.command {
        Command::Generate(args) => generate(&cli, &config, args).await,
        Command::Check => check(&config).await,
        Command::Validate { reports } => validate(&config, reports),
        Command::Personas { show } => personas(show.as_deref()),
        Command::Config => {
            ConfigLoader::print_config_sources(cli.config.as_ref());
            println!();
            println!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

/// Print config issues, failing when any of them is an error
fn report_config_issues(issues: &[ConfigIssue]) -> Result<()> {
    for issue in issues {
        match issue.severity {
            Severity::Error => eprintln!("config error: {}", issue),
            Severity::Warning => warn!("{}", issue),
        }
    }
    if ConfigIssue::has_errors(issues) {
        bail!("Invalid configuration");
    }
    Ok(())
}

fn build_use_case(
    config: &FileConfig,
    params: ReportParams,
    event_log: Option<&PathBuf>,
) -> Result<GenerateReportUseCase<VertexTextModel>> {
    // === Dependency Injection ===
    let settings = VertexSettings::from_config(&config.model)?;
    let model = Arc::new(VertexTextModel::new(settings)?);
    info!(endpoint = model.endpoint(), "Using model {}", model.model_name());

    let mut use_case = GenerateReportUseCase::new(model, params);

    if let Some(path) = event_log.or(config.logging.event_log.as_ref()) {
        match JsonlGenerationLogger::open(path) {
            Some(logger) => {
                info!("Writing generation events to {}", logger.path().display());
                let logger: Arc<dyn GenerationLogger> = Arc::new(logger);
                use_case = use_case.with_logger(logger);
            }
            None => warn!("Event log {} could not be opened", path.display()),
        }
    }

    Ok(use_case)
}

async fn generate(cli: &Cli, config: &FileConfig, args: &GenerateArgs) -> Result<()> {
    let scenario = ScenarioLoader::load(&args.scenario)
        .with_context(|| format!("Failed to load scenario {}", args.scenario.display()))?;

    let mut params = config.to_report_params();
    if let Some(threshold) = args.threshold {
        if !(0.0..=1.0).contains(&threshold) {
            bail!("--threshold must be between 0 and 1, got {}", threshold);
        }
        params = params.with_quality_threshold(threshold);
    }

    let mut use_case = build_use_case(config, params, args.event_log.as_ref())?;
    use_case
        .initialize()
        .await
        .context("Model is not reachable")?;

    if !cli.quiet && args.output != OutputFormat::Json {
        eprintln!("Model: {}", use_case.model_name());
        eprintln!("Scenario: {}", scenario.name);
        eprintln!();
    }

    let report = if cli.quiet {
        use_case.execute(scenario).await?
    } else {
        let progress: Box<dyn ReportProgressNotifier> = if std::io::stderr().is_terminal() {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(SimpleProgress)
        };
        use_case
            .execute_with_progress(scenario, progress.as_ref())
            .await?
    };

    match &args.out_file {
        Some(path) => {
            colored::control::set_override(false);
            let output = ConsoleFormatter::render(&report, args.output);
            std::fs::write(path, output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            colored::control::unset_override();
            if !cli.quiet {
                eprintln!("Report written to {}", path.display());
            }
        }
        None => println!("{}", ConsoleFormatter::render(&report, args.output)),
    }

    if !cli.quiet {
        eprintln!();
        eprint!(
            "{}",
            ConsoleFormatter::format_stats(use_case.model_name(), &use_case.stats())
        );
    }

    Ok(())
}

async fn check(config: &FileConfig) -> Result<()> {
    let mut use_case = build_use_case(config, config.to_report_params(), None)?;
    use_case
        .initialize()
        .await
        .with_context(|| format!("Model {} did not answer the handshake", use_case.model_name()))?;
    println!("Model {} is ready", use_case.model_name());
    Ok(())
}

fn validate(config: &FileConfig, paths: &[PathBuf]) -> Result<()> {
    let mut validator = QualityValidator::new(config.report.quality_threshold);
    info!(
        "Validating {} report(s) against threshold {:.2}",
        paths.len(),
        validator.threshold()
    );

    let mut failed = 0;
    for path in paths {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let report: Report = serde_json::from_str(&raw)
            .with_context(|| format!("{} is not a JSON report", path.display()))?;

        let validation = validator.validate_report(&report);
        println!("{} ({})", report.scenario.name, path.display());
        println!("{}", ConsoleFormatter::format_validation(&validation));
        if !validation.passed {
            failed += 1;
        }
    }

    if let Some(metrics) = validator.quality_metrics() {
        print!("{}", ConsoleFormatter::format_metrics(&metrics));
    }

    if failed > 0 {
        bail!("{} of {} report(s) did not meet the quality threshold", failed, paths.len());
    }
    Ok(())
}

fn personas(show: Option<&str>) -> Result<()> {
    if let Some(name) = show {
        let text = BuiltinPersonas.persona_by_name(name).map_err(|e| {
            if e.is_unknown_persona() {
                anyhow!("{}. Run `dossier personas` to list them", e)
            } else {
                anyhow::Error::from(e)
            }
        })?;
        println!("{}", text);
        return Ok(());
    }

    let validations: Vec<_> = PersonaRole::ALL
        .into_iter()
        .map(|role| (role, validate_persona(BuiltinPersonas::text(role))))
        .collect();
    print!("{}", ConsoleFormatter::format_personas(&validations));
    Ok(())
}
