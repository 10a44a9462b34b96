use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use std::path::Path;
use tokio::sync::mpsc;
use world_clock::app::input::spawn_stdin_reader;
use world_clock::app::views::{export_summary, render_html, render_text};
use world_clock::app::{HtmlFileSink, TerminalSink};
use world_clock::config::cli::Commands;
use world_clock::core::dashboard::{Dashboard, EMPTY_PROMPT};
use world_clock::core::state::search_zones;
use world_clock::core::svg::standalone_svg;
use world_clock::core::{ConfigProvider, Storage, ZoneDatabase};
use world_clock::utils::error::ErrorSeverity;
use world_clock::utils::{logger, validation::Validate};
use world_clock::{
    AppState, ChronoTzDatabase, ClockError, ClockRenderer, CliConfig, DashboardLoop, LocalStorage,
    SystemClock, TimezoneSet, TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // Load configuration: file if given, built-in defaults otherwise
    let mut config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };
    // Command-line flags override the file
    cli.apply_overrides(&mut config);

    // Initialize logging at the configured level
    if config.log_format() == "json" {
        logger::init_json_logger(config.log_level());
    } else {
        logger::init_cli_logger(config.log_level());
    }

    tracing::info!("Starting world-clock");
    tracing::debug!("Effective config: {:?}", config);

    // Validate before touching the terminal or any output file
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // No subcommand means the live dashboard
    let command = cli.command.clone().unwrap_or(Commands::Watch {
        html: None,
        no_terminal: false,
        ticks: None,
        interval_ms: None,
    });

    // Map error severity to the process exit code
    if let Err(e) = run_command(command, &config).await {
        match e.downcast_ref::<ClockError>() {
            Some(clock_err) => {
                tracing::error!(
                    "❌ {:#} (Category: {:?}, Severity: {:?})",
                    e,
                    clock_err.category(),
                    clock_err.severity()
                );
                eprintln!("❌ {}", clock_err.user_friendly_message());
                eprintln!("💡 {}", clock_err.recovery_suggestion());

                let exit_code = match clock_err.severity() {
                    ErrorSeverity::Low => 0,
                    ErrorSeverity::Medium => 2,
                    ErrorSeverity::High => 1,
                    ErrorSeverity::Critical => 3,
                };
                if exit_code > 0 {
                    std::process::exit(exit_code);
                }
            }
            None => {
                eprintln!("❌ {:#}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn initial_state(config: &TomlConfig) -> AppState {
    AppState::new(config.title(), TimezoneSet::from_ids(config.zones().iter().cloned()))
}

async fn write_output(path: &str, contents: &str) -> anyhow::Result<()> {
    // Joining an absolute path onto "." yields the absolute path unchanged.
    LocalStorage::new(".")
        .write_file(path, contents.as_bytes())
        .await
        .with_context(|| format!("writing {}", path))?;
    tracing::info!("📁 Output saved to: {}", path);
    Ok(())
}

async fn run_command(command: Commands, config: &TomlConfig) -> anyhow::Result<()> {
    let db = ChronoTzDatabase::new();
    let renderer = ClockRenderer::new(db);
    let state = initial_state(config);
    let instant_or_now = |at: Option<DateTime<Utc>>| at.unwrap_or_else(Utc::now);

    match command {
        Commands::Watch { ticks, .. } => {
            // Assemble the sinks; at least one must be active
            let mut dashboard = DashboardLoop::new(renderer, SystemClock, config.tick_interval());
            if config.terminal_enabled() {
                dashboard = dashboard.with_sink(TerminalSink::new(std::io::stdout(), true));
            }
            if let Some(path) = config.html_path() {
                tracing::info!("Rewriting {} every tick", path);
                dashboard = dashboard.with_sink(HtmlFileSink::new(LocalStorage::new("."), path, true));
            }
            if dashboard.sink_count() == 0 {
                return Err(ClockError::ConfigError {
                    message: "terminal output is disabled and no HTML path is set".to_string(),
                }
                .into());
            }

            // Commands arrive line by line from stdin
            let (tx, rx) = mpsc::channel(32);
            spawn_stdin_reader(tx);

            let final_state = dashboard.run(state, rx, ticks).await?;
            tracing::info!(
                "Dashboard stopped with {} zone(s): {}",
                final_state.zones.len(),
                final_state.zones.list().join(", ")
            );
            // The blocking stdin read cannot be cancelled; exit instead of waiting on it.
            std::process::exit(0);
        }
        Commands::Show { at } => {
            let frame = Dashboard::build(&state, &renderer, instant_or_now(at));
            print!("{}", render_text(&frame));
        }
        Commands::Summary { format, at } => {
            let frame = Dashboard::build(&state, &renderer, instant_or_now(at));
            if state.zones.is_empty() {
                eprintln!("{}", EMPTY_PROMPT);
            }
            let rows = frame.summary().unwrap_or_default();
            print!("{}", export_summary(rows, format)?);
        }
        Commands::Zones { filter } => {
            let ids = match filter {
                Some(f) => search_zones(&db, &f, usize::MAX),
                None => db.zone_ids(),
            };
            tracing::debug!("{} zone(s) listed", ids.len());
            for id in ids {
                println!("{}", id);
            }
        }
        Commands::Svg { zone, output, at } => {
            let reading = renderer.reading(instant_or_now(at), &zone)?;
            let svg = standalone_svg(&reading.angles);
            match output {
                Some(path) => write_output(&path, &svg).await?,
                None => print!("{}", svg),
            }
        }
        Commands::Html { output, at } => {
            if Path::new(&output).extension().and_then(|e| e.to_str()) != Some("html") {
                tracing::warn!("{} does not end in .html; browsers may not render it", output);
            }
            let frame = Dashboard::build(&state, &renderer, instant_or_now(at));
            write_output(&output, &render_html(&frame, false)).await?;
        }
    }

    Ok(())
}
