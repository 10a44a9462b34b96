use crate::app::views::ExportFormat;
use crate::config::toml_config::TomlConfig;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "world-clock")]
#[command(about = "Live multi-timezone clock dashboard")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Zone to show; repeat to build the list. Replaces the configured zones.
    #[arg(short = 'z', long = "zone", value_name = "ZONE")]
    pub zones: Vec<String>,

    #[arg(long)]
    pub title: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Redraw every tick and accept add/remove/list/search/quit on stdin
    Watch {
        /// Also rewrite this HTML page every tick
        #[arg(long)]
        html: Option<String>,

        #[arg(long)]
        no_terminal: bool,

        /// Stop after this many ticks
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        ticks: Option<u64>,

        #[arg(long)]
        interval_ms: Option<u64>,
    },
    /// Print the dashboard once
    Show {
        #[arg(long, value_parser = parse_instant)]
        at: Option<DateTime<Utc>>,
    },
    /// Print the summary table
    Summary {
        #[arg(short, long, value_enum, default_value = "text")]
        format: ExportFormat,

        #[arg(long, value_parser = parse_instant)]
        at: Option<DateTime<Utc>>,
    },
    /// List known timezone identifiers
    Zones {
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Write one zone's analog clock as an SVG document
    Svg {
        zone: String,

        #[arg(short, long)]
        output: Option<String>,

        #[arg(long, value_parser = parse_instant)]
        at: Option<DateTime<Utc>>,
    },
    /// Write the dashboard as a static HTML page
    Html {
        #[arg(short, long)]
        output: String,

        #[arg(long, value_parser = parse_instant)]
        at: Option<DateTime<Utc>>,
    },
}

/// RFC 3339, e.g. `2024-01-15T12:00:00Z`.
pub fn parse_instant(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("expected RFC 3339 timestamp: {}", e))
}

impl CliConfig {
    /// Command-line flags win over the file.
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if !self.zones.is_empty() {
            tracing::debug!("Zones overridden from command line: {:?}", self.zones);
            config.dashboard.zones = Some(self.zones.clone());
        }
        if let Some(title) = &self.title {
            config.dashboard.title = Some(title.clone());
        }
        if self.verbose {
            config.logging.level = Some("debug".to_string());
        }
        if let Some(format) = self.log_format {
            let name = match format {
                LogFormat::Text => "text",
                LogFormat::Json => "json",
            };
            config.logging.format = Some(name.to_string());
        }
        if let Some(Commands::Watch {
            html,
            no_terminal,
            interval_ms,
            ..
        }) = &self.command
        {
            if html.is_some() {
                config.output.html_path = html.clone();
            }
            if *no_terminal {
                config.output.terminal = Some(false);
            }
            if interval_ms.is_some() {
                config.dashboard.tick_interval_ms = *interval_ms;
            }
        }
    }
}
