use crate::adapters::ChronoTzDatabase;
use crate::core::zone_set::DEFAULT_ZONES;
use crate::domain::ports::{ConfigProvider, ZoneDatabase};
use crate::utils::error::{ClockError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_TITLE: &str = "Neon Time Comparator";
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub title: Option<String>,
    pub zones: Option<Vec<String>>,
    pub tick_interval_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub html_path: Option<String>,
    pub terminal: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

fn default_zones() -> &'static [String] {
    static ZONES: OnceLock<Vec<String>> = OnceLock::new();
    ZONES.get_or_init(|| DEFAULT_ZONES.iter().map(|z| z.to_string()).collect())
}

impl TomlConfig {
    /// Loads a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ClockError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ClockError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ClockError::ConfigError {
            message: format!("bad substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Validates every set field; zone ids are checked against `db`.
    pub fn validate_config_with<D: ZoneDatabase>(&self, db: &D) -> Result<()> {
        if let Some(title) = &self.dashboard.title {
            validation::validate_non_empty_string("dashboard.title", title)?;
        }

        validation::validate_zone_ids("dashboard.zones", self.zones(), db)?;

        if let Some(ms) = self.dashboard.tick_interval_ms {
            validation::validate_range("dashboard.tick_interval_ms", ms, 100, 60_000)?;
        }

        if let Some(path) = &self.output.html_path {
            validation::validate_path("output.html_path", path)?;
        }

        validation::validate_one_of("logging.level", self.log_level(), &LOG_LEVELS)?;
        validation::validate_one_of("logging.format", self.log_format(), &LOG_FORMATS)?;

        Ok(())
    }

    /// `logging.level`, one of trace/debug/info/warn/error. Defaults to info.
    pub fn log_level(&self) -> &str {
        self.logging.level.as_deref().unwrap_or("info")
    }

    /// `logging.format`: "text" or "json".
    pub fn log_format(&self) -> &str {
        self.logging.format.as_deref().unwrap_or("text")
    }
}

impl ConfigProvider for TomlConfig {
    // Unset fields fall back to the built-in defaults.
    fn title(&self) -> &str {
        self.dashboard.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    fn zones(&self) -> &[String] {
        self.dashboard.zones.as_deref().unwrap_or_else(|| default_zones())
    }

    fn tick_interval(&self) -> Duration {
        Duration::from_millis(
            self.dashboard
                .tick_interval_ms
                .unwrap_or(DEFAULT_TICK_INTERVAL_MS),
        )
    }

    fn html_path(&self) -> Option<&str> {
        self.output.html_path.as_deref()
    }

    fn terminal_enabled(&self) -> bool {
        self.output.terminal.unwrap_or(true)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config_with(&ChronoTzDatabase::new())
    }
}
