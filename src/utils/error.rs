use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClockError {
    #[error("Unknown timezone: {zone}")]
    UnknownZone { zone: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration parse error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid command '{input}': {reason}")]
    CommandError { input: String, reason: String },

    #[error("Render error: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Timezone,
    Io,
    Configuration,
    Input,
    Rendering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ClockError {
    pub fn unknown_zone(zone: impl Into<String>) -> Self {
        Self::UnknownZone { zone: zone.into() }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownZone { .. } => ErrorCategory::Timezone,
            Self::IoError(_) => ErrorCategory::Io,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::CommandError { .. } => ErrorCategory::Input,
            Self::SerializationError(_) | Self::CsvError(_) | Self::RenderError { .. } => {
                ErrorCategory::Rendering
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // The user just retypes the line.
            Self::CommandError { .. } => ErrorSeverity::Low,
            Self::UnknownZone { .. }
            | Self::SerializationError(_)
            | Self::CsvError(_)
            | Self::RenderError { .. } => ErrorSeverity::Medium,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::UnknownZone { zone } => {
                format!("'{}' is not a timezone this build knows about", zone)
            }
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::ConfigValidationError { field, message } => {
                format!("The configuration could not be parsed ({}): {}", field, message)
            }
            Self::InvalidConfigValueError { field, value, reason } => {
                format!("Setting '{}' has an invalid value '{}': {}", field, value, reason)
            }
            Self::CommandError { input, reason } => {
                format!("Did not understand '{}': {}", input, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Timezone => {
                "Use an IANA identifier such as Europe/Rome; run `world-clock zones --filter <text>` to search"
            }
            ErrorCategory::Io => "Check that the output directory exists and is writable",
            ErrorCategory::Configuration => {
                "Fix the value in the TOML file or override it on the command line"
            }
            ErrorCategory::Input => "Commands are: add <zone>, remove <zone>, list, search <text>, quit",
            ErrorCategory::Rendering => "Retry with --verbose to see which zone failed to render",
        }
    }
}

pub type Result<T> = std::result::Result<T, ClockError>;
