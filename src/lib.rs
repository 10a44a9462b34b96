pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{ChronoTzDatabase, FixedClock, LocalStorage, SystemClock};
pub use app::DashboardLoop;
pub use config::toml_config::TomlConfig;
pub use core::{clock::ClockRenderer, state::AppState, zone_set::TimezoneSet};
pub use utils::error::{ClockError, Result};
