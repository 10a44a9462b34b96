use crate::domain::model::DashboardFrame;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::time::Duration;

/// Authoritative source of IANA zone identifiers and their rules.
pub trait ZoneDatabase: Send + Sync {
    fn lookup(&self, id: &str) -> Option<Tz>;

    /// Every identifier the database knows, in its canonical order.
    fn zone_ids(&self) -> Vec<&'static str>;

    fn contains(&self, id: &str) -> bool {
        self.lookup(id).is_some()
    }
}

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn title(&self) -> &str;
    fn zones(&self) -> &[String];
    fn tick_interval(&self) -> Duration;
    fn html_path(&self) -> Option<&str>;
    fn terminal_enabled(&self) -> bool;
}

/// Somewhere a finished frame gets shown: a terminal, an HTML file, a test buffer.
#[async_trait]
pub trait FrameSink: Send {
    fn name(&self) -> &str;
    async fn present(&mut self, frame: &DashboardFrame) -> Result<()>;
}
