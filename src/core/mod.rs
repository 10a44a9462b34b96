pub mod clock;
pub mod dashboard;
pub mod state;
pub mod svg;
pub mod zone_set;

pub use crate::domain::model::{ClockCard, ClockReading, DashboardFrame, HandAngles, SummaryRow};
pub use crate::domain::ports::{Clock, ConfigProvider, FrameSink, Storage, ZoneDatabase};
pub use crate::utils::error::Result;
