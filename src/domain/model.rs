use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Analog hand positions in degrees, clockwise from twelve o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

/// Wall-clock view of one instant in one zone. Derived every tick, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClockReading {
    pub zone_id: String,
    pub local: NaiveDateTime,
    pub utc_offset_hours: f64,
    pub abbreviation: String,
    pub angles: HandAngles,
}

impl ClockReading {
    pub fn label(&self) -> String {
        display_label(&self.zone_id)
    }
}

/// One line of the "at a glance" table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Current Time")]
    pub time: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Difference")]
    pub difference: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClockCard {
    pub label: String,
    pub digital: String,
    pub long_date: String,
    pub reading: ClockReading,
    pub svg: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FrameContent {
    Empty {
        prompt: String,
    },
    Clocks {
        cards: Vec<ClockCard>,
        /// `None` when the base zone itself could not be resolved.
        summary: Option<Vec<SummaryRow>>,
    },
}

/// Everything a view needs to draw one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardFrame {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub notices: Vec<Notice>,
    pub content: FrameContent,
}

impl DashboardFrame {
    pub fn cards(&self) -> &[ClockCard] {
        match &self.content {
            FrameContent::Clocks { cards, .. } => cards,
            FrameContent::Empty { .. } => &[],
        }
    }

    pub fn summary(&self) -> Option<&[SummaryRow]> {
        match &self.content {
            FrameContent::Clocks { summary, .. } => summary.as_deref(),
            FrameContent::Empty { .. } => None,
        }
    }
}

/// "America/Argentina/Buenos_Aires" -> "America/Argentina/Buenos Aires"
pub fn display_label(zone_id: &str) -> String {
    zone_id.replace('_', " ")
}
