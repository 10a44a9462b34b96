use crate::core::clock::{ClockRenderer, LONG_DATE_FORMAT, TIME_FORMAT};
use crate::core::state::AppState;
use crate::core::svg::analog_clock_svg;
use crate::domain::model::{ClockCard, DashboardFrame, FrameContent, Notice, SummaryRow};
use crate::domain::ports::ZoneDatabase;
use chrono::{DateTime, Utc};

pub const EMPTY_PROMPT: &str = "Add a timezone to get started.";

pub struct Dashboard;

impl Dashboard {
    /// Builds one frame from scratch. Zones the database rejects become error
    /// notices; everything else still renders.
    pub fn build<D: ZoneDatabase>(
        state: &AppState,
        renderer: &ClockRenderer<D>,
        instant: DateTime<Utc>,
    ) -> DashboardFrame {
        let mut notices = state.notices().to_vec();

        let Some(base_id) = state.zones.base() else {
            return DashboardFrame {
                title: state.title.clone(),
                generated_at: instant,
                notices,
                content: FrameContent::Empty {
                    prompt: EMPTY_PROMPT.to_string(),
                },
            };
        };

        let mut cards = Vec::with_capacity(state.zones.len());
        for zone in state.zones.list() {
            match renderer.reading(instant, zone) {
                Ok(reading) => cards.push(ClockCard {
                    label: reading.label(),
                    digital: reading.local.format(TIME_FORMAT).to_string(),
                    long_date: reading.local.format(LONG_DATE_FORMAT).to_string(),
                    svg: analog_clock_svg(&reading.angles),
                    reading,
                }),
                Err(e) => {
                    tracing::error!("Failed to render clock for {}: {}", zone, e);
                    notices.push(Notice::error(e.user_friendly_message()));
                }
            }
        }

        let summary = match renderer.base(instant, base_id) {
            Ok(base) => Some(
                state
                    .zones
                    .list()
                    .iter()
                    .filter_map(|zone| renderer.format_summary_row(instant, zone, &base).ok())
                    .collect::<Vec<SummaryRow>>(),
            ),
            Err(e) => {
                tracing::error!("Summary skipped, base zone unusable: {}", e);
                notices.push(Notice::error(format!(
                    "Summary unavailable: base zone {} could not be resolved.",
                    base_id
                )));
                None
            }
        };

        DashboardFrame {
            title: state.title.clone(),
            generated_at: instant,
            notices,
            content: FrameContent::Clocks { cards, summary },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ChronoTzDatabase;
    use crate::core::zone_set::TimezoneSet;
    use crate::domain::model::NoticeLevel;
    use chrono::TimeZone;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_state_shows_prompt() {
        let renderer = ClockRenderer::new(ChronoTzDatabase::new());
        let state = AppState::new("T", TimezoneSet::new());
        let frame = Dashboard::build(&state, &renderer, instant());

        assert_eq!(
            frame.content,
            FrameContent::Empty {
                prompt: EMPTY_PROMPT.to_string()
            }
        );
        assert!(frame.cards().is_empty());
        assert!(frame.summary().is_none());
    }

    #[test]
    fn test_default_zones_frame() {
        let renderer = ClockRenderer::new(ChronoTzDatabase::new());
        let state = AppState::new("T", TimezoneSet::with_defaults());
        let frame = Dashboard::build(&state, &renderer, instant());

        assert_eq!(frame.cards().len(), 5);
        let tokyo = &frame.cards()[4];
        assert_eq!(tokyo.label, "Asia/Tokyo");
        assert_eq!(tokyo.digital, "21:00:00");
        assert_eq!(tokyo.long_date, "Monday, January 15, 2024");
        assert!(tokyo.svg.starts_with("<svg"));

        let diffs: Vec<&str> = frame
            .summary()
            .unwrap()
            .iter()
            .map(|r| r.difference.as_str())
            .collect();
        assert_eq!(diffs, ["Base", "-1h", "+4h", "+8h", "+16h"]);
    }

    #[test]
    fn test_unknown_zone_does_not_break_frame() {
        let renderer = ClockRenderer::new(ChronoTzDatabase::new());
        let state = AppState::new("T", TimezoneSet::from_ids(["Europe/Rome", "Nowhere/Special"]));
        let frame = Dashboard::build(&state, &renderer, instant());

        assert_eq!(frame.cards().len(), 1);
        assert_eq!(frame.summary().unwrap().len(), 1);
        assert_eq!(frame.notices.len(), 1);
        assert_eq!(frame.notices[0].level, NoticeLevel::Error);
    }

    #[test]
    fn test_unknown_base_skips_summary() {
        let renderer = ClockRenderer::new(ChronoTzDatabase::new());
        let state = AppState::new("T", TimezoneSet::from_ids(["Nowhere/Special", "Europe/Rome"]));
        let frame = Dashboard::build(&state, &renderer, instant());

        assert_eq!(frame.cards().len(), 1);
        assert!(frame.summary().is_none());
        assert_eq!(frame.notices.len(), 2);
    }
}
