use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::mpsc;
use world_clock::app::HtmlFileSink;
use world_clock::core::FrameSink;
use world_clock::domain::model::{DashboardFrame, NoticeLevel};
use world_clock::{
    AppState, ChronoTzDatabase, ClockError, ClockRenderer, DashboardLoop, FixedClock, LocalStorage,
    Result, TimezoneSet,
};

#[derive(Clone, Default)]
struct RecordingSink {
    frames: Arc<Mutex<Vec<DashboardFrame>>>,
}

#[async_trait]
impl FrameSink for RecordingSink {
    fn name(&self) -> &str {
        "recording"
    }

    async fn present(&mut self, frame: &DashboardFrame) -> Result<()> {
        self.frames.lock().unwrap().push(frame.clone());
        Ok(())
    }
}

/// Fails on the listed (1-based) calls and succeeds otherwise.
struct FlakySink {
    calls: usize,
    fail_on: Vec<usize>,
}

impl FlakySink {
    fn failing_on(fail_on: &[usize]) -> Self {
        Self {
            calls: 0,
            fail_on: fail_on.to_vec(),
        }
    }

    fn always_failing() -> Self {
        Self::failing_on(&(1..=1000).collect::<Vec<_>>())
    }
}

#[async_trait]
impl FrameSink for FlakySink {
    fn name(&self) -> &str {
        "flaky"
    }

    async fn present(&mut self, _frame: &DashboardFrame) -> Result<()> {
        self.calls += 1;
        if self.fail_on.contains(&self.calls) {
            return Err(ClockError::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk full",
            )));
        }
        Ok(())
    }
}

fn dashboard(sink: RecordingSink) -> DashboardLoop<FixedClock, ChronoTzDatabase> {
    let clock = FixedClock(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap());
    DashboardLoop::new(
        ClockRenderer::new(ChronoTzDatabase::new()),
        clock,
        Duration::from_millis(10),
    )
    .with_sink(sink)
}

fn state() -> AppState {
    AppState::new("Loop Test", TimezoneSet::with_defaults())
}

#[tokio::test]
async fn test_runs_bounded_number_of_ticks() {
    let sink = RecordingSink::default();
    let frames = sink.frames.clone();
    let (tx, rx) = mpsc::channel(8);
    drop(tx);

    let final_state = dashboard(sink).run(state(), rx, Some(3)).await.unwrap();

    assert!(final_state.is_running());
    let frames = frames.lock().unwrap();
    assert_eq!(frames.len(), 3);
    assert!(frames.iter().all(|f| f.cards().len() == 5));
    assert_eq!(frames[0], frames[2]);
}

#[tokio::test]
async fn test_commands_redraw_and_quit() {
    let sink = RecordingSink::default();
    let frames = sink.frames.clone();
    let (tx, rx) = mpsc::channel(8);
    for line in ["add Europe/Paris", "add Asia/Tokyo", "quit"] {
        tx.send(line.to_string()).await.unwrap();
    }

    let final_state = dashboard(sink).run(state(), rx, None).await.unwrap();

    assert!(!final_state.is_running());
    assert_eq!(final_state.zones.len(), 6);
    assert_eq!(final_state.zones.list()[5], "Europe/Paris");

    let frames = frames.lock().unwrap();
    assert!(frames.len() >= 2);
    let last = frames.last().unwrap();
    assert_eq!(last.cards().len(), 6);
    assert_eq!(last.notices[0].level, NoticeLevel::Warning);
}

#[tokio::test]
async fn test_bad_line_surfaces_error_and_keeps_running() {
    let sink = RecordingSink::default();
    let frames = sink.frames.clone();
    let (tx, rx) = mpsc::channel(8);
    tx.send("add Nowhere/Land".to_string()).await.unwrap();
    drop(tx);

    let final_state = dashboard(sink).run(state(), rx, Some(5)).await.unwrap();

    assert!(final_state.is_running());
    assert_eq!(final_state.zones.len(), 5);
    let frames = frames.lock().unwrap();
    assert!(frames
        .iter()
        .any(|f| f.notices.iter().any(|n| n.level == NoticeLevel::Error)));
}

#[tokio::test]
async fn test_html_sink_writes_page() {
    let dir = TempDir::new().unwrap();
    let clock = FixedClock(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap());
    let mut dashboard = DashboardLoop::new(
        ClockRenderer::new(ChronoTzDatabase::new()),
        clock,
        Duration::from_millis(10),
    )
    .with_sink(HtmlFileSink::new(LocalStorage::new(dir.path()), "live/clock.html", true));
    let (_tx, rx) = mpsc::channel(1);

    dashboard.run(state(), rx, Some(1)).await.unwrap();

    let html = std::fs::read_to_string(dir.path().join("live/clock.html")).unwrap();
    assert!(html.contains("<meta http-equiv=\"refresh\" content=\"1\">"));
    assert!(html.contains("Loop Test"));
    assert!(html.contains("<td>Asia/Tokyo</td><td>21:00:00</td>"));
}

#[tokio::test]
async fn test_zero_ticks_draws_nothing() {
    let sink = RecordingSink::default();
    let frames = sink.frames.clone();
    let (_tx, rx) = mpsc::channel(1);

    let final_state = dashboard(sink).run(state(), rx, Some(0)).await.unwrap();

    assert!(final_state.is_running());
    assert!(frames.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_sink_failing_once_does_not_stop_the_loop() {
    let sink = RecordingSink::default();
    let frames = sink.frames.clone();
    let mut dashboard = dashboard(sink).with_sink(FlakySink::failing_on(&[2]));
    let (_tx, rx) = mpsc::channel(1);

    let final_state = dashboard.run(state(), rx, Some(5)).await.unwrap();

    assert!(final_state.is_running());
    assert_eq!(dashboard.sink_count(), 2);
    let frames = frames.lock().unwrap();
    assert_eq!(frames.len(), 5);
    assert!(frames[1].notices.is_empty());
    let warned = &frames[2].notices;
    assert_eq!(warned.len(), 1);
    assert_eq!(warned[0].level, NoticeLevel::Error);
    assert!(warned[0].message.contains("flaky"));
    assert!(warned[0].message.contains("disk full"));
}

#[tokio::test]
async fn test_broken_sink_is_dropped_and_others_continue() {
    let sink = RecordingSink::default();
    let frames = sink.frames.clone();
    let mut dashboard = dashboard(sink).with_sink(FlakySink::always_failing());
    let (_tx, rx) = mpsc::channel(1);

    dashboard.run(state(), rx, Some(6)).await.unwrap();

    assert_eq!(dashboard.sink_count(), 1);
    assert_eq!(frames.lock().unwrap().len(), 6);
}

#[tokio::test]
async fn test_losing_every_sink_is_an_error() {
    let clock = FixedClock(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap());
    let mut dashboard = DashboardLoop::new(
        ClockRenderer::new(ChronoTzDatabase::new()),
        clock,
        Duration::from_millis(10),
    )
    .with_sink(FlakySink::always_failing());
    let (_tx, rx) = mpsc::channel(1);

    let err = dashboard.run(state(), rx, None).await.unwrap_err();

    assert!(matches!(err, ClockError::RenderError { .. }));
    assert_eq!(dashboard.sink_count(), 0);
}
