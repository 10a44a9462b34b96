use crate::core::clock::ClockRenderer;
use crate::core::dashboard::Dashboard;
use crate::core::state::AppState;
use crate::domain::model::Notice;
use crate::domain::ports::{Clock, FrameSink, ZoneDatabase};
use crate::utils::error::{ClockError, Result};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// Consecutive failed presents after which a sink is dropped.
pub const MAX_SINK_FAILURES: u32 = 3;

struct SinkSlot {
    sink: Box<dyn FrameSink>,
    failures: u32,
}

/// Drives the dashboard: one full redraw per tick, plus one after every user command.
pub struct DashboardLoop<C: Clock, D: ZoneDatabase> {
    renderer: ClockRenderer<D>,
    clock: C,
    tick: Duration,
    sinks: Vec<SinkSlot>,
}

impl<C: Clock, D: ZoneDatabase> DashboardLoop<C, D> {
    pub fn new(renderer: ClockRenderer<D>, clock: C, tick: Duration) -> Self {
        Self {
            renderer,
            clock,
            tick,
            sinks: Vec::new(),
        }
    }

    pub fn with_sink(mut self, sink: impl FrameSink + 'static) -> Self {
        self.sinks.push(SinkSlot {
            sink: Box::new(sink),
            failures: 0,
        });
        self
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Rebuilds the frame from the current instant and hands it to every sink.
    ///
    /// A failing sink does not stop the others. Its error is queued as a notice
    /// for the next frame, and after `MAX_SINK_FAILURES` failures in a row it is
    /// dropped. Only losing every sink is an error.
    pub async fn redraw(&mut self, state: &mut AppState) -> Result<()> {
        let frame = Dashboard::build(state, &self.renderer, self.clock.now());

        for slot in &mut self.sinks {
            match slot.sink.present(&frame).await {
                Ok(()) => slot.failures = 0,
                Err(e) => {
                    slot.failures += 1;
                    tracing::error!(
                        "Sink '{}' failed ({}/{}): {}",
                        slot.sink.name(),
                        slot.failures,
                        MAX_SINK_FAILURES,
                        e
                    );
                    state.note(Notice::error(format!(
                        "Output '{}' failed: {}",
                        slot.sink.name(),
                        e.user_friendly_message()
                    )));
                }
            }
        }

        self.sinks.retain(|slot| {
            let keep = slot.failures < MAX_SINK_FAILURES;
            if !keep {
                tracing::warn!("Dropping sink '{}' after repeated failures", slot.sink.name());
            }
            keep
        });

        if self.sinks.is_empty() {
            return Err(ClockError::RenderError {
                message: "every output failed; nothing left to draw on".to_string(),
            });
        }
        Ok(())
    }

    /// Runs until `quit`, Ctrl-C, or `max_ticks` timer ticks. Returns the final state.
    ///
    /// A closed input channel only stops command handling; the clocks keep ticking.
    pub async fn run(
        &mut self,
        mut state: AppState,
        mut input: mpsc::Receiver<String>,
        max_ticks: Option<u64>,
    ) -> Result<AppState> {
        if max_ticks == Some(0) {
            return Ok(state);
        }

        let mut interval = tokio::time::interval(self.tick);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        let mut ticks = 0u64;
        let mut input_open = true;

        tracing::info!(
            "Dashboard running: {} zone(s), tick every {:?}, {} sink(s)",
            state.zones.len(),
            self.tick,
            self.sinks.len()
        );

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.redraw(&mut state).await?;
                    ticks += 1;
                    if max_ticks.is_some_and(|max| ticks >= max) {
                        tracing::debug!("Reached tick limit ({})", ticks);
                        break;
                    }
                }
                line = input.recv(), if input_open => match line {
                    Some(line) => {
                        state = state.handle_line(&line, self.renderer.database());
                        if !state.is_running() {
                            break;
                        }
                        self.redraw(&mut state).await?;
                    }
                    None => {
                        tracing::debug!("Input channel closed");
                        input_open = false;
                    }
                },
                _ = &mut ctrl_c => {
                    tracing::info!("Interrupted");
                    break;
                }
            }
        }

        Ok(state)
    }
}
