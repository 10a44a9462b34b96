use crate::app::views::{render_html, render_text};
use crate::app::views::terminal::CLEAR_SCREEN;
use crate::domain::model::DashboardFrame;
use crate::domain::ports::{FrameSink, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::Write;

/// Prints the text view. `clear` wipes the screen first so the live loop redraws in place.
pub struct TerminalSink<W: Write + Send> {
    out: W,
    clear: bool,
}

impl<W: Write + Send> TerminalSink<W> {
    pub fn new(out: W, clear: bool) -> Self {
        Self { out, clear }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[async_trait]
impl<W: Write + Send> FrameSink for TerminalSink<W> {
    fn name(&self) -> &str {
        "terminal"
    }

    async fn present(&mut self, frame: &DashboardFrame) -> Result<()> {
        if self.clear {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        self.out.write_all(render_text(frame).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Rewrites an HTML page through `Storage` on every frame.
pub struct HtmlFileSink<S: Storage> {
    storage: S,
    file_name: String,
    auto_refresh: bool,
}

impl<S: Storage> HtmlFileSink<S> {
    pub fn new(storage: S, file_name: impl Into<String>, auto_refresh: bool) -> Self {
        Self {
            storage,
            file_name: file_name.into(),
            auto_refresh,
        }
    }
}

#[async_trait]
impl<S: Storage> FrameSink for HtmlFileSink<S> {
    fn name(&self) -> &str {
        &self.file_name
    }

    async fn present(&mut self, frame: &DashboardFrame) -> Result<()> {
        let page = render_html(frame, self.auto_refresh);
        self.storage
            .write_file(&self.file_name, page.as_bytes())
            .await
    }
}
