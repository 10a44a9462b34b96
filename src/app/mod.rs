pub mod dashboard_loop;
pub mod input;
pub mod sinks;
pub mod views;

pub use dashboard_loop::DashboardLoop;
pub use sinks::{HtmlFileSink, TerminalSink};
