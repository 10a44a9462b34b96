use crate::app::views::export::render_text_table;
use crate::domain::model::{DashboardFrame, FrameContent, NoticeLevel};
use std::fmt::Write;

/// ANSI "clear screen, cursor home".
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// `-7.0` -> `UTC-07:00`, `5.75` -> `UTC+05:45`
pub fn format_utc_offset(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let sign = if total_minutes < 0 { '-' } else { '+' };
    let abs = total_minutes.abs();
    format!("UTC{}{:02}:{:02}", sign, abs / 60, abs % 60)
}

pub fn render_text(frame: &DashboardFrame) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", frame.title);
    let _ = writeln!(out, "{}", frame.generated_at.format("%Y-%m-%d %H:%M:%S UTC"));
    out.push('\n');

    for notice in &frame.notices {
        let tag = match notice.level {
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        };
        let _ = writeln!(out, "[{}] {}", tag, notice.message);
    }
    if !frame.notices.is_empty() {
        out.push('\n');
    }

    match &frame.content {
        FrameContent::Empty { prompt } => {
            let _ = writeln!(out, "{}", prompt);
        }
        FrameContent::Clocks { cards, summary } => {
            out.push_str("World Clocks\n");
            let label_width = cards.iter().map(|c| c.label.chars().count()).max().unwrap_or(0);
            for card in cards {
                let a = &card.reading.angles;
                let _ = writeln!(
                    out,
                    "  {:<lw$}  {}  {:<27}  {} {:<5}  hands {:>5.1}/{:>5.1}/{:>5.1}",
                    card.label,
                    card.digital,
                    card.long_date,
                    format_utc_offset(card.reading.utc_offset_hours),
                    card.reading.abbreviation,
                    a.hour,
                    a.minute,
                    a.second,
                    lw = label_width,
                );
            }

            if let Some(rows) = summary {
                out.push_str("\nAt a Glance Summary\n");
                out.push_str(&render_text_table(rows));
            }
        }
    }

    out.push_str("\nCommands: add <zone> | remove <zone> | list | search <text> | quit\n");
    out
}
