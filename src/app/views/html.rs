use crate::domain::model::{DashboardFrame, FrameContent, NoticeLevel};
use std::fmt::Write;

const STYLESHEET: &str = r#"
body { margin: 0; padding: 24px; font-family: 'Roboto', sans-serif; color: #fff;
       background: linear-gradient(135deg, #0f0c29, #302b63, #24243e); min-height: 100vh; }
h1 { font-family: 'Orbitron', sans-serif; text-align: center; font-size: 2.8rem;
     text-shadow: 0 0 10px rgba(102,204,255,0.7); letter-spacing: 1px; }
h2 { font-family: 'Orbitron', sans-serif; }
.clocks { display: flex; flex-wrap: wrap; gap: 20px; }
.clock-card { background: rgba(10,15,30,0.7); border-radius: 15px; padding: 25px; width: 220px;
              border: 1px solid rgba(102,204,255,0.2); text-align: center; }
.timezone-name { font-size: 1.2rem; font-weight: 600; min-height: 50px; }
.digital-clock { font-size: 2rem; font-weight: 700; letter-spacing: 2px; color: #00ccff; margin-top: 20px; }
.date-display { font-size: 1rem; opacity: 0.9; }
.notice { padding: 8px 12px; border-radius: 8px; margin-bottom: 8px; }
.notice.info { background: rgba(0,150,255,0.25); }
.notice.warning { background: rgba(255,180,0,0.3); }
.notice.error { background: rgba(255,0,80,0.3); }
table { border-collapse: collapse; width: 100%; background: rgba(10,15,30,0.7); }
th { background: rgba(0,100,200,0.2); text-align: left; }
th, td { padding: 8px 12px; border-bottom: 1px solid rgba(102,204,255,0.2); }
"#;

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Standalone page. With `auto_refresh` the browser reloads it every second,
/// which is how the live loop keeps an open tab current.
pub fn render_html(frame: &DashboardFrame, auto_refresh: bool) -> String {
    let title = escape_html(&frame.title);
    let mut out = String::with_capacity(16 * 1024);

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    if auto_refresh {
        out.push_str("<meta http-equiv=\"refresh\" content=\"1\">\n");
    }
    let _ = writeln!(out, "<title>{}</title>", title);
    let _ = writeln!(out, "<style>{}</style>\n</head>\n<body>", STYLESHEET);
    let _ = writeln!(out, "<h1>{}</h1>", title);

    for notice in &frame.notices {
        let class = match notice.level {
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        };
        let _ = writeln!(
            out,
            "<div class=\"notice {}\">{}</div>",
            class,
            escape_html(&notice.message)
        );
    }

    match &frame.content {
        FrameContent::Empty { prompt } => {
            let _ = writeln!(out, "<p class=\"notice info\">{}</p>", escape_html(prompt));
        }
        FrameContent::Clocks { cards, summary } => {
            out.push_str("<h2>World Clocks</h2>\n<div class=\"clocks\">\n");
            for card in cards {
                let _ = writeln!(
                    out,
                    "<div class=\"clock-card\"><div class=\"timezone-name\">{}</div>{}<div class=\"digital-clock\">{}</div><div class=\"date-display\">{}</div></div>",
                    escape_html(&card.label),
                    card.svg,
                    card.digital,
                    escape_html(&card.long_date),
                );
            }
            out.push_str("</div>\n");

            if let Some(rows) = summary {
                out.push_str("<h2>At a Glance Summary</h2>\n<table>\n<thead><tr><th>Location</th><th>Current Time</th><th>Date</th><th>Difference</th></tr></thead>\n<tbody>\n");
                for row in rows {
                    let _ = writeln!(
                        out,
                        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                        escape_html(&row.location),
                        row.time,
                        row.date,
                        escape_html(&row.difference),
                    );
                }
                out.push_str("</tbody>\n</table>\n");
            }
        }
    }

    out.push_str("</body>\n</html>\n");
    out
}
