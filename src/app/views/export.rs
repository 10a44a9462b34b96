use crate::domain::model::SummaryRow;
use crate::utils::error::{ClockError, Result};

pub const SUMMARY_HEADERS: [&str; 4] = ["Location", "Current Time", "Date", "Difference"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    #[default]
    Text,
    Csv,
    Json,
}

pub fn export_summary(rows: &[SummaryRow], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Text => Ok(render_text_table(rows)),
        ExportFormat::Csv => to_csv(rows),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
    }
}

fn to_csv(rows: &[SummaryRow]) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    // Written by hand so an empty table still carries its header.
    wtr.write_record(SUMMARY_HEADERS)?;
    for row in rows {
        wtr.serialize(row)?;
    }

    let bytes = wtr.into_inner().map_err(|e| ClockError::RenderError {
        message: format!("flushing CSV buffer: {}", e),
    })?;
    String::from_utf8(bytes).map_err(|e| ClockError::RenderError {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}

fn cells(row: &SummaryRow) -> [&str; 4] {
    [&row.location, &row.time, &row.date, &row.difference]
}

/// Left-aligned columns separated by two spaces.
pub fn render_text_table(rows: &[SummaryRow]) -> String {
    let mut widths = SUMMARY_HEADERS.map(|h| h.chars().count());
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(cells(row)) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut push_line = |fields: [&str; 4]| {
        let line = fields
            .iter()
            .zip(widths)
            .map(|(f, w)| format!("{:<width$}", f, width = w))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    };

    push_line(SUMMARY_HEADERS);
    for row in rows {
        push_line(cells(row));
    }
    out
}
