pub mod export;
pub mod html;
pub mod terminal;

pub use export::{export_summary, ExportFormat};
pub use html::render_html;
pub use terminal::render_text;
