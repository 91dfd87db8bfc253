//! Ranking view: standings ordered by rating and their CSV export

pub mod export;
pub mod standings;

// Re-export commonly used types
pub use export::{to_csv, write_csv, CSV_HEADER, DEFAULT_EXPORT_FILE};
pub use standings::{render_table, standings};
