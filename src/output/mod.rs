pub mod formatter;

pub use formatter::{format_lead_detail, format_scored_table, format_tsv, should_use_colors};
