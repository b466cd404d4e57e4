//! Output module for reports and exports
//!
//! This module handles:
//! - Recording and printing crawl statistics
//! - Exporting tables to CSV with value counts
//! - Relative word frequency reports and charts

pub mod chart;
pub mod frequency;
pub mod stats;
pub mod table;

pub use chart::write_frequency_chart;
pub use frequency::{
    bundled_reference, compare_frequencies, load_reference, normalize_counts,
    normalize_frequencies, print_frequency_table, reference_frequencies, Frequencies,
    FrequencyMode, FrequencyRow,
};
pub use stats::{print_crawl_stats, CrawlStats};
pub use table::{print_table, print_value_counts, table_csv_path, value_counts, write_table_csv};
