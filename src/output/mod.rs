pub mod dataset;
pub mod formatter;

pub use dataset::{write_dataset, Dataset};
pub use formatter::{format_build_summary, format_profile, should_use_colors};
