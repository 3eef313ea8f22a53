pub mod format;

pub use format::{format_file_size, format_file_size_with_precision};
