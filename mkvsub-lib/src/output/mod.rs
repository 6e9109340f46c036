//! Output file naming

pub mod naming;

pub use naming::{generate_output_path, sanitize_file_name, OutputNames};
