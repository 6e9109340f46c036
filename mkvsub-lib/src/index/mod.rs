//! Track probing
//!
//! Builds [`MediaInfo`](crate::types::MediaInfo) from a file's container header:
//! file size and duration plus codec, language, title and flags for every
//! subtitle stream. No packets are read.

pub mod scanner;
pub mod subtitle;

pub use scanner::probe_file;
pub use subtitle::analyze_subtitle_stream;
