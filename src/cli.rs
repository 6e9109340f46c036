//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  mkv-sub-extractor video.mkv            Extract interactively
  mkv-sub-extractor video.mkv -t 1,3     Extract tracks 1 and 3
  mkv-sub-extractor -o subs/ video.mkv   Output to subs/ directory
  mkv-sub-extractor --list video.mkv     List subtitle tracks
  mkv-sub-extractor                      Pick an MKV file in the current directory";

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "mkv-sub-extractor",
    version,
    about = "Extract subtitle tracks from MKV files to ASS format",
    after_help = EXAMPLES
)]
pub struct Cli {
    /// MKV file to extract subtitles from. If omitted, pick one from the current directory
    #[arg(value_name = "FILE.mkv")]
    pub file: Option<PathBuf>,

    /// Track numbers to extract, comma-separated (e.g. -t 1,3)
    #[arg(short, long, value_name = "N", value_delimiter = ',')]
    pub track: Vec<usize>,

    /// Output directory for extracted files
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Suppress progress output (only print file paths)
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose/debug output
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// List subtitle tracks and exit
    #[arg(long)]
    pub list: bool,

    /// With --list, print the track listing as JSON
    #[arg(long)]
    pub json: bool,

    /// Write a starter configuration file and exit
    #[arg(long, value_name = "PATH")]
    pub write_default_config: Option<PathBuf>,
}

impl Cli {
    /// `--track` given: extract without prompting.
    pub fn is_scriptable(&self) -> bool {
        !self.track.is_empty()
    }

    /// `--list` or `--json`: print tracks without extracting.
    pub fn is_listing(&self) -> bool {
        self.list || self.json
    }
}
