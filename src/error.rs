use colored::Colorize;
use std::fmt::Display;
use std::path::Path;
use thiserror::Error;

/// Process exit codes
pub mod exit {
    pub const SUCCESS: u8 = 0;
    /// General or unexpected error
    pub const GENERAL: u8 = 1;
    /// File not found, not MKV, unreadable
    pub const FILE: u8 = 2;
    /// No subtitles, image-only, unknown track
    pub const TRACK: u8 = 3;
    /// Write failure or partial failure
    pub const EXTRACTION: u8 = 4;
}

/// A user-facing error with a code, context and suggestion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{title}")]
pub struct CliError {
    /// Machine-readable code, e.g. `E01`
    pub code: &'static str,
    pub title: &'static str,
    /// Path or identifier the error is about
    pub context: String,
    /// What happened, one sentence
    pub detail: String,
    pub suggestion: Option<&'static str>,
    pub exit_code: u8,
}

const OCR_SUGGESTION: &str =
    "Use OCR tools like SubtitleEdit or PGS2SRT to convert image subtitles to text.";

impl CliError {
    fn new(
        code: &'static str,
        title: &'static str,
        context: impl Into<String>,
        detail: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        Self {
            code,
            title,
            context: context.into(),
            detail: detail.into(),
            suggestion: None,
            exit_code,
        }
    }

    fn suggest(mut self, suggestion: &'static str) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    /// Render rustc-style:
    ///
    /// ```text
    /// error[E01]: File Not Found
    ///   --> video.mkv
    ///    |
    ///    = The file "video.mkv" does not exist or cannot be read.
    ///    = Try: Check the file path and ensure the file exists.
    /// ```
    pub fn render(&self) -> String {
        let title = format!("error[{}]: {}", self.code, self.title).red().bold();
        let arrow = "  -->".blue();
        let pipe = "   |".blue();
        let eq = "   =".blue();

        let mut out = format!(
            "{}\n{} {}\n{}\n{} {}",
            title, arrow, self.context, pipe, eq, self.detail
        );
        if let Some(suggestion) = self.suggestion {
            out.push_str(&format!("\n{} {}", eq, format!("Try: {}", suggestion).green()));
        }
        out
    }

    pub fn conflicting_flags() -> Self {
        Self::new(
            "E00",
            "Conflicting Flags",
            "--quiet and --verbose",
            "The --quiet and --verbose flags cannot be used together.",
            exit::GENERAL,
        )
        .suggest("Use only one of --quiet (-q) or --verbose (-v).")
    }

    pub fn file_not_found(path: &Path) -> Self {
        Self::new(
            "E01",
            "File Not Found",
            path.display().to_string(),
            format!("The file {:?} does not exist or cannot be read.", path),
            exit::FILE,
        )
        .suggest("Check the file path and ensure the file exists.")
    }

    /// A flag that needs a file was given without one
    pub fn file_required(flag: &str) -> Self {
        Self::new(
            "E01",
            "File Not Found",
            "(no file specified)",
            format!("A file path is required when using {}.", flag),
            exit::FILE,
        )
        .suggest("Provide the MKV file path as a positional argument: mkv-sub-extractor video.mkv --track 1,2")
    }

    pub fn not_mkv(path: &Path) -> Self {
        Self::new(
            "E02",
            "Not an MKV File",
            path.display().to_string(),
            format!("The file {:?} does not have a .mkv extension.", path),
            exit::FILE,
        )
        .suggest("Provide a Matroska (.mkv) file.")
    }

    pub fn cannot_read(path: &Path, reason: impl Display) -> Self {
        Self::new(
            "E03",
            "Cannot Read File",
            path.display().to_string(),
            format!("The file {:?} exists but cannot be read: {}", path, reason),
            exit::FILE,
        )
        .suggest("Check file permissions and ensure it is not a directory.")
    }

    pub fn no_mkv_files(dir: &Path) -> Self {
        Self::new(
            "E04",
            "No MKV Files Found",
            dir.display().to_string(),
            format!("No .mkv files were found in the directory {:?}.", dir),
            exit::FILE,
        )
        .suggest("Navigate to a directory containing MKV files, or specify a file path directly.")
    }

    pub fn output_dir(dir: &Path, reason: impl Display) -> Self {
        Self::new(
            "E05",
            "Cannot Create Output Directory",
            dir.display().to_string(),
            format!("Failed to create output directory {:?}: {}", dir, reason),
            exit::FILE,
        )
        .suggest("Check the path and ensure you have write permissions.")
    }

    pub fn ffmpeg_unavailable(reason: impl Display) -> Self {
        Self::new(
            "E06",
            "FFmpeg Unavailable",
            "libavformat",
            format!("FFmpeg could not be initialized: {}", reason),
            exit::GENERAL,
        )
        .suggest("Check that the FFmpeg shared libraries are installed.")
    }

    pub fn prompt_failed(reason: impl Display) -> Self {
        Self::new(
            "E07",
            "Prompt Failed",
            "terminal",
            format!("The interactive prompt could not be shown: {}", reason),
            exit::GENERAL,
        )
        .suggest("Run in a terminal, or use --track to select tracks non-interactively.")
    }

    pub fn config_write(path: &Path, reason: impl Display) -> Self {
        Self::new(
            "E08",
            "Cannot Write Configuration",
            path.display().to_string(),
            format!("Failed to write configuration file {:?}: {}", path, reason),
            exit::GENERAL,
        )
    }

    pub fn internal(reason: impl Display) -> Self {
        Self::new("E09", "Internal Error", "mkv-sub-extractor", reason.to_string(), exit::GENERAL)
    }

    pub fn no_subtitle_tracks(path: &Path) -> Self {
        Self::new(
            "E10",
            "No Subtitle Tracks",
            path.display().to_string(),
            format!("The file {:?} contains no subtitle tracks.", path),
            exit::TRACK,
        )
    }

    pub fn no_extractable_tracks(path: &Path) -> Self {
        Self::new(
            "E11",
            "No Extractable Subtitle Tracks",
            path.display().to_string(),
            format!(
                "The file {:?} contains only image-based subtitle tracks (e.g., PGS, VobSub) \
                 which cannot be extracted as text.",
                path
            ),
            exit::TRACK,
        )
        .suggest(OCR_SUGGESTION)
    }

    pub fn image_track_selected(index: usize, format_type: &str) -> Self {
        Self::new(
            "E12",
            "Image-Based Track Selected",
            format!("Track {} ({})", index, format_type),
            format!(
                "Track {} is an image-based subtitle ({}) and cannot be extracted as text.",
                index, format_type
            ),
            exit::TRACK,
        )
        .suggest(OCR_SUGGESTION)
    }

    pub fn track_not_found(index: usize, path: &Path) -> Self {
        Self::new(
            "E13",
            "Track Not Found",
            path.display().to_string(),
            format!("Track number {} does not exist in {:?}.", index, path),
            exit::TRACK,
        )
        .suggest("Run with --list to see the available tracks.")
    }

    pub fn no_tracks_selected() -> Self {
        Self::new(
            "E14",
            "No Tracks Selected",
            "track selector",
            "No subtitle tracks were selected for extraction.",
            exit::TRACK,
        )
        .suggest("Press Space to toggle a track before confirming with Enter.")
    }

    /// A text track in a format that has no ASS conversion
    pub fn unsupported_track(index: usize, format_type: &str) -> Self {
        Self::new(
            "E15",
            "Unsupported Subtitle Format",
            format!("Track {} ({})", index, format_type),
            format!(
                "Track {} is a {} text subtitle, which cannot be converted to ASS.",
                index, format_type
            ),
            exit::TRACK,
        )
        .suggest("Select an SRT, SSA or ASS track.")
    }

    pub fn extraction_failed(index: usize, reason: impl Display) -> Self {
        Self::new(
            "E20",
            "Extraction Failed",
            format!("Track {}", index),
            format!("Failed to extract track {}: {}", index, reason),
            exit::EXTRACTION,
        )
    }

    pub fn partial_failure(succeeded: usize, failed: usize) -> Self {
        Self::new(
            "E21",
            "Partial Extraction Failure",
            format!("{} succeeded, {} failed", succeeded, failed),
            format!(
                "Extracted {} track(s) successfully, but {} track(s) failed.",
                succeeded, failed
            ),
            exit::EXTRACTION,
        )
        .suggest("Check the error details above for each failed track.")
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(err: &CliError) -> String {
        colored::control::set_override(false);
        err.render()
    }

    #[test]
    fn test_render_with_suggestion() {
        let err = CliError::file_not_found(Path::new("video.mkv"));
        assert_eq!(
            plain(&err),
            "error[E01]: File Not Found\n  --> video.mkv\n   |\n   = The file \"video.mkv\" does not exist or cannot be read.\n   = Try: Check the file path and ensure the file exists."
        );
    }

    #[test]
    fn test_render_without_suggestion() {
        let err = CliError::no_subtitle_tracks(Path::new("a.mkv"));
        let text = plain(&err);
        assert!(text.ends_with("contains no subtitle tracks."));
        assert!(!text.contains("Try:"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::conflicting_flags().exit_code, exit::GENERAL);
        assert_eq!(CliError::not_mkv(Path::new("a.mp4")).exit_code, exit::FILE);
        assert_eq!(CliError::track_not_found(9, Path::new("a.mkv")).exit_code, exit::TRACK);
        assert_eq!(CliError::image_track_selected(2, "PGS").exit_code, exit::TRACK);
        assert_eq!(CliError::extraction_failed(1, "disk full").exit_code, exit::EXTRACTION);
        assert_eq!(CliError::partial_failure(1, 1).exit_code, exit::EXTRACTION);
    }

    #[test]
    fn test_display_is_title() {
        assert_eq!(CliError::image_track_selected(2, "PGS").to_string(), "Image-Based Track Selected");
    }
}
