use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

use mkvsub_lib::{extract_tracks, SubtitleTrack, TrackOutcome};

/// Extract `tracks` from `video` one after another, continuing past failures.
///
/// A progress bar is drawn on stderr unless `quiet`. Returns one outcome per
/// track, in input order.
pub fn extract_with_progress(
    video: &Path,
    tracks: &[SubtitleTrack],
    output_dir: Option<&Path>,
    quiet: bool,
) -> Vec<TrackOutcome> {
    let bar = if quiet {
        ProgressBar::hidden()
    } else {
        progress_bar(tracks.len() as u64)
    };

    let outcomes = extract_tracks(video, tracks, output_dir, |outcome| {
        bar.set_message(format!(
            "[{}] {}",
            outcome.track.index, outcome.track.language_name
        ));
        bar.inc(1);
    });

    bar.finish_and_clear();
    outcomes
}

fn progress_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} Extracting [{bar:30.cyan/blue}] {pos}/{len} tracks {msg}")
        .or_else(|_| ProgressStyle::default_bar().template("Extracting [{bar:30}] {pos}/{len}"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style.progress_chars("=> "));
    bar.enable_steady_tick(Duration::from_millis(120));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_length() {
        let bar = progress_bar(3);
        assert_eq!(bar.length(), Some(3));
        bar.finish_and_clear();
    }

    #[test]
    fn test_quiet_extraction_reports_failures() {
        let track = SubtitleTrack {
            stream_index: 4,
            index: 2,
            language: "jpn".to_string(),
            language_name: "日本語".to_string(),
            format_type: "VobSub".to_string(),
            codec_id: "S_VOBSUB".to_string(),
            name: String::new(),
            is_default: false,
            is_forced: false,
            is_text: false,
            is_extractable: false,
        };
        let outcomes = extract_with_progress(Path::new("none.mkv"), &[track], None, true);
        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].result.is_err());
    }
}
