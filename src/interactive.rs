//! Interactive file and track selection

use colored::Colorize;
use dialoguer::{MultiSelect, Select};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use mkvsub_lib::{MediaInfo, SubtitleTrack};

use crate::display::format_track_option;
use crate::error::{CliError, Result};

/// Names of the `.mkv` files directly inside `dir`, sorted.
///
/// The extension match ignores case; names differing only in case are listed
/// once.
pub fn list_mkv_files(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_mkv = Path::new(&name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("mkv"));
        if is_mkv && seen.insert(name.to_lowercase()) {
            files.push(name);
        }
    }

    files.sort();
    Ok(files)
}

/// Ask which MKV file in the working directory to open. `None` if cancelled.
pub fn pick_mkv_file() -> Result<Option<PathBuf>> {
    let dir = std::env::current_dir().map_err(|e| CliError::cannot_read(Path::new("."), e))?;
    let files = list_mkv_files(&dir).map_err(|e| CliError::cannot_read(&dir, e))?;
    if files.is_empty() {
        return Err(CliError::no_mkv_files(&dir));
    }

    let selection = Select::new()
        .with_prompt("Select an MKV file (Esc to cancel)")
        .items(&files)
        .default(0)
        .interact_opt()
        .map_err(CliError::prompt_failed)?;

    Ok(selection.map(|i| dir.join(&files[i])))
}

/// Split into (extractable, image-based) tracks, keeping order.
pub fn partition_tracks(tracks: &[SubtitleTrack]) -> (Vec<&SubtitleTrack>, Vec<&SubtitleTrack>) {
    tracks.iter().partition(|t| t.is_extractable)
}

/// Ask which extractable tracks to extract. `None` if cancelled.
///
/// Image-based tracks are printed dimmed above the selector for context.
pub fn select_tracks(media: &MediaInfo, path: &Path) -> Result<Option<Vec<SubtitleTrack>>> {
    let (extractable, image_based) = partition_tracks(&media.tracks);
    if extractable.is_empty() {
        return Err(CliError::no_extractable_tracks(path));
    }

    if !image_based.is_empty() {
        println!("{}", "  Image-based tracks (not extractable):".dimmed());
        for track in &image_based {
            let line = format!(
                "    {} -- use OCR tools like SubtitleEdit",
                format_track_option(track)
            );
            println!("{}", line.dimmed());
        }
        println!();
    }

    let labels: Vec<String> = extractable.iter().map(|t| format_track_option(t)).collect();
    let selection = MultiSelect::new()
        .with_prompt("Select subtitle tracks to extract (Space to toggle, Enter to confirm, Esc to cancel)")
        .items(&labels)
        .interact_opt()
        .map_err(CliError::prompt_failed)?;

    match selection {
        None => Ok(None),
        Some(indices) if indices.is_empty() => Err(CliError::no_tracks_selected()),
        Some(indices) => Ok(Some(
            indices.into_iter().map(|i| extractable[i].clone()).collect(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_mkv_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.mkv", "A.MKV", "notes.txt", "clip.mp4", "c.Mkv"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
        std::fs::create_dir(dir.path().join("folder.mkv")).unwrap();

        let files = list_mkv_files(dir.path()).unwrap();
        assert_eq!(files, vec!["A.MKV", "b.mkv", "c.Mkv"]);
    }

    #[test]
    fn test_list_mkv_files_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_mkv_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_partition_tracks() {
        let text = SubtitleTrack {
            stream_index: 2,
            index: 1,
            language: "eng".to_string(),
            language_name: "English".to_string(),
            format_type: "SRT".to_string(),
            codec_id: "S_TEXT/UTF8".to_string(),
            name: String::new(),
            is_default: true,
            is_forced: false,
            is_text: true,
            is_extractable: true,
        };
        let image = SubtitleTrack {
            index: 2,
            format_type: "PGS".to_string(),
            codec_id: "S_HDMV/PGS".to_string(),
            is_text: false,
            is_extractable: false,
            ..text.clone()
        };
        let webvtt = SubtitleTrack {
            index: 3,
            format_type: "WebVTT".to_string(),
            codec_id: "S_TEXT/WEBVTT".to_string(),
            is_extractable: false,
            ..text.clone()
        };
        let tracks = vec![image, text, webvtt];

        let (extractable, other) = partition_tracks(&tracks);
        assert_eq!(extractable.iter().map(|t| t.index).collect::<Vec<_>>(), vec![1]);
        assert_eq!(other.iter().map(|t| t.index).collect::<Vec<_>>(), vec![2, 3]);
    }
}
