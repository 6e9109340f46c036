//! Mode dispatch: listing, scriptable extraction and interactive extraction

use colored::Colorize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use mkvsub_lib::{probe_file, ExtractError, MediaInfo, SubtitleTrack, TrackOutcome};

use crate::cli::Cli;
use crate::config::ExtractorConfig;
use crate::config_file::generate_default_config;
use crate::display::{format_json, format_track_listing};
use crate::error::{exit, CliError, Result};
use crate::interactive::{pick_mkv_file, select_tracks};
use crate::progress::extract_with_progress;

/// Run the command and return the process exit code.
pub fn run(cli: &Cli, config: &ExtractorConfig) -> u8 {
    match dispatch(cli, config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e.render());
            e.exit_code
        }
    }
}

fn dispatch(cli: &Cli, config: &ExtractorConfig) -> Result<u8> {
    if let Some(path) = &cli.write_default_config {
        generate_default_config(path).map_err(|e| CliError::config_write(path, e))?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(exit::SUCCESS);
    }

    validate(cli, config)?;

    mkvsub_lib::init().map_err(CliError::ffmpeg_unavailable)?;
    mkvsub_lib::install_log_filter();
    tracing::debug!("FFmpeg version: {}", mkvsub_lib::ffmpeg_version_info());

    if cli.is_listing() {
        run_listing(cli)
    } else if cli.is_scriptable() {
        run_scriptable(cli, config)
    } else {
        run_interactive(cli, config)
    }
}

/// Checks that need no demuxing: flag conflicts, the input file and the output directory.
pub fn validate(cli: &Cli, config: &ExtractorConfig) -> Result<()> {
    if cli.quiet && cli.verbose {
        return Err(CliError::conflicting_flags());
    }

    if let Some(path) = &cli.file {
        validate_input(path)?;
    }

    if let Some(dir) = &config.output_dir {
        fs::create_dir_all(dir).map_err(|e| CliError::output_dir(dir, e))?;
    }

    Ok(())
}

/// The input must be a readable regular file with an `.mkv` extension.
pub fn validate_input(path: &Path) -> Result<()> {
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(CliError::file_not_found(path)),
        Err(e) => return Err(CliError::cannot_read(path, e)),
    };

    if meta.is_dir() {
        return Err(CliError::cannot_read(path, "path is a directory, not a file"));
    }
    if !has_mkv_extension(path) {
        return Err(CliError::not_mkv(path));
    }

    fs::File::open(path).map_err(|e| CliError::cannot_read(path, e))?;
    Ok(())
}

pub fn has_mkv_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("mkv"))
}

fn probe(path: &Path) -> Result<MediaInfo> {
    probe_file(path).map_err(|e| CliError::cannot_read(path, e))
}

fn run_listing(cli: &Cli) -> Result<u8> {
    let path = cli
        .file
        .as_deref()
        .ok_or_else(|| CliError::file_required("--list"))?;
    let media = probe(path)?;

    if cli.json {
        println!("{}", format_json(&media).map_err(CliError::internal)?);
    } else {
        println!("{}", format_track_listing(&media));
    }
    Ok(exit::SUCCESS)
}

/// Map requested display indices to tracks.
///
/// Repeated indices are extracted once. Every unknown or unextractable index
/// is reported, not just the first.
pub fn resolve_tracks(
    media: &MediaInfo,
    requested: &[usize],
    path: &Path,
) -> std::result::Result<Vec<SubtitleTrack>, Vec<CliError>> {
    let mut resolved: Vec<SubtitleTrack> = Vec::new();
    let mut errors = Vec::new();

    for &index in requested {
        if resolved.iter().any(|t| t.index == index) {
            continue;
        }
        match media.track_by_index(index) {
            None => errors.push(CliError::track_not_found(index, path)),
            Some(t) if !t.is_text => {
                errors.push(CliError::image_track_selected(t.index, &t.format_type))
            }
            Some(t) if !t.is_extractable => {
                errors.push(CliError::unsupported_track(t.index, &t.format_type))
            }
            Some(t) => resolved.push(t.clone()),
        }
    }

    if errors.is_empty() {
        Ok(resolved)
    } else {
        Err(errors)
    }
}

fn run_scriptable(cli: &Cli, config: &ExtractorConfig) -> Result<u8> {
    let path = cli
        .file
        .as_deref()
        .ok_or_else(|| CliError::file_required("--track"))?;
    let media = probe(path)?;

    if media.tracks.is_empty() {
        return Err(CliError::no_subtitle_tracks(path));
    }

    let tracks = match resolve_tracks(&media, &cli.track, path) {
        Ok(tracks) => tracks,
        Err(errors) => {
            for e in errors {
                eprintln!("{}\n", e.render());
            }
            return Ok(exit::TRACK);
        }
    };

    if cli.verbose {
        println!("{}\n", format_track_listing(&media));
        let selected: Vec<String> = tracks
            .iter()
            .map(|t| {
                format!(
                    "[{}] {} ({}) codec={} lang={}",
                    t.index, t.language_name, t.format_type, t.codec_id, t.language
                )
            })
            .collect();
        println!("Selected tracks for extraction: {}\n", selected.join(", "));
    }

    Ok(extract_and_report(path, &tracks, config))
}

fn run_interactive(cli: &Cli, config: &ExtractorConfig) -> Result<u8> {
    let path: PathBuf = match &cli.file {
        Some(p) => p.clone(),
        None => match pick_mkv_file()? {
            Some(p) => p,
            None => {
                println!("Cancelled.");
                return Ok(exit::SUCCESS);
            }
        },
    };

    let media = probe(&path)?;
    if media.info.subtitle_count == 0 {
        return Err(CliError::no_subtitle_tracks(&path));
    }

    println!("{}\n", format_track_listing(&media));

    let Some(tracks) = select_tracks(&media, &path)? else {
        println!("Cancelled.");
        return Ok(exit::SUCCESS);
    };

    Ok(extract_and_report(&path, &tracks, config))
}

fn extract_and_report(path: &Path, tracks: &[SubtitleTrack], config: &ExtractorConfig) -> u8 {
    let outcomes =
        extract_with_progress(path, tracks, config.output_dir.as_deref(), config.quiet);

    let failed: Vec<(usize, &ExtractError)> = outcomes
        .iter()
        .filter_map(|o| o.result.as_ref().err().map(|e| (o.track.index, e)))
        .collect();
    for (index, e) in &failed {
        eprintln!("{}\n", CliError::extraction_failed(*index, e).render());
    }

    if config.quiet {
        // Only the written paths on stdout, for scripting
        for outcome in &outcomes {
            if let Ok(done) = &outcome.result {
                println!("{}", done.path.display());
            }
        }
    } else {
        print_summary(&outcomes);
    }

    let succeeded = outcomes.len() - failed.len();
    if !failed.is_empty() && succeeded > 0 {
        eprintln!("{}", CliError::partial_failure(succeeded, failed.len()).render());
    }

    exit_code(&outcomes)
}

/// One line per track: `  [idx] Language (Format) -> file` or `-> FAILED: reason`.
pub fn summary_lines(outcomes: &[TrackOutcome]) -> Vec<(bool, String)> {
    outcomes
        .iter()
        .map(|o| {
            let prefix = format!(
                "  [{}] {} ({})",
                o.track.index, o.track.language_name, o.track.format_type
            );
            match &o.result {
                Ok(done) => {
                    let name = done
                        .path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| done.path.display().to_string());
                    (true, format!("{} -> {}", prefix, name))
                }
                Err(e) => (false, format!("{} -> FAILED: {}", prefix, e)),
            }
        })
        .collect()
}

fn print_summary(outcomes: &[TrackOutcome]) {
    let lines = summary_lines(outcomes);
    let succeeded = lines.iter().filter(|(ok, _)| *ok).count();
    let failed = lines.len() - succeeded;

    println!();
    if failed == 0 {
        println!("{}", "Extraction complete!".bold());
    } else {
        println!("{}", "Extraction complete with errors.".bold());
    }
    println!();

    for (ok, line) in &lines {
        if *ok {
            println!("{}", line.green());
        } else {
            println!("{}", line.red());
        }
    }

    println!();
    if failed == 0 {
        println!(
            "{}",
            format!("  {} track(s) extracted successfully", succeeded).green()
        );
    } else {
        println!(
            "{}",
            format!("  {} of {} track(s) extracted successfully", succeeded, lines.len()).dimmed()
        );
    }
}

/// 0 if every track was written, otherwise the extraction exit code.
pub fn exit_code(outcomes: &[TrackOutcome]) -> u8 {
    if outcomes.iter().any(|o| o.result.is_err()) {
        exit::EXTRACTION
    } else {
        exit::SUCCESS
    }
}
