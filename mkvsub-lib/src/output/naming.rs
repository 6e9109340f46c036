//! Collision-aware output paths for extracted tracks.
//!
//! Paths take the form `{stem}.{lang}.ass`. Later tracks that would collide
//! fall back to the sanitized track title, then to a sequence number.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::SubtitleTrack;

static UNSAFE_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9_\-. ]").unwrap());
static UNDERSCORE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"_+").unwrap());

const MAX_NAME_LEN: usize = 50;

/// Output paths already handed out during one batch.
///
/// Owned by the caller and threaded through every [`generate_output_path`] call
/// of the batch.
#[derive(Debug, Default, Clone)]
pub struct OutputNames {
    used: HashSet<PathBuf>,
}

impl OutputNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.used.contains(path)
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Record `path` if unused. Returns whether it was claimed.
    fn claim(&mut self, path: &Path) -> bool {
        if self.used.contains(path) {
            return false;
        }
        self.used.insert(path.to_path_buf());
        true
    }
}

/// Make a track title safe for use inside a file name.
pub fn sanitize_file_name(name: &str) -> String {
    let replaced = UNSAFE_CHARS.replace_all(name, "_");
    let collapsed = UNDERSCORE_RUNS.replace_all(&replaced, "_");
    let mut result = collapsed.trim_matches(|c| c == '_' || c == ' ').to_string();

    // Only ASCII survives the filter above, so byte truncation is safe
    if result.len() > MAX_NAME_LEN {
        result.truncate(MAX_NAME_LEN);
        let trimmed_len = result.trim_end_matches(|c| c == '_' || c == ' ').len();
        result.truncate(trimmed_len);
    }

    if result.is_empty() {
        "track".to_string()
    } else {
        result
    }
}

/// Choose the output path for `track`, next to `video_path`, and record it in `names`.
pub fn generate_output_path(
    video_path: &Path,
    track: &SubtitleTrack,
    names: &mut OutputNames,
) -> PathBuf {
    let dir = video_path.parent().unwrap_or_else(|| Path::new(""));
    let stem = video_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let lang = match track.language.as_str() {
        "" | "und" => "und",
        other => other,
    };

    let candidate = dir.join(format!("{}.{}.ass", stem, lang));
    if names.claim(&candidate) {
        return candidate;
    }

    if !track.name.is_empty() {
        let candidate = dir.join(format!(
            "{}.{}.{}.ass",
            stem,
            lang,
            sanitize_file_name(&track.name)
        ));
        if names.claim(&candidate) {
            return candidate;
        }
    }

    (2u32..)
        .map(|n| dir.join(format!("{}.{}.{}.ass", stem, lang, n)))
        .find(|candidate| names.claim(candidate))
        .unwrap_or_else(|| dir.join(format!("{}.{}.ass", stem, lang)))
}
