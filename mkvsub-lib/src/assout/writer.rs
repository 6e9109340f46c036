//! ASS script serialization
//!
//! Two entry points share one dialogue emitter:
//! - [`write_passthrough`] keeps the track's own style sheet (ASS/SSA sources)
//! - [`write_synthesized`] emits a built-in header (SubRip sources)
//!
//! Every line is terminated with CRLF. Events are sorted on a private copy of
//! the ordering; the caller's slice is never reordered.

use std::io::Write;

use crate::error::{ExtractError, Result};
use crate::subtitle::format_timestamp;
use crate::types::SubtitleEvent;

use super::header::{convert_ssa_header, ASS_STYLE_FORMAT};

const CRLF: &str = "\r\n";

/// Events-section schema line, without terminator
pub const EVENTS_FORMAT: &str =
    "Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text";

/// `[Script Info]` block of the synthesized header
const SCRIPT_INFO: &[&str] = &[
    "[Script Info]",
    "; Script generated by mkv-sub-extractor",
    "ScriptType: v4.00+",
    "WrapStyle: 0",
    "ScaledBorderAndShadow: yes",
    "YCbCr Matrix: None",
    "PlayResX: 1920",
    "PlayResY: 1080",
];

const DEFAULT_STYLE: &str = "Style: Default,Microsoft YaHei,60,&H00FFFFFF,&H000000FF,\
&H00000000,&H80000000,0,0,0,0,100,100,0,0,1,2,1,2,10,10,40,1";

/// The built-in header used for plain-text sources, CRLF terminated.
pub fn default_header() -> String {
    let mut header = String::new();
    for line in SCRIPT_INFO {
        header.push_str(line);
        header.push_str(CRLF);
    }
    header.push_str(CRLF);
    header.push_str("[V4+ Styles]");
    header.push_str(CRLF);
    header.push_str(ASS_STYLE_FORMAT);
    header.push_str(CRLF);
    header.push_str(DEFAULT_STYLE);
    header.push_str(CRLF);
    header
}

/// What the events section of a passthrough header already provides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EventsSection {
    present: bool,
    has_format: bool,
}

/// Locate `[Events]` (case-insensitive) and check whether its first non-blank
/// line is a `Format:` line. `header` must already use `\n` line endings.
fn inspect_events_section(header: &str) -> EventsSection {
    // ASCII lowering keeps byte offsets aligned with `header`
    let Some(idx) = header.to_ascii_lowercase().find("[events]") else {
        return EventsSection {
            present: false,
            has_format: false,
        };
    };

    let has_format = header[idx..]
        .split('\n')
        .skip(1)
        .map(str::trim)
        .find(|line| !line.is_empty())
        .is_some_and(|line| line.starts_with("Format:"));

    EventsSection {
        present: true,
        has_format,
    }
}

fn write_str<W: Write>(w: &mut W, s: &str, stage: &'static str) -> Result<()> {
    w.write_all(s.as_bytes()).map_err(ExtractError::write(stage))
}

fn write_dialogue<W: Write>(w: &mut W, ev: &SubtitleEvent, text: &str) -> Result<()> {
    write!(
        w,
        "Dialogue: {},{},{},{},{},{},{},{},{},{}{}",
        ev.layer,
        format_timestamp(ev.start),
        format_timestamp(ev.end),
        ev.style,
        ev.name,
        ev.margin_l,
        ev.margin_r,
        ev.margin_v,
        ev.effect,
        text,
        CRLF
    )
    .map_err(ExtractError::write("dialogue line"))
}

/// Write a script from the track's own header plus its events.
///
/// Header line endings are normalized first, so CR-only headers convert too.
/// Legacy SSA headers are then converted to V4+ and re-emitted with CRLF; a
/// trailing newline does not produce an extra blank line. `[Events]` and its `Format:` line are appended only when
/// missing. Events are ordered by start time, then read order.
pub fn write_passthrough<W: Write>(
    w: &mut W,
    header: &str,
    events: &[SubtitleEvent],
) -> Result<()> {
    let normalized = header.replace("\r\n", "\n").replace('\r', "\n");
    let header = convert_ssa_header(&normalized);
    let events_section = inspect_events_section(&header);

    let lines: Vec<&str> = header.split('\n').collect();
    for (i, line) in lines.iter().enumerate() {
        if i == lines.len() - 1 && line.is_empty() {
            break;
        }
        write_str(w, line, "header")?;
        write_str(w, CRLF, "header")?;
    }

    if !events_section.present {
        write_str(w, "\r\n[Events]\r\n", "events section")?;
    }
    if !events_section.has_format {
        write_str(w, EVENTS_FORMAT, "events format")?;
        write_str(w, CRLF, "events format")?;
    }

    let mut sorted: Vec<&SubtitleEvent> = events.iter().collect();
    sorted.sort_by_key(|ev| (ev.start, ev.read_order));

    for ev in sorted {
        write_dialogue(w, ev, &ev.text)?;
    }

    tracing::debug!(
        "Wrote passthrough script: {} events, events section {}",
        events.len(),
        if events_section.present { "kept" } else { "added" }
    );

    Ok(())
}

/// Write a script with the built-in header for plain-text events.
///
/// Events are ordered by start time only. Carriage returns are dropped from the
/// text and newlines become ASS hard breaks (`\N`).
pub fn write_synthesized<W: Write>(w: &mut W, events: &[SubtitleEvent]) -> Result<()> {
    write_str(w, &default_header(), "header")?;
    write_str(w, "\r\n[Events]\r\n", "events section")?;
    write_str(w, EVENTS_FORMAT, "events format")?;
    write_str(w, CRLF, "events format")?;

    let mut sorted: Vec<&SubtitleEvent> = events.iter().collect();
    sorted.sort_by_key(|ev| ev.start);

    for ev in sorted {
        let text = ev.text.replace('\r', "").replace('\n', "\\N");
        write_dialogue(w, ev, &text)?;
    }

    tracing::debug!("Wrote synthesized script: {} events", events.len());

    Ok(())
}
