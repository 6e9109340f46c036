//! SSA V4 to ASS V4+ header conversion
//!
//! Line-oriented: each line is rewritten according to the section it sits in,
//! with the section tracked as explicit state through a fold. Lines that no
//! rule recognises are passed through untouched.

use std::borrow::Cow;

/// Marker that identifies a legacy SSA style sheet
const LEGACY_STYLES_SECTION: &str = "[V4 Styles]";
const MODERN_STYLES_SECTION: &str = "[V4+ Styles]";

/// The 23-field V4+ style schema
pub const ASS_STYLE_FORMAT: &str = "Format: Name, Fontname, Fontsize, PrimaryColour, \
SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, \
ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, \
Encoding";

/// Number of fields in an SSA V4 `Style:` line
const SSA_STYLE_FIELDS: usize = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Other,
    /// Inside `[V4 Styles]`; only the first `Format:` line is rewritten
    Styles { format_seen: bool },
    Events,
}

/// Map SSA alignment (1-3 bottom, 5-7 top, 9-11 middle) to ASS numpad alignment.
pub fn ssa_alignment_to_ass(value: i32) -> Option<i32> {
    match value {
        1 => Some(1),
        2 => Some(2),
        3 => Some(3),
        5 => Some(7),
        6 => Some(8),
        7 => Some(9),
        9 => Some(4),
        10 => Some(5),
        11 => Some(6),
        _ => None,
    }
}

/// Whether the header uses the legacy SSA dialect.
pub fn is_legacy_header(header: &str) -> bool {
    header.contains(LEGACY_STYLES_SECTION)
}

/// Convert an SSA V4 header to ASS V4+.
///
/// Headers without a `[V4 Styles]` section are returned unchanged, so this is
/// safe to call on any header and idempotent. Both `\n` and `\r\n` line endings
/// are preserved as found.
pub fn convert_ssa_header(header: &str) -> Cow<'_, str> {
    if !is_legacy_header(header) {
        return Cow::Borrowed(header);
    }

    let (lines, _) = header.split('\n').fold(
        (Vec::new(), Section::Other),
        |(mut out, section), raw| {
            let (line, eol) = match raw.strip_suffix('\r') {
                Some(line) => (line, "\r"),
                None => (raw, ""),
            };
            let (converted, next) = convert_line(line, section);
            out.push(format!("{}{}", converted, eol));
            (out, next)
        },
    );

    Cow::Owned(lines.join("\n"))
}

fn convert_line(line: &str, section: Section) -> (Cow<'_, str>, Section) {
    let trimmed = line.trim();

    if let Some(value) = trimmed.strip_prefix("ScriptType:") {
        if value.trim() == "v4.00" {
            return (Cow::Owned(line.replacen("v4.00", "v4.00+", 1)), section);
        }
        return (Cow::Borrowed(line), section);
    }

    if trimmed == LEGACY_STYLES_SECTION {
        return (
            Cow::Owned(line.replacen(LEGACY_STYLES_SECTION, MODERN_STYLES_SECTION, 1)),
            Section::Styles { format_seen: false },
        );
    }

    if trimmed.starts_with('[') {
        let next = if trimmed.eq_ignore_ascii_case("[Events]") {
            Section::Events
        } else {
            Section::Other
        };
        return (Cow::Borrowed(line), next);
    }

    match section {
        Section::Styles { format_seen: false } if trimmed.starts_with("Format:") => (
            Cow::Owned(format!("{}{}", leading_whitespace(line), ASS_STYLE_FORMAT)),
            Section::Styles { format_seen: true },
        ),
        Section::Styles { .. } if trimmed.starts_with("Style:") => {
            match convert_style_line(line) {
                Some(converted) => (Cow::Owned(converted), section),
                None => {
                    tracing::warn!("Leaving unparseable SSA style line as-is: {:?}", trimmed);
                    (Cow::Borrowed(line), section)
                }
            }
        }
        Section::Events if trimmed.starts_with("Format:") => {
            (Cow::Owned(line.replacen("Marked", "Layer", 1)), section)
        }
        Section::Events if trimmed.starts_with("Dialogue:") => {
            let converted = convert_dialogue_line(line)
                .map(Cow::Owned)
                .unwrap_or(Cow::Borrowed(line));
            (converted, section)
        }
        _ => (Cow::Borrowed(line), section),
    }
}

fn leading_whitespace(line: &str) -> &str {
    let body = line.trim_start_matches([' ', '\t']);
    &line[..line.len() - body.len()]
}

/// Remap an 18-field SSA style to the 23-field ASS layout.
///
/// TertiaryColour becomes OutlineColour, Underline/StrikeOut/ScaleX/ScaleY/
/// Spacing/Angle are inserted with neutral values, AlphaLevel is dropped and
/// Alignment is renumbered. Returns `None` when there are too few fields.
fn convert_style_line(line: &str) -> Option<String> {
    let body = line.trim().strip_prefix("Style:")?.trim();
    let f: Vec<&str> = body.split(',').map(str::trim).collect();
    if f.len() < SSA_STYLE_FIELDS {
        return None;
    }

    let alignment = f[12]
        .parse::<i32>()
        .ok()
        .and_then(ssa_alignment_to_ass)
        .map(|a| a.to_string())
        .unwrap_or_else(|| f[12].to_string());

    Some(format!(
        "{}Style: {},{},{},{},{},{},{},{},{},0,0,100,100,0,0,{},{},{},{},{},{},{},{}",
        leading_whitespace(line),
        f[0],
        f[1],
        f[2],
        f[3],
        f[4],
        f[5],
        f[6],
        f[7],
        f[8],
        f[9],
        f[10],
        f[11],
        alignment,
        f[13],
        f[14],
        f[15],
        f[17],
    ))
}

/// `Dialogue: Marked=0,...` becomes `Dialogue: 0,...`.
fn convert_dialogue_line(line: &str) -> Option<String> {
    let body = line.trim().strip_prefix("Dialogue:")?.trim();
    let rest = body.strip_prefix("Marked=")?;
    let comma = rest.find(',')?;
    Some(format!(
        "{}Dialogue: {}{}",
        leading_whitespace(line),
        &rest[..comma],
        &rest[comma..]
    ))
}
