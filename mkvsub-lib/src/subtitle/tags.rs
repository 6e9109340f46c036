//! SubRip HTML-style markup to ASS override tags.
//!
//! Handles `<b>`, `<i>`, `<u>` and `<font color=...>`. Everything else in angle
//! brackets is dropped. Tag names match case-insensitively. No balancing is
//! attempted: ASS overrides reset at the end of each dialogue line.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static BOLD_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<b>").unwrap());
static BOLD_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</b>").unwrap());
static ITALIC_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<i>").unwrap());
static ITALIC_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</i>").unwrap());
static UNDERLINE_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<u>").unwrap());
static UNDERLINE_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</u>").unwrap());

/// `<font color="#RRGGBB">`, either quote style
static FONT_COLOR_HEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<font\s+color=["']#([0-9a-f]{6})["']>"#).unwrap());

/// `<font color="red">`, either quote style
static FONT_COLOR_NAMED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<font\s+color=["']([a-z]+)["']>"#).unwrap());

static FONT_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</font>").unwrap());

static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Resolve one of the supported color names to `RRGGBB`.
fn named_color(name: &str) -> Option<&'static str> {
    match name.to_ascii_lowercase().as_str() {
        "red" => Some("FF0000"),
        "blue" => Some("0000FF"),
        "green" => Some("008000"),
        "yellow" => Some("FFFF00"),
        "white" => Some("FFFFFF"),
        "cyan" => Some("00FFFF"),
        "magenta" => Some("FF00FF"),
        _ => None,
    }
}

/// Build `{\c&HBBGGRR&}` from an `RRGGBB` string.
fn color_override(rgb: &str) -> String {
    let rgb = rgb.to_ascii_uppercase();
    format!("{{\\c&H{}{}{}&}}", &rgb[4..6], &rgb[2..4], &rgb[0..2])
}

/// Translate SubRip inline markup into ASS override codes.
///
/// Unknown color names drop the opening tag without emitting an override.
pub fn translate_tags(text: &str) -> String {
    let text = BOLD_OPEN.replace_all(text, r"{\b1}");
    let text = BOLD_CLOSE.replace_all(&text, r"{\b0}");
    let text = ITALIC_OPEN.replace_all(&text, r"{\i1}");
    let text = ITALIC_CLOSE.replace_all(&text, r"{\i0}");
    let text = UNDERLINE_OPEN.replace_all(&text, r"{\u1}");
    let text = UNDERLINE_CLOSE.replace_all(&text, r"{\u0}");

    let text = FONT_COLOR_HEX.replace_all(&text, |caps: &Captures| color_override(&caps[1]));
    let text = FONT_COLOR_NAMED.replace_all(&text, |caps: &Captures| {
        named_color(&caps[1]).map(color_override).unwrap_or_default()
    });
    let text = FONT_CLOSE.replace_all(&text, r"{\c}");

    ANY_TAG.replace_all(&text, "").into_owned()
}
