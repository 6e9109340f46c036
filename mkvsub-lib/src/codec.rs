//! Matroska subtitle codec ids: display classification and decode dispatch.

pub const CODEC_ASS: &str = "S_TEXT/ASS";
pub const CODEC_SSA: &str = "S_TEXT/SSA";
pub const CODEC_SRT: &str = "S_TEXT/UTF8";

/// How a codec's block payloads are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecFamily {
    /// `ReadOrder,Layer,Style,Name,MarginL,MarginR,MarginV,Effect,Text` blocks (ASS, SSA)
    Structured,
    /// Raw UTF-8 text with optional HTML-style markup (SubRip)
    PlainText,
}

impl CodecFamily {
    /// Exact-match dispatch on the Matroska codec id. `None` means unsupported.
    pub fn from_codec_id(codec_id: &str) -> Option<Self> {
        match codec_id {
            CODEC_ASS | CODEC_SSA => Some(CodecFamily::Structured),
            CODEC_SRT => Some(CodecFamily::PlainText),
            _ => None,
        }
    }
}

/// Return the human-readable format name and whether the codec is text-based.
///
/// Unknown ids yield the raw id and `false`.
pub fn classify_codec(codec_id: &str) -> (String, bool) {
    let known = match codec_id {
        CODEC_SRT => Some(("SRT", true)),
        CODEC_SSA => Some(("SSA", true)),
        CODEC_ASS => Some(("ASS", true)),
        "S_TEXT/WEBVTT" => Some(("WebVTT", true)),
        "S_TEXT/USF" => Some(("USF", true)),
        "S_HDMV/PGS" => Some(("PGS", false)),
        "S_VOBSUB" => Some(("VobSub", false)),
        "S_DVBSUB" => Some(("DVB", false)),
        "S_HDMV/TEXTST" => Some(("HDMV Text", true)),
        "S_ARIBSUB" => Some(("ARIB", true)),
        _ => None,
    };

    match known {
        Some((format_type, is_text)) => (format_type.to_string(), is_text),
        None => (codec_id.to_string(), false),
    }
}

/// Whether this tool can turn the codec into an ASS script.
pub fn is_extractable(codec_id: &str) -> bool {
    CodecFamily::from_codec_id(codec_id).is_some()
}
