//! Track language code to display name resolution

use isolang::Language;

/// ISO 639-2/B bibliographic codes that differ from their 639-2/T form.
fn bibliographic_to_terminology(code: &str) -> &str {
    match code {
        "fre" => "fra",
        "ger" => "deu",
        "dut" => "nld",
        "gre" => "ell",
        "chi" => "zho",
        "cze" => "ces",
        "ice" => "isl",
        "alb" => "sqi",
        "arm" => "hye",
        "baq" => "eus",
        "bur" => "mya",
        "per" => "fas",
        "geo" => "kat",
        "may" => "msa",
        "mac" => "mkd",
        "rum" => "ron",
        "slo" => "slk",
        "wel" => "cym",
        other => other,
    }
}

fn lookup(code: &str) -> Option<Language> {
    match code.len() {
        2 => Language::from_639_1(code),
        3 => Language::from_639_3(bibliographic_to_terminology(code)),
        _ => None,
    }
}

/// Resolve a container language code to a human-readable name.
///
/// Prefers the language's own name (e.g. "日本語"), then the English name.
/// Empty and `und` give "Unknown"; unrecognised codes are returned as-is.
pub fn resolve_language_name(code: &str) -> String {
    let normalized = code.trim().to_lowercase();
    if normalized.is_empty() || normalized == "und" {
        return "Unknown".to_string();
    }

    match lookup(&normalized) {
        Some(lang) => lang
            .to_autonym()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| lang.to_name())
            .to_string(),
        None => code.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_and_empty() {
        assert_eq!(resolve_language_name(""), "Unknown");
        assert_eq!(resolve_language_name("und"), "Unknown");
        assert_eq!(resolve_language_name("  UND "), "Unknown");
    }

    #[test]
    fn test_english() {
        assert_eq!(resolve_language_name("eng"), "English");
        assert_eq!(resolve_language_name("en"), "English");
    }

    #[test]
    fn test_bibliographic_codes_resolve() {
        assert_ne!(resolve_language_name("fre"), "fre");
        assert_eq!(resolve_language_name("fre"), resolve_language_name("fra"));
        assert_eq!(resolve_language_name("ger"), resolve_language_name("deu"));
    }

    #[test]
    fn test_unrecognised_code_returned_raw() {
        assert_eq!(resolve_language_name("abcd"), "abcd");
        assert_eq!(resolve_language_name("x"), "x");
    }
}
