//! Supported language catalog.
//!
//! Maps short language codes to display names. The simulated legacy
//! detector samples uniformly from this table.

/// Supported `(code, name)` pairs.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("nl", "Dutch"),
    ("ru", "Russian"),
    ("ar", "Arabic"),
    ("zh-cn", "Chinese (Simplified)"),
    ("zh-tw", "Chinese (Traditional)"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("hi", "Hindi"),
    ("tr", "Turkish"),
    ("pl", "Polish"),
    ("sv", "Swedish"),
    ("da", "Danish"),
    ("no", "Norwegian"),
    ("fi", "Finnish"),
    ("cs", "Czech"),
    ("sk", "Slovak"),
    ("hu", "Hungarian"),
    ("ro", "Romanian"),
    ("bg", "Bulgarian"),
    ("hr", "Croatian"),
    ("sl", "Slovenian"),
    ("et", "Estonian"),
    ("lv", "Latvian"),
    ("lt", "Lithuanian"),
    ("uk", "Ukrainian"),
    ("be", "Belarusian"),
    ("mk", "Macedonian"),
    ("sq", "Albanian"),
    ("eu", "Basque"),
    ("gl", "Galician"),
    ("ca", "Catalan"),
    ("cy", "Welsh"),
    ("ga", "Irish"),
    ("mt", "Maltese"),
    ("is", "Icelandic"),
    ("fo", "Faroese"),
    ("he", "Hebrew"),
    ("yi", "Yiddish"),
    ("ur", "Urdu"),
    ("fa", "Persian"),
    ("ps", "Pashto"),
    ("sw", "Swahili"),
    ("zu", "Zulu"),
    ("af", "Afrikaans"),
    ("th", "Thai"),
    ("vi", "Vietnamese"),
    ("id", "Indonesian"),
    ("ms", "Malay"),
    ("tl", "Filipino"),
    ("bn", "Bengali"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("ml", "Malayalam"),
    ("kn", "Kannada"),
    ("gu", "Gujarati"),
    ("pa", "Punjabi"),
    ("ne", "Nepali"),
    ("si", "Sinhala"),
    ("my", "Burmese"),
    ("km", "Khmer"),
    ("lo", "Lao"),
    ("ka", "Georgian"),
    ("am", "Amharic"),
    ("so", "Somali"),
    ("mg", "Malagasy"),
    ("eo", "Esperanto"),
    ("la", "Latin"),
];

/// Look up the display name for a code (case-insensitive).
pub fn language_name(code: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}

/// Display name for a code, or `Unknown (<code>)` when not in the catalog.
pub fn display_name(code: &str) -> String {
    match language_name(code) {
        Some(name) => name.to_string(),
        None => format!("Unknown ({})", code.to_lowercase()),
    }
}

/// All supported codes.
pub fn codes() -> impl Iterator<Item = &'static str> {
    SUPPORTED_LANGUAGES.iter().map(|(code, _)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup() {
        assert_eq!(language_name("en"), Some("English"));
        assert_eq!(language_name("ZH-CN"), Some("Chinese (Simplified)"));
        assert_eq!(language_name("xx"), None);
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(display_name("FR"), "French");
        assert_eq!(display_name("XX"), "Unknown (xx)");
    }

    #[test]
    fn test_codes_are_unique() {
        let unique: HashSet<_> = codes().collect();
        assert_eq!(unique.len(), SUPPORTED_LANGUAGES.len());
        assert!(SUPPORTED_LANGUAGES.len() >= 70);
    }
}
