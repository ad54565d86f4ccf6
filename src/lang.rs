use std::collections::HashMap;

use once_cell::sync::Lazy;

/// A target language the summarizer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

/// Languages offered for summary output, in display order.
pub static LANGUAGES: &[Language] = &[
    Language { code: "en", name: "English" },
    Language { code: "es", name: "Spanish" },
    Language { code: "fr", name: "French" },
    Language { code: "de", name: "German" },
    Language { code: "it", name: "Italian" },
    Language { code: "pt", name: "Portuguese" },
    Language { code: "nl", name: "Dutch" },
    Language { code: "pl", name: "Polish" },
    Language { code: "ru", name: "Russian" },
    Language { code: "uk", name: "Ukrainian" },
    Language { code: "tr", name: "Turkish" },
    Language { code: "ar", name: "Arabic" },
    Language { code: "he", name: "Hebrew" },
    Language { code: "hi", name: "Hindi" },
    Language { code: "bn", name: "Bengali" },
    Language { code: "id", name: "Indonesian" },
    Language { code: "vi", name: "Vietnamese" },
    Language { code: "th", name: "Thai" },
    Language { code: "zh", name: "Chinese" },
    Language { code: "ja", name: "Japanese" },
    Language { code: "ko", name: "Korean" },
];

static BY_CODE: Lazy<HashMap<&'static str, &'static Language>> =
    Lazy::new(|| LANGUAGES.iter().map(|lang| (lang.code, lang)).collect());

pub fn lookup(code: &str) -> Option<&'static Language> {
    BY_CODE.get(code).copied()
}

pub fn is_supported(code: &str) -> bool {
    BY_CODE.contains_key(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_known_codes() {
        assert_eq!(lookup("en").unwrap().name, "English");
        assert_eq!(lookup("ko").unwrap().name, "Korean");
    }

    #[test]
    fn lookup_rejects_unknown_codes() {
        assert!(lookup("tlh").is_none());
        assert!(!is_supported(""));
        // Codes are matched exactly, not case-folded.
        assert!(!is_supported("EN"));
    }

    #[test]
    fn codes_are_unique() {
        assert_eq!(BY_CODE.len(), LANGUAGES.len());
    }
}
