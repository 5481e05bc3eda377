//! Supported interface languages.

/// One selectable interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 code, also the wire value for `target_language`.
    pub code: &'static str,
    /// English name shown in logs and fallbacks.
    pub name: &'static str,
    /// Native-script name shown in the language menu.
    pub native: &'static str,
}

/// The twelve supported languages, English first.
pub const INDIAN_LANGUAGES: [Language; 12] = [
    Language {
        code: "en",
        name: "English",
        native: "English",
    },
    Language {
        code: "hi",
        name: "Hindi",
        native: "हिंदी",
    },
    Language {
        code: "bn",
        name: "Bengali",
        native: "বাংলা",
    },
    Language {
        code: "te",
        name: "Telugu",
        native: "తెలుగు",
    },
    Language {
        code: "ta",
        name: "Tamil",
        native: "தமிழ்",
    },
    Language {
        code: "mr",
        name: "Marathi",
        native: "मराठी",
    },
    Language {
        code: "gu",
        name: "Gujarati",
        native: "ગુજરાતી",
    },
    Language {
        code: "kn",
        name: "Kannada",
        native: "ಕನ್ನಡ",
    },
    Language {
        code: "ml",
        name: "Malayalam",
        native: "മലയാളം",
    },
    Language {
        code: "pa",
        name: "Punjabi",
        native: "ਪੰਜਾਬੀ",
    },
    Language {
        code: "or",
        name: "Odia",
        native: "ଓଡ଼ିଆ",
    },
    Language {
        code: "as",
        name: "Assamese",
        native: "অসমীয়া",
    },
];

impl Language {
    /// Look up a language by its ISO code.
    pub fn by_code(code: &str) -> Option<&'static Language> {
        INDIAN_LANGUAGES.iter().find(|lang| lang.code == code)
    }
}
