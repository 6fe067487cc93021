//! Language registry: Single source of truth for all supported languages.
//!
//! The table is a compile-time constant, so the registry needs no lazy
//! initialization and is never torn down.

/// A language the translation provider understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Provider language code (e.g., "en", "zh", or "auto" for detection)
    pub code: &'static str,

    /// Human-readable name shown to the user (e.g., "English")
    pub name: &'static str,
}

/// Code used by the provider to request source-language detection.
pub const AUTO_CODE: &str = "auto";

/// Source-language detection entry.
pub const AUTO_ENTRY: LanguageEntry = LanguageEntry {
    code: AUTO_CODE,
    name: "Automatic",
};

/// Supported languages, in table order.
const LANGUAGES: [LanguageEntry; 13] = [
    AUTO_ENTRY,
    LanguageEntry { code: "af", name: "Afrikaans" },
    LanguageEntry { code: "sq", name: "Albanian" },
    LanguageEntry { code: "ar", name: "Arabic" },
    LanguageEntry { code: "en", name: "English" },
    LanguageEntry { code: "hi", name: "Hindi" },
    LanguageEntry { code: "mr", name: "Marathi" },
    LanguageEntry { code: "fr", name: "French" },
    LanguageEntry { code: "ja", name: "Japanese" },
    LanguageEntry { code: "zh", name: "Chinese (Simplified)" },
    LanguageEntry { code: "es", name: "Spanish" },
    LanguageEntry { code: "de", name: "German" },
    LanguageEntry { code: "it", name: "Italian" },
];

/// Returned when a display name has no entry in the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown language name: '{name}'")]
pub struct LanguageNotFound {
    pub name: String,
}

/// Global language registry.
///
/// Immutable for the lifetime of the process; obtain it with
/// [`LanguageRegistry::get`].
pub struct LanguageRegistry {
    languages: &'static [LanguageEntry],
}

static REGISTRY: LanguageRegistry = LanguageRegistry {
    languages: &LANGUAGES,
};

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        &REGISTRY
    }

    /// All entries in table order.
    pub fn all_entries(&self) -> &'static [LanguageEntry] {
        self.languages
    }

    /// All entries sorted by display name, the order presented to users.
    pub fn sorted_by_name(&self) -> Vec<&'static LanguageEntry> {
        let mut entries: Vec<_> = self.languages.iter().collect();
        entries.sort_by_key(|lang| lang.name);
        entries
    }

    /// Display names in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.languages.iter().map(|lang| lang.name)
    }

    /// Get a language entry by its provider code.
    pub fn get_by_code(&self, code: &str) -> Option<&'static LanguageEntry> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get a language entry by its exact display name.
    pub fn get_by_name(&self, name: &str) -> Option<&'static LanguageEntry> {
        self.languages.iter().find(|lang| lang.name == name)
    }

    /// Resolve a display name to its provider code.
    ///
    /// Matching is exact and case-sensitive. Callers that only offer names
    /// taken from this registry never see the error.
    pub fn code_for_name(&self, name: &str) -> Result<&'static str, LanguageNotFound> {
        self.get_by_name(name)
            .map(|lang| lang.code)
            .ok_or_else(|| LanguageNotFound {
                name: name.to_string(),
            })
    }

    /// Every display name whose lowercase form contains the lowercase `term`.
    ///
    /// Results follow table order. An empty term matches every name; the
    /// search feature filters that case out before calling.
    pub fn search(&self, term: &str) -> Vec<&'static str> {
        let needle = term.to_lowercase();
        self.languages
            .iter()
            .filter(|lang| lang.name.to_lowercase().contains(&needle))
            .map(|lang| lang.name)
            .collect()
    }
}
