//! Language type: validated handle onto a registry entry.
//!
//! A `Language` can only be built from a code or display name that exists in
//! the registry, so anything holding one can look up its code without failing.

use crate::i18n::registry::{
    LanguageEntry, LanguageNotFound, LanguageRegistry, AUTO_CODE, AUTO_ENTRY,
};
use anyhow::{bail, Result};
use std::fmt;

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    entry: &'static LanguageEntry,
}

impl Language {
    /// Create a Language from a provider code.
    ///
    /// # Example
    /// ```ignore
    /// let spanish = Language::from_code("es")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(entry) => Ok(Language { entry }),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Create a Language from its exact display name (e.g., "Japanese").
    pub fn from_name(name: &str) -> Result<Language, LanguageNotFound> {
        LanguageRegistry::get()
            .get_by_name(name)
            .map(|entry| Language { entry })
            .ok_or_else(|| LanguageNotFound {
                name: name.to_string(),
            })
    }

    /// Source-language auto-detection.
    pub fn auto() -> Language {
        Language { entry: &AUTO_ENTRY }
    }

    /// Provider code (e.g., "en", "auto").
    pub fn code(&self) -> &'static str {
        self.entry.code
    }

    /// Display name (e.g., "English").
    pub fn name(&self) -> &'static str {
        self.entry.name
    }

    /// Whether this is the detection pseudo-language, which is only
    /// meaningful as a source.
    pub fn is_auto(&self) -> bool {
        self.entry.code == AUTO_CODE
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.entry.name, self.entry.code)
    }
}
