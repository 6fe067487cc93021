//! Language table and lookups.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages
//! - `language`: Type-safe Language handle validated against the registry
//!
//! # Example
//!
//! ```rust,ignore
//! use quick_translate::i18n::{Language, LanguageRegistry};
//!
//! let japanese = Language::from_name("Japanese")?;
//! let matches = LanguageRegistry::get().search("an");
//! ```

mod language;
mod registry;

pub use language::Language;
pub use registry::{LanguageEntry, LanguageNotFound, LanguageRegistry, AUTO_CODE};
