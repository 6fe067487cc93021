use crate::i18n::LanguageRegistry;

/// Build the message shown for a "find language" request.
///
/// Returns `None` for an empty term: no search runs and nothing is shown.
pub fn search_message(term: &str) -> Option<String> {
    if term.is_empty() {
        return None;
    }

    let matches = LanguageRegistry::get().search(term);
    if matches.is_empty() {
        Some(format!("No languages found matching '{}'", term))
    } else {
        Some(format!("Languages found: {}", matches.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_term_shows_nothing() {
        assert_eq!(search_message(""), None);
    }

    #[test]
    fn test_single_match() {
        assert_eq!(
            search_message("jap").as_deref(),
            Some("Languages found: Japanese")
        );
    }

    #[test]
    fn test_multiple_matches_joined() {
        assert_eq!(
            search_message("an").as_deref(),
            Some("Languages found: Afrikaans, Albanian, Japanese, Spanish, German, Italian")
        );
    }

    #[test]
    fn test_no_match_echoes_term() {
        assert_eq!(
            search_message("XYZ").as_deref(),
            Some("No languages found matching 'XYZ'")
        );
    }

    #[test]
    fn test_whitespace_term_is_searched() {
        // Only "Chinese (Simplified)" has a space in its name
        assert_eq!(
            search_message(" ").as_deref(),
            Some("Languages found: Chinese (Simplified)")
        );
    }
}
