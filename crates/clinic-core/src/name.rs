//! Name extraction from free-form introduction messages.
//!
//! A pure function: it never touches session state. The caller decides
//! whether an extracted name actually triggers the introduction transition
//! (see [`crate::policy`]).

use once_cell::sync::Lazy;
use regex::Regex;

/// Introduction phrase patterns, matched against the lowercased message.
///
/// The first family covers "меня зовут <имя>" style phrases, the second
/// covers "<имя>, это я" style phrases. Patterns compile once; a failure
/// here is a programming error caught by the pattern tests.
static NAME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(
            r"(?:меня зовут|я|моё имя|мое имя|зови меня|обращайтесь ко мне как|можно называть меня) (\w+)",
        )
        .expect("invalid introduction pattern"),
        Regex::new(r"(\w+)(?:, это я| меня зовут| тут| на связи| здесь)")
            .expect("invalid introduction pattern"),
    ]
});

/// Extracts a proper name from an introduction message, if any.
///
/// Rules, in priority order:
/// 1. A trimmed single alphabetic token longer than one character is taken
///    as the name wholesale. This always wins so that a bare "Анна" is never
///    misparsed by the phrase patterns below.
/// 2. Otherwise the introduction phrase patterns are searched
///    case-insensitively; the captured word is the name.
///
/// The returned name is capitalized (first letter uppercased, rest
/// lowercased, Unicode-aware).
pub fn extract_name(text: &str) -> Option<String> {
    let trimmed = text.trim();

    // Bare name: a single alphabetic token
    let mut tokens = trimmed.split_whitespace();
    if let (Some(token), None) = (tokens.next(), tokens.next()) {
        if token.chars().all(char::is_alphabetic) && token.chars().count() > 1 {
            return Some(capitalize(token));
        }
    }

    let lowered = trimmed.to_lowercase();
    for pattern in NAME_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(&lowered) {
            if let Some(word) = captures.get(1) {
                return Some(capitalize(word.as_str()));
            }
        }
    }

    None
}

/// Uppercases the first character and lowercases the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_name() {
        assert_eq!(extract_name("Anna"), Some("Anna".to_string()));
        assert_eq!(extract_name("  Олег  "), Some("Олег".to_string()));
        assert_eq!(extract_name("МАРИНА"), Some("Марина".to_string()));
    }

    #[test]
    fn test_single_character_is_not_a_name() {
        assert_eq!(extract_name("я"), None);
        assert_eq!(extract_name("j"), None);
    }

    #[test]
    fn test_introduction_phrases() {
        assert_eq!(extract_name("меня зовут Олег"), Some("Олег".to_string()));
        assert_eq!(
            extract_name("Здравствуйте, меня зовут марина"),
            Some("Марина".to_string())
        );
        assert_eq!(
            extract_name("зови меня Саша пожалуйста"),
            Some("Саша".to_string())
        );
        assert_eq!(extract_name("Олег, это я"), Some("Олег".to_string()));
        assert_eq!(extract_name("Игорь на связи"), Some("Игорь".to_string()));
    }

    #[test]
    fn test_trailing_ya_wins_over_second_pattern_family() {
        // "Катя на связи" is misparsed: the final letter of the name matches
        // the "я <слово>" phrase before the "<имя> на связи" pattern runs
        assert_eq!(extract_name("Катя на связи"), Some("На".to_string()));
    }

    #[test]
    fn test_plain_question_yields_nothing() {
        assert_eq!(extract_name("как дела сегодня"), None);
        assert_eq!(extract_name("сколько стоит лечение спины?"), None);
    }

    #[test]
    fn test_bare_name_beats_phrase_patterns() {
        // A single token must never be run through the phrase family
        assert_eq!(extract_name("Яна"), Some("Яна".to_string()));
    }

    #[test]
    fn test_non_alphabetic_single_token() {
        assert_eq!(extract_name("12345"), None);
        assert_eq!(extract_name("hi!"), None);
    }
}
