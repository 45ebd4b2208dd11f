//! Keyword tables driving message classification.
//!
//! The tables are plain data: named, ordered slices that the classifier and
//! the dialogue policy match against the lowercased message text. Matching is
//! substring containment, so short stems ("похуде", "диет") deliberately
//! catch inflected forms.

/// Keywords meaning the user wants a human operator or a direct contact.
pub static CONTACT_KEYWORDS: &[&str] = &[
    "контакт",
    "оператор",
    "связаться",
    "телефон",
    "позвонить",
    "номер",
    "написать",
    "вацап",
    "ватсап",
    "whatsapp",
    "viber",
    "вайбер",
    "telegram",
    "консультация",
];

/// Greetings and courtesy phrases. A message counts as a greeting only when
/// it is short (fewer than 5 tokens); see [`crate::classify::classify`].
pub static GREETING_KEYWORDS: &[&str] = &[
    "привет",
    "здравствуй",
    "здравствуйте",
    "добрый день",
    "доброе утро",
    "добрый вечер",
    "приветствую",
    "хай",
    "хеллоу",
    "hi",
    "hello",
    "hey",
    "как дела",
    "как жизнь",
    "ку",
    "йо",
    "натали",
    "наталья",
    "алина",
    "катерина",
    "доктор",
    "спасибо",
    "благодарю",
];

/// Domain keywords that gate unsolicited replies in group chats.
///
/// Three groups: medical terms, trip/logistics terms, and weight-loss terms.
pub static TRIGGER_KEYWORDS: &[&str] = &[
    // Medical terms
    "спина",
    "позвоночник",
    "давление",
    "зуб",
    "стоматолог",
    "миома",
    "киста",
    "фиброма",
    "женское",
    "мужское",
    "бесплодие",
    "грыжа",
    "межпозвоночная",
    "косметолог",
    "лечение",
    "болит",
    "боль",
    "голова",
    "простатит",
    "аденома",
    "геморрой",
    "варикоз",
    "сосуды",
    "сердце",
    "диабет",
    "суставы",
    "колено",
    "тазобедренный",
    "желудок",
    "кишечник",
    "печень",
    "кожа",
    "псориаз",
    "иглоукалывание",
    "массаж",
    "банки",
    "травы",
    "иглы",
    "операция",
    // Trip and logistics
    "цена",
    "стоимость",
    "тур",
    "записаться",
    "клиника",
    "врач",
    "доктор",
    "приехать",
    "визит",
    "виза",
    "граница",
    "перелет",
    "проживание",
    "гостиница",
    "хуньчунь",
    "китай",
    "яньцзи",
    "прейскурант",
    "расценки",
    "акция",
    "скидка",
    // Weight and diet
    "похудеть",
    "похудение",
    "вес",
    "лишний вес",
    "диета",
    "жир",
    "стройность",
    "фигура",
    "талия",
    "целлюлит",
    "ожирение",
    "метаболизм",
    "обмен веществ",
    "аппетит",
];

/// Stems that mark a message as touching the weight-loss topic. Matching any
/// of these tags the session with [`WEIGHT_LOSS_TOPIC`].
pub static WEIGHT_KEYWORDS: &[&str] = &[
    "похуде", "вес", "диет", "жир", "лишн", "строй", "фигур",
];

/// Topic label recorded in the session when weight keywords match.
pub const WEIGHT_LOSS_TOPIC: &str = "похудение";

/// Returns the subset of `keywords` contained in `lowered`.
///
/// The caller is expected to pass an already-lowercased message so repeated
/// table lookups do not re-lowercase the text.
pub fn matched_keywords(lowered: &str, keywords: &'static [&'static str]) -> Vec<&'static str> {
    keywords
        .iter()
        .copied()
        .filter(|keyword| lowered.contains(keyword))
        .collect()
}

/// Returns true when any keyword from the table occurs in `lowered`.
pub fn contains_any(lowered: &str, keywords: &'static [&'static str]) -> bool {
    keywords.iter().any(|keyword| lowered.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_keywords_match_substrings() {
        assert!(contains_any("дайте телефончик", CONTACT_KEYWORDS));
        assert!(contains_any("напишите мне в whatsapp", CONTACT_KEYWORDS));
        assert!(!contains_any("болит спина", CONTACT_KEYWORDS));
    }

    #[test]
    fn test_trigger_keywords_cover_all_groups() {
        // One representative per group
        assert!(contains_any("болит спина", TRIGGER_KEYWORDS));
        assert!(contains_any("сколько стоит тур", TRIGGER_KEYWORDS));
        assert!(contains_any("хочу похудеть", TRIGGER_KEYWORDS));
    }

    #[test]
    fn test_matched_keywords_returns_all_hits() {
        let matched = matched_keywords("болит спина и голова", TRIGGER_KEYWORDS);
        assert!(matched.contains(&"болит"));
        assert!(matched.contains(&"спина"));
        assert!(matched.contains(&"голова"));
    }

    #[test]
    fn test_weight_stems_catch_inflected_forms() {
        assert!(contains_any("хочу похудеть к лету", WEIGHT_KEYWORDS));
        assert!(contains_any("сижу на диете", WEIGHT_KEYWORDS));
        assert!(!contains_any("болит голова", WEIGHT_KEYWORDS));
    }
}
