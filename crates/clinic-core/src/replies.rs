//! Fixed reply texts and prompt templates.
//!
//! All user-facing wording lives here as data, separate from the decision
//! logic that selects it.

/// Static contacts listing, sent with the operator keyboard.
pub const CONTACTS_LISTING: &str =
    "📱 Связь с клиникой Доктора Ху\n\nВыберите оператора, чтобы написать в WhatsApp 👇";

/// Asks an anonymous user to introduce themselves (private greeting path).
pub const ASK_NAME: &str = "👨‍⚕️ Секретарь Доктора Ху к вашим услугам!\n\n\
     Как я могу к вам обращаться? Пожалуйста, напишите ваше имя.";

/// `/start` reply for a user who has not introduced themselves yet.
pub const START_ANONYMOUS: &str = "🤖 Бот Доктора Ху активирован!\n\n\
     Как я могу к вам обращаться? Пожалуйста, напишите ваше имя.\n\n\
     После знакомства я отвечу на все ваши вопросы о лечении в Китае, а пока вы можете \
     посетить наш сайт hunchun.ru или связаться с нашими операторами 👇";

/// `/start` reply for an introduced user.
pub fn start_welcome(name: &str) -> String {
    format!(
        "🤖 Здравствуйте, {name}!\n\n\
         Я — секретарь Доктора Ху, готов ответить на ваши вопросы о лечении в Китае.\n\n\
         Вы также можете посетить наш сайт hunchun.ru или связаться напрямую с нашими операторами 👇"
    )
}

/// Greeting for an introduced user in a private chat.
pub fn personalized_greeting(name: &str) -> String {
    format!("Здравствуйте, {name}! Чем я могу вам помочь сегодня?")
}

/// Acknowledgement sent once when a user introduces themselves.
pub fn introduction_ack(name: &str) -> String {
    format!("Приятно познакомиться, {name}! Как я могу помочь вам с лечением в Китае?")
}

/// Builds the generation prompt for an introduced user: the stored name,
/// the accumulated topic list when non-empty, then the raw request.
pub fn personalized_prompt(name: &str, topics: &[&str], text: &str) -> String {
    let mut context = format!("Запрос от пользователя по имени {name}. ");
    if !topics.is_empty() {
        context.push_str(&format!(
            "Ранее интересовался темами: {}. ",
            topics.join(", ")
        ));
    }
    format!("{context}Запрос: {text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personalized_prompt_without_topics() {
        let prompt = personalized_prompt("Анна", &[], "сколько стоит лечение?");
        assert_eq!(
            prompt,
            "Запрос от пользователя по имени Анна. Запрос: сколько стоит лечение?"
        );
    }

    #[test]
    fn test_personalized_prompt_with_topics() {
        let prompt = personalized_prompt("Анна", &["похудение", "спина"], "что посоветуете?");
        assert_eq!(
            prompt,
            "Запрос от пользователя по имени Анна. \
             Ранее интересовался темами: похудение, спина. \
             Запрос: что посоветуете?"
        );
    }
}
