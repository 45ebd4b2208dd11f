//! Inline keyboards attached to outgoing messages.
//!
//! Two layouts: the full operator listing shown with the contacts reply,
//! and the compact answer keyboard attached to generated answers and
//! greetings. Operator data is static configuration.

use crate::telegram::{InlineKeyboardButton, InlineKeyboardMarkup};

pub const SITE_URL: &str = "https://hunchun.ru";

/// WhatsApp operators, one button each.
static OPERATORS: &[(&str, &str)] = &[
    ("Наталья (общие вопросы) 👩‍⚕️", "https://wa.me/94764836278"),
    ("Алина (косметология/женское) 💆‍♀️", "https://wa.me/79681674007"),
    ("Катерина (мужское/спина) 👨‍⚕️", "https://wa.me/79025234803"),
];

/// The full contacts keyboard: every operator plus the site link.
pub fn contacts_keyboard() -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = OPERATORS
        .iter()
        .map(|(label, url)| vec![InlineKeyboardButton::url(*label, *url)])
        .collect();
    rows.push(vec![InlineKeyboardButton::url(
        "🌐 Посетить сайт hunchun.ru",
        SITE_URL,
    )]);
    InlineKeyboardMarkup {
        inline_keyboard: rows,
    }
}

/// The keyboard under generated answers and greetings, built from the
/// decision's button flags. Returns None when no button is requested.
pub fn answer_keyboard(attach_contacts: bool, attach_site: bool) -> Option<InlineKeyboardMarkup> {
    let mut rows = Vec::new();
    if attach_contacts {
        rows.push(vec![InlineKeyboardButton::callback(
            "💬 Связаться с оператором",
            "show_contacts",
        )]);
    }
    if attach_site {
        rows.push(vec![InlineKeyboardButton::url(
            "🌐 Подробнее на hunchun.ru",
            SITE_URL,
        )]);
    }
    if rows.is_empty() {
        None
    } else {
        Some(InlineKeyboardMarkup {
            inline_keyboard: rows,
        })
    }
}
