use urlencoding::encode;

use super::validate::phone_digits;
use crate::config;

/// `(555) 123-4567` from whatever the visitor typed. Digits past the tenth
/// stay in the last group.
pub fn format_phone(phone: &str) -> String {
    let digits = phone_digits(phone);
    let (area, rest) = digits.split_at(digits.len().min(3));
    let (exchange, line) = rest.split_at(rest.len().min(3));
    format!("({}) {}-{}", area, exchange, line)
}

/// What the contact form collected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailDraft {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    pub fn for_contact(contact: &ContactMessage) -> Self {
        let body = format!(
            "{}\r\nI am writing to ask you about {}.\r\nHere's my message:\r\n{}\r\n\r\n\u{2013}{} [{}; {}]",
            config::CONTACT_GREETING,
            contact.service,
            contact.message,
            contact.name,
            contact.email,
            format_phone(&contact.phone),
        );
        Self {
            to: config::CONTACT_RECIPIENT.to_string(),
            subject: config::CONTACT_SUBJECT.to_string(),
            body,
        }
    }

    pub fn to_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            encode(&self.subject),
            encode(&self.body)
        )
    }
}
