use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("This field is required")]
    EmptyField,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

/// What a field's `type` attribute says it holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
}

impl FieldKind {
    pub fn from_input_type(kind: &str) -> Self {
        match kind {
            "email" => Self::Email,
            "tel" => Self::Tel,
            _ => Self::Text,
        }
    }
}

/// Which checks a form runs on its required fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rules {
    /// Presence plus email and phone format.
    Full,
    /// Presence only.
    RequiredOnly,
}

/// A required field as read from the form at submit time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldInput {
    pub name: String,
    pub kind: FieldKind,
    pub value: String,
}

impl FieldInput {
    pub fn new(name: impl Into<String>, kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            value: value.into(),
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Ten to fifteen digits, ignoring any punctuation around them.
pub fn is_valid_phone(phone: &str) -> bool {
    (10..=15).contains(&phone_digits(phone).len())
}

pub fn validate_field(field: &FieldInput, rules: Rules) -> Result<(), FieldError> {
    if field.value.trim().is_empty() {
        return Err(FieldError::EmptyField);
    }
    if rules == Rules::RequiredOnly {
        return Ok(());
    }
    match field.kind {
        FieldKind::Email if !is_valid_email(&field.value) => Err(FieldError::InvalidEmail),
        FieldKind::Tel if !is_valid_phone(&field.value) => Err(FieldError::InvalidPhone),
        _ => Ok(()),
    }
}

/// Result for every field, in form order.
#[derive(Debug, Default)]
pub struct Report {
    pub results: Vec<(String, Result<(), FieldError>)>,
}

impl Report {
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|(_, r)| r.is_ok())
    }
}

pub fn validate_form(fields: &[FieldInput], rules: Rules) -> Report {
    Report {
        results: fields
            .iter()
            .map(|f| (f.name.clone(), validate_field(f, rules)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("jane.doe+site@mail.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@b.com"));
    }

    #[test]
    fn phone_length_ignores_formatting() {
        assert!(is_valid_phone("5551234567"));
        assert!(is_valid_phone("(555) 123-4567"));
        assert!(is_valid_phone("+44 20 7946 0958"));
        assert!(!is_valid_phone("555123"));
        assert!(!is_valid_phone("1234567890123456"));
    }

    #[test]
    fn empty_beats_format_checks() {
        let field = FieldInput::new("email", FieldKind::Email, "   ");
        assert_eq!(validate_field(&field, Rules::Full), Err(FieldError::EmptyField));
    }

    #[test]
    fn required_only_skips_format_checks() {
        let email = FieldInput::new("widget-email", FieldKind::Email, "nope");
        let phone = FieldInput::new("widget-phone", FieldKind::Tel, "12");
        assert_eq!(validate_field(&email, Rules::RequiredOnly), Ok(()));
        assert_eq!(validate_field(&phone, Rules::RequiredOnly), Ok(()));
        assert_eq!(validate_field(&email, Rules::Full), Err(FieldError::InvalidEmail));
        assert_eq!(validate_field(&phone, Rules::Full), Err(FieldError::InvalidPhone));
    }

    #[test]
    fn report_is_valid_only_when_every_field_passes() {
        let fields = vec![
            FieldInput::new("name", FieldKind::Text, "Jane"),
            FieldInput::new("email", FieldKind::Email, "jane@x.com"),
            FieldInput::new("phone", FieldKind::Tel, "555"),
        ];
        let report = validate_form(&fields, Rules::Full);
        assert!(!report.is_valid());
        assert_eq!(
            report.results,
            vec![
                ("name".to_string(), Ok(())),
                ("email".to_string(), Ok(())),
                ("phone".to_string(), Err(FieldError::InvalidPhone)),
            ]
        );
        assert!(validate_form(&fields[..2], Rules::Full).is_valid());
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(FieldError::EmptyField.to_string(), "This field is required");
        assert_eq!(FieldKind::from_input_type("tel"), FieldKind::Tel);
        assert_eq!(FieldKind::from_input_type("textarea"), FieldKind::Text);
    }
}
