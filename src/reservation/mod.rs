pub mod state;
pub mod submit;

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Whitespace as browsers see it in `String.prototype.trim` and regex `\s`.
/// Unlike `char::is_whitespace` this includes U+FEFF and excludes U+0085.
const FORM_SPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9\-+()]{10,}$").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^{FORM_SPACE_CLASS}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).unwrap()
});

fn is_form_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

fn is_blank(value: &str) -> bool {
    value.chars().all(is_form_space)
}

/// One input of the reservation form. Ordering follows the form layout and
/// the order fields are written to the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    Idea,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Phone, Field::Email, Field::Idea];

    /// Key used both as the input id and as the form-body key.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Idea => "idea",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reservation {
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Link to the video the visitor wants turned into a toon. Not checked
    /// for URL shape.
    pub idea: String,
}

impl Reservation {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Idea => &self.idea,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::Idea => self.idea = value,
        }
    }
}

/// Per-field validation messages. Only failing fields are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

pub fn validate(reservation: &Reservation) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if is_blank(&reservation.name) {
        errors.insert(Field::Name, "닉네임을 입력해주세요");
    }

    if is_blank(&reservation.phone) {
        errors.insert(Field::Phone, "휴대폰 번호를 입력해주세요");
    } else {
        let compact: String = reservation.phone.chars().filter(|&c| !is_form_space(c)).collect();
        if !PHONE_RE.is_match(&compact) {
            errors.insert(Field::Phone, "올바른 휴대폰 번호를 입력해주세요");
        }
    }

    if is_blank(&reservation.email) {
        errors.insert(Field::Email, "이메일을 입력해주세요");
    } else if !EMAIL_RE.is_match(&reservation.email) {
        errors.insert(Field::Email, "올바른 이메일 형식이 아닙니다");
    }

    if is_blank(&reservation.idea) {
        errors.insert(Field::Idea, "변환하고 싶은 유튜브 링크를 입력해주세요");
    }

    errors
}

/// Serializes the reservation as an `application/x-www-form-urlencoded` body.
pub fn encode_form_body(reservation: &Reservation) -> String {
    Field::ALL
        .iter()
        .map(|&field| format!("{}={}", field.key(), encode_component(reservation.get(field))))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_component(value: &str) -> String {
    // form encoding writes spaces as '+'
    urlencoding::encode(value).replace("%20", "+")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Reservation {
        Reservation {
            name: "홍길동".to_string(),
            phone: "010-1234-5678".to_string(),
            email: "a@b.co".to_string(),
            idea: "https://youtube.com/watch?v=abc".to_string(),
        }
    }

    #[test]
    fn test_valid_reservation_has_no_errors() {
        assert!(validate(&valid()).is_empty());
    }

    #[test]
    fn test_each_blank_field_is_reported() {
        for field in Field::ALL {
            for blank in ["", "   ", "\t\n"] {
                let mut reservation = valid();
                reservation.set(field, blank.to_string());
                let errors = validate(&reservation);
                assert_eq!(errors.len(), 1, "{field} = {blank:?}");
                assert!(errors.get(field).is_some());
            }
        }
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = validate(&Reservation::default());
        assert_eq!(errors.fields().collect::<Vec<_>>(), Field::ALL.to_vec());
        assert_eq!(errors.get(Field::Phone), Some("휴대폰 번호를 입력해주세요"));
        assert_eq!(errors.get(Field::Email), Some("이메일을 입력해주세요"));
    }

    #[test]
    fn test_short_phone_rejected() {
        let mut reservation = valid();
        reservation.phone = "12345".to_string();
        let errors = validate(&reservation);
        assert_eq!(errors.get(Field::Phone), Some("올바른 휴대폰 번호를 입력해주세요"));
    }

    #[test]
    fn test_phone_whitespace_is_ignored() {
        let mut reservation = valid();
        reservation.phone = "010 1234 5678".to_string();
        assert!(validate(&reservation).is_empty());

        reservation.phone = "+82 (10) 1234-5678".to_string();
        assert!(validate(&reservation).is_empty());
    }

    #[test]
    fn test_phone_rejects_letters() {
        let mut reservation = valid();
        reservation.phone = "010-1234-567a".to_string();
        assert!(validate(&reservation).get(Field::Phone).is_some());
    }

    #[test]
    fn test_phone_accepts_symbol_only_input() {
        let mut reservation = valid();
        reservation.phone = "----------".to_string();
        assert!(validate(&reservation).is_empty());
    }

    #[test]
    fn test_email_shape() {
        let mut reservation = valid();
        for bad in ["not-an-email", "a@b", "a b@c.d", "@b.co", "a@@b.co"] {
            reservation.email = bad.to_string();
            assert_eq!(
                validate(&reservation).get(Field::Email),
                Some("올바른 이메일 형식이 아닙니다"),
                "{bad}"
            );
        }
        reservation.email = "first.last@sub.example.com".to_string();
        assert!(validate(&reservation).is_empty());
    }

    #[test]
    fn test_email_is_not_trimmed_before_matching() {
        let mut reservation = valid();
        reservation.email = " a@b.co".to_string();
        assert!(validate(&reservation).get(Field::Email).is_some());
    }

    #[test]
    fn test_bom_counts_as_whitespace() {
        let mut reservation = valid();
        reservation.name = "\u{FEFF}".to_string();
        reservation.phone = "010-1234-5678\u{FEFF}".to_string();
        let errors = validate(&reservation);
        assert_eq!(errors.get(Field::Name), Some("닉네임을 입력해주세요"));
        assert!(errors.get(Field::Phone).is_none());

        reservation = valid();
        reservation.email = "a\u{FEFF}@b.co".to_string();
        assert!(validate(&reservation).get(Field::Email).is_some());
    }

    #[test]
    fn test_next_line_is_not_whitespace() {
        let mut reservation = valid();
        reservation.name = "\u{85}".to_string();
        reservation.email = "a\u{85}@b.co".to_string();
        assert!(validate(&reservation).is_empty());
    }

    #[test]
    fn test_idea_is_not_checked_as_url() {
        let mut reservation = valid();
        reservation.idea = "just some words".to_string();
        assert!(validate(&reservation).is_empty());
    }

    #[test]
    fn test_encode_form_body_order_and_escaping() {
        let reservation = Reservation {
            name: "Kim Lee".to_string(),
            phone: "010-1234-5678".to_string(),
            email: "a+b@c.co".to_string(),
            idea: "https://youtu.be/x?t=1&s=2".to_string(),
        };
        assert_eq!(
            encode_form_body(&reservation),
            "name=Kim+Lee&phone=010-1234-5678&email=a%2Bb%40c.co\
             &idea=https%3A%2F%2Fyoutu.be%2Fx%3Ft%3D1%26s%3D2"
        );
    }

    #[test]
    fn test_encode_form_body_non_ascii() {
        let mut reservation = valid();
        reservation.name = "홍".to_string();
        assert!(encode_form_body(&reservation).starts_with("name=%ED%99%8D&"));
    }
}
