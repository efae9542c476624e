use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

pub fn validate<T: Validate>(val: &T) -> Result<(), ValidationErrors> {
    val.validate()
}

/// The value of a single form field, as seen by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Flag(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// At least this many characters.
    MinLength(usize),
    Email,
    MustBeTrue,
}

impl Rule {
    pub fn check(&self, value: FieldValue<'_>) -> bool {
        match (self, value) {
            (Rule::MinLength(min), FieldValue::Text(text)) => text.chars().count() >= *min,
            (Rule::Email, FieldValue::Text(text)) => is_email(text),
            (Rule::MustBeTrue, FieldValue::Flag(flag)) => flag,
            _ => false,
        }
    }
}

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

/// HTML5 email shape, narrowed to a dotted domain with an alphabetic TLD of
/// two or more letters and a local part with no leading, trailing or doubled
/// dots.
pub fn is_email(text: &str) -> bool {
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
            .expect("email pattern compiles")
    });
    text.validate_email() && !text.starts_with('.') && !text.contains("..") && regex.is_match(text)
}

/// One row of a declarative schema: field, predicate, failure code and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub rule: Rule,
    pub code: &'static str,
    pub message: &'static str,
    /// Translation key for `message`.
    pub message_key: &'static str,
}

impl FieldRule {
    fn to_error(&self) -> ValidationError {
        let mut err = ValidationError::new(self.code);
        err.message = Some(Cow::Borrowed(self.message));
        err
    }
}

/// A record whose fields can be looked up by name.
pub trait FieldSource {
    fn field_value(&self, field: &str) -> Option<FieldValue<'_>>;
}

/// Runs every rule against `record`. A rule naming a field the record does
/// not have counts as failed.
pub fn validate_rules<T: FieldSource>(
    record: &T,
    rules: &[FieldRule],
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    for rule in rules {
        let passed = record
            .field_value(rule.field)
            .map(|value| rule.rule.check(value))
            .unwrap_or(false);
        if !passed {
            errors.add(rule.field, rule.to_error());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Contact {
        nickname: String,
        subscribed: bool,
    }

    impl FieldSource for Contact {
        fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
            match field {
                "nickname" => Some(FieldValue::Text(&self.nickname)),
                "subscribed" => Some(FieldValue::Flag(self.subscribed)),
                _ => None,
            }
        }
    }

    const RULES: &[FieldRule] = &[
        FieldRule {
            field: "nickname",
            rule: Rule::MinLength(3),
            code: "too_short",
            message: "Nickname is too short.",
            message_key: "contact.nickname",
        },
        FieldRule {
            field: "subscribed",
            rule: Rule::MustBeTrue,
            code: "must_agree",
            message: "Subscribe first.",
            message_key: "contact.subscribed",
        },
    ];

    #[test]
    fn min_length_counts_characters_not_bytes() {
        assert!(Rule::MinLength(2).check(FieldValue::Text("Ân")));
        assert!(!Rule::MinLength(3).check(FieldValue::Text("Ân")));
    }

    #[test]
    fn email_shape() {
        assert!(Rule::Email.check(FieldValue::Text("a@b.co")));
        assert!(!Rule::Email.check(FieldValue::Text("not-an-email")));
        assert!(!Rule::Email.check(FieldValue::Text("")));
    }

    #[test]
    fn email_needs_dotted_domain_and_clean_local_part() {
        for accepted in ["a@b.co", "chau@example.com", "first.last+cv@mail.nexzap.studio"] {
            assert!(is_email(accepted), "{} should pass", accepted);
        }
        for rejected in [
            "a@b",
            "a@localhost",
            "a@b.c",
            "a.@b.co",
            "a..b@b.co",
            ".a@b.co",
            "user@[127.0.0.1]",
        ] {
            assert!(!Rule::Email.check(FieldValue::Text(rejected)), "{} should fail", rejected);
        }
    }

    #[test]
    fn mismatched_value_kind_fails() {
        assert!(!Rule::MustBeTrue.check(FieldValue::Text("true")));
        assert!(!Rule::MinLength(0).check(FieldValue::Flag(true)));
    }

    #[test]
    fn collects_every_failing_field() {
        let contact = Contact {
            nickname: "ab".into(),
            subscribed: false,
        };
        let errors = validate_rules(&contact, RULES).unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("nickname").unwrap()[0].code, "too_short");
        assert_eq!(fields.get("subscribed").unwrap()[0].code, "must_agree");
    }

    #[test]
    fn unknown_field_fails_closed() {
        let contact = Contact {
            nickname: "abc".into(),
            subscribed: true,
        };
        let rules = [FieldRule {
            field: "age",
            rule: Rule::MinLength(1),
            code: "too_short",
            message: "Age required.",
            message_key: "contact.age",
        }];
        let errors = validate_rules(&contact, &rules).unwrap_err();
        assert!(errors.field_errors().contains_key("age"));
    }

    #[test]
    fn passing_record_is_ok() {
        let contact = Contact {
            nickname: "abc".into(),
            subscribed: true,
        };
        assert!(validate_rules(&contact, RULES).is_ok());
    }
}
