use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::error::Result;
use crate::models::resume::ResumeFile;
use crate::utils::validation::{validate_rules, FieldRule, FieldSource, FieldValue, Rule};

/// The text fields of a job application, named as they go on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationFields {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub experience: String,
    pub message: Option<String>,
    pub agree_to_terms: bool,
}

pub const APPLICATION_RULES: &[FieldRule] = &[
    FieldRule {
        field: "fullName",
        rule: Rule::MinLength(2),
        code: "too_short",
        message: "Full name must be at least 2 characters.",
        message_key: "form.error.fullName",
    },
    FieldRule {
        field: "email",
        rule: Rule::Email,
        code: "invalid_format",
        message: "Please enter a valid email address.",
        message_key: "form.error.email",
    },
    FieldRule {
        field: "phone",
        rule: Rule::MinLength(10),
        code: "too_short",
        message: "Phone number must be at least 10 digits.",
        message_key: "form.error.phone",
    },
    FieldRule {
        field: "position",
        rule: Rule::MinLength(2),
        code: "too_short",
        message: "Position must be at least 2 characters.",
        message_key: "form.error.position",
    },
    FieldRule {
        field: "experience",
        rule: Rule::MinLength(5),
        code: "too_short",
        message: "Experience details must be at least 5 characters.",
        message_key: "form.error.experience",
    },
    FieldRule {
        field: "agreeToTerms",
        rule: Rule::MustBeTrue,
        code: "must_agree",
        message: "You must agree to the terms and conditions.",
        message_key: "form.error.agreeToTerms",
    },
];

/// Translation key for a failed rule, if the schema has one.
pub fn message_key_for(field: &str, code: &str) -> Option<&'static str> {
    APPLICATION_RULES
        .iter()
        .find(|rule| rule.field == field && rule.code == code)
        .map(|rule| rule.message_key)
}

impl ApplicationFields {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Field values as multipart text parts, in wire order.
    pub fn text_parts(&self) -> Vec<(&'static str, String)> {
        vec![
            ("fullName", self.full_name.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
            ("position", self.position.clone()),
            ("experience", self.experience.clone()),
            ("message", self.message.clone().unwrap_or_default()),
            ("agreeToTerms", self.agree_to_terms.to_string()),
        ]
    }
}

impl FieldSource for ApplicationFields {
    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "fullName" => Some(FieldValue::Text(&self.full_name)),
            "email" => Some(FieldValue::Text(&self.email)),
            "phone" => Some(FieldValue::Text(&self.phone)),
            "position" => Some(FieldValue::Text(&self.position)),
            "experience" => Some(FieldValue::Text(&self.experience)),
            "message" => Some(FieldValue::Text(self.message.as_deref().unwrap_or(""))),
            "agreeToTerms" => Some(FieldValue::Flag(self.agree_to_terms)),
            _ => None,
        }
    }
}

impl Validate for ApplicationFields {
    fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        validate_rules(self, APPLICATION_RULES)
    }
}

/// A record that passed validation, paired with its checked résumé.
#[derive(Debug, Clone, Copy)]
pub struct Application<'a> {
    pub fields: &'a ApplicationFields,
    pub resume: &'a ResumeFile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::validate;

    fn valid_fields() -> ApplicationFields {
        ApplicationFields {
            full_name: "Nguyễn Văn An".into(),
            email: "an@example.com".into(),
            phone: "0901234567".into(),
            position: "Game Developer".into(),
            experience: "Three years of Unity work".into(),
            message: None,
            agree_to_terms: true,
        }
    }

    fn failing_codes(fields: &ApplicationFields) -> Vec<(String, String)> {
        let mut codes: Vec<(String, String)> = match validate(fields) {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .field_errors()
                .into_iter()
                .flat_map(|(field, errs)| {
                    errs.iter()
                        .map(move |e| (field.to_string(), e.code.to_string()))
                })
                .collect(),
        };
        codes.sort();
        codes
    }

    #[test]
    fn valid_record_passes() {
        assert!(validate(&valid_fields()).is_ok());
    }

    #[test]
    fn empty_record_fails_every_required_field() {
        let codes = failing_codes(&ApplicationFields::default());
        assert_eq!(
            codes,
            vec![
                ("agreeToTerms".to_string(), "must_agree".to_string()),
                ("email".to_string(), "invalid_format".to_string()),
                ("experience".to_string(), "too_short".to_string()),
                ("fullName".to_string(), "too_short".to_string()),
                ("phone".to_string(), "too_short".to_string()),
                ("position".to_string(), "too_short".to_string()),
            ]
        );
    }

    #[test]
    fn message_is_optional() {
        let mut fields = valid_fields();
        fields.message = Some(String::new());
        assert!(validate(&fields).is_ok());
    }

    #[test]
    fn email_boundaries() {
        let mut fields = valid_fields();
        fields.email = "a@b.co".into();
        assert!(validate(&fields).is_ok());

        fields.email = "not-an-email".into();
        assert_eq!(
            failing_codes(&fields),
            vec![("email".to_string(), "invalid_format".to_string())]
        );
    }

    #[test]
    fn length_boundaries() {
        let mut fields = valid_fields();
        fields.full_name = "An".into();
        fields.phone = "0123456789".into();
        fields.experience = "Unity".into();
        assert!(validate(&fields).is_ok());

        fields.full_name = "A".into();
        fields.phone = "012345678".into();
        fields.experience = "Lua".into();
        let fields_failing: Vec<String> =
            failing_codes(&fields).into_iter().map(|(f, _)| f).collect();
        assert_eq!(fields_failing, ["experience", "fullName", "phone"]);
    }

    #[test]
    fn consent_is_an_unconditional_gate() {
        let mut fields = valid_fields();
        fields.agree_to_terms = false;
        assert_eq!(
            failing_codes(&fields),
            vec![("agreeToTerms".to_string(), "must_agree".to_string())]
        );
    }

    #[test]
    fn messages_come_from_the_rule_table() {
        let errors = ApplicationFields::default().validate().unwrap_err();
        let phone = errors.field_errors();
        let phone = phone.get("phone").unwrap();
        assert_eq!(
            phone[0].message.as_deref(),
            Some("Phone number must be at least 10 digits.")
        );
        assert_eq!(
            message_key_for("phone", "too_short"),
            Some("form.error.phone")
        );
        assert_eq!(message_key_for("phone", "must_agree"), None);
    }

    #[test]
    fn parses_camel_case_json_with_defaults() {
        let fields = ApplicationFields::from_json(
            r#"{"fullName":"An","email":"a@b.co","agreeToTerms":true}"#,
        )
        .unwrap();
        assert_eq!(fields.full_name, "An");
        assert!(fields.agree_to_terms);
        assert!(fields.phone.is_empty());
        assert!(fields.message.is_none());
    }

    #[test]
    fn text_parts_cover_every_field() {
        let parts = valid_fields().text_parts();
        let names: Vec<&str> = parts.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            ["fullName", "email", "phone", "position", "experience", "message", "agreeToTerms"]
        );
        assert_eq!(parts[6].1, "true");
        assert_eq!(parts[5].1, "");
    }
}
