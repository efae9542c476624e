use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported site language. Vietnamese is the default.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Vi,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Vi, Language::En];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Vi => "vi",
            Language::En => "en",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Vi => "Tiếng Việt",
            Language::En => "English",
        }
    }

    pub fn from_code(code: &str) -> Result<Language> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code.trim()))
            .ok_or_else(|| Error::UnknownLanguage(code.to_string()))
    }

    /// The other language of the two-way switcher.
    pub fn toggled(&self) -> Language {
        match self {
            Language::Vi => Language::En,
            Language::En => Language::Vi,
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Language::from_code(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_vietnamese() {
        assert_eq!(Language::default(), Language::Vi);
    }

    #[test]
    fn from_code_accepts_known_codes() {
        assert_eq!(Language::from_code("vi").unwrap(), Language::Vi);
        assert_eq!(Language::from_code("EN").unwrap(), Language::En);
        assert_eq!(" en ".parse::<Language>().unwrap(), Language::En);
    }

    #[test]
    fn from_code_rejects_unknown() {
        let err = Language::from_code("es").unwrap_err();
        assert!(err.to_string().contains("Unknown"));
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn toggled_flips_between_the_two() {
        assert_eq!(Language::Vi.toggled(), Language::En);
        assert_eq!(Language::En.toggled(), Language::Vi);
    }

    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
        let lang: Language = serde_json::from_str("\"vi\"").unwrap();
        assert_eq!(lang, Language::Vi);
    }
}
