use super::{dictionary, Dictionary, Language};
use std::collections::{BTreeMap, BTreeSet};

/// Keys that exist in some language but are missing from another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsistencyReport {
    missing: BTreeMap<Language, Vec<&'static str>>,
}

impl ConsistencyReport {
    pub fn is_consistent(&self) -> bool {
        self.missing.is_empty()
    }

    /// Missing keys per language, sorted.
    pub fn missing(&self) -> &BTreeMap<Language, Vec<&'static str>> {
        &self.missing
    }

    pub fn missing_in(&self, language: Language) -> &[&'static str] {
        self.missing
            .get(&language)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Checks the bundled dictionaries against each other.
pub fn check_consistency() -> ConsistencyReport {
    let dictionaries: Vec<(Language, &Dictionary)> = Language::ALL
        .into_iter()
        .map(|lang| (lang, dictionary(lang)))
        .collect();
    find_missing_keys(&dictionaries)
}

pub fn find_missing_keys(dictionaries: &[(Language, &Dictionary)]) -> ConsistencyReport {
    let all_keys: BTreeSet<&'static str> = dictionaries
        .iter()
        .flat_map(|(_, dict)| dict.keys().copied())
        .collect();

    let missing = dictionaries
        .iter()
        .filter_map(|(lang, dict)| {
            let absent: Vec<&'static str> = all_keys
                .iter()
                .copied()
                .filter(|key| !dict.contains_key(key))
                .collect();
            (!absent.is_empty()).then_some((*lang, absent))
        })
        .collect();

    ConsistencyReport { missing }
}
