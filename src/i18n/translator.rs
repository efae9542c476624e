use super::{dictionary, Language};

/// Resolves translation keys in the active language.
///
/// Each consumer owns (or is handed) its own `Translator`, so the active
/// language is visible at every call site instead of living in global state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            tracing::debug!(from = %self.language, to = %language, "Switching language");
        }
        self.language = language;
    }

    /// Flips between Vietnamese and English and returns the new language.
    pub fn toggle(&mut self) -> Language {
        self.set_language(self.language.toggled());
        self.language
    }

    /// Looks `key` up in the active language. A missing key resolves to
    /// itself.
    pub fn resolve<'a>(&self, key: &'a str) -> &'a str {
        dictionary(self.language).get(key).copied().unwrap_or(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_vietnamese() {
        let t = Translator::default();
        assert_eq!(t.language(), Language::Vi);
        assert_eq!(t.resolve("nav.home"), "Trang Chủ");
    }

    #[test]
    fn switching_round_trip_leaves_no_english_behind() {
        let mut t = Translator::new(Language::Vi);
        t.set_language(Language::En);
        assert_eq!(t.resolve("nav.home"), "Home");
        assert_eq!(t.resolve("nav.recruitment"), "Careers");

        t.set_language(Language::Vi);
        assert_eq!(t.resolve("nav.home"), "Trang Chủ");
        assert_eq!(t.resolve("nav.recruitment"), "Tuyển Dụng");
        assert_eq!(t.resolve("job.apply"), "Ứng tuyển vị trí này");
    }

    #[test]
    fn missing_key_falls_back_to_key() {
        let t = Translator::new(Language::En);
        assert_eq!(t.resolve("nav.doesNotExist"), "nav.doesNotExist");
        assert_eq!(t.resolve(""), "");
    }

    #[test]
    fn toggle_flips_language() {
        let mut t = Translator::default();
        assert_eq!(t.toggle(), Language::En);
        assert_eq!(t.resolve("hero.cta"), "Explore Games");
        assert_eq!(t.toggle(), Language::Vi);
        assert_eq!(t.resolve("hero.cta"), "Khám phá trò chơi");
    }

    #[test]
    fn translators_are_independent() {
        let mut a = Translator::new(Language::Vi);
        let b = Translator::new(Language::Vi);
        a.set_language(Language::En);
        assert_eq!(a.resolve("nav.games"), "Games");
        assert_eq!(b.resolve("nav.games"), "Trò Chơi");
    }
}
