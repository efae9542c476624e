//! Vietnamese/English translation store.
//!
//! - `language`: the closed set of supported languages
//! - `dictionary`: static key -> string tables, built once per process
//! - `translator`: per-consumer context holding the active language
//! - `consistency`: startup check that every language carries the same keys
//!
//! ```rust,ignore
//! use nexzap_careers::i18n::{Language, Translator};
//!
//! let mut t = Translator::new(Language::Vi);
//! assert_eq!(t.resolve("nav.home"), "Trang Chủ");
//! t.set_language(Language::En);
//! assert_eq!(t.resolve("nav.home"), "Home");
//! ```

mod consistency;
mod dictionary;
mod language;
mod translator;

pub use consistency::{check_consistency, find_missing_keys, ConsistencyReport};
pub use dictionary::{dictionary, Dictionary};
pub use language::Language;
pub use translator::Translator;
