//! Locale state for the lesson page.
//!
//! One [`LocaleStore`] is installed at the composition root and shared
//! read-only by every localized view below it; the language switcher is the
//! store's single writer. Reading the store outside its provider is a
//! configuration error and fails immediately rather than handing back a
//! stale or default value.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use unic_langid::LanguageIdentifier;

use crate::i18n;

/// Language the application starts in.
pub const DEFAULT_LANGUAGE: Language = Language::Sv;

/// Closed catalog of supported languages.
///
/// Every language listed here must ship a complete Fluent bundle under
/// `i18n/<code>/` and an entry in every localized text of the lesson
/// catalog. Completeness is enforced by tests, not by a runtime fallback.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Sv,
    En,
}

impl Language {
    /// Catalog order is also the order entries appear in the switcher.
    pub const CATALOG: [Language; 2] = [Language::Sv, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Sv => "sv",
            Language::En => "en",
        }
    }

    /// Human-readable name shown in the switcher menu.
    pub fn label(self) -> &'static str {
        match self {
            Language::Sv => "Svenska",
            Language::En => "English",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Language::CATALOG.into_iter().find(|l| l.code() == code)
    }

    pub(crate) fn identifier(self) -> LanguageIdentifier {
        self.code().parse().expect("valid language identifier")
    }
}

/// The single mutable locale cell. Created once at application start with
/// [`DEFAULT_LANGUAGE`] and mutated only through its setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleState {
    current: Language,
}

impl LocaleState {
    pub fn new(default: Language) -> Self {
        Self { current: default }
    }

    pub fn language(&self) -> Language {
        self.current
    }

    /// Returns `false` when `lang` was already current: the second of two
    /// identical writes produces no visible change.
    pub fn set_language(&mut self, lang: Language) -> bool {
        if self.current == lang {
            return false;
        }
        self.current = lang;
        true
    }
}

/// The locale store was read outside the provider installed at the
/// composition root. Fatal; surfaced at first access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("locale store was never installed; call use_locale_provider at the composition root")]
pub struct ConfigurationError;

/// Shared handle to the locale cell.
///
/// Copyable like the signal it wraps. Reading the language from a component
/// body subscribes that component, so a language change re-renders every
/// dependent view on the next pass.
#[derive(Clone, Copy)]
pub struct LocaleStore {
    state: Signal<LocaleState>,
}

impl LocaleStore {
    pub fn language(&self) -> Language {
        self.state.read().language()
    }

    /// Switches the application language: updates the cell and the Fluent
    /// loader in one synchronous step. Writing the current language again
    /// is a no-op and schedules no re-render.
    ///
    /// The language switcher is the store's only writer by contract.
    pub fn set_language(&mut self, lang: Language) {
        if self.state.peek().language() == lang {
            return;
        }
        self.state.write().set_language(lang);
        i18n::select(lang);
    }
}

/// Install the locale store at the composition root.
pub fn use_locale_provider(default: Language) -> LocaleStore {
    use_context_provider(|| LocaleStore {
        state: Signal::new(LocaleState::new(default)),
    })
}

/// Fallible accessor for callers that surface the error themselves.
pub fn try_use_locale() -> Result<LocaleStore, ConfigurationError> {
    try_use_context::<LocaleStore>().ok_or(ConfigurationError)
}

/// Accessor used by views. Fails loudly at first access when the provider
/// is missing; a stale or default value is never returned.
pub fn use_locale() -> LocaleStore {
    match try_use_locale() {
        Ok(store) => store,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_returns_the_written_language() {
        let mut state = LocaleState::new(DEFAULT_LANGUAGE);
        assert!(state.set_language(Language::En));
        assert_eq!(state.language(), Language::En);
    }

    #[test]
    fn second_identical_write_is_a_no_op() {
        let mut state = LocaleState::new(DEFAULT_LANGUAGE);
        assert!(state.set_language(Language::En));
        assert!(!state.set_language(Language::En));
        assert_eq!(state.language(), Language::En);
    }

    #[test]
    fn application_starts_in_swedish() {
        assert_eq!(LocaleState::new(DEFAULT_LANGUAGE).language(), Language::Sv);
    }

    #[test]
    fn catalog_codes_resolve_back_to_their_language() {
        for lang in Language::CATALOG {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
            assert!(!lang.label().is_empty());
        }
        assert_eq!(Language::from_code("de"), None);
    }
}
