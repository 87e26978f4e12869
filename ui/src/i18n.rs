//! UI string localization for `kommandoskola-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (bundle selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile-time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   sv/kommandoskola-ui.ftl   (reference locale, application default)
//!   en/kommandoskola-ui.ftl
//! ```
//!
//! The reference locale is Swedish because the application starts in
//! Swedish. There is no runtime fallback chain: every language in
//! `Language::CATALOG` ships a complete bundle, and completeness is
//! enforced by tests rather than recovered from at lookup time.
//!
//! To add a locale:
//! 1. Copy `sv/kommandoskola-ui.ftl` to `i18n/<code>/kommandoskola-ui.ftl`.
//! 2. Translate each message value (keep IDs identical).
//! 3. Add the code to `Language` and run the tests.

use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::locale::{Language, DEFAULT_LANGUAGE};

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("footer-gdpr")
///
/// Expands to `fl!(&*LOADER, ...)`, keeping callsites short while routing
/// every lookup through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the FTL filename in every locale folder).
const DOMAIN: &str = "kommandoskola-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let reference: LanguageIdentifier = DEFAULT_LANGUAGE
        .code()
        .parse()
        .expect("valid reference language identifier");
    FluentLanguageLoader::new(DOMAIN, reference)
});

static INIT: Once = Once::new();

/// Load the default language bundle (idempotent). The application starts in
/// [`DEFAULT_LANGUAGE`] regardless of the host's locale settings.
pub fn init() {
    INIT.call_once(|| select(DEFAULT_LANGUAGE));
}

/// Switch the active bundle at runtime. A failed selection keeps the
/// previous bundle; cataloged languages are embedded and load reliably, so
/// the failure path only logs.
pub fn select(lang: Language) {
    if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &[lang.identifier()]) {
        eprintln!(
            "[i18n] failed selecting {} ({err}); keeping previous bundle",
            lang.code()
        );
    }
}

/// Locale folders embedded in the binary.
pub fn embedded_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}
