use dioxus::prelude::*;

use crate::content;
use crate::dispatch::BlockList;
use crate::locale::use_locale;
use crate::switcher::LanguageSwitcher;
use crate::t;

#[cfg(debug_assertions)]
fn log_lesson_render(lang: &str) {
    // Lightweight render trace for diagnosing retranslation issues.
    println!("[i18n] LessonPage render (lang={lang})");
}

/// The single lesson page: localized header, dispatched blocks, footer.
#[component]
pub fn LessonPage() -> Element {
    // Reading the store subscribes this view; a language change re-renders
    // the header, the dispatched blocks, and the footer in one pass.
    let locale = use_locale();
    let lang = locale.language();

    let lesson = content::first_lesson();
    let title = lesson.title.for_language(lang).unwrap_or_default();
    let description = lesson.description.for_language(lang).unwrap_or_default();

    #[cfg(debug_assertions)]
    log_lesson_render(lang.code());

    rsx! {
        div { class: "lesson",
            header { class: "lesson__header",
                div { class: "lesson__heading",
                    h1 { class: "lesson__title", "{title}" }
                    LanguageSwitcher {}
                }
                p { class: "lesson__description", "{description}" }
            }

            BlockList { blocks: lesson.blocks.clone(), lang }

            footer { class: "lesson__footer",
                p { {t!("footer-gdpr")} }
            }
        }
    }
}
