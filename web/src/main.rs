use dioxus::prelude::*;

use ui::components::command_lab;
use ui::content::BlockKind;
use ui::dispatch::{register_renderers, RendererTable};
use ui::locale::{use_locale_provider, DEFAULT_LANGUAGE};
use ui::views::LessonPage;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        // The sole registered block renderer; new block types plug in here.
        register_renderers(
            RendererTable::new().with(BlockKind::CommandLab, command_lab::renderer),
        );
    }

    use_locale_provider(DEFAULT_LANGUAGE);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Kommandoskolan" }

        LessonPage {}
    }
}
