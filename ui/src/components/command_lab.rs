//! Interactive command exercise.
//!
//! The dispatcher hands this component a block payload and the current
//! language and assumes nothing beyond that contract. The payload is never
//! mutated; only the language varies between renders.

use dioxus::prelude::*;

use crate::content::{Block, BlockPayload, CommandLabPayload};
use crate::locale::Language;

/// Renderer registered for `BlockKind::CommandLab` at the composition root.
pub fn renderer(block: &Block, lang: Language) -> Element {
    match &block.payload {
        BlockPayload::CommandLab(payload) => rsx! {
            CommandLab { payload: payload.clone(), lang }
        },
        // The table only routes command-lab blocks here.
        _ => VNode::empty(),
    }
}

#[component]
pub fn CommandLab(payload: CommandLabPayload, lang: Language) -> Element {
    rsx! {
        section { class: "command-lab",
            { payload.commands.iter().enumerate().map(|(index, command)| {
                let line = format!("{} {}", payload.prompt, command.input);
                let caption = command.caption.for_language(lang).map(str::to_string);
                rsx! {
                    div { key: "{index}", class: "command-lab__row",
                        code { class: "command-lab__input", "{line}" }
                        if let Some(caption) = caption {
                            p { class: "command-lab__caption", "{caption}" }
                        }
                    }
                }
            }) }
        }
    }
}
