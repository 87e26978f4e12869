//! Block renderer registry and ordered dispatch.
//!
//! Renderers are registered once at the composition root, keyed by block
//! type tag. Dispatch walks a lesson's block sequence in source order and
//! silently skips any block whose tag has no registered renderer:
//! supporting a new block type means adding a table entry, never editing
//! the dispatch of existing ones.

use std::collections::BTreeMap;

use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::content::{Block, BlockKind};
use crate::locale::Language;

/// Milliseconds of reveal stagger per block position.
const REVEAL_STEP_MS: u32 = 100;

/// Renders one block type. Receives the block's full payload and the
/// current language.
pub type BlockRenderer = fn(&Block, Language) -> Element;

/// Renderer table under construction; installed with [`register_renderers`].
#[derive(Default)]
pub struct RendererTable {
    entries: BTreeMap<BlockKind, BlockRenderer>,
}

impl RendererTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: BlockKind, renderer: BlockRenderer) -> Self {
        self.entries.insert(kind, renderer);
        self
    }
}

static RENDERERS: OnceCell<RendererTable> = OnceCell::new();

/// Install the renderer table. First call wins; later calls are ignored so
/// re-renders of the composition root stay harmless.
pub fn register_renderers(table: RendererTable) {
    let _ = RENDERERS.set(table);
}

pub fn renderer_for(kind: BlockKind) -> Option<BlockRenderer> {
    RENDERERS
        .get()
        .and_then(|table| table.entries.get(&kind))
        .copied()
}

/// One dispatchable unit of the render plan.
pub struct PlannedBlock<'a> {
    pub block: &'a Block,
    pub renderer: BlockRenderer,
    /// Grows with the block's position in the source sequence.
    pub delay_ms: u32,
}

/// Maps a block sequence to its renderable plan: source order preserved,
/// unregistered tags skipped, reveal delay taken from the source position.
pub fn render_plan(blocks: &[Block]) -> Vec<PlannedBlock<'_>> {
    blocks
        .iter()
        .enumerate()
        .filter_map(|(index, block)| {
            renderer_for(block.kind()).map(|renderer| PlannedBlock {
                block,
                renderer,
                delay_ms: reveal_delay_ms(index),
            })
        })
        .collect()
}

pub fn reveal_delay_ms(index: usize) -> u32 {
    index as u32 * REVEAL_STEP_MS
}

/// Ordered block list for one lesson. Each rendered unit carries its reveal
/// delay as an inline `animation-delay` so the stylesheet's keyframes
/// stagger it in.
#[component]
pub fn BlockList(blocks: Vec<Block>, lang: Language) -> Element {
    rsx! {
        div { class: "lesson__blocks",
            { render_plan(&blocks).into_iter().map(|unit| {
                let id = unit.block.id.clone();
                let delay = unit.delay_ms;
                rsx! {
                    div {
                        key: "{id}",
                        class: "lesson-block",
                        style: "animation-delay: {delay}ms",
                        {(unit.renderer)(unit.block, lang)}
                    }
                }
            }) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::command_lab;
    use crate::content::{BlockPayload, CommandLabPayload, LocalizedText, ProsePayload};

    fn install() {
        register_renderers(
            RendererTable::new().with(BlockKind::CommandLab, command_lab::renderer),
        );
    }

    fn command_block(id: &str) -> Block {
        Block {
            id: id.to_string(),
            payload: BlockPayload::CommandLab(CommandLabPayload {
                prompt: "$".to_string(),
                commands: Vec::new(),
            }),
        }
    }

    fn prose_block(id: &str) -> Block {
        Block {
            id: id.to_string(),
            payload: BlockPayload::Prose(ProsePayload {
                body: LocalizedText::default(),
            }),
        }
    }

    #[test]
    fn plan_preserves_source_order() {
        install();
        let blocks = vec![command_block("b0"), command_block("b1"), command_block("b2")];
        let ids: Vec<_> = render_plan(&blocks)
            .iter()
            .map(|u| u.block.id.as_str())
            .collect();
        assert_eq!(ids, ["b0", "b1", "b2"]);
    }

    #[test]
    fn unregistered_tags_are_silently_skipped() {
        install();
        assert!(renderer_for(BlockKind::Prose).is_none());

        let blocks = vec![command_block("b0"), prose_block("b1"), command_block("b2")];
        let ids: Vec<_> = render_plan(&blocks)
            .iter()
            .map(|u| u.block.id.as_str())
            .collect();
        assert_eq!(ids, ["b0", "b2"]);
    }

    #[test]
    fn reveal_delays_never_decrease() {
        install();
        let blocks = vec![command_block("b0"), prose_block("b1"), command_block("b2")];
        let delays: Vec<_> = render_plan(&blocks).iter().map(|u| u.delay_ms).collect();
        assert!(delays.windows(2).all(|w| w[0] <= w[1]));
        // Delay follows the source position, not the surviving position.
        assert_eq!(delays, [0, 200]);
    }

    #[test]
    fn shipped_lesson_blocks_are_all_dispatchable() {
        install();
        let lesson = crate::content::first_lesson();
        assert_eq!(render_plan(&lesson.blocks).len(), lesson.blocks.len());
    }
}
