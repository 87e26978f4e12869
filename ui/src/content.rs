//! Lesson content catalog.
//!
//! Content is authored externally and embedded as JSON at build time; this
//! crate only reads it. Blocks form a tagged union: the tag set is closed
//! but extensible, and a new block type plugs in through the renderer table
//! in [`crate::dispatch`] without touching these shapes.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::locale::Language;

const LESSONS_JSON: &str = include_str!("../assets/content/lessons.json");

/// Lesson definitions in authored order. Embedded static data: a malformed
/// catalog is a build artifact error and fails at first access.
pub static LESSONS: Lazy<Vec<Lesson>> = Lazy::new(|| {
    serde_json::from_str(LESSONS_JSON).expect("embedded lesson catalog is well-formed")
});

/// The lesson the page displays. Only the first lesson is wired to a view;
/// the catalog keeps the authored multi-lesson shape all the same.
pub fn first_lesson() -> &'static Lesson {
    LESSONS.first().expect("lesson catalog is not empty")
}

/// Per-language text with no fallback: a missing entry is missing content,
/// caught by the completeness tests before it ships, never a crash.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText(BTreeMap<Language, String>);

impl LocalizedText {
    pub fn for_language(&self, lang: Language) -> Option<&str> {
        self.0.get(&lang).map(String::as_str)
    }

    /// Languages this text is authored in.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.0.keys().copied()
    }
}

impl FromIterator<(Language, String)> for LocalizedText {
    fn from_iter<I: IntoIterator<Item = (Language, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: LocalizedText,
    pub description: LocalizedText,
    /// Sequence order is rendering order.
    pub blocks: Vec<Block>,
}

/// One unit of lesson content: an id unique within its lesson, a type tag,
/// and the tag's payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    #[serde(flatten)]
    pub payload: BlockPayload,
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        self.payload.kind()
    }
}

/// Type-specific payloads, tagged by `type` in the authored JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BlockPayload {
    CommandLab(CommandLabPayload),
    Prose(ProsePayload),
}

impl BlockPayload {
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockPayload::CommandLab(_) => BlockKind::CommandLab,
            BlockPayload::Prose(_) => BlockKind::Prose,
        }
    }
}

/// Bare type tag; keys the renderer table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BlockKind {
    CommandLab,
    Prose,
}

/// Payload for the interactive command exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandLabPayload {
    /// Shell prompt shown before every input line.
    pub prompt: String,
    pub commands: Vec<CommandSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub input: String,
    pub caption: LocalizedText,
}

/// Plain localized paragraph. Authored shape for the second tag; no
/// renderer is registered for it in the current scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProsePayload {
    pub body: LocalizedText,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson_texts(lesson: &Lesson) -> Vec<&LocalizedText> {
        let mut texts = vec![&lesson.title, &lesson.description];
        for block in &lesson.blocks {
            match &block.payload {
                BlockPayload::CommandLab(payload) => {
                    texts.extend(payload.commands.iter().map(|c| &c.caption));
                }
                BlockPayload::Prose(payload) => texts.push(&payload.body),
            }
        }
        texts
    }

    #[test]
    fn catalog_parses_and_has_a_first_lesson() {
        assert!(!LESSONS.is_empty());
        assert_eq!(first_lesson().id, LESSONS[0].id);
    }

    #[test]
    fn every_text_covers_the_full_language_catalog() {
        for lesson in LESSONS.iter() {
            for text in lesson_texts(lesson) {
                for lang in Language::CATALOG {
                    assert!(
                        text.for_language(lang).is_some(),
                        "lesson {} is missing {} text",
                        lesson.id,
                        lang.code()
                    );
                }
            }
        }
    }

    #[test]
    fn block_ids_are_unique_within_a_lesson() {
        for lesson in LESSONS.iter() {
            let mut ids: Vec<_> = lesson.blocks.iter().map(|b| b.id.as_str()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), lesson.blocks.len(), "in lesson {}", lesson.id);
        }
    }

    #[test]
    fn localized_text_has_no_fallback() {
        let text: LocalizedText = serde_json::from_str(r#"{ "sv": "hej" }"#).unwrap();
        assert_eq!(text.for_language(Language::Sv), Some("hej"));
        assert_eq!(text.for_language(Language::En), None);
    }

    #[test]
    fn block_tag_selects_the_payload_shape() {
        let block: Block = serde_json::from_str(
            r#"{ "id": "b1", "type": "command-lab", "prompt": "$", "commands": [] }"#,
        )
        .unwrap();
        assert_eq!(block.kind(), BlockKind::CommandLab);
    }
}
