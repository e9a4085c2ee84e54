//! Ordered rendering stages.
//!
//! Precedence between rules is the order of [`Stage::ORDER`]. Later stages
//! see the output of earlier ones, so the order is part of the contract:
//! code is protected before anything else, tables are extracted before any
//! rule could touch a `|`, bold-italic is tried before bold and italic,
//! images before links, and paragraphs are wrapped last.

use crate::code::protect_code;
use crate::html::escape_source;
use crate::lists::lists;
use crate::paragraph::paragraphs;
use crate::renderer::RenderOptions;
use crate::rules;
use crate::stash::Stash;
use crate::table::extract_tables;

/// A named step of the rendering pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Fenced code blocks and inline code spans are rendered and set aside.
    Code,
    /// User text is HTML-escaped (skipped when escaping is disabled).
    Escape,
    /// Table blocks are rendered and set aside.
    Tables,
    Headers,
    /// Bold-italic, bold, italic, strikethrough.
    Emphasis,
    Images,
    Links,
    Lists,
    Blockquotes,
    HorizontalRules,
    Paragraphs,
}

impl Stage {
    /// Every stage, in application order.
    pub const ORDER: [Self; 11] = [
        Self::Code,
        Self::Escape,
        Self::Tables,
        Self::Headers,
        Self::Emphasis,
        Self::Images,
        Self::Links,
        Self::Lists,
        Self::Blockquotes,
        Self::HorizontalRules,
        Self::Paragraphs,
    ];

    /// Stable lowercase name of the stage.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Escape => "escape",
            Self::Tables => "tables",
            Self::Headers => "headers",
            Self::Emphasis => "emphasis",
            Self::Images => "images",
            Self::Links => "links",
            Self::Lists => "lists",
            Self::Blockquotes => "blockquotes",
            Self::HorizontalRules => "horizontal-rules",
            Self::Paragraphs => "paragraphs",
        }
    }

    pub(crate) fn apply(self, text: &str, ctx: &mut StageContext<'_>) -> String {
        match self {
            Self::Code => protect_code(text, &mut ctx.stash, &mut ctx.warnings),
            Self::Escape if ctx.options.escape_html => escape_source(text),
            Self::Escape => text.to_owned(),
            Self::Tables => extract_tables(text, &mut ctx.stash),
            Self::Headers => rules::headers(text),
            Self::Emphasis => rules::emphasis(text),
            Self::Images => rules::images(text),
            Self::Links => rules::links(text),
            Self::Lists => lists(text, ctx.options.ordered_lists),
            Self::Blockquotes => rules::blockquotes(text),
            Self::HorizontalRules => rules::horizontal_rules(text),
            Self::Paragraphs => paragraphs(text),
        }
    }
}

/// State shared by the stages of one render call.
pub(crate) struct StageContext<'a> {
    pub options: &'a RenderOptions,
    pub stash: Stash,
    pub warnings: Vec<String>,
}

impl<'a> StageContext<'a> {
    pub(crate) fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            stash: Stash::default(),
            warnings: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(stage: Stage) -> usize {
        Stage::ORDER.iter().position(|&s| s == stage).unwrap()
    }

    #[test]
    fn test_order_is_complete_and_unique() {
        let mut names: Vec<&str> = Stage::ORDER.iter().map(|s| s.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Stage::ORDER.len());
    }

    #[test]
    fn test_precedence() {
        assert_eq!(position(Stage::Code), 0);
        assert!(position(Stage::Escape) < position(Stage::Tables));
        assert!(position(Stage::Tables) < position(Stage::Headers));
        assert!(position(Stage::Headers) < position(Stage::Paragraphs));
        assert!(position(Stage::Images) < position(Stage::Links));
        assert!(position(Stage::Lists) < position(Stage::Paragraphs));
        assert_eq!(position(Stage::Paragraphs), Stage::ORDER.len() - 1);
    }

    #[test]
    fn test_escape_stage_respects_options() {
        let escaped = RenderOptions::default();
        let raw = RenderOptions {
            escape_html: false,
            ..RenderOptions::default()
        };
        assert_eq!(
            Stage::Escape.apply("<b>", &mut StageContext::new(&escaped)),
            "&lt;b>"
        );
        assert_eq!(
            Stage::Escape.apply("<b>", &mut StageContext::new(&raw)),
            "<b>"
        );
    }

    #[test]
    fn test_code_stage_collects_warnings() {
        let options = RenderOptions::default();
        let mut ctx = StageContext::new(&options);
        Stage::Code.apply("```\nopen", &mut ctx);
        assert_eq!(ctx.warnings.len(), 1);
    }
}
