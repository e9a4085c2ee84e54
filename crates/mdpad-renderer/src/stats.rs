//! Document statistics for the editor status line.

/// Word, character and line counts of a markdown document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DocumentStats {
    /// Words, ignoring tokens made only of markdown syntax.
    pub words: usize,
    /// Characters excluding whitespace.
    pub characters: usize,
    pub characters_with_spaces: usize,
    pub lines: usize,
    /// Estimated reading time at 200 words per minute, rounded up.
    pub reading_minutes: usize,
}

const WORDS_PER_MINUTE: usize = 200;

/// Calculate document statistics from markdown content.
///
/// # Example
///
/// ```
/// use mdpad_renderer::calculate_document_stats;
///
/// let stats = calculate_document_stats("# Hello world\n\n- one\n- two");
/// assert_eq!(stats.words, 4);
/// assert_eq!(stats.lines, 4);
/// ```
pub fn calculate_document_stats(content: &str) -> DocumentStats {
    let words = content
        .split_whitespace()
        .filter(|word| !is_syntax_token(word))
        .count();

    DocumentStats {
        words,
        characters: content.chars().filter(|c| !c.is_whitespace()).count(),
        characters_with_spaces: content.chars().count(),
        lines: content.lines().count(),
        reading_minutes: words.div_ceil(WORDS_PER_MINUTE),
    }
}

/// Tokens like `#`, `-`, `>`, `|`, `---` or `**` carry no words.
fn is_syntax_token(word: &str) -> bool {
    word.chars()
        .all(|c| matches!(c, '#' | '*' | '_' | '`' | '[' | ']' | '(' | ')' | '-' | '>' | '|' | '~' | ':'))
}
