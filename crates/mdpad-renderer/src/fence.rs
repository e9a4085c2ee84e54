//! Code fence tracking for line-by-line scanning.

/// Tracks code fence state during line-by-line processing.
///
/// Fences use backticks or tildes (three or more). The closing fence must use
/// the same character and be at least as long as the opening fence.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    /// Character used for the current fence (backtick or tilde).
    fence_char: Option<char>,
    /// Length of the opening fence (minimum length for closing).
    fence_len: usize,
    /// Info string of the opening fence, first word only.
    language: Option<String>,
}

impl FenceTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn in_fence(&self) -> bool {
        self.fence_char.is_some()
    }

    /// Language of the currently open fence, if it declared one.
    pub(crate) fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Update fence state based on a line.
    ///
    /// Returns `true` if the line is a fence marker (opening or closing).
    pub(crate) fn update(&mut self, line: &str) -> bool {
        let trimmed = line.trim_start();

        if let Some(fence_char) = self.fence_char {
            if is_closing_fence(trimmed, fence_char, self.fence_len) {
                self.fence_char = None;
                self.fence_len = 0;
                self.language = None;
                return true;
            }
            false
        } else if let Some((ch, len, info)) = detect_fence(trimmed) {
            self.fence_char = Some(ch);
            self.fence_len = len;
            self.language = info.split_whitespace().next().map(str::to_owned);
            true
        } else {
            false
        }
    }
}

/// Detect if a line opens a code fence.
///
/// Returns the fence character, its run length and the info string.
fn detect_fence(trimmed: &str) -> Option<(char, usize, &str)> {
    let first = trimmed.chars().next()?;
    if first != '`' && first != '~' {
        return None;
    }

    let count = trimmed.chars().take_while(|&c| c == first).count();
    if count < 3 {
        return None;
    }

    // Fence characters are ASCII, so `count` is also a byte offset.
    let info = trimmed[count..].trim();
    // A backtick info string containing backticks is an inline span, not a fence.
    if first == '`' && info.contains('`') {
        return None;
    }
    Some((first, count, info))
}

/// Check if a line is a valid closing fence: same character, at least as
/// long as the opening run, nothing but whitespace after it.
fn is_closing_fence(trimmed: &str, expected_char: char, min_len: usize) -> bool {
    let count = trimmed.chars().take_while(|&c| c == expected_char).count();
    if count == 0 || count < min_len {
        return false;
    }

    trimmed[count..].chars().all(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_fence_initially() {
        let tracker = FenceTracker::new();
        assert!(!tracker.in_fence());
        assert_eq!(tracker.language(), None);
    }

    #[test]
    fn test_backtick_fence_with_language() {
        let mut tracker = FenceTracker::new();

        assert!(tracker.update("```rust"));
        assert!(tracker.in_fence());
        assert_eq!(tracker.language(), Some("rust"));

        assert!(!tracker.update("fn main() {}"));
        assert!(tracker.in_fence());

        assert!(tracker.update("```"));
        assert!(!tracker.in_fence());
        assert_eq!(tracker.language(), None);
    }

    #[test]
    fn test_info_string_keeps_first_word() {
        let mut tracker = FenceTracker::new();
        assert!(tracker.update("~~~ python title=\"demo.py\""));
        assert_eq!(tracker.language(), Some("python"));
    }

    #[test]
    fn test_shorter_fence_not_closing() {
        let mut tracker = FenceTracker::new();

        assert!(tracker.update("````"));
        assert!(!tracker.update("```"));
        assert!(tracker.in_fence());

        assert!(tracker.update("`````"));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_mixed_fence_chars() {
        let mut tracker = FenceTracker::new();

        assert!(tracker.update("```"));
        assert!(!tracker.update("~~~"));
        assert!(tracker.in_fence());

        assert!(tracker.update("```"));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_closing_fence_with_text_is_content() {
        let mut tracker = FenceTracker::new();

        assert!(tracker.update("```"));
        assert!(!tracker.update("``` not a close"));
        assert!(tracker.in_fence());
    }

    #[test]
    fn test_indented_fence() {
        let mut tracker = FenceTracker::new();

        assert!(tracker.update("   ```rust"));
        assert!(tracker.in_fence());

        assert!(tracker.update("  ```"));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_two_backticks_not_fence() {
        let mut tracker = FenceTracker::new();

        assert!(!tracker.update("``inline code``"));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_backticks_in_info_string_not_fence() {
        let mut tracker = FenceTracker::new();

        assert!(!tracker.update("```code``` in a sentence"));
        assert!(!tracker.in_fence());
    }
}
