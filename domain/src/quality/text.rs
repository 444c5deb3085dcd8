//! Surface statistics over generated text

/// Sentences shorter than this (in characters, after trimming) are fragments
const MIN_SENTENCE_CHARS: usize = 10;

/// Non-empty paragraphs, split on blank lines
pub fn paragraphs(content: &str) -> Vec<&str> {
    content
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Sentences terminated by `.`, `!` or `?`, with short fragments discarded
pub fn sentences(content: &str) -> Vec<&str> {
    content
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.chars().count() >= MIN_SENTENCE_CHARS)
        .collect()
}

pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Whether any non-empty line is a heading: `#`-prefixed or all capitals
pub fn has_heading_line(content: &str) -> bool {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .any(|line| line.starts_with('#') || is_all_caps(line))
}

/// At least one cased character, and no lower-case ones
fn is_all_caps(line: &str) -> bool {
    line.chars().any(char::is_uppercase) && !line.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_skip_blank_blocks() {
        let text = "First block.\n\n\n\nSecond block.\n\n   \n\nThird.";
        assert_eq!(paragraphs(text), vec!["First block.", "Second block.", "Third."]);
        assert!(paragraphs("").is_empty());
    }

    #[test]
    fn test_sentences_discard_fragments() {
        let text = "This is a full sentence. Short. Is this another sentence? Yes! Absolutely it is!";
        assert_eq!(
            sentences(text),
            vec![
                "This is a full sentence",
                "Is this another sentence",
                "Absolutely it is"
            ]
        );
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("  one two\nthree\tfour  "), 4);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_heading_detection() {
        assert!(has_heading_line("intro\n# Findings\nbody"));
        assert!(has_heading_line("EXECUTIVE SUMMARY\nbody"));
        assert!(!has_heading_line("Mixed Case Title\nbody text"));
        assert!(!has_heading_line("12345\n---"));
    }
}
