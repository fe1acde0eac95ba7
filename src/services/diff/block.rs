use once_cell::sync::Lazy;
use regex::Regex;

// A table separator row: a full line of pipes, dashes, colons and spacing
// with at least one dash in it.
static TABLE_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t:|-]*-[ \t:|-]*$").unwrap());

/// Decides whether a changed chunk is safe to word-diff. Fenced code,
/// indented code and markdown tables are opaque: a word-level diff inside
/// them would corrupt their structure, so they are shown as whole-block
/// replacements instead.
pub fn is_opaque_block(chunk: &str) -> bool {
    let trimmed = chunk.trim();
    trimmed.starts_with("```")
        || trimmed.starts_with("~~~")
        || chunk.starts_with("    ")
        || (chunk.contains('|') && TABLE_SEPARATOR_RE.is_match(chunk))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fenced_code_is_opaque() {
        assert!(is_opaque_block("```rust\nfn main() {}\n```\n"));
        assert!(is_opaque_block("\n```\nplain fence\n```\n"));
        assert!(is_opaque_block("~~~\ntilde fence\n~~~\n"));
    }

    #[test]
    fn indented_code_is_opaque() {
        assert!(is_opaque_block("    let x = 1;\n    let y = 2;\n"));
    }

    #[test]
    fn table_with_separator_row_is_opaque() {
        assert!(is_opaque_block(
            "| stage | owner |\n| --- | --- |\n| build | alice |\n"
        ));
        assert!(is_opaque_block("a | b\n---|---\n1 | 2\n"));
    }

    #[test]
    fn pipe_without_separator_row_is_not_opaque() {
        assert!(!is_opaque_block("either this | or that, we decide later\n"));
    }

    #[test]
    fn plain_prose_is_not_opaque() {
        assert!(!is_opaque_block("Just a sentence that changed a little.\n"));
        assert!(!is_opaque_block("Two lines\nof ordinary prose.\n"));
    }
}
