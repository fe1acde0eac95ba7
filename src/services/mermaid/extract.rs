use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::dto::diff::{ExtractedDocument, MermaidBlock};

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<mermaid-block index="\d+" />"#).unwrap());

pub fn placeholder(index: usize) -> String {
    format!("<mermaid-block index=\"{index}\" />")
}

pub fn contains_placeholder(text: &str) -> bool {
    PLACEHOLDER_RE.is_match(text)
}

/// Lifts every terminated ```mermaid fence out of the document, replacing it
/// with a single placeholder line carrying the block's positional index.
/// Unterminated fences and fences with a different info string pass through
/// as ordinary text.
pub fn extract_mermaid_blocks(document: &str) -> ExtractedDocument {
    let lines: Vec<&str> = document.split_inclusive('\n').collect();
    let mut text = String::with_capacity(document.len());
    let mut blocks: Vec<MermaidBlock> = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        if is_mermaid_fence_open(lines[i]) {
            if let Some(close) = (i + 1..lines.len()).find(|&j| is_fence_close(lines[j])) {
                let content = lines[i + 1..close].concat();
                let index = blocks.len();
                blocks.push(MermaidBlock {
                    content: content.trim().to_string(),
                    index,
                });
                text.push_str(&placeholder(index));
                text.push('\n');
                i = close + 1;
                continue;
            }
        }
        text.push_str(lines[i]);
        i += 1;
    }

    debug!(blocks = blocks.len(), "extracted_mermaid_blocks");
    ExtractedDocument { text, blocks }
}

fn is_mermaid_fence_open(line: &str) -> bool {
    let trimmed = line.trim();
    let backticks = trimmed.chars().take_while(|&c| c == '`').count();
    backticks >= 3 && trimmed[backticks..].trim() == "mermaid"
}

fn is_fence_close(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 3 && trimmed.chars().all(|c| c == '`')
}
