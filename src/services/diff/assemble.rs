use tracing::debug;

use crate::dto::diff::{DiffSegment, DiffSegmentKind, RevisionComparison};
use crate::services::diff::block::is_opaque_block;
use crate::services::diff::line_diff::diff_lines;
use crate::services::diff::word_diff::diff_words_inline;
use crate::services::mermaid::compare::compare_mermaid_blocks;
use crate::services::mermaid::extract::{contains_placeholder, extract_mermaid_blocks};

const ADDED_OPEN: &str = "<diff-added>";
const ADDED_CLOSE: &str = "</diff-added>";
const REMOVED_OPEN: &str = "<diff-removed>";
const REMOVED_CLOSE: &str = "</diff-removed>";

/// Compares two markdown revisions and produces one annotated document plus
/// the positional diagram-diff map. Mermaid fences are lifted out of both
/// sides first so diagram source never perturbs the text diff; their
/// placeholders survive in the output for separate before/after rendering.
pub fn diff_documents(old: &str, new: &str) -> RevisionComparison {
    let old_doc = extract_mermaid_blocks(old);
    let new_doc = extract_mermaid_blocks(new);
    let diagram_diffs = compare_mermaid_blocks(&old_doc.blocks, &new_doc.blocks);

    let segments = diff_lines(&old_doc.text, &new_doc.text);
    let annotated = assemble(&segments);

    debug!(
        segments = segments.len(),
        diagrams = diagram_diffs.len(),
        "assembled_revision_diff"
    );
    RevisionComparison {
        annotated,
        diagram_diffs,
    }
}

/// Walks the line-diff segments and picks a rendering per changed region: a
/// removed segment directly followed by an added one is a replace pair
/// (word-diffed when both sides are plain prose, block-wrapped otherwise);
/// an isolated addition is always block-wrapped; an isolated removal is
/// block-wrapped unless it holds a diagram placeholder, in which case it is
/// dropped and survives only in the diagram-diff map.
pub fn assemble(segments: &[DiffSegment]) -> String {
    let mut out = String::new();
    let mut i = 0;

    while i < segments.len() {
        let segment = &segments[i];
        match segment.kind {
            DiffSegmentKind::Unchanged => {
                out.push_str(&segment.value);
                i += 1;
            }
            DiffSegmentKind::Removed => {
                let paired_addition = segments
                    .get(i + 1)
                    .filter(|next| next.kind == DiffSegmentKind::Added);
                if let Some(added) = paired_addition {
                    emit_replace_pair(&mut out, &segment.value, &added.value);
                    i += 2;
                } else {
                    if !contains_placeholder(&segment.value) {
                        push_block(&mut out, REMOVED_OPEN, REMOVED_CLOSE, &segment.value);
                    }
                    i += 1;
                }
            }
            DiffSegmentKind::Added => {
                if contains_placeholder(&segment.value) {
                    out.push_str(&segment.value);
                } else {
                    push_block(&mut out, ADDED_OPEN, ADDED_CLOSE, &segment.value);
                }
                i += 1;
            }
        }
    }

    out
}

fn emit_replace_pair(out: &mut String, old_chunk: &str, new_chunk: &str) {
    if is_opaque_block(old_chunk) || is_opaque_block(new_chunk) {
        push_block(out, REMOVED_OPEN, REMOVED_CLOSE, old_chunk);
        push_block(out, ADDED_OPEN, ADDED_CLOSE, new_chunk);
    } else if contains_placeholder(old_chunk) || contains_placeholder(new_chunk) {
        // diagram content is never word-diffed; the comparator covers it
        out.push_str(new_chunk);
    } else {
        out.push_str(&diff_words_inline(old_chunk, new_chunk));
    }
}

fn push_block(out: &mut String, open: &str, close: &str, chunk: &str) {
    out.push_str(open);
    out.push('\n');
    out.push_str(chunk);
    if !chunk.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(close);
    out.push('\n');
}
