use similar::{Algorithm, ChangeTag, TextDiff};

use crate::dto::diff::{DiffSegment, DiffSegmentKind};

/// Line-granularity diff over the whole document, with consecutive same-tag
/// lines collapsed into one segment. Line terminators stay inside the values
/// so both sides can be reconstructed byte for byte.
pub fn diff_lines(old: &str, new: &str) -> Vec<DiffSegment> {
    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_lines(old, new);

    let mut segments: Vec<DiffSegment> = Vec::new();
    for op in diff.ops() {
        for change in diff.iter_changes(op) {
            let kind = match change.tag() {
                ChangeTag::Equal => DiffSegmentKind::Unchanged,
                ChangeTag::Delete => DiffSegmentKind::Removed,
                ChangeTag::Insert => DiffSegmentKind::Added,
            };
            match segments.last_mut() {
                Some(last) if last.kind == kind => last.value.push_str(change.value()),
                _ => segments.push(DiffSegment {
                    kind,
                    value: change.value().to_string(),
                }),
            }
        }
    }

    segments.retain(|segment| !segment.value.is_empty());
    segments
}
