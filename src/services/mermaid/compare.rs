use std::collections::BTreeMap;

use tracing::debug;

use crate::dto::diff::{MermaidBlock, MermaidDiff};

/// Pairs the two block lists purely by position: index `i` in the old list is
/// compared only to index `i` in the new list. Inserting or deleting a block
/// mid-sequence therefore shifts every later index into `Modified`; callers
/// depend on that behavior, so it stays.
pub fn compare_mermaid_blocks(
    old: &[MermaidBlock],
    new: &[MermaidBlock],
) -> BTreeMap<usize, MermaidDiff> {
    let mut diffs = BTreeMap::new();
    for index in 0..old.len().max(new.len()) {
        let entry = match (old.get(index), new.get(index)) {
            (Some(prev), Some(curr)) => {
                if prev.content == curr.content {
                    MermaidDiff::Unchanged {
                        content: curr.content.clone(),
                    }
                } else {
                    MermaidDiff::Modified {
                        previous: prev.content.clone(),
                        current: curr.content.clone(),
                    }
                }
            }
            (None, Some(curr)) => MermaidDiff::Added {
                content: curr.content.clone(),
            },
            (Some(prev), None) => MermaidDiff::Removed {
                content: prev.content.clone(),
            },
            (None, None) => continue,
        };
        diffs.insert(index, entry);
    }

    debug!(
        old_blocks = old.len(),
        new_blocks = new.len(),
        "compared_mermaid_blocks"
    );
    diffs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(index: usize, content: &str) -> MermaidBlock {
        MermaidBlock {
            content: content.to_string(),
            index,
        }
    }

    #[test]
    fn pairing_is_positional() {
        let old = vec![block(0, "A"), block(1, "B")];
        let new = vec![block(0, "A"), block(1, "C")];
        let diffs = compare_mermaid_blocks(&old, &new);

        assert_eq!(
            diffs[&0],
            MermaidDiff::Unchanged {
                content: "A".to_string()
            }
        );
        assert_eq!(
            diffs[&1],
            MermaidDiff::Modified {
                previous: "B".to_string(),
                current: "C".to_string()
            }
        );
    }

    #[test]
    fn trailing_blocks_are_added_or_removed() {
        let old = vec![block(0, "A"), block(1, "B")];
        let new = vec![block(0, "A")];
        let diffs = compare_mermaid_blocks(&old, &new);
        assert_eq!(
            diffs[&1],
            MermaidDiff::Removed {
                content: "B".to_string()
            }
        );

        let diffs = compare_mermaid_blocks(&new, &old);
        assert_eq!(
            diffs[&1],
            MermaidDiff::Added {
                content: "B".to_string()
            }
        );
    }

    #[test]
    fn mid_sequence_insert_shifts_later_indices() {
        let old = vec![block(0, "A"), block(1, "B")];
        let new = vec![block(0, "A"), block(1, "X"), block(2, "B")];
        let diffs = compare_mermaid_blocks(&old, &new);

        assert_eq!(
            diffs[&1],
            MermaidDiff::Modified {
                previous: "B".to_string(),
                current: "X".to_string()
            }
        );
        assert_eq!(
            diffs[&2],
            MermaidDiff::Added {
                content: "B".to_string()
            }
        );
    }

    #[test]
    fn empty_lists_produce_empty_map() {
        assert!(compare_mermaid_blocks(&[], &[]).is_empty());
    }
}
