use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffSegmentKind {
    Unchanged,
    Added,
    Removed,
}

/// One run of consecutive lines sharing a diff tag. Values keep their line
/// terminators, so concatenating every non-removed value reproduces the new
/// text and every non-added value reproduces the old text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffSegment {
    pub kind: DiffSegmentKind,
    pub value: String,
}

/// A mermaid fence lifted out of a document. Identity is the position in the
/// document, not the content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MermaidBlock {
    pub content: String,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedDocument {
    pub text: String,
    pub blocks: Vec<MermaidBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum MermaidDiff {
    Unchanged { content: String },
    Added { content: String },
    Removed { content: String },
    Modified { previous: String, current: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevisionComparison {
    pub annotated: String,
    pub diagram_diffs: BTreeMap<usize, MermaidDiff>,
}
