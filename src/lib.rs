//! Markdown revision diffing: mermaid blocks are lifted out as atomic units,
//! the remaining text is diffed at line then word granularity, and the
//! result is reassembled into one annotated markdown document plus a
//! positional diagram-diff map and per-heading change badges.

pub mod dto;
pub mod ports;
pub mod services;
pub mod use_cases;

pub use dto::diff::{
    DiffSegment, DiffSegmentKind, ExtractedDocument, MermaidBlock, MermaidDiff,
    RevisionComparison,
};
pub use dto::sections::{SectionBadge, SectionChange};
pub use services::diff::assemble::diff_documents;
pub use services::diff::line_diff::diff_lines;
pub use services::mermaid::compare::compare_mermaid_blocks;
pub use services::mermaid::extract::extract_mermaid_blocks;
pub use services::sections::badges::classify_heading;
pub use services::sections::headings::heading_texts;
