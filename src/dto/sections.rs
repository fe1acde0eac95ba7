use serde::{Deserialize, Serialize};

/// One record of the externally computed per-section change list. The
/// payload arrives from history analysis in camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionChange {
    pub section: String,
    pub original_section: Option<String>,
    pub is_new: bool,
    pub is_removed: Option<bool>,
    pub renamed_from: Option<String>,
    pub lines_added: i64,
    pub lines_removed: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionBadge {
    New,
    Updated,
}
