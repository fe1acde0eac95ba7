use crate::dto::sections::{SectionBadge, SectionChange};
use crate::services::sections::badges::classify_heading;

pub struct SectionBadges<'a> {
    pub changes: &'a [SectionChange],
}

impl<'a> SectionBadges<'a> {
    /// Classifies every rendered heading against the change list, in the
    /// order the renderer will show them.
    pub fn execute(&self, heading_texts: &[String]) -> Vec<(String, Option<SectionBadge>)> {
        heading_texts
            .iter()
            .map(|heading| (heading.clone(), classify_heading(heading, self.changes)))
            .collect()
    }
}
