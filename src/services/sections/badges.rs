use crate::dto::sections::{SectionBadge, SectionChange};

/// Matches a rendered heading against the externally supplied change list
/// and picks a badge. Matching is fuzzy on purpose: both sides are
/// normalized, then compared for equality or substring containment either
/// way, first matching record wins. Short generic headings can therefore
/// false-positive against longer section names; the upstream list does not
/// specify tighter precision, so the loose rule stands.
pub fn classify_heading(heading: &str, changes: &[SectionChange]) -> Option<SectionBadge> {
    let heading_norm = normalize(heading);
    if heading_norm.is_empty() {
        return None;
    }

    for change in changes {
        let section_norm = normalize(&change.section);
        if section_norm.is_empty() {
            continue;
        }
        if heading_norm == section_norm
            || heading_norm.contains(&section_norm)
            || section_norm.contains(&heading_norm)
        {
            return Some(if change.is_new {
                SectionBadge::New
            } else {
                SectionBadge::Updated
            });
        }
    }
    None
}

fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|ch| ch.is_alphanumeric() || ch.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(section: &str, is_new: bool) -> SectionChange {
        SectionChange {
            section: section.to_string(),
            original_section: None,
            is_new,
            is_removed: None,
            renamed_from: None,
            lines_added: 0,
            lines_removed: 0,
        }
    }

    #[test]
    fn substring_match_yields_badge() {
        let changes = vec![change("Backpressure", true)];
        assert_eq!(
            classify_heading("Backpressure Over Prescription", &changes),
            Some(SectionBadge::New)
        );
    }

    #[test]
    fn exact_match_ignores_case_and_punctuation() {
        let changes = vec![change("Error Handling", false)];
        assert_eq!(
            classify_heading("Error, Handling!", &changes),
            Some(SectionBadge::Updated)
        );
    }

    #[test]
    fn first_matching_record_wins() {
        let changes = vec![change("Pipeline Design", false), change("Pipeline", true)];
        assert_eq!(
            classify_heading("Pipeline Design", &changes),
            Some(SectionBadge::Updated)
        );
    }

    #[test]
    fn no_match_yields_no_badge() {
        let changes = vec![change("Storage", true)];
        assert_eq!(classify_heading("Networking", &changes), None);
    }

    #[test]
    fn empty_change_list_yields_no_badge() {
        assert_eq!(classify_heading("Anything", &[]), None);
    }

    #[test]
    fn punctuation_only_heading_gets_no_badge() {
        let changes = vec![change("Storage", true)];
        assert_eq!(classify_heading("---", &changes), None);
    }
}
