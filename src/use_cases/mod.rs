pub mod compare_revisions;
pub mod section_badges;
