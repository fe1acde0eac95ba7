pub mod badges;
pub mod headings;
