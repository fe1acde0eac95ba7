pub mod diff;
pub mod sections;
