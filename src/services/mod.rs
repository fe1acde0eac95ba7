pub mod diff;
pub mod mermaid;
pub mod sections;
