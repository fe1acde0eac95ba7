pub mod revision_source;
