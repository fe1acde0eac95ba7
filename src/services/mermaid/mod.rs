pub mod compare;
pub mod extract;
