pub mod assemble;
pub mod block;
pub mod line_diff;
pub mod word_diff;
