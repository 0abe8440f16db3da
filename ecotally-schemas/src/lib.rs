pub mod input;
pub mod result;
