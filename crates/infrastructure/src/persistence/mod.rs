//! File-based persistence.

mod file_system;
mod input_reader;

pub use file_system::TokioFileSystem;
pub use input_reader::{InputError, InputReader};
