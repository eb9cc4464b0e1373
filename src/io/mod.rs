//! Line-oriented reading facilities for corpus and score files.
pub mod reader;

pub use reader::{read_floats, read_lines};
