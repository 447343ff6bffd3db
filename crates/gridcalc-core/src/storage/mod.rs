//! Line-oriented input/output for sheets.

mod reader;
mod writer;

pub use reader::read_sheet;
pub use writer::{CIRCULAR_DEPENDENCY_MSG, write_values};
