//! gridcalc-core - sheet model and line-oriented storage.

pub mod error;
pub mod sheet;
pub mod storage;

pub use error::{GridcalcError, Result};
pub use sheet::Sheet;
pub use storage::{CIRCULAR_DEPENDENCY_MSG, read_sheet, write_values};

pub use gridcalc_engine::{CellRef, EngineError};
