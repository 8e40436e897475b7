pub mod error;
pub mod record;

pub use error::{InvalidRecordError, Result};
pub use record::*;
