//! Error types produced while scanning groups and converting values.

mod types;

pub use types::{ConvertError, GroupError};
