pub mod config;
pub mod error;
pub mod field;
pub mod mask;
pub mod validators;

pub use config::FieldSpec;
pub use error::{MaskError, Result};
pub use field::{FieldUpdate, MaskedField};
pub use mask::{ProgressValidator, format, guide, validate};
