//! Slot matching for masked fields.
//!
//! [`format`] projects raw keystrokes onto a template, [`guide`] builds the
//! overlay text, and [`ProgressValidator`] trims values that can no longer
//! complete into a pattern match.

mod format;
mod model;
mod parser;
mod progress;

pub use format::{format, guide};
pub use model::{CharClass, DIGIT_SLOTS, LETTER_SLOT, MaskToken, Step, resolve};
pub use parser::{parse_template, strip_input};
pub use progress::{ProgressValidator, compile_pattern, validate};
