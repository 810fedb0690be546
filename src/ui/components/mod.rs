//! Small reusable rendering components.

pub mod input_field;
pub mod stars;

pub use input_field::{render_error_line, render_input_field, InputFieldConfig, INPUT_FIELD_HEIGHT};
pub use stars::{render_star_picker, star_line, StarPicker, STAR_COUNT};
