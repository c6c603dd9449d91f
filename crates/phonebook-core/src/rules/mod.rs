pub mod validation;

pub use validation::{is_valid_email, is_valid_name, is_valid_phone, MIN_NAME_CHARS};
