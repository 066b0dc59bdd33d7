pub mod date;
pub mod form;

pub use date::{format_release_date, parse_release_date};
pub use form::{Checkbox, parse_id, parse_optional_id, parse_optional_text};
