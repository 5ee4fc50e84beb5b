//! Capitalization detection and re-capitalization

mod classify;
mod mapper;
mod transform;

pub use classify::{
    capitalization_type, is_identical_after_capitalize_each_word, is_identical_after_lowercase,
    is_identical_after_uppercase, CapitalizationType,
};
pub use mapper::{CaseMapper, Locale};
pub use transform::{
    capitalize_each_word, capitalize_first_and_lowercase_rest, capitalize_first_code_point,
    uppercase_code_point, uppercase_if,
};
