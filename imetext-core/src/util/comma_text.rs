//! Comma-splittable text
//!
//! Like CSV without quoting or escaping: values are joined with `,` and a
//! value can never contain a comma. Used for small flag lists such as extra
//! subtype values.

/// Separator between values
pub const SEPARATOR: char = ',';

/// Whether `value` is one of the values in `list`
pub fn contains(value: &str, list: &str) -> bool {
    if list.is_empty() {
        return false;
    }
    list.split(SEPARATOR).any(|element| element == value)
}

/// Join two lists, skipping whichever is empty
pub fn join(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail.to_string(),
        (false, true) => head.to_string(),
        (false, false) => format!("{head}{SEPARATOR}{tail}"),
    }
}

/// Append `value` to `list` unless it is already there
pub fn append_if_absent(value: &str, list: &str) -> String {
    if list.is_empty() {
        return value.to_string();
    }
    if contains(value, list) {
        return list.to_string();
    }
    format!("{list}{SEPARATOR}{value}")
}

/// Remove every occurrence of `value` from `list`
pub fn remove_if_present(value: &str, list: &str) -> String {
    if list.is_empty() {
        return String::new();
    }
    if !contains(value, list) {
        return list.to_string();
    }
    list.split(SEPARATOR)
        .filter(|element| *element != value)
        .collect::<Vec<_>>()
        .join(",")
}
