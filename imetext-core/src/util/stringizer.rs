use std::fmt::Display;

/// Render a list of elements as `[a, b, c]` for logs and debugging
pub trait Stringizer<E> {
    /// Text for one element
    fn stringize(&self, element: &E) -> String;

    /// Bracketed list; `delimiter` defaults to `", "`
    fn join(&self, elements: &[E], delimiter: Option<&str>) -> String {
        let delimiter = delimiter.unwrap_or(", ");
        let mut joined = String::from("[");
        for (index, element) in elements.iter().enumerate() {
            if index > 0 {
                joined.push_str(delimiter);
            }
            joined.push_str(&self.stringize(element));
        }
        joined.push(']');
        joined
    }
}

/// Stringizer that uses `Display`
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayStringizer;

/// Stringizer for optional elements, printing `None` as `null`
#[derive(Debug, Clone, Copy, Default)]
pub struct NullableStringizer;

impl<T: Display> Stringizer<T> for DisplayStringizer {
    fn stringize(&self, element: &T) -> String {
        element.to_string()
    }
}

impl<T: Display> Stringizer<Option<T>> for NullableStringizer {
    fn stringize(&self, element: &Option<T>) -> String {
        match element {
            Some(value) => value.to_string(),
            None => "null".to_string(),
        }
    }
}
