use std::any::type_name;
use std::borrow::Cow;

/// Returns the short name of the static type of `value`, e.g. `i32` or `&str`.
pub fn type_of<T: ?Sized>(_value: &T) -> Cow<'static, str> {
    short_type_name(type_name::<T>())
}

/// Strips module paths from every path segment of a type name.
///
/// `core::option::Option<alloc::string::String>` becomes `Option<String>`.
/// Names without a path are returned borrowed.
pub fn short_type_name(full: &'static str) -> Cow<'static, str> {
    if !full.contains("::") {
        return Cow::Borrowed(full);
    }
    let mut short = String::with_capacity(full.len());
    let mut segment_start = 0;
    let mut chars = full.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            ':' if chars.peek() == Some(&':') => {
                chars.next();
                short.truncate(segment_start);
            }
            c if c.is_alphanumeric() || c == '_' => short.push(c),
            c => {
                short.push(c);
                segment_start = short.len();
            }
        }
    }
    Cow::Owned(short)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_names_are_borrowed() {
        assert!(matches!(type_of(&25i32), Cow::Borrowed("i32")));
        assert_eq!(type_of(&175.5), "f64");
        assert_eq!(type_of(&"Alice"), "&str");
    }

    #[test]
    fn test_std_paths_are_stripped() {
        assert_eq!(type_of(&String::from("Alice")), "String");
        assert_eq!(type_of(&Some(String::new())), "Option<String>");
        assert_eq!(type_of(&vec![Some(1u8)]), "Vec<Option<u8>>");
    }

    #[test]
    fn test_nested_generics_and_references() {
        assert_eq!(
            short_type_name("&core::result::Result<alloc::string::String, std::io::error::Error>"),
            "&Result<String, Error>"
        );
        assert_eq!(short_type_name("(i32, &alloc::string::String)"), "(i32, &String)");
        assert_eq!(short_type_name("&dyn core::fmt::Debug"), "&dyn Debug");
        assert_eq!(short_type_name("[alloc::string::String; 2]"), "[String; 2]");
    }

    #[test]
    fn test_unsized_values() {
        let text: &str = "Canada";
        assert_eq!(type_of(text), "str");
        assert_eq!(type_of(&[1.5f64, 2.5][..]), "[f64]");
    }
}
