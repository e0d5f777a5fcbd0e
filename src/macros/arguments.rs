//! Macros for writing [`Arguments`](crate::Arguments) inline.

/// Builds an [`Arguments`](crate::Arguments) mapping from `name => value`
/// pairs.
///
/// Each value goes through [`IntoArgument`](crate::IntoArgument), so literals
/// of different types can sit side by side. A repeated name keeps the last
/// value.
///
/// # Example
///
/// ```rust
/// use sugars_struct::args;
///
/// let args = args! {
///     "name" => "origin",
///     "x" => 0,
///     "visible" => true,
/// };
/// assert_eq!(args.len(), 3);
///
/// let empty = args! {};
/// assert!(empty.is_empty());
/// ```
#[doc(hidden)]
#[macro_export]
macro_rules! __struct_args {
    {$($k: expr => $v: expr),* $(,)?} => {
        $crate::Arguments::new()$(.with($k, $v))*
    };
}

#[doc(inline)]
pub use crate::__struct_args as args;

#[cfg(test)]
mod tests {
    use super::args;
    use crate::Supplied;
    use serde_json::json;

    #[test]
    fn mixed_value_types() {
        let args = args! { "a" => 1, "b" => "two", "c" => vec![3, 4], "a" => 5 };
        let entries: Vec<_> = args.iter().map(|(k, v)| (k.to_string(), v.clone())).collect();
        assert_eq!(
            entries,
            vec![
                ("a".to_string(), Supplied::Value(json!(5))),
                ("b".to_string(), Supplied::Value(json!("two"))),
                ("c".to_string(), Supplied::Value(json!([3, 4]))),
            ]
        );
    }
}
