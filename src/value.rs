//! Conversion between supplied values and declared field types.

use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};
use std::borrow::Cow;
use std::fmt;

/// A type that can sit in a declared field of a [`StructBase`](crate::StructBase).
///
/// Implemented for every `T: DeserializeOwned + Default`. The decoder does no
/// coercion of its own: a string is never read as a number.
pub trait FieldValue: Sized {
    /// Decodes a supplied value into the field type.
    fn from_value(value: Value) -> Result<Self, serde_json::Error>;

    /// The null/empty value an omitted field takes.
    fn null() -> Self;
}

impl<T> FieldValue for T
where
    T: DeserializeOwned + Default,
{
    #[inline]
    fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[inline]
    fn null() -> Self {
        T::default()
    }
}

/// Shape of a supplied value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `null`
    Null,
    /// `true` or `false`
    Bool,
    /// Any number
    Number,
    /// A string
    String,
    /// An array
    Array,
    /// An object
    Object,
}

impl ValueKind {
    /// The shape of `value`.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Lowercase name of the shape.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A float with no JSON representation: `NaN` or an infinity.
#[derive(Debug, Clone, Copy)]
pub struct NonFinite(pub f64);

impl PartialEq for NonFinite {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl fmt::Display for NonFinite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "non-finite float {} has no JSON representation", self.0)
    }
}

/// A value supplied for one name, before it is decoded into a field.
#[derive(Debug, Clone, PartialEq)]
pub enum Supplied {
    /// A representable value
    Value(Value),
    /// A float that cannot be carried as a JSON number
    NonFinite(NonFinite),
}

impl Supplied {
    /// The value, unless it was a non-finite float.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Supplied::Value(value) => Some(value),
            Supplied::NonFinite(_) => None,
        }
    }

    /// Shape of the supplied value. Non-finite floats are numbers.
    pub fn kind(&self) -> ValueKind {
        match self {
            Supplied::Value(value) => ValueKind::of(value),
            Supplied::NonFinite(_) => ValueKind::Number,
        }
    }
}

impl From<Result<Value, NonFinite>> for Supplied {
    #[inline]
    fn from(result: Result<Value, NonFinite>) -> Self {
        match result {
            Ok(value) => Supplied::Value(value),
            Err(float) => Supplied::NonFinite(float),
        }
    }
}

/// Conversion of a Rust value into a supplied argument.
///
/// Mirrors `Into<serde_json::Value>`, except that `NaN` and infinities are
/// kept as [`NonFinite`] instead of collapsing to `null`, so they are
/// reported as a type mismatch rather than read as an omitted field.
pub trait IntoArgument {
    /// Converts into a JSON value, or the first non-finite float found.
    fn into_argument(self) -> Result<Value, NonFinite>;
}

macro_rules! lossless_argument {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoArgument for $ty {
                #[inline]
                fn into_argument(self) -> Result<Value, NonFinite> {
                    Ok(Value::from(self))
                }
            }
        )*
    };
}

lossless_argument!(
    bool,
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
    String,
    &str,
    Cow<'_, str>,
    Number,
    Map<String, Value>,
    Value,
    (),
);

impl IntoArgument for &String {
    #[inline]
    fn into_argument(self) -> Result<Value, NonFinite> {
        Ok(Value::String(self.clone()))
    }
}

impl IntoArgument for f64 {
    #[inline]
    fn into_argument(self) -> Result<Value, NonFinite> {
        Number::from_f64(self)
            .map(Value::Number)
            .ok_or(NonFinite(self))
    }
}

impl IntoArgument for f32 {
    #[inline]
    fn into_argument(self) -> Result<Value, NonFinite> {
        f64::from(self).into_argument()
    }
}

impl<T: IntoArgument> IntoArgument for Option<T> {
    #[inline]
    fn into_argument(self) -> Result<Value, NonFinite> {
        match self {
            Some(value) => value.into_argument(),
            None => Ok(Value::Null),
        }
    }
}

impl<T: IntoArgument> IntoArgument for Vec<T> {
    fn into_argument(self) -> Result<Value, NonFinite> {
        self.into_iter()
            .map(IntoArgument::into_argument)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }
}

impl<T: IntoArgument, const N: usize> IntoArgument for [T; N] {
    fn into_argument(self) -> Result<Value, NonFinite> {
        self.into_iter()
            .map(IntoArgument::into_argument)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }
}

impl<T: IntoArgument + Clone> IntoArgument for &[T] {
    fn into_argument(self) -> Result<Value, NonFinite> {
        self.iter()
            .cloned()
            .map(IntoArgument::into_argument)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_of_each_shape() {
        assert_eq!(ValueKind::of(&json!(null)), ValueKind::Null);
        assert_eq!(ValueKind::of(&json!(true)), ValueKind::Bool);
        assert_eq!(ValueKind::of(&json!(1.5)), ValueKind::Number);
        assert_eq!(ValueKind::of(&json!("a")), ValueKind::String);
        assert_eq!(ValueKind::of(&json!([1])), ValueKind::Array);
        assert_eq!(ValueKind::of(&json!({"a": 1})), ValueKind::Object);
        assert_eq!(ValueKind::Object.to_string(), "object");
    }

    #[test]
    fn decoding_does_not_coerce_strings() {
        assert!(<i64 as FieldValue>::from_value(json!("3")).is_err());
        assert_eq!(<i64 as FieldValue>::from_value(json!(3)).ok(), Some(3));
    }

    #[test]
    fn non_finite_floats_are_kept_apart_from_null() {
        assert_eq!(f64::NAN.into_argument().map_err(|f| f.0.is_nan()), Err(true));
        assert_eq!(f64::INFINITY.into_argument(), Err(NonFinite(f64::INFINITY)));
        assert_eq!(f32::NEG_INFINITY.into_argument(), Err(NonFinite(f64::NEG_INFINITY)));
        assert!(vec![1.0, f64::NAN].into_argument().is_err());
        assert_eq!(1.5f64.into_argument(), Ok(json!(1.5)));
        assert_eq!(None::<f64>.into_argument(), Ok(Value::Null));

        let supplied = Supplied::from(f64::INFINITY.into_argument());
        assert_eq!(supplied.kind(), ValueKind::Number);
        assert_eq!(supplied.as_value(), None);
    }

    #[test]
    fn null_is_the_default() {
        assert_eq!(<Option<i64> as FieldValue>::null(), None);
        assert_eq!(<String as FieldValue>::null(), "");
        assert_eq!(<Vec<u8> as FieldValue>::null(), Vec::<u8>::new());
    }
}
