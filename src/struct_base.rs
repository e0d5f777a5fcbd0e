//! The `StructBase` contract: strict keyword-style construction.

use crate::arguments::Arguments;
use crate::error::Result;
use crate::schema::Schema;
use crate::value::{IntoArgument, Supplied};

/// A struct-like type built from named arguments.
///
/// Construction assigns every supplied value to the declared field of the
/// same name and defaults the rest; a name the type does not declare is an
/// error, both while constructing and on every later [`assign`](Self::assign).
///
/// Implement it with `#[derive(StructBase)]`:
///
/// ```rust
/// use sugars_struct::{args, StructBase};
///
/// #[derive(Debug, PartialEq, StructBase)]
/// struct Point {
///     x: Option<i64>,
///     y: Option<i64>,
/// }
///
/// let p = Point::construct(args! { "x" => 3 })?;
/// assert_eq!(p, Point { x: Some(3), y: None });
///
/// let err = Point::construct(args! { "x" => 3, "z" => 5 }).unwrap_err();
/// assert_eq!(err.field(), "z");
/// # Ok::<(), sugars_struct::StructError>(())
/// ```
///
/// Declared fields are also the only ones reachable statically:
///
/// ```compile_fail
/// use sugars_struct::StructBase;
///
/// #[derive(StructBase)]
/// struct Point {
///     x: Option<i64>,
///     y: Option<i64>,
/// }
///
/// let mut p = Point { x: None, y: None };
/// p.z = Some(5);
/// ```
///
/// The derive needs named fields, so tuple structs are rejected:
///
/// ```compile_fail
/// use sugars_struct::StructBase;
///
/// #[derive(StructBase)]
/// struct Pair(i64, i64);
/// ```
///
/// and so are enums:
///
/// ```compile_fail
/// use sugars_struct::StructBase;
///
/// #[derive(StructBase)]
/// enum Shape {
///     Circle { radius: f64 },
///     Square { side: f64 },
/// }
/// ```
pub trait StructBase: Sized {
    /// The declared field set.
    fn schema() -> &'static Schema;

    /// Builds an instance from an already collected argument mapping.
    ///
    /// Prefer [`construct`](Self::construct); this is the hook the derive
    /// fills in.
    fn from_arguments(arguments: Arguments) -> Result<Self>;

    /// Decodes `value` into the declared field `field`.
    ///
    /// Prefer [`assign`](Self::assign); this is the hook the derive fills in.
    fn assign_value(&mut self, field: &str, value: Supplied) -> Result<()>;

    /// Builds an instance from named arguments.
    ///
    /// Omitted fields, and fields supplied as `null`, take their null/empty
    /// default. Fails with [`UndeclaredField`](crate::StructError::UndeclaredField)
    /// for a name outside the declared set and with
    /// [`TypeMismatch`](crate::StructError::TypeMismatch) for a value that
    /// does not decode into its field's type. No instance exists on failure.
    fn construct<A>(arguments: A) -> Result<Self>
    where
        A: Into<Arguments>,
    {
        let arguments = arguments.into();
        let supplied = arguments.len();
        let instance = Self::from_arguments(arguments)?;
        log::trace!(
            "constructed `{}` from {} argument(s)",
            Self::schema().type_name(),
            supplied
        );
        Ok(instance)
    }

    /// Assigns `value` to the declared field `field`.
    ///
    /// An undeclared name always fails with
    /// [`UndeclaredField`](crate::StructError::UndeclaredField). On any error
    /// the instance is unchanged. Assigning `null` resets the field to its
    /// default; a `NaN` or infinite float is a type mismatch.
    fn assign<V>(&mut self, field: &str, value: V) -> Result<()>
    where
        V: IntoArgument,
    {
        self.assign_value(field, Supplied::from(value.into_argument()))
    }
}

#[doc(hidden)]
pub mod __private {
    //! Support code for `#[derive(StructBase)]`. Not public API.

    pub use crate::arguments::Arguments;
    pub use crate::error::{Result, StructError};
    pub use crate::schema::{Field, Schema};
    pub use crate::value::{FieldValue, Supplied};

    use crate::value::ValueKind;

    /// Decodes `value` for the declared field `field`. `null` decodes to
    /// `None`, meaning "take the default".
    pub fn decode<T: FieldValue>(
        schema: &'static Schema,
        field: &'static str,
        value: Supplied,
    ) -> Result<Option<T>> {
        let actual = value.kind();
        let decoded = match value {
            Supplied::Value(value) if value.is_null() => return Ok(None),
            Supplied::Value(value) => T::from_value(value).map_err(|err| err.to_string()),
            Supplied::NonFinite(float) => Err(float.to_string()),
        };
        decoded.map(Some).map_err(|reason| {
            let expected = schema
                .field(field)
                .map_or(std::any::type_name::<T>(), |declared| declared.type_name);
            log::debug!(
                "rejected {} for field `{}::{}` of type `{}`",
                actual,
                schema.type_name(),
                field,
                expected
            );
            StructError::TypeMismatch {
                type_name: schema.type_name(),
                field,
                expected,
                actual,
                reason,
            }
        })
    }

    /// The default for a field that was omitted or supplied as `null`.
    #[inline]
    pub fn or_null<T: FieldValue>(slot: Option<T>) -> T {
        slot.unwrap_or_else(T::null)
    }

    /// The error for a name outside the declared set.
    #[inline]
    pub fn undeclared(schema: &'static Schema, field: &str) -> StructError {
        schema.undeclared(field)
    }
}
