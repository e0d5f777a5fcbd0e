//! The declared field set of a concrete type.

use crate::error::{Result, StructError};

/// One declared field: its name and the source spelling of its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Field name, without any `r#` prefix
    pub name: &'static str,
    /// Declared type
    pub type_name: &'static str,
}

impl Field {
    /// Creates a field descriptor.
    #[inline]
    pub const fn new(name: &'static str, type_name: &'static str) -> Self {
        Self { name, type_name }
    }
}

/// The closed set of fields declared on a type, in declaration order.
///
/// Derived types keep their schema in a `static`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    type_name: &'static str,
    fields: &'static [Field],
}

impl Schema {
    /// Creates a schema for `type_name` declaring `fields`.
    #[inline]
    pub const fn new(type_name: &'static str, fields: &'static [Field]) -> Self {
        Self { type_name, fields }
    }

    /// Name of the concrete type.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// All declared fields.
    #[inline]
    pub fn fields(&self) -> &'static [Field] {
        self.fields
    }

    /// Looks up a declared field by name.
    pub fn field(&self, name: &str) -> Option<&'static Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Whether `name` is declared.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Iterates over the declared field names.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|field| field.name)
    }

    /// Number of declared fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields are declared.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the declared field called `name`, or
    /// [`StructError::UndeclaredField`].
    pub fn check(&self, name: &str) -> Result<&'static Field> {
        self.field(name).ok_or_else(|| self.undeclared(name))
    }

    pub(crate) fn undeclared(&self, name: &str) -> StructError {
        log::debug!(
            "rejected undeclared field `{}` on `{}`",
            name,
            self.type_name
        );
        StructError::UndeclaredField {
            type_name: self.type_name,
            field: name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static FIELDS: [Field; 2] = [Field::new("x", "i64"), Field::new("y", "Option<i64>")];
    static POINT: Schema = Schema::new("Point", &FIELDS);

    #[test]
    fn lookup_in_declaration_order() {
        assert_eq!(POINT.type_name(), "Point");
        assert_eq!(POINT.len(), 2);
        assert!(!POINT.is_empty());
        assert_eq!(POINT.names().collect::<Vec<_>>(), vec!["x", "y"]);
        assert_eq!(POINT.field("y").map(|f| f.type_name), Some("Option<i64>"));
        assert!(POINT.contains("x"));
        assert!(!POINT.contains("z"));
    }

    #[test]
    fn check_rejects_undeclared_names() {
        assert_eq!(POINT.check("x").map(|f| f.name), Ok("x"));
        assert_eq!(
            POINT.check("z"),
            Err(StructError::UndeclaredField {
                type_name: "Point",
                field: "z".to_string(),
            })
        );
    }

    #[test]
    fn empty_schema_declares_nothing() {
        static NONE: [Field; 0] = [];
        static UNIT: Schema = Schema::new("Unit", &NONE);
        assert!(UNIT.is_empty());
        assert!(UNIT.check("anything").is_err());
    }
}
