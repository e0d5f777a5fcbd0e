//! # Sugars Struct
//!
//! Syntactic sugar for strict keyword-style struct construction.
//!
//! A type implementing [`StructBase`] is built from a mapping of field names
//! to values. Every supplied value lands in the declared field of the same
//! name, every omitted field takes its null/empty default, and a name the
//! type does not declare is rejected instead of silently creating a field.
//!
//! ## Features
//!
//! - `derive` - `#[derive(StructBase)]` for structs with named fields
//! - `macros` - the `args!` macro for inline argument mappings
//!
//! ## Example
//!
//! ```rust
//! use sugars_struct::{args, StructBase, StructError};
//!
//! #[derive(Debug, PartialEq, StructBase)]
//! struct Point {
//!     x: Option<i64>,
//!     y: Option<i64>,
//! }
//!
//! let mut p = Point::construct(args! { "x" => 1, "y" => 2 })?;
//!
//! // Undeclared names are rejected for the whole lifetime of the instance
//! let err = p.assign("w", 9).unwrap_err();
//! assert!(matches!(err, StructError::UndeclaredField { .. }));
//! assert_eq!(p, Point { x: Some(1), y: Some(2) });
//! # Ok::<(), StructError>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod arguments;
pub mod error;
pub mod schema;
pub mod struct_base;
pub mod value;

#[cfg(feature = "macros")]
pub mod macros;

pub use arguments::Arguments;
pub use error::{Result, StructError};
pub use schema::{Field, Schema};
pub use struct_base::StructBase;
pub use value::{FieldValue, IntoArgument, NonFinite, Supplied, ValueKind};

#[doc(hidden)]
pub use struct_base::__private;

#[cfg(feature = "derive")]
pub use sugars_struct_macros::StructBase;

#[cfg(feature = "macros")]
pub use macros::arguments::args;
