//! Catalog of columns and operators
//!
//! The catalog is loaded once per session through a `CatalogSource` and is
//! read-only afterwards. Two sources ship with the crate:
//!
//! - `BuiltinSource`: a small demo catalog (Name, Company, City, State, ...)
//! - `FileSource`: a TOML or JSON file with `columns`, `operators` and
//!   optional `initial_terms` arrays
//!
//! # Examples
//!
//! ```
//! use pillfilter::catalog::{self, BuiltinSource};
//!
//! let loaded = catalog::load(&BuiltinSource).unwrap();
//! let company = loaded.catalog.column_by_label("Company").unwrap();
//! assert_eq!(loaded.catalog.default_operator(company).unwrap().label, "Equals");
//! ```

pub mod error;
pub mod source;
pub mod types;

pub use error::CatalogError;
pub use source::{BuiltinSource, CatalogFile, CatalogSource, FileSource, Loaded, load};
pub use types::{Catalog, Column, ColumnType, Operator, Value};
