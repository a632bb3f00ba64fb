//! Product catalog module.
//!
//! Contains the product record the catalog supplies and the typed tag
//! parsing for legacy feed shapes.

mod product;
mod tags;

pub use product::{Product, ProductCategory};
pub use tags::{parse_labels, ProductTag};
