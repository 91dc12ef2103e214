//! Builders for search domains of RPC-accessed business systems.
//!
//! A domain is a flat, prefix-notation list of comparison leaves and logical
//! operators. [`FilterCollection`] assembles one and hands back the exact
//! structure the remote search and read calls expect.

pub mod comparator;
pub mod errors;
pub mod fields;
pub mod filter;
pub mod operator;

pub use comparator::Comparator;
pub use errors::FilterError;
pub use fields::{Field, FieldCollection};
pub use filter::{FilterCollection, FilterToken};
pub use operator::FilterOperator;
