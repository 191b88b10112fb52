//! Implementation of the `#[derive(Record)]` macro.
//!
//! Generates the field accessor, field constants, search field list and
//! record identifier from struct annotations.

mod attrs;
mod derive;

pub use derive::record_derive_impl;
