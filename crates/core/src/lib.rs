//! `stockpile-core` — domain building blocks shared by the inventory store.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod error;
pub mod item_name;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use item_name::ItemName;
pub use value_object::ValueObject;
