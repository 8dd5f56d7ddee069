//! # LabelKit Core
//!
//! Core types shared by the LabelKit crates: the closed catalog of label
//! field types, the field-value context supplied at preview time, element id
//! generation and the error types surfaced by layout persistence.

pub mod error;
pub mod fields;
pub mod id;

pub use error::{Error, Result, StoreError};
pub use fields::{ElementType, FieldValues, Placeholder};
pub use id::{ElementId, IdGenerator};
