//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields generate SET clauses in the dynamic UPDATE SQL; an update with no
//! fields set leaves the row untouched.

pub mod profile;
pub mod project;
