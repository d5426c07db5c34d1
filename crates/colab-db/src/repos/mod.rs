//! Repository modules implementing Colab operations.
//!
//! Each module adds methods to `ColabService` via `impl ColabService` blocks.
//! Statement-level helpers take a `&libsql::Connection` so they run the same
//! way on the plain connection and inside a transaction.

pub mod collaborator;
pub mod invitation;
pub mod project;
pub mod user;
