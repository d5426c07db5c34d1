//! # colab-core
//!
//! Core types, error taxonomy, and authorization rules for Colab.
//!
//! This crate provides the foundational types shared across all Colab crates:
//! - Entity structs for projects, collaborators, invitations, and accounts
//! - Closed enums with the invitation state machine
//! - ID aliases and the anonymous-caller marker
//! - Cross-cutting error types and stable error categories
//! - Authorization guards (pure, no I/O)
//! - Request validation and CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod guard;
pub mod identity;
pub mod ids;
pub mod requests;
pub mod responses;
