//! Identifier aliases.
//!
//! All entities use SQLite integer row IDs. `0` is never assigned, so it
//! doubles as the "no authenticated caller" marker.

pub type UserId = i64;
pub type ProjectId = i64;
pub type InvitationId = i64;

/// Caller ID used when no identity was established.
pub const ANONYMOUS: UserId = 0;

/// Whether `id` refers to an authenticated caller.
#[must_use]
pub const fn is_authenticated(id: UserId) -> bool {
    id > ANONYMOUS
}
