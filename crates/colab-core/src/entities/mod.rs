//! Entity structs for all Colab domain objects.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON output and schema
//! validation.

mod collaborator;
mod invitation;
mod project;
mod user;

pub use collaborator::Collaborator;
pub use invitation::{Invitation, InvitationDetail};
pub use project::{Project, decode_skills, encode_skills};
pub use user::{ProfileView, User, UserProfile};
