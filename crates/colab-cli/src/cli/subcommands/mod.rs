pub mod auth;
pub mod invitation;
pub mod project;
pub mod user;

pub use auth::AuthCommands;
pub use invitation::InvitationCommands;
pub use project::{ProjectCommands, ProjectCreateArgs, ProjectInviteArgs, ProjectUpdateArgs};
pub use user::{UpdateProfileArgs, UserCommands};
