mod auth;
pub mod dispatch;
mod invitation;
mod project;
mod shared;
mod user;
