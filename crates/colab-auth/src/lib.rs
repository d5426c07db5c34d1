//! # colab-auth
//!
//! Identity for Colab callers.
//!
//! The service layer only needs an [`AuthIdentity`](colab_core::identity::AuthIdentity);
//! how a token becomes one sits behind the [`Authenticator`] trait. The bundled
//! implementation is [`SessionTokenAuthenticator`], which issues and checks
//! HMAC-SHA256 signed session tokens.

pub mod authenticator;
pub mod bearer;
pub mod claims;
pub mod error;

pub use authenticator::{Authenticator, SessionTokenAuthenticator};
pub use bearer::parse_bearer;
pub use claims::SessionClaims;
pub use error::AuthError;
