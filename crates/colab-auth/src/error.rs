use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated: pass --token or set COLAB_TOKEN")]
    NotAuthenticated,

    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("token expired: issue a new one with `colab auth issue`")]
    TokenExpired,

    #[error("token secret is not usable: {0}")]
    Misconfigured(String),
}
