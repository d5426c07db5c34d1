use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// Lightweight authenticated user identity for cross-crate passing.
///
/// Produced by `colab-auth`, consumed by `colab-cli` and `colab-db`.
/// Carries no token material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuthIdentity {
    pub user_id: UserId,
    pub email: String,
}
