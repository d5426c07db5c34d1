use colab_core::entities::User;
use colab_core::responses::SessionResponse;

use crate::context::AppContext;

/// Sign a fresh session token for `user`.
pub fn issue_session(ctx: &AppContext, user: User) -> anyhow::Result<SessionResponse> {
    let (token, claims) = ctx.authenticator()?.issue(user.id, &user.email)?;
    Ok(SessionResponse {
        user,
        token,
        expires_at: claims.expires_at,
    })
}
