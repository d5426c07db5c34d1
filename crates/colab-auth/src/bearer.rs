use crate::error::AuthError;

/// Extract the token from an `Authorization: Bearer <token>` header value.
///
/// The scheme is matched case-insensitively.
///
/// # Errors
///
/// Returns `AuthError::NotAuthenticated` for a missing or empty token, and
/// `AuthError::InvalidCredentials` for any other scheme.
pub fn parse_bearer(header: &str) -> Result<&str, AuthError> {
    let header = header.trim();
    if header.is_empty() {
        return Err(AuthError::NotAuthenticated);
    }
    let (scheme, token) = header.split_once(' ').unwrap_or((header, ""));
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::InvalidCredentials(format!(
            "unsupported authorization scheme '{scheme}'"
        )));
    }
    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::NotAuthenticated);
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Bearer abc.def", "abc.def")]
    #[case("bearer abc.def", "abc.def")]
    #[case("  BEARER   abc.def  ", "abc.def")]
    fn extracts_token(#[case] header: &str, #[case] expected: &str) {
        assert_eq!(parse_bearer(header).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("Bearer")]
    #[case("Bearer   ")]
    fn missing_token_is_not_authenticated(#[case] header: &str) {
        assert!(matches!(parse_bearer(header), Err(AuthError::NotAuthenticated)));
    }

    #[test]
    fn other_schemes_are_rejected() {
        assert!(matches!(
            parse_bearer("Basic dXNlcjpwYXNz"),
            Err(AuthError::InvalidCredentials(_))
        ));
    }
}
