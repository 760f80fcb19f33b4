//! Token and role helpers used at the HTTP boundary.

use crate::roles::Role;

/// Extract the token portion of an `Authorization: Bearer <token>` header.
///
/// Returns `None` when the header is absent or does not carry the literal
/// `"Bearer "` prefix. Pure function, no side effects.
pub fn extract_bearer_token(header: Option<&str>) -> Option<&str> {
    header?.strip_prefix("Bearer ")
}

/// Whether a (possibly absent) user's role is in the allow-list.
///
/// An absent user is never authorized.
pub fn has_role(role: Option<Role>, allowed: &[Role]) -> bool {
    match role {
        Some(r) => allowed.contains(&r),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_token_after_bearer_prefix() {
        assert_eq!(
            extract_bearer_token(Some("Bearer abc123")),
            Some("abc123")
        );
    }

    #[test]
    fn rejects_header_without_prefix() {
        assert_eq!(extract_bearer_token(Some("abc123")), None);
        assert_eq!(extract_bearer_token(Some("bearer abc123")), None);
        assert_eq!(extract_bearer_token(Some("Basic abc123")), None);
    }

    #[test]
    fn rejects_missing_header() {
        assert_eq!(extract_bearer_token(None), None);
    }

    #[test]
    fn empty_token_after_prefix_is_preserved() {
        // "Bearer " with nothing after it yields an empty token; rejecting
        // the empty string is the JWT validator's job.
        assert_eq!(extract_bearer_token(Some("Bearer ")), Some(""));
    }

    #[test]
    fn role_in_allow_list_passes() {
        assert!(has_role(Some(Role::Manager), &[Role::Admin, Role::Manager]));
        assert!(has_role(Some(Role::Admin), &[Role::Admin]));
    }

    #[test]
    fn role_outside_allow_list_fails() {
        assert!(!has_role(Some(Role::Employee), &[Role::Admin, Role::Manager]));
    }

    #[test]
    fn absent_user_is_never_authorized() {
        assert!(!has_role(None, &[Role::Admin]));
        assert!(!has_role(None, &[]));
    }
}
