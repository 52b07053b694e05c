//! # Endpoint Classification
//!
//! Fixed allow-lists deciding which requests go out without a bearer token, and
//! which 401 responses force a logout.
//!
//! A fragment matches a path when one of its occurrences is followed by the end
//! of the string, `?` or `#`. `/auth/login?next=/x` matches `/auth/login`;
//! `/auth/login/history` does not.

/// Paths called without an `Authorization` header.
pub const PUBLIC_ENDPOINTS: &[&str] = &[
    "/reference/countries",
    "/reference/currencies",
    "/reference/industries",
    "/auth/login",
    "/auth/register",
    "/auth/otp/send",
    "/auth/otp/verify",
    "/campaigns/public",
    "/categories/public",
];

/// Paths whose 401 means the session is gone for good.
pub const CRITICAL_ENDPOINTS: &[&str] = &["/users/me", "/auth/logout"];

/// True when `fragment` occurs in `path` followed by end, `?` or `#`.
pub fn matches_endpoint(path: &str, fragment: &str) -> bool {
    if fragment.is_empty() {
        return false;
    }
    path.match_indices(fragment).any(|(start, _)| {
        match path[start + fragment.len()..].chars().next() {
            None | Some('?') | Some('#') => true,
            Some(_) => false,
        }
    })
}

/// Whether the dispatcher must leave the bearer token off this request.
pub fn is_public(path: &str) -> bool {
    PUBLIC_ENDPOINTS
        .iter()
        .any(|fragment| matches_endpoint(path, fragment))
}

/// Whether a 401 from this URL should clear the session.
pub fn is_critical(url: &str) -> bool {
    CRITICAL_ENDPOINTS
        .iter()
        .any(|fragment| matches_endpoint(url, fragment))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_public_paths() {
        for path in PUBLIC_ENDPOINTS {
            assert!(is_public(path), "{} should be public", path);
        }
    }

    #[test]
    fn test_public_with_query_or_fragment() {
        assert!(is_public("/campaigns/public?page=0&size=10"));
        assert!(is_public("/auth/login#form"));
        assert!(is_public("/reference/countries?"));
    }

    #[test]
    fn test_public_prefix_followed_by_segment_is_private() {
        assert!(!is_public("/campaigns/public/42"));
        assert!(!is_public("/auth/login/history"));
        assert!(!is_public("/auth/loginx"));
        assert!(!is_public("/categories/public-admin"));
    }

    #[test]
    fn test_later_occurrence_can_match() {
        // First occurrence is followed by '/', the second one ends the path.
        assert!(is_public("/proxy/auth/login/auth/login"));
    }

    #[test]
    fn test_private_paths() {
        assert!(!is_public("/wallet"));
        assert!(!is_public("/campaigns/my?page=0"));
        assert!(!is_public("/admin/users"));
    }

    #[test]
    fn test_critical_urls() {
        assert!(is_critical("http://localhost:8080/api/users/me"));
        assert!(is_critical("http://localhost:8080/api/auth/logout"));
        assert!(is_critical("https://app.example.com/api/users/me?fields=all"));
        assert!(!is_critical("http://localhost:8080/api/users/me/business-profiles"));
        assert!(!is_critical("http://localhost:8080/api/wallet"));
    }

    #[test]
    fn test_empty_fragment_never_matches() {
        assert!(!matches_endpoint("/anything", ""));
    }
}
