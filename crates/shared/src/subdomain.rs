//! Subdomain label validation
//!
//! Every tenant site is addressed by a unique subdomain label under the
//! platform's base domain. Labels are validated on the way in and checked
//! against the reserved list before any lookup touches the database.

use crate::error::PlatformError;

/// Subdomains that can never be claimed by a tenant site
pub const RESERVED_SUBDOMAINS: &[&str] = &[
    "app",
    "www",
    "api",
    "admin",
    "dashboard",
    "mail",
    "static",
    "assets",
    "cdn",
    "status",
    "docs",
    "help",
    "support",
    "blog",
    "staging",
    "dev",
];

/// Minimum length of a subdomain label
pub const MIN_SUBDOMAIN_LEN: usize = 3;

/// Maximum length of a subdomain label (DNS label limit)
pub const MAX_SUBDOMAIN_LEN: usize = 63;

pub fn is_reserved_subdomain(subdomain: &str) -> bool {
    RESERVED_SUBDOMAINS.contains(&subdomain)
}

/// Validate a subdomain label's format.
///
/// Accepts lowercase letters, digits, and interior hyphens. Reserved labels
/// pass format validation; callers that care check [`is_reserved_subdomain`]
/// separately.
pub fn validate_subdomain(subdomain: &str) -> Result<(), PlatformError> {
    if subdomain.len() < MIN_SUBDOMAIN_LEN {
        return Err(PlatformError::Validation(format!(
            "Subdomain must be at least {MIN_SUBDOMAIN_LEN} characters"
        )));
    }

    if subdomain.len() > MAX_SUBDOMAIN_LEN {
        return Err(PlatformError::Validation(format!(
            "Subdomain must be at most {MAX_SUBDOMAIN_LEN} characters"
        )));
    }

    if !subdomain
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(PlatformError::Validation(
            "Subdomain can only contain lowercase letters, numbers, and hyphens".to_string(),
        ));
    }

    if subdomain.starts_with('-') || subdomain.ends_with('-') {
        return Err(PlatformError::Validation(
            "Subdomain cannot start or end with a hyphen".to_string(),
        ));
    }

    if subdomain.contains("--") {
        return Err(PlatformError::Validation(
            "Subdomain cannot contain consecutive hyphens".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_subdomains() {
        assert!(validate_subdomain("tenant1").is_ok());
        assert!(validate_subdomain("my-blog").is_ok());
        assert!(validate_subdomain("abc").is_ok());
        assert!(validate_subdomain("a2c-4e").is_ok());
    }

    #[test]
    fn test_length_bounds() {
        assert!(validate_subdomain("ab").is_err());
        assert!(validate_subdomain(&"a".repeat(63)).is_ok());
        assert!(validate_subdomain(&"a".repeat(64)).is_err());
    }

    #[test]
    fn test_invalid_characters() {
        assert!(validate_subdomain("MyBlog").is_err());
        assert!(validate_subdomain("my_blog").is_err());
        assert!(validate_subdomain("my.blog").is_err());
        assert!(validate_subdomain("bl og").is_err());
    }

    #[test]
    fn test_hyphen_placement() {
        assert!(validate_subdomain("-blog").is_err());
        assert!(validate_subdomain("blog-").is_err());
        assert!(validate_subdomain("my--blog").is_err());
    }

    #[test]
    fn test_reserved_subdomains() {
        assert!(is_reserved_subdomain("app"));
        assert!(is_reserved_subdomain("www"));
        assert!(is_reserved_subdomain("admin"));
        assert!(!is_reserved_subdomain("tenant1"));
        // Reserved labels are still well-formed
        assert!(validate_subdomain("app").is_ok());
    }
}
