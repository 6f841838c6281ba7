use std::borrow::Cow;

#[waymark_derive::waymark_error]
pub enum ResourceGuardError {
    #[error("Resource validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Utilities for safe resource handling and ID validation.
#[derive(Debug)]
pub struct ResourceGuard;

impl ResourceGuard {
    /// Validates a `SurrealDB` ID string against a specific table.
    ///
    /// Prevents "ID Spoofing" where a caller provides an ID from a different
    /// table (e.g., providing an 'admin:...' ID to a 'category' endpoint).
    ///
    /// # Arguments
    /// * `id` - The ID to verify (e.g., "category:123" or just "123")
    /// * `expected_table` - The table the ID must belong to (e.g., "category")
    ///
    /// # Errors
    /// Returns an error if the ID table does not match the expected table.
    pub fn verify<I, T>(id: I, expected_table: T) -> Result<String, ResourceGuardError>
    where
        I: AsRef<str>,
        T: AsRef<str>,
    {
        let id_ref = id.as_ref();
        let table_ref = expected_table.as_ref();

        if let Some((table, _)) = id_ref.split_once(':') {
            if table != table_ref {
                return Err(ResourceGuardError::Validation {
                    message: format!("Expected '{table_ref}', got '{table}'").into(),
                    context: Some("ID table mismatch".into()),
                });
            }
            // Return the full validated ID
            Ok(id_ref.to_owned())
        } else {
            // Automatically prefix if only the random part was provided
            Ok(format!("{table_ref}:{id_ref}"))
        }
    }

    /// Strips the table prefix from a full record ID, if present.
    #[must_use]
    pub fn key(id: &str) -> &str {
        id.split_once(':').map_or(id, |(_, key)| key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_verification() {
        // Correct table
        assert_eq!(ResourceGuard::verify("category:123", "category").unwrap(), "category:123");

        // Auto-prefix
        assert_eq!(ResourceGuard::verify("123", "category").unwrap(), "category:123");

        // Malicious mismatch
        let err = ResourceGuard::verify("admin:root", "category");
        assert!(err.is_err());
    }

    #[test]
    fn test_key_extraction() {
        assert_eq!(ResourceGuard::key("website:abc"), "abc");
        assert_eq!(ResourceGuard::key("abc"), "abc");
    }
}
