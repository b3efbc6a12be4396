use bcrypt::DEFAULT_COST;

use super::errors::PasswordError;

/// bcrypt operates on at most 72 bytes of input.
const MAX_PASSWORD_BYTES: usize = 72;

/// Password hashing implementation.
///
/// Wraps bcrypt with a per-call random salt. The stored hash is
/// self-describing (algorithm id, cost, salt, digest), so two hashes of the
/// same plaintext differ and no separate salt storage is needed.
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a password hasher with the default cost factor.
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Create a password hasher with an explicit cost factor.
    ///
    /// Lower costs are useful in tests; production should stay at the
    /// default or above.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password for storage.
    ///
    /// The plaintext is truncated to the bcrypt input limit before hashing,
    /// identically to [`verify`](Self::verify), so registration and login
    /// agree for any input length.
    ///
    /// # Errors
    /// * `HashingFailed` - bcrypt rejected the cost factor or salt generation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        bcrypt::hash(truncate_password(password), self.cost)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a plaintext password against a stored hash.
    ///
    /// Applies the same truncation as [`hash`](Self::hash). A malformed
    /// stored hash verifies as `false` rather than erroring, so a corrupt
    /// record behaves like a wrong password.
    pub fn verify(&self, password: &str, stored_hash: &str) -> bool {
        bcrypt::verify(truncate_password(password), stored_hash).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Truncate a password to the bcrypt byte limit.
///
/// Splits on the byte boundary, then backs off to the previous char boundary
/// so a partial trailing UTF-8 sequence is dropped instead of panicking.
fn truncate_password(password: &str) -> &str {
    if password.len() <= MAX_PASSWORD_BYTES {
        return password;
    }
    let mut end = MAX_PASSWORD_BYTES;
    while !password.is_char_boundary(end) {
        end -= 1;
    }
    &password[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    // Keep the cost low so the suite stays fast.
    fn hasher() -> PasswordHasher {
        PasswordHasher::with_cost(4)
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = hasher();
        let hash = hasher.hash("my_secure_password").expect("Failed to hash");

        assert!(hasher.verify("my_secure_password", &hash));
        assert!(!hasher.verify("wrong_password", &hash));
    }

    #[test]
    fn test_hashes_of_same_password_differ() {
        let hasher = hasher();
        let first = hasher.hash("same_password").unwrap();
        let second = hasher.hash("same_password").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_malformed_hash_is_false() {
        let hasher = hasher();
        assert!(!hasher.verify("password", "not_a_bcrypt_hash"));
        assert!(!hasher.verify("password", ""));
    }

    #[test]
    fn test_long_passwords_truncate_consistently() {
        let hasher = hasher();
        let registered = "A".repeat(80);
        let hash = hasher.hash(&registered).unwrap();

        // Anything agreeing on the first 72 bytes verifies.
        let login = format!("{}ZZZZZZZZ", "A".repeat(72));
        assert!(hasher.verify(&registered, &hash));
        assert!(hasher.verify(&login, &hash));
        assert!(hasher.verify(&"A".repeat(72), &hash));

        // Diverging inside the first 72 bytes does not.
        let mut diverging = "A".repeat(72);
        diverging.replace_range(70..71, "B");
        assert!(!hasher.verify(&diverging, &hash));
    }

    #[test]
    fn test_truncation_drops_partial_multibyte_char() {
        // 70 ASCII bytes followed by a 3-byte char straddling the limit.
        let password = format!("{}日本", "x".repeat(70));
        assert!(password.len() > MAX_PASSWORD_BYTES);

        let truncated = truncate_password(&password);
        assert!(truncated.len() <= MAX_PASSWORD_BYTES);
        assert_eq!(truncated, "x".repeat(70));

        // Hash and verify agree on the truncated form.
        let hasher = hasher();
        let hash = hasher.hash(&password).unwrap();
        assert!(hasher.verify(&password, &hash));
    }

    #[test]
    fn test_truncation_noop_for_short_passwords() {
        assert_eq!(truncate_password("short"), "short");
        let exactly_72 = "y".repeat(72);
        assert_eq!(truncate_password(&exactly_72), exactly_72);
    }
}
