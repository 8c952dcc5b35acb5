/// Cleartext password comparison.
///
/// Stored secrets are plain strings and are compared by exact equality.
/// There is no hashing or salting; stored passwords are readable by anyone
/// with access to the user records.
#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordMatcher;

impl PasswordMatcher {
    pub fn new() -> Self {
        Self
    }

    /// True if `supplied` is byte-for-byte equal to `stored`.
    pub fn matches(&self, supplied: &str, stored: &str) -> bool {
        supplied == stored
    }
}
