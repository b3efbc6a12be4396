use std::fmt;

/// Identity asserted by a verified token.
///
/// The integer credential id the issuer put into the `sub` claim. It exists
/// only for the duration of a request and is the sole trust anchor resource
/// services use for ownership decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity(pub i64);

impl Identity {
    /// Get the raw credential id.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for Identity {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
