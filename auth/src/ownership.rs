use thiserror::Error;

use crate::identity::Identity;

/// The caller is authenticated but does not own the resource.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Caller does not own this resource")]
pub struct Forbidden;

/// Check that the authenticated caller owns a resource.
///
/// Applied before every read, update or delete of an owned resource. On
/// creation the owner is always set to the caller's identity instead, never
/// taken from client input, so this check is unnecessary there.
///
/// Whether a `Forbidden` result is surfaced as 403 or degraded to a 404 is a
/// per-endpoint policy: id-addressed lookups report not-found to avoid
/// confirming existence, path-addressed "for user X" endpoints report
/// forbidden outright.
pub fn authorize(caller: Identity, owner: Identity) -> Result<(), Forbidden> {
    if caller == owner {
        Ok(())
    } else {
        Err(Forbidden)
    }
}
