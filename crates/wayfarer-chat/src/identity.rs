//! Session identity: create once, reuse forever.

use tracing::{debug, info, warn};
use wayfarer_common::SessionToken;

use crate::storage::KeyValueStore;

pub const DEFAULT_TOKEN_KEY: &str = "chatSessionId";

/// Return the token stored under `key`, minting and storing one if absent.
///
/// Never fails. An unreadable store counts as empty; if the new token
/// cannot be written it is still returned and lives for this process only.
/// A blank stored value is treated as absent.
pub fn obtain_token(store: &dyn KeyValueStore, key: &str) -> SessionToken {
    match store.get(key) {
        Ok(Some(existing)) if !existing.trim().is_empty() => {
            debug!(session = %existing, "reusing stored session token");
            return SessionToken::from_stored(existing);
        }
        Ok(_) => {}
        Err(e) => warn!(error = %e, "session token store unreadable, issuing a new token"),
    }

    let token = SessionToken::generate();
    if let Err(e) = store.set(key, token.as_str()) {
        warn!(error = %e, session = %token, "failed to persist session token");
    }
    info!(session = %token, "issued new session token");
    token
}
