//! Bearer token inspection. Claims are decoded without any signature check:
//! this is a UX hint only, authorization is enforced server-side.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::utils::token_store;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub email: String,
    #[serde(default)]
    pub iat: i64,
    pub exp: i64,
}

/// Decodes the claims segment of a token. Returns `None` for anything that is
/// not a three-segment base64url JSON payload.
pub fn decode(token: &str) -> Option<Claims> {
    let mut parts = token.split('.');
    parts.next()?;
    let payload = parts.next()?;
    let decoded = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&decoded).ok()
}

fn now_secs() -> i64 {
    Utc::now().timestamp()
}

/// True when the token cannot be decoded or its expiry is at or before now.
pub fn is_expired(token: &str) -> bool {
    match decode(token) {
        Some(claims) => claims.exp <= now_secs(),
        None => true,
    }
}

/// True iff a token is present in the store and not expired.
pub fn is_valid() -> bool {
    token_store::get_token()
        .map(|token| !is_expired(&token))
        .unwrap_or(false)
}

/// Seconds until the token expires, floored at zero.
pub fn time_until_expiry(token: &str) -> i64 {
    decode(token)
        .map(|claims| (claims.exp - now_secs()).max(0))
        .unwrap_or(0)
}

/// Whether a proactive refresh is due: the token still has life left, but
/// less than `threshold_secs`. An already-expired token is handled by the
/// expiry path and never triggers a refresh.
pub fn should_refresh(token: &str, threshold_secs: i64) -> bool {
    let remaining = time_until_expiry(token);
    remaining > 0 && remaining < threshold_secs
}
