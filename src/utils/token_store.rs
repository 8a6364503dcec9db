//! Persisted session keys: the bearer token, the refresh token and the cached
//! user profile. All writes are best-effort; callers never see storage errors.

use crate::api::User;
use crate::utils::storage;

pub const TOKEN_KEY: &str = "token";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
pub const USER_KEY: &str = "user";

pub fn set_token(token: &str) {
    storage::write(TOKEN_KEY, token);
}

pub fn get_token() -> Option<String> {
    storage::read(TOKEN_KEY)
}

pub fn set_refresh_token(token: &str) {
    storage::write(REFRESH_TOKEN_KEY, token);
}

pub fn get_refresh_token() -> Option<String> {
    storage::read(REFRESH_TOKEN_KEY)
}

pub fn set_user(user: &User) {
    match serde_json::to_string(user) {
        Ok(json) => storage::write(USER_KEY, &json),
        Err(err) => log::warn!("failed to serialize cached user: {}", err),
    }
}

pub fn get_user() -> Option<User> {
    let json = storage::read(USER_KEY)?;
    serde_json::from_str(&json).ok()
}

/// Clears the token and every auxiliary session key together.
pub fn remove_token() {
    storage::delete(TOKEN_KEY);
    storage::delete(REFRESH_TOKEN_KEY);
    storage::delete(USER_KEY);
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn remove_token_clears_all_session_keys() {
        set_token("a.b.c");
        set_refresh_token("refresh");
        set_user(&User {
            id: "u1".into(),
            email: "admin@example.com".into(),
        });

        remove_token();

        assert_eq!(get_token(), None);
        assert_eq!(get_refresh_token(), None);
        assert!(get_user().is_none());
    }

    #[test]
    fn get_token_returns_last_stored_value() {
        set_token("first");
        set_token("second");
        assert_eq!(get_token().as_deref(), Some("second"));
        remove_token();
    }

    #[test]
    fn cached_user_round_trips_through_json() {
        let user = User {
            id: "u2".into(),
            email: "ops@example.com".into(),
        };
        set_user(&user);
        assert_eq!(get_user(), Some(user));
        remove_token();
    }
}
