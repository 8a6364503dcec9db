#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{AppVersion, User};
    use crate::state::auth::AuthState;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use leptos::*;
    use serde_json::json;

    /// Unsigned token in the header.payload.signature shape with an `exp`
    /// offset from now. The signature segment is opaque filler since nothing
    /// in the app verifies it.
    pub fn token_with_expiry(offset_secs: i64) -> String {
        let now = chrono::Utc::now().timestamp();
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(
            json!({
                "userId": "u1",
                "email": "admin@example.com",
                "iat": now,
                "exp": now + offset_secs,
            })
            .to_string(),
        );
        format!("{}.{}.sig", header, payload)
    }

    pub fn sample_version() -> AppVersion {
        AppVersion {
            latest_version: "1.2.0".into(),
            min_supported_version: "1.0.0".into(),
            force_update: true,
            update_message: "Please update".into(),
        }
    }

    pub fn provide_auth(user: Option<User>) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let token = user.as_ref().map(|_| token_with_expiry(3600));
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated: user.is_some(),
            loading: false,
            user,
            token,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    pub fn admin_user() -> User {
        User {
            id: "u1".into(),
            email: "admin@example.com".into(),
        }
    }
}
