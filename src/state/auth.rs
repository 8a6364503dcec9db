//! Session controller: the single writer of authentication state. State is
//! provided through context and mutated only by the operations in this
//! module, so every transition runs to completion before the next is visible.

use leptos::*;

use crate::api::{ApiClient, ApiError, LoginCredentials, User};
use crate::config;
use crate::utils::{token, token_store};

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[cfg(target_arch = "wasm32")]
const REFRESH_CHECK_INTERVAL_MS: u32 = 60_000;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub loading: bool,
    pub user: Option<User>,
    pub token: Option<String>,
}

fn user_from_claims(token_str: &str) -> Option<User> {
    token::decode(token_str).map(|claims| User {
        id: claims.user_id,
        email: claims.email,
    })
}

/// Seeds session state from the token store. Performs no network I/O; the
/// return value tells the provider whether a proactive refresh is due.
pub fn initialize_session(set_auth: WriteSignal<AuthState>) -> bool {
    match token_store::get_token() {
        Some(stored) if !token::is_expired(&stored) => {
            let user = user_from_claims(&stored).or_else(token_store::get_user);
            let refresh_due =
                token::should_refresh(&stored, config::token_refresh_threshold_secs());
            set_auth.set(AuthState {
                is_authenticated: true,
                loading: false,
                user,
                token: Some(stored),
            });
            refresh_due
        }
        _ => {
            token_store::remove_token();
            set_auth.set(AuthState::default());
            false
        }
    }
}

pub async fn login_request(
    credentials: LoginCredentials,
    api: &ApiClient,
    set_auth: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth.update(|state| state.loading = true);

    match api.login(&credentials).await {
        Ok(response) => {
            token_store::set_token(&response.token);
            if let Some(refresh) = &response.refresh_token {
                token_store::set_refresh_token(refresh);
            }
            let user = user_from_claims(&response.token).or(response.user);
            if let Some(user) = &user {
                token_store::set_user(user);
            }
            set_auth.set(AuthState {
                is_authenticated: true,
                loading: false,
                user,
                token: Some(response.token),
            });
            Ok(())
        }
        Err(err) => {
            set_auth.set(AuthState::default());
            Err(ApiError::login_failed(err))
        }
    }
}

/// Cannot fail from the caller's perspective: the backend call is advisory,
/// local state is always cleared.
pub async fn logout(api: &ApiClient, set_auth: WriteSignal<AuthState>) {
    if let Err(err) = api.logout().await {
        log::warn!("logout call failed: {}", err);
    }
    token_store::remove_token();
    set_auth.set(AuthState::default());
}

/// Exchanges the stored credential for a fresh one. Only the `token` field of
/// the session changes on success; any failure degrades to a clean logout.
pub async fn refresh(api: &ApiClient, set_auth: WriteSignal<AuthState>) -> Result<(), ApiError> {
    let Some(current) = token_store::get_token() else {
        return Err(ApiError::no_token_to_refresh());
    };

    match api.refresh_token(&current).await {
        Ok(response) => {
            token_store::set_token(&response.token);
            if let Some(refresh_token) = &response.refresh_token {
                token_store::set_refresh_token(refresh_token);
            }
            set_auth.update(|state| state.token = Some(response.token.clone()));
            Ok(())
        }
        Err(err) => {
            log::warn!("token refresh failed: {}", err);
            logout(api, set_auth).await;
            Err(err)
        }
    }
}

fn create_auth_context(api: ApiClient) -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState {
        loading: true,
        ..AuthState::default()
    });

    if initialize_session(set_auth_state) {
        let api = api.clone();
        spawn_local(async move {
            if let Err(err) = refresh(&api, set_auth_state).await {
                log::warn!("startup token refresh failed: {}", err);
            }
        });
    }

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let ctx = create_auth_context(api.clone());
    provide_context::<AuthContext>(ctx);
    #[cfg(target_arch = "wasm32")]
    arm_refresh_loop(ctx.0, ctx.1, api);
    view! { <>{children()}</> }
}

/// Recurring refresh check, re-armed on every session transition. Dropping
/// the previous `Interval` cancels it, so at most one loop ever runs.
#[cfg(target_arch = "wasm32")]
fn arm_refresh_loop(auth: ReadSignal<AuthState>, set_auth: WriteSignal<AuthState>, api: ApiClient) {
    use gloo_timers::callback::Interval;

    let handle: StoredValue<Option<Interval>> = store_value(None);
    create_effect(move |_| {
        let state = auth.get();
        handle.update_value(|slot| {
            slot.take();
        });
        if !state.is_authenticated || state.token.is_none() {
            return;
        }
        let api = api.clone();
        let interval = Interval::new(REFRESH_CHECK_INTERVAL_MS, move || {
            let due = token_store::get_token()
                .map(|stored| {
                    token::should_refresh(&stored, config::token_refresh_threshold_secs())
                })
                .unwrap_or(false);
            if !due {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                if let Err(err) = refresh(&api, set_auth).await {
                    log::warn!("background token refresh failed: {}", err);
                }
            });
        });
        handle.set_value(Some(interval));
    });
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub fn use_login_action() -> Action<LoginCredentials, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |credentials: &LoginCredentials| {
        let payload = credentials.clone();
        let api = api.clone();
        async move { login_request(payload, &api, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), ()> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |_: &()| {
        let api = api.clone();
        async move { logout(&api, set_auth).await }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(!snapshot.loading);
            assert!(snapshot.user.is_none());
            assert!(snapshot.token.is_none());
        });
    }
}
