use super::repository::VersionRepository;
use crate::api::{messages, ApiClient, ApiError, ApiErrorKind, AppVersion};
use leptos::*;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
const SUCCESS_MESSAGE_MS: u32 = 3_000;

/// Editable copy of the version record, one signal per field.
#[derive(Clone, Copy)]
pub struct VersionFormState {
    pub latest_version: RwSignal<String>,
    pub min_supported_version: RwSignal<String>,
    pub force_update: RwSignal<bool>,
    pub update_message: RwSignal<String>,
}

impl VersionFormState {
    pub fn new() -> Self {
        Self {
            latest_version: create_rw_signal(String::new()),
            min_supported_version: create_rw_signal(String::new()),
            force_update: create_rw_signal(false),
            update_message: create_rw_signal(String::new()),
        }
    }

    pub fn apply(&self, record: &AppVersion) {
        self.latest_version.set(record.latest_version.clone());
        self.min_supported_version
            .set(record.min_supported_version.clone());
        self.force_update.set(record.force_update);
        self.update_message.set(record.update_message.clone());
    }

    /// Required version strings are validated at this boundary; everything
    /// else passes through as typed.
    pub fn to_payload(&self) -> Result<AppVersion, String> {
        let latest = self.latest_version.get_untracked().trim().to_string();
        if latest.is_empty() {
            return Err("Latest version is required".into());
        }
        let min_supported = self
            .min_supported_version
            .get_untracked()
            .trim()
            .to_string();
        if min_supported.is_empty() {
            return Err("Min supported version is required".into());
        }
        Ok(AppVersion {
            latest_version: latest,
            min_supported_version: min_supported,
            force_update: self.force_update.get_untracked(),
            update_message: self.update_message.get_untracked(),
        })
    }
}

#[derive(Clone)]
pub struct DashboardViewModel {
    pub form: VersionFormState,
    pub version_resource: Resource<u32, Result<AppVersion, ApiError>>,
    pub reload: RwSignal<u32>,
    pub save_action: Action<AppVersion, Result<AppVersion, ApiError>>,
    pub success_message: RwSignal<Option<String>>,
    pub form_error: RwSignal<Option<String>>,
    pub error: RwSignal<Option<ApiError>>,
}

impl DashboardViewModel {
    /// Schedules another fetch of the version record.
    pub fn retry(&self) {
        self.reload.update(|n| *n += 1);
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = VersionRepository::new_with_client(Rc::new(api));

    let form = VersionFormState::new();
    let reload = create_rw_signal(0u32);
    let success_message = create_rw_signal(None::<String>);
    let form_error = create_rw_signal(None::<String>);
    let error = create_rw_signal(None::<ApiError>);

    let repo_fetch = repo.clone();
    let version_resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo_fetch.clone();
            async move { repo.fetch().await }
        },
    );

    let save_action = create_action(move |payload: &AppVersion| {
        let repo = repo.clone();
        let payload = payload.clone();
        async move { repo.save(&payload).await }
    });

    create_effect(move |_| {
        if let Some(result) = version_resource.get() {
            match result {
                Ok(record) => {
                    form.apply(&record);
                    error.set(None);
                }
                Err(err) => {
                    log::error!("failed to fetch version config: {}", err);
                    error.set(Some(err));
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(record) => {
                    form.apply(&record);
                    error.set(None);
                    success_message.set(Some(messages::UPDATE_SUCCESS.into()));
                    clear_success_later(success_message);
                }
                Err(err) => {
                    log::error!("{}: {}", messages::UPDATE_FAILED, err);
                    success_message.set(None);
                    if matches!(
                        err.kind,
                        ApiErrorKind::Unauthorized | ApiErrorKind::Forbidden
                    ) {
                        redirect_to_login();
                    }
                    error.set(Some(err));
                }
            }
        }
    });

    DashboardViewModel {
        form,
        version_resource,
        reload,
        save_action,
        success_message,
        form_error,
        error,
    }
}

#[cfg(target_arch = "wasm32")]
fn clear_success_later(message: RwSignal<Option<String>>) {
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(SUCCESS_MESSAGE_MS).await;
        message.set(None);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn clear_success_later(_message: RwSignal<Option<String>>) {}

#[cfg(target_arch = "wasm32")]
fn redirect_to_login() {
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_href(crate::router::ROUTE_LOGIN);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn redirect_to_login() {}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::helpers::sample_version;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn retry_schedules_another_fetch() {
        leptos_reactive::suppress_resource_load(true);
        with_runtime(|| {
            let vm = use_dashboard_view_model();
            assert_eq!(vm.reload.get_untracked(), 0);
            vm.retry();
            vm.retry();
            assert_eq!(vm.reload.get_untracked(), 2);
        });
        leptos_reactive::suppress_resource_load(false);
    }

    #[test]
    fn form_round_trips_an_applied_record() {
        with_runtime(|| {
            let form = VersionFormState::new();
            form.apply(&sample_version());
            assert_eq!(form.to_payload(), Ok(sample_version()));
        });
    }

    #[test]
    fn form_requires_both_version_strings() {
        with_runtime(|| {
            let form = VersionFormState::new();
            assert_eq!(form.to_payload(), Err("Latest version is required".into()));

            form.latest_version.set("1.2.0".into());
            assert_eq!(
                form.to_payload(),
                Err("Min supported version is required".into())
            );

            form.min_supported_version.set("  ".into());
            assert_eq!(
                form.to_payload(),
                Err("Min supported version is required".into())
            );
        });
    }

    #[test]
    fn form_trims_version_strings_in_the_payload() {
        with_runtime(|| {
            let form = VersionFormState::new();
            form.latest_version.set(" 1.2.0 ".into());
            form.min_supported_version.set("1.0.0".into());
            let payload = form.to_payload().unwrap();
            assert_eq!(payload.latest_version, "1.2.0");
            assert!(!payload.force_update);
            assert_eq!(payload.update_message, "");
        });
    }
}
