use crate::api::ApiError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">
                    {move || error.get().map(|e| e.message).unwrap_or_default()}
                </div>
                {move || {
                    error
                        .get()
                        .and_then(|e| {
                            let detail = e.detail?;
                            if detail == e.message {
                                return None;
                            }
                            Some(view! { <div class="text-xs opacity-75">{detail}</div> })
                        })
                        .map(|v| v.into_view())
                        .unwrap_or_else(|| ().into_view())
                }}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{messages, ApiErrorKind};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn inline_error_renders_message_and_detail() {
        let html = render_to_string(move || {
            let error = ApiError {
                kind: ApiErrorKind::Server,
                message: messages::SERVER_ERROR.into(),
                status: Some(503),
                detail: Some("maintenance window".into()),
            };
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains(messages::SERVER_ERROR));
        assert!(html.contains("maintenance window"));
    }

    #[test]
    fn inline_error_skips_detail_equal_to_message() {
        let html = render_to_string(move || {
            let error = ApiError {
                kind: ApiErrorKind::Unknown,
                message: "Version conflict".into(),
                status: Some(409),
                detail: Some("Version conflict".into()),
            };
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert_eq!(html.matches("Version conflict").count(), 1);
    }

    #[test]
    fn inline_error_renders_nothing_when_clear() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(!html.contains("bg-red-50"));
    }
}
