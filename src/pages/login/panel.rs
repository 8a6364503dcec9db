use crate::{api::LoginCredentials, pages::login::utils, router, state::auth};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let login_action = auth::use_login_action();
    let pending = login_action.pending();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => {
                    set_error.set(None);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(router::ROUTE_DASHBOARD);
                    }
                }
                Err(err) => set_error.set(Some(err.message)),
            }
        }
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();

        if let Err(msg) = utils::validate_credentials(&email_value, &password_value) {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);

        login_action.dispatch(LoginCredentials {
            email: email_value.trim().to_string(),
            password: password_value,
        });
    };

    view! {
        <div class="flex items-center justify-center min-h-screen bg-gray-100">
            <div class="w-full max-w-md p-8 space-y-6 bg-white rounded shadow-md">
                <h2 class="text-2xl font-bold text-center text-gray-900">"Admin Login"</h2>
                {move || {
                    error
                        .get()
                        .map(|msg| view! { <div class="text-red-500 text-sm text-center">{msg}</div> })
                }}
                <form on:submit=handle_submit class="space-y-4">
                    <div>
                        <label class="block text-sm font-medium text-gray-700">"Email"</label>
                        <input
                            type="email"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            class="w-full px-3 py-2 mt-1 border rounded-md focus:ring-indigo-500 focus:border-indigo-500"
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700">"Password"</label>
                        <input
                            type="password"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full px-3 py-2 mt-1 border rounded-md focus:ring-indigo-500 focus:border-indigo-500"
                        />
                    </div>
                    <button
                        type="submit"
                        class="w-full py-2 px-4 text-white bg-indigo-600 rounded-md hover:bg-indigo-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-indigo-500 disabled:opacity-50"
                        disabled={move || pending.get()}
                    >
                        "Sign In"
                    </button>
                </form>
            </div>
        </div>
    }
}
