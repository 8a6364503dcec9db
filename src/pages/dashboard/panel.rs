use super::view_model::{use_dashboard_view_model, VersionFormState};
use crate::components::{
    error::InlineErrorMessage,
    layout::{Header, LoadingSpinner, SuccessMessage},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let form = vm.form;
    let save_action = vm.save_action;
    let pending = save_action.pending();
    let success_message = vm.success_message;
    let form_error = vm.form_error;
    let error = vm.error;
    let version_resource = vm.version_resource;
    let vm_for_retry = store_value(vm.clone());

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match form.to_payload() {
            Ok(payload) => {
                form_error.set(None);
                save_action.dispatch(payload);
            }
            Err(msg) => form_error.set(Some(msg)),
        }
    });

    view! {
        <div class="min-h-screen bg-gray-50">
            <Header />
            <main class="max-w-4xl mx-auto p-8">
                <div class="bg-white rounded-lg shadow p-6">
                    {move || {
                        success_message
                            .get()
                            .map(|msg| view! { <SuccessMessage message=msg /> })
                    }}
                    <InlineErrorMessage error={error.into()} />
                    {move || {
                        form_error
                            .get()
                            .map(|msg| view! { <div class="text-red-500 text-sm mb-4">{msg}</div> })
                    }}
                    <Suspense fallback=move || view! { <LoadingSpinner /> }>
                        {move || {
                            let vm = vm_for_retry.get_value();
                            version_resource.get().map(move |result| match result {
                                Ok(_) => view! {
                                    <VersionForm form=form pending=pending.into() on_submit=on_submit />
                                }
                                .into_view(),
                                Err(_) => view! {
                                    <button
                                        on:click=move |_| vm.retry()
                                        class="px-4 py-2 bg-indigo-600 text-white rounded-md hover:bg-indigo-700"
                                    >
                                        "Retry"
                                    </button>
                                }
                                .into_view(),
                            })
                        }}
                    </Suspense>
                </div>
            </main>
        </div>
    }
}

#[component]
pub fn VersionForm(
    form: VersionFormState,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <form on:submit=move |ev| on_submit.call(ev) class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div>
                    <label class="block text-sm font-medium text-gray-700">"Latest Version"</label>
                    <input
                        type="text"
                        prop:value=form.latest_version
                        on:input=move |ev| form.latest_version.set(event_target_value(&ev))
                        placeholder="e.g. 1.2.0"
                        class="mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-indigo-500 focus:border-indigo-500"
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700">"Min Supported Version"</label>
                    <input
                        type="text"
                        prop:value=form.min_supported_version
                        on:input=move |ev| form.min_supported_version.set(event_target_value(&ev))
                        placeholder="e.g. 1.0.0"
                        class="mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-indigo-500 focus:border-indigo-500"
                    />
                </div>
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-700">"Update Message"</label>
                <textarea
                    prop:value=form.update_message
                    on:input=move |ev| form.update_message.set(event_target_value(&ev))
                    rows=3
                    class="mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-indigo-500 focus:border-indigo-500"
                ></textarea>
            </div>
            <div class="flex items-center">
                <input
                    type="checkbox"
                    id="forceUpdate"
                    prop:checked=form.force_update
                    on:change=move |ev| form.force_update.set(event_target_checked(&ev))
                    class="h-4 w-4 text-indigo-600 focus:ring-indigo-500 border-gray-300 rounded"
                />
                <label for="forceUpdate" class="ml-2 block text-sm text-gray-900">
                    "Force Update"
                </label>
            </div>
            <div class="flex justify-end">
                <button
                    type="submit"
                    class="inline-flex justify-center py-2 px-4 border border-transparent shadow-sm text-sm font-medium rounded-md text-white bg-indigo-600 hover:bg-indigo-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-indigo-500 disabled:opacity-50"
                    disabled={move || pending.get()}
                >
                    "Save Changes"
                </button>
            </div>
        </form>
    }
}
