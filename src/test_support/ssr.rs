//! Host-side render harness. Components are rendered to static HTML under a
//! throwaway reactive runtime so tests can assert against the markup.

use leptos::*;

/// Runs `f` inside a fresh reactive runtime and disposes it afterwards, so
/// signals created by one test never leak into another.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let value = f();
    runtime.dispose();
    value
}

/// Renders a view to its HTML string. Resource loading is suppressed for the
/// duration so panels render their synchronous shell without any fetches.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}
