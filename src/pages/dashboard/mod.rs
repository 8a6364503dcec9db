use leptos::*;

pub mod repository;
pub mod view_model;

mod panel;

pub use panel::DashboardPanel;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! { <DashboardPanel /> }
}
