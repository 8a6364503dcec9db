use leptos::*;
use leptos_router::*;

use crate::{
    components::guard::RequireAuth,
    pages::{dashboard::DashboardPage, login::LoginPage},
    state::auth::AuthProvider,
};

pub const ROUTE_LOGIN: &str = "/";
pub const ROUTE_DASHBOARD: &str = "/dashboard";

pub const ROUTE_PATHS: &[&str] = &[ROUTE_LOGIN, ROUTE_DASHBOARD];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[ROUTE_DASHBOARD];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path=ROUTE_LOGIN view=LoginPage/>
                    <Route path=ROUTE_DASHBOARD view=ProtectedDashboard/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}
