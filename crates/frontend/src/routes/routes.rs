use crate::layout::global_context::use_global_context;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    // Runs once when the shell is created.
    use_global_context().init_router_integration();

    view! { <Shell /> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show when=move || auth.authenticated.get() fallback=|| view! { <LoginPage /> }>
            <MainLayout />
        </Show>
    }
}
