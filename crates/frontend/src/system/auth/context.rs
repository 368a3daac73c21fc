use leptos::prelude::*;

use super::events::AuthEvent;
use crate::shared::api_utils::ApiClient;

/// Reactive view of the session for the component tree.
#[derive(Clone, Copy, Debug)]
pub struct AuthState {
    pub authenticated: RwSignal<bool>,
}

/// Provides the [`ApiClient`] and [`AuthState`] to its children and keeps
/// `authenticated` in sync with the auth bus for as long as it is mounted.
#[component]
pub fn AuthProvider(api: ApiClient, children: ChildrenFn) -> impl IntoView {
    let session = api.session().clone();
    let authenticated = RwSignal::new(session.is_authenticated());

    let bus = session.bus().clone();
    let subscription = bus.subscribe(move |event| {
        authenticated.set(event == AuthEvent::Login);
    });
    on_cleanup(move || bus.unsubscribe(subscription));

    provide_context(api);
    provide_context(AuthState { authenticated });

    children()
}

pub fn use_auth() -> AuthState {
    use_context::<AuthState>().expect("AuthProvider not found in component tree")
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("AuthProvider not found in component tree")
}
