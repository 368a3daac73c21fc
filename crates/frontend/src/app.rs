use std::sync::Arc;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::ApiClient;
use crate::system::auth::context::AuthProvider;
use crate::system::auth::events::AuthBus;
use crate::system::auth::session::Session;
use crate::system::auth::storage::LocalStorageTokens;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let session = Session::new(Arc::new(LocalStorageTokens), AuthBus::new());
    let api = ApiClient::from_config(session);

    provide_context(AppGlobalContext::new());

    view! {
        <AuthProvider api=api>
            <AppRoutes />
        </AuthProvider>
    }
}
