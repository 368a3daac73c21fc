pub mod global_context;
pub mod header;
pub mod screen;

use global_context::use_global_context;
use header::Header;
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |  nav buttons, Obras ▾      / title  exit |
/// +------------------------------------------+
/// |              active screen               |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div class="app-layout">
            <Header />
            <main data-zone="center" class="app-main">
                // Re-rendered only when the active screen changes; each screen
                // owns its list state.
                {move || ctx.active.get().render()}
            </main>
        </div>
    }
}
