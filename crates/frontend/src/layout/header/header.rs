use leptos::prelude::*;

use super::NavDropdown;
use crate::layout::global_context::use_global_context;
use crate::layout::screen::Screen;
use crate::shared::icons::icon;
use crate::system::auth::context::use_api;

#[component]
fn NavButton(screen: Screen, label: &'static str) -> impl IntoView {
    let ctx = use_global_context();
    view! {
        <button
            class="nav-item"
            class:active=move || ctx.active.get() == screen
            on:click=move |_| ctx.navigate(screen)
        >
            {label}
        </button>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_global_context();
    let api = use_api();

    // Ending the session publishes `Logout`, which brings the login page back.
    let logout = move |_| {
        log::info!("logout requested");
        api.session().end();
    };

    view! {
        <header data-zone="header" class="header">
            <nav class="nav-menu">
                <NavButton screen=Screen::Principal label="Principal" />
                <NavButton screen=Screen::Estoques label="Estoques" />
                <NavButton screen=Screen::Importacao label="Importação" />
                <NavButton screen=Screen::Compras label="Compras" />
                <NavDropdown
                    label="Obras ▾"
                    primary=Screen::Obras
                    items=vec![
                        (Screen::ListarObras, "Listar Obras"),
                        (Screen::ListarObrasFuturas, "Listar Obras Futuras"),
                        (Screen::Obras, "Estoque Obras"),
                        (Screen::ObrasFuturas, "Estoque Obras Futuras"),
                    ]
                />
            </nav>

            <div class="header__actions">
                <div class="breadcrumb">
                    <button
                        class="button button--ghost"
                        title="Principal"
                        on:click=move |_| ctx.navigate(Screen::Principal)
                    >
                        {icon("home")}
                    </button>
                    <span>{move || format!(" / {}", ctx.active.get().title())}</span>
                </div>
                <button class="button button--ghost" title="Sair" on:click=logout>
                    {icon("log-out")}
                </button>
            </div>
        </header>
    }
}
