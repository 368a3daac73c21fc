use leptos::prelude::*;

use crate::layout::global_context::use_global_context;
use crate::layout::screen::Screen;

/// Header button with a hover menu of screens. Clicking the button itself
/// opens `primary`.
#[component]
pub fn NavDropdown(
    label: &'static str,
    primary: Screen,
    items: Vec<(Screen, &'static str)>,
) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let ctx = use_global_context();
    let entries = items.clone();
    let in_group = move || items.iter().any(|(s, _)| *s == ctx.active.get());

    view! {
        <div
            class="nav-item dropdown"
            on:mouseenter=move |_| set_is_open.set(true)
            on:mouseleave=move |_| set_is_open.set(false)
        >
            <button
                class="nav-item"
                class:active=in_group
                on:click=move |_| {
                    ctx.navigate(primary);
                    set_is_open.set(false);
                }
            >
                {label}
            </button>

            <Show when=move || is_open.get()>
                <div class="dropdown-menu">
                    {entries
                        .iter()
                        .map(|&(screen, title)| {
                            view! {
                                <button
                                    class="dropdown-item"
                                    on:click=move |_| {
                                        ctx.navigate(screen);
                                        set_is_open.set(false);
                                    }
                                >
                                    {title}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
