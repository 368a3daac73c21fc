use leptos::prelude::*;
use thaw::*;

use crate::shared::list::pagination::PageInfo;

/// "Mostrando X a Y de Z itens", previous/next and a window of page buttons.
#[component]
pub fn PaginationControls(
    #[prop(into)] info: Signal<PageInfo>,
    on_page_change: Callback<u32>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <span class="pagination-info">{move || info.get().summary()}</span>
            <Flex gap=FlexGap::Small>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || disabled.get() || !info.get().has_previous())
                    on_click=move |_| on_page_change.run(info.get_untracked().page - 1)
                >
                    "Anterior"
                </Button>
                {move || {
                    let current = info.get().page;
                    info.get()
                        .page_numbers()
                        .into_iter()
                        .map(|n| {
                            let appearance = if n == current {
                                ButtonAppearance::Primary
                            } else {
                                ButtonAppearance::Secondary
                            };
                            view! {
                                <Button
                                    appearance=appearance
                                    disabled=disabled
                                    on_click=move |_| on_page_change.run(n)
                                >
                                    {n.to_string()}
                                </Button>
                            }
                        })
                        .collect_view()
                }}
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || disabled.get() || !info.get().has_next())
                    on_click=move |_| on_page_change.run(info.get_untracked().page + 1)
                >
                    "Próxima"
                </Button>
            </Flex>
            <span class="pagination-pages">
                {move || {
                    let info = info.get();
                    format!("(Página {} de {})", info.page, info.total_pages().max(1))
                }}
            </span>
        </div>
    }
}

/// "Itens por página" selector; any change resets the list to page 1.
#[component]
pub fn PageSizeSelect(
    #[prop(into)] per_page: Signal<u32>,
    on_change: Callback<u32>,
    options: &'static [u32],
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Itens por página:".to_string());
    view! {
        <div class="search-group">
            <label>{label}</label>
            <select
                class="page-size-select"
                prop:value=move || per_page.get().to_string()
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                        on_change.run(size);
                    }
                }
            >
                {options
                    .iter()
                    .map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || per_page.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
