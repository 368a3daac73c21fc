use contracts::domain::a001_obra::dto::{ObraDto, ObraProdutoDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_obra::model::{fetch_produtos, product_line};
use crate::shared::modal::Modal;
use crate::system::auth::context::use_api;

/// Products linked to one obra, loaded when the modal opens.
#[component]
pub fn ObraProductsModal(obra: ObraDto, on_close: Callback<()>) -> impl IntoView {
    let api = use_api();
    let (products, set_products) = signal(Vec::<ObraProdutoDto>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let id = obra.id.clone();
    spawn_local(async move {
        match fetch_produtos(&api, &id).await {
            Ok(items) => set_products.set(items),
            Err(e) => {
                log::warn!("produtos of obra {id}: {e}");
                set_error.set(Some(e.to_string()));
            }
        }
        set_is_loading.set(false);
    });

    let title = format!("Produtos da obra: {}", obra.display_name());

    view! {
        <Modal title=title on_close=on_close>
            {move || {
                if is_loading.get() {
                    return view! { <p>"Carregando produtos..."</p> }.into_any();
                }
                if let Some(e) = error.get() {
                    return view! { <p class="error">{format!("Erro: {e}")}</p> }.into_any();
                }
                let items = products.get();
                if items.is_empty() {
                    return view! {
                        <ul class="products-list">
                            <li>"Nenhum produto relacionado."</li>
                        </ul>
                    }
                    .into_any();
                }
                view! {
                    <ul class="products-list">
                        {items
                            .iter()
                            .map(|p| view! { <li>{product_line(p)}</li> })
                            .collect_view()}
                    </ul>
                }
                .into_any()
            }}
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Fechar"
                </Button>
            </div>
        </Modal>
    }
}
