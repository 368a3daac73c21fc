//! Obra registry: every obra (or only the future ones) with finalize,
//! remove and a modal listing the linked products.

use contracts::domain::a001_obra::dto::{ObraDto, RESOURCE};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_obra::model::{fetch_all, has_ids, status_display, StatusDisplay};
use crate::domain::a001_obra::ui::products_modal::ObraProductsModal;
use crate::shared::components::ui::Badge;
use crate::shared::dialogs::{alert, confirm};
use crate::shared::icons::icon;
use crate::shared::list::mutations::{apply_mutation, execute, RowMutation};
use crate::system::auth::context::use_api;

#[component]
pub fn ObraList(#[prop(optional)] futura: bool) -> impl IntoView {
    let api = use_api();
    let obras = RwSignal::new(Vec::<ObraDto>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let selected = RwSignal::new(None::<ObraDto>);

    {
        let api = api.clone();
        spawn_local(async move {
            match fetch_all(&api, futura).await {
                Ok(items) => obras.set(items),
                Err(e) => {
                    log::warn!("obras (futura={futura}): {e}");
                    set_error.set(Some(e.to_string()));
                }
            }
            set_is_loading.set(false);
        });
    }

    let api = StoredValue::new(api);
    let mutate = Callback::new(move |mutation: RowMutation| {
        if let Some(question) = mutation.confirmation() {
            if !confirm(question) {
                return;
            }
        }
        let api = api.get_value();
        spawn_local(async move {
            match execute(&api, RESOURCE, &mutation).await {
                Ok(_) => obras.update(|rows| apply_mutation(rows, &mutation)),
                Err(e) => {
                    log::error!("{} {}: {e}", mutation.verb().as_str(), mutation.id());
                    alert(&mutation.failure_message(&e));
                }
            }
        });
    });

    let title = if futura { "Obras Futuras" } else { "Obras" };
    let with_actions = Memo::new(move |_| obras.with(|rows| has_ids(rows)));

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">{title}</h1>
            </div>
            {move || {
                if is_loading.get() {
                    return view! { <p class="loading">"Carregando obras..."</p> }.into_any();
                }
                if let Some(e) = error.get() {
                    return view! { <p class="error">{format!("Erro: {e}")}</p> }.into_any();
                }
                if obras.with(|rows| rows.is_empty()) {
                    return view! { <p class="empty">"Nenhuma obra encontrada."</p> }.into_any();
                }
                view! {
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Nome"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <Show when=move || with_actions.get()>
                                    <TableHeaderCell>"Produtos"</TableHeaderCell>
                                    <TableHeaderCell>"Ações"</TableHeaderCell>
                                </Show>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || obras.get()
                                key=|o| (o.id.clone(), o.status.clone())
                                children=move |obra| {
                                    let name = obra.display_name().to_string();
                                    let status = status_cell(&obra);
                                    view! {
                                        <TableRow>
                                            <TableCell>{name}</TableCell>
                                            <TableCell>{status}</TableCell>
                                            <Show when=move || with_actions.get()>
                                                {action_cells(obra.clone(), futura, selected, mutate)}
                                            </Show>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                }
                .into_any()
            }}
            {move || {
                selected
                    .get()
                    .map(|obra| {
                        view! {
                            <ObraProductsModal
                                obra=obra
                                on_close=Callback::new(move |_| selected.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}

fn status_cell(obra: &ObraDto) -> AnyView {
    match status_display(obra) {
        StatusDisplay::Badge(label, tone) => view! { <Badge tone=tone>{label}</Badge> }.into_any(),
        StatusDisplay::Raw(raw) => raw.into_any(),
        StatusDisplay::Missing => "—".into_any(),
    }
}

fn action_cells(
    obra: ObraDto,
    futura: bool,
    selected: RwSignal<Option<ObraDto>>,
    mutate: Callback<RowMutation>,
) -> AnyView {
    let id = obra.id.clone();
    let finalize_id = id.clone();
    let can_finalize = !futura && obra.can_finalize();
    view! {
        <TableCell>
            <Button
                appearance=ButtonAppearance::Transparent
                on_click=move |_| selected.set(Some(obra.clone()))
            >
                "Listar produtos"
            </Button>
        </TableCell>
        <TableCell>
            <Flex gap=FlexGap::Small>
                {can_finalize
                    .then(|| {
                        view! {
                            <button
                                class="icon-button"
                                title="Finalizar obra"
                                on:click=move |_| {
                                    mutate.run(RowMutation::Finalize { id: finalize_id.clone() })
                                }
                            >
                                {icon("check-circle")}
                            </button>
                        }
                    })}
                <button
                    class="icon-button icon-button--danger"
                    title="Remover obra"
                    on:click=move |_| mutate.run(RowMutation::Delete { id: id.clone() })
                >
                    {icon("trash")}
                </button>
            </Flex>
        </TableCell>
    }
    .into_any()
}
