//! Generic list screen over a paginated resource: toolbar (search, page
//! size, export), a sortable table with an optional block of dynamic
//! columns, and the pagination footer.
//!
//! Each projection screen only describes its columns in a [`ResourceSpec`];
//! loading, sequencing, sorting, local filtering and flag toggles live here.

use contracts::domain::a001_obra::dto::RESOURCE as OBRAS_RESOURCE;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use super::columns::{derive_row_columns, DynamicColumn, DYNAMIC_COLUMN_WIDTH_PX};
use super::export::ExportButtons;
use super::fetcher::{fetch_page, ListQuery, RequestSequence};
use super::filter::filter_rows;
use super::mutations::{execute, Reconcile, RowMutation};
use super::scroll_sync::{ScrollRegion, ScrollSync};
use super::search::route_search_term;
use super::sort::{sort_indicator, sorted, SortField, SortSpec};
use super::state::ListState;
use super::TableRow as ListRow;
use crate::shared::components::pagination_controls::{PageSizeSelect, PaginationControls};
use crate::shared::components::table::{format_quantity, SortableHeaderCell};
use crate::shared::components::ui::{Badge, Checkbox, Tone};
use crate::shared::config::config;
use crate::shared::debounce::Debouncer;
use crate::shared::dialogs::alert;
use crate::shared::icons::icon;
use crate::system::auth::context::use_api;

/// One scalar column.
pub struct ColumnDef<R> {
    pub label: &'static str,
    /// Appended to the label as `label (note)`, computed from the page rows.
    pub note: Option<fn(&[R]) -> String>,
    /// Wire name used for sorting.
    pub field: &'static str,
    pub render: fn(&R) -> AnyView,
    pub min_width: f64,
}

impl<R> Clone for ColumnDef<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ColumnDef<R> {}

impl<R> ColumnDef<R> {
    pub fn new(label: &'static str, field: &'static str, render: fn(&R) -> AnyView) -> Self {
        Self {
            label,
            note: None,
            field,
            render,
            min_width: 100.0,
        }
    }

    pub fn with_note(mut self, note: fn(&[R]) -> String) -> Self {
        self.note = Some(note);
        self
    }

    pub fn min_width(mut self, min_width: f64) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn header(&self, rows: &[R]) -> String {
        match self.note {
            Some(note) => format!("{} ({})", self.label, note(rows)),
            None => self.label.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// The endpoint does not filter; the loaded page is filtered as the user types.
    Local,
    /// Server filter applied `search_debounce_ms` after the last keystroke.
    ServerDebounced,
    /// Server filter applied by the "Buscar" button or Enter.
    ServerOnSubmit,
}

/// Columns derived from the sub-records of the page.
#[derive(Debug, Clone, Copy)]
pub struct DynamicBlock {
    pub max_visible: usize,
    /// Label of the per-column checkbox row; `None` hides the row.
    pub flag_row: Option<&'static str>,
    /// Badge colour of positive quantities.
    pub tone: Tone,
}

pub struct ResourceSpec<R> {
    pub resource: &'static str,
    pub title: fn(&[R]) -> String,
    /// `type` of the PDF/Excel export; `None` hides the export buttons.
    pub export_kind: Option<&'static str>,
    pub search: SearchMode,
    pub placeholder: &'static str,
    pub page_sizes: &'static [u32],
    pub leading: Vec<ColumnDef<R>>,
    pub dynamic: Option<DynamicBlock>,
    pub trailing: Vec<ColumnDef<R>>,
}

fn dynamic_cell(quantity: f64, tone: Tone) -> AnyView {
    if quantity > 0.0 {
        view! { <Badge tone=tone>{format_quantity(quantity)}</Badge> }.into_any()
    } else {
        view! { <span class="dynamic-cell--empty">"-"</span> }.into_any()
    }
}

fn dynamic_item_style() -> String {
    format!(
        "min-width: {0}px; max-width: {0}px; flex-shrink: 0;",
        DYNAMIC_COLUMN_WIDTH_PX
    )
}

fn header_cells<R: ListRow>(
    columns: &[ColumnDef<R>],
    rows: RwSignal<Vec<R>>,
    sort: Signal<Option<SortSpec>>,
    on_sort: Callback<SortField>,
) -> AnyView {
    columns
        .iter()
        .map(|col| {
            let col = *col;
            let label = Signal::derive(move || rows.with(|r| col.header(r)));
            view! {
                <SortableHeaderCell
                    label=label
                    field=SortField::Column(col.field)
                    sort=sort
                    on_sort=on_sort
                    min_width=col.min_width
                />
            }
        })
        .collect_view()
        .into_any()
}

fn body_cells<R: ListRow>(columns: &[ColumnDef<R>], row: &R) -> AnyView {
    columns
        .iter()
        .map(|col| {
            let cell = (col.render)(row);
            view! {
                <TableCell>
                    <TableCellLayout>{cell}</TableCellLayout>
                </TableCell>
            }
        })
        .collect_view()
        .into_any()
}

#[component]
pub fn ResourceTable<R>(spec: ResourceSpec<R>) -> impl IntoView
where
    R: ListRow + DeserializeOwned,
{
    let api = use_api();
    let ResourceSpec {
        resource,
        title,
        export_kind,
        search,
        placeholder,
        page_sizes,
        leading,
        dynamic,
        trailing,
    } = spec;
    let span = leading.len() + trailing.len() + usize::from(dynamic.is_some());
    let leading_span = leading.len().max(1);
    let trailing_span = trailing.len().max(1);
    let leading = StoredValue::new(leading);
    let trailing = StoredValue::new(trailing);

    let state = RwSignal::new(ListState::default());
    let rows = RwSignal::new(Vec::<R>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let search_input = RwSignal::new(String::new());
    let sequence = RequestSequence::new();
    let scroll = ScrollSync::new();

    let load = Callback::new({
        let api = api.clone();
        move |()| {
            let query = state.with_untracked(|s| {
                let filter = match search {
                    SearchMode::Local => None,
                    _ => route_search_term(&s.applied_search),
                };
                ListQuery::new(s.page, s.per_page).with_search(filter)
            });
            let ticket = sequence.issue();
            let sequence = sequence.clone();
            let api = api.clone();
            set_is_loading.set(true);
            set_error.set(None);
            spawn_local(async move {
                let result = fetch_page::<R>(&api, resource, &query).await;
                if !sequence.is_latest(ticket) {
                    log::debug!("{resource}: dropping stale page {}", query.page);
                    return;
                }
                match result {
                    Ok(page) => {
                        log::debug!("{resource}: {} of {} rows", page.items.len(), page.total);
                        state.update(|s| s.record_page(page.total));
                        rows.set(page.items);
                    }
                    Err(e) => {
                        log::warn!("{resource}: load failed: {e}");
                        state.update(|s| s.record_failure());
                        rows.set(Vec::new());
                        set_error.set(Some(e.to_string()));
                    }
                }
                set_is_loading.set(false);
            });
        }
    });

    // Page, page size and the applied server search drive the fetch.
    let query_key = Memo::new(move |_| {
        state.with(|s| (s.page, s.per_page, s.applied_search.clone()))
    });
    Effect::new(move |_| {
        query_key.track();
        load.run(());
    });

    let commit_search = move || {
        let before = query_key.get_untracked();
        state.update(|s| match search {
            SearchMode::ServerOnSubmit => s.submit_search(),
            _ => s.apply_search(),
        });
        if query_key.get_untracked() == before {
            load.run(());
        }
    };

    let debouncer = Debouncer::new(config().search_debounce_ms);
    on_cleanup({
        let debouncer = debouncer.clone();
        move || debouncer.cancel()
    });
    Effect::new(move |prev: Option<()>| {
        let term = search_input.get();
        state.update(|s| s.search_input = term);
        if prev.is_some() && search == SearchMode::ServerDebounced {
            debouncer.schedule(commit_search);
        }
    });

    let sort = Signal::derive(move || state.with(|s| s.sort.clone()));
    let visible_rows = Signal::derive(move || {
        let term = match search {
            SearchMode::Local => search_input.get(),
            _ => String::new(),
        };
        let spec = sort.get();
        rows.with(|rows| sorted(filter_rows(rows, &term), spec.as_ref()))
    });
    let columns = Memo::new(move |_| rows.with(|r| derive_row_columns(r)));
    // A new column set starts scrolled to the left.
    Effect::new(move |_| {
        columns.track();
        scroll.reset();
    });
    let column_count = Signal::derive(move || columns.with(|c| c.len()));

    let export_search = Signal::derive(move || match search {
        SearchMode::ServerOnSubmit => state.with(|s| route_search_term(&s.applied_search)),
        _ => route_search_term(&search_input.get()),
    });

    let on_sort = Callback::new(move |field: SortField| state.update(|s| s.toggle_sort(field)));
    let on_page = Callback::new(move |page: u32| state.update(|s| s.go_to(page)));
    let on_page_size = Callback::new(move |size: u32| state.update(|s| s.set_per_page(size)));

    let toggle = Callback::new({
        let api = api.clone();
        move |(id, value): (String, bool)| {
            let api = api.clone();
            let mutation = RowMutation::SetConsidered { id, value };
            spawn_local(async move {
                match execute(&api, OBRAS_RESOURCE, &mutation).await {
                    Ok(Reconcile::Refetch) => load.run(()),
                    Ok(Reconcile::Local) => {}
                    Err(e) => {
                        log::warn!("toggle {} failed: {e}", mutation.id());
                        alert(&mutation.failure_message(&e));
                    }
                }
            });
        }
    });

    let search_box = match search {
        SearchMode::ServerOnSubmit => view! {
            <form
                class="search-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    commit_search();
                }
            >
                <Flex gap=FlexGap::Small>
                    <Input value=search_input placeholder=placeholder />
                    <Button appearance=ButtonAppearance::Primary button_type=ButtonType::Submit>
                        {icon("search")}
                        " Buscar"
                    </Button>
                </Flex>
            </form>
        }
        .into_any(),
        _ => view! { <Input value=search_input placeholder=placeholder /> }.into_any(),
    };

    let flag_row = dynamic.and_then(|block| block.flag_row.map(|label| (block, label))).map(
        |(block, label)| {
            view! {
                <TableRow>
                    <TableCell attr:colspan=leading_span.to_string()>
                        <TableCellLayout>
                            <strong>{label}</strong>
                        </TableCellLayout>
                    </TableCell>
                    <TableCell>
                        <ScrollRegion sync=scroll count=column_count max_visible=block.max_visible>
                            <For
                                each=move || columns.get()
                                key=|c: &DynamicColumn| (c.label.clone(), c.flag)
                                children=move |column: DynamicColumn| {
                                    let id = column.id.clone();
                                    view! {
                                        <div class="dynamic-flag-item" style=dynamic_item_style()>
                                            <Checkbox
                                                checked=column.flag
                                                title=column.label.clone()
                                                on_change=Callback::new(move |value: bool| {
                                                    toggle.run((id.clone(), value))
                                                })
                                            />
                                        </div>
                                    }
                                }
                            />
                        </ScrollRegion>
                    </TableCell>
                    <TableCell attr:colspan=trailing_span.to_string()></TableCell>
                </TableRow>
            }
        },
    );

    let dynamic_header = dynamic.map(|block| {
        view! {
            <TableHeaderCell class="dynamic-header">
                <ScrollRegion
                    sync=scroll
                    count=column_count
                    max_visible=block.max_visible
                    show_scrollbar=true
                >
                    <For
                        each=move || columns.get()
                        key=|c: &DynamicColumn| c.label.clone()
                        children=move |column: DynamicColumn| {
                            let field = SortField::Dynamic(column.label.clone());
                            let field_for_click = field.clone();
                            view! {
                                <div
                                    class="dynamic-header-item"
                                    style=dynamic_item_style()
                                    title=column.label.clone()
                                    on:click=move |_| on_sort.run(field_for_click.clone())
                                >
                                    {column.label.clone()}
                                    <span class="table__sort-indicator">
                                        {move || sort.with(|s| sort_indicator(s.as_ref(), &field))}
                                    </span>
                                </div>
                            }
                        }
                    />
                </ScrollRegion>
            </TableHeaderCell>
        }
    });

    let body = move || {
        if let Some(err) = error.get() {
            return view! {
                <TableRow>
                    <TableCell attr:colspan=span.to_string()>
                        <TableCellLayout>
                            <div class="error-box">
                                <span>{format!("Erro ao carregar dados: {err}")}</span>
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| load.run(())
                                >
                                    {icon("refresh")}
                                    " Tentar novamente"
                                </Button>
                            </div>
                        </TableCellLayout>
                    </TableCell>
                </TableRow>
            }
            .into_any();
        }

        let data = visible_rows.get();
        if data.is_empty() {
            if is_loading.get() {
                return view! { <></> }.into_any();
            }
            return view! {
                <TableRow>
                    <TableCell attr:colspan=span.to_string()>
                        <TableCellLayout>
                            <span class="text-muted">"Nenhum item encontrado"</span>
                        </TableCellLayout>
                    </TableCell>
                </TableRow>
            }
            .into_any();
        }

        let labels: Vec<String> = columns.with(|c| c.iter().map(|c| c.label.clone()).collect());
        data.into_iter()
            .map(|row| {
                let dynamic_cells = dynamic.map(|block| {
                    let quantities: Vec<f64> =
                        labels.iter().map(|label| row.sub_quantity(label)).collect();
                    view! {
                        <TableCell>
                            <ScrollRegion sync=scroll count=column_count max_visible=block.max_visible>
                                {quantities
                                    .into_iter()
                                    .map(|q| {
                                        view! {
                                            <div class="dynamic-cell" style=dynamic_item_style()>
                                                {dynamic_cell(q, block.tone)}
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </ScrollRegion>
                        </TableCell>
                    }
                });
                view! {
                    <TableRow>
                        {leading.with_value(|cols| body_cells(cols, &row))}
                        {dynamic_cells}
                        {trailing.with_value(|cols| body_cells(cols, &row))}
                    </TableRow>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || rows.with(|r| title(r))}</h1>
                </div>
                <div class="page__header-right">
                    {export_kind.map(|kind| {
                        view! { <ExportButtons kind=kind search=export_search busy=is_loading /> }
                    })}
                </div>
            </div>

            <div class="filter-panel">
                <div class="filter-panel-content">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <PageSizeSelect
                            per_page=Signal::derive(move || state.with(|s| s.per_page))
                            on_change=on_page_size
                            options=page_sizes
                        />
                        <div class="search-group" style="min-width: 360px;">
                            <Label>"Procurar:"</Label>
                            {search_box}
                        </div>
                    </Flex>
                </div>
            </div>

            <div class="table-container" style="position: relative;">
                {move || {
                    is_loading
                        .get()
                        .then(|| {
                            view! {
                                <div class="loading-overlay">
                                    <Spinner />
                                    <span>"Carregando dados..."</span>
                                </div>
                            }
                        })
                }}
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            {flag_row}
                            <TableRow>
                                {leading.with_value(|cols| header_cells(cols, rows, sort, on_sort))}
                                {dynamic_header}
                                {trailing.with_value(|cols| header_cells(cols, rows, sort, on_sort))}
                            </TableRow>
                        </TableHeader>
                        <TableBody>{body}</TableBody>
                    </Table>
                </div>
            </div>

            <PaginationControls
                info=Signal::derive(move || state.with(|s| s.page_info()))
                on_page_change=on_page
                disabled=is_loading
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::fixtures::{row, Row};

    fn codigo(r: &Row) -> AnyView {
        r.codigo.clone().into_any()
    }

    fn first_code(rows: &[Row]) -> String {
        rows.first().map(|r| r.codigo.clone()).unwrap_or_else(|| "-".into())
    }

    #[test]
    fn test_column_header_note() {
        let plain = ColumnDef::<Row>::new("Código", "codigo", codigo);
        let noted = ColumnDef::<Row>::new("Estoque Anterior", "saldo", codigo).with_note(first_code);
        let rows = vec![row("10.1", "Perfil", None, vec![])];
        assert_eq!(plain.header(&rows), "Código");
        assert_eq!(noted.header(&rows), "Estoque Anterior (10.1)");
        assert_eq!(noted.header(&[]), "Estoque Anterior (-)");
        assert_eq!(noted.min_width(150.0).min_width, 150.0);
    }
}
