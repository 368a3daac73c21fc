//! Clickable header cell that toggles the table's client-side sort.
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Código"
//!     field=SortField::Column("codigo")
//!     sort=Signal::derive(move || state.with(|s| s.sort.clone()))
//!     on_sort=Callback::new(move |field| state.update(|s| s.toggle_sort(field)))
//! />
//! ```

use leptos::prelude::*;
use thaw::*;

use crate::shared::list::sort::{sort_indicator, SortField, SortSpec};

#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: Signal<String>,
    field: SortField,
    #[prop(into)] sort: Signal<Option<SortSpec>>,
    on_sort: Callback<SortField>,
    #[prop(optional, default = 100.0)] min_width: f64,
) -> impl IntoView {
    let field_for_click = field.clone();
    let field_for_indicator = field.clone();

    view! {
        <TableHeaderCell resizable=true min_width=min_width class="resizable">
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| on_sort.run(field_for_click.clone())
            >
                {move || label.get()}
                <span class="table__sort-indicator">
                    {move || sort.with(|s| sort_indicator(s.as_ref(), &field_for_indicator))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
