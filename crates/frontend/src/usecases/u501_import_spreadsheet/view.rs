use contracts::usecases::u501_import_spreadsheet::dto::{
    file_stem, ImportType, ImportedFileDto, UploadFields,
};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

use super::api::{self, UploadMessage};
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::Badge;
use crate::shared::components::pagination_controls::{PageSizeSelect, PaginationControls};
use crate::shared::config::IMPORT_PAGE_SIZE_OPTIONS;
use crate::shared::date_utils::format_datetime;
use crate::shared::dialogs::alert;
use crate::shared::icons::icon;
use crate::shared::list::export::download_file;
use crate::shared::list::fetcher::RequestSequence;
use crate::shared::list::filter::filter_rows;
use crate::shared::list::TableRow;
use crate::shared::list::sort::{sorted, SortDirection, SortField, SortSpec};
use crate::shared::list::state::ListState;
use crate::shared::modal::Modal;
use crate::system::auth::context::use_api;

/// Which confirmation dialog is open before the upload goes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prompt {
    EntityName(ImportType),
    Replace,
}

fn history_state() -> ListState {
    let mut state = ListState::with_page_size(IMPORT_PAGE_SIZE_OPTIONS[0]);
    state.sort = Some(SortSpec {
        field: SortField::Column("created_at"),
        direction: SortDirection::Descending,
    });
    state
}

#[component]
pub fn ImportSpreadsheet() -> impl IntoView {
    let client = StoredValue::new(use_api());

    // upload form
    let selected_file = RwSignal::new_local(None::<web_sys::File>);
    let selected_type = RwSignal::new(String::new());
    let entity_name = RwSignal::new(String::new());
    let prompt = RwSignal::new(None::<Prompt>);
    let (is_uploading, set_is_uploading) = signal(false);
    let (message, set_message) = signal(None::<UploadMessage>);
    let file_input = NodeRef::<html::Input>::new();

    // history
    let state = RwSignal::new(history_state());
    let files = RwSignal::new(Vec::<ImportedFileDto>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (load_error, set_load_error) = signal(None::<String>);
    let sequence = RequestSequence::new();

    let load = Callback::new(move |()| {
        let (page, per_page) = state.with_untracked(|s| (s.page, s.per_page));
        let ticket = sequence.issue();
        let sequence = sequence.clone();
        let client = client.get_value();
        set_is_loading.set(true);
        set_load_error.set(None);
        spawn_local(async move {
            let result = api::fetch_files(&client, page, per_page).await;
            if !sequence.is_latest(ticket) {
                return;
            }
            match result {
                Ok(page) => {
                    state.update(|s| s.record_page(page.total));
                    files.set(page.items);
                }
                Err(e) => {
                    log::warn!("imported files: {e}");
                    state.update(|s| s.record_failure());
                    files.set(Vec::new());
                    set_load_error.set(Some(e.to_string()));
                }
            }
            set_is_loading.set(false);
        });
    });

    let page_key = Memo::new(move |_| state.with(|s| (s.page, s.per_page)));
    Effect::new(move |_| {
        page_key.track();
        load.run(());
    });

    let reset_form = move || {
        selected_file.set(None);
        selected_type.set(String::new());
        entity_name.set(String::new());
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    };

    let perform_upload = move |name: String, replace: bool| {
        let Some(file) = selected_file.get_untracked() else {
            return;
        };
        let Some(kind) = ImportType::from_wire(&selected_type.get_untracked()) else {
            return;
        };
        let fields = UploadFields::new(kind, &file.name(), &name, replace);
        let client = client.get_value();
        set_is_uploading.set(true);
        set_message.set(None);
        spawn_local(async move {
            let result = api::upload(&client, &file, &fields).await;
            if let Err(e) = &result {
                log::error!("upload of {} failed: {e}", file.name());
            }
            set_message.set(Some(UploadMessage::from_result(&file.name(), &result)));
            if result.is_ok() {
                reset_form();
                load.run(());
            }
            set_is_uploading.set(false);
        });
    };

    let on_upload = move |_| {
        let kind = ImportType::from_wire(&selected_type.get_untracked());
        let (true, Some(kind)) = (selected_file.with_untracked(Option::is_some), kind) else {
            alert("Por favor, selecione um arquivo e o tipo de importação.");
            return;
        };
        if kind.requires_entity_name() {
            prompt.set(Some(Prompt::EntityName(kind)));
        } else if kind.asks_replace() {
            prompt.set(Some(Prompt::Replace));
        } else {
            perform_upload(String::new(), false);
        }
    };

    let on_file_change = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|list| list.get(0));
        selected_file.set(file);
    };

    let close_prompt = Callback::new(move |()| {
        prompt.set(None);
        entity_name.set(String::new());
    });

    let search_term = RwSignal::new(String::new());
    let visible_files = Memo::new(move |_| {
        let sort = state.with(|s| s.sort.clone());
        search_term.with(|term| files.with(|rows| sorted(filter_rows(rows, term), sort.as_ref())))
    });

    let sort_signal = Signal::derive(move || state.with(|s| s.sort.clone()));
    let on_sort = Callback::new(move |field: SortField| state.update(|s| s.toggle_sort(field)));

    let on_download = Callback::new(move |file: ImportedFileDto| {
        let client = client.get_value();
        spawn_local(async move {
            let path = api::download_path(&file);
            if let Err(e) = download_file(&client, &path, &file.original_filename).await {
                log::error!("download of {} failed: {e}", file.original_filename);
                alert(&format!(
                    "Erro no download: {}",
                    e.detail().unwrap_or("Erro desconhecido")
                ));
            }
        });
    });

    view! {
        <div class="page import-page">
            <h1 class="page__title">"Importação"</h1>

            <section class="import-section">
                <h2>"Importar Perfis ou Obras"</h2>
                <div class="import-form">
                    <h3>"Planilha de Produtos / Obras"</h3>
                    <div class="file-input-group">
                        <input
                            type="file"
                            id="file-upload"
                            accept=".xlsx,.xls"
                            style="display: none;"
                            node_ref=file_input
                            on:change=on_file_change
                        />
                        <label for="file-upload" class="file-input-label">
                            {icon("file")}
                            " Selecionar arquivo"
                        </label>
                        <span class="file-status">
                            {move || {
                                selected_file
                                    .with(|f| f.as_ref().map(|f| f.name()))
                                    .unwrap_or_else(|| "Nenhum arquivo selecionado.".to_string())
                            }}
                        </span>
                    </div>

                    <RadioGroup value=selected_type>
                        {ImportType::all()
                            .into_iter()
                            .map(|kind| view! { <Radio value=kind.as_str() label=kind.label()/> })
                            .collect_view()}
                    </RadioGroup>

                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_upload
                        disabled=Signal::derive(move || {
                            is_uploading.get()
                                || selected_type.with(String::is_empty)
                                || selected_file.with(Option::is_none)
                        })
                    >
                        {icon("upload")}
                        {move || if is_uploading.get() { " Enviando..." } else { " Upload" }}
                    </Button>

                    {move || {
                        message
                            .get()
                            .map(|m| view! { <div class=m.class()>{m.text().to_string()}</div> })
                    }}
                </div>
            </section>

            <section class="imports-history">
                <h2>"Histórico de importações"</h2>
                <div class="filter-panel">
                    <PageSizeSelect
                        per_page=Signal::derive(move || state.with(|s| s.per_page))
                        on_change=Callback::new(move |size| state.update(|s| s.set_per_page(size)))
                        options=&IMPORT_PAGE_SIZE_OPTIONS
                        label="Exibindo"
                    />
                    <div class="search-group">
                        <label>"Procurar:"</label>
                        <Input value=search_term placeholder="Nome do arquivo ou tipo" />
                    </div>
                </div>

                {move || {
                    load_error.get().map(|err| {
                        view! {
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
                        }
                    })
                }}

                <Show
                    when=move || !(is_loading.get() && !state.with(|s| s.is_loaded))
                    fallback=|| view! { <p class="loading">"Carregando arquivos..."</p> }
                >
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell
                                    label="Arquivo"
                                    field=SortField::Column("original_filename")
                                    sort=sort_signal
                                    on_sort=on_sort
                                    min_width=240.0
                                />
                                <SortableHeaderCell
                                    label="Tipo"
                                    field=SortField::Column("file_type")
                                    sort=sort_signal
                                    on_sort=on_sort
                                />
                                <SortableHeaderCell
                                    label="Data"
                                    field=SortField::Column("created_at")
                                    sort=sort_signal
                                    on_sort=on_sort
                                    min_width=160.0
                                />
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Download"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible_files.get()
                                key=|f| f.row_key()
                                children=move |file| file_row(file, on_download)
                            />
                        </TableBody>
                    </Table>
                </Show>

                <PaginationControls
                    info=Signal::derive(move || state.with(|s| s.page_info()))
                    on_page_change=Callback::new(move |page| state.update(|s| s.go_to(page)))
                    disabled=is_loading
                />
            </section>

            {move || match prompt.get() {
                Some(Prompt::EntityName(kind)) => {
                    let suggestion = selected_file
                        .with_untracked(|f| f.as_ref().map(|f| file_stem(&f.name()).to_string()))
                        .unwrap_or_default();
                    let label = kind.entity_label();
                    view! {
                        <Modal title=format!("Nome da {label}") on_close=close_prompt>
                            <div class="form-group">
                                <Label>{format!("Nome da {label}:")}</Label>
                                <Input
                                    value=entity_name
                                    placeholder=format!("Digite o nome da {}...", label.to_lowercase())
                                />
                            </div>
                            <p class="modal-info">
                                <strong>"Atenção: "</strong>
                                "Caso este campo fique em branco, será utilizado o nome do arquivo: "
                                <em>{format!("\"{suggestion}\"")}</em>
                            </p>
                            <div class="modal-footer">
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| close_prompt.run(())
                                >
                                    "Cancelar"
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    disabled=is_uploading
                                    on_click=move |_| {
                                        prompt.set(None);
                                        perform_upload(entity_name.get_untracked(), false);
                                    }
                                >
                                    "Confirmar"
                                </Button>
                            </div>
                        </Modal>
                    }
                    .into_any()
                }
                Some(Prompt::Replace) => view! {
                    <Modal title="Substituir estoque atual" on_close=close_prompt>
                        <p>"Você deseja substituir o estoque atual?"</p>
                        <div class="modal-footer">
                            <Button
                                appearance=ButtonAppearance::Secondary
                                disabled=is_uploading
                                on_click=move |_| {
                                    prompt.set(None);
                                    perform_upload(String::new(), false);
                                }
                            >
                                "Não"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=is_uploading
                                on_click=move |_| {
                                    prompt.set(None);
                                    perform_upload(String::new(), true);
                                }
                            >
                                "Sim"
                            </Button>
                        </div>
                    </Modal>
                }
                .into_any(),
                None => ().into_any(),
            }}
        </div>
    }
}

fn file_row(file: ImportedFileDto, on_download: Callback<ImportedFileDto>) -> impl IntoView {
    let tone = api::status_tone(file.status_kind());
    let created_at = format_datetime(&file.created_at);
    let download = if file.is_downloadable {
        let file = file.clone();
        view! {
            <button
                class="download-icon-btn"
                title="Baixar arquivo"
                on:click=move |_| on_download.run(file.clone())
            >
                {icon("download")}
            </button>
        }
        .into_any()
    } else {
        view! { <span class="download-unavailable">"Download indisponível"</span> }.into_any()
    };

    view! {
        <TableRow>
            <TableCell class="file-name">{file.original_filename}</TableCell>
            <TableCell>{file.file_type}</TableCell>
            <TableCell>{created_at}</TableCell>
            <TableCell>
                <Badge tone=tone>{file.status}</Badge>
            </TableCell>
            <TableCell>{download}</TableCell>
        </TableRow>
    }
}
