//! Server-rendered PDF/Excel exports and file downloads.

use gloo_net::http::Response;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;
use thaw::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::search::SearchFilter;
use crate::shared::api_utils::{ensure_success, ApiClient, Body, Verb};
use crate::shared::dialogs::alert;
use crate::shared::error::ApiError;
use crate::shared::icons::icon;
use crate::system::auth::context::use_api;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Excel,
}

impl ExportFormat {
    pub fn endpoint(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "export_pdf",
            ExportFormat::Excel => "export_excel",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Excel => "xlsx",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "Erro ao gerar PDF. Tente novamente.",
            ExportFormat::Excel => "Erro ao gerar Excel. Tente novamente.",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct ExportQuery<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    codigo: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    descricao: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub format: ExportFormat,
    /// Export `type`, e.g. `produtos-estoque`.
    pub kind: &'static str,
    pub search: Option<SearchFilter>,
}

impl ExportRequest {
    pub fn path(&self) -> Result<String, ApiError> {
        let query = ExportQuery {
            kind: self.kind,
            codigo: self.search.as_ref().and_then(|s| s.codigo()),
            descricao: self.search.as_ref().and_then(|s| s.descricao()),
        };
        let qs = serde_qs::to_string(&query).map_err(|e| ApiError::Validation(e.to_string()))?;
        Ok(format!("/{}?{}", self.format.endpoint(), qs))
    }

    pub fn default_filename(&self) -> String {
        format!("{}.{}", self.kind, self.format.extension())
    }
}

/// `filename=` value of a `Content-Disposition` header, quotes stripped.
pub fn filename_from_content_disposition(header: Option<&str>, fallback: &str) -> String {
    header
        .and_then(|h| h.split_once("filename="))
        .map(|(_, rest)| rest.split(';').next().unwrap_or_default().replace('"', ""))
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Object URL plus the hidden anchor pointing at it; both are released on
/// drop, whatever path the download took.
struct DownloadGuard {
    url: String,
    anchor: Option<HtmlAnchorElement>,
}

impl Drop for DownloadGuard {
    fn drop(&mut self) {
        if let Some(anchor) = self.anchor.take() {
            anchor.remove();
        }
        if let Err(e) = Url::revoke_object_url(&self.url) {
            log::warn!("revokeObjectURL failed: {e:?}");
        }
    }
}

fn save_bytes(bytes: &[u8], content_type: Option<&str>, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let properties = BlobPropertyBag::new();
    if let Some(ct) = content_type {
        properties.set_type(ct);
    }
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;

    let mut guard = DownloadGuard {
        url: Url::create_object_url_with_blob(&blob)
            .map_err(|e| format!("Failed to create object URL: {:?}", e))?,
        anchor: None,
    };

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;
    anchor.set_href(&guard.url);
    anchor.set_download(filename);
    web_sys::HtmlElement::style(&anchor)
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    guard.anchor = Some(anchor.clone());

    anchor.click();
    Ok(())
}

async fn save_response(response: Response, filename: &str) -> Result<(), ApiError> {
    let content_type = response.headers().get("Content-Type");
    let bytes = response.binary().await?;
    save_bytes(&bytes, content_type.as_deref(), filename).map_err(ApiError::Browser)
}

pub async fn export_file(api: &ApiClient, request: &ExportRequest) -> Result<(), ApiError> {
    let response = api
        .authorized_fetch(Verb::Get, &request.path()?, Body::Empty)
        .await?;
    let response = ensure_success(response).await?;
    let filename = filename_from_content_disposition(
        response.headers().get("Content-Disposition").as_deref(),
        &request.default_filename(),
    );
    log::debug!("export {:?} -> {}", request.format, filename);
    save_response(response, &filename).await
}

/// Downloads `path` and saves it under `filename`.
pub async fn download_file(api: &ApiClient, path: &str, filename: &str) -> Result<(), ApiError> {
    let response = api.authorized_fetch(Verb::Get, path, Body::Empty).await?;
    let response = ensure_success(response).await?;
    save_response(response, filename).await
}

/// "Gerar PDF" / "Excel" buttons of a list screen.
#[component]
pub fn ExportButtons(
    /// Export `type` parameter.
    kind: &'static str,
    #[prop(into)] search: Signal<Option<SearchFilter>>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let api = use_api();
    let exporting_pdf = RwSignal::new(false);
    let exporting_excel = RwSignal::new(false);

    let run = move |format: ExportFormat, flag: RwSignal<bool>| {
        let api = api.clone();
        let request = ExportRequest {
            format,
            kind,
            search: search.get_untracked(),
        };
        flag.set(true);
        spawn_local(async move {
            if let Err(e) = export_file(&api, &request).await {
                log::warn!("export failed: {e}");
                alert(format.failure_message());
            }
            flag.set(false);
        });
    };
    let run_pdf = run.clone();
    let run_excel = run;

    view! {
        <Flex gap=FlexGap::Small>
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| run_pdf(ExportFormat::Pdf, exporting_pdf)
                disabled=Signal::derive(move || exporting_pdf.get() || busy.get())
            >
                {icon("file")}
                {move || if exporting_pdf.get() { " Gerando PDF..." } else { " Gerar PDF" }}
            </Button>
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| run_excel(ExportFormat::Excel, exporting_excel)
                disabled=Signal::derive(move || exporting_excel.get() || busy.get())
            >
                {icon("download")}
                {move || if exporting_excel.get() { " Gerando Excel..." } else { " Excel" }}
            </Button>
        </Flex>
    }
}
