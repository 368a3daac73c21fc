//! Spreadsheet upload and the history of imported files.

use contracts::shared::page::ResourcePage;
use contracts::usecases::u501_import_spreadsheet::dto::{
    ImportStatus, ImportedFileDto, UploadFields, FILES_RESOURCE,
};

use crate::shared::api_utils::{ApiClient, Body, Verb};
use crate::shared::components::ui::Tone;
use crate::shared::date_utils::timestamp_millis;
use crate::shared::error::ApiError;
use crate::shared::list::fetcher::{fetch_page, ListQuery};
use crate::shared::list::sort::SortKey;
use crate::shared::list::TableRow;

pub const UPLOAD_PATH: &str = "/upload";

pub async fn fetch_files(
    api: &ApiClient,
    page: u32,
    per_page: u32,
) -> Result<ResourcePage<ImportedFileDto>, ApiError> {
    fetch_page(api, FILES_RESOURCE, &ListQuery::new(page, per_page)).await
}

pub fn download_path(file: &ImportedFileDto) -> String {
    format!("/{FILES_RESOURCE}/{}/download", urlencoding::encode(&file.id))
}

fn build_form(file: &web_sys::File, fields: &UploadFields) -> Result<web_sys::FormData, ApiError> {
    let browser = |e: wasm_bindgen::JsValue| ApiError::Browser(format!("{e:?}"));
    let form = web_sys::FormData::new().map_err(browser)?;
    form.append_with_blob("file", file).map_err(browser)?;
    for (name, value) in fields.form_fields() {
        form.append_with_str(name, &value).map_err(browser)?;
    }
    Ok(form)
}

/// `POST /upload` as multipart; the body of the answer is not used.
pub async fn upload(
    api: &ApiClient,
    file: &web_sys::File,
    fields: &UploadFields,
) -> Result<(), ApiError> {
    let form = build_form(file, fields)?;
    log::info!("uploading {} as {}", file.name(), fields.file_type.as_str());
    api.send(Verb::Post, UPLOAD_PATH, Body::Form(form)).await
}

/// Outcome of an upload as shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadMessage {
    Success(String),
    Failure(String),
}

impl UploadMessage {
    pub fn from_result(file_name: &str, result: &Result<(), ApiError>) -> Self {
        match result {
            Ok(()) => UploadMessage::Success(format!(
                "Sucesso! Arquivo \"{file_name}\" foi enviado e está sendo processado."
            )),
            Err(ApiError::Network(_)) => UploadMessage::Failure(
                "Erro de conexão. Verifique se o servidor está rodando.".to_string(),
            ),
            Err(e) => UploadMessage::Failure(format!(
                "Erro no upload: {}",
                e.detail().unwrap_or("Erro desconhecido")
            )),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            UploadMessage::Success(t) | UploadMessage::Failure(t) => t,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            UploadMessage::Success(_) => "upload-message success",
            UploadMessage::Failure(_) => "upload-message error",
        }
    }
}

pub fn status_tone(status: ImportStatus) -> Tone {
    match status {
        ImportStatus::Sucesso => Tone::Green,
        ImportStatus::Erro => Tone::Red,
        ImportStatus::Processando => Tone::Yellow,
        ImportStatus::Other => Tone::Blue,
    }
}

impl TableRow for ImportedFileDto {
    type Sub = std::convert::Infallible;

    fn row_key(&self) -> String {
        if self.id.is_empty() {
            format!("{}@{}", self.original_filename, self.created_at)
        } else {
            self.id.clone()
        }
    }

    fn field(&self, name: &str) -> SortKey {
        match name {
            "original_filename" => SortKey::Text(self.original_filename.clone()),
            "file_type" => SortKey::Text(self.file_type.clone()),
            "created_at" => timestamp_millis(&self.created_at)
                .map(|ms| SortKey::Number(ms as f64))
                .unwrap_or(SortKey::Missing),
            _ => SortKey::Missing,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.original_filename.as_str(), self.file_type.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::filter::filter_rows;
    use crate::shared::list::sort::{sorted, SortDirection, SortField, SortSpec};

    fn file(id: &str, name: &str, kind: &str, created_at: &str) -> ImportedFileDto {
        ImportedFileDto {
            id: id.into(),
            original_filename: name.into(),
            file_type: kind.into(),
            created_at: created_at.into(),
            status: "Sucesso".into(),
            is_downloadable: true,
        }
    }

    #[test]
    fn test_newest_first() {
        let files = vec![
            file("1", "a.xlsx", "compras", "2025-01-02T10:00:00"),
            file("2", "b.xlsx", "compras", "2025-03-01T08:00:00"),
            file("3", "c.xlsx", "compras", "2024-12-31T23:59:59"),
        ];
        let spec = SortSpec {
            field: SortField::Column("created_at"),
            direction: SortDirection::Descending,
        };
        let ids: Vec<_> = sorted(files, Some(&spec)).into_iter().map(|f| f.id).collect();
        assert_eq!(ids, vec!["2", "1", "3"]);
    }

    #[test]
    fn test_search_over_name_and_type() {
        let files = vec![
            file("1", "Obra Centro.xlsx", "obras-perfis", ""),
            file("2", "estoque.xlsx", "estoque-fisico", ""),
        ];
        assert_eq!(filter_rows(&files, "CENTRO").len(), 1);
        assert_eq!(filter_rows(&files, "fisico")[0].id, "2");
        assert_eq!(filter_rows(&files, "").len(), 2);
    }

    #[test]
    fn test_upload_messages() {
        let ok = UploadMessage::from_result("p.xlsx", &Ok(()));
        assert_eq!(
            ok.text(),
            "Sucesso! Arquivo \"p.xlsx\" foi enviado e está sendo processado."
        );
        assert_eq!(ok.class(), "upload-message success");

        let err = Err(ApiError::Status {
            status: 422,
            detail: Some("Colunas ausentes".into()),
        });
        assert_eq!(
            UploadMessage::from_result("p.xlsx", &err).text(),
            "Erro no upload: Colunas ausentes"
        );
        let err = Err(ApiError::Status { status: 500, detail: None });
        assert_eq!(
            UploadMessage::from_result("p.xlsx", &err).text(),
            "Erro no upload: Erro desconhecido"
        );
        let err = Err(ApiError::Network("offline".into()));
        assert!(matches!(
            UploadMessage::from_result("p.xlsx", &err),
            UploadMessage::Failure(_)
        ));
    }

    #[test]
    fn test_status_tones_and_download_path() {
        assert_eq!(status_tone(ImportStatus::parse("SUCESSO")), Tone::Green);
        assert_eq!(status_tone(ImportStatus::parse("erro")), Tone::Red);
        assert_eq!(status_tone(ImportStatus::parse("Processando")), Tone::Yellow);
        assert_eq!(status_tone(ImportStatus::parse("na fila")), Tone::Blue);
        assert_eq!(download_path(&file("ab 1", "x", "y", "")), "/files/ab%201/download");
    }
}
