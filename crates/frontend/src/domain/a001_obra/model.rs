//! Obra registry calls: `/obras/all`, `/obras/{id}/produtos`.

use contracts::domain::a001_obra::dto::{
    ObraDto, ObraProdutoDto, ObraProdutosResponse, ObraStatus, RESOURCE,
};
use serde::Serialize;

use crate::shared::api_utils::ApiClient;
use crate::shared::components::table::format_quantity;
use crate::shared::components::ui::Tone;
use crate::shared::error::ApiError;
use crate::shared::list::mutations::MutableRow;

#[derive(Debug, Default, Serialize)]
struct ObraFilter {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    is_obra_futura: bool,
}

pub fn list_path(futura: bool) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(&ObraFilter {
        is_obra_futura: futura,
    })
    .map_err(|e| ApiError::Validation(e.to_string()))?;
    if qs.is_empty() {
        Ok(format!("/{RESOURCE}/all"))
    } else {
        Ok(format!("/{RESOURCE}/all?{qs}"))
    }
}

pub async fn fetch_all(api: &ApiClient, futura: bool) -> Result<Vec<ObraDto>, ApiError> {
    api.get_json::<Vec<ObraDto>>(&list_path(futura)?).await
}

pub fn produtos_path(id: &str) -> String {
    format!("/{RESOURCE}/{}/produtos", urlencoding::encode(id))
}

pub async fn fetch_produtos(api: &ApiClient, id: &str) -> Result<Vec<ObraProdutoDto>, ApiError> {
    api.get_json::<ObraProdutosResponse>(&produtos_path(id))
        .await
        .map(ObraProdutosResponse::into_items)
}

/// Row actions and the products link need ids; the first obra decides.
pub fn has_ids(obras: &[ObraDto]) -> bool {
    obras.first().is_some_and(|o| !o.id.is_empty())
}

/// What the status column shows for one obra.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusDisplay {
    Badge(&'static str, Tone),
    /// A status without a badge, shown as the server sent it.
    Raw(String),
    Missing,
}

pub fn status_display(obra: &ObraDto) -> StatusDisplay {
    if obra.is_obra_futura {
        return StatusDisplay::Badge("Obra Futura", Tone::Purple);
    }
    match &obra.status {
        Some(ObraStatus::Active) => StatusDisplay::Badge("Em andamento", Tone::Yellow),
        Some(ObraStatus::Finished) => StatusDisplay::Badge("Finalizada", Tone::Green),
        Some(ObraStatus::Other(raw)) => StatusDisplay::Raw(raw.clone()),
        None => StatusDisplay::Missing,
    }
}

/// `codigo - descricao (quantidade)`, quantity omitted when absent.
pub fn product_line(produto: &ObraProdutoDto) -> String {
    match produto.quantidade {
        Some(q) => format!("{} - {} ({})", produto.codigo, produto.descricao, format_quantity(q)),
        None => format!("{} - {}", produto.codigo, produto.descricao),
    }
}

impl MutableRow for ObraDto {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn mark_finished(&mut self) {
        self.status = Some(ObraStatus::Finished);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::mutations::{apply_mutation, RowMutation};

    fn obra(id: &str, status: Option<ObraStatus>) -> ObraDto {
        ObraDto {
            id: id.into(),
            description: Some(format!("Obra {id}")),
            nome: None,
            descricao: None,
            status,
            is_obra_futura: false,
        }
    }

    #[test]
    fn test_list_paths() {
        assert_eq!(list_path(false).unwrap(), "/obras/all");
        assert_eq!(list_path(true).unwrap(), "/obras/all?is_obra_futura=true");
        assert_eq!(produtos_path("a b"), "/obras/a%20b/produtos");
    }

    #[test]
    fn test_finalize_then_delete() {
        let mut obras = vec![obra("1", Some(ObraStatus::Active)), obra("2", Some(ObraStatus::Active))];
        apply_mutation(&mut obras, &RowMutation::Finalize { id: "1".into() });
        assert_eq!(obras[0].status, Some(ObraStatus::Finished));
        assert!(!obras[0].can_finalize());
        apply_mutation(&mut obras, &RowMutation::Delete { id: "1".into() });
        assert_eq!(obras.len(), 1);
        assert_eq!(obras[0].id, "2");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(
            status_display(&obra("1", Some(ObraStatus::Active))),
            StatusDisplay::Badge("Em andamento", Tone::Yellow)
        );
        assert_eq!(
            status_display(&obra("1", Some(ObraStatus::Finished))),
            StatusDisplay::Badge("Finalizada", Tone::Green)
        );
        assert_eq!(status_display(&obra("1", None)), StatusDisplay::Missing);
        let mut futura = obra("2", Some(ObraStatus::Active));
        futura.is_obra_futura = true;
        assert_eq!(status_display(&futura), StatusDisplay::Badge("Obra Futura", Tone::Purple));
    }

    #[test]
    fn test_unrecognized_status_is_shown_verbatim() {
        let paused = obra("3", Some(ObraStatus::Other("pausada".into())));
        assert_eq!(status_display(&paused), StatusDisplay::Raw("pausada".into()));
        assert!(paused.can_finalize());
    }

    #[test]
    fn test_has_ids_and_product_line() {
        assert!(has_ids(&[obra("1", None)]));
        assert!(!has_ids(&[obra("", None)]));
        assert!(!has_ids(&[]));
        let p = ObraProdutoDto {
            id: "p".into(),
            codigo: "10.1".into(),
            descricao: "Perfil".into(),
            quantidade: Some(3.0),
        };
        assert_eq!(product_line(&p), "10.1 - Perfil (3)");
        let p = ObraProdutoDto { quantidade: None, ..p };
        assert_eq!(product_line(&p), "10.1 - Perfil");
    }
}
