use serde::{Deserialize, Serialize};

use crate::shared::serde_utils::null_as_default;

/// Obra registry collection (`/obras/all`, `/obras/{id}`...).
pub const RESOURCE: &str = "obras";

/// Value sent as `status_update` when an obra is closed.
pub const STATUS_FINISHED: &str = "finished";

/// Lifecycle of an obra: `Active -> Finished`, one-way.
///
/// Any other value the server sends is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ObraStatus {
    Active,
    Finished,
    Other(String),
}

impl ObraStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ObraStatus::Active => "active",
            ObraStatus::Finished => STATUS_FINISHED,
            ObraStatus::Other(raw) => raw,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, ObraStatus::Finished)
    }
}

impl From<String> for ObraStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "active" => ObraStatus::Active,
            STATUS_FINISHED => ObraStatus::Finished,
            _ => ObraStatus::Other(raw),
        }
    }
}

impl From<ObraStatus> for String {
    fn from(status: ObraStatus) -> Self {
        match status {
            ObraStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Obra as listed by `GET /obras/all`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObraDto {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub status: Option<ObraStatus>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_obra_futura: bool,
}

impl ObraDto {
    /// The API has used three different keys for the obra name over time.
    pub fn display_name(&self) -> &str {
        self.description
            .as_deref()
            .or(self.nome.as_deref())
            .or(self.descricao.as_deref())
            .unwrap_or_default()
    }

    pub fn can_finalize(&self) -> bool {
        !self.status.as_ref().is_some_and(ObraStatus::is_finished)
    }
}

/// Consumption of one product by one obra (sub-record of the obra screens).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObraConsumoDto {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub descricao: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantidade_consumida: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_considered: bool,
}

/// Product linked to an obra (`GET /obras/{id}/produtos`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObraProdutoDto {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub codigo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub descricao: String,
    #[serde(default)]
    pub quantidade: Option<f64>,
}

/// `/obras/{id}/produtos` answers either a bare array or `{ "items": [...] }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ObraProdutosResponse {
    List(Vec<ObraProdutoDto>),
    Page {
        #[serde(default)]
        items: Vec<ObraProdutoDto>,
    },
}

impl ObraProdutosResponse {
    pub fn into_items(self) -> Vec<ObraProdutoDto> {
        match self {
            ObraProdutosResponse::List(items) => items,
            ObraProdutosResponse::Page { items } => items,
        }
    }
}

/// Body of `PATCH /obras/{id}/is-considered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsConsideredRequest {
    pub is_considered: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obra_name_fallbacks() {
        let obra: ObraDto =
            serde_json::from_str(r#"{"_id":"1","nome":"Obra Centro","status":"active"}"#).unwrap();
        assert_eq!(obra.display_name(), "Obra Centro");
        assert_eq!(obra.status, Some(ObraStatus::Active));
        assert!(obra.can_finalize());

        let obra: ObraDto = serde_json::from_str(
            r#"{"_id":"2","description":"A","descricao":"B","status":"finished"}"#,
        )
        .unwrap();
        assert_eq!(obra.display_name(), "A");
        assert!(!obra.can_finalize());
    }

    #[test]
    fn test_unknown_status_keeps_raw_value() {
        let obra: ObraDto = serde_json::from_str(r#"{"_id":"3","status":"paused"}"#).unwrap();
        assert_eq!(obra.status, Some(ObraStatus::Other("paused".into())));
        assert_eq!(obra.status.as_ref().map(ObraStatus::as_str), Some("paused"));
        assert!(obra.can_finalize());
        assert_eq!(obra.display_name(), "");

        let back = serde_json::to_value(&obra).unwrap();
        assert_eq!(back["status"], "paused");
        let finished = serde_json::to_value(ObraStatus::Finished).unwrap();
        assert_eq!(finished, "finished");
    }

    #[test]
    fn test_null_id_and_status() {
        let obra: ObraDto =
            serde_json::from_str(r#"{"_id":null,"status":null,"nome":"Obra Norte"}"#).unwrap();
        assert_eq!(obra.id, "");
        assert_eq!(obra.status, None);
        assert!(obra.can_finalize());
    }

    #[test]
    fn test_produtos_both_shapes() {
        let list: ObraProdutosResponse =
            serde_json::from_str(r#"[{"_id":"p1","codigo":"10.1","descricao":"Perfil"}]"#).unwrap();
        assert_eq!(list.into_items().len(), 1);

        let page: ObraProdutosResponse = serde_json::from_str(
            r#"{"items":[{"_id":"p1","codigo":"10.1","descricao":"Perfil","quantidade":3}]}"#,
        )
        .unwrap();
        let items = page.into_items();
        assert_eq!(items[0].quantidade, Some(3.0));
    }

    #[test]
    fn test_is_considered_body() {
        let body = serde_json::to_string(&IsConsideredRequest { is_considered: true }).unwrap();
        assert_eq!(body, r#"{"is_considered":true}"#);
    }
}
