use serde::{Deserialize, Serialize};

use crate::domain::a001_obra::dto::ObraConsumoDto;
use crate::shared::serde_utils::null_as_default;

pub const RESOURCE: &str = "obras-futuras";

/// Row of `GET /obras-futuras`: balances after current obras, purchases and
/// the planned (future) obras.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProdutoObrasFuturasDto {
    #[serde(default, deserialize_with = "null_as_default")]
    pub codigo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub descricao: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub estoque_atual: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub consumo_obras: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub estoque_pos_obras: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantidade_compras: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub estoque_pos_compras: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub estoque_pos_obras_futuras: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub obras_futuras: Vec<ObraConsumoDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obras_futuras_key() {
        let row: ProdutoObrasFuturasDto = serde_json::from_str(
            r#"{"codigo":"2","estoquePosObrasFuturas":-4,
                "obrasFuturas":[{"_id":"f1","descricao":"Torre B","quantidade_consumida":4}]}"#,
        )
        .unwrap();
        assert_eq!(row.estoque_pos_obras_futuras, -4.0);
        assert_eq!(row.obras_futuras[0].descricao, "Torre B");
        assert!(!row.obras_futuras[0].is_considered);
        assert_eq!(row.quantidade_compras, 0.0);
    }
}
