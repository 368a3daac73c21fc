use serde::{Deserialize, Serialize};

use crate::domain::a001_obra::dto::ObraConsumoDto;
use crate::shared::serde_utils::null_as_default;

pub const RESOURCE: &str = "obras";

/// Row of `GET /obras`: a product with its consumption per active obra.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProdutoObrasDto {
    #[serde(default, deserialize_with = "null_as_default")]
    pub codigo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub descricao: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub estoque_atual: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub estoque_pos_obras: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub obras: Vec<ObraConsumoDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_with_obras() {
        let row: ProdutoObrasDto = serde_json::from_str(
            r#"{"codigo":"1","descricao":"Perfil","estoqueAtual":5,"estoquePosObras":-2,
                "obras":[{"_id":"o1","descricao":"Obra A","quantidade_consumida":7,"is_considered":true}]}"#,
        )
        .unwrap();
        assert_eq!(row.estoque_pos_obras, -2.0);
        assert_eq!(row.obras.len(), 1);
        assert!(row.obras[0].is_considered);
        assert_eq!(row.obras[0].quantidade_consumida, 7.0);
    }

    #[test]
    fn test_null_obras() {
        let row: ProdutoObrasDto = serde_json::from_str(r#"{"codigo":"1","obras":null}"#).unwrap();
        assert!(row.obras.is_empty());
    }
}
