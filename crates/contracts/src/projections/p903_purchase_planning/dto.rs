use serde::{Deserialize, Serialize};

use crate::shared::serde_utils::null_as_default;

pub const RESOURCE: &str = "compras";

/// One purchase order line feeding a product's balance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompraDto {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub descricao: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantidade_comprada: f64,
}

/// Row of `GET /compras`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProdutoComprasDto {
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
    pub estoque_pos_compras: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub compras: Vec<CompraDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compras_row() {
        let row: ProdutoComprasDto = serde_json::from_str(
            r#"{"codigo":"3","descricao":"Chapa","estoquePosCompras":20,
                "compras":[{"_id":"c1","descricao":"Pedido 12","quantidade_comprada":15}]}"#,
        )
        .unwrap();
        assert_eq!(row.estoque_pos_compras, 20.0);
        assert_eq!(row.compras[0].id, "c1");
        assert_eq!(row.compras[0].quantidade_comprada, 15.0);
    }
}
