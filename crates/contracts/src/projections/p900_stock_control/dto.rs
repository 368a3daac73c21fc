use serde::{Deserialize, Serialize};

use crate::shared::serde_utils::null_as_default;

pub const RESOURCE: &str = "produtos-estoque";

pub const DEFAULT_DATA_ESTOQUE_ATUAL: &str = "12/11/2024";
pub const DEFAULT_DATA_ESTOQUE_ANTERIOR: &str = "11/11/2024";

/// Row of `GET /produtos-estoque`: current vs previous physical stock and the
/// projected balances after purchases and new obras.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProdutoEstoqueDto {
    #[serde(default, deserialize_with = "null_as_default")]
    pub codigo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub descricao: String,
    #[serde(default)]
    pub cor: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub estoque_atual: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub estoque_anterior: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comparacao: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub saldo_interm: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub saldo_apos_compras: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub saldo_apos_novas_obras: f64,
    #[serde(default)]
    pub data_estoque_atual: Option<String>,
    #[serde(default)]
    pub data_estoque_anterior: Option<String>,
}

impl ProdutoEstoqueDto {
    pub fn data_atual(&self) -> &str {
        non_blank(&self.data_estoque_atual).unwrap_or(DEFAULT_DATA_ESTOQUE_ATUAL)
    }

    pub fn data_anterior(&self) -> &str {
        non_blank(&self.data_estoque_anterior).unwrap_or(DEFAULT_DATA_ESTOQUE_ANTERIOR)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_row() {
        let row: ProdutoEstoqueDto = serde_json::from_str(
            r#"{"codigo":"10.2","descricao":"Perfil U","estoqueAtual":12,"estoqueAnterior":10,
                "comparacao":2,"saldoInterm":null,"saldoAposCompras":4.5,
                "dataEstoqueAtual":"20/01/2025"}"#,
        )
        .unwrap();
        assert_eq!(row.estoque_atual, 12.0);
        assert_eq!(row.saldo_interm, 0.0);
        assert_eq!(row.saldo_apos_novas_obras, 0.0);
        assert_eq!(row.saldo_apos_compras, 4.5);
        assert_eq!(row.data_atual(), "20/01/2025");
        assert_eq!(row.data_anterior(), DEFAULT_DATA_ESTOQUE_ANTERIOR);
    }

    #[test]
    fn test_blank_date_uses_default() {
        let row = ProdutoEstoqueDto {
            data_estoque_atual: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(row.data_atual(), DEFAULT_DATA_ESTOQUE_ATUAL);
    }
}
